use log::warn;
use serde_json::Value as Json;

use crate::decoders::{decode_cookware, decode_ingredient, decode_steps, decode_timer};
use crate::model::{Item, Recipe, Step};

/// Decode a full engine payload into the canonical recipe.
///
/// The only failure mode is the payload not being valid JSON; every
/// domain-shape irregularity inside a well-formed payload degrades to a
/// field default instead. Decoding the same text twice yields value-equal
/// recipes.
pub fn decode_recipe(json_text: &str) -> Result<Recipe, serde_json::Error> {
    let payload: Json = serde_json::from_str(json_text)?;

    let mut recipe = Recipe {
        metadata: decode_metadata(payload.get("metadata")),
        ingredients: decode_list(payload.get("ingredients"), decode_ingredient),
        cookware: decode_list(payload.get("cookware"), decode_cookware),
        timers: decode_list(payload.get("timers"), decode_timer),
        steps: decode_body(&payload),
        warnings: decode_warnings(payload.get("warnings")),
    };

    flag_dangling_references(&mut recipe);
    Ok(recipe)
}

fn decode_metadata(raw: Option<&Json>) -> std::collections::HashMap<String, String> {
    let Some(map) = raw.and_then(Json::as_object) else {
        return Default::default();
    };
    map.iter()
        .map(|(key, value)| {
            // Scalar non-strings are stringified rather than emptied so the
            // engine's value survives the reshaping.
            let value = match value {
                Json::String(s) => s.clone(),
                other => other.to_string(),
            };
            (key.clone(), value)
        })
        .collect()
}

fn decode_list<T>(raw: Option<&Json>, decode: fn(&Json) -> T) -> Vec<T> {
    raw.and_then(Json::as_array)
        .map(|entries| entries.iter().map(decode).collect())
        .unwrap_or_default()
}

/// The body arrives under `sections` or `steps` depending on the engine's
/// output mode; `sections` wins when both are present.
fn decode_body(payload: &Json) -> Vec<Step> {
    match payload.get("sections").or_else(|| payload.get("steps")) {
        Some(body) => decode_steps(body),
        None => Vec::new(),
    }
}

fn decode_warnings(raw: Option<&Json>) -> Vec<String> {
    raw.and_then(Json::as_array)
        .map(|entries| {
            entries
                .iter()
                .filter_map(Json::as_str)
                .map(ToOwned::to_owned)
                .collect()
        })
        .unwrap_or_default()
}

/// The engine guarantees that reference indices land inside their sibling
/// sequences. A payload that breaks that guarantee is kept as-is, but each
/// dangling reference is reported as a warning so the contract violation is
/// visible to callers.
fn flag_dangling_references(recipe: &mut Recipe) {
    let mut dangling = Vec::new();
    for (step_index, step) in recipe.steps.iter().enumerate() {
        for item in &step.items {
            let (kind, index, len) = match *item {
                Item::IngredientRef { index } => ("ingredient", index, recipe.ingredients.len()),
                Item::CookwareRef { index } => ("cookware", index, recipe.cookware.len()),
                Item::TimerRef { index } => ("timer", index, recipe.timers.len()),
                Item::Text { .. } => continue,
            };
            if index >= len {
                let message = format!(
                    "step {} references {} index {} but only {} were decoded",
                    step_index, kind, index, len
                );
                warn!("{}", message);
                dangling.push(message);
            }
        }
    }
    recipe.warnings.extend(dangling);
}
