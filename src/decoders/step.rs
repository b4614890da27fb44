use log::debug;
use serde_json::Value as Json;

use crate::model::{Item, Step};

/// Decode the recipe body into a flat step sequence.
///
/// The engine emits the body in one of three encodings, and callers get the
/// same flat sequence for all of them:
/// 1. a flat list of step records;
/// 2. a list of sections, each with a `content` list of step records;
/// 3. a list of sections whose `items` entries are tagged
///    `{"type": "step", ...}` interleaved with non-step entries (section
///    headers and the like), which are dropped.
pub fn decode_steps(raw_body: &Json) -> Vec<Step> {
    let Some(entries) = raw_body.as_array() else {
        debug!("recipe body is not a list, decoding as empty: {}", raw_body);
        return Vec::new();
    };

    entries.iter().flat_map(decode_body_entry).collect()
}

/// A body entry is either a section (flattened to its steps, in order) or a
/// single step record (yielding one step).
fn decode_body_entry(entry: &Json) -> Vec<Step> {
    if let Some(content) = entry.get("content").and_then(Json::as_array) {
        return content.iter().filter_map(decode_content_entry).collect();
    }

    if let Some(items) = entry.get("items").and_then(Json::as_array) {
        // Both step records and typed sections expose `items`; a section's
        // entries are themselves tagged as steps.
        if items.iter().any(is_tagged_step) {
            return items
                .iter()
                .filter_map(step_payload)
                .map(decode_step)
                .collect();
        }
        return vec![decode_step(entry)];
    }

    if let Some(payload) = step_payload(entry) {
        return vec![decode_step(payload)];
    }

    debug!("dropping unrecognized body entry: {}", entry);
    Vec::new()
}

/// Section `content` entries are step records, possibly wrapped in a step
/// tag; anything tagged as something else (text blocks between steps) is
/// dropped.
fn decode_content_entry(entry: &Json) -> Option<Step> {
    if let Some(payload) = step_payload(entry) {
        return Some(decode_step(payload));
    }
    if entry.get("items").is_some() {
        return Some(decode_step(entry));
    }
    debug!("dropping non-step section content: {}", entry);
    None
}

fn is_tagged_step(entry: &Json) -> bool {
    step_payload(entry).is_some()
}

/// Unwrap the two step tagging conventions: internally tagged
/// `{"type": "step", "value": {...}}` (the record fields may also sit
/// inline next to the tag) and externally tagged `{"Step": {...}}`.
fn step_payload(entry: &Json) -> Option<&Json> {
    match entry.get("type").and_then(Json::as_str) {
        Some("step") => return Some(entry.get("value").unwrap_or(entry)),
        Some(_) => return None,
        None => {}
    }
    entry.get("Step")
}

fn decode_step(record: &Json) -> Step {
    let items = record
        .get("items")
        .and_then(Json::as_array)
        .map(|items| items.iter().filter_map(decode_item).collect())
        .unwrap_or_default();

    Step {
        items,
        raw_text: record
            .get("raw_text")
            .and_then(Json::as_str)
            .map(ToOwned::to_owned),
    }
}

/// Decode one inline item under either tagging convention. An item matching
/// neither convention is dropped; the rest of the step still decodes.
fn decode_item(raw: &Json) -> Option<Item> {
    if let Some(tag) = raw.get("type").and_then(Json::as_str) {
        let item = match tag {
            "text" => Item::Text {
                value: raw.get("value").and_then(Json::as_str)?.to_owned(),
            },
            "ingredient" => Item::IngredientRef {
                index: item_index(raw)?,
            },
            "cookware" => Item::CookwareRef {
                index: item_index(raw)?,
            },
            "timer" => Item::TimerRef {
                index: item_index(raw)?,
            },
            other => {
                debug!("dropping step item with unrecognized tag {:?}", other);
                return None;
            }
        };
        return Some(item);
    }

    // Externally tagged convention: {VariantName: payload}.
    let map = raw.as_object()?;
    if map.len() != 1 {
        debug!("dropping step item with unrecognized shape: {}", raw);
        return None;
    }
    let (tag, payload) = map.iter().next()?;
    let item = match tag.as_str() {
        "Text" => Item::Text {
            value: payload
                .as_str()
                .or_else(|| payload.get("value").and_then(Json::as_str))?
                .to_owned(),
        },
        "Ingredient" => Item::IngredientRef {
            index: payload_index(payload)?,
        },
        "Cookware" => Item::CookwareRef {
            index: payload_index(payload)?,
        },
        "Timer" => Item::TimerRef {
            index: payload_index(payload)?,
        },
        other => {
            debug!("dropping step item with unrecognized tag {:?}", other);
            return None;
        }
    };
    Some(item)
}

fn item_index(raw: &Json) -> Option<usize> {
    raw.get("index")
        .or_else(|| raw.get("value"))
        .and_then(Json::as_u64)
        .map(|index| index as usize)
}

fn payload_index(payload: &Json) -> Option<usize> {
    payload
        .as_u64()
        .or_else(|| payload.get("index").and_then(Json::as_u64))
        .map(|index| index as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flat_step_list() {
        let body = json!([
            { "items": [{ "type": "text", "value": "Preheat oven." }] },
            { "items": [{ "type": "ingredient", "index": 0 }] }
        ]);
        let steps = decode_steps(&body);
        assert_eq!(steps.len(), 2);
        assert_eq!(
            steps[0].items,
            vec![Item::Text {
                value: "Preheat oven.".to_owned()
            }]
        );
        assert_eq!(steps[1].items, vec![Item::IngredientRef { index: 0 }]);
    }

    #[test]
    fn test_sections_flatten_in_order() {
        let body = json!([
            {
                "name": "Dough",
                "content": [
                    { "items": [{ "type": "text", "value": "one" }] },
                    { "items": [{ "type": "text", "value": "two" }] }
                ]
            },
            {
                "name": null,
                "content": [
                    { "items": [{ "type": "text", "value": "three" }] },
                    { "items": [{ "type": "text", "value": "four" }] },
                    { "items": [{ "type": "text", "value": "five" }] }
                ]
            }
        ]);
        let steps = decode_steps(&body);
        let texts: Vec<_> = steps
            .iter()
            .flat_map(|step| &step.items)
            .map(|item| match item {
                Item::Text { value } => value.as_str(),
                other => panic!("unexpected item {:?}", other),
            })
            .collect();
        assert_eq!(texts, vec!["one", "two", "three", "four", "five"]);
    }

    #[test]
    fn test_tagged_section_items_keep_only_steps() {
        let body = json!([
            {
                "items": [
                    { "type": "heading", "value": "Assembly" },
                    { "type": "step", "value": { "items": [{ "type": "text", "value": "first" }] } },
                    { "type": "note", "value": "serve warm" },
                    { "type": "step", "value": { "items": [{ "type": "text", "value": "second" }] } }
                ]
            }
        ]);
        let steps = decode_steps(&body);
        assert_eq!(steps.len(), 2);
        assert_eq!(
            steps[0].items,
            vec![Item::Text {
                value: "first".to_owned()
            }]
        );
        assert_eq!(
            steps[1].items,
            vec![Item::Text {
                value: "second".to_owned()
            }]
        );
    }

    #[test]
    fn test_externally_tagged_content_and_items() {
        let body = json!([
            {
                "content": [
                    { "Step": { "items": [
                        { "Text": "Boil " },
                        { "Ingredient": { "index": 2 } },
                        { "Timer": { "index": 0 } }
                    ] } },
                    { "Text": "a note between steps" }
                ]
            }
        ]);
        let steps = decode_steps(&body);
        assert_eq!(steps.len(), 1);
        assert_eq!(
            steps[0].items,
            vec![
                Item::Text {
                    value: "Boil ".to_owned()
                },
                Item::IngredientRef { index: 2 },
                Item::TimerRef { index: 0 },
            ]
        );
    }

    #[test]
    fn test_unrecognized_item_dropped_without_disturbing_siblings() {
        let body = json!([
            { "items": [
                { "type": "text", "value": "before" },
                { "type": "unknown" },
                { "quantity": 3 },
                { "type": "cookware", "index": 1 }
            ] }
        ]);
        let steps = decode_steps(&body);
        assert_eq!(
            steps[0].items,
            vec![
                Item::Text {
                    value: "before".to_owned()
                },
                Item::CookwareRef { index: 1 },
            ]
        );
    }

    #[test]
    fn test_step_with_raw_text() {
        let body = json!([
            { "items": [], "raw_text": "Rest the dough overnight." }
        ]);
        let steps = decode_steps(&body);
        assert_eq!(steps[0].items, vec![]);
        assert_eq!(
            steps[0].raw_text.as_deref(),
            Some("Rest the dough overnight.")
        );
    }

    #[test]
    fn test_non_list_body_decodes_empty() {
        assert_eq!(decode_steps(&json!({"oops": true})), vec![]);
        assert_eq!(decode_steps(&json!(null)), vec![]);
    }

    #[test]
    fn test_item_index_under_value_key() {
        // Some output modes put the reference index under "value".
        let body = json!([
            { "items": [{ "type": "ingredient", "value": 3 }] }
        ]);
        let steps = decode_steps(&body);
        assert_eq!(steps[0].items, vec![Item::IngredientRef { index: 3 }]);
    }
}
