use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Canonical recipe produced by decoding engine output.
///
/// The same model is produced regardless of which output encoding the engine
/// used. All fields are value objects; a decoded recipe holds no references
/// back into the payload it came from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(default)]
    pub metadata: HashMap<String, String>,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub cookware: Vec<Cookware>,
    #[serde(default)]
    pub timers: Vec<Timer>,
    #[serde(default)]
    pub steps: Vec<Step>,
    /// Non-fatal notices, either copied from the engine report or appended
    /// by the decoder when the payload violates the engine contract.
    #[serde(default)]
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Quantity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cookware {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Quantity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Timers may be anonymous (`~{2%minutes}`), so the name is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Timer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Quantity>,
}

/// An amount attached to an ingredient, cookware item or timer.
///
/// `Quantity { value: None, unit: None }` models Cooklang's empty braces,
/// an unspecified amount. That is distinct from the entity carrying no
/// quantity at all, which is `quantity: None` on the entity itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

/// A quantity value as the engine computed it. Ranges and free text are kept
/// as their own variants and never collapsed into a single number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Number(f64),
    Range { start: f64, end: f64 },
    Text(String),
}

/// One step of the recipe body, after section flattening.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Step {
    #[serde(default)]
    pub items: Vec<Item>,
    /// Original unparsed line, when the engine supplies it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_text: Option<String>,
}

/// Inline content of a step. The reference variants hold zero-based indices
/// into the recipe's sibling `ingredients`/`cookware`/`timers` sequences
/// rather than embedded copies, so a step can never drift out of sync with
/// the canonical entity lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Item {
    #[serde(rename = "text")]
    Text { value: String },
    #[serde(rename = "ingredient")]
    IngredientRef { index: usize },
    #[serde(rename = "cookware")]
    CookwareRef { index: usize },
    #[serde(rename = "timer")]
    TimerRef { index: usize },
}
