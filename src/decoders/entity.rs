use serde_json::Value as Json;

use crate::decoders::decode_quantity;
use crate::model::{Cookware, Ingredient, Timer};

/// Decode a flat ingredient record. Never fails: missing or mistyped
/// optional fields fall back to their defaults.
pub fn decode_ingredient(raw: &Json) -> Ingredient {
    Ingredient {
        name: name_or_empty(raw),
        quantity: decode_quantity(raw.get("quantity")),
        note: optional_str(raw, "note"),
    }
}

pub fn decode_cookware(raw: &Json) -> Cookware {
    Cookware {
        name: name_or_empty(raw),
        quantity: decode_quantity(raw.get("quantity")),
        note: optional_str(raw, "note"),
    }
}

pub fn decode_timer(raw: &Json) -> Timer {
    Timer {
        name: optional_str(raw, "name"),
        quantity: decode_quantity(raw.get("quantity")),
    }
}

fn name_or_empty(raw: &Json) -> String {
    raw.get("name")
        .and_then(Json::as_str)
        .unwrap_or_default()
        .to_owned()
}

fn optional_str(raw: &Json, field: &str) -> Option<String> {
    raw.get(field)
        .and_then(Json::as_str)
        .map(ToOwned::to_owned)
}
