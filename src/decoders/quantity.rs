use serde_json::Value as Json;

use crate::model::{Quantity, Value};

/// Decode a polymorphic quantity record.
///
/// Absent or null input means the entity carries no quantity at all. An
/// empty record decodes to `Quantity { value: None, unit: None }`, which is
/// Cooklang's `{}` (an unspecified amount) and must stay distinct from no
/// quantity.
pub fn decode_quantity(raw: Option<&Json>) -> Option<Quantity> {
    let raw = raw?;
    if raw.is_null() {
        return None;
    }

    // Engine modes that skip the record wrapper emit the value directly.
    if !raw.is_object() {
        return Some(Quantity {
            value: decode_value(raw),
            unit: None,
        });
    }

    Some(Quantity {
        value: raw.get("value").and_then(decode_value),
        unit: raw
            .get("unit")
            .and_then(Json::as_str)
            .map(ToOwned::to_owned),
    })
}

/// Decode the tagged value payload inside a quantity.
///
/// Recognized shapes, by engine output mode:
/// - bare literals: `3`, `"a pinch"`
/// - internally tagged: `{"type": "number", "value": 3}`,
///   `{"type": "range", "value": {"start": 1, "end": 2}}`,
///   `{"type": "text", "value": "a pinch"}`
/// - externally tagged: `{"Number": 3}`, `{"Range": {...}}`, `{"Text": "..."}`
/// - a bare `{"start": 1, "end": 2}` object
///
/// Anything else is preserved verbatim as free text so no engine output is
/// silently lost.
fn decode_value(raw: &Json) -> Option<Value> {
    match raw {
        Json::Null => None,
        Json::Number(n) => n.as_f64().map(Value::Number),
        Json::String(s) => Some(Value::Text(s.clone())),
        Json::Object(map) => {
            if let Some(range) = decode_range(raw) {
                return Some(range);
            }
            if let Some(tagged) = decode_internally_tagged(raw) {
                return Some(tagged);
            }
            // Externally tagged: a single {VariantName: payload} entry.
            if map.len() == 1 {
                if let Some((tag, payload)) = map.iter().next() {
                    match tag.as_str() {
                        "Number" | "number" => {
                            if let Some(n) = payload.as_f64() {
                                return Some(Value::Number(n));
                            }
                        }
                        "Text" | "text" => {
                            if let Some(s) = payload.as_str() {
                                return Some(Value::Text(s.to_owned()));
                            }
                        }
                        "Range" | "range" => {
                            if let Some(range) = decode_range(payload) {
                                return Some(range);
                            }
                        }
                        _ => {}
                    }
                }
            }
            Some(verbatim(raw))
        }
        other => Some(verbatim(other)),
    }
}

fn decode_internally_tagged(raw: &Json) -> Option<Value> {
    let tag = raw.get("type").and_then(Json::as_str)?;
    let payload = raw.get("value")?;
    match tag {
        "number" | "fixed" => payload.as_f64().map(Value::Number),
        "text" => payload.as_str().map(|s| Value::Text(s.to_owned())),
        "range" => decode_range(payload),
        _ => None,
    }
}

fn decode_range(raw: &Json) -> Option<Value> {
    let start = raw.get("start").and_then(Json::as_f64)?;
    let end = raw.get("end").and_then(Json::as_f64)?;
    Some(Value::Range { start, end })
}

fn verbatim(raw: &Json) -> Value {
    Value::Text(raw.to_string())
}
