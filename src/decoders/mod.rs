//! Decoding of engine JSON payloads into the canonical model.
//!
//! The engine emits several structurally different encodings depending on
//! its output mode and extension configuration; every decoder here accepts
//! all of them and produces the same canonical shape. The engine owns
//! validity judgments about recipe syntax, so a missing or malformed
//! optional field degrades to its default instead of failing the whole
//! decode.

mod entity;
mod quantity;
mod recipe;
mod step;

pub use self::entity::{decode_cookware, decode_ingredient, decode_timer};
pub use self::quantity::decode_quantity;
pub use self::recipe::decode_recipe;
pub use self::step::decode_steps;
