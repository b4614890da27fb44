//! Decodes the JSON output of an external Cooklang parsing engine into a
//! canonical, strongly-typed recipe model.
//!
//! The engine (reached through the [`Engine`] trait) owns grammar parsing,
//! extension handling and serving-size scaling. This crate never recomputes
//! quantities; it reshapes the engine's already-computed values into one
//! canonical [`Recipe`], whichever of the engine's output encodings was
//! received. Every decode call is a pure function of its input text, so
//! calls can run in parallel with no coordination.

pub mod config;
pub mod decoders;
pub mod engine;
pub mod error;
pub mod model;

use log::debug;
use std::collections::HashMap;

pub use crate::config::ParseOptions;
pub use crate::engine::Engine;
pub use crate::error::BridgeError;
pub use crate::model::{Cookware, Ingredient, Item, Quantity, Recipe, Step, Timer, Value};

/// Parse a recipe through the engine and decode it into the canonical model.
///
/// The engine's error text is passed through verbatim as
/// [`BridgeError::Engine`]; [`BridgeError::Decode`] only occurs when the
/// engine returns a success payload that is not valid JSON.
pub fn parse_recipe(
    engine: &dyn Engine,
    input: &str,
    options: &ParseOptions,
) -> Result<Recipe, BridgeError> {
    let json = engine
        .parse(input, options.all_extensions)
        .map_err(BridgeError::Engine)?;
    let recipe = decoders::decode_recipe(&json)?;
    debug!(
        "decoded recipe: {} ingredients, {} steps, {} warnings",
        recipe.ingredients.len(),
        recipe.steps.len(),
        recipe.warnings.len()
    );
    Ok(recipe)
}

/// Parse a recipe and scale it to `target_servings` before decoding.
///
/// The recipe needs a `servings` metadata field for the engine to scale
/// against; when it is missing the engine's own error surfaces unchanged.
pub fn parse_and_scale_recipe(
    engine: &dyn Engine,
    input: &str,
    target_servings: u32,
    options: &ParseOptions,
) -> Result<Recipe, BridgeError> {
    let json = engine
        .parse_and_scale(input, target_servings, options.all_extensions)
        .map_err(BridgeError::Engine)?;
    Ok(decoders::decode_recipe(&json)?)
}

/// Parse an aisle configuration file.
///
/// The engine already returns ready-to-use JSON here, so this is a pure
/// pass-through: the validated JSON text on success, the engine's error
/// text unchanged on failure. Callers needing a typed aisle model decode
/// the JSON themselves.
pub fn parse_aisle_config(engine: &dyn Engine, input: &str) -> Result<String, BridgeError> {
    engine.parse_aisle_config(input).map_err(BridgeError::Engine)
}

/// Parse a recipe and return only its ingredient list.
pub fn parse_ingredients(
    engine: &dyn Engine,
    input: &str,
    options: &ParseOptions,
) -> Result<Vec<Ingredient>, BridgeError> {
    parse_recipe(engine, input, options).map(|recipe| recipe.ingredients)
}

/// Parse a recipe and return only its cookware list.
pub fn parse_cookware(
    engine: &dyn Engine,
    input: &str,
    options: &ParseOptions,
) -> Result<Vec<Cookware>, BridgeError> {
    parse_recipe(engine, input, options).map(|recipe| recipe.cookware)
}

/// Parse a recipe and return only its metadata mapping.
pub fn parse_metadata(
    engine: &dyn Engine,
    input: &str,
    options: &ParseOptions,
) -> Result<HashMap<String, String>, BridgeError> {
    parse_recipe(engine, input, options).map(|recipe| recipe.metadata)
}
