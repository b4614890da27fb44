/// The external Cooklang parsing engine.
///
/// The engine owns grammar parsing, extension handling and serving-size
/// scaling; this crate only decodes what it returns. Every operation is
/// synchronous text-in/text-out: a JSON payload on success, an opaque error
/// message on failure. Error strings are surfaced to callers unchanged.
pub trait Engine: Send + Sync {
    /// Parse a Cooklang recipe into the engine's JSON output.
    fn parse(&self, input: &str, all_extensions: bool) -> Result<String, String>;

    /// Parse a recipe and scale it to a target number of servings.
    /// The recipe must carry a `servings` metadata field for the engine to
    /// scale against; otherwise the engine reports the failure itself.
    fn parse_and_scale(
        &self,
        input: &str,
        target_servings: u32,
        all_extensions: bool,
    ) -> Result<String, String>;

    /// Parse an aisle configuration file into ready-to-use JSON.
    fn parse_aisle_config(&self, input: &str) -> Result<String, String>;
}
