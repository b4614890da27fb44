use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Options forwarded to the engine on every parse call
#[derive(Debug, Deserialize, Clone)]
pub struct ParseOptions {
    /// Whether the engine should enable all Cooklang syntax extensions
    #[serde(default = "default_all_extensions")]
    pub all_extensions: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            all_extensions: default_all_extensions(),
        }
    }
}

fn default_all_extensions() -> bool {
    true
}

impl ParseOptions {
    /// Load options from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with COOKLANG__ prefix
    /// 2. cooklang.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: COOKLANG__ALL_EXTENSIONS
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("cooklang").required(false))
            .add_source(
                Environment::with_prefix("COOKLANG")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
