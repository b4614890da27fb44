use thiserror::Error;

/// Errors that can occur when parsing a recipe through the engine
#[derive(Error, Debug)]
pub enum BridgeError {
    /// The engine rejected the input. The message is the engine's own error
    /// text, passed through verbatim and never rewritten by this layer.
    #[error("{0}")]
    Engine(String),

    /// The engine's success payload was not valid JSON. This is a contract
    /// violation between the engine and this layer; well-behaved engines
    /// never trigger it.
    #[error("Failed to decode engine payload: {0}")]
    Decode(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
