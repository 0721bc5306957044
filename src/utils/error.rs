//! Error types for mediactl
//!
//! The playback controller's error taxonomy is deliberately small: engine
//! commands are fire-and-forget, unsupported capabilities degrade to no-ops,
//! and invalid inputs are clamped rather than rejected. The variants here
//! cover the few failures a caller or engine implementor can actually
//! observe.

use thiserror::Error;

/// Main error type for mediactl
#[derive(Error, Debug)]
pub enum PlayerError {
    /// The media engine rejected or failed a transport command
    #[error("Engine error: {0}")]
    Engine(String),

    /// The engine does not implement an optional capability
    #[error("Unsupported capability: {0}")]
    Unsupported(&'static str),

    /// Invalid host-supplied configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl PlayerError {
    /// Create an engine error from string
    pub fn engine<S: Into<String>>(msg: S) -> Self {
        PlayerError::Engine(msg.into())
    }
}

/// Convenience type alias for Results in mediactl
pub type Result<T> = std::result::Result<T, PlayerError>;

/// Extension trait for converting other errors to PlayerError
///
/// Intended for engine implementations wrapping platform APIs.
pub trait IntoPlayerError<T> {
    /// Convert this error into an engine error with the given context
    fn engine_err(self, context: &str) -> Result<T>;

    /// Convert this error into a configuration error with the given context
    fn config_err(self, context: &str) -> Result<T>;
}

impl<T, E: std::fmt::Display> IntoPlayerError<T> for std::result::Result<T, E> {
    fn engine_err(self, context: &str) -> Result<T> {
        self.map_err(|e| PlayerError::Engine(format!("{}: {}", context, e)))
    }

    fn config_err(self, context: &str) -> Result<T> {
        self.map_err(|e| PlayerError::Config(format!("{}: {}", context, e)))
    }
}
