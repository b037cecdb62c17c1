//! Error types for the player widget.

use thiserror::Error;

/// Result type alias for player operations
pub type Result<T> = std::result::Result<T, PlayerError>;

/// Errors raised while driving the host audio element.
///
/// None of these reach the user. Control handlers log them and leave the
/// playback state as it was.
#[derive(Error, Debug)]
pub enum PlayerError {
    /// A slider produced a value that is not a number
    #[error("invalid {control} input: {raw:?}")]
    InvalidInput { control: &'static str, raw: String },

    /// Shipped configuration failed validation
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Shipped configuration is not valid JSON
    #[error("configuration parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The host media element refused a command
    #[error("host audio error: {0}")]
    Host(String),
}
