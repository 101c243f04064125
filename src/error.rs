// ABOUTME: Error types shared by the draft, submission, listing and remote layers
// ABOUTME: Each variant carries an actionable message for the terminal front end

use thiserror::Error;

pub type Result<T> = std::result::Result<T, HireError>;

#[derive(Debug, Error)]
pub enum HireError {
    /// Client-local validation failure; never reaches the network.
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("You must be logged in to do that. Store a token with `him token set <TOKEN>`")]
    Unauthenticated,

    #[error("Request failed with status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected response: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
