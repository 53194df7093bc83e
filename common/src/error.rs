use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a trigram document and reducing its keys
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Failed to read {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {} as JSON: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("{}: expected a JSON object at the root, found {found}", .path.display())]
    NotAnObject { path: PathBuf, found: &'static str },

    #[error("Unknown key code: {0}")]
    UnknownKey(String),

    #[error("Not a trigram on the 3x10 block: {0}")]
    NotATrigram(String),

    #[error("Invalid configuration: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Failed to render output: {0}")]
    Render(#[source] serde_json::Error),
}

impl TokenError {
    /// True when the input was readable but did not hold a JSON object.
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. } | Self::NotAnObject { .. })
    }
}

/// Convenience type alias for Results using TokenError
pub type TokenResult<T> = Result<T, TokenError>;
