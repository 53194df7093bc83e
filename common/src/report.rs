use crate::error::{TokenError, TokenResult};
use crate::tokens::TokenSet;
use clap::ValueEnum;
use serde::Deserialize;

/// How a token set is written to stdout.
///
/// Names are matched case-insensitively on the command line, in config files
/// and in `TRIGRAM_FORMAT`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(try_from = "String")]
pub enum OutputFormat {
    /// `{"a", "b"}`
    #[default]
    Set,
    /// `["a","b"]`
    Json,
}

impl TryFrom<String> for OutputFormat {
    type Error = String;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Self::from_str(&name, true)
    }
}

pub fn render(tokens: &TokenSet, format: OutputFormat) -> TokenResult<String> {
    match format {
        OutputFormat::Set => Ok(tokens.to_string()),
        OutputFormat::Json => {
            let list: Vec<&str> = tokens.iter().map(String::as_str).collect();
            serde_json::to_string(&list).map_err(TokenError::Render)
        }
    }
}
