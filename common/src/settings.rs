use crate::error::TokenResult;
use crate::report::OutputFormat;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Input used when neither a config file, the environment nor the command line names one.
pub const DEFAULT_INPUT: &str = "./data/0.json";

/// Base name of the config file picked up from the working directory when present.
pub const DEFAULT_CONFIG_NAME: &str = "trigram_tools";

/// Environment prefix, e.g. `TRIGRAM_INPUT=./data/1.json`.
pub const ENV_PREFIX: &str = "TRIGRAM";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub input: PathBuf,
    pub format: OutputFormat,
}

impl Settings {
    /// Layer defaults, then a config file, then `TRIGRAM_*` variables.
    ///
    /// An explicit `config_file` must exist. Without one, `trigram_tools.{toml,yaml,json}`
    /// in the working directory is used if it exists.
    pub fn load(config_file: Option<&Path>) -> TokenResult<Self> {
        let file = match config_file {
            Some(path) => File::from(path),
            None => File::with_name(DEFAULT_CONFIG_NAME).required(false),
        };

        let settings: Settings = Config::builder()
            .set_default("input", DEFAULT_INPUT)?
            .set_default("format", "set")?
            .add_source(file)
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize()?;

        debug!(?settings, "settings");
        Ok(settings)
    }
}
