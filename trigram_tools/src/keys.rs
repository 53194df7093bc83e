use anyhow::Context;
use common::report::{render, OutputFormat};
use common::{load_document, TokenSet};
use std::io::{self, Write};
use std::path::Path;
use tracing::info;

pub fn run(input: &Path, format: OutputFormat) -> anyhow::Result<()> {
    let document = load_document(input)
        .with_context(|| format!("collecting key tokens from {}", input.display()))?;
    let tokens = TokenSet::from_document(&document);
    info!(keys = document.len(), tokens = tokens.len(), "collected key tokens");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", render(&tokens, format)?)?;
    Ok(())
}
