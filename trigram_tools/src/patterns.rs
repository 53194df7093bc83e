use anyhow::Context;
use common::load_document;
use common::patterns::PatternStats;
use std::io::{self, Write};
use std::path::Path;
use tracing::info;

pub fn run(input: &Path) -> anyhow::Result<()> {
    let document = load_document(input)
        .with_context(|| format!("classifying trigrams from {}", input.display()))?;
    let stats = PatternStats::from_document(&document);
    info!(
        keys = document.len(),
        skipped = stats.skipped,
        "classified trigrams"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write!(out, "{}", stats)?;
    Ok(())
}
