use anyhow::Context;
use common::load_document;
use common::timings::{collect_durations, TimingSummary};
use std::io::{self, Write};
use std::path::Path;

pub fn run(input: &Path) -> anyhow::Result<()> {
    let document = load_document(input)
        .with_context(|| format!("summarising timings from {}", input.display()))?;
    let samples = collect_durations(&document);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", TimingSummary::new(&samples))?;
    Ok(())
}
