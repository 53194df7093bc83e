use anyhow::Context;
use common::keyboard::KeyPos;
use common::{load_document, TokenSet};
use std::io::{self, Write};
use std::path::Path;
use tracing::warn;

pub fn run(input: &Path) -> anyhow::Result<()> {
    let document = load_document(input)
        .with_context(|| format!("mapping key positions from {}", input.display()))?;
    let tokens = TokenSet::from_document(&document);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut unknown = 0usize;
    for token in &tokens {
        match token.parse::<KeyPos>() {
            Ok(KeyPos { row, col }) => writeln!(out, "{}\t{},{}", token, row, col)?,
            Err(_) => {
                unknown += 1;
                writeln!(out, "{}\tunknown", token)?;
            }
        }
    }
    if unknown > 0 {
        warn!(unknown, total = tokens.len(), "tokens without a keyboard position");
    }
    Ok(())
}
