use clap::{Parser, Subcommand};
use common::report::OutputFormat;
use common::settings::Settings;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod keys;
mod patterns;
mod positions;
mod timings;

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// config file (toml, yaml or json); without it ./trigram_tools.{toml,yaml,json}
    /// is read when present, and a broken one fails every command
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// log at debug level when RUST_LOG is unset
    #[arg(short, long, global = true)]
    verbose: bool,
    /// without a subcommand, behaves like `keys` with configured defaults
    #[command(subcommand)]
    cmd: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// print the deduplicated set of comma-separated key tokens
    Keys {
        input: Option<PathBuf>,
        #[arg(long, value_enum, ignore_case = true)]
        format: Option<OutputFormat>,
    },
    /// print each key token with its keyboard row and column
    Positions { input: Option<PathBuf> },
    /// summarise recorded trigram durations
    Timings { input: Option<PathBuf> },
    /// summarise durations per finger pattern (sfb, roll, redirect, ...)
    Patterns { input: Option<PathBuf> },
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .with(filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let settings = Settings::load(cli.config.as_deref())?;
    match cli.cmd {
        None => keys::run(&settings.input, settings.format)?,
        Some(Commands::Keys { input, format }) => keys::run(
            &input.unwrap_or(settings.input),
            format.unwrap_or(settings.format),
        )?,
        Some(Commands::Positions { input }) => {
            positions::run(&input.unwrap_or(settings.input))?
        }
        Some(Commands::Timings { input }) => timings::run(&input.unwrap_or(settings.input))?,
        Some(Commands::Patterns { input }) => patterns::run(&input.unwrap_or(settings.input))?,
    }
    Ok(())
}
