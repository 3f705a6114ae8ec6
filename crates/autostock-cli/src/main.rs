mod logging;
mod settings;
mod summary;

use std::path::PathBuf;

use autostock_generate::{GenerationEngine, GenerationError, OutputFormat};
use clap::{Parser, ValueEnum};
use thiserror::Error;

use logging::init_logging;
use settings::{Overrides, resolve_options};
use summary::render_summary;

#[derive(Debug, Error)]
enum CliError {
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("logging error: {0}")]
    Logging(String),
}

#[derive(Parser, Debug)]
#[command(
    name = "autostock",
    version,
    about = "Generate a fake South African used-vehicle inventory as SQL"
)]
struct Cli {
    /// Number of vehicles to generate.
    #[arg(long)]
    total: Option<u64>,
    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,
    /// Output file path.
    #[arg(long, value_name = "PATH")]
    out: Option<PathBuf>,
    /// Output format.
    #[arg(long, value_enum)]
    format: Option<FormatArg>,
    /// Write a JSON generation report to this path.
    #[arg(long, value_name = "PATH")]
    report: Option<PathBuf>,
    /// TOML file with generation options; flags take precedence.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Append JSON log lines to this file.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Sql,
    Csv,
}

impl From<FormatArg> for OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Sql => OutputFormat::Sql,
            FormatArg::Csv => OutputFormat::Csv,
        }
    }
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    let options = resolve_options(
        cli.config.as_deref(),
        Overrides {
            total: cli.total,
            seed: cli.seed,
            out: cli.out,
            format: cli.format.map(OutputFormat::from),
            report: cli.report,
        },
    )?;
    tracing::info!(
        total = options.total,
        seed = ?options.seed,
        out = %options.out_path.display(),
        "options resolved"
    );

    println!("Generating {} vehicles across South Africa...", options.total);
    let result = GenerationEngine::new(options).run()?;
    print!("{}", render_summary(&result.report));

    Ok(())
}
