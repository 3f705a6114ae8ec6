use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// File name written when no output path is configured.
pub const DEFAULT_OUTPUT_FILE: &str = "comprehensive-vehicles-400.sql";
/// Number of records generated when no total is configured.
pub const DEFAULT_TOTAL: u64 = 420;

/// Output file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Sql,
    Csv,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Sql => f.write_str("sql"),
            OutputFormat::Csv => f.write_str("csv"),
        }
    }
}

/// Options for the generation engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerateOptions {
    /// Number of records to synthesize.
    pub total: u64,
    /// RNG seed. A random seed is drawn (and reported) when absent.
    pub seed: Option<u64>,
    /// Destination file for the generated records.
    pub out_path: PathBuf,
    pub format: OutputFormat,
    /// Optional path for a JSON generation report.
    pub report_path: Option<PathBuf>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            total: DEFAULT_TOTAL,
            seed: None,
            out_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            format: OutputFormat::Sql,
            report_path: None,
        }
    }
}

/// Report for a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub run_id: String,
    pub started_at: String,
    pub seed: u64,
    pub total_requested: u64,
    pub records_generated: u64,
    pub first_stock_id: Option<u64>,
    pub last_stock_id: Option<u64>,
    pub output_path: PathBuf,
    pub format: OutputFormat,
    pub bytes_written: u64,
    pub output_sha256: String,
    pub duration_ms: u64,
    pub by_location: BTreeMap<String, u64>,
}
