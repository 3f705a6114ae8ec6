use std::time::Instant;

use autostock_core::{VehicleRecord, validate_reference_tables};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};

use crate::errors::GenerationError;
use crate::model::{GenerateOptions, GenerationReport, OutputFormat};
use crate::output::csv::write_csv;
use crate::output::sql::write_sql;
use crate::output::{OutputSummary, ensure_parent_dir};
use crate::synth::{count_by_location, synthesize};

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub records: Vec<VehicleRecord>,
    pub report: GenerationReport,
}

/// Entry point for synthesizing and writing a vehicle inventory.
#[derive(Debug, Clone)]
pub struct GenerationEngine {
    options: GenerateOptions,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &GenerateOptions {
        &self.options
    }

    pub fn run(&self) -> Result<GenerationResult, GenerationError> {
        let start = Instant::now();
        self.check_options()?;
        validate_reference_tables()?;

        let run_id = uuid::Uuid::new_v4().to_string();
        let started_at = chrono::Utc::now().to_rfc3339();
        let seed = self.options.seed.unwrap_or_else(|| rand::rng().random());
        if self.options.seed.is_none() {
            info!(run_id = %run_id, seed, "no seed configured, drew a random one");
        }

        info!(
            run_id = %run_id,
            seed,
            total = self.options.total,
            format = %self.options.format,
            "generation started"
        );

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let records = synthesize(self.options.total, &mut rng);

        let out_path = &self.options.out_path;
        let summary = match self.write_output(&records) {
            Ok(summary) => summary,
            Err(err) => {
                warn!(run_id = %run_id, path = %out_path.display(), error = %err, "output write failed");
                return Err(err);
            }
        };
        info!(
            run_id = %run_id,
            path = %out_path.display(),
            bytes_written = summary.bytes_written,
            "output written"
        );

        let report = GenerationReport {
            run_id: run_id.clone(),
            started_at,
            seed,
            total_requested: self.options.total,
            records_generated: records.len() as u64,
            first_stock_id: records.first().map(|record| record.stock_id),
            last_stock_id: records.last().map(|record| record.stock_id),
            output_path: out_path.clone(),
            format: self.options.format,
            bytes_written: summary.bytes_written,
            output_sha256: summary.sha256,
            duration_ms: start.elapsed().as_millis() as u64,
            by_location: count_by_location(&records),
        };

        if let Some(report_path) = &self.options.report_path {
            ensure_parent_dir(report_path)?;
            std::fs::write(report_path, serde_json::to_vec_pretty(&report)?)?;
            info!(run_id = %run_id, path = %report_path.display(), "report written");
        }

        info!(
            run_id = %run_id,
            records = report.records_generated,
            duration_ms = report.duration_ms,
            "generation completed"
        );

        Ok(GenerationResult { records, report })
    }

    fn check_options(&self) -> Result<(), GenerationError> {
        if self.options.out_path.as_os_str().is_empty() {
            return Err(GenerationError::InvalidOptions(
                "output path is empty".to_string(),
            ));
        }
        if self.options.report_path.as_ref() == Some(&self.options.out_path) {
            return Err(GenerationError::InvalidOptions(
                "report path must differ from output path".to_string(),
            ));
        }
        Ok(())
    }

    fn write_output(&self, records: &[VehicleRecord]) -> Result<OutputSummary, GenerationError> {
        let path = &self.options.out_path;
        let summary = match self.options.format {
            OutputFormat::Sql => write_sql(path, records)?,
            OutputFormat::Csv => write_csv(path, records)?,
        };
        Ok(summary)
    }
}
