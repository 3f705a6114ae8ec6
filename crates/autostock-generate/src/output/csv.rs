use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use autostock_core::{FieldValue, VehicleRecord};

use super::{DigestWriter, OutputSummary, ensure_parent_dir};

/// Write records as CSV with a header row of the `vehicles` column names.
pub fn write_csv(path: &Path, records: &[VehicleRecord]) -> Result<OutputSummary, csv::Error> {
    ensure_parent_dir(path)?;
    let writer = DigestWriter::new(BufWriter::new(File::create(path)?));
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    writer.write_record(VehicleRecord::COLUMNS)?;

    for record in records {
        let row: Vec<String> = record.values().iter().map(FieldValue::to_csv).collect();
        writer.write_record(&row)?;
    }

    writer.flush()?;
    let digest = writer.into_inner().map_err(|err| err.into_error())?;
    Ok(digest.finish()?)
}
