use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use autostock_core::{FieldValue, VehicleRecord};

use super::{DigestWriter, OutputSummary, ensure_parent_dir};

const HEADER: &str = "-- Comprehensive Vehicle Inventory for South Africa\n\
-- 400+ vehicles across all provinces and major cities\n\
DELETE FROM vehicles; -- Clear existing data first\n\n";

const INSERT_PREFIX: &str = "INSERT INTO vehicles (\n\
    \x20   used_vehicle_stock_id, year, make_name, model_name, variant_name, vin, registration,\n\
    \x20   engine_no, mileage, colour, province_name, city_name, price, first_price, franchise,\n\
    \x20   body_type, transmission, fuel_type, engine_size, stock_code, condition\n\
) VALUES\n";

const FOOTER: &str = "\n-- Verify data loaded\n\
-- SELECT COUNT(*) as total_vehicles FROM vehicles;\n\
-- SELECT province_name, city_name, COUNT(*) as count FROM vehicles GROUP BY province_name, city_name ORDER BY province_name, city_name;\n";

/// Render the full seed script: header, `DELETE`, one multi-row `INSERT`,
/// and the verification comments.
///
/// With no records the `INSERT` is left out, since `VALUES` needs at
/// least one row.
pub fn render_sql(records: &[VehicleRecord]) -> String {
    let mut sql = String::from(HEADER);

    if !records.is_empty() {
        sql.push_str(INSERT_PREFIX);
        let last = records.len() - 1;
        for (i, record) in records.iter().enumerate() {
            sql.push_str(&render_row(record));
            sql.push_str(if i < last { ",\n" } else { ";\n" });
        }
    }

    sql.push_str(FOOTER);
    sql
}

/// Write the seed script to `path`, replacing any existing file.
pub fn write_sql(path: &Path, records: &[VehicleRecord]) -> io::Result<OutputSummary> {
    ensure_parent_dir(path)?;
    let mut writer = DigestWriter::new(BufWriter::new(File::create(path)?));
    writer.write_all(render_sql(records).as_bytes())?;
    writer.finish()
}

fn render_row(record: &VehicleRecord) -> String {
    let fields: Vec<String> = record.values().iter().map(FieldValue::to_sql).collect();
    format!("({})", fields.join(", "))
}
