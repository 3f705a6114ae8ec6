use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use autostock_core::VehicleRecord;
use autostock_generate::output::sql::render_sql;
use autostock_generate::synthesize;

fn records(total: u64) -> Vec<VehicleRecord> {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    synthesize(total, &mut rng)
}

fn value_lines(sql: &str) -> Vec<&str> {
    sql.lines().filter(|line| line.starts_with('(')).collect()
}

#[test]
fn script_has_header_delete_and_footer() {
    let sql = render_sql(&records(3));
    let lines: Vec<&str> = sql.lines().collect();
    assert_eq!(lines[0], "-- Comprehensive Vehicle Inventory for South Africa");
    assert_eq!(lines[1], "-- 400+ vehicles across all provinces and major cities");
    assert_eq!(lines[2], "DELETE FROM vehicles; -- Clear existing data first");
    assert_eq!(lines[3], "");
    assert_eq!(lines[4], "INSERT INTO vehicles (");
    assert_eq!(lines[8], ") VALUES");
    assert!(sql.ends_with(
        "-- SELECT province_name, city_name, COUNT(*) as count FROM vehicles GROUP BY province_name, city_name ORDER BY province_name, city_name;\n"
    ));
    assert!(sql.contains("\n\n-- Verify data loaded\n-- SELECT COUNT(*) as total_vehicles FROM vehicles;\n"));
    assert_eq!(sql.matches("DELETE FROM vehicles;").count(), 1);
    assert_eq!(sql.matches("INSERT INTO vehicles").count(), 1);
}

#[test]
fn column_list_matches_record_field_order() {
    let sql = render_sql(&records(1));
    let start = sql.find("INSERT INTO vehicles (").expect("insert") + "INSERT INTO vehicles (".len();
    let end = sql.find(") VALUES").expect("values");
    let columns: Vec<&str> = sql[start..end]
        .split(',')
        .map(str::trim)
        .collect();
    assert_eq!(columns, VehicleRecord::COLUMNS.to_vec());
}

#[test]
fn one_tuple_per_record_with_21_fields() {
    let records = records(420);
    let sql = render_sql(&records);
    let rows = value_lines(&sql);
    assert_eq!(rows.len(), records.len());

    let last = rows.len() - 1;
    for (i, row) in rows.iter().enumerate() {
        let body = if i < last {
            row.strip_suffix("),").expect("row ends with comma")
        } else {
            row.strip_suffix(");").expect("last row ends with semicolon")
        };
        let body = body.strip_prefix('(').expect("row opens with paren");
        assert_eq!(body.split(", ").count(), 21, "row {i}: {row}");
    }
}

#[test]
fn rows_quote_text_and_leave_numbers_bare() {
    let records = records(1);
    let record = &records[0];
    let sql = render_sql(&records);
    let row = value_lines(&sql)[0];
    let expected_prefix = format!(
        "({}, {}, '{}', '{}', '{}', '{}', ",
        record.stock_id, record.year, record.make, record.model, record.variant, record.vin
    );
    assert!(row.starts_with(&expected_prefix), "{row}");
    assert!(row.contains(&format!(
        "'{}', {}, '{}', '{}', '{}', {}, {}, '{}'",
        record.engine_no,
        record.mileage,
        record.colour,
        record.province,
        record.city,
        record.price,
        record.first_price,
        record.franchise
    )));
    assert!(row.ends_with(&format!("'{}', '{}');", record.stock_code, record.condition)));
}

#[test]
fn empty_input_skips_insert() {
    let sql = render_sql(&[]);
    assert!(sql.starts_with("-- Comprehensive Vehicle Inventory for South Africa\n"));
    assert!(sql.contains("DELETE FROM vehicles;"));
    assert!(!sql.contains("INSERT INTO"));
    assert!(value_lines(&sql).is_empty());
}
