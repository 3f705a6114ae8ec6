use std::collections::BTreeSet;

use autostock_core::{
    COLORS, ENGINE_SIZES, FieldValue, VIN_PREFIXES, VehicleRecord, base_price, catalog, city_code,
    city_count, engine_code, locations, make, province_code, validate_reference_tables,
};

fn sample_record() -> VehicleRecord {
    VehicleRecord {
        stock_id: 9_000_001,
        year: 2021,
        make: "TOYOTA".to_string(),
        model: "Hilux".to_string(),
        variant: "2.8 GD-6 4x4".to_string(),
        vin: "JTD09000001".to_string(),
        registration: "CA21AAA".to_string(),
        engine_no: "2ZR9000001".to_string(),
        mileage: 42_000,
        colour: "White".to_string(),
        province: "Western Cape".to_string(),
        city: "Cape Town".to_string(),
        price: 401_234,
        first_price: 401_234,
        franchise: "Toyota".to_string(),
        body_type: "Bakkie".to_string(),
        transmission: "Manual".to_string(),
        fuel_type: "Diesel".to_string(),
        engine_size: "2.8L".to_string(),
        stock_code: "CPT9000001".to_string(),
        condition: "Good".to_string(),
    }
}

#[test]
fn reference_tables_are_valid() {
    validate_reference_tables().expect("reference tables should validate");
}

#[test]
fn locations_keep_declaration_order() {
    let names: Vec<&str> = locations().iter().map(|province| province.name).collect();
    assert_eq!(
        names,
        vec![
            "Western Cape",
            "Gauteng",
            "KwaZulu-Natal",
            "Eastern Cape",
            "Free State",
            "Limpopo",
            "Mpumalanga",
            "North West",
            "Northern Cape",
        ]
    );
    assert_eq!(city_count(), 46);
}

#[test]
fn every_city_has_a_stock_code() {
    for province in locations() {
        for city in province.cities {
            assert!(city_code(city).is_some(), "missing code for {city}");
        }
    }
    assert_eq!(city_code("Atlantis"), None);
}

#[test]
fn every_make_has_price_and_engine_code() {
    assert_eq!(catalog().len(), 25);
    for entry in catalog() {
        assert_eq!(base_price(entry.name), Some(entry.base_price));
        assert_eq!(engine_code(entry.name), Some(entry.engine_code));
    }
    assert_eq!(make("LAND ROVER").map(|entry| entry.franchise), Some("Land Rover"));
    assert_eq!(base_price("TRABANT"), None);
}

#[test]
fn province_codes_resolve() {
    assert_eq!(province_code("Gauteng"), Some("JHB"));
    assert_eq!(province_code("Northern Cape"), Some("KIM"));
    assert_eq!(province_code("Atlantis"), None);
}

#[test]
fn fixed_lists_have_expected_sizes() {
    assert_eq!(COLORS.len(), 27);
    assert_eq!(ENGINE_SIZES.len(), 15);
    assert_eq!(VIN_PREFIXES.len(), 20);
    let unique: BTreeSet<&str> = VIN_PREFIXES.iter().copied().collect();
    assert_eq!(unique.len(), VIN_PREFIXES.len());
}

#[test]
fn values_follow_column_order() {
    let record = sample_record();
    let values = record.values();
    assert_eq!(values.len(), VehicleRecord::COLUMNS.len());
    assert_eq!(values[0], FieldValue::Int(9_000_001));
    assert_eq!(values[1], FieldValue::Int(2021));
    assert_eq!(values[2], FieldValue::Text("TOYOTA"));
    assert_eq!(values[8], FieldValue::Int(42_000));
    assert_eq!(values[12], FieldValue::Int(401_234));
    assert_eq!(values[13], FieldValue::Int(401_234));
    assert_eq!(values[19], FieldValue::Text("CPT9000001"));
    assert_eq!(values[20], FieldValue::Text("Good"));
}

#[test]
fn serialized_record_has_one_key_per_column() {
    let record = sample_record();
    let json = serde_json::to_value(&record).expect("serialize record");
    let object = json.as_object().expect("record object");
    assert_eq!(object.len(), VehicleRecord::COLUMNS.len());
}

#[test]
fn sql_literals_quote_text_only() {
    assert_eq!(FieldValue::Int(2023).to_sql(), "2023");
    assert_eq!(FieldValue::Text("Cape Town").to_sql(), "'Cape Town'");
    assert_eq!(FieldValue::Text("Cape Town").to_csv(), "Cape Town");
    assert_eq!(sample_record().location_key(), "Western Cape - Cape Town");
}
