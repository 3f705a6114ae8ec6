use serde::{Deserialize, Serialize};

/// One synthesized inventory entry, emitted as a single `vehicles` row.
///
/// Field order matches [`VehicleRecord::COLUMNS`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleRecord {
    pub stock_id: u64,
    pub year: u16,
    pub make: String,
    pub model: String,
    pub variant: String,
    pub vin: String,
    pub registration: String,
    pub engine_no: String,
    pub mileage: u64,
    pub colour: String,
    pub province: String,
    pub city: String,
    pub price: u64,
    pub first_price: u64,
    pub franchise: String,
    pub body_type: String,
    pub transmission: String,
    pub fuel_type: String,
    pub engine_size: String,
    pub stock_code: String,
    pub condition: String,
}

/// A single column value, typed only as far as SQL literal rendering needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Int(u64),
    Text(&'a str),
}

impl FieldValue<'_> {
    /// Render as a SQL literal. Text is single-quoted without escaping:
    /// every text value comes from the static reference tables.
    pub fn to_sql(&self) -> String {
        match self {
            FieldValue::Int(value) => value.to_string(),
            FieldValue::Text(value) => format!("'{value}'"),
        }
    }

    pub fn to_csv(&self) -> String {
        match self {
            FieldValue::Int(value) => value.to_string(),
            FieldValue::Text(value) => (*value).to_string(),
        }
    }
}

impl VehicleRecord {
    /// Column names of the target `vehicles` table, in field order.
    pub const COLUMNS: [&'static str; 21] = [
        "used_vehicle_stock_id",
        "year",
        "make_name",
        "model_name",
        "variant_name",
        "vin",
        "registration",
        "engine_no",
        "mileage",
        "colour",
        "province_name",
        "city_name",
        "price",
        "first_price",
        "franchise",
        "body_type",
        "transmission",
        "fuel_type",
        "engine_size",
        "stock_code",
        "condition",
    ];

    pub fn values(&self) -> [FieldValue<'_>; 21] {
        [
            FieldValue::Int(self.stock_id),
            FieldValue::Int(u64::from(self.year)),
            FieldValue::Text(&self.make),
            FieldValue::Text(&self.model),
            FieldValue::Text(&self.variant),
            FieldValue::Text(&self.vin),
            FieldValue::Text(&self.registration),
            FieldValue::Text(&self.engine_no),
            FieldValue::Int(self.mileage),
            FieldValue::Text(&self.colour),
            FieldValue::Text(&self.province),
            FieldValue::Text(&self.city),
            FieldValue::Int(self.price),
            FieldValue::Int(self.first_price),
            FieldValue::Text(&self.franchise),
            FieldValue::Text(&self.body_type),
            FieldValue::Text(&self.transmission),
            FieldValue::Text(&self.fuel_type),
            FieldValue::Text(&self.engine_size),
            FieldValue::Text(&self.stock_code),
            FieldValue::Text(&self.condition),
        ]
    }

    /// Key used to group records in location summaries.
    pub fn location_key(&self) -> String {
        format!("{} - {}", self.province, self.city)
    }
}
