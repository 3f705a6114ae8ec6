//! Reference tables and record types for Autostock.
//!
//! Everything here is static, immutable configuration: the South African
//! location table, the vehicle catalog, and the code tables used to derive
//! identifiers. The generation crate samples from these tables.

pub mod catalog;
pub mod error;
pub mod locations;
pub mod record;
pub mod validation;

pub use catalog::{
    COLORS, CONDITIONS, ENGINE_SIZES, FUEL_TYPES, MODEL_YEARS, TRANSMISSIONS, VIN_PREFIXES,
    VehicleMake, base_price, catalog, engine_code, make,
};
pub use error::{Error, Result};
pub use locations::{Province, city_code, city_count, locations, province_code};
pub use record::{FieldValue, VehicleRecord};
pub use validation::validate_reference_tables;
