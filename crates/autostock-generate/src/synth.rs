use std::collections::BTreeMap;

use autostock_core::{
    COLORS, CONDITIONS, ENGINE_SIZES, FUEL_TYPES, MODEL_YEARS, TRANSMISSIONS, VehicleRecord,
    base_price, catalog,
};
use rand::Rng;
use tracing::debug;

use crate::identifiers::{
    generate_engine_no, generate_registration, generate_stock_code, generate_vin,
};
use crate::planner::plan_city_quotas;

/// Stock id of the first synthesized record.
pub const FIRST_STOCK_ID: u64 = 9_000_001;

/// Base price used when a make has no price entry.
pub const DEFAULT_BASE_PRICE: u64 = 300_000;

const BASE_YEAR: u16 = 2020;
const NEWEST_YEAR: u16 = 2023;
const FULL_CONDITION_FROM: u16 = 2022;
const PRICE_STEP_PER_YEAR: f64 = 0.1;

/// Produce exactly `total` records, in province, city, then in-city order.
///
/// Stock ids climb by one per record starting at [`FIRST_STOCK_ID`].
pub fn synthesize<R: Rng + ?Sized>(total: u64, rng: &mut R) -> Vec<VehicleRecord> {
    let mut records = Vec::with_capacity(total as usize);
    let mut stock_id = FIRST_STOCK_ID;

    for quota in plan_city_quotas(total) {
        debug!(
            province = quota.province,
            city = quota.city,
            rows = quota.rows,
            "synthesizing city"
        );
        for index in 0..quota.rows {
            records.push(synthesize_record(
                quota.province,
                quota.city,
                index,
                stock_id,
                rng,
            ));
            stock_id += 1;
        }
    }

    records
}

fn synthesize_record<R: Rng + ?Sized>(
    province: &str,
    city: &str,
    index: u64,
    stock_id: u64,
    rng: &mut R,
) -> VehicleRecord {
    let make = pick(catalog(), rng);
    let model = *pick(make.models, rng);
    let variant = *pick(make.variants, rng);
    let body_type = *pick(make.body_types, rng);

    let year = *pick(MODEL_YEARS, rng);
    let mileage = if year < NEWEST_YEAR {
        rng.random_range(10_000..=80_000)
    } else {
        rng.random_range(5_000..=30_000)
    };
    let colour = *pick(COLORS, rng);
    let transmission = *pick(TRANSMISSIONS, rng);
    let fuel_type = *pick(FUEL_TYPES, rng);
    let condition = if year < FULL_CONDITION_FROM {
        *pick(CONDITIONS, rng)
    } else {
        "Excellent"
    };

    let base = base_price(make.name).unwrap_or(DEFAULT_BASE_PRICE);
    let price = sample_price(base, year, rng);
    let engine_size = *pick(ENGINE_SIZES, rng);

    VehicleRecord {
        stock_id,
        year,
        make: make.name.to_string(),
        model: model.to_string(),
        variant: variant.to_string(),
        vin: generate_vin(stock_id, rng),
        registration: generate_registration(province, year, index),
        engine_no: generate_engine_no(make.name, stock_id),
        mileage,
        colour: colour.to_string(),
        province: province.to_string(),
        city: city.to_string(),
        price,
        first_price: price,
        franchise: make.franchise.to_string(),
        body_type: body_type.to_string(),
        transmission: transmission.to_string(),
        fuel_type: fuel_type.to_string(),
        engine_size: engine_size.to_string(),
        // keyed by the global stock id, not the in-city index
        stock_code: generate_stock_code(city, stock_id),
        condition: condition.to_string(),
    }
}

/// `round(base * (1 + (year - 2020) * 0.1) * U(0.9, 1.2))`.
fn sample_price<R: Rng + ?Sized>(base: u64, year: u16, rng: &mut R) -> u64 {
    let year_factor = 1.0 + (f64::from(year) - f64::from(BASE_YEAR)) * PRICE_STEP_PER_YEAR;
    let jitter: f64 = rng.random_range(0.9..=1.2);
    (base as f64 * year_factor * jitter).round() as u64
}

/// Uniform pick from a non-empty table.
pub(crate) fn pick<'a, T, R: Rng + ?Sized>(values: &'a [T], rng: &mut R) -> &'a T {
    &values[rng.random_range(0..values.len())]
}

/// Record counts keyed by `"Province - City"`, sorted by key.
pub fn count_by_location(records: &[VehicleRecord]) -> BTreeMap<String, u64> {
    let mut counts = BTreeMap::new();
    for record in records {
        *counts.entry(record.location_key()).or_insert(0) += 1;
    }
    counts
}
