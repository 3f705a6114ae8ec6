//! Identifier formatting for synthesized vehicles.
//!
//! Lookups that miss fall back to a default code instead of failing.

use autostock_core::{VIN_PREFIXES, city_code, engine_code, province_code};
use rand::Rng;

use crate::synth::pick;

/// Registration and stock-code prefix for unknown provinces and cities.
pub const FALLBACK_REGION_CODE: &str = "ZA";
/// Engine number prefix for unknown makes.
pub const FALLBACK_ENGINE_CODE: &str = "ENG";

const VIN_SUFFIX_LEN: usize = 11;

/// Random manufacturer prefix followed by the last 11 digits of the
/// zero-padded stock id.
pub fn generate_vin<R: Rng + ?Sized>(stock_id: u64, rng: &mut R) -> String {
    let prefix = *pick(VIN_PREFIXES, rng);
    let padded = format!("{stock_id:011}");
    let suffix = &padded[padded.len() - VIN_SUFFIX_LEN..];
    format!("{prefix}{suffix}")
}

/// Province code, two-digit year, then three letters from `index` in
/// base 26, least significant digit first.
///
/// `index` restarts for every city, so plates repeat across cities.
pub fn generate_registration(province: &str, year: u16, index: u64) -> String {
    let code = province_code(province).unwrap_or(FALLBACK_REGION_CODE);
    let year_short = year % 100;
    format!(
        "{code}{year_short:02}{}{}{}",
        letter(index),
        letter(index / 26),
        letter(index / 676)
    )
}

pub fn generate_engine_no(make: &str, stock_id: u64) -> String {
    let code = engine_code(make).unwrap_or(FALLBACK_ENGINE_CODE);
    format!("{code}{stock_id:06}")
}

/// City code followed by `index` padded to at least three digits. Wider
/// values are kept whole.
pub fn generate_stock_code(city: &str, index: u64) -> String {
    let code = city_code(city).unwrap_or(FALLBACK_REGION_CODE);
    format!("{code}{index:03}")
}

fn letter(value: u64) -> char {
    // value % 26 always fits in a u8
    char::from(b'A' + (value % 26) as u8)
}
