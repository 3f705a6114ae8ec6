use std::collections::BTreeMap;

use crate::catalog::{
    COLORS, CONDITIONS, ENGINE_SIZES, FUEL_TYPES, MODEL_YEARS, TRANSMISSIONS, VIN_PREFIXES,
    catalog,
};
use crate::error::{Error, Result};
use crate::locations::locations;

/// Check the invariants the synthesizer relies on.
///
/// Sampling picks uniformly from each list, so an empty list would leave
/// nothing to pick.
pub fn validate_reference_tables() -> Result<()> {
    let provinces = locations();
    if provinces.is_empty() {
        return Err(Error::InvalidReference("no provinces defined".to_string()));
    }

    let mut owners: BTreeMap<&str, &str> = BTreeMap::new();
    for province in provinces {
        if province.code.is_empty() {
            return Err(Error::InvalidReference(format!(
                "province '{}' has no registration code",
                province.name
            )));
        }
        if province.cities.is_empty() {
            return Err(Error::InvalidReference(format!(
                "province '{}' has no cities",
                province.name
            )));
        }
        for city in province.cities.iter().copied() {
            if let Some(previous) = owners.insert(city, province.name) {
                return Err(Error::InvalidReference(format!(
                    "city '{city}' listed under both '{previous}' and '{}'",
                    province.name
                )));
            }
        }
    }

    let makes = catalog();
    if makes.is_empty() {
        return Err(Error::InvalidReference("vehicle catalog is empty".to_string()));
    }
    for make in makes {
        for (label, values) in [
            ("models", make.models),
            ("variants", make.variants),
            ("body types", make.body_types),
        ] {
            if values.is_empty() {
                return Err(Error::InvalidReference(format!(
                    "make '{}' has no {label}",
                    make.name
                )));
            }
        }
    }

    for (label, empty) in [
        ("colors", COLORS.is_empty()),
        ("transmissions", TRANSMISSIONS.is_empty()),
        ("fuel types", FUEL_TYPES.is_empty()),
        ("conditions", CONDITIONS.is_empty()),
        ("model years", MODEL_YEARS.is_empty()),
        ("engine sizes", ENGINE_SIZES.is_empty()),
        ("vin prefixes", VIN_PREFIXES.is_empty()),
    ] {
        if empty {
            return Err(Error::InvalidReference(format!("no {label} defined")));
        }
    }

    Ok(())
}
