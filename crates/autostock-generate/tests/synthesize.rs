use std::collections::BTreeSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use autostock_core::{
    CONDITIONS, ENGINE_SIZES, MODEL_YEARS, VehicleRecord, city_count, locations, make,
};
use autostock_generate::{FIRST_STOCK_ID, count_by_location, plan_city_quotas, synthesize};

fn generate(total: u64, seed: u64) -> Vec<VehicleRecord> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    synthesize(total, &mut rng)
}

#[test]
fn quotas_sum_to_total_and_front_load_remainder() {
    let cities = city_count() as u64;
    for total in [0, 1, 9, 45, 46, 47, 420, 1000] {
        let quotas = plan_city_quotas(total);
        assert_eq!(quotas.len() as u64, cities);
        assert_eq!(quotas.iter().map(|quota| quota.rows).sum::<u64>(), total);

        let base = total / cities;
        let extra = (total % cities) as usize;
        for (i, quota) in quotas.iter().enumerate() {
            let expected = if i < extra { base + 1 } else { base };
            assert_eq!(quota.rows, expected, "total {total}, city {}", quota.city);
        }
    }
}

#[test]
fn quotas_follow_declaration_order() {
    let quotas = plan_city_quotas(420);
    let expected: Vec<(&str, &str)> = locations()
        .iter()
        .flat_map(|province| province.cities.iter().map(move |city| (province.name, *city)))
        .collect();
    let actual: Vec<(&str, &str)> = quotas
        .iter()
        .map(|quota| (quota.province, quota.city))
        .collect();
    assert_eq!(actual, expected);
    assert_eq!(quotas[0].rows, 10);
    assert_eq!(quotas[45].rows, 9);
}

#[test]
fn produces_exactly_the_requested_count() {
    for total in [0, 5, 46, 420] {
        assert_eq!(generate(total, 1).len() as u64, total);
    }
}

#[test]
fn small_totals_fill_first_cities_only() {
    let records = generate(9, 3);
    let cities: Vec<&str> = records.iter().map(|record| record.city.as_str()).collect();
    assert_eq!(
        cities,
        vec![
            "Cape Town",
            "Stellenbosch",
            "Paarl",
            "George",
            "Worcester",
            "Johannesburg",
            "Pretoria",
            "Sandton",
            "Centurion",
        ]
    );
    let ids: Vec<u64> = records.iter().map(|record| record.stock_id).collect();
    assert_eq!(ids, (9_000_001..=9_000_009).collect::<Vec<u64>>());
}

#[test]
fn stock_ids_are_sequential_from_base() {
    let records = generate(420, 11);
    for (i, record) in records.iter().enumerate() {
        assert_eq!(record.stock_id, FIRST_STOCK_ID + i as u64);
    }
}

#[test]
fn per_city_counts_match_quota() {
    let records = generate(420, 5);
    let counts = count_by_location(&records);
    assert_eq!(counts.len(), city_count());
    assert_eq!(counts.values().sum::<u64>(), 420);
    assert_eq!(counts.get("Western Cape - Cape Town"), Some(&10));
    assert_eq!(counts.get("Northern Cape - De Aar"), Some(&9));
}

#[test]
fn catalog_fields_come_from_the_same_make() {
    for record in generate(420, 21) {
        let entry = make(&record.make).expect("known make");
        assert!(entry.models.contains(&record.model.as_str()));
        assert!(entry.variants.contains(&record.variant.as_str()));
        assert!(entry.body_types.contains(&record.body_type.as_str()));
        assert_eq!(record.franchise, entry.franchise);
        assert!(record.engine_no.starts_with(entry.engine_code));
    }
}

#[test]
fn year_drives_mileage_and_condition() {
    let mut old_conditions = BTreeSet::new();
    for record in generate(2000, 8) {
        assert!(MODEL_YEARS.contains(&record.year));
        assert!(ENGINE_SIZES.contains(&record.engine_size.as_str()));
        if record.year == 2023 {
            assert!((5_000..=30_000).contains(&record.mileage));
        } else {
            assert!((10_000..=80_000).contains(&record.mileage));
        }
        if record.year >= 2022 {
            assert_eq!(record.condition, "Excellent");
        } else {
            assert!(CONDITIONS.contains(&record.condition.as_str()));
            old_conditions.insert(record.condition.clone());
        }
    }
    assert_eq!(old_conditions.len(), CONDITIONS.len());
}

#[test]
fn price_stays_within_year_scaled_band() {
    for record in generate(1000, 13) {
        let base = make(&record.make).expect("known make").base_price as f64;
        let factor = 1.0 + f64::from(record.year - 2020) * 0.1;
        let low = (base * factor * 0.9).round() as u64;
        let high = (base * factor * 1.2).round() as u64;
        assert!(
            (low..=high).contains(&record.price),
            "price {} outside {low}..={high}",
            record.price
        );
        assert_eq!(record.price, record.first_price);
    }
}

#[test]
fn identifiers_embed_stock_id_and_location() {
    for record in generate(100, 17) {
        assert!(record.vin.ends_with(&format!("{:011}", record.stock_id)));
        assert!(record.stock_code.ends_with(&record.stock_id.to_string()));
        let year_short = format!("{:02}", record.year % 100);
        assert!(record.registration.contains(&year_short));
    }
}

#[test]
fn registrations_repeat_across_cities() {
    let records = generate(460, 2);
    let first_in_city: Vec<&VehicleRecord> = records
        .iter()
        .filter(|record| record.registration.ends_with("AAA"))
        .collect();
    // every city's first record uses index zero
    assert_eq!(first_in_city.len(), city_count());
}

#[test]
fn same_seed_same_records() {
    assert_eq!(generate(120, 99), generate(120, 99));
    assert_ne!(generate(120, 99), generate(120, 100));
}
