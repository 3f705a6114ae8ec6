use autostock_core::{city_count, locations};

/// Number of records assigned to one city.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityQuota {
    pub province: &'static str,
    pub city: &'static str,
    pub rows: u64,
}

/// Spread `total` records over every city in declaration order.
///
/// Each city gets `total / cities`. The first `total % cities` cities get
/// one extra. Cities with a zero quota stay in the plan.
pub fn plan_city_quotas(total: u64) -> Vec<CityQuota> {
    let cities = city_count() as u64;
    if cities == 0 {
        return Vec::new();
    }

    let per_city = total / cities;
    let extra = total % cities;

    let mut quotas = Vec::with_capacity(cities as usize);
    let mut city_index = 0_u64;
    for province in locations() {
        for city in province.cities.iter().copied() {
            let rows = if city_index < extra {
                per_city + 1
            } else {
                per_city
            };
            quotas.push(CityQuota {
                province: province.name,
                city,
                rows,
            });
            city_index += 1;
        }
    }

    quotas
}
