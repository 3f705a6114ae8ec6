/// A province and its cities, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Province {
    pub name: &'static str,
    /// Registration plate prefix for vehicles registered in this province.
    pub code: &'static str,
    pub cities: &'static [&'static str],
}

const PROVINCES: &[Province] = &[
    Province {
        name: "Western Cape",
        code: "CA",
        cities: &["Cape Town", "Stellenbosch", "Paarl", "George", "Worcester"],
    },
    Province {
        name: "Gauteng",
        code: "JHB",
        cities: &[
            "Johannesburg",
            "Pretoria",
            "Sandton",
            "Centurion",
            "Midrand",
            "Roodepoort",
        ],
    },
    Province {
        name: "KwaZulu-Natal",
        code: "DBN",
        cities: &[
            "Durban",
            "Pietermaritzburg",
            "Richards Bay",
            "Newcastle",
            "Port Shepstone",
        ],
    },
    Province {
        name: "Eastern Cape",
        code: "PE",
        cities: &[
            "Port Elizabeth",
            "East London",
            "Mthatha",
            "Grahamstown",
            "Uitenhage",
        ],
    },
    Province {
        name: "Free State",
        code: "BFN",
        cities: &["Bloemfontein", "Welkom", "Bethlehem", "Kroonstad", "Sasolburg"],
    },
    Province {
        name: "Limpopo",
        code: "PLK",
        cities: &["Polokwane", "Tzaneen", "Mokopane", "Thohoyandou", "Musina"],
    },
    Province {
        name: "Mpumalanga",
        code: "UMT",
        cities: &["Nelspruit", "Witbank", "Middelburg", "Secunda", "Ermelo"],
    },
    Province {
        name: "North West",
        code: "RUS",
        cities: &[
            "Rustenburg",
            "Mahikeng",
            "Klerksdorp",
            "Potchefstroom",
            "Brits",
        ],
    },
    Province {
        name: "Northern Cape",
        code: "KIM",
        cities: &["Kimberley", "Upington", "Springbok", "Kuruman", "De Aar"],
    },
];

const CITY_CODES: &[(&str, &str)] = &[
    ("Cape Town", "CPT"),
    ("Stellenbosch", "STL"),
    ("Johannesburg", "JHB"),
    ("Pretoria", "PTA"),
    ("Durban", "DBN"),
    ("Port Elizabeth", "PE"),
    ("Bloemfontein", "BFN"),
    ("Polokwane", "PLK"),
    ("Nelspruit", "NLS"),
    ("Rustenburg", "RST"),
    ("Kimberley", "KIM"),
    ("Sandton", "SDN"),
    ("Centurion", "CEN"),
    ("Pietermaritzburg", "PMB"),
    ("East London", "EL"),
    ("George", "GEO"),
    ("Paarl", "PAL"),
    ("Worcester", "WOR"),
    ("Midrand", "MDR"),
    ("Roodepoort", "RDP"),
    ("Richards Bay", "RB"),
    ("Newcastle", "NEW"),
    ("Port Shepstone", "PS"),
    ("Mthatha", "MTH"),
    ("Grahamstown", "GHM"),
    ("Uitenhage", "UIT"),
    ("Welkom", "WEL"),
    ("Bethlehem", "BTH"),
    ("Kroonstad", "KRN"),
    ("Sasolburg", "SAS"),
    ("Tzaneen", "TZN"),
    ("Mokopane", "MKP"),
    ("Thohoyandou", "THO"),
    ("Musina", "MUS"),
    ("Witbank", "WIT"),
    ("Middelburg", "MID"),
    ("Secunda", "SEC"),
    ("Ermelo", "ERM"),
    ("Mahikeng", "MAH"),
    ("Klerksdorp", "KLK"),
    ("Potchefstroom", "POT"),
    ("Brits", "BRT"),
    ("Upington", "UPN"),
    ("Springbok", "SPR"),
    ("Kuruman", "KUR"),
    ("De Aar", "DAR"),
];

/// All provinces in declaration order. This order decides stock id
/// assignment and which cities receive remainder records.
pub fn locations() -> &'static [Province] {
    PROVINCES
}

/// Total number of cities across all provinces.
pub fn city_count() -> usize {
    PROVINCES.iter().map(|province| province.cities.len()).sum()
}

pub fn province_code(province: &str) -> Option<&'static str> {
    PROVINCES
        .iter()
        .find(|entry| entry.name == province)
        .map(|entry| entry.code)
}

pub fn city_code(city: &str) -> Option<&'static str> {
    CITY_CODES
        .iter()
        .find(|(name, _)| *name == city)
        .map(|(_, code)| *code)
}
