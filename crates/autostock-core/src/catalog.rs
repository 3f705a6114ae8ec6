/// Catalog entry for a vehicle make.
///
/// Models, variants and body types are sampled independently, so any model
/// may be paired with any variant or body type of the same make.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VehicleMake {
    pub name: &'static str,
    pub models: &'static [&'static str],
    pub variants: &'static [&'static str],
    pub body_types: &'static [&'static str],
    pub franchise: &'static str,
    /// Anchor price in rand for a 2020 model year.
    pub base_price: u64,
    /// Prefix for generated engine numbers.
    pub engine_code: &'static str,
}

const MAKES: &[VehicleMake] = &[
    VehicleMake {
        name: "TOYOTA",
        models: &[
            "Corolla",
            "Hilux",
            "RAV4",
            "Fortuner",
            "Yaris",
            "Camry",
            "Prado",
            "C-HR",
            "Quantum",
            "Avanza",
            "Corolla Cross",
            "Starlet",
        ],
        variants: &[
            "1.8 XS CVT",
            "2.4 GD-6 RB",
            "2.0 GX CVT",
            "2.8 GD-6 4x4",
            "1.5 XS",
            "2.5 XS",
            "3.0 DT VX",
            "1.2T Plus",
            "2.8 SLWB",
            "1.5 SX",
            "1.8 XS",
            "1.4 Xi",
        ],
        body_types: &["Sedan", "Bakkie", "SUV", "Hatchback", "Bus", "MPV"],
        franchise: "Toyota",
        base_price: 350_000,
        engine_code: "2ZR",
    },
    VehicleMake {
        name: "BMW",
        models: &[
            "3 Series", "X3", "5 Series", "X1", "X5", "1 Series", "X7", "2 Series", "4 Series",
            "X2",
        ],
        variants: &[
            "320i M Sport",
            "xDrive20d M Sport",
            "520d M Sport",
            "sDrive20i M Sport",
            "xDrive30d M Sport",
            "118i M Sport",
            "xDrive40i M Sport",
            "220i M Sport",
            "420i M Sport",
            "sDrive18i M Sport",
        ],
        body_types: &["Sedan", "SUV", "Hatchback", "Coupe"],
        franchise: "BMW",
        base_price: 650_000,
        engine_code: "B48",
    },
    VehicleMake {
        name: "MERCEDES-BENZ",
        models: &[
            "C-Class", "GLC", "E-Class", "A-Class", "GLE", "B-Class", "CLA", "GLA", "S-Class",
            "GLB",
        ],
        variants: &[
            "C200 AMG Line",
            "GLC220d AMG",
            "E200 AMG Line",
            "A200 AMG Line",
            "GLE350d AMG",
            "B200 AMG Line",
            "CLA200 AMG Line",
            "GLA200 AMG Line",
            "S400d AMG Line",
            "GLB200 AMG Line",
        ],
        body_types: &["Sedan", "SUV", "Hatchback", "Coupe"],
        franchise: "Mercedes-Benz",
        base_price: 700_000,
        engine_code: "M264",
    },
    VehicleMake {
        name: "VOLKSWAGEN",
        models: &[
            "Polo",
            "Golf",
            "Tiguan",
            "Passat",
            "Amarok",
            "T-Cross",
            "Polo Vivo",
            "T-Roc",
            "Touareg",
            "Arteon",
        ],
        variants: &[
            "1.0 TSI Comfortline",
            "2.0 TSI GTI",
            "2.0 TSI 4Motion",
            "2.0 TDI Elegance",
            "3.0 TDI Highline",
            "1.0 TSI Comfortline",
            "1.4 Comfortline",
            "2.0 TSI Design",
            "3.0 TDI Luxury",
            "2.0 TSI Elegance",
        ],
        body_types: &["Hatchback", "SUV", "Sedan", "Bakkie"],
        franchise: "Volkswagen",
        base_price: 350_000,
        engine_code: "04E",
    },
    VehicleMake {
        name: "FORD",
        models: &[
            "Ranger",
            "Everest",
            "Fiesta",
            "Focus",
            "Kuga",
            "Mustang",
            "EcoSport",
            "Figo",
            "Territory",
            "Puma",
        ],
        variants: &[
            "3.2 Wildtrak 4x4",
            "2.0 Bi-Turbo XLT",
            "1.0 EcoBoost Titanium",
            "1.5 EcoBoost Titanium",
            "1.5 EcoBoost Ambiente",
            "5.0 GT Fastback",
            "1.0 EcoBoost Titanium",
            "1.5 Titanium",
            "1.5 Turbo Titanium",
            "1.0 EcoBoost ST-Line",
        ],
        body_types: &["Bakkie", "SUV", "Hatchback", "Sedan", "Coupe"],
        franchise: "Ford",
        base_price: 400_000,
        engine_code: "M2D",
    },
    VehicleMake {
        name: "AUDI",
        models: &["A3", "Q3", "A4", "Q5", "A6", "Q7", "A1", "Q2", "A5", "Q8"],
        variants: &[
            "1.4 TFSI S tronic",
            "35 TFSI S tronic",
            "35 TFSI S tronic",
            "40 TDI quattro",
            "40 TDI S tronic",
            "45 TDI quattro",
            "30 TFSI S tronic",
            "35 TFSI S tronic",
            "40 TFSI S tronic",
            "45 TDI quattro",
        ],
        body_types: &["Sedan", "SUV", "Hatchback"],
        franchise: "Audi",
        base_price: 550_000,
        engine_code: "CZC",
    },
    VehicleMake {
        name: "HONDA",
        models: &[
            "Civic", "HR-V", "Jazz", "Ballade", "CR-V", "Accord", "Brio", "WR-V",
        ],
        variants: &[
            "1.5T Sport",
            "1.8 Elegance CVT",
            "1.5 Elegance CVT",
            "1.5 Elegance CVT",
            "2.0 Comfort CVT",
            "2.0 Elegance",
            "1.2 Comfort",
            "1.2 Elegance",
        ],
        body_types: &["Sedan", "SUV", "Hatchback"],
        franchise: "Honda",
        base_price: 350_000,
        engine_code: "L15B",
    },
    VehicleMake {
        name: "NISSAN",
        models: &[
            "Qashqai", "X-Trail", "Micra", "Navara", "Magnite", "Almera", "NP200", "NP300",
        ],
        variants: &[
            "1.5 dCi Acenta",
            "2.5 Tekna 4x4",
            "0.9T Acenta Plus",
            "2.3D LE 4x4",
            "1.0T Acenta Plus",
            "1.5 Acenta Plus",
            "1.6i Pack",
            "2.5 LE 4x4",
        ],
        body_types: &["SUV", "Hatchback", "Bakkie", "Sedan"],
        franchise: "Nissan",
        base_price: 320_000,
        engine_code: "HR12",
    },
    VehicleMake {
        name: "HYUNDAI",
        models: &[
            "Tucson",
            "Creta",
            "i20",
            "Venue",
            "Grand i10",
            "Palisade",
            "Kona",
            "Elantra",
        ],
        variants: &[
            "2.0 Executive",
            "1.5 Executive",
            "1.2 Motion",
            "1.0T Fluid",
            "1.2 Motion",
            "2.2D Elite",
            "2.0 Executive",
            "1.6 Executive",
        ],
        body_types: &["SUV", "Hatchback", "Sedan"],
        franchise: "Hyundai",
        base_price: 300_000,
        engine_code: "G4NA",
    },
    VehicleMake {
        name: "KIA",
        models: &[
            "Sportage", "Seltos", "Picanto", "Sonet", "Rio", "Sorento", "Stonic", "Cerato",
        ],
        variants: &[
            "2.0 Ignite",
            "1.6 EX",
            "1.2 Style",
            "1.5 EX",
            "1.4 TEC",
            "2.2D SX",
            "1.0T Street",
            "1.6 EX",
        ],
        body_types: &["SUV", "Hatchback", "Sedan"],
        franchise: "Kia",
        base_price: 300_000,
        engine_code: "G4NA",
    },
    VehicleMake {
        name: "MAZDA",
        models: &["CX-5", "CX-3", "2", "CX-30", "3", "CX-9", "BT-50"],
        variants: &[
            "2.0 Active",
            "2.0 Dynamic",
            "1.5 Dynamic",
            "2.0 Active",
            "2.0 Astina",
            "2.5T Azami",
            "3.0 SLE 4x4",
        ],
        body_types: &["SUV", "Hatchback", "Sedan", "Bakkie"],
        franchise: "Mazda",
        base_price: 350_000,
        engine_code: "PE",
    },
    VehicleMake {
        name: "ISUZU",
        models: &["D-Max", "MU-X", "KB"],
        variants: &["3.0 V-Cross 4x4", "3.0 4x4", "2.5 LX 4x4"],
        body_types: &["Bakkie", "SUV"],
        franchise: "Isuzu",
        base_price: 450_000,
        engine_code: "4JJ1",
    },
    VehicleMake {
        name: "CHEVROLET",
        models: &["Trailblazer", "Utility"],
        variants: &["2.8 LTZ 4x4", "1.4 Club"],
        body_types: &["SUV", "Bakkie"],
        franchise: "Chevrolet",
        base_price: 500_000,
        engine_code: "LWH",
    },
    VehicleMake {
        name: "RENAULT",
        models: &["Kwid", "Clio", "Duster", "Captur", "Triber", "Kiger"],
        variants: &[
            "1.0 Dynamique",
            "1.2T Expression",
            "1.5 dCi Dynamique",
            "1.2T Dynamique",
            "1.0 Dynamique",
            "1.0 Zen",
        ],
        body_types: &["Hatchback", "SUV", "MPV"],
        franchise: "Renault",
        base_price: 200_000,
        engine_code: "SCe",
    },
    VehicleMake {
        name: "MITSUBISHI",
        models: &["ASX", "Triton", "Pajero Sport", "Outlander"],
        variants: &["2.0 GL CVT", "2.4 DI-D 4x4", "2.4 DI-D 4x4", "2.4 GLS CVT"],
        body_types: &["SUV", "Bakkie"],
        franchise: "Mitsubishi",
        base_price: 400_000,
        engine_code: "4N15",
    },
    VehicleMake {
        name: "SUBARU",
        models: &["Forester", "Outback", "XV", "WRX"],
        variants: &["2.0i-S ES CVT", "2.5i-S CVT", "2.0i CVT", "2.0 Premium"],
        body_types: &["SUV", "Sedan"],
        franchise: "Subaru",
        base_price: 450_000,
        engine_code: "FB20",
    },
    VehicleMake {
        name: "JEEP",
        models: &["Compass", "Wrangler", "Grand Cherokee", "Renegade"],
        variants: &[
            "2.4 Limited CVT",
            "3.6 Unlimited Sahara",
            "3.6 Limited",
            "1.4T Longitude",
        ],
        body_types: &["SUV"],
        franchise: "Jeep",
        base_price: 550_000,
        engine_code: "2.4L",
    },
    VehicleMake {
        name: "JAGUAR",
        models: &["XE", "F-PACE", "E-PACE", "XF"],
        variants: &[
            "P200 R-Dynamic S",
            "P250 R-Dynamic S",
            "P200 R-Dynamic S",
            "P250 R-Dynamic S",
        ],
        body_types: &["Sedan", "SUV"],
        franchise: "Jaguar",
        base_price: 700_000,
        engine_code: "AJ20",
    },
    VehicleMake {
        name: "LAND ROVER",
        models: &[
            "Discovery Sport",
            "Range Rover Evoque",
            "Discovery",
            "Defender",
        ],
        variants: &["P200 R-Dynamic S", "P200 R-Dynamic S", "P300 S", "P300 S"],
        body_types: &["SUV"],
        franchise: "Land Rover",
        base_price: 800_000,
        engine_code: "AJ20",
    },
    VehicleMake {
        name: "SUZUKI",
        models: &["Swift", "Vitara", "Baleno", "Ertiga", "Jimny", "S-Presso"],
        variants: &["1.2 GL", "1.6 GL+", "1.4 GL", "1.5 GL", "1.5 GLX", "1.0 GL+"],
        body_types: &["Hatchback", "SUV", "MPV"],
        franchise: "Suzuki",
        base_price: 220_000,
        engine_code: "K12M",
    },
    VehicleMake {
        name: "HAVAL",
        models: &["Jolion", "H6", "H2"],
        variants: &["1.5T Luxury", "2.0T Luxury", "1.5T Luxury"],
        body_types: &["SUV"],
        franchise: "Haval",
        base_price: 350_000,
        engine_code: "GW4",
    },
    VehicleMake {
        name: "GWM",
        models: &["P-Series", "Steed"],
        variants: &["2.0TD Lux 4x4", "2.0TD Lux 4x4"],
        body_types: &["Bakkie"],
        franchise: "GWM",
        base_price: 400_000,
        engine_code: "GW4",
    },
    VehicleMake {
        name: "MAHINDRA",
        models: &["Pik Up", "Scorpio", "XUV500"],
        variants: &["2.2 S10", "2.2 Pik Up", "2.2 W8"],
        body_types: &["Bakkie", "SUV"],
        franchise: "Mahindra",
        base_price: 380_000,
        engine_code: "mHawk",
    },
    VehicleMake {
        name: "PEUGEOT",
        models: &["208", "2008", "3008", "5008"],
        variants: &["1.2T Active", "1.2T Active", "1.6T Active", "1.6T Active"],
        body_types: &["Hatchback", "SUV"],
        franchise: "Peugeot",
        base_price: 300_000,
        engine_code: "EB2",
    },
    VehicleMake {
        name: "CITROEN",
        models: &["C3", "C3 Aircross", "C5 Aircross"],
        variants: &["1.2T Feel", "1.2T Feel", "1.6T Feel"],
        body_types: &["Hatchback", "SUV"],
        franchise: "Citroen",
        base_price: 300_000,
        engine_code: "EB2",
    },
];

pub const COLORS: &[&str] = &[
    "White",
    "Silver",
    "Black",
    "Grey",
    "Blue",
    "Red",
    "Beige",
    "Brown",
    "Green",
    "Orange",
    "Pearl White",
    "Metallic Silver",
    "Jet Black",
    "Graphite Grey",
    "Midnight Blue",
    "Ruby Red",
    "Champagne",
    "Bronze",
    "Emerald Green",
    "Sunset Orange",
    "Alpine White",
    "Storm Bay",
    "Obsidian Black",
    "Selenite Grey",
    "Polar White",
    "Brilliant Blue",
    "Candy White",
];

pub const TRANSMISSIONS: &[&str] = &["Manual", "Automatic", "CVT"];

pub const FUEL_TYPES: &[&str] = &["Petrol", "Diesel"];

/// Conditions reachable for vehicles older than 2022. Newer stock is
/// always `Excellent`.
pub const CONDITIONS: &[&str] = &["Excellent", "Good", "Fair"];

pub const MODEL_YEARS: &[u16] = &[2020, 2021, 2022, 2023];

pub const ENGINE_SIZES: &[&str] = &[
    "1.0L", "1.2L", "1.4L", "1.5L", "1.6L", "1.8L", "2.0L", "2.2L", "2.4L", "2.5L", "2.8L",
    "3.0L", "3.2L", "3.6L", "5.0L",
];

/// World manufacturer identifier prefixes used for fake VINs.
pub const VIN_PREFIXES: &[&str] = &[
    "JTD", "WBA", "WDD", "WVW", "WF0", "WAU", "JHM", "SJN", "KMH", "KNA", "JM3", "MPA", "LGW",
    "MA3", "MMB", "JF2", "ZAC", "SAJ", "SAL", "JSA",
];

/// All makes in declaration order.
pub fn catalog() -> &'static [VehicleMake] {
    MAKES
}

pub fn make(name: &str) -> Option<&'static VehicleMake> {
    MAKES.iter().find(|entry| entry.name == name)
}

pub fn base_price(make_name: &str) -> Option<u64> {
    make(make_name).map(|entry| entry.base_price)
}

pub fn engine_code(make_name: &str) -> Option<&'static str> {
    make(make_name).map(|entry| entry.engine_code)
}
