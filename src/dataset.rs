//! Embedded trade figures and read-only queries over them.
//!
//! The data is a compile-time constant: every accessor is a linear scan over a
//! few dozen records and works without any UI or storage set up.

use crate::models::{
    Bloc, BlocSummary, Commodities, Commodity, Country, MonthlySeries, Region, RegionSummary,
    TradeData,
};

#[allow(clippy::too_many_arguments)]
const fn country(
    name: &'static str,
    code: &'static str,
    export: f64,
    import: f64,
    region: Region,
    bloc: Bloc,
    yoy_change: f64,
    mom_change: f64,
    lat: f64,
    lng: f64,
) -> Country {
    Country {
        name,
        code,
        export,
        import,
        region,
        bloc,
        yoy_change,
        mom_change,
        lat,
        lng,
    }
}

const fn commodity(name: &'static str, value: f64, code: &'static str) -> Commodity {
    Commodity { name, value, code }
}

use Bloc::*;
use Region::*;

static COUNTRIES: [Country; 22] = [
    country("United States", "USA", 44.8, 13.9, NorthAmerica, Usmca, 5.2, 2.1, 37.09, -95.71),
    country("Japan", "JPN", 14.2, 14.2, Asia, Rcep, -1.5, 0.8, 36.20, 138.25),
    country("South Korea", "KOR", 12.8, 14.8, Asia, Rcep, 3.2, -0.5, 35.91, 127.77),
    country("Vietnam", "VNM", 8.9, 5.9, Asia, Asean, 8.5, 1.2, 14.06, 108.28),
    country("Germany", "DEU", 8.5, 13.6, Europe, Eu, -2.1, -0.3, 51.17, 10.45),
    country("Australia", "AUS", 5.8, 13.1, Oceania, Rcep, 4.8, 1.5, -25.27, 133.78),
    country("Taiwan", "TWN", 6.2, 18.1, Asia, Other, 2.3, 0.9, 23.69, 121.0),
    country("Malaysia", "MYS", 6.5, 5.9, Asia, Asean, 6.1, 0.4, 4.21, 101.98),
    country("Russia", "RUS", 8.4, 9.8, Europe, Brics, 12.3, 2.8, 61.52, 105.32),
    country("Brazil", "BRA", 4.2, 11.4, LatinAmerica, Brics, 7.5, 1.1, -14.24, -51.93),
    country("Thailand", "THA", 6.1, 5.1, Asia, Asean, 4.2, 0.6, 15.87, 100.99),
    country("India", "IND", 7.5, 4.3, Asia, Brics, 9.8, 1.8, 20.59, 78.96),
    country("Netherlands", "NLD", 8.2, 2.0, Europe, Eu, 1.5, 0.2, 52.13, 5.29),
    country("Singapore", "SGP", 5.2, 4.6, Asia, Asean, 3.8, 0.7, 1.35, 103.82),
    country("United Kingdom", "GBR", 6.8, 2.1, Europe, Other, -0.8, -0.2, 55.38, -3.44),
    country("South Africa", "ZAF", 3.2, 2.8, Africa, Brics, 2.1, 0.3, -30.56, 22.94),
    country("Indonesia", "IDN", 7.2, 6.8, Asia, Asean, 5.4, 0.9, -0.79, 113.92),
    country("Mexico", "MEX", 5.1, 4.2, NorthAmerica, Usmca, 3.8, 0.5, 23.63, -102.55),
    country("Canada", "CAN", 4.8, 3.9, NorthAmerica, Usmca, 2.1, 0.3, 56.13, -106.35),
    country("France", "FRA", 5.6, 4.8, Europe, Eu, 1.2, 0.4, 46.23, 2.21),
    country("Italy", "ITA", 4.9, 4.1, Europe, Eu, 0.8, 0.2, 41.87, 12.57),
    country("Philippines", "PHL", 4.5, 3.2, Asia, Asean, 6.2, 0.8, 12.88, 121.77),
];

static BLOCS: [BlocSummary; 6] = [
    BlocSummary {
        name: Asean,
        full_name: "Association of Southeast Asian Nations",
        export: 45.2,
        import: 32.8,
    },
    BlocSummary { name: Eu, full_name: "European Union", export: 35.8, import: 38.5 },
    BlocSummary {
        name: Rcep,
        full_name: "Regional Comprehensive Economic Partnership",
        export: 38.5,
        import: 46.2,
    },
    BlocSummary {
        name: Brics,
        full_name: "Brazil, Russia, India, China, South Africa",
        export: 23.3,
        import: 28.3,
    },
    BlocSummary {
        name: Usmca,
        full_name: "United States-Mexico-Canada Agreement",
        export: 54.7,
        import: 22.0,
    },
    BlocSummary { name: Other, full_name: "Other Countries", export: 13.0, import: 20.2 },
];

static REGIONS: [RegionSummary; 6] = [
    RegionSummary { name: Asia, export: 145.2, import: 140.2 },
    RegionSummary { name: Europe, export: 52.4, import: 46.2 },
    RegionSummary { name: NorthAmerica, export: 52.1, import: 20.2 },
    RegionSummary { name: LatinAmerica, export: 15.8, import: 22.7 },
    RegionSummary { name: Oceania, export: 8.5, import: 14.3 },
    RegionSummary { name: Africa, export: 9.2, import: 6.0 },
];

static MONTH_LABELS: [&str; 10] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct",
];
static MONTH_EXPORTS: [f64; 10] = [
    298.5, 252.4, 315.6, 292.5, 302.4, 308.2, 296.8, 308.6, 303.7, 309.1,
];
static MONTH_IMPORTS: [f64; 10] = [
    218.6, 179.3, 222.8, 205.4, 219.7, 208.9, 201.3, 217.8, 215.5, 213.7,
];
static MONTH_BALANCE: [f64; 10] = [79.9, 73.1, 92.8, 87.1, 82.7, 99.3, 95.5, 90.8, 88.2, 95.4];

static COMMODITY_EXPORTS: [Commodity; 8] = [
    commodity("Machinery & Equipment", 89.5, "84"),
    commodity("Electronics", 72.3, "85"),
    commodity("Textiles & Apparel", 42.3, "61-62"),
    commodity("Chemicals", 35.8, "28-38"),
    commodity("Metals", 28.4, "72-83"),
    commodity("Furniture & Toys", 22.1, "94-95"),
    commodity("Plastics", 18.5, "39"),
    commodity("Vehicles", 15.2, "87"),
];

static COMMODITY_IMPORTS: [Commodity; 8] = [
    commodity("Electronics & Semiconductors", 68.5, "85"),
    commodity("Minerals & Energy", 52.4, "27"),
    commodity("Agricultural Products", 28.6, "01-24"),
    commodity("Chemicals", 22.3, "28-38"),
    commodity("Machinery", 18.9, "84"),
    commodity("Ores & Metals", 16.2, "26"),
    commodity("Plastics", 12.8, "39"),
    commodity("Medical Equipment", 8.5, "90"),
];

static TRADE_DATA: TradeData = TradeData {
    countries: &COUNTRIES,
    blocs: &BLOCS,
    regions: &REGIONS,
    monthly: MonthlySeries {
        labels: &MONTH_LABELS,
        exports: &MONTH_EXPORTS,
        imports: &MONTH_IMPORTS,
        balance: &MONTH_BALANCE,
    },
    commodities: Commodities {
        exports: &COMMODITY_EXPORTS,
        imports: &COMMODITY_IMPORTS,
    },
};

/// The embedded dataset.
pub fn trade_data() -> &'static TradeData {
    &TRADE_DATA
}

/// Look up a country by its exact (case-sensitive) ISO3 code.
pub fn country_by_code(code: &str) -> Option<&'static Country> {
    TRADE_DATA.countries.iter().find(|c| c.code == code)
}

/// All countries whose region display name equals `region`, in dataset order.
///
/// An unknown region yields an empty list, not an error.
pub fn countries_by_region(region: &str) -> Vec<&'static Country> {
    TRADE_DATA
        .countries
        .iter()
        .filter(|c| c.region.name() == region)
        .collect()
}

/// All countries counted under the bloc named `bloc` (e.g. `"ASEAN"`), in dataset order.
pub fn countries_by_bloc(bloc: &str) -> Vec<&'static Country> {
    TRADE_DATA
        .countries
        .iter()
        .filter(|c| c.bloc.name() == bloc)
        .collect()
}

pub fn bloc_summary(name: &str) -> Option<&'static BlocSummary> {
    TRADE_DATA.blocs.iter().find(|b| b.name.name() == name)
}

pub fn region_summary(name: &str) -> Option<&'static RegionSummary> {
    TRADE_DATA.regions.iter().find(|r| r.name.name() == name)
}
