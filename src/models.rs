use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Presentation mode for the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Glyph shown in the theme indicator.
    pub fn icon(self) -> &'static str {
        match self {
            Theme::Dark => "\u{1F319}",
            Theme::Light => "\u{2600}\u{FE0F}",
        }
    }

    /// Text shown next to the indicator glyph.
    pub fn label(self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
        }
    }

    /// Header logo asset for this theme.
    pub fn logo_path(self) -> &'static str {
        match self {
            Theme::Dark => "assets/logo-dark.svg",
            Theme::Light => "assets/logo-light.svg",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = Error;

    /// Exact string forms only (`"dark"`, `"light"`), matching what gets persisted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(Error::UnknownTheme(other.to_string())),
        }
    }
}

/// Geographic region a country is reported under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Region {
    Asia,
    Europe,
    #[serde(rename = "North America")]
    NorthAmerica,
    #[serde(rename = "Latin America")]
    LatinAmerica,
    Oceania,
    Africa,
}

impl Region {
    /// All regions in display order.
    pub const ALL: [Region; 6] = [
        Region::Asia,
        Region::Europe,
        Region::NorthAmerica,
        Region::LatinAmerica,
        Region::Oceania,
        Region::Africa,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Region::Asia => "Asia",
            Region::Europe => "Europe",
            Region::NorthAmerica => "North America",
            Region::LatinAmerica => "Latin America",
            Region::Oceania => "Oceania",
            Region::Africa => "Africa",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Region {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::ALL
            .into_iter()
            .find(|r| r.name() == s)
            .ok_or_else(|| Error::UnknownRegion(s.to_string()))
    }
}

/// Trade agreement grouping a country is counted under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Bloc {
    #[serde(rename = "ASEAN")]
    Asean,
    #[serde(rename = "EU")]
    Eu,
    #[serde(rename = "RCEP")]
    Rcep,
    #[serde(rename = "BRICS")]
    Brics,
    #[serde(rename = "USMCA")]
    Usmca,
    Other,
}

impl Bloc {
    pub const ALL: [Bloc; 6] = [
        Bloc::Asean,
        Bloc::Eu,
        Bloc::Rcep,
        Bloc::Brics,
        Bloc::Usmca,
        Bloc::Other,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Bloc::Asean => "ASEAN",
            Bloc::Eu => "EU",
            Bloc::Rcep => "RCEP",
            Bloc::Brics => "BRICS",
            Bloc::Usmca => "USMCA",
            Bloc::Other => "Other",
        }
    }
}

impl fmt::Display for Bloc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Bloc {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Bloc::ALL
            .into_iter()
            .find(|b| b.name() == s)
            .ok_or_else(|| Error::UnknownBloc(s.to_string()))
    }
}

/// One country's trade figures (values in billions).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    pub name: &'static str,
    /// ISO 3166-1 alpha-3, unique across the dataset.
    pub code: &'static str,
    pub export: f64,
    pub import: f64,
    pub region: Region,
    pub bloc: Bloc,
    /// Year-over-year change in percent.
    pub yoy_change: f64,
    /// Month-over-month change in percent.
    pub mom_change: f64,
    pub lat: f64,
    pub lng: f64,
}

impl Country {
    /// Export minus import.
    pub fn balance(&self) -> f64 {
        self.export - self.import
    }

    pub fn total(&self) -> f64 {
        self.export + self.import
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlocSummary {
    pub name: Bloc,
    pub full_name: &'static str,
    pub export: f64,
    pub import: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionSummary {
    pub name: Region,
    pub export: f64,
    pub import: f64,
}

/// Monthly totals as index-aligned columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlySeries {
    pub labels: &'static [&'static str],
    pub exports: &'static [f64],
    pub imports: &'static [f64],
    pub balance: &'static [f64],
}

impl MonthlySeries {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// A commodity category with its HS chapter code(s).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Commodity {
    pub name: &'static str,
    pub value: f64,
    pub code: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Commodities {
    pub exports: &'static [Commodity],
    pub imports: &'static [Commodity],
}

/// The whole embedded dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TradeData {
    pub countries: &'static [Country],
    pub blocs: &'static [BlocSummary],
    pub regions: &'static [RegionSummary],
    pub monthly: MonthlySeries,
    pub commodities: Commodities,
}
