use crate::models::{Country, Region};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// A numeric field of a country record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Export,
    Import,
    Balance,
    YoyChange,
    MomChange,
}

impl Metric {
    pub fn value(self, c: &Country) -> f64 {
        match self {
            Metric::Export => c.export,
            Metric::Import => c.import,
            Metric::Balance => c.balance(),
            Metric::YoyChange => c.yoy_change,
            Metric::MomChange => c.mom_change,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Metric::Export => "export",
            Metric::Import => "import",
            Metric::Balance => "balance",
            Metric::YoyChange => "yoy_change",
            Metric::MomChange => "mom_change",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "export" => Ok(Metric::Export),
            "import" => Ok(Metric::Import),
            "balance" => Ok(Metric::Balance),
            "yoy_change" => Ok(Metric::YoyChange),
            "mom_change" => Ok(Metric::MomChange),
            other => Err(format!("unknown metric: {other}")),
        }
    }
}

/// Summary statistics of one metric over a set of countries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Summary {
    pub metric: Metric,
    pub count: usize,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
    pub median: Option<f64>,
}

/// Compute min/max/mean/median of `metric` over `countries`.
pub fn summary(countries: &[&Country], metric: Metric) -> Summary {
    let mut vals: Vec<f64> = countries.iter().map(|c| metric.value(c)).collect();
    vals.sort_by(|a, b| a.total_cmp(b));
    let count = vals.len();
    let min = vals.first().cloned();
    let max = vals.last().cloned();
    let mean = if count > 0 {
        Some(vals.iter().copied().sum::<f64>() / count as f64)
    } else {
        None
    };
    let median = if count == 0 {
        None
    } else if count % 2 == 1 {
        Some(vals[count / 2])
    } else {
        Some((vals[count / 2 - 1] + vals[count / 2]) / 2.0)
    };
    Summary {
        metric,
        count,
        min,
        max,
        mean,
        median,
    }
}

/// The `n` countries with the highest `metric`, ties kept in input order.
pub fn top_countries<'a>(countries: &[&'a Country], metric: Metric, n: usize) -> Vec<&'a Country> {
    let mut sorted = countries.to_vec();
    sorted.sort_by(|a, b| metric.value(b).total_cmp(&metric.value(a)));
    sorted.truncate(n);
    sorted
}

/// Export/import sums for one region.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegionTotal {
    pub region: Region,
    pub countries: usize,
    pub export: f64,
    pub import: f64,
}

/// Sum export and import per region, in region display order. Regions with no
/// countries in the input are left out.
pub fn region_totals(countries: &[&Country]) -> Vec<RegionTotal> {
    let mut groups: BTreeMap<Region, RegionTotal> = BTreeMap::new();
    for c in countries {
        let t = groups.entry(c.region).or_insert(RegionTotal {
            region: c.region,
            countries: 0,
            export: 0.0,
            import: 0.0,
        });
        t.countries += 1;
        t.export += c.export;
        t.import += c.import;
    }
    groups.into_values().collect()
}
