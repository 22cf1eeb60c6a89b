use tradeboard::dataset::{self, countries_by_region};
use tradeboard::models::{Country, Region};
use tradeboard::stats::{Metric, region_totals, summary, top_countries};

fn all() -> Vec<&'static Country> {
    dataset::trade_data().countries.iter().collect()
}

#[test]
fn summary_over_north_america_exports() {
    // USA 44.8, MEX 5.1, CAN 4.8 -> median 5.1
    let na = countries_by_region("North America");
    let s = summary(&na, Metric::Export);
    assert_eq!(s.count, 3);
    assert_eq!(s.min, Some(4.8));
    assert_eq!(s.max, Some(44.8));
    assert_eq!(s.median, Some(5.1));
    assert!((s.mean.unwrap() - 54.7 / 3.0).abs() < 1e-9);
}

#[test]
fn summary_of_nothing_is_empty() {
    let s = summary(&[], Metric::Balance);
    assert_eq!(s.count, 0);
    assert_eq!(s.min, None);
    assert_eq!(s.mean, None);
    assert_eq!(s.median, None);
}

#[test]
fn summary_even_count_averages_middle_pair() {
    // Africa has one country; pair it with Oceania: ZAF 3.2, AUS 5.8 -> 4.5
    let mut rows = countries_by_region("Africa");
    rows.extend(countries_by_region("Oceania"));
    let s = summary(&rows, Metric::Export);
    assert!((s.median.unwrap() - 4.5).abs() < 1e-9);
}

#[test]
fn top_countries_by_balance() {
    let top = top_countries(&all(), Metric::Balance, 3);
    let codes: Vec<&str> = top.iter().map(|c| c.code).collect();
    // USA 30.9, NLD 6.2, GBR 4.7
    assert_eq!(codes, vec!["USA", "NLD", "GBR"]);
}

#[test]
fn top_countries_keeps_ties_in_dataset_order() {
    // MEX and SGP both have 3.8 yoy; SGP comes first in the dataset.
    let rows: Vec<&Country> = all()
        .into_iter()
        .filter(|c| c.code == "MEX" || c.code == "SGP")
        .collect();
    let top = top_countries(&rows, Metric::YoyChange, 2);
    assert_eq!(top[0].code, "SGP");
    assert_eq!(top[1].code, "MEX");
}

#[test]
fn region_totals_follow_region_order() {
    let totals = region_totals(&all());
    let regions: Vec<Region> = totals.iter().map(|t| t.region).collect();
    assert_eq!(regions, Region::ALL.to_vec());

    let oceania = totals.iter().find(|t| t.region == Region::Oceania).unwrap();
    assert_eq!(oceania.countries, 1);
    assert_eq!(oceania.export, 5.8);

    let only_europe = region_totals(&countries_by_region("Europe"));
    assert_eq!(only_europe.len(), 1);
    assert_eq!(only_europe[0].countries, 6);
}

#[test]
fn metric_names_parse() {
    let all = [
        Metric::Export,
        Metric::Import,
        Metric::Balance,
        Metric::YoyChange,
        Metric::MomChange,
    ];
    for m in all {
        assert_eq!(m.as_str().parse::<Metric>().unwrap(), m);
    }
    assert!("gdp".parse::<Metric>().is_err());
}
