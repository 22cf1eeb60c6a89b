use tradeboard::nav::{
    NavLink, Navigator, build_url, current_page, navigate_to, parse_query, update_nav_links,
};

#[derive(Default)]
struct Recorder {
    visited: Vec<String>,
}

impl Navigator for Recorder {
    fn navigate(&mut self, href: &str) {
        self.visited.push(href.to_string());
    }
}

#[test]
fn build_url_encodes_like_a_form() {
    assert_eq!(
        build_url("region.html", &[("name", "North America"), ("sort", "a&b")]),
        "region.html?name=North+America&sort=a%26b"
    );
    let none: [(&str, &str); 0] = [];
    assert_eq!(build_url("index.html", &none), "index.html");
}

#[test]
fn navigate_to_hands_the_href_to_the_navigator() {
    let mut nav = Recorder::default();
    navigate_to(&mut nav, "country.html", &[("code", "USA")]);
    navigate_to(&mut nav, "index.html", &[] as &[(&str, &str)]);
    assert_eq!(nav.visited, vec!["country.html?code=USA", "index.html"]);
}

#[test]
fn parse_query_decodes_and_last_value_wins() {
    let q = parse_query("?code=USA&name=North+America&code=DEU&flag&pct=50%25");
    assert_eq!(q.get("code").map(String::as_str), Some("DEU"));
    assert_eq!(q.get("name").map(String::as_str), Some("North America"));
    assert_eq!(q.get("flag").map(String::as_str), Some(""));
    assert_eq!(q.get("pct").map(String::as_str), Some("50%"));
    assert!(parse_query("").is_empty());
    assert!(parse_query("?").is_empty());
}

#[test]
fn query_round_trips_through_build_url() {
    let href = build_url("x.html", &[("region", "Latin America"), ("q", "a=b?c")]);
    let (_, search) = href.split_once('?').unwrap();
    let q = parse_query(search);
    assert_eq!(q["region"], "Latin America");
    assert_eq!(q["q"], "a=b?c");
}

#[test]
fn current_page_defaults_to_index() {
    assert_eq!(current_page("/dash/countries.html"), "countries.html");
    assert_eq!(current_page("/dash/"), "index.html");
    assert_eq!(current_page(""), "index.html");
    assert_eq!(current_page("regions.html"), "regions.html");
}

#[test]
fn update_nav_links_marks_only_the_current_page() {
    let mut links = vec![
        NavLink::new("index.html"),
        NavLink::new("countries.html"),
        NavLink::new("regions.html"),
    ];
    links[2].active = true;

    update_nav_links(&mut links, "/app/countries.html");
    let active: Vec<bool> = links.iter().map(|l| l.active).collect();
    assert_eq!(active, vec![false, true, false]);

    update_nav_links(&mut links, "/app/");
    let active: Vec<bool> = links.iter().map(|l| l.active).collect();
    assert_eq!(active, vec![true, false, false]);
}
