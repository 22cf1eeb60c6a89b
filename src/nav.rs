//! Page navigation helpers: query strings and active-link highlighting.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use std::collections::BTreeMap;

/// Page shown when the path has no final segment.
pub const DEFAULT_PAGE: &str = "index.html";

// application/x-www-form-urlencoded keeps `*-._` and alphanumerics; space is handled separately.
const FORM: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'*')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_');

fn form_encode(s: &str) -> String {
    s.split(' ')
        .map(|part| utf8_percent_encode(part, FORM).to_string())
        .collect::<Vec<_>>()
        .join("+")
}

fn form_decode(s: &str) -> String {
    let spaced = s.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

/// `url` followed by `?key=value&...` for non-empty `params`, else `url` unchanged.
///
/// ```
/// use tradeboard::nav::build_url;
/// assert_eq!(build_url("country.html", &[("code", "USA")]), "country.html?code=USA");
/// assert_eq!(build_url::<&str, &str>("index.html", &[]), "index.html");
/// ```
pub fn build_url<K: AsRef<str>, V: AsRef<str>>(url: &str, params: &[(K, V)]) -> String {
    if params.is_empty() {
        return url.to_string();
    }
    let query = params
        .iter()
        .map(|(k, v)| format!("{}={}", form_encode(k.as_ref()), form_encode(v.as_ref())))
        .collect::<Vec<_>>()
        .join("&");
    format!("{url}?{query}")
}

/// Something that can move the user to another page.
pub trait Navigator {
    fn navigate(&mut self, href: &str);
}

/// Build the target URL and hand it to `navigator`.
pub fn navigate_to<N, K, V>(navigator: &mut N, url: &str, params: &[(K, V)])
where
    N: Navigator + ?Sized,
    K: AsRef<str>,
    V: AsRef<str>,
{
    navigator.navigate(&build_url(url, params));
}

/// Parse a query string (with or without the leading `?`). Later duplicates win.
pub fn parse_query(search: &str) -> BTreeMap<String, String> {
    let search = search.strip_prefix('?').unwrap_or(search);
    search
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((k, v)) => (form_decode(k), form_decode(v)),
            None => (form_decode(pair), String::new()),
        })
        .collect()
}

/// Last segment of a URL path, [`DEFAULT_PAGE`] when empty.
pub fn current_page(pathname: &str) -> &str {
    match pathname.rsplit('/').next() {
        Some(last) if !last.is_empty() => last,
        _ => DEFAULT_PAGE,
    }
}

/// A navigation bar entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub href: String,
    pub active: bool,
}

impl NavLink {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            active: false,
        }
    }
}

/// Mark the link for the page at `pathname` active and every other link inactive.
pub fn update_nav_links(links: &mut [NavLink], pathname: &str) {
    let page = current_page(pathname);
    for link in links {
        link.active = link.href == page;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_encoding_matches_browsers() {
        assert_eq!(form_encode("North America"), "North+America");
        assert_eq!(form_encode("a&b=c"), "a%26b%3Dc");
        assert_eq!(form_decode("North+America%21"), "North America!");
    }
}
