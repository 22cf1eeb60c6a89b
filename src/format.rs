//! Display helpers: unit-suffixed figures, hex color shading, CSS color parsing,
//! and region tag classes.

use crate::error::Error;
use crate::models::Region;
use regex::Regex;
use std::sync::LazyLock;

/// Figures in the dataset are billions; at or above this they are shown as trillions.
pub const TRILLION_THRESHOLD: f64 = 1000.0;

/// Format a figure (in billions) with a unit suffix.
///
/// `value >= 1000` is divided by 1000 and suffixed `T`; everything else, including
/// zero and negatives, is printed as-is and suffixed `B`. Halves round away from
/// zero and negative zero prints as `0`.
///
/// ```
/// use tradeboard::format::format_number;
/// assert_eq!(format_number(1500.0, 1), "1.5T");
/// assert_eq!(format_number(250.0, 1), "250.0B");
/// ```
pub fn format_number(value: f64, decimals: usize) -> String {
    if value >= TRILLION_THRESHOLD {
        format!("{:.*}T", decimals, round_half_away(value / TRILLION_THRESHOLD, decimals))
    } else {
        format!("{:.*}B", decimals, round_half_away(value, decimals))
    }
}

fn round_half_away(value: f64, decimals: usize) -> f64 {
    if value == 0.0 {
        return 0.0;
    }
    let factor = 10_f64.powi(i32::try_from(decimals).unwrap_or(i32::MAX));
    let scaled = (value * factor).round();
    if scaled.is_finite() && factor.is_finite() {
        scaled / factor
    } else {
        value
    }
}

/// [`format_number`] with one decimal.
pub fn format_number_default(value: f64) -> String {
    format_number(value, 1)
}

/// Lighten (positive `amount`) or darken (negative) a `#rrggbb` color.
///
/// Each channel is shifted by `amount` and clamped to `0..=255`. The result is
/// always a lowercase, zero-padded `#rrggbb`.
pub fn adjust_color(hex: &str, amount: i32) -> Result<String, Error> {
    let (r, g, b) = parse_hex_rgb(hex)?;
    let shift = |c: u8| i32::from(c).saturating_add(amount).clamp(0, 255) as u8;
    Ok(rgb_to_hex(shift(r), shift(g), shift(b)))
}

/// Lowercase `#rrggbb`.
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

fn parse_hex_rgb(hex: &str) -> Result<(u8, u8, u8), Error> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::InvalidHexColor(hex.to_string()));
    }
    let channel = |i: usize| {
        u8::from_str_radix(&digits[i..i + 2], 16)
            .map_err(|_| Error::InvalidHexColor(hex.to_string()))
    };
    Ok((channel(0)?, channel(2)?, channel(4)?))
}

/// Color with straight alpha in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CssColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

/// Parse the color notations used by the chart theme: `#rgb`, `#rrggbb`,
/// `rgb(r, g, b)`, `rgba(r, g, b, a)` and `transparent`.
pub fn parse_css_color(s: &str) -> Result<CssColor, Error> {
    let t = s.trim();
    let invalid = || Error::InvalidCssColor(s.to_string());

    if t.eq_ignore_ascii_case("transparent") {
        return Ok(CssColor { r: 0, g: 0, b: 0, a: 0.0 });
    }

    if let Some(digits) = t.strip_prefix('#') {
        if digits.len() == 3 && digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            // #abc is shorthand for #aabbcc
            let expanded: String = digits.chars().flat_map(|c| [c, c]).collect();
            let (r, g, b) = parse_hex_rgb(&expanded).map_err(|_| invalid())?;
            return Ok(CssColor { r, g, b, a: 1.0 });
        }
        let (r, g, b) = parse_hex_rgb(t).map_err(|_| invalid())?;
        return Ok(CssColor { r, g, b, a: 1.0 });
    }

    let (args, with_alpha) = if let Some(rest) = t.strip_prefix("rgba(") {
        (rest, true)
    } else if let Some(rest) = t.strip_prefix("rgb(") {
        (rest, false)
    } else {
        return Err(invalid());
    };
    let args = args.strip_suffix(')').ok_or_else(invalid)?;
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    if parts.len() != if with_alpha { 4 } else { 3 } {
        return Err(invalid());
    }
    let channel = |p: &str| p.parse::<u8>().map_err(|_| invalid());
    let a = if with_alpha {
        let a = parts[3].parse::<f64>().map_err(|_| invalid())?;
        if !(0.0..=1.0).contains(&a) {
            return Err(invalid());
        }
        a
    } else {
        1.0
    };
    Ok(CssColor {
        r: channel(parts[0])?,
        g: channel(parts[1])?,
        b: channel(parts[2])?,
        a,
    })
}

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("static regex"));

/// CSS class for a region tag, e.g. `"North America"` -> `"tag-north-america"`.
pub fn region_class(region: &str) -> String {
    format!("tag-{}", WHITESPACE_RUN.replace_all(&region.to_lowercase(), "-"))
}

/// [`region_class`] for a known region.
pub fn region_tag(region: Region) -> String {
    region_class(region.name())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_number_picks_suffix_by_threshold() {
        assert_eq!(format_number(999.94, 1), "999.9B");
        assert_eq!(format_number(1000.0, 1), "1.0T");
        assert_eq!(format_number(0.0, 2), "0.00B");
        assert_eq!(format_number(-2500.0, 1), "-2500.0B");
    }

    #[test]
    fn adjust_color_keeps_leading_zeros() {
        assert_eq!(adjust_color("#0a0b0c", -5).unwrap(), "#050607");
        assert_eq!(adjust_color("#0a0b0c", -50).unwrap(), "#000000");
        assert_eq!(adjust_color("00bcd4", 0).unwrap(), "#00bcd4");
    }

    #[test]
    fn parse_css_color_handles_dashboard_notations() {
        assert_eq!(
            parse_css_color("rgba(255,255,255,0.85)").unwrap(),
            CssColor { r: 255, g: 255, b: 255, a: 0.85 }
        );
        assert_eq!(
            parse_css_color("rgba(26, 31, 46, 0.95)").unwrap(),
            CssColor { r: 26, g: 31, b: 46, a: 0.95 }
        );
        assert_eq!(
            parse_css_color("#fff").unwrap(),
            CssColor { r: 255, g: 255, b: 255, a: 1.0 }
        );
        assert_eq!(parse_css_color("transparent").unwrap().a, 0.0);
        assert!(parse_css_color("rgba(1,2,3)").is_err());
        assert!(parse_css_color("hsl(0, 0%, 0%)").is_err());
    }
}
