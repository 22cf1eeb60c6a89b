//! Fixed dashboard colors. These do not change with the theme.

use crate::models::Region;

pub const PRIMARY: &str = "#00bcd4";
pub const SUCCESS: &str = "#00c853";
pub const DANGER: &str = "#ff1744";
pub const WARNING: &str = "#ffab00";
pub const PURPLE: &str = "#7c4dff";

/// Accent color used for a region's tags and chart series.
pub fn region_color(region: Region) -> &'static str {
    match region {
        Region::Asia => "#2196f3",
        Region::Europe => "#4caf50",
        Region::NorthAmerica => "#ff9800",
        Region::LatinAmerica => "#9c27b0",
        Region::Oceania => "#00bcd4",
        Region::Africa => "#e91e63",
    }
}

/// Color for a signed change: green when non-negative, red otherwise.
pub fn change_color(change: f64) -> &'static str {
    if change >= 0.0 { SUCCESS } else { DANGER }
}
