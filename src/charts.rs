//! Chart rendering: draw the dashboard's charts to **SVG** or **PNG** in the
//! colors of a [`ChartTheme`].
//!
//! - Monthly exports/imports/balance as lines with point markers
//! - Export/import per region as paired bars
//!
//! Charts are shapes only (series, gridlines, axes). Labels and legends belong to
//! the page around them, which reads the same [`ChartTheme`] for its text colors.

use crate::dataset::trade_data;
use crate::format::{CssColor, adjust_color, parse_css_color};
use crate::models::{MonthlySeries, RegionSummary, Theme};
use crate::palette;
use crate::theme::ChartTheme;
use anyhow::{Context, Result, anyhow};
use log::{error, info};
use plotters::coord::Shift;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use plotters::series::LineSeries;
use plotters_bitmap::BitMapBackend;
use plotters_svg::SVGBackend;
use std::fs;
use std::path::{Path, PathBuf};

const MARGIN: u32 = 24;
const GRID_LINES: usize = 5;
const HEADROOM: f64 = 1.1;

/// Output format of rendered charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartFormat {
    #[default]
    Svg,
    Png,
}

impl ChartFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ChartFormat::Svg => "svg",
            ChartFormat::Png => "png",
        }
    }
}

/// Colors a chart is drawn with, resolved from a [`ChartTheme`].
#[derive(Debug, Clone, Copy)]
struct Colors {
    background: RGBAColor,
    grid: RGBAColor,
    axis: RGBAColor,
}

impl Colors {
    fn resolve(theme: Theme, cfg: &ChartTheme) -> Result<Self> {
        let rgba = |s: &str| -> Result<RGBAColor> {
            let c = parse_css_color(s)?;
            Ok(to_rgba(c))
        };
        let mut background = parse_css_color(&cfg.background_color)?;
        if background.a == 0.0 {
            // A transparent chart sits on the page; files have no page, so use its canvas color.
            background = parse_css_color(canvas_color(theme))?;
        }
        Ok(Self {
            background: to_rgba(background),
            grid: rgba(&cfg.split_line.line_style.color)?,
            axis: rgba(&cfg.axis_line.line_style.color)?,
        })
    }
}

fn to_rgba(c: CssColor) -> RGBAColor {
    RGBAColor(c.r, c.g, c.b, c.a)
}

fn hex_rgb(hex: &str) -> Result<RGBColor> {
    let c = parse_css_color(hex)?;
    Ok(RGBColor(c.r, c.g, c.b))
}

/// Page background the charts are placed on.
pub fn canvas_color(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "#1a1f2e",
        Theme::Light => "#ffffff",
    }
}

/// Renders the dashboard charts into a directory.
#[derive(Debug, Clone)]
pub struct ChartRenderer {
    pub out_dir: PathBuf,
    pub width: u32,
    pub height: u32,
    pub format: ChartFormat,
}

impl ChartRenderer {
    pub fn new(out_dir: impl Into<PathBuf>, width: u32, height: u32) -> Self {
        Self {
            out_dir: out_dir.into(),
            width,
            height,
            format: ChartFormat::default(),
        }
    }

    pub fn with_format(mut self, format: ChartFormat) -> Self {
        self.format = format;
        self
    }

    fn path_for(&self, stem: &str) -> PathBuf {
        self.out_dir.join(format!("{stem}.{}", self.format.extension()))
    }

    /// Render every chart for `theme`; returns the written files.
    pub fn render_all(&self, theme: Theme) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(&self.out_dir)
            .with_context(|| format!("creating {}", self.out_dir.display()))?;
        let data = trade_data();
        let monthly = self.path_for("monthly-trend");
        plot_monthly(&data.monthly, theme, &monthly, self.width, self.height)?;
        let regions = self.path_for("region-trade");
        plot_regions(data.regions, theme, &regions, self.width, self.height)?;
        Ok(vec![monthly, regions])
    }

    /// A theme-change callback that re-renders all charts, logging the outcome.
    pub fn observer(self) -> impl FnMut(Theme) + 'static {
        move |theme| match self.render_all(theme) {
            Ok(files) => info!("re-rendered {} charts for {theme} theme", files.len()),
            Err(err) => error!("chart re-render failed: {err:#}"),
        }
    }
}

fn is_svg(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some("svg")
}

/// Monthly exports, imports and balance as a line chart.
///
/// The backend follows the file extension: `.svg` writes SVG, anything else a bitmap.
pub fn plot_monthly<P: AsRef<Path>>(
    series: &MonthlySeries,
    theme: Theme,
    out_path: P,
    width: u32,
    height: u32,
) -> Result<()> {
    if series.is_empty() {
        return Err(anyhow!("no monthly values to plot"));
    }
    let colors = Colors::resolve(theme, &ChartTheme::for_theme(theme))?;
    let lines = [
        (series.exports, hex_rgb(palette::PRIMARY)?),
        (series.imports, hex_rgb(palette::WARNING)?),
        (series.balance, hex_rgb(palette::SUCCESS)?),
    ];
    let out_path = out_path.as_ref();
    if is_svg(out_path) {
        let root = SVGBackend::new(out_path, (width, height)).into_drawing_area();
        draw_monthly(root, &lines, colors)
    } else {
        let root = BitMapBackend::new(out_path, (width, height)).into_drawing_area();
        draw_monthly(root, &lines, colors)
    }
}

/// Export and import per region as paired bars (export solid, import lightened).
pub fn plot_regions<P: AsRef<Path>>(
    regions: &[RegionSummary],
    theme: Theme,
    out_path: P,
    width: u32,
    height: u32,
) -> Result<()> {
    if regions.is_empty() {
        return Err(anyhow!("no regions to plot"));
    }
    let colors = Colors::resolve(theme, &ChartTheme::for_theme(theme))?;
    let bars = regions
        .iter()
        .map(|r| -> Result<Bar> {
            let base = palette::region_color(r.name);
            Ok(Bar {
                export: r.export,
                import: r.import,
                export_color: hex_rgb(base)?,
                import_color: hex_rgb(&adjust_color(base, 60)?)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    let out_path = out_path.as_ref();
    if is_svg(out_path) {
        let root = SVGBackend::new(out_path, (width, height)).into_drawing_area();
        draw_regions(root, &bars, colors)
    } else {
        let root = BitMapBackend::new(out_path, (width, height)).into_drawing_area();
        draw_regions(root, &bars, colors)
    }
}

struct Bar {
    export: f64,
    import: f64,
    export_color: RGBColor,
    import_color: RGBColor,
}

/// Horizontal gridlines and the left/bottom axis lines over `x_range` x `0..y_max`.
fn draw_frame<DB: DrawingBackend>(
    chart: &mut ChartContext<'_, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    x_range: (f64, f64),
    y_max: f64,
    colors: Colors,
) -> Result<()> {
    let (x0, x1) = x_range;
    for i in 1..=GRID_LINES {
        let y = y_max * i as f64 / GRID_LINES as f64;
        chart
            .draw_series(LineSeries::new(vec![(x0, y), (x1, y)], colors.grid))
            .map_err(|e| anyhow!("{:?}", e))?;
    }
    chart
        .draw_series(LineSeries::new(vec![(x0, y_max), (x0, 0.0), (x1, 0.0)], colors.axis))
        .map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}

fn draw_monthly<DB: DrawingBackend>(
    root: DrawingArea<DB, Shift>,
    lines: &[(&[f64], RGBColor)],
    colors: Colors,
) -> Result<()> {
    root.fill(&colors.background).map_err(|e| anyhow!("{:?}", e))?;

    let n = lines.iter().map(|(v, _)| v.len()).max().unwrap_or(0);
    let y_max = lines
        .iter()
        .flat_map(|(v, _)| v.iter().copied())
        .fold(0.0_f64, f64::max)
        * HEADROOM;
    let y_max = if y_max > 0.0 { y_max } else { 1.0 };
    let x_max = (n.max(2) - 1) as f64;

    let mut chart = ChartBuilder::on(&root)
        .margin(MARGIN)
        .build_cartesian_2d(0.0..x_max, 0.0..y_max)
        .map_err(|e| anyhow!("{:?}", e))?;

    draw_frame(&mut chart, (0.0, x_max), y_max, colors)?;

    for (values, color) in lines {
        let points: Vec<(f64, f64)> = values
            .iter()
            .copied()
            .enumerate()
            .map(|(i, v)| (i as f64, v.max(0.0)))
            .collect();
        chart
            .draw_series(LineSeries::new(points.clone(), color.stroke_width(2)))
            .map_err(|e| anyhow!("{:?}", e))?;
        chart
            .draw_series(points.into_iter().map(|p| Circle::new(p, 3, color.filled())))
            .map_err(|e| anyhow!("{:?}", e))?;
    }

    root.present().map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}

fn draw_regions<DB: DrawingBackend>(
    root: DrawingArea<DB, Shift>,
    bars: &[Bar],
    colors: Colors,
) -> Result<()> {
    root.fill(&colors.background).map_err(|e| anyhow!("{:?}", e))?;

    let y_max = bars
        .iter()
        .map(|b| b.export.max(b.import))
        .fold(0.0_f64, f64::max)
        * HEADROOM;
    let y_max = if y_max > 0.0 { y_max } else { 1.0 };
    let x_max = bars.len() as f64;

    let mut chart = ChartBuilder::on(&root)
        .margin(MARGIN)
        .build_cartesian_2d(0.0..x_max, 0.0..y_max)
        .map_err(|e| anyhow!("{:?}", e))?;

    draw_frame(&mut chart, (0.0, x_max), y_max, colors)?;

    // Each region gets one slot: two bars side by side with padding around them.
    for (i, bar) in bars.iter().enumerate() {
        let left = i as f64 + 0.15;
        let mid = i as f64 + 0.5;
        let right = i as f64 + 0.85;
        let pair = [
            Rectangle::new([(left, 0.0), (mid, bar.export.max(0.0))], bar.export_color.filled()),
            Rectangle::new([(mid, 0.0), (right, bar.import.max(0.0))], bar.import_color.filled()),
        ];
        chart
            .draw_series(pair)
            .map_err(|e| anyhow!("{:?}", e))?;
    }

    root.present().map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transparent_background_falls_back_to_canvas() {
        let colors = Colors::resolve(Theme::Light, &ChartTheme::for_theme(Theme::Light)).unwrap();
        let RGBAColor(r, g, b, a) = colors.background;
        assert_eq!((r, g, b), (255, 255, 255));
        assert_eq!(a, 1.0);
        let RGBAColor(_, _, _, grid_alpha) = colors.grid;
        assert!((grid_alpha - 0.05).abs() < 1e-9);
    }
}
