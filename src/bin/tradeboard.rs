use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tradeboard::charts::{ChartFormat, ChartRenderer};
use tradeboard::config::Settings;
use tradeboard::models::{Country, Theme};
use tradeboard::stats::{self, Metric};
use tradeboard::storage::{self, FileStore};
use tradeboard::theme::{NoopSink, ThemeController};
use tradeboard::{dataset, format};

#[derive(Parser, Debug)]
#[command(
    name = "tradeboard",
    version,
    about = "Inspect the trade dashboard's data, theme and charts"
)]
struct Cli {
    /// Settings file backing the persisted theme.
    /// Defaults to $TRADEBOARD_STORE, then the user config dir.
    #[arg(long, global = true)]
    store: Option<PathBuf>,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show, set or toggle the persisted theme.
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },
    /// Print one country by ISO3 code.
    Country {
        /// Exact, case-sensitive code (e.g., USA)
        code: String,
    },
    /// List the countries of a region.
    Region {
        /// Region name (e.g., "North America")
        name: String,
    },
    /// Save the country table.
    Export(ExportArgs),
    /// Render the dashboard charts in the current theme.
    Charts(ChartsArgs),
    /// Print summary statistics for a metric across all countries.
    Stats {
        /// export, import, balance, yoy_change or mom_change
        #[arg(long, default_value = "export")]
        metric: Metric,
        /// Also list the top N countries by the metric.
        #[arg(long, default_value_t = 5)]
        top: usize,
    },
}

#[derive(Subcommand, Debug)]
enum ThemeAction {
    /// Print the current theme.
    Show,
    /// Persist a theme.
    Set {
        #[arg(value_enum)]
        theme: ThemeArg,
    },
    /// Switch to the other theme (re-renders charts when --charts-dir is given).
    Toggle {
        #[arg(long)]
        charts_dir: Option<PathBuf>,
    },
    /// Print the chart styling of the current theme as JSON.
    Config,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ThemeArg {
    Dark,
    Light,
}

impl From<ThemeArg> for Theme {
    fn from(t: ThemeArg) -> Self {
        match t {
            ThemeArg::Dark => Theme::Dark,
            ThemeArg::Light => Theme::Light,
        }
    }
}

#[derive(ValueEnum, Clone, Debug)]
enum OutFormat {
    Csv,
    Json,
}

#[derive(Args, Debug)]
struct ExportArgs {
    /// Output file (format inferred by --format or extension).
    #[arg(long)]
    out: PathBuf,
    /// Output format (csv or json). If omitted, inferred from --out extension.
    #[arg(long, value_enum)]
    format: Option<OutFormat>,
    /// Only export countries of this region.
    #[arg(long)]
    region: Option<String>,
}

#[derive(Args, Debug)]
struct ChartsArgs {
    /// Directory the charts are written to.
    #[arg(long)]
    out_dir: PathBuf,
    /// Write PNG instead of SVG.
    #[arg(long, default_value_t = false)]
    png: bool,
    /// Width of the charts (default from settings).
    #[arg(long)]
    width: Option<u32>,
    /// Height of the charts (default from settings).
    #[arg(long)]
    height: Option<u32>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let mut settings = Settings::from_env();
    if let Some(path) = cli.store {
        settings = settings.with_store_path(path);
    }
    match cli.cmd {
        Command::Theme { action } => cmd_theme(&settings, action),
        Command::Country { code } => cmd_country(&code),
        Command::Region { name } => cmd_region(&name),
        Command::Export(args) => cmd_export(args),
        Command::Charts(args) => cmd_charts(&settings, args),
        Command::Stats { metric, top } => cmd_stats(metric, top),
    }
}

fn open_themes(settings: &Settings) -> Result<ThemeController<FileStore, NoopSink>> {
    let store = FileStore::open(&settings.store_path)
        .with_context(|| format!("opening settings at {}", settings.store_path.display()))?;
    Ok(ThemeController::init(store, NoopSink))
}

fn cmd_theme(settings: &Settings, action: ThemeAction) -> Result<()> {
    let mut themes = open_themes(settings)?;
    match action {
        ThemeAction::Show => println!("{}", themes.theme()),
        ThemeAction::Set { theme } => {
            themes.set_theme(theme.into(), false);
            println!("{}", themes.theme());
        }
        ThemeAction::Toggle { charts_dir } => {
            if let Some(dir) = charts_dir {
                let renderer = ChartRenderer::new(dir, settings.chart_width, settings.chart_height);
                themes.subscribe(renderer.observer());
            }
            themes.toggle_theme();
            println!("{}", themes.theme());
        }
        ThemeAction::Config => {
            println!("{}", serde_json::to_string_pretty(&themes.theme_config())?);
        }
    }
    Ok(())
}

fn print_country(c: &Country) {
    println!(
        "{} ({})  export={} import={} balance={}  yoy={:+.1}% mom={:+.1}%  {} • {}",
        c.name,
        c.code,
        format::format_number_default(c.export),
        format::format_number_default(c.import),
        format::format_number_default(c.balance()),
        c.yoy_change,
        c.mom_change,
        c.region,
        c.bloc,
    );
}

fn cmd_country(code: &str) -> Result<()> {
    let country = dataset::country_by_code(code)
        .ok_or_else(|| anyhow::anyhow!("no country with code {code:?}"))?;
    print_country(country);
    Ok(())
}

fn cmd_region(name: &str) -> Result<()> {
    let countries = dataset::countries_by_region(name);
    if countries.is_empty() {
        eprintln!("No countries in region {name:?}");
    }
    for c in countries {
        print_country(c);
    }
    Ok(())
}

fn cmd_export(args: ExportArgs) -> Result<()> {
    let countries: Vec<&Country> = match &args.region {
        Some(region) => dataset::countries_by_region(region),
        None => dataset::trade_data().countries.iter().collect(),
    };
    let fmt = match args.format {
        Some(OutFormat::Csv) => "csv",
        Some(OutFormat::Json) => "json",
        None => args.out.extension().and_then(|e| e.to_str()).unwrap_or("csv"),
    }
    .to_ascii_lowercase();
    match fmt.as_str() {
        "csv" => storage::save_countries_csv(&countries, &args.out)?,
        "json" => storage::save_json(&countries, &args.out)?,
        other => anyhow::bail!("unsupported format: {}", other),
    }
    eprintln!("Saved {} rows to {}", countries.len(), args.out.display());
    Ok(())
}

fn cmd_charts(settings: &Settings, args: ChartsArgs) -> Result<()> {
    let themes = open_themes(settings)?;
    let format = if args.png { ChartFormat::Png } else { ChartFormat::Svg };
    let renderer = ChartRenderer::new(
        args.out_dir,
        args.width.unwrap_or(settings.chart_width),
        args.height.unwrap_or(settings.chart_height),
    )
    .with_format(format);
    for path in renderer.render_all(themes.theme())? {
        eprintln!("Wrote chart to {}", path.display());
    }
    Ok(())
}

fn fmt_opt(v: Option<f64>) -> String {
    match v {
        Some(x) if x.is_finite() => {
            // Format up to 2 decimals, then trim trailing zeros and trailing dot.
            let s = format!("{:.2}", x);
            s.trim_end_matches('0').trim_end_matches('.').to_string()
        }
        _ => "NA".to_string(),
    }
}

fn cmd_stats(metric: Metric, top: usize) -> Result<()> {
    let countries: Vec<&Country> = dataset::trade_data().countries.iter().collect();
    let s = stats::summary(&countries, metric);
    println!(
        "{}  count={}  min={} max={} mean={} median={}",
        s.metric,
        s.count,
        fmt_opt(s.min),
        fmt_opt(s.max),
        fmt_opt(s.mean),
        fmt_opt(s.median)
    );
    for (i, c) in stats::top_countries(&countries, metric, top).iter().enumerate() {
        println!("{:>2}. {} ({})  {}", i + 1, c.name, c.code, fmt_opt(Some(metric.value(c))));
    }
    for t in stats::region_totals(&countries) {
        println!(
            "{:<14} countries={:<2} export={} import={}",
            t.region.name(),
            t.countries,
            format::format_number_default(t.export),
            format::format_number_default(t.import)
        );
    }
    Ok(())
}
