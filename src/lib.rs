//! tradeboard
//!
//! A lightweight Rust library behind a trade-statistics dashboard. Pairs with the
//! `tradeboard` CLI and the `tradeboard-gui` desktop app.
//!
//! ### Features
//! - Light/dark theme state with persistence and change notification
//! - Chart styling derived from the active theme
//! - Embedded country/bloc/region trade figures with simple queries
//! - Formatting, color and navigation helpers
//! - Dataset export (CSV/JSON), summary statistics and SVG/PNG charts
//!
//! ### Example
//! ```no_run
//! use tradeboard::storage::MemoryStore;
//! use tradeboard::theme::{NoopSink, ThemeController};
//! use tradeboard::{dataset, format};
//!
//! let mut themes = ThemeController::init(MemoryStore::default(), NoopSink);
//! themes.toggle_theme();
//! let cfg = themes.theme_config();
//! println!("{}", serde_json::to_string_pretty(&cfg)?);
//!
//! let usa = dataset::country_by_code("USA").expect("embedded");
//! println!("{} exports {}", usa.name, format::format_number_default(usa.export));
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod charts;
pub mod config;
pub mod dataset;
pub mod error;
pub mod format;
pub mod models;
pub mod nav;
pub mod palette;
pub mod stats;
pub mod storage;
pub mod theme;

pub use error::Error;
pub use models::{Bloc, Country, Region, Theme, TradeData};
pub use theme::{ChartTheme, ThemeController};
