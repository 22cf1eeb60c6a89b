//! Theme state, its propagation to the page, and the chart styling derived from it.
//!
//! A [`ThemeController`] owns the current [`Theme`]. Every change goes through
//! [`ThemeController::set_theme`], which applies it in a fixed order:
//!
//! 1. in-memory flag
//! 2. `data-theme` attribute on the document root ([`ThemeSink::set_root_attribute`])
//! 3. persisted value under [`THEME_KEY`]
//! 4. indicator glyph and label ([`ThemeSink::set_indicator`])
//! 5. header logo ([`ThemeSink::set_logo_source`])
//! 6. change observers, only when a re-render was requested
//!
//! Observers therefore always see the fully applied theme.

use crate::models::Theme;
use crate::storage::KeyValueStore;
use log::{debug, warn};
use serde::Serialize;

/// Storage key the theme is persisted under.
pub const THEME_KEY: &str = "theme";

/// Document attribute CSS theming hooks read.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Where theme changes become visible. Every method defaults to a no-op, so a
/// sink only implements the parts of the page it actually has.
pub trait ThemeSink {
    fn set_root_attribute(&mut self, _name: &str, _value: &str) {}

    fn set_indicator(&mut self, _icon: &str, _label: &str) {}

    fn set_logo_source(&mut self, _path: &str) {}
}

/// A page with none of the theme elements.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl ThemeSink for NoopSink {}

impl<S: ThemeSink + ?Sized> ThemeSink for &mut S {
    fn set_root_attribute(&mut self, name: &str, value: &str) {
        (**self).set_root_attribute(name, value);
    }

    fn set_indicator(&mut self, icon: &str, label: &str) {
        (**self).set_indicator(icon, label);
    }

    fn set_logo_source(&mut self, path: &str) {
        (**self).set_logo_source(path);
    }
}

/// Handle returned by [`ThemeController::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(Theme)>;

/// Owns the current theme and fans changes out to storage, the page and observers.
pub struct ThemeController<S, D> {
    theme: Theme,
    store: S,
    sink: D,
    observers: Vec<(SubscriptionId, Observer)>,
    next_id: u64,
}

impl<S, D> std::fmt::Debug for ThemeController<S, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeController")
            .field("theme", &self.theme)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

impl<S: KeyValueStore, D: ThemeSink> ThemeController<S, D> {
    /// Restore the persisted theme (dark when unset or unreadable) and apply it
    /// without notifying observers; there are none yet at startup.
    pub fn init(store: S, sink: D) -> Self {
        let theme = match store.get(THEME_KEY) {
            None => Theme::default(),
            Some(raw) => raw.parse().unwrap_or_else(|err| {
                warn!("ignoring persisted theme: {err}");
                Theme::default()
            }),
        };
        let mut controller = Self {
            theme,
            store,
            sink,
            observers: Vec::new(),
            next_id: 0,
        };
        controller.set_theme(theme, false);
        controller
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Apply `theme` everywhere; with `rerender`, also notify observers.
    ///
    /// Calling it twice with the same arguments leaves the same state. A failed
    /// write to the store is logged and the remaining steps still run.
    pub fn set_theme(&mut self, theme: Theme, rerender: bool) {
        debug!("theme -> {theme} (rerender: {rerender})");
        self.theme = theme;
        self.sink.set_root_attribute(THEME_ATTRIBUTE, theme.as_str());
        if let Err(err) = self.store.set(THEME_KEY, theme.as_str()) {
            warn!("could not persist theme: {err}");
        }
        self.sink.set_indicator(theme.icon(), theme.label());
        self.sink.set_logo_source(theme.logo_path());
        if rerender {
            for (_, observer) in self.observers.iter_mut() {
                observer(theme);
            }
        }
    }

    /// Switch to the other theme and re-render.
    pub fn toggle_theme(&mut self) {
        self.set_theme(self.theme.toggled(), true);
    }

    /// Chart styling for the current theme.
    pub fn theme_config(&self) -> ChartTheme {
        ChartTheme::for_theme(self.theme)
    }

    /// Register a callback run on every re-rendering theme change, in
    /// subscription order.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(Theme) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Returns `false` when `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sid, _)| *sid != id);
        self.observers.len() != before
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn sink(&self) -> &D {
        &self.sink
    }
}

// ------------------------ Chart styling ------------------------

/// Styling handed to the charting layer, shaped like its option object
/// (field names serialize to camelCase).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartTheme {
    pub background_color: String,
    pub text_style: FontStyle,
    pub title: TitleStyle,
    pub legend: LegendStyle,
    pub tooltip: TooltipStyle,
    pub axis_line: AxisLineStyle,
    pub axis_label: ColorStyle,
    pub split_line: AxisLineStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FontStyle {
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u16>,
}

impl FontStyle {
    fn color(color: &str) -> Self {
        Self {
            color: color.to_string(),
            font_family: None,
            font_weight: None,
            font_size: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleStyle {
    pub text_style: FontStyle,
    pub subtext_style: FontStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendStyle {
    pub text_style: FontStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipStyle {
    pub background_color: String,
    pub border_color: String,
    pub border_width: u32,
    pub text_style: FontStyle,
    pub extra_css_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisLineStyle {
    pub line_style: ColorStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorStyle {
    pub color: String,
}

impl ColorStyle {
    fn new(color: &str) -> Self {
        Self {
            color: color.to_string(),
        }
    }
}

impl ChartTheme {
    /// Derive the styling for `theme`. Depends on nothing else, so equal themes
    /// give equal values.
    pub fn for_theme(theme: Theme) -> Self {
        let dark = theme.is_dark();
        let pick = |d: &'static str, l: &'static str| if dark { d } else { l };

        ChartTheme {
            background_color: "transparent".to_string(),
            text_style: FontStyle {
                font_family: Some("Inter".to_string()),
                ..FontStyle::color(pick("rgba(255,255,255,0.85)", "rgba(0,0,0,0.85)"))
            },
            title: TitleStyle {
                text_style: FontStyle {
                    font_weight: Some(600),
                    ..FontStyle::color(pick("#fff", "#1a1f2e"))
                },
                subtext_style: FontStyle::color(pick("rgba(255,255,255,0.5)", "rgba(0,0,0,0.5)")),
            },
            legend: LegendStyle {
                text_style: FontStyle::color(pick("rgba(255,255,255,0.7)", "rgba(0,0,0,0.7)")),
            },
            tooltip: TooltipStyle {
                background_color: pick("rgba(26, 31, 46, 0.95)", "rgba(255, 255, 255, 0.98)")
                    .to_string(),
                border_color: "rgba(0, 188, 212, 0.3)".to_string(),
                border_width: 1,
                text_style: FontStyle {
                    font_size: Some(12),
                    ..FontStyle::color(pick("#fff", "#1a1f2e"))
                },
                extra_css_text: format!(
                    "box-shadow: 0 8px 32px {}; border-radius: 10px; padding: 10px 14px;",
                    pick("rgba(0,0,0,0.4)", "rgba(0,0,0,0.15)")
                ),
            },
            axis_line: AxisLineStyle {
                line_style: ColorStyle::new(pick("rgba(255,255,255,0.1)", "rgba(0,0,0,0.1)")),
            },
            axis_label: ColorStyle::new(pick("rgba(255,255,255,0.6)", "rgba(0,0,0,0.6)")),
            split_line: AxisLineStyle {
                line_style: ColorStyle::new(pick("rgba(255,255,255,0.05)", "rgba(0,0,0,0.05)")),
            },
        }
    }
}
