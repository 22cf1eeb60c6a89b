/*!
 * GUI application for tradeboard - trade statistics dashboard
 *
 * A cross-platform desktop window providing:
 * - A light/dark theme toggle persisted between runs
 * - The country table, filterable by region
 * - A monthly exports/imports chart styled by the active theme
 * - CSV export of the visible rows
 *
 * Platform support: Windows, macOS, Linux
 */

use eframe::egui;
use std::cell::Cell;
use std::rc::Rc;
use tradeboard::config::Settings;
use tradeboard::format::{self, CssColor, parse_css_color};
use tradeboard::models::{Country, Region};
use tradeboard::storage::{self, FileStore, KeyValueStore, MemoryStore};
use tradeboard::theme::{ChartTheme, THEME_ATTRIBUTE, ThemeController, ThemeSink};
use tradeboard::{dataset, palette};

fn main() -> Result<(), eframe::Error> {
    // Enable logging for better debugging
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Trade Dashboard - tradeboard"),
        ..Default::default()
    };

    eframe::run_native(
        "Trade Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(DashboardApp::new(Settings::from_env())))),
    )
}

/// Page state the theme controller writes into; applied to the window each frame.
#[derive(Debug, Default)]
struct WindowSink {
    dark: bool,
    icon: String,
    label: String,
    logo: String,
}

impl ThemeSink for WindowSink {
    fn set_root_attribute(&mut self, name: &str, value: &str) {
        if name == THEME_ATTRIBUTE {
            self.dark = value == "dark";
        }
    }

    fn set_indicator(&mut self, icon: &str, label: &str) {
        self.icon = icon.to_string();
        self.label = label.to_string();
    }

    fn set_logo_source(&mut self, path: &str) {
        self.logo = path.to_string();
    }
}

/// Falls back to memory when the settings file cannot be opened.
enum Store {
    File(FileStore),
    Memory(MemoryStore),
}

impl KeyValueStore for Store {
    fn get(&self, key: &str) -> Option<String> {
        match self {
            Store::File(s) => s.get(key),
            Store::Memory(s) => s.get(key),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), tradeboard::Error> {
        match self {
            Store::File(s) => s.set(key, value),
            Store::Memory(s) => s.set(key, value),
        }
    }
}

/// Main application state
struct DashboardApp {
    themes: ThemeController<Store, WindowSink>,
    chart_theme: ChartTheme,
    chart_stale: Rc<Cell<bool>>,
    region_filter: Option<Region>,
    status_message: String,
    error_message: String,
}

impl DashboardApp {
    fn new(settings: Settings) -> Self {
        let store = match FileStore::open(&settings.store_path) {
            Ok(s) => Store::File(s),
            Err(err) => {
                log::warn!("theme will not persist: {err}");
                Store::Memory(MemoryStore::default())
            }
        };
        let mut themes = ThemeController::init(store, WindowSink::default());
        let chart_stale = Rc::new(Cell::new(false));
        let flag = Rc::clone(&chart_stale);
        themes.subscribe(move |_| flag.set(true));

        Self {
            chart_theme: themes.theme_config(),
            themes,
            chart_stale,
            region_filter: None,
            status_message: String::new(),
            error_message: String::new(),
        }
    }

    fn visible_countries(&self) -> Vec<&'static Country> {
        match self.region_filter {
            Some(region) => dataset::countries_by_region(region.name()),
            None => dataset::trade_data().countries.iter().collect(),
        }
    }

    fn export_csv(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .set_file_name("countries.csv")
            .add_filter("CSV", &["csv"])
            .save_file()
        else {
            return;
        };
        let rows = self.visible_countries();
        match storage::save_countries_csv(&rows, &path) {
            Ok(()) => {
                self.status_message = format!("Saved {} rows to {}", rows.len(), path.display());
                self.error_message.clear();
            }
            Err(err) => {
                self.error_message = format!("Failed to save CSV: {err:#}");
                self.status_message.clear();
            }
        }
    }

    fn header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("Trade Dashboard");
            ui.label(egui::RichText::new(&self.themes.sink().logo).weak().small());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let sink = self.themes.sink();
                let text = format!("{} {}", sink.icon, sink.label);
                if ui.button(text).on_hover_text("Toggle theme").clicked() {
                    self.themes.toggle_theme();
                }
            });
        });
    }

    fn country_table(&self, ui: &mut egui::Ui) {
        egui::Grid::new("countries")
            .striped(true)
            .num_columns(8)
            .show(ui, |ui| {
                for title in [
                    "Country", "Code", "Region", "Export", "Import", "Total", "YoY", "MoM",
                ] {
                    ui.strong(title);
                }
                ui.end_row();

                for c in self.visible_countries() {
                    ui.label(c.name);
                    ui.monospace(c.code);
                    ui.colored_label(hex_color32(palette::region_color(c.region)), c.region.name())
                        .on_hover_text(format::region_tag(c.region));
                    ui.label(format::format_number_default(c.export));
                    ui.label(format::format_number_default(c.import));
                    ui.label(format::format_number_default(c.total()));
                    ui.colored_label(
                        hex_color32(palette::change_color(c.yoy_change)),
                        format!("{:+.1}%", c.yoy_change),
                    );
                    ui.colored_label(
                        hex_color32(palette::change_color(c.mom_change)),
                        format!("{:+.1}%", c.mom_change),
                    );
                    ui.end_row();
                }
            });
    }

    fn monthly_chart(&self, ui: &mut egui::Ui) {
        let monthly = &dataset::trade_data().monthly;
        let size = egui::vec2(ui.available_width(), 220.0);
        let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
        let rect = response.rect.shrink(12.0);

        let grid = css_color32(&self.chart_theme.split_line.line_style.color);
        let axis = css_color32(&self.chart_theme.axis_line.line_style.color);
        let y_max = monthly
            .exports
            .iter()
            .chain(monthly.imports)
            .copied()
            .fold(0.0_f64, f64::max)
            * 1.1;
        let n = monthly.len().max(2) - 1;
        let to_screen = |i: usize, v: f64| {
            egui::pos2(
                rect.left() + rect.width() * i as f32 / n as f32,
                rect.bottom() - rect.height() * (v / y_max) as f32,
            )
        };

        for step in 1..=5 {
            let y = rect.bottom() - rect.height() * step as f32 / 5.0;
            painter.line_segment(
                [egui::pos2(rect.left(), y), egui::pos2(rect.right(), y)],
                egui::Stroke::new(1.0, grid),
            );
        }
        let axis = egui::Stroke::new(1.0, axis);
        painter.line_segment([rect.left_bottom(), rect.right_bottom()], axis);
        painter.line_segment([rect.left_top(), rect.left_bottom()], axis);

        for (values, color) in [
            (monthly.exports, palette::PRIMARY),
            (monthly.imports, palette::WARNING),
        ] {
            let color = hex_color32(color);
            let points: Vec<egui::Pos2> =
                values.iter().enumerate().map(|(i, v)| to_screen(i, *v)).collect();
            for p in &points {
                painter.circle_filled(*p, 3.0, color);
            }
            painter.add(egui::Shape::line(points, egui::Stroke::new(2.0, color)));
        }

        let label_color = css_color32(&self.chart_theme.axis_label.color);
        response.on_hover_ui(|ui| {
            ui.colored_label(label_color, monthly.labels.join(" · "));
        });
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.chart_stale.replace(false) {
            self.chart_theme = self.themes.theme_config();
        }
        let visuals = if self.themes.sink().dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        ctx.set_visuals(visuals);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.header(ui);
            ui.separator();

            ui.horizontal(|ui| {
                ui.label("Region:");
                let selected = self.region_filter.map_or("All", |r| r.name());
                egui::ComboBox::from_label("")
                    .selected_text(selected)
                    .show_ui(ui, |ui| {
                        ui.selectable_value(&mut self.region_filter, None, "All");
                        for region in Region::ALL {
                            let label = region.name();
                            ui.selectable_value(&mut self.region_filter, Some(region), label);
                        }
                    });
                if ui.button("Export CSV").clicked() {
                    self.export_csv();
                }
            });
            ui.add_space(8.0);

            ui.group(|ui| {
                ui.label("Monthly exports and imports");
                self.monthly_chart(ui);
            });
            ui.add_space(8.0);

            egui::ScrollArea::vertical().show(ui, |ui| {
                self.country_table(ui);

                ui.add_space(10.0);
                if !self.status_message.is_empty() {
                    ui.colored_label(hex_color32(palette::SUCCESS), &self.status_message);
                }
                if !self.error_message.is_empty() {
                    ui.colored_label(hex_color32(palette::DANGER), &self.error_message);
                }
            });
        });
    }
}

fn to_color32(c: CssColor) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(c.r, c.g, c.b, (c.a * 255.0).round() as u8)
}

fn css_color32(s: &str) -> egui::Color32 {
    parse_css_color(s).map(to_color32).unwrap_or(egui::Color32::GRAY)
}

fn hex_color32(hex: &str) -> egui::Color32 {
    css_color32(hex)
}
