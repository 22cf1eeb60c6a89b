use std::cell::RefCell;
use std::rc::Rc;
use tradeboard::models::Theme;
use tradeboard::storage::{KeyValueStore, MemoryStore};
use tradeboard::theme::{
    ChartTheme, NoopSink, THEME_ATTRIBUTE, THEME_KEY, ThemeController, ThemeSink,
};

type Log = Rc<RefCell<Vec<String>>>;

struct RecordingStore {
    inner: MemoryStore,
    log: Log,
    fail: bool,
}

impl KeyValueStore for RecordingStore {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), tradeboard::Error> {
        self.log.borrow_mut().push(format!("store {key}={value}"));
        if self.fail {
            return Err(tradeboard::Error::StoreIo {
                path: "readonly.json".into(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            });
        }
        self.inner.set(key, value)
    }
}

struct RecordingSink {
    log: Log,
}

impl ThemeSink for RecordingSink {
    fn set_root_attribute(&mut self, name: &str, value: &str) {
        self.log.borrow_mut().push(format!("attr {name}={value}"));
    }

    fn set_indicator(&mut self, icon: &str, label: &str) {
        self.log.borrow_mut().push(format!("indicator {icon} {label}"));
    }

    fn set_logo_source(&mut self, path: &str) {
        self.log.borrow_mut().push(format!("logo {path}"));
    }
}

fn recording(
    initial: Option<&str>,
    fail: bool,
) -> (ThemeController<RecordingStore, RecordingSink>, Log) {
    let log: Log = Rc::default();
    let inner = match initial {
        Some(v) => MemoryStore::with_entry(THEME_KEY, v),
        None => MemoryStore::default(),
    };
    let store = RecordingStore {
        inner,
        log: Rc::clone(&log),
        fail,
    };
    let sink = RecordingSink {
        log: Rc::clone(&log),
    };
    (ThemeController::init(store, sink), log)
}

#[test]
fn init_restores_persisted_theme_without_rerender() {
    let (mut c, log) = recording(Some("light"), false);
    let calls = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&calls);
    c.subscribe(move |_| *counter.borrow_mut() += 1);

    assert_eq!(c.theme(), Theme::Light);
    assert_eq!(
        *log.borrow(),
        vec![
            format!("attr {THEME_ATTRIBUTE}=light"),
            "store theme=light".to_string(),
            "indicator \u{2600}\u{FE0F} Light".to_string(),
            "logo assets/logo-light.svg".to_string(),
        ]
    );
    assert_eq!(*calls.borrow(), 0);
}

#[test]
fn init_falls_back_to_dark_for_unknown_values() {
    let (c, _) = recording(Some("LIGHT"), false);
    assert_eq!(c.theme(), Theme::Dark);
}

#[test]
fn set_theme_applies_steps_in_order_and_observers_last() {
    let (mut c, log) = recording(None, false);
    let obs_log = Rc::clone(&log);
    c.subscribe(move |t| obs_log.borrow_mut().push(format!("observer {t}")));
    log.borrow_mut().clear();

    c.set_theme(Theme::Light, true);

    assert_eq!(
        *log.borrow(),
        vec![
            "attr data-theme=light".to_string(),
            "store theme=light".to_string(),
            "indicator \u{2600}\u{FE0F} Light".to_string(),
            "logo assets/logo-light.svg".to_string(),
            "observer light".to_string(),
        ]
    );
}

#[test]
fn dark_indicator_uses_moon_and_dark_logo() {
    let (mut c, log) = recording(Some("light"), false);
    log.borrow_mut().clear();
    c.set_theme(Theme::Dark, false);
    let log = log.borrow();
    assert!(log.contains(&"indicator \u{1F319} Dark".to_string()));
    assert!(log.contains(&"logo assets/logo-dark.svg".to_string()));
}

#[test]
fn observers_see_the_applied_theme() {
    let mut c = ThemeController::init(MemoryStore::default(), NoopSink);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    c.subscribe(move |t| sink.borrow_mut().push(t));

    c.toggle_theme();
    assert_eq!(*seen.borrow(), vec![Theme::Light]);
    assert_eq!(c.store().get(THEME_KEY).as_deref(), Some("light"));
}

#[test]
fn set_theme_is_idempotent() {
    let mut c = ThemeController::init(MemoryStore::default(), NoopSink);
    c.set_theme(Theme::Light, false);
    let first = (c.theme(), c.store().clone(), c.theme_config());
    c.set_theme(Theme::Light, false);
    let second = (c.theme(), c.store().clone(), c.theme_config());
    assert_eq!(first, second);
}

#[test]
fn toggle_twice_restores_original() {
    let mut c = ThemeController::init(MemoryStore::default(), NoopSink);
    let original = c.theme();
    c.toggle_theme();
    assert_ne!(c.theme(), original);
    c.toggle_theme();
    assert_eq!(c.theme(), original);
    assert_eq!(c.store().get(THEME_KEY).as_deref(), Some(original.as_str()));
}

#[test]
fn set_theme_without_rerender_skips_observers() {
    let mut c = ThemeController::init(MemoryStore::default(), NoopSink);
    let calls = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&calls);
    c.subscribe(move |_| *counter.borrow_mut() += 1);

    c.set_theme(Theme::Light, false);
    c.set_theme(Theme::Dark, true);
    c.toggle_theme();
    assert_eq!(*calls.borrow(), 2);
}

#[test]
fn unsubscribed_observers_are_not_called() {
    let mut c = ThemeController::init(MemoryStore::default(), NoopSink);
    let calls = Rc::new(RefCell::new(Vec::new()));
    let a = Rc::clone(&calls);
    let b = Rc::clone(&calls);
    let first = c.subscribe(move |_| a.borrow_mut().push("first"));
    c.subscribe(move |_| b.borrow_mut().push("second"));

    assert!(c.unsubscribe(first));
    assert!(!c.unsubscribe(first));
    c.toggle_theme();
    assert_eq!(*calls.borrow(), vec!["second"]);
}

#[test]
fn store_failure_does_not_stop_propagation() {
    let (mut c, log) = recording(None, true);
    log.borrow_mut().clear();
    c.set_theme(Theme::Light, false);
    assert_eq!(c.theme(), Theme::Light);
    assert_eq!(
        log.borrow().last().map(String::as_str),
        Some("logo assets/logo-light.svg")
    );
}

#[test]
fn theme_config_is_stable_and_follows_the_flag() {
    let mut c = ThemeController::init(MemoryStore::default(), NoopSink);
    assert_eq!(c.theme_config(), c.theme_config());
    assert_eq!(c.theme_config(), ChartTheme::for_theme(Theme::Dark));
    assert_eq!(c.theme_config().title.text_style.color, "#fff");
    assert_eq!(c.theme_config().axis_label.color, "rgba(255,255,255,0.6)");

    c.toggle_theme();
    let light = c.theme_config();
    assert_eq!(light.title.text_style.color, "#1a1f2e");
    assert_eq!(light.tooltip.background_color, "rgba(255, 255, 255, 0.98)");
    assert_eq!(light.tooltip.border_color, "rgba(0, 188, 212, 0.3)");
    assert!(light.tooltip.extra_css_text.contains("rgba(0,0,0,0.15)"));
    assert_ne!(light, ChartTheme::for_theme(Theme::Dark));
}

#[test]
fn controllers_are_independent() {
    let mut a = ThemeController::init(MemoryStore::default(), NoopSink);
    let b = ThemeController::init(MemoryStore::default(), NoopSink);
    a.toggle_theme();
    assert_eq!(a.theme(), Theme::Light);
    assert_eq!(b.theme(), Theme::Dark);
}
