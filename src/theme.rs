//! Color theme and dark-mode management.
//!
//! The active theme name is mirrored to `data-color-theme` on `<html>`; dark
//! mode adds `data-theme="dark"` and removes it when off. Both preferences
//! persist to localStorage on every change. While the user has never chosen
//! dark mode explicitly (no `darkMode` key stored), the OS-level
//! `prefers-color-scheme` preference is followed; an explicit choice wins
//! permanently.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::MediaQueryListEvent;

use crate::dom::{self, Elements};
use crate::events;
use crate::storage;

pub const DEFAULT_THEME: &str = "ocean-blue";

const LABEL_TO_LIGHT: &str = r#"<i class="fas fa-sun"></i> Light Mode"#;
const LABEL_TO_DARK: &str = r#"<i class="fas fa-moon"></i> Dark Mode"#;

// ── Preference model ──

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemePrefs {
    pub theme: String,
    pub dark: bool,
}

impl Default for ThemePrefs {
    fn default() -> Self {
        ThemePrefs {
            theme: DEFAULT_THEME.to_string(),
            dark: false,
        }
    }
}

impl ThemePrefs {
    pub fn set_theme(&mut self, name: &str) {
        self.theme = name.to_string();
    }

    pub fn toggle_dark(&mut self) -> bool {
        self.dark = !self.dark;
        self.dark
    }

    /// Value for the `data-theme` attribute: present only in dark mode.
    pub fn dark_attr(&self) -> Option<&'static str> {
        self.dark.then_some("dark")
    }
}

/// Parse a stored `darkMode` value (`"true"` / `"false"` literal text).
pub fn parse_dark_flag(raw: &str) -> Option<bool> {
    serde_json::from_str(raw).ok()
}

/// Label the dark-mode toggle should carry for the given state.
pub fn toggle_label(dark: bool) -> &'static str {
    if dark { LABEL_TO_LIGHT } else { LABEL_TO_DARK }
}

// ── Controller ──

pub struct ThemeManager {
    els: Elements,
    prefs: RefCell<ThemePrefs>,
}

impl ThemeManager {
    pub fn mount(els: &Elements) -> Rc<Self> {
        let mut prefs = ThemePrefs::default();
        if let Some(saved) = storage::get(storage::THEME) {
            prefs.theme = saved;
        }
        if let Some(saved) = storage::get(storage::DARK_MODE) {
            if let Some(dark) = parse_dark_flag(&saved) {
                prefs.dark = dark;
            }
        }

        let mgr = Rc::new(ThemeManager {
            els: els.clone(),
            prefs: RefCell::new(prefs),
        });
        mgr.bind_events();
        mgr.highlight_active_button();
        mgr.sync_toggle_label();
        mgr.apply();
        mgr
    }

    fn bind_events(self: &Rc<Self>) {
        for btn in &self.els.theme_buttons {
            let Some(name) = btn.get_attribute("data-theme") else {
                continue;
            };
            let mgr = self.clone();
            events::on_click(btn, move |_| mgr.set_theme(&name));
        }

        if let Some(toggle) = &self.els.dark_mode_toggle {
            let mgr = self.clone();
            events::on_click(toggle, move |_| mgr.toggle_dark_mode());
        }

        // Follow the OS preference until the user decides explicitly.
        if let Ok(Some(mql)) = dom::window().match_media("(prefers-color-scheme: dark)") {
            let mgr = self.clone();
            events::on_event(&mql, "change", move |e| {
                if storage::get(storage::DARK_MODE).is_some() {
                    return;
                }
                let e: MediaQueryListEvent = e.unchecked_into();
                mgr.prefs.borrow_mut().dark = e.matches();
                mgr.sync_toggle_label();
                mgr.apply();
            });
        }
    }

    pub fn set_theme(&self, name: &str) {
        self.prefs.borrow_mut().set_theme(name);
        self.highlight_active_button();
        self.apply();
        self.persist();
    }

    pub fn toggle_dark_mode(&self) {
        self.prefs.borrow_mut().toggle_dark();
        self.sync_toggle_label();
        self.apply();
        self.persist();
    }

    /// Move the `active` class to the button matching the current theme.
    /// A theme without a matching button simply leaves none highlighted.
    fn highlight_active_button(&self) {
        let current = self.prefs.borrow().theme.clone();
        for btn in &self.els.theme_buttons {
            dom::remove_class(btn, "active");
            if btn.get_attribute("data-theme").as_deref() == Some(current.as_str()) {
                dom::add_class(btn, "active");
            }
        }
    }

    fn sync_toggle_label(&self) {
        if let Some(toggle) = &self.els.dark_mode_toggle {
            toggle.set_inner_html(toggle_label(self.prefs.borrow().dark));
        }
    }

    fn apply(&self) {
        let prefs = self.prefs.borrow();
        let _ = self.els.root.set_attribute("data-color-theme", &prefs.theme);
        match prefs.dark_attr() {
            Some(v) => {
                let _ = self.els.root.set_attribute("data-theme", v);
            }
            None => {
                let _ = self.els.root.remove_attribute("data-theme");
            }
        }
    }

    fn persist(&self) {
        let prefs = self.prefs.borrow();
        storage::set(storage::THEME, &prefs.theme);
        storage::set(storage::DARK_MODE, if prefs.dark { "true" } else { "false" });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_prefs_default_to_ocean_blue_light() {
        let prefs = ThemePrefs::default();
        assert_eq!(prefs.theme, "ocean-blue");
        assert!(!prefs.dark);
        assert_eq!(prefs.dark_attr(), None);
    }

    #[test]
    fn double_toggle_restores_dark_attr() {
        let mut prefs = ThemePrefs::default();
        assert!(prefs.toggle_dark());
        assert_eq!(prefs.dark_attr(), Some("dark"));
        assert!(!prefs.toggle_dark());
        assert_eq!(prefs.dark_attr(), None);
    }

    #[test]
    fn dark_flag_round_trips_through_stored_text() {
        assert_eq!(parse_dark_flag("true"), Some(true));
        assert_eq!(parse_dark_flag("false"), Some(false));
        assert_eq!(parse_dark_flag("maybe"), None);
    }

    #[test]
    fn toggle_label_offers_the_opposite_mode() {
        assert!(toggle_label(true).contains("Light Mode"));
        assert!(toggle_label(false).contains("Dark Mode"));
    }

    #[test]
    fn set_theme_updates_name() {
        let mut prefs = ThemePrefs::default();
        prefs.set_theme("sunset-red");
        assert_eq!(prefs.theme, "sunset-red");
    }
}
