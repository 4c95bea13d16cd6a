//! Light/dark theme preference
//!
//! Persisted in LocalStorage under a fixed key, read once at load and
//! written on every toggle.

use crate::consts::THEME_STORAGE_KEY;
use crate::persistence::PreferenceStore;

/// Page theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Only an exact `"dark"` selects dark mode; anything else is light
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        *self == Theme::Dark
    }

    /// Glyph shown on the toggle button
    pub fn icon(&self) -> &'static str {
        match self {
            Theme::Light => "☀️",
            Theme::Dark => "🌙",
        }
    }

    /// Canvas fill for background particles
    pub fn particle_fill(&self) -> &'static str {
        match self {
            Theme::Light => "rgba(0, 0, 0, 0.15)",
            Theme::Dark => "rgba(255, 255, 255, 0.2)",
        }
    }

    /// Load the saved theme
    pub fn load(store: &impl PreferenceStore) -> Self {
        let theme = Self::from_stored(store.get(THEME_STORAGE_KEY).as_deref());
        log::info!("Theme: {}", theme.as_str());
        theme
    }

    /// Persist this theme
    pub fn save(&self, store: &impl PreferenceStore) {
        store.set(THEME_STORAGE_KEY, self.as_str());
    }
}

/// Theme toggle state: flips and persists on each click
pub struct ThemeToggle<S: PreferenceStore> {
    store: S,
    theme: Theme,
}

impl<S: PreferenceStore> ThemeToggle<S> {
    /// Read the saved preference once
    pub fn new(store: S) -> Self {
        let theme = Theme::load(&store);
        Self { store, theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Handle a click: flip, persist, return the new theme
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme.save(&self.store);
        self.theme
    }
}
