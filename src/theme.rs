use serde::Serialize;

pub const THEME_KEY: &str = "theme";
pub const DARK_MODE_CLASS: &str = "dark-mode";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Resolves the startup theme. An empty stored value counts as unset;
    /// anything stored other than `"dark"` means light.
    pub fn resolve(stored: Option<&str>, system_prefers_dark: impl FnOnce() -> bool) -> Self {
        match stored.filter(|value| !value.is_empty()) {
            Some("dark") => Self::Dark,
            Some(_) => Self::Light,
            None => {
                if system_prefers_dark() {
                    Self::Dark
                } else {
                    Self::Light
                }
            }
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn toggle_label(self) -> String {
        let next = self.toggled().as_str();
        format!("Switch to {next} theme")
    }

    pub fn pressed(self) -> bool {
        matches!(self, Self::Dark)
    }
}

/// Client-local key/value storage. Read failures surface as `None`.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&mut self, key: &str, value: &str);
}

pub struct ThemePreference<S> {
    store: S,
    current: Theme,
}

impl<S: PreferenceStore> ThemePreference<S> {
    /// The platform signal is only queried when nothing usable is stored.
    pub fn initialize(store: S, system_prefers_dark: impl FnOnce() -> bool) -> Self {
        let stored = store.load(THEME_KEY);
        let current = Theme::resolve(stored.as_deref(), system_prefers_dark);
        Self { store, current }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        self.store.save(THEME_KEY, self.current.as_str());
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStore(HashMap<String, String>);

    impl MemoryStore {
        fn with_theme(value: &str) -> Self {
            let mut store = Self::default();
            store.save(THEME_KEY, value);
            store
        }
    }

    impl PreferenceStore for MemoryStore {
        fn load(&self, key: &str) -> Option<String> {
            self.0.get(key).cloned()
        }

        fn save(&mut self, key: &str, value: &str) {
            self.0.insert(key.to_string(), value.to_string());
        }
    }

    #[test]
    fn initialize_is_dark_only_for_dark_or_unset_with_dark_system() {
        for system_dark in [false, true] {
            let dark = ThemePreference::initialize(MemoryStore::with_theme("dark"), || system_dark);
            let light = ThemePreference::initialize(MemoryStore::with_theme("light"), || system_dark);
            let unset = ThemePreference::initialize(MemoryStore::default(), || system_dark);

            assert_eq!(dark.current(), Theme::Dark);
            assert_eq!(light.current(), Theme::Light);
            assert_eq!(unset.current() == Theme::Dark, system_dark);
        }
    }

    #[test]
    fn stored_value_skips_platform_query() {
        let preference = ThemePreference::initialize(MemoryStore::with_theme("light"), || {
            panic!("platform signal must not be queried")
        });
        assert_eq!(preference.current(), Theme::Light);
    }

    #[test]
    fn empty_stored_value_counts_as_unset() {
        let preference = ThemePreference::initialize(MemoryStore::with_theme(""), || true);
        assert_eq!(preference.current(), Theme::Dark);
    }

    #[test]
    fn unknown_stored_value_means_light() {
        let preference = ThemePreference::initialize(MemoryStore::with_theme("sepia"), || true);
        assert_eq!(preference.current(), Theme::Light);
    }

    #[test]
    fn toggle_twice_restores_mode_and_stored_value() {
        for stored in ["dark", "light"] {
            let mut preference = ThemePreference::initialize(MemoryStore::with_theme(stored), || false);
            let original = preference.current();

            assert_eq!(preference.toggle(), original.toggled());
            assert_eq!(preference.store.load(THEME_KEY).as_deref(), Some(original.toggled().as_str()));

            assert_eq!(preference.toggle(), original);
            assert_eq!(preference.store.load(THEME_KEY).as_deref(), Some(stored));
        }
    }

    #[test]
    fn toggle_from_unset_persists_explicit_choice() {
        let mut preference = ThemePreference::initialize(MemoryStore::default(), || true);

        assert_eq!(preference.toggle(), Theme::Light);
        assert_eq!(preference.store.load(THEME_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn toggle_control_describes_next_theme() {
        assert_eq!(Theme::Light.toggle_label(), "Switch to dark theme");
        assert!(Theme::Dark.pressed());
        assert!(!Theme::Light.pressed());
    }
}
