use std::{collections::HashMap, fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }

    // value of the document-level data-theme attribute; light is the absence of it
    pub fn marker(self) -> Option<&'static str> {
        match self {
            Self::Light => None,
            Self::Dark => Some("dark"),
        }
    }

    // the toggle offers the opposite theme: a sun while dark, a moon while light
    pub fn shows_sun(self) -> bool {
        self == Self::Dark
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(anyhow::Error::msg(format!("unknown theme {other:?}"))),
        }
    }
}

// persisted theme preference
//
// the browser implementation is backed by local storage; tests use MemoryStore
pub trait ThemeStore {
    // the stored value exactly as persisted
    fn raw(&self) -> Option<String>;

    fn save(&mut self, theme: Theme);

    fn load(&self) -> Option<Theme> {
        self.raw().and_then(|value| value.parse().ok())
    }

    // any non-empty stored value counts as an explicit choice, even one we can't parse
    fn has_preference(&self) -> bool {
        self.raw().is_some_and(|value| !value.is_empty())
    }
}

// the theme applied at page load
//
// only a persisted preference is honoured here.  the os color scheme is deliberately
// not consulted for the first paint; it only takes effect through system_changed()
pub fn initial_theme(store: &impl ThemeStore) -> Theme {
    store.load().unwrap_or_default()
}

pub fn toggle_theme(current: Theme, store: &mut impl ThemeStore) -> Theme {
    let next = current.toggled();
    store.save(next);

    debug!({ theme = %next }, "theme toggled");
    next
}

// react to a change of the os color scheme
//
// returns the theme to apply, or None if an explicit preference has been persisted
pub fn system_changed(store: &impl ThemeStore, prefers_dark: bool) -> Option<Theme> {
    if store.has_preference() {
        return None;
    }
    Some(Theme::from_prefers_dark(prefers_dark))
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    pub key: String,
    pub values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new(key: &str) -> Self {
        MemoryStore {
            key: key.to_owned(),
            values: HashMap::new(),
        }
    }
}

impl ThemeStore for MemoryStore {
    fn raw(&self) -> Option<String> {
        self.values.get(&self.key).cloned()
    }

    fn save(&mut self, theme: Theme) {
        self.values.insert(self.key.clone(), theme.as_str().to_owned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_light_without_preference() {
        let store = MemoryStore::new("theme");

        assert_eq!(initial_theme(&store), Theme::Light);
        assert_eq!(Theme::Light.marker(), None);
    }

    #[test]
    fn persisted_value_wins() {
        let mut store = MemoryStore::new("theme");
        store.values.insert("theme".into(), "dark".into());

        assert_eq!(initial_theme(&store), Theme::Dark);
        assert_eq!(Theme::Dark.marker(), Some("dark"));
    }

    #[test]
    fn garbage_in_storage_is_ignored() {
        let mut store = MemoryStore::new("theme");
        store.values.insert("theme".into(), "sepia".into());

        assert_eq!(initial_theme(&store), Theme::Light);
        assert!("sepia".parse::<Theme>().is_err());
    }

    #[test]
    fn unreadable_preference_still_blocks_os_changes() {
        let mut store = MemoryStore::new("theme");
        store.values.insert("theme".into(), "sepia".into());

        assert!(store.has_preference());
        assert_eq!(system_changed(&store, true), None);
    }

    #[test]
    fn empty_value_is_no_preference() {
        let mut store = MemoryStore::new("theme");
        store.values.insert("theme".into(), String::new());

        assert!(!store.has_preference());
        assert_eq!(system_changed(&store, true), Some(Theme::Dark));
    }

    #[test]
    fn toggle_is_an_involution() {
        let mut store = MemoryStore::new("theme");
        store.values.insert("theme".into(), "light".into());

        let start = initial_theme(&store);
        let once = toggle_theme(start, &mut store);
        assert_eq!(once, Theme::Dark);
        assert_eq!(store.values["theme"], "dark");

        let twice = toggle_theme(once, &mut store);
        assert_eq!(twice, start);
        assert_eq!(twice.marker(), start.marker());
        assert_eq!(store.values["theme"], "light");
    }

    #[test]
    fn os_change_applies_until_first_toggle() {
        let mut store = MemoryStore::new("theme");

        assert_eq!(system_changed(&store, true), Some(Theme::Dark));
        assert_eq!(system_changed(&store, false), Some(Theme::Light));

        toggle_theme(Theme::Light, &mut store);

        assert_eq!(system_changed(&store, false), None);
        assert_eq!(system_changed(&store, true), None);
    }

    #[test]
    fn icon_offers_the_other_theme() {
        assert!(Theme::Dark.shows_sun());
        assert!(!Theme::Light.shows_sun());
    }

    #[test]
    fn display_and_parse_use_storage_names() {
        assert_eq!(Theme::Dark.to_string(), "dark");
        assert_eq!("light".parse::<Theme>().unwrap(), Theme::Light);
    }
}
