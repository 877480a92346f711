//! Light/dark theme selection and persistence.
//!
//! The applied theme lives in `PageState`; the store only remembers it
//! across visits. Toggling never fails visibly: if the write is rejected we
//! log and keep the new theme for this page view.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use serde::{Deserialize, Serialize};

use crate::consts::THEME_STORAGE_KEY;
use crate::port::{Action, ElementRef, Icon};
use crate::store::PreferenceStore;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything unrecognised is treated as absent.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Icon on the toggle: the moon invites switching to dark, the sun back.
    #[must_use]
    pub fn icon(self) -> Icon {
        match self {
            Self::Light => Icon::Moon,
            Self::Dark => Icon::Sun,
        }
    }
}

/// Read the stored preference, defaulting to light.
pub fn initial_theme(store: &dyn PreferenceStore) -> Theme {
    store
        .load(THEME_STORAGE_KEY)
        .and_then(|raw| Theme::parse(&raw))
        .unwrap_or_default()
}

/// Actions that make `theme` the visible theme.
#[must_use]
pub fn apply_theme(theme: Theme) -> Vec<Action> {
    vec![
        Action::SetTheme(theme),
        Action::SetIcon { element: ElementRef::ThemeToggle, icon: theme.icon() },
    ]
}

/// Flip `current`, persist the result, and return it with its actions.
pub fn toggle_theme(current: Theme, store: &mut dyn PreferenceStore) -> (Theme, Vec<Action>) {
    let next = current.toggled();
    if let Err(err) = store.save(THEME_STORAGE_KEY, next.as_str()) {
        tracing::warn!(error = %err, theme = next.as_str(), "theme preference not saved");
    }
    tracing::debug!(from = current.as_str(), to = next.as_str(), "theme toggled");
    (next, apply_theme(next))
}
