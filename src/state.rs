//! Page state snapshot handed to every event handler.
//!
//! DESIGN
//! ======
//! This mirrors what is currently on screen so handlers can decide what to
//! change without reading the document back. Only the theme outlives the
//! page view, and that goes through `PreferenceStore`.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::collections::HashSet;

use crate::form::FormState;
use crate::submit::Submission;
use crate::theme::Theme;

/// A progress bar animated to `progress` percent once it scrolls into view.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillBar {
    pub id: String,
    pub progress: f64,
}

impl SkillBar {
    /// Build from the raw `data-progress` attribute, clamped to `0..=100`.
    /// Missing or unparsable values animate to zero.
    #[must_use]
    pub fn from_attr(id: impl Into<String>, raw: Option<&str>) -> Self {
        let progress = raw.and_then(parse_percent).map_or(0.0, |v| v.clamp(0.0, 100.0));
        Self { id: id.into(), progress }
    }
}

fn parse_percent(raw: &str) -> Option<f64> {
    match raw.trim().trim_end_matches('%').parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v),
        _ => None,
    }
}

/// Element ids discovered by the host when the page loads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageElements {
    /// Section ids in document order.
    pub sections: Vec<String>,
    /// Raw `href` of every nav link. Only `#<section>` links ever light up.
    pub nav_links: Vec<String>,
    pub reveals: Vec<String>,
    pub skill_bars: Vec<SkillBar>,
}

/// Mobile menu state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

/// Scroll-derived presentation state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrollState {
    pub navbar_scrolled: bool,
    pub back_to_top_visible: bool,
    pub active_section: Option<String>,
    /// Elements already revealed. Never shrinks.
    pub revealed: HashSet<String>,
    /// Skill bars already animated. Never shrinks.
    pub animated: HashSet<String>,
}

/// Everything the handlers read and write.
#[derive(Debug, Clone, Default)]
pub struct PageState {
    pub theme: Theme,
    pub menu: MenuState,
    pub scroll: ScrollState,
    pub form: FormState,
    pub submission: Submission,
    pub elements: PageElements,
}

impl PageState {
    #[must_use]
    pub fn new(elements: PageElements) -> Self {
        Self { elements, ..Self::default() }
    }
}
