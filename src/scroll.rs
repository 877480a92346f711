//! Scroll-derived presentation state.
//!
//! Each rule is a function of the viewport and element geometry and can be
//! rerun any number of times. Reveal and skill-bar transitions are one-way
//! latches: once an element is in, it stays in even after scrolling back up.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::config::ScrollConfig;
use crate::port::{Action, ElementRef, Flag, Layout, Viewport};
use crate::state::{PageElements, ScrollState};

/// Run every scroll rule once.
pub fn tick(state: &mut ScrollState, elements: &PageElements, layout: &dyn Layout, cfg: &ScrollConfig) -> Vec<Action> {
    let viewport = layout.viewport();
    let mut actions = chrome(state, viewport, cfg);
    actions.extend(update_active_section(state, elements, layout, cfg));
    actions.extend(reveal_pass(state, elements, layout, cfg));
    actions.extend(skill_bar_pass(state, elements, layout, cfg));
    actions
}

/// Navbar "scrolled" look and back-to-top visibility.
fn chrome(state: &mut ScrollState, viewport: Viewport, cfg: &ScrollConfig) -> Vec<Action> {
    state.navbar_scrolled = viewport.scroll_y > cfg.navbar_scrolled_px;
    state.back_to_top_visible = viewport.scroll_y > cfg.back_to_top_px;
    vec![
        Action::flag(ElementRef::Navbar, Flag::Scrolled, state.navbar_scrolled),
        Action::flag(ElementRef::BackToTop, Flag::Visible, state.back_to_top_visible),
    ]
}

/// The section containing `scroll_y + offset`.
///
/// Sections are expected to be disjoint and contiguous. When they are not,
/// the last match in document order wins.
pub fn active_section<'a>(
    sections: &'a [String],
    layout: &dyn Layout,
    scroll_y: f64,
    offset: f64,
) -> Option<&'a str> {
    let position = scroll_y + offset;
    sections
        .iter()
        .rev()
        .find(|id| {
            layout
                .geometry(id)
                .is_some_and(|g| position >= g.top && position < g.top + g.height)
        })
        .map(String::as_str)
}

fn update_active_section(
    state: &mut ScrollState,
    elements: &PageElements,
    layout: &dyn Layout,
    cfg: &ScrollConfig,
) -> Vec<Action> {
    let scroll_y = layout.viewport().scroll_y;
    // No match leaves the previous highlight in place.
    let Some(active) = active_section(&elements.sections, layout, scroll_y, cfg.active_section_offset_px) else {
        return Vec::new();
    };
    if state.active_section.as_deref() != Some(active) {
        tracing::debug!(section = active, "active section changed");
        state.active_section = Some(active.to_owned());
    }
    elements
        .nav_links
        .iter()
        .map(|href| {
            let on = href.strip_prefix('#') == Some(active);
            Action::flag(ElementRef::NavLink(href.clone()), Flag::Active, on)
        })
        .collect()
}

/// Latch every reveal element whose top crossed `height - reveal_offset`.
pub fn reveal_pass(state: &mut ScrollState, elements: &PageElements, layout: &dyn Layout, cfg: &ScrollConfig) -> Vec<Action> {
    let viewport = layout.viewport();
    let line = viewport.height - cfg.reveal_offset_px;
    let mut actions = Vec::new();
    for id in &elements.reveals {
        if state.revealed.contains(id) {
            continue;
        }
        let Some(geometry) = layout.geometry(id) else {
            continue;
        };
        if geometry.top - viewport.scroll_y < line {
            state.revealed.insert(id.clone());
            actions.push(Action::flag(ElementRef::Id(id.clone()), Flag::Active, true));
        }
    }
    actions
}

/// Latch skill bars past `height - skill_bar_offset`, setting their width.
pub fn skill_bar_pass(state: &mut ScrollState, elements: &PageElements, layout: &dyn Layout, cfg: &ScrollConfig) -> Vec<Action> {
    let viewport = layout.viewport();
    let line = viewport.height - cfg.skill_bar_offset_px;
    let mut actions = Vec::new();
    for bar in &elements.skill_bars {
        if state.animated.contains(&bar.id) {
            continue;
        }
        let Some(geometry) = layout.geometry(&bar.id) else {
            continue;
        };
        if geometry.top - viewport.scroll_y < line {
            state.animated.insert(bar.id.clone());
            let element = ElementRef::Id(bar.id.clone());
            actions.push(Action::SetWidth { element: element.clone(), percent: bar.progress });
            actions.push(Action::flag(element, Flag::Animated, true));
        }
    }
    actions
}
