//! Mobile menu and in-page navigation.
//!
//! The menu is a single open/closed bit. Opening locks background scroll;
//! every way of closing restores it. Closing an already closed menu is a
//! no-op so redundant triggers (resize storms, stray clicks) emit nothing.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::port::{Action, ElementRef, Flag, Layout, ScrollTarget};
use crate::state::MenuState;

fn menu_actions(open: bool) -> Vec<Action> {
    vec![
        Action::flag(ElementRef::Hamburger, Flag::Active, open),
        Action::flag(ElementRef::NavMenu, Flag::Active, open),
        Action::LockScroll(open),
    ]
}

/// Hamburger click.
pub fn toggle_menu(menu: &mut MenuState) -> Vec<Action> {
    menu.open = !menu.open;
    tracing::debug!(open = menu.open, "mobile menu toggled");
    menu_actions(menu.open)
}

/// Force the menu closed.
pub fn close_menu(menu: &mut MenuState) -> Vec<Action> {
    if !menu.open {
        return Vec::new();
    }
    menu.open = false;
    tracing::debug!("mobile menu closed");
    menu_actions(false)
}

/// Document-level click; closes when it landed outside menu and hamburger.
pub fn outside_click(menu: &mut MenuState, in_menu: bool, in_hamburger: bool) -> Vec<Action> {
    if in_menu || in_hamburger {
        return Vec::new();
    }
    close_menu(menu)
}

/// Keydown; Escape closes an open menu.
pub fn key_down(menu: &mut MenuState, key: &str) -> Vec<Action> {
    if key == "Escape" {
        close_menu(menu)
    } else {
        Vec::new()
    }
}

/// Resize; widths past the breakpoint have no mobile menu.
pub fn resize(menu: &mut MenuState, width: f64, breakpoint: f64) -> Vec<Action> {
    if width > breakpoint {
        close_menu(menu)
    } else {
        Vec::new()
    }
}

/// Click on an `href="#..."` anchor.
///
/// Closes the menu before scrolling so the scroll target is measured
/// against the final layout. A bare `#` or an unknown target does nothing.
pub fn anchor_click(menu: &mut MenuState, href: &str, layout: &dyn Layout) -> Vec<Action> {
    let Some(target) = href.strip_prefix('#') else {
        return Vec::new();
    };
    if target.is_empty() || !layout.has_element(target) {
        return Vec::new();
    }
    let mut actions = close_menu(menu);
    actions.push(Action::ScrollTo(ScrollTarget::Element(target.to_owned())));
    actions
}

/// Back-to-top click.
#[must_use]
pub fn back_to_top() -> Vec<Action> {
    vec![Action::ScrollTo(ScrollTarget::Top)]
}
