//! Mapping from core element references to DOM lookups and CSS classes.
//!
//! Kept free of `web-sys` so the page markup contract can be tested
//! natively.

#[cfg(test)]
#[path = "selectors_test.rs"]
mod selectors_test;

use portfolio::form::FieldId;
use portfolio::port::{ElementRef, Flag, Icon};

pub const CONTACT_FORM_ID: &str = "contact-form";
pub const PAGE_CONFIG_ID: &str = "page-config";
pub const SECTION_SELECTOR: &str = "section[id]";
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
pub const REVEAL_SELECTOR: &str = ".reveal";
pub const SKILL_BAR_SELECTOR: &str = ".skill-progress";
pub const TYPEWRITER_SELECTOR: &str = "[data-typewriter]";
pub const FORM_INPUT_SELECTOR: &str = "#contact-form input, #contact-form textarea";

/// How to find an element in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Id(String),
    Selector(String),
}

#[must_use]
pub fn lookup(element: &ElementRef) -> Lookup {
    match element {
        ElementRef::Navbar => Lookup::Id("navbar".to_owned()),
        ElementRef::NavMenu => Lookup::Id("nav-menu".to_owned()),
        ElementRef::Hamburger => Lookup::Id("hamburger".to_owned()),
        ElementRef::BackToTop => Lookup::Id("back-to-top".to_owned()),
        ElementRef::ThemeToggle => Lookup::Id("theme-toggle".to_owned()),
        ElementRef::NavLink(href) => Lookup::Selector(format!("{NAV_LINK_SELECTOR}[href=\"{}\"]", attr_value(href))),
        ElementRef::Field(field) => Lookup::Id(field.as_str().to_owned()),
        ElementRef::FieldError(field) => Lookup::Id(error_slot_id(*field)),
        ElementRef::SubmitButton => Lookup::Selector(format!("#{CONTACT_FORM_ID} .btn-submit")),
        ElementRef::FormStatus => Lookup::Id("form-status".to_owned()),
        ElementRef::Id(id) => Lookup::Id(id.clone()),
    }
}

#[must_use]
pub fn error_slot_id(field: FieldId) -> String {
    format!("{}-error", field.as_str())
}

/// CSS class toggled for `flag`, or `None` for flags that map to a DOM
/// property instead (`disabled`).
#[must_use]
pub fn flag_class(flag: Flag) -> Option<&'static str> {
    match flag {
        Flag::Scrolled => Some("scrolled"),
        Flag::Visible => Some("visible"),
        Flag::Active => Some("active"),
        Flag::Animated => Some("animated"),
        Flag::Error => Some("error"),
        Flag::Success => Some("success"),
        Flag::Disabled => None,
    }
}

/// Font Awesome classes for `icon`.
#[must_use]
pub fn icon_classes(icon: Icon) -> &'static [&'static str] {
    match icon {
        Icon::Moon => &["fa-moon"],
        Icon::Sun => &["fa-sun"],
        Icon::Spinner => &["fa-spinner", "fa-spin"],
        Icon::PaperPlane => &["fa-paper-plane"],
    }
}

/// Every class any icon may carry, for clearing before a swap.
pub const ALL_ICON_CLASSES: [&str; 5] = ["fa-moon", "fa-sun", "fa-spinner", "fa-spin", "fa-paper-plane"];

/// Button markup: icon followed by label.
#[must_use]
pub fn button_html(icon: Icon, label: &str) -> String {
    format!("<i class=\"fas {}\"></i> {}", icon_classes(icon).join(" "), escape_html(label))
}

/// Whether `document.readyState` says the window `load` event is past.
#[must_use]
pub fn load_already_fired(ready_state: &str) -> bool {
    ready_state == "complete"
}

/// Escape `"` and `\` for use inside a quoted attribute selector.
fn attr_value(raw: &str) -> String {
    raw.replace('\\', "\\\\").replace('"', "\\\"")
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
