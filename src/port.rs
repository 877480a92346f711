//! Presentation port: the boundary between page logic and the document.
//!
//! The core never touches the DOM. It reads geometry through [`Layout`] and
//! describes every visible change as an [`Action`]; the host applies those
//! to whatever rendering surface it owns. [`MemoryPort`] is an in-memory
//! surface that records actions, used by tests and non-browser hosts.

#[cfg(test)]
#[path = "port_test.rs"]
mod port_test;

use std::collections::HashMap;

use crate::form::FieldId;
use crate::theme::Theme;

/// Viewport metrics at the time of a query.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    /// Vertical scroll offset of the document.
    pub scroll_y: f64,
}

/// Vertical extent of an element, relative to the top of the document.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Geometry {
    pub top: f64,
    pub height: f64,
}

/// Addressable page elements.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ElementRef {
    Navbar,
    NavMenu,
    Hamburger,
    BackToTop,
    ThemeToggle,
    /// The nav link pointing at the section with this id.
    NavLink(String),
    Field(FieldId),
    /// The message slot rendered next to a field.
    FieldError(FieldId),
    SubmitButton,
    FormStatus,
    /// Any other element, by DOM id.
    Id(String),
}

/// Boolean presentation states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flag {
    Scrolled,
    Visible,
    Active,
    Animated,
    Error,
    Success,
    Disabled,
}

/// Icons swapped by the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Moon,
    Sun,
    Spinner,
    PaperPlane,
}

/// Where a programmatic scroll should go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrollTarget {
    Top,
    Element(String),
}

/// A single presentation change for the host to apply.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetFlag { element: ElementRef, flag: Flag, on: bool },
    SetText { element: ElementRef, text: String },
    /// Width as a percentage in `0.0..=100.0`.
    SetWidth { element: ElementRef, percent: f64 },
    SetTheme(Theme),
    SetIcon { element: ElementRef, icon: Icon },
    /// Lock (or restore) scrolling of the page body.
    LockScroll(bool),
    /// Smooth-scroll the viewport.
    ScrollTo(ScrollTarget),
    /// Clear every contact-form input.
    ResetForm,
}

impl Action {
    pub(crate) fn flag(element: ElementRef, flag: Flag, on: bool) -> Self {
        Self::SetFlag { element, flag, on }
    }

    pub(crate) fn text(element: ElementRef, text: impl Into<String>) -> Self {
        Self::SetText { element, text: text.into() }
    }
}

/// Read-only geometry queries.
pub trait Layout {
    fn viewport(&self) -> Viewport;

    /// Document-relative geometry of the element with this DOM id, if any.
    fn geometry(&self, id: &str) -> Option<Geometry>;

    fn has_element(&self, id: &str) -> bool {
        self.geometry(id).is_some()
    }
}

/// A rendering surface that can both be measured and mutated.
pub trait PresentationPort: Layout {
    fn apply(&mut self, action: &Action);

    fn apply_all(&mut self, actions: &[Action]) {
        for action in actions {
            self.apply(action);
        }
    }
}

/// In-memory surface: fixed geometry plus a log of applied actions.
///
/// Flags, text, widths and the theme are folded into lookup maps so tests
/// can assert on the resulting state instead of replaying the log.
#[derive(Debug, Clone, Default)]
pub struct MemoryPort {
    pub viewport: Viewport,
    pub elements: HashMap<String, Geometry>,
    pub applied: Vec<Action>,
    flags: HashMap<(ElementRef, Flag), bool>,
    text: HashMap<ElementRef, String>,
    widths: HashMap<ElementRef, f64>,
    icons: HashMap<ElementRef, Icon>,
    theme: Option<Theme>,
    scroll_locked: bool,
}

impl MemoryPort {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self { viewport, ..Self::default() }
    }

    /// Register an element with its document-relative geometry.
    #[must_use]
    pub fn with_element(mut self, id: &str, top: f64, height: f64) -> Self {
        self.elements.insert(id.to_owned(), Geometry { top, height });
        self
    }

    pub fn scroll_to(&mut self, scroll_y: f64) {
        self.viewport.scroll_y = scroll_y;
    }

    #[must_use]
    pub fn flag(&self, element: &ElementRef, flag: Flag) -> bool {
        self.flags.get(&(element.clone(), flag)).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn text(&self, element: &ElementRef) -> &str {
        self.text.get(element).map_or("", String::as_str)
    }

    #[must_use]
    pub fn width(&self, element: &ElementRef) -> Option<f64> {
        self.widths.get(element).copied()
    }

    #[must_use]
    pub fn icon(&self, element: &ElementRef) -> Option<Icon> {
        self.icons.get(element).copied()
    }

    #[must_use]
    pub fn theme(&self) -> Option<Theme> {
        self.theme
    }

    #[must_use]
    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    /// Take and clear the action log.
    pub fn drain(&mut self) -> Vec<Action> {
        std::mem::take(&mut self.applied)
    }
}

impl Layout for MemoryPort {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn geometry(&self, id: &str) -> Option<Geometry> {
        self.elements.get(id).copied()
    }
}

impl PresentationPort for MemoryPort {
    fn apply(&mut self, action: &Action) {
        match action {
            Action::SetFlag { element, flag, on } => {
                self.flags.insert((element.clone(), *flag), *on);
            }
            Action::SetText { element, text } => {
                self.text.insert(element.clone(), text.clone());
            }
            Action::SetWidth { element, percent } => {
                self.widths.insert(element.clone(), *percent);
            }
            Action::SetTheme(theme) => self.theme = Some(*theme),
            Action::SetIcon { element, icon } => {
                self.icons.insert(element.clone(), *icon);
            }
            Action::LockScroll(locked) => self.scroll_locked = *locked,
            Action::ScrollTo(ScrollTarget::Top) => self.viewport.scroll_y = 0.0,
            Action::ScrollTo(ScrollTarget::Element(id)) => {
                if let Some(geometry) = self.elements.get(id) {
                    self.viewport.scroll_y = geometry.top;
                }
            }
            Action::ResetForm => {}
        }
        self.applied.push(action.clone());
    }
}
