//! Event dispatch.
//!
//! Hosts translate raw browser events into [`PageEvent`]s. The dispatcher
//! looks up the handlers subscribed to the event's kind and runs them in
//! subscription order over an explicit [`HandlerContext`]. Handlers are
//! plain `fn`s: no captured state, everything they touch is in the context.

#[cfg(test)]
#[path = "dispatch_test.rs"]
mod dispatch_test;

use std::collections::HashMap;

use crate::config::PageConfig;
use crate::form::{self, FieldId};
use crate::port::{Action, Layout};
use crate::state::PageState;
use crate::store::PreferenceStore;
use crate::{nav, scroll, theme};

/// A browser event, reduced to what the page logic needs.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    Load,
    Scroll,
    Resize,
    HamburgerClick,
    NavLinkClick,
    /// Click on an anchor whose `href` starts with `#`.
    AnchorClick { href: String },
    /// Any click, seen at the document level.
    DocumentClick { in_menu: bool, in_hamburger: bool },
    KeyDown { key: String },
    ThemeToggle,
    BackToTop,
    FieldFocus(FieldId),
    FieldBlur { field: FieldId, value: String },
    /// Delayed reveal pass scheduled after `load`.
    RevealPass,
    /// Delayed skill-bar pass scheduled after `load`.
    SkillBarPass,
}

/// Payload-free discriminant of [`PageEvent`], used as the subscription key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Load,
    Scroll,
    Resize,
    HamburgerClick,
    NavLinkClick,
    AnchorClick,
    DocumentClick,
    KeyDown,
    ThemeToggle,
    BackToTop,
    FieldFocus,
    FieldBlur,
    RevealPass,
    SkillBarPass,
}

impl PageEvent {
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Load => EventKind::Load,
            Self::Scroll => EventKind::Scroll,
            Self::Resize => EventKind::Resize,
            Self::HamburgerClick => EventKind::HamburgerClick,
            Self::NavLinkClick => EventKind::NavLinkClick,
            Self::AnchorClick { .. } => EventKind::AnchorClick,
            Self::DocumentClick { .. } => EventKind::DocumentClick,
            Self::KeyDown { .. } => EventKind::KeyDown,
            Self::ThemeToggle => EventKind::ThemeToggle,
            Self::BackToTop => EventKind::BackToTop,
            Self::FieldFocus(_) => EventKind::FieldFocus,
            Self::FieldBlur { .. } => EventKind::FieldBlur,
            Self::RevealPass => EventKind::RevealPass,
            Self::SkillBarPass => EventKind::SkillBarPass,
        }
    }
}

/// Everything a handler may read or change.
pub struct HandlerContext<'a> {
    pub state: &'a mut PageState,
    pub layout: &'a dyn Layout,
    pub store: &'a mut dyn PreferenceStore,
    pub config: &'a PageConfig,
}

pub type Handler = fn(&mut HandlerContext<'_>, &PageEvent) -> Vec<Action>;

/// Event kind → ordered handler list.
#[derive(Default)]
pub struct Dispatcher {
    handlers: HashMap<EventKind, Vec<Handler>>,
}

impl Dispatcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The page's default wiring.
    #[must_use]
    pub fn standard() -> Self {
        let mut d = Self::new();
        d.subscribe(EventKind::Load, scroll_tick);
        d.subscribe(EventKind::Scroll, scroll_tick);
        d.subscribe(EventKind::Resize, breakpoint_close);
        d.subscribe(EventKind::Resize, scroll_tick);
        d.subscribe(EventKind::HamburgerClick, hamburger_toggle);
        d.subscribe(EventKind::NavLinkClick, nav_link_close);
        d.subscribe(EventKind::AnchorClick, anchor_scroll);
        d.subscribe(EventKind::DocumentClick, outside_click_close);
        d.subscribe(EventKind::KeyDown, escape_close);
        d.subscribe(EventKind::ThemeToggle, theme_toggle);
        d.subscribe(EventKind::BackToTop, back_to_top);
        d.subscribe(EventKind::FieldFocus, field_focus);
        d.subscribe(EventKind::FieldBlur, field_blur);
        d.subscribe(EventKind::RevealPass, reveal_pass);
        d.subscribe(EventKind::SkillBarPass, skill_bar_pass);
        d
    }

    pub fn subscribe(&mut self, kind: EventKind, handler: Handler) {
        self.handlers.entry(kind).or_default().push(handler);
    }

    #[must_use]
    pub fn handler_count(&self, kind: EventKind) -> usize {
        self.handlers.get(&kind).map_or(0, Vec::len)
    }

    /// Run every handler subscribed to `event`'s kind, concatenating output.
    pub fn dispatch(&self, ctx: &mut HandlerContext<'_>, event: &PageEvent) -> Vec<Action> {
        let Some(handlers) = self.handlers.get(&event.kind()) else {
            return Vec::new();
        };
        let mut actions = Vec::new();
        for handler in handlers {
            actions.extend(handler(ctx, event));
        }
        actions
    }
}

// =============================================================================
// STANDARD HANDLERS
// =============================================================================

fn scroll_tick(ctx: &mut HandlerContext<'_>, _event: &PageEvent) -> Vec<Action> {
    scroll::tick(&mut ctx.state.scroll, &ctx.state.elements, ctx.layout, &ctx.config.scroll)
}

fn reveal_pass(ctx: &mut HandlerContext<'_>, _event: &PageEvent) -> Vec<Action> {
    scroll::reveal_pass(&mut ctx.state.scroll, &ctx.state.elements, ctx.layout, &ctx.config.scroll)
}

fn skill_bar_pass(ctx: &mut HandlerContext<'_>, _event: &PageEvent) -> Vec<Action> {
    scroll::skill_bar_pass(&mut ctx.state.scroll, &ctx.state.elements, ctx.layout, &ctx.config.scroll)
}

fn breakpoint_close(ctx: &mut HandlerContext<'_>, _event: &PageEvent) -> Vec<Action> {
    let width = ctx.layout.viewport().width;
    nav::resize(&mut ctx.state.menu, width, ctx.config.nav.mobile_breakpoint_px)
}

fn hamburger_toggle(ctx: &mut HandlerContext<'_>, _event: &PageEvent) -> Vec<Action> {
    nav::toggle_menu(&mut ctx.state.menu)
}

fn nav_link_close(ctx: &mut HandlerContext<'_>, _event: &PageEvent) -> Vec<Action> {
    nav::close_menu(&mut ctx.state.menu)
}

fn anchor_scroll(ctx: &mut HandlerContext<'_>, event: &PageEvent) -> Vec<Action> {
    match event {
        PageEvent::AnchorClick { href } => nav::anchor_click(&mut ctx.state.menu, href, ctx.layout),
        _ => Vec::new(),
    }
}

fn outside_click_close(ctx: &mut HandlerContext<'_>, event: &PageEvent) -> Vec<Action> {
    match event {
        PageEvent::DocumentClick { in_menu, in_hamburger } => {
            nav::outside_click(&mut ctx.state.menu, *in_menu, *in_hamburger)
        }
        _ => Vec::new(),
    }
}

fn escape_close(ctx: &mut HandlerContext<'_>, event: &PageEvent) -> Vec<Action> {
    match event {
        PageEvent::KeyDown { key } => nav::key_down(&mut ctx.state.menu, key),
        _ => Vec::new(),
    }
}

fn theme_toggle(ctx: &mut HandlerContext<'_>, _event: &PageEvent) -> Vec<Action> {
    let (next, actions) = theme::toggle_theme(ctx.state.theme, ctx.store);
    ctx.state.theme = next;
    actions
}

fn back_to_top(_ctx: &mut HandlerContext<'_>, _event: &PageEvent) -> Vec<Action> {
    nav::back_to_top()
}

fn field_focus(ctx: &mut HandlerContext<'_>, event: &PageEvent) -> Vec<Action> {
    match event {
        PageEvent::FieldFocus(field) => form::focus_field(&mut ctx.state.form, *field),
        _ => Vec::new(),
    }
}

fn field_blur(ctx: &mut HandlerContext<'_>, event: &PageEvent) -> Vec<Action> {
    match event {
        PageEvent::FieldBlur { field, value } => form::validate_field(&mut ctx.state.form, *field, value),
        _ => Vec::new(),
    }
}
