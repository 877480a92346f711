//! `PresentationPort` over the live document.
//!
//! Lookups that find nothing are skipped silently: a page without a
//! back-to-top button simply never shows one.

use portfolio::port::{Action, ElementRef, Flag, Geometry, Icon, Layout, PresentationPort, ScrollTarget, Viewport};
use portfolio::theme::Theme;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlButtonElement, HtmlElement, HtmlFormElement, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition, ScrollToOptions, Window,
};

use crate::selectors::{self, ALL_ICON_CLASSES, CONTACT_FORM_ID, Lookup};

pub struct DomPort {
    window: Window,
    document: Document,
    submit_icon: Icon,
    submit_label: String,
}

impl DomPort {
    pub fn new(window: Window, document: Document) -> Self {
        Self {
            window,
            document,
            submit_icon: Icon::PaperPlane,
            submit_label: portfolio::consts::SUBMIT_IDLE_LABEL.to_owned(),
        }
    }

    fn find(&self, element: &ElementRef) -> Option<Element> {
        match selectors::lookup(element) {
            Lookup::Id(id) => self.document.get_element_by_id(&id),
            Lookup::Selector(sel) => self.document.query_selector(&sel).ok().flatten(),
        }
    }

    fn set_class(&self, element: &ElementRef, class: &str, on: bool) {
        let Some(el) = self.find(element) else {
            return;
        };
        let classes = el.class_list();
        let result = if on { classes.add_1(class) } else { classes.remove_1(class) };
        if let Err(err) = result {
            log::warn!("class {class} on {element:?}: {err:?}");
        }
    }

    fn set_disabled(&self, element: &ElementRef, on: bool) {
        if let Some(button) = self.find(element).and_then(|el| el.dyn_into::<HtmlButtonElement>().ok()) {
            button.set_disabled(on);
        }
    }

    fn set_icon(&mut self, element: &ElementRef, icon: Icon) {
        if *element == ElementRef::SubmitButton {
            self.submit_icon = icon;
            self.render_submit_button();
            return;
        }
        let Some(el) = self.find(element) else {
            return;
        };
        let Ok(Some(icon_el)) = el.query_selector("i") else {
            return;
        };
        let classes = icon_el.class_list();
        for class in ALL_ICON_CLASSES {
            if let Err(err) = classes.remove_1(class) {
                log::warn!("icon class {class}: {err:?}");
            }
        }
        for class in selectors::icon_classes(icon) {
            if let Err(err) = classes.add_1(class) {
                log::warn!("icon class {class}: {err:?}");
            }
        }
    }

    fn set_text(&mut self, element: &ElementRef, text: &str) {
        if *element == ElementRef::SubmitButton {
            text.clone_into(&mut self.submit_label);
            self.render_submit_button();
            return;
        }
        if let Some(el) = self.find(element) {
            el.set_text_content(Some(text));
        }
    }

    fn render_submit_button(&self) {
        if let Some(button) = self.find(&ElementRef::SubmitButton) {
            button.set_inner_html(&selectors::button_html(self.submit_icon, &self.submit_label));
        }
    }

    fn set_width(&self, element: &ElementRef, percent: f64) {
        let Some(el) = self.find(element).and_then(|el| el.dyn_into::<HtmlElement>().ok()) else {
            return;
        };
        if let Err(err) = el.style().set_property("width", &format!("{percent}%")) {
            log::warn!("width on {element:?}: {err:?}");
        }
    }

    fn set_theme(&self, theme: Theme) {
        if let Some(root) = self.document.document_element() {
            if let Err(err) = root.set_attribute("data-theme", theme.as_str()) {
                log::warn!("data-theme: {err:?}");
            }
        }
    }

    fn lock_scroll(&self, locked: bool) {
        let Some(body) = self.document.body() else {
            return;
        };
        let value = if locked { "hidden" } else { "" };
        if let Err(err) = body.style().set_property("overflow", value) {
            log::warn!("body overflow: {err:?}");
        }
    }

    fn scroll_to(&self, target: &ScrollTarget) {
        match target {
            ScrollTarget::Top => {
                let options = ScrollToOptions::new();
                options.set_top(0.0);
                options.set_behavior(ScrollBehavior::Smooth);
                self.window.scroll_to_with_scroll_to_options(&options);
            }
            ScrollTarget::Element(id) => {
                let Some(el) = self.document.get_element_by_id(id) else {
                    return;
                };
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Start);
                el.scroll_into_view_with_scroll_into_view_options(&options);
            }
        }
    }

    fn reset_form(&self) {
        if let Some(form) = self
            .document
            .get_element_by_id(CONTACT_FORM_ID)
            .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
        {
            form.reset();
        }
    }
}

impl Layout for DomPort {
    fn viewport(&self) -> Viewport {
        let metric = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
            v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
        };
        Viewport {
            width: metric(self.window.inner_width()),
            height: metric(self.window.inner_height()),
            scroll_y: self.window.scroll_y().unwrap_or(0.0),
        }
    }

    fn geometry(&self, id: &str) -> Option<Geometry> {
        let el = self.document.get_element_by_id(id)?;
        let rect = el.get_bounding_client_rect();
        let scroll_y = self.window.scroll_y().unwrap_or(0.0);
        Some(Geometry { top: rect.top() + scroll_y, height: rect.height() })
    }

    fn has_element(&self, id: &str) -> bool {
        self.document.get_element_by_id(id).is_some()
    }
}

impl PresentationPort for DomPort {
    fn apply(&mut self, action: &Action) {
        match action {
            Action::SetFlag { element, flag, on } => match selectors::flag_class(*flag) {
                Some(class) => self.set_class(element, class, *on),
                None if *flag == Flag::Disabled => self.set_disabled(element, *on),
                None => {}
            },
            Action::SetText { element, text } => self.set_text(element, text),
            Action::SetWidth { element, percent } => self.set_width(element, *percent),
            Action::SetTheme(theme) => self.set_theme(*theme),
            Action::SetIcon { element, icon } => self.set_icon(element, *icon),
            Action::LockScroll(locked) => self.lock_scroll(*locked),
            Action::ScrollTo(target) => self.scroll_to(target),
            Action::ResetForm => self.reset_form(),
        }
    }
}
