//! DOM listener registration and element discovery.
//!
//! Every listener turns its browser event into a `PageEvent` and hands it
//! to the shared page. Listeners live as long as the page, so their
//! closures are leaked with `forget`.

use std::cell::RefCell;
use std::rc::Rc;

use portfolio::config::PageConfig;
use portfolio::dispatch::PageEvent;
use portfolio::form::{ContactMessage, FieldId};
use portfolio::page::Page;
use portfolio::port::ElementRef;
use portfolio::state::{PageElements, SkillBar};
use portfolio::submit::{self, SimulatedTransport};
use portfolio::timer::Timer;
use portfolio::typewriter;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Event, EventTarget, HtmlInputElement, HtmlTextAreaElement, KeyboardEvent, Node};

use crate::dom::DomPort;
use crate::selectors::{self, CONTACT_FORM_ID, PAGE_CONFIG_ID};
use crate::storage::LocalStorage;
use crate::timer::GlooTimer;

type SharedPage = Rc<RefCell<Page<DomPort, LocalStorage>>>;

/// Build the page from the current document and start listening.
pub fn mount() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    let elements = discover(&document);
    log::debug!(
        "mounting page: {} sections, {} reveals, {} skill bars",
        elements.sections.len(),
        elements.reveals.len(),
        elements.skill_bars.len()
    );
    let config = read_config(&document);
    let store = LocalStorage::new(&window);
    let port = DomPort::new(window.clone(), document.clone());
    let page: SharedPage = Rc::new(RefCell::new(Page::new(port, store, elements, config)));
    page.borrow_mut().init();

    wire_window(&window, &page);
    // A module instantiated asynchronously may start after `load` fired.
    if selectors::load_already_fired(&document.ready_state()) {
        on_load(&page);
    }
    wire_navigation(&document, &page);
    wire_form(&document, &page);
    start_typewriters(&window, &document, &page);
}

// =============================================================================
// DISCOVERY
// =============================================================================

fn discover(document: &Document) -> PageElements {
    let sections = elements(document, selectors::SECTION_SELECTOR)
        .iter()
        .map(Element::id)
        .collect();
    let nav_links = elements(document, selectors::NAV_LINK_SELECTOR)
        .iter()
        .filter_map(|link| link.get_attribute("href"))
        .collect();
    let reveals = elements(document, selectors::REVEAL_SELECTOR)
        .iter()
        .enumerate()
        .map(|(i, el)| ensure_id(el, "reveal", i))
        .collect();
    let skill_bars = elements(document, selectors::SKILL_BAR_SELECTOR)
        .iter()
        .enumerate()
        .map(|(i, el)| {
            let id = ensure_id(el, "skill-progress", i);
            SkillBar::from_attr(id, el.get_attribute("data-progress").as_deref())
        })
        .collect();
    PageElements { sections, nav_links, reveals, skill_bars }
}

/// Latched elements are addressed by id; give anonymous ones a stable one.
fn ensure_id(el: &Element, prefix: &str, index: usize) -> String {
    let id = el.id();
    if !id.is_empty() {
        return id;
    }
    let id = format!("{prefix}-{index}");
    el.set_id(&id);
    id
}

fn elements(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        log::warn!("bad selector {selector}");
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn read_config(document: &Document) -> PageConfig {
    let Some(raw) = document
        .get_element_by_id(PAGE_CONFIG_ID)
        .and_then(|el| el.text_content())
    else {
        return PageConfig::default();
    };
    PageConfig::from_json(&raw).unwrap_or_else(|err| {
        log::warn!("ignoring page config: {err}");
        PageConfig::default()
    })
}

// =============================================================================
// LISTENERS
// =============================================================================

fn listen(target: &EventTarget, kind: &str, handler: impl FnMut(Event) + 'static) {
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    if let Err(err) = target.add_event_listener_with_callback(kind, cb.as_ref().unchecked_ref()) {
        log::warn!("listen {kind}: {err:?}");
    }
    cb.forget();
}

/// Forward `event` to the page.
fn send(page: &SharedPage, event: &PageEvent) {
    match page.try_borrow_mut() {
        Ok(mut page) => {
            page.handle(event);
        }
        Err(_) => log::warn!("page busy, dropped {event:?}"),
    }
}

fn wire_window(window: &web_sys::Window, page: &SharedPage) {
    let p = Rc::clone(page);
    listen(window, "scroll", move |_| send(&p, &PageEvent::Scroll));

    let p = Rc::clone(page);
    listen(window, "resize", move |_| send(&p, &PageEvent::Resize));

    let p = Rc::clone(page);
    listen(window, "load", move |_| on_load(&p));
}

/// Tick once, then schedule the delayed reveal and skill-bar passes.
fn on_load(page: &SharedPage) {
    send(page, &PageEvent::Load);
    let load = page.borrow().config().load;
    let reveal = Rc::clone(page);
    spawn_local(async move {
        GlooTimer.sleep(load.reveal_delay()).await;
        send(&reveal, &PageEvent::RevealPass);
    });
    let bars = Rc::clone(page);
    spawn_local(async move {
        GlooTimer.sleep(load.skill_bar_delay()).await;
        send(&bars, &PageEvent::SkillBarPass);
    });
}

fn wire_navigation(document: &Document, page: &SharedPage) {
    for (id, event) in [
        ("hamburger", PageEvent::HamburgerClick),
        ("theme-toggle", PageEvent::ThemeToggle),
        ("back-to-top", PageEvent::BackToTop),
    ] {
        if let Some(el) = document.get_element_by_id(id) {
            let p = Rc::clone(page);
            listen(&el, "click", move |_| send(&p, &event));
        }
    }

    for link in elements(document, selectors::NAV_LINK_SELECTOR) {
        let p = Rc::clone(page);
        listen(&link, "click", move |_| send(&p, &PageEvent::NavLinkClick));
    }

    for anchor in elements(document, selectors::ANCHOR_SELECTOR) {
        let p = Rc::clone(page);
        let href = anchor.get_attribute("href").unwrap_or_default();
        listen(&anchor, "click", move |ev| {
            ev.prevent_default();
            send(&p, &PageEvent::AnchorClick { href: href.clone() });
        });
    }

    let menu = document.get_element_by_id("nav-menu");
    let hamburger = document.get_element_by_id("hamburger");
    let p = Rc::clone(page);
    listen(document, "click", move |ev| {
        let target = ev.target().and_then(|t| t.dyn_into::<Node>().ok());
        let inside = |el: &Option<Element>| match (el, &target) {
            (Some(el), Some(node)) => el.contains(Some(node)),
            _ => false,
        };
        send(&p, &PageEvent::DocumentClick { in_menu: inside(&menu), in_hamburger: inside(&hamburger) });
    });

    let p = Rc::clone(page);
    listen(document, "keydown", move |ev| {
        if let Some(key) = ev.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) {
            send(&p, &PageEvent::KeyDown { key });
        }
    });
}

fn wire_form(document: &Document, page: &SharedPage) {
    let Some(form) = document.get_element_by_id(CONTACT_FORM_ID) else {
        return;
    };

    for input in elements(document, selectors::FORM_INPUT_SELECTOR) {
        let Some(field) = FieldId::parse(&input.id()) else {
            continue;
        };
        let p = Rc::clone(page);
        listen(&input, "focus", move |_| send(&p, &PageEvent::FieldFocus(field)));

        let p = Rc::clone(page);
        let doc = document.clone();
        listen(&input, "blur", move |_| {
            let value = field_value(&doc, field);
            send(&p, &PageEvent::FieldBlur { field, value });
        });
    }

    let p = Rc::clone(page);
    let doc = document.clone();
    listen(&form, "submit", move |ev| {
        ev.prevent_default();
        let message = ContactMessage {
            name: field_value(&doc, FieldId::Name),
            email: field_value(&doc, FieldId::Email),
            subject: field_value(&doc, FieldId::Subject),
            message: field_value(&doc, FieldId::Message),
        };
        let page = Rc::clone(&p);
        spawn_local(async move {
            let latency = page.borrow().config().submit.latency();
            let transport = SimulatedTransport::new(GlooTimer, latency);
            let outcome = submit::run(&*page, message, &transport, &GlooTimer).await;
            log::debug!("contact form: {outcome:?}");
        });
    });
}

fn field_value(document: &Document, field: FieldId) -> String {
    let Some(el) = document.get_element_by_id(field.as_str()) else {
        return String::new();
    };
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        return input.value();
    }
    el.dyn_ref::<HtmlTextAreaElement>()
        .map(HtmlTextAreaElement::value)
        .unwrap_or_default()
}

// =============================================================================
// TYPEWRITER
// =============================================================================

fn start_typewriters(window: &web_sys::Window, document: &Document, page: &SharedPage) {
    let speed = page.borrow().config().typewriter.speed();
    for (i, el) in elements(document, selectors::TYPEWRITER_SELECTOR).into_iter().enumerate() {
        let id = ensure_id(&el, "typewriter", i);
        let text = el
            .get_attribute("data-typewriter")
            .filter(|t| !t.is_empty())
            .or_else(|| el.text_content())
            .unwrap_or_default();
        let port = RefCell::new(DomPort::new(window.clone(), document.clone()));
        spawn_local(async move {
            typewriter::run(&port, ElementRef::Id(id), &text, &GlooTimer, speed).await;
        });
    }
}
