use super::*;

fn port() -> MemoryPort {
    MemoryPort::new(Viewport { width: 1280.0, height: 800.0, scroll_y: 0.0 })
        .with_element("about", 0.0, 300.0)
        .with_element("contact", 300.0, 500.0)
}

#[test]
fn geometry_lookup_and_has_element() {
    let port = port();
    assert_eq!(port.geometry("contact"), Some(Geometry { top: 300.0, height: 500.0 }));
    assert!(port.has_element("about"));
    assert!(!port.has_element("missing"));
}

#[test]
fn flags_default_off_and_fold_last_write() {
    let mut port = port();
    assert!(!port.flag(&ElementRef::Navbar, Flag::Scrolled));
    port.apply(&Action::flag(ElementRef::Navbar, Flag::Scrolled, true));
    assert!(port.flag(&ElementRef::Navbar, Flag::Scrolled));
    port.apply(&Action::flag(ElementRef::Navbar, Flag::Scrolled, false));
    assert!(!port.flag(&ElementRef::Navbar, Flag::Scrolled));
}

#[test]
fn scroll_to_element_moves_viewport() {
    let mut port = port();
    port.apply(&Action::ScrollTo(ScrollTarget::Element("contact".into())));
    assert_eq!(port.viewport().scroll_y, 300.0);
    port.apply(&Action::ScrollTo(ScrollTarget::Top));
    assert_eq!(port.viewport().scroll_y, 0.0);
}

#[test]
fn scroll_to_unknown_element_is_ignored() {
    let mut port = port();
    port.scroll_to(120.0);
    port.apply(&Action::ScrollTo(ScrollTarget::Element("nowhere".into())));
    assert_eq!(port.viewport().scroll_y, 120.0);
}

#[test]
fn apply_all_records_in_order_and_drain_clears() {
    let mut port = port();
    let actions = vec![
        Action::LockScroll(true),
        Action::text(ElementRef::FormStatus, "hello"),
        Action::SetWidth { element: ElementRef::Id("rust".into()), percent: 90.0 },
        Action::SetTheme(Theme::Dark),
        Action::SetIcon { element: ElementRef::ThemeToggle, icon: Icon::Sun },
    ];
    port.apply_all(&actions);
    assert!(port.scroll_locked());
    assert_eq!(port.text(&ElementRef::FormStatus), "hello");
    assert_eq!(port.width(&ElementRef::Id("rust".into())), Some(90.0));
    assert_eq!(port.theme(), Some(Theme::Dark));
    assert_eq!(port.icon(&ElementRef::ThemeToggle), Some(Icon::Sun));
    assert_eq!(port.drain(), actions);
    assert!(port.applied.is_empty());
}
