use super::*;

#[test]
fn scrolled_only_past_threshold() {
    let mut navbar = NavbarState::default();
    assert!(!navbar.on_scroll(50.0));
    assert!(!navbar.is_scrolled());
    assert!(navbar.on_scroll(50.5));
    assert!(navbar.is_scrolled());
    assert!(!navbar.on_scroll(400.0));
    assert!(navbar.on_scroll(0.0));
    assert!(!navbar.is_scrolled());
}

#[test]
fn menu_toggle_locks_body_scroll() {
    let mut navbar = NavbarState::default();
    assert_eq!(navbar.body_overflow(), None);
    assert!(navbar.toggle_menu());
    assert_eq!(navbar.body_overflow(), Some("hidden"));
    assert!(!navbar.toggle_menu());
    assert_eq!(navbar.body_overflow(), None);
}

#[test]
fn link_click_and_outside_click_close_menu() {
    let mut navbar = NavbarState::default();
    navbar.toggle_menu();
    navbar.on_nav_link_click();
    assert!(!navbar.is_menu_open());

    navbar.toggle_menu();
    navbar.on_document_click(true);
    assert!(navbar.is_menu_open());
    navbar.on_document_click(false);
    assert!(!navbar.is_menu_open());
}
