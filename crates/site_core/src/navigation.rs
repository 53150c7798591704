/// Scroll distance after which the navbar switches to its compact style.
pub const NAVBAR_SCROLL_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavbarState {
    scrolled: bool,
    menu_open: bool,
}

impl NavbarState {
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Returns whether the `scrolled` class has to change.
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        let scrolled = scroll_y > NAVBAR_SCROLL_THRESHOLD;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn on_nav_link_click(&mut self) {
        self.close_menu();
    }

    pub fn on_document_click(&mut self, inside_navbar: bool) {
        if !inside_navbar {
            self.close_menu();
        }
    }

    /// Body `overflow` while the mobile menu covers the page.
    pub fn body_overflow(&self) -> Option<&'static str> {
        self.menu_open.then_some("hidden")
    }
}

#[cfg(test)]
#[path = "tests/navigation_tests.rs"]
mod tests;
