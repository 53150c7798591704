use serde::{Deserialize, Serialize};

/// Headroom below the navbar before a section counts as current.
pub const SCROLL_SPY_OFFSET: f64 = 100.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

/// Last section in document order that contains the probe position.
pub fn current_section(sections: &[SectionBounds], scroll_y: f64) -> Option<&str> {
    let position = scroll_y + SCROLL_SPY_OFFSET;
    sections
        .iter()
        .filter(|section| section.contains(position))
        .last()
        .map(|section| section.id.as_str())
}

#[derive(Debug, Clone, Default)]
pub struct ScrollSpy {
    active: Option<String>,
}

impl ScrollSpy {
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Keeps the previous highlight when no section matches. Returns whether
    /// the highlighted link changed.
    pub fn update(&mut self, sections: &[SectionBounds], scroll_y: f64) -> bool {
        let Some(current) = current_section(sections, scroll_y) else {
            return false;
        };
        if self.active.as_deref() == Some(current) {
            return false;
        }
        self.active = Some(current.to_string());
        true
    }

    pub fn is_link_active(&self, href: &str) -> bool {
        match (&self.active, href.strip_prefix('#')) {
            (Some(active), Some(id)) => active == id,
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "tests/scroll_spy_tests.rs"]
mod tests;
