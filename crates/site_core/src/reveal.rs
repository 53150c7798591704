//! Fade-in of cards as they scroll into view.

/// Minimum visible share of an element before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;
/// The observed viewport ends this far above the real bottom edge.
pub const REVEAL_BOTTOM_MARGIN: f64 = 50.0;

pub const HIDDEN_OPACITY: f64 = 0.0;
pub const HIDDEN_OFFSET_PX: f64 = 30.0;
pub const TRANSITION: &str = "opacity 0.6s ease, transform 0.6s ease";

/// Share of an element inside the shrunken viewport, in `0.0..=1.0`.
pub fn visible_ratio(element_top: f64, element_height: f64, viewport_height: f64) -> f64 {
    let root_bottom = (viewport_height - REVEAL_BOTTOM_MARGIN).max(0.0);
    let element_bottom = element_top + element_height;
    if element_height <= 0.0 {
        let inside = element_top >= 0.0 && element_top <= root_bottom;
        return if inside { 1.0 } else { 0.0 };
    }
    let overlap = element_bottom.min(root_bottom) - element_top.max(0.0);
    (overlap.max(0.0) / element_height).min(1.0)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reveal {
    revealed: bool,
}

impl Reveal {
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Returns true exactly once, on the observation that reveals the element.
    pub fn observe(&mut self, ratio: f64) -> bool {
        if self.revealed || ratio < REVEAL_THRESHOLD {
            return false;
        }
        self.revealed = true;
        true
    }

    /// `(opacity, translate_y_px)` for the current state.
    pub fn style(&self) -> (f64, f64) {
        if self.revealed {
            (1.0, 0.0)
        } else {
            (HIDDEN_OPACITY, HIDDEN_OFFSET_PX)
        }
    }
}

#[cfg(test)]
#[path = "tests/reveal_tests.rs"]
mod tests;
