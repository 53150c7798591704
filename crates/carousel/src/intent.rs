/// Discrete user or pointer events a carousel reacts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intent {
    Next,
    Prev,
    Dot(usize),
    /// Finger moved right-to-left past the swipe threshold.
    SwipeLeft,
    /// Finger moved left-to-right past the swipe threshold.
    SwipeRight,
    TouchStart { x: f64 },
    TouchEnd { x: f64 },
    PointerEnter,
    PointerLeave,
}

impl Intent {
    /// Whether the intent counts as manual navigation.
    pub fn is_navigation(self) -> bool {
        matches!(
            self,
            Intent::Next | Intent::Prev | Intent::Dot(_) | Intent::SwipeLeft | Intent::SwipeRight
        )
    }
}
