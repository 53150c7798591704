use crate::intent::Intent;

/// Minimum horizontal travel, exclusive, for a touch to count as a swipe.
pub const SWIPE_THRESHOLD: f64 = 50.0;

pub fn interpret_swipe(start_x: f64, end_x: f64) -> Option<Intent> {
    let delta = start_x - end_x;
    if delta.is_nan() || delta.abs() <= SWIPE_THRESHOLD {
        return None;
    }
    Some(if delta > 0.0 {
        Intent::SwipeLeft
    } else {
        Intent::SwipeRight
    })
}

/// Pairs touch-start and touch-end coordinates into swipe intents.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwipeTracker {
    start_x: Option<f64>,
}

impl SwipeTracker {
    pub fn begin(&mut self, x: f64) {
        self.start_x = Some(x);
    }

    pub fn finish(&mut self, x: f64) -> Option<Intent> {
        let start_x = self.start_x.take()?;
        interpret_swipe(start_x, x)
    }
}

#[cfg(test)]
#[path = "tests/gesture_tests.rs"]
mod tests;
