use std::sync::{Arc, Mutex, PoisonError};

/// The rendered side of a carousel: slides inside a sliding track plus a
/// row of dot indicators.
pub trait CarouselSurface {
    fn slide_count(&self) -> usize;
    fn has_track(&self) -> bool;
    /// Replaces the dot row with `count` inactive dots.
    fn build_dots(&mut self, count: usize);
    /// Horizontal track translation in percent of one slide width.
    fn set_track_offset(&mut self, offset_percent: i64);
    fn set_dot_active(&mut self, index: usize, active: bool);
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SurfaceSnapshot {
    pub slides: usize,
    pub track_present: bool,
    pub track_offset_percent: i64,
    pub dots: Vec<bool>,
    pub renders: u64,
}

impl SurfaceSnapshot {
    pub fn active_dots(&self) -> Vec<usize> {
        self.dots
            .iter()
            .enumerate()
            .filter_map(|(index, active)| active.then_some(index))
            .collect()
    }
}

/// Headless surface that records what would have been drawn. Clones share
/// state, so one clone can be handed to a carousel and another inspected.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    inner: Arc<Mutex<SurfaceSnapshot>>,
}

impl MemorySurface {
    pub fn new(slides: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(SurfaceSnapshot {
                slides,
                track_present: true,
                ..SurfaceSnapshot::default()
            })),
        }
    }

    pub fn without_track(slides: usize) -> Self {
        let surface = Self::new(slides);
        surface.with_state(|state| state.track_present = false);
        surface
    }

    pub fn snapshot(&self) -> SurfaceSnapshot {
        self.with_state(|state| state.clone())
    }

    fn with_state<T>(&self, f: impl FnOnce(&mut SurfaceSnapshot) -> T) -> T {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }
}

impl CarouselSurface for MemorySurface {
    fn slide_count(&self) -> usize {
        self.with_state(|state| state.slides)
    }

    fn has_track(&self) -> bool {
        self.with_state(|state| state.track_present)
    }

    fn build_dots(&mut self, count: usize) {
        self.with_state(|state| state.dots = vec![false; count]);
    }

    fn set_track_offset(&mut self, offset_percent: i64) {
        self.with_state(|state| {
            state.track_offset_percent = offset_percent;
            state.renders += 1;
        });
    }

    fn set_dot_active(&mut self, index: usize, active: bool) {
        self.with_state(|state| {
            if let Some(dot) = state.dots.get_mut(index) {
                *dot = active;
            }
        });
    }
}
