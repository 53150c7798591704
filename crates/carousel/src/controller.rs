use std::time::Duration;

use tokio::time::Instant;
use tracing::{debug, warn};

use crate::{
    autoplay::Autoplay, config::CarouselConfig, gesture::SwipeTracker, intent::Intent,
    surface::CarouselSurface,
};

/// Who asked for a slide change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    User,
    Autoplay,
}

pub struct Carousel<S> {
    config: CarouselConfig,
    surface: S,
    slide_count: usize,
    current: usize,
    autoplay: Autoplay,
    swipe: SwipeTracker,
}

impl<S: CarouselSurface> Carousel<S> {
    /// Binds a carousel to its markup. Returns `None` when the container,
    /// track or slides are missing, or the interval is zero; the rest of
    /// the page keeps initializing either way.
    pub fn mount(config: CarouselConfig, surface: Option<S>) -> Option<Self> {
        let Some(mut surface) = surface else {
            debug!(carousel = %config.name, selector = %config.container_selector, "carousel container not found");
            return None;
        };
        if !surface.has_track() {
            debug!(carousel = %config.name, selector = %config.track_selector, "carousel track not found");
            return None;
        }
        let slide_count = surface.slide_count();
        if slide_count == 0 {
            debug!(carousel = %config.name, selector = %config.slide_selector, "carousel has no slides");
            return None;
        }
        if config.autoplay_interval_ms == 0 {
            warn!(carousel = %config.name, "autoplay interval must be positive; carousel disabled");
            return None;
        }

        surface.build_dots(slide_count);
        let autoplay = Autoplay::new(config.autoplay_interval());
        let mut carousel = Self {
            config,
            surface,
            slide_count,
            current: 0,
            autoplay,
            swipe: SwipeTracker::default(),
        };
        carousel.render();
        Some(carousel)
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn autoplay_interval(&self) -> Duration {
        self.autoplay.interval()
    }

    pub fn is_autoplay_active(&self) -> bool {
        self.autoplay.is_active()
    }

    pub fn is_hovered(&self) -> bool {
        self.autoplay.is_hovered()
    }

    pub fn next_autoplay_at(&self) -> Option<Instant> {
        self.autoplay.deadline()
    }

    pub fn start(&mut self, now: Instant) {
        self.autoplay.restart(now);
        debug!(carousel = %self.config.name, slides = self.slide_count, "carousel started");
    }

    /// Stops autoplay and hands the surface back.
    pub fn destroy(mut self) -> S {
        self.autoplay.cancel();
        debug!(carousel = %self.config.name, "carousel destroyed");
        self.surface
    }

    /// `index` comes from a dot, so it is always in range; anything else is
    /// dropped.
    pub fn go_to(&mut self, index: usize, now: Instant) {
        if index >= self.slide_count {
            warn!(carousel = %self.config.name, index, slides = self.slide_count, "ignoring out-of-range slide");
            return;
        }
        self.current = index;
        self.render();
        self.reset_autoplay(now);
    }

    pub fn next(&mut self, trigger: Trigger, now: Instant) {
        self.current = (self.current + 1) % self.slide_count;
        self.render();
        if trigger == Trigger::User {
            self.reset_autoplay(now);
        }
    }

    pub fn prev(&mut self, now: Instant) {
        self.current = (self.current + self.slide_count - 1) % self.slide_count;
        self.render();
        self.reset_autoplay(now);
    }

    pub fn render(&mut self) {
        let offset = -(self.current as i64) * 100;
        self.surface.set_track_offset(offset);
        for index in 0..self.slide_count {
            self.surface.set_dot_active(index, index == self.current);
        }
    }

    pub fn pause_autoplay(&mut self) {
        self.autoplay.pause();
    }

    pub fn resume_autoplay(&mut self, now: Instant) {
        self.autoplay.resume(now);
    }

    pub fn reset_autoplay(&mut self, now: Instant) {
        self.autoplay.restart(now);
    }

    /// Advances if the autoplay deadline has passed. Returns whether it did.
    pub fn poll_autoplay(&mut self, now: Instant) -> bool {
        if !self.autoplay.fire(now) {
            return false;
        }
        self.next(Trigger::Autoplay, now);
        true
    }

    pub fn handle(&mut self, intent: Intent, now: Instant) {
        match intent {
            Intent::Next | Intent::SwipeLeft => self.next(Trigger::User, now),
            Intent::Prev | Intent::SwipeRight => self.prev(now),
            Intent::Dot(index) => self.go_to(index, now),
            Intent::TouchStart { x } => self.swipe.begin(x),
            Intent::TouchEnd { x } => {
                if let Some(swipe) = self.swipe.finish(x) {
                    self.handle(swipe, now);
                }
            }
            Intent::PointerEnter => self.pause_autoplay(),
            Intent::PointerLeave => self.resume_autoplay(now),
        }
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
