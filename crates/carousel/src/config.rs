use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const PROJECT_AUTOPLAY_MS: u64 = 5000;
pub const ABOUT_AUTOPLAY_MS: u64 = 4000;

/// Where a carousel lives in the page markup and how fast it autoplays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarouselConfig {
    pub name: String,
    pub container_selector: String,
    pub track_selector: String,
    pub slide_selector: String,
    pub dot_class: String,
    pub prev_selector: String,
    pub next_selector: String,
    pub autoplay_interval_ms: u64,
}

impl CarouselConfig {
    pub fn project() -> Self {
        Self {
            name: "project".into(),
            container_selector: "#projectCarousel".into(),
            track_selector: ".carousel-track".into(),
            slide_selector: ".carousel-slide".into(),
            dot_class: "carousel-dot".into(),
            prev_selector: "#carouselPrev".into(),
            next_selector: "#carouselNext".into(),
            autoplay_interval_ms: PROJECT_AUTOPLAY_MS,
        }
    }

    pub fn about() -> Self {
        Self {
            name: "about".into(),
            container_selector: "#aboutCarousel".into(),
            track_selector: ".about-carousel-track".into(),
            slide_selector: ".about-carousel-slide".into(),
            dot_class: "about-carousel-dot".into(),
            prev_selector: ".about-carousel-prev".into(),
            next_selector: ".about-carousel-next".into(),
            autoplay_interval_ms: ABOUT_AUTOPLAY_MS,
        }
    }

    pub fn autoplay_interval(&self) -> Duration {
        Duration::from_millis(self.autoplay_interval_ms)
    }

    pub fn with_interval_ms(mut self, autoplay_interval_ms: u64) -> Self {
        self.autoplay_interval_ms = autoplay_interval_ms;
        self
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
