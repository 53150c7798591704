use carousel::{spawn, Carousel, CarouselConfig, CarouselHandle, CarouselSurface};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::{
    navigation::NavbarState,
    scroll_spy::{ScrollSpy, SectionBounds},
};

pub const DEFAULT_CONTACT_ENDPOINT: &str = "/.netlify/functions/contact";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub contact_endpoint: String,
    pub carousels: Vec<CarouselConfig>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            contact_endpoint: DEFAULT_CONTACT_ENDPOINT.to_string(),
            carousels: vec![CarouselConfig::project(), CarouselConfig::about()],
        }
    }
}

impl SiteConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }
}

/// Lookup of rendered page elements.
pub trait PageMarkup {
    type Surface: CarouselSurface + Send + 'static;

    /// `None` when the page has no element matching the container selector.
    fn carousel_surface(&self, config: &CarouselConfig) -> Option<Self::Surface>;

    /// Current layout of the navigable sections, queried on every scroll.
    fn sections(&self) -> Vec<SectionBounds> {
        Vec::new()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollUpdate {
    pub navbar_changed: bool,
    pub active_section_changed: bool,
}

/// Everything started on page load. Carousels missing from the markup are
/// skipped; each one that mounts runs independently of the others.
pub struct Page<S> {
    pub navbar: NavbarState,
    pub scroll_spy: ScrollSpy,
    carousels: Vec<CarouselHandle<S>>,
}

impl<S> Page<S>
where
    S: CarouselSurface + Send + 'static,
{
    /// Must run inside a tokio runtime.
    pub fn init<M>(markup: &M, config: &SiteConfig) -> Self
    where
        M: PageMarkup<Surface = S>,
    {
        let mut carousels = Vec::with_capacity(config.carousels.len());
        for carousel_config in &config.carousels {
            let surface = markup.carousel_surface(carousel_config);
            match Carousel::mount(carousel_config.clone(), surface) {
                Some(carousel) => carousels.push(spawn(carousel)),
                None => debug!(carousel = %carousel_config.name, "carousel skipped"),
            }
        }
        info!(carousels = carousels.len(), "page initialised");

        Self {
            navbar: NavbarState::default(),
            scroll_spy: ScrollSpy::default(),
            carousels,
        }
    }

    pub fn carousel(&self, name: &str) -> Option<&CarouselHandle<S>> {
        self.carousels.iter().find(|handle| handle.name() == name)
    }

    pub fn carousel_names(&self) -> Vec<&str> {
        self.carousels.iter().map(CarouselHandle::name).collect()
    }

    /// `markup` is queried for the section layout as it is right now.
    pub fn on_scroll<M>(&mut self, markup: &M, scroll_y: f64) -> ScrollUpdate
    where
        M: PageMarkup<Surface = S>,
    {
        let sections = markup.sections();
        ScrollUpdate {
            navbar_changed: self.navbar.on_scroll(scroll_y),
            active_section_changed: self.scroll_spy.update(&sections, scroll_y),
        }
    }

    /// Stops every carousel and hands back the surfaces that could be
    /// recovered.
    pub async fn destroy(self) -> Vec<S> {
        let mut surfaces = Vec::with_capacity(self.carousels.len());
        for handle in self.carousels {
            let name = handle.name().to_string();
            match handle.destroy().await {
                Ok(surface) => surfaces.push(surface),
                Err(err) => warn!(carousel = %name, error = %err, "carousel did not shut down cleanly"),
            }
        }
        surfaces
    }
}

#[cfg(test)]
#[path = "tests/page_tests.rs"]
mod tests;
