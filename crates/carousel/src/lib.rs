//! Slide carousel widget: a wrap-around index, a dot indicator row and an
//! autoplay timer that pauses on hover and restarts after every manual
//! navigation.
//!
//! [`Carousel`] is the synchronous state machine; every operation takes the
//! current instant so time can be driven explicitly. [`spawn`] runs one
//! carousel on its own task and feeds it timer ticks and [`Intent`]s.

mod autoplay;
pub mod config;
mod controller;
pub mod driver;
pub mod gesture;
pub mod intent;
pub mod surface;

pub use config::CarouselConfig;
pub use controller::{Carousel, Trigger};
pub use driver::{spawn, CarouselError, CarouselHandle};
pub use gesture::{interpret_swipe, SwipeTracker, SWIPE_THRESHOLD};
pub use intent::Intent;
pub use surface::{CarouselSurface, MemorySurface, SurfaceSnapshot};
