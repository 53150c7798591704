//! Browser-side behaviour of the contractor site, kept free of any DOM
//! binding: navigation and scroll effects, the contact form, and page
//! bootstrap for the carousels.

pub mod client;
pub mod form;
pub mod navigation;
pub mod page;
pub mod reveal;
pub mod scroll_spy;
pub mod smooth_scroll;

pub use client::{ContactClient, SubmitError};
pub use form::{ContactForm, FormError, FormState};
pub use navigation::NavbarState;
pub use page::{Page, PageMarkup, SiteConfig};
pub use scroll_spy::{ScrollSpy, SectionBounds};
