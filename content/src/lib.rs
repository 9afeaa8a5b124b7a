//! Content of the portfolio page: the records it shows, how they are loaded,
//! and which section the visitor navigated to.
//!
//! Nothing in here knows about Leptos. Loading (and the sources it reads
//! from) is only compiled with the `ssr` feature, the rest also builds for
//! the browser.

pub mod display;
#[cfg(feature = "ssr")]
pub mod loader;
pub mod model;
pub mod nav;
pub mod settings;
#[cfg(feature = "ssr")]
pub mod source;
pub mod state;

#[cfg(feature = "ssr")]
pub use loader::load;
pub use model::{Blog, Collection, Experience, Project, Skill};
pub use nav::{Navigator, Scroller, Section};
#[cfg(feature = "ssr")]
pub use source::{ContentSource, Source};
pub use state::{LoadFailure, ViewState};
