//! Navigation state for the single-page portfolio.
//!
//! Everything in here is plain data and pure transitions so it can be
//! exercised without a browser; the typewriter also comes with a reactive
//! handle. The Leptos glue in `app::host` feeds it window signals and DOM
//! measurements and applies the results.

mod config;
mod error;
mod menu;
mod navigator;
mod route;
mod scroll;
mod section;
mod typewriter;
mod viewport;

pub use config::NavConfig;
pub use error::NavError;
pub use menu::{MenuEvent, MenuState};
pub use navigator::{NavigationStep, ScrollRequest, SectionNavigator};
pub use route::Route;
pub use scroll::{ScrollState, ScrollTracker};
pub use section::{Section, SectionBounds, SectionId, SectionLayout, SectionRegistry};
pub use typewriter::{typewriter_signal, Typewriter};
pub use viewport::ViewportMode;
