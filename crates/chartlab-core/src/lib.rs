//! Core functionality for the chart demo gallery
//!
//! This crate provides shared state, the event bus, and the locale
//! table that the demo views and the shell build on.

pub mod events;
pub mod locale;
pub mod state;

// Re-export commonly used types
pub use events::{Event, EventBus, EventHandler};
pub use locale::{Locale, LocaleText};
pub use state::{DemoViewId, GalleryState, GallerySettings, ThemeSettings};
