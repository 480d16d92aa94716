//! Application shell for the chart demo gallery
//!
//! This crate provides the egui chrome around the demo viewport: the
//! theme, the menu bar, the gallery side panel, and the status bar.

pub mod shell;
pub mod theme;

pub use shell::{
    about_window, central_panel, gallery_panel, menu_bar, open_demo, status_bar, DemoEntry,
    ShellState,
};
pub use theme::{accent_color, apply_theme};
