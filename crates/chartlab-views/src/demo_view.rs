//! Demo view abstraction - base trait for all dockable chart demos

use egui::Ui;
use serde_json::Value;

use crate::ViewerContext;

pub use chartlab_core::DemoViewId;

/// Base trait for all demo views in the gallery
pub trait DemoView: Send + Sync {
    /// Get the unique ID of this view
    fn id(&self) -> DemoViewId;

    /// Get the display name shown in the dock tab
    fn display_name(&self) -> &str;

    /// Get the view type (for serialization)
    fn view_type(&self) -> &str;

    /// Draw the UI
    fn ui(&mut self, ctx: &ViewerContext, ui: &mut Ui);

    /// Save configuration
    fn save_config(&self) -> Value;

    /// Load configuration
    fn load_config(&mut self, config: Value);

    /// Called each frame with the seconds elapsed since the previous frame
    fn on_frame_update(&mut self, _ctx: &ViewerContext, _dt: f32) {}

    /// Whether this view is currently animating and needs repaints
    fn is_animating(&self) -> bool {
        false
    }

    /// Get as any for downcasting
    fn as_any(&self) -> &dyn std::any::Any;

    /// Get as any mut for downcasting
    fn as_any_mut(&mut self) -> &mut dyn std::any::Any;
}
