//! Gallery application entry point

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use eframe::egui::{self, Context};
use tracing::info;
use tracing_subscriber::EnvFilter;

use chartlab_core::events::events::ThemeChanged;
use chartlab_core::events::handler_from_fn;
use chartlab_core::GalleryState;
use chartlab_data::DatasetStore;
use chartlab_ui::{apply_theme, DemoEntry, ShellState};
use chartlab_views::{ViewerContext, Viewport};

mod registry;

/// Main application state
struct GalleryApp {
    /// The viewport managing the home tab and the open demos
    viewport: Viewport,

    /// Shared context handed to every view and shell panel
    viewer_context: ViewerContext,

    /// Transient shell state
    shell: ShellState,

    /// The demo catalog
    registry: Vec<DemoEntry>,
}

impl GalleryApp {
    fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let state = Arc::new(GalleryState::new());
        let store = Arc::new(DatasetStore::new());

        let (dark_mode, scale_factor) = {
            let settings = state.settings.read();
            (settings.theme.dark_mode, settings.theme.scale_factor)
        };
        apply_theme(&cc.egui_ctx, dark_mode);
        cc.egui_ctx.set_pixels_per_point(scale_factor);

        // Reapply visuals whenever a theme switch is announced on the bus
        let egui_ctx = cc.egui_ctx.clone();
        state
            .event_bus
            .subscribe::<ThemeChanged>(handler_from_fn(move |event| {
                if let Some(changed) = event.as_any().downcast_ref::<ThemeChanged>() {
                    apply_theme(&egui_ctx, changed.dark_mode);
                }
            }));

        let events = state.event_bus.clone();
        let viewer_context = ViewerContext::new(state, events, store);

        Self {
            viewport: Viewport::new(),
            viewer_context,
            shell: ShellState::default(),
            registry: registry::demo_registry(),
        }
    }
}

impl eframe::App for GalleryApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // Advance streaming demos before anything draws
        let dt = ctx.input(|i| i.stable_dt);
        self.viewport.update_views(&self.viewer_context, dt);

        chartlab_ui::menu_bar(ctx, &self.viewer_context, &mut self.viewport, &mut self.shell);
        chartlab_ui::status_bar(ctx, &self.viewer_context, &self.viewport);

        if self.viewer_context.state.settings.read().show_gallery_panel {
            chartlab_ui::gallery_panel(ctx, &self.viewer_context, &mut self.viewport, &self.registry);
        }

        chartlab_ui::central_panel(ctx, &self.viewer_context, &mut self.viewport, &self.registry);
        chartlab_ui::about_window(ctx, &mut self.shell);

        // Streaming views need frames to arrive without input events
        if self.viewport.any_animating() {
            ctx.request_repaint_after(Duration::from_millis(16));
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting the chart sample gallery");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([900.0, 600.0]),
        default_theme: eframe::Theme::Dark,
        persist_window: false,
        ..Default::default()
    };

    eframe::run_native(
        "Chart Sample Gallery",
        options,
        Box::new(|cc| Box::new(GalleryApp::new(cc))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run app: {}", e))?;

    Ok(())
}
