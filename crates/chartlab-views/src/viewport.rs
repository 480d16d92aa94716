//! Viewport - the dockable tab area holding the open chart demos

use std::collections::HashMap;

use egui::Ui;
use egui_dock::{DockArea, DockState, TabViewer};

use chartlab_core::events::events::{DemoClosed, DemoOpened};
use chartlab_core::EventBus;

use crate::{DemoView, DemoViewId, ViewerContext};

/// One dock tab: the fixed home catalog or an open demo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryTab {
    Home,
    Demo(DemoViewId),
}

/// Dock layout plus the demo views backing its tabs. The home tab is
/// always present and cannot be closed.
pub struct Viewport {
    dock_state: DockState<GalleryTab>,
    demo_views: HashMap<DemoViewId, Box<dyn DemoView>>,
}

impl Viewport {
    pub fn new() -> Self {
        Self {
            dock_state: DockState::new(vec![GalleryTab::Home]),
            demo_views: HashMap::new(),
        }
    }

    /// Open a demo in a new tab and announce it on the bus
    pub fn add_demo(&mut self, view: Box<dyn DemoView>, events: &EventBus) {
        let id = view.id();
        events.publish(DemoOpened {
            view_id: id.to_string(),
            view_type: view.view_type().to_string(),
        });
        self.demo_views.insert(id, view);

        if self.dock_state.main_surface().is_empty() {
            self.dock_state = DockState::new(vec![GalleryTab::Home, GalleryTab::Demo(id)]);
        } else {
            self.dock_state.push_to_first_leaf(GalleryTab::Demo(id));
        }
    }

    /// Focus the open demo of the given type. Returns false when none is
    /// open, in which case the caller constructs one.
    pub fn focus_demo(&mut self, view_type: &str) -> bool {
        let found = self
            .demo_views
            .values()
            .find(|view| view.view_type() == view_type)
            .map(|view| view.id());
        match found {
            Some(id) => {
                if let Some(location) = self.dock_state.find_tab(&GalleryTab::Demo(id)) {
                    self.dock_state.set_active_tab(location);
                }
                true
            }
            None => false,
        }
    }

    /// True when a demo of the given type is already open
    pub fn is_open(&self, view_type: &str) -> bool {
        self.demo_views
            .values()
            .any(|view| view.view_type() == view_type)
    }

    pub fn focus_home(&mut self) {
        if let Some(location) = self.dock_state.find_tab(&GalleryTab::Home) {
            self.dock_state.set_active_tab(location);
        }
    }

    /// Close every demo tab, leaving only home
    pub fn close_all(&mut self, events: &EventBus) {
        for id in self.demo_views.keys() {
            events.publish(DemoClosed {
                view_id: id.to_string(),
            });
        }
        self.demo_views.clear();
        self.dock_state = DockState::new(vec![GalleryTab::Home]);
    }

    pub fn open_demo_count(&self) -> usize {
        self.demo_views.len()
    }

    /// Per-frame tick for streaming and animated demos
    pub fn update_views(&mut self, ctx: &ViewerContext, dt: f32) {
        for view in self.demo_views.values_mut() {
            view.on_frame_update(ctx, dt);
        }
    }

    /// True while any open demo needs continuous repaints
    pub fn any_animating(&self) -> bool {
        self.demo_views.values().any(|view| view.is_animating())
    }

    /// Draw the dock area. `home_ui` renders the catalog inside the home
    /// tab; the shell owns that content, not the viewport.
    pub fn ui(
        &mut self,
        ui: &mut Ui,
        viewer_context: &ViewerContext,
        home_ui: &mut dyn FnMut(&mut Ui),
    ) {
        let available_rect = ui.available_rect_before_wrap();
        ui.allocate_ui(available_rect.size(), |ui| {
            DockArea::new(&mut self.dock_state)
                .show_close_buttons(true)
                .draggable_tabs(true)
                .show_tab_name_on_hover(true)
                .show_inside(
                    ui,
                    &mut GalleryTabViewer {
                        demo_views: &mut self.demo_views,
                        viewer_context,
                        home_ui,
                    },
                );
        });
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

struct GalleryTabViewer<'a> {
    demo_views: &'a mut HashMap<DemoViewId, Box<dyn DemoView>>,
    viewer_context: &'a ViewerContext,
    home_ui: &'a mut dyn FnMut(&mut Ui),
}

impl TabViewer for GalleryTabViewer<'_> {
    type Tab = GalleryTab;

    fn title(&mut self, tab: &mut Self::Tab) -> egui::WidgetText {
        match tab {
            GalleryTab::Home => "Home".into(),
            GalleryTab::Demo(id) => match self.demo_views.get(id) {
                Some(view) => view.display_name().into(),
                None => "Unknown".into(),
            },
        }
    }

    fn ui(&mut self, ui: &mut Ui, tab: &mut Self::Tab) {
        match tab {
            GalleryTab::Home => (self.home_ui)(ui),
            GalleryTab::Demo(id) => {
                if let Some(view) = self.demo_views.get_mut(id) {
                    view.ui(self.viewer_context, ui);
                }
            }
        }
    }

    fn closeable(&mut self, tab: &mut Self::Tab) -> bool {
        !matches!(tab, GalleryTab::Home)
    }

    fn on_close(&mut self, tab: &mut Self::Tab) -> bool {
        if let GalleryTab::Demo(id) = tab {
            self.demo_views.remove(id);
            self.viewer_context.events.publish(DemoClosed {
                view_id: id.to_string(),
            });
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use uuid::Uuid;

    struct StubView {
        id: DemoViewId,
        kind: &'static str,
    }

    impl DemoView for StubView {
        fn id(&self) -> DemoViewId {
            self.id
        }

        fn display_name(&self) -> &str {
            self.kind
        }

        fn view_type(&self) -> &str {
            self.kind
        }

        fn ui(&mut self, _ctx: &ViewerContext, _ui: &mut Ui) {}

        fn save_config(&self) -> Value {
            json!({})
        }

        fn load_config(&mut self, _config: Value) {}

        fn as_any(&self) -> &dyn std::any::Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
            self
        }
    }

    fn stub(kind: &'static str) -> Box<dyn DemoView> {
        Box::new(StubView {
            id: Uuid::new_v4(),
            kind,
        })
    }

    #[test]
    fn test_add_demo_tracks_open_views() {
        let events = EventBus::new();
        let mut viewport = Viewport::new();
        assert_eq!(viewport.open_demo_count(), 0);

        viewport.add_demo(stub("BarChart"), &events);
        viewport.add_demo(stub("Gauge"), &events);
        assert_eq!(viewport.open_demo_count(), 2);
    }

    #[test]
    fn test_focus_demo_only_finds_open_types() {
        let events = EventBus::new();
        let mut viewport = Viewport::new();
        viewport.add_demo(stub("BarChart"), &events);

        assert!(viewport.is_open("BarChart"));
        assert!(!viewport.is_open("Heatmap"));

        assert!(viewport.focus_demo("BarChart"));
        assert!(!viewport.focus_demo("Heatmap"));
    }

    #[test]
    fn test_close_all_keeps_the_home_tab() {
        let events = EventBus::new();
        let mut viewport = Viewport::new();
        viewport.add_demo(stub("BarChart"), &events);
        viewport.add_demo(stub("Gauge"), &events);

        viewport.close_all(&events);
        assert_eq!(viewport.open_demo_count(), 0);
        assert!(viewport.dock_state.find_tab(&GalleryTab::Home).is_some());
    }
}
