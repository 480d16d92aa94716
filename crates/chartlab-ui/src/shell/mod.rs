use egui::{CentralPanel, Context, RichText, ScrollArea, SidePanel, TopBottomPanel, Ui};
use tracing::info;

use chartlab_core::{Locale, LocaleText};
use chartlab_views::{DemoView, DemoViewId, ViewerContext, Viewport};

use crate::theme;

/// One catalog entry: everything the shell needs to list and open a demo
pub struct DemoEntry {
    /// Stable type id, matching [`DemoView::view_type`] of the built view
    pub view_type: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    /// Constructor for a fresh view instance
    pub build: fn(DemoViewId, String) -> Box<dyn DemoView>,
}

/// Transient shell state, reset on restart
pub struct ShellState {
    pub about_open: bool,
}

impl Default for ShellState {
    fn default() -> Self {
        Self { about_open: false }
    }
}

/// Render the main menu bar
pub fn menu_bar(
    ctx: &Context,
    viewer: &ViewerContext,
    viewport: &mut Viewport,
    shell: &mut ShellState,
) {
    TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Close All Tabs").clicked() {
                    info!("Closing all demo tabs");
                    viewport.close_all(&viewer.events);
                    ui.close_menu();
                }

                ui.separator();

                if ui.button("Exit").clicked() {
                    ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("View", |ui| {
                let mut show_panel = viewer.state.settings.read().show_gallery_panel;
                if ui.checkbox(&mut show_panel, "Gallery Panel").clicked() {
                    viewer.state.settings.write().show_gallery_panel = show_panel;
                    ui.close_menu();
                }

                let mut dark_mode = viewer.state.settings.read().theme.dark_mode;
                if ui.checkbox(&mut dark_mode, "Dark Mode").clicked() {
                    viewer.state.set_dark_mode(dark_mode);
                    ui.close_menu();
                }

                ui.separator();

                if ui.button("Home Tab").clicked() {
                    viewport.focus_home();
                    ui.close_menu();
                }
            });

            let locale = viewer.state.locale();
            ui.menu_button(locale.text(LocaleText::LanguageMenu), |ui| {
                for candidate in Locale::ALL {
                    if ui
                        .selectable_label(candidate == locale, candidate.label())
                        .clicked()
                    {
                        viewer.state.set_locale(candidate);
                        ui.close_menu();
                    }
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    shell.about_open = true;
                    ui.close_menu();
                }
            });

            // Right-aligned locale indicator
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(RichText::new(locale.label()).weak());
            });
        });
    });
}

/// Render the gallery side panel listing demos grouped by category.
/// Clicking an entry focuses its tab when open, otherwise opens one.
pub fn gallery_panel(
    ctx: &Context,
    viewer: &ViewerContext,
    viewport: &mut Viewport,
    registry: &[DemoEntry],
) {
    SidePanel::left("gallery_panel")
        .default_width(220.0)
        .show(ctx, |ui| {
            ui.add_space(4.0);
            ui.heading(viewer.state.locale().text(LocaleText::GalleryTitle));
            ui.separator();

            ScrollArea::vertical().show(ui, |ui| {
                let mut last_category = "";
                for entry in registry {
                    if entry.category != last_category {
                        ui.add_space(8.0);
                        ui.label(
                            RichText::new(entry.category)
                                .strong()
                                .color(theme::accent_color()),
                        );
                        last_category = entry.category;
                    }
                    let open = viewport.is_open(entry.view_type);
                    if ui.selectable_label(open, entry.title).clicked() {
                        open_demo(viewport, viewer, entry);
                    }
                }
                ui.add_space(8.0);
            });
        });
}

/// Render the central panel holding the dock area and the home tab
pub fn central_panel(
    ctx: &Context,
    viewer: &ViewerContext,
    viewport: &mut Viewport,
    registry: &[DemoEntry],
) {
    let mut requested: Vec<&'static str> = Vec::new();

    CentralPanel::default().show(ctx, |ui| {
        viewport.ui(ui, viewer, &mut |ui| {
            home_tab(ui, viewer, registry, &mut requested);
        });
    });

    // Opening a tab mutates the dock, so requests collected while the
    // dock area is drawing are applied afterwards.
    for view_type in requested {
        if let Some(entry) = registry.iter().find(|entry| entry.view_type == view_type) {
            open_demo(viewport, viewer, entry);
        }
    }
}

/// The home tab content: the full catalog with one-line descriptions
fn home_tab(
    ui: &mut Ui,
    viewer: &ViewerContext,
    registry: &[DemoEntry],
    requested: &mut Vec<&'static str>,
) {
    let locale = viewer.state.locale();

    ScrollArea::vertical().show(ui, |ui| {
        ui.add_space(24.0);
        ui.vertical_centered(|ui| {
            ui.heading(locale.text(LocaleText::GalleryTitle));
            ui.label(RichText::new(locale.text(LocaleText::GallerySubtitle)).weak());
        });
        ui.add_space(12.0);

        let mut last_category = "";
        for entry in registry {
            if entry.category != last_category {
                ui.add_space(12.0);
                ui.label(
                    RichText::new(entry.category)
                        .strong()
                        .color(theme::accent_color()),
                );
                ui.separator();
                last_category = entry.category;
            }
            ui.horizontal(|ui| {
                if ui.button(entry.title).clicked() {
                    requested.push(entry.view_type);
                }
                ui.label(RichText::new(entry.description).weak());
            });
        }
        ui.add_space(24.0);
    });
}

/// Render the bottom status bar
pub fn status_bar(ctx: &Context, viewer: &ViewerContext, viewport: &Viewport) {
    TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let open = viewport.open_demo_count();
            if open == 1 {
                ui.label("1 demo open");
            } else {
                ui.label(format!("{} demos open", open));
            }

            if viewport.any_animating() {
                ui.separator();
                ui.label(RichText::new("streaming").color(theme::accent_color()));
            }

            // Last hovered chart point, fed by the views
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let hovered = viewer.hovered_data.read();
                if hovered.view_id.is_some() {
                    ui.label(RichText::new(hovered.label.as_str()).weak());
                }
            });
        });
    });
}

/// Show the about window while [`ShellState::about_open`] is set
pub fn about_window(ctx: &Context, shell: &mut ShellState) {
    egui::Window::new("About")
        .open(&mut shell.about_open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            ui.heading("Chart Sample Gallery");
            ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
            ui.add_space(8.0);
            ui.label("An interactive gallery of chart demos rendered with egui and egui_plot.");
            ui.label("All datasets are synthetic and can be regenerated from each demo's controls.");
        });
}

/// Focus the demo's tab if one of its type is open, otherwise build and
/// add a fresh instance
pub fn open_demo(viewport: &mut Viewport, viewer: &ViewerContext, entry: &DemoEntry) {
    if viewport.focus_demo(entry.view_type) {
        return;
    }
    info!("Opening demo view: {}", entry.view_type);
    let view = (entry.build)(uuid::Uuid::new_v4(), entry.title.to_string());
    viewport.add_demo(view, &viewer.events);
}
