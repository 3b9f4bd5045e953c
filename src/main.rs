#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use std::time::{Duration, Instant};

use eframe::egui;
use eframe::App;
use tracing_subscriber::EnvFilter;

// Application controller
mod app;

// Paginated dashboard charts
mod charts;

// Application constants
mod constants;

// Dashboard data model
mod data;

// Resize debouncing
mod debounce;

// Error handling
mod error;

// Remote server access
mod remote;

// Application state modules
mod state;

// View rendering
mod ui;

// Reusable widgets
mod widgets;

use app::DashOxide;
use state::ActiveView;

impl App for DashOxide {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        profiling::scope!("frame");

        self.poll_remote();

        ctx.set_visuals(if self.state.ui.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });

        self.handle_keys(ctx);

        // Collapse resize bursts into a single layout-adjustment pass
        let now = Instant::now();
        let size = ctx.screen_rect().size();
        let surface = (size.x, size.y);
        if self.state.surface_size != Some(surface) {
            if self.state.surface_size.is_some() {
                self.state.resize.observe(now);
            }
            self.state.surface_size = Some(surface);
        }
        if self.state.resize.poll(now) {
            self.state.charts.relayout_all(surface);
        }

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("☰").on_hover_text("Toggle sidebar").clicked() {
                    self.state.ui.toggle_sidebar();
                }
                ui.heading("Admin Dashboard");

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("❓").on_hover_text("Help (F1)").clicked() {
                        self.state.ui.show_help = !self.state.ui.show_help;
                    }
                    let theme_icon = if self.state.ui.dark_mode { "🌙" } else { "☀" };
                    if ui.button(theme_icon).on_hover_text("Toggle theme (T)").clicked() {
                        self.state.ui.dark_mode = !self.state.ui.dark_mode;
                    }
                    if ui.button("📂").on_hover_text("Open snapshot JSON").clicked() {
                        self.open_snapshot_dialog();
                    }
                    if self.state.refreshing {
                        ui.spinner();
                    } else if ui.button("⟲").on_hover_text("Refresh from server").clicked() {
                        self.refresh_snapshot();
                    }
                });
            });
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if let Some(message) = self.state.ui.error_message.clone() {
                    ui.colored_label(ui.visuals().error_fg_color, format!("⚠ {}", message));
                    if ui.small_button("✖").clicked() {
                        self.state.ui.clear_error();
                    }
                    ui.separator();
                }
                if let Some(snapshot) = &self.state.snapshot {
                    ui.label(format!(
                        "Entries: {} | Charts: {}",
                        snapshot.entries.len(),
                        self.state.charts.len()
                    ));
                    ui.separator();
                }
                ui.weak(self.base_url().to_string());
            });
        });

        ui::render_sidebar(self, ctx);

        egui::CentralPanel::default().show(ctx, |ui| match self.state.ui.active_view {
            ActiveView::Dashboard => ui::render_dashboard(self, ui),
            ActiveView::Logbook => ui::render_logbook(self, ui),
        });

        ui::render_confirm_dialog(self, ctx);
        ui::render_help_dialog(self, ctx);

        // Worker completions and the pending resize pass both arrive
        // outside the event stream, so keep repainting until they land
        if self.state.busy() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
        if let Some(remaining) = self.state.resize.remaining(now) {
            ctx.request_repaint_after(remaining + Duration::from_millis(10));
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.persist(storage);
    }
}

impl DashOxide {
    fn handle_keys(&mut self, ctx: &egui::Context) {
        let typing = ctx.wants_keyboard_input();
        let (escape, help, theme) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::Escape),
                i.key_pressed(egui::Key::F1),
                i.key_pressed(egui::Key::T) && !typing,
            )
        });

        if help {
            self.state.ui.show_help = !self.state.ui.show_help;
        }
        if theme {
            self.state.ui.dark_mode = !self.state.ui.dark_mode;
        }
        if escape {
            // Dialogs close first, then the sidebar collapses
            if self.state.ui.show_help {
                self.state.ui.show_help = false;
            } else if self.state.ui.pending_delete.is_some() {
                self.cancel_delete();
            } else if self.state.ui.sidebar_expanded {
                self.state.ui.sidebar_expanded = false;
            }
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1280.0, 800.0]),
        ..Default::default()
    };
    eframe::run_native(
        "DashOxide - Admin Dashboard",
        options,
        Box::new(|cc| Ok(Box::new(DashOxide::new(cc)))),
    )
    .unwrap();
}
