use crate::app::DashOxide;
use crate::constants::layout::SIDEBAR_WIDTH;
use crate::state::ActiveView;

/// Render the collapsible navigation sidebar. Visibility follows the
/// persisted expanded flag; the panel animates in and out.
pub fn render_sidebar(app: &mut DashOxide, ctx: &eframe::egui::Context) {
    eframe::egui::SidePanel::left("app_sidebar")
        .resizable(false)
        .exact_width(SIDEBAR_WIDTH)
        .show_animated(ctx, app.state.ui.sidebar_expanded, |ui| {
            ui.add_space(6.0);
            ui.heading("Barangay Admin");
            ui.separator();

            let mut nav_item = |ui: &mut eframe::egui::Ui, view: ActiveView, label: &str| {
                let selected = app.state.ui.active_view == view;
                if ui.selectable_label(selected, label).clicked() {
                    app.state.ui.active_view = view;
                }
            };

            nav_item(ui, ActiveView::Dashboard, "📊 Dashboard");
            nav_item(ui, ActiveView::Logbook, "📋 Logbook");

            ui.separator();
            if ui.button("⟲ Refresh data").clicked() {
                app.refresh_snapshot();
            }
            if ui.button("📂 Open snapshot…").clicked() {
                app.open_snapshot_dialog();
            }
        });
}
