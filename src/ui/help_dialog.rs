use crate::app::DashOxide;

pub fn render_help_dialog(app: &mut DashOxide, ctx: &eframe::egui::Context) {
    if app.state.ui.show_help {
        eframe::egui::Window::new("⌨ Keyboard Shortcuts")
            .anchor(eframe::egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .collapsible(false)
            .show(ctx, |ui| {
                ui.heading("Navigation");
                ui.label("F1 - Toggle help");
                ui.label("ESC - Close dialog, then collapse sidebar");
                ui.label("T - Toggle dark/light theme");

                ui.separator();
                ui.heading("Charts");
                ui.label("⏴ / ⏵ buttons - Previous/next chart page");
                ui.label("Page indicator shows current / total");

                ui.separator();
                ui.heading("Logbook");
                ui.label("🖼 - View evidence images for an entry");
                ui.label("🗑 - Delete an entry (asks for confirmation)");

                ui.separator();
                if ui.button("Close").clicked() {
                    app.state.ui.show_help = false;
                }
            });
    }
}
