use eframe::egui::{Align2, Button, Color32, RichText};

use crate::app::DashOxide;

/// Render the blocking delete confirmation. The intercepted navigation
/// proceeds only when the user confirms; cancel discards it.
pub fn render_confirm_dialog(app: &mut DashOxide, ctx: &eframe::egui::Context) {
    let Some(pending) = app.state.ui.pending_delete.clone() else {
        return;
    };

    eframe::egui::Window::new("⚠ Confirm Delete")
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            ui.label("Are you sure you want to delete this?");
            ui.weak(format!("{} (entry #{})", pending.label, pending.entry_id));
            ui.separator();
            ui.horizontal(|ui| {
                let delete = Button::new(RichText::new("Delete").color(Color32::WHITE))
                    .fill(Color32::from_rgb(0xdc, 0x35, 0x45));
                if ui.add(delete).clicked() {
                    app.confirm_delete();
                }
                if ui.button("Cancel").clicked() {
                    app.cancel_delete();
                }
            });
        });
}
