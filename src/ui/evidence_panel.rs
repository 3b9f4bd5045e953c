use eframe::egui::{Image, Ui};

use crate::app::DashOxide;
use crate::constants::layout::EVIDENCE_THUMB_HEIGHT;
use crate::state::EvidenceState;

/// Render the on-demand evidence panel for the selected logbook entry.
/// A finished fetch shows one of three outcomes: the image blocks in
/// array order, the empty placeholder, or an explicit failure state.
pub fn render_evidence_panel(app: &mut DashOxide, ui: &mut Ui) {
    match &app.state.evidence {
        EvidenceState::Idle => {
            ui.weak("Select 🖼 on an entry to view its evidence.");
        }
        EvidenceState::Loading { entry_id } => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(format!("Loading evidence for entry #{}…", entry_id));
            });
        }
        EvidenceState::Loaded { entry_id, files } => {
            ui.strong(format!("Evidence for entry #{}", entry_id));
            let images: Vec<(String, String)> = files
                .iter()
                .map(|f| (f.clone(), app.evidence_image_url(f)))
                .collect();
            eframe::egui::ScrollArea::horizontal()
                .id_salt("evidence_scroll")
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        for (name, url) in images {
                            ui.group(|ui| {
                                ui.vertical(|ui| {
                                    ui.add(
                                        Image::from_uri(url).max_height(EVIDENCE_THUMB_HEIGHT),
                                    );
                                    ui.monospace(name);
                                });
                            });
                        }
                    });
                });
        }
        EvidenceState::Empty { entry_id } => {
            ui.strong(format!("Evidence for entry #{}", entry_id));
            ui.label("No evidence uploaded for this entry.");
        }
        EvidenceState::Failed { entry_id, message } => {
            ui.strong(format!("Evidence for entry #{}", entry_id));
            ui.colored_label(ui.visuals().error_fg_color, "Unable to load evidence");
            ui.weak(message);
        }
    }
}
