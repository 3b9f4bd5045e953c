//! Logbook filter controls widget

use egui::{ComboBox, Response, TextEdit, Ui};

use crate::state::LogFilter;

use super::DateInput;

/// A reusable widget for the logbook table's filter row
pub struct FilterControls<'a> {
    filter: &'a mut LogFilter,
    sitios: &'a [String],
}

impl<'a> FilterControls<'a> {
    /// Create a new filter controls widget
    pub fn new(filter: &'a mut LogFilter, sitios: &'a [String]) -> Self {
        Self { filter, sitios }
    }

    /// Show the filter controls
    pub fn show(self, ui: &mut Ui) -> Response {
        ui.horizontal(|ui| {
            ui.label("🔍");
            ui.add(
                TextEdit::singleline(&mut self.filter.search_name)
                    .hint_text("Search name...")
                    .desired_width(140.0),
            );

            ui.separator();

            let selected = self.filter.sitio.clone().unwrap_or_default();
            ComboBox::from_id_salt("sitio_filter")
                .selected_text(if selected.is_empty() {
                    "All sitios"
                } else {
                    selected.as_str()
                })
                .show_ui(ui, |ui| {
                    if ui.selectable_label(self.filter.sitio.is_none(), "All sitios").clicked() {
                        self.filter.sitio = None;
                    }
                    for sitio in self.sitios {
                        let chosen = self.filter.sitio.as_deref() == Some(sitio.as_str());
                        if ui.selectable_label(chosen, sitio).clicked() {
                            self.filter.sitio = Some(sitio.clone());
                        }
                    }
                });

            ui.separator();

            DateInput::new("From", &mut self.filter.from_input).show(ui);
            DateInput::new("To", &mut self.filter.to_input).show(ui);

            if self.filter.is_active() {
                ui.separator();
                if ui.button("✖ Clear").clicked() {
                    self.filter.clear();
                }
            }
        })
        .response
    }
}
