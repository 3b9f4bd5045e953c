use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::app::DashOxide;
use crate::constants::layout::{TABLE_HEADER_HEIGHT, TABLE_ROW_HEIGHT};
use crate::widgets::FilterControls;

use super::render_evidence_panel;

/// Render the logbook view: filter row, the entries table, and the
/// evidence panel for the selected entry. Filtering hides rows, it
/// never removes them from the snapshot.
pub fn render_logbook(app: &mut DashOxide, ui: &mut Ui) {
    profiling::scope!("render_logbook");

    let Some(total) = app.state.snapshot.as_ref().map(|s| s.entries.len()) else {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.heading("No data loaded");
            ui.label("Refresh from the server or open a snapshot JSON to get started");
        });
        return;
    };

    let sitios = app
        .state
        .snapshot
        .as_ref()
        .map(|s| s.sitios.clone())
        .unwrap_or_default();
    FilterControls::new(&mut app.state.filter, &sitios).show(ui);
    ui.separator();

    let entries = app.state.visible_entries();
    ui.weak(format!("Showing {} of {} entries", entries.len(), total));

    // Clicks are collected while the table borrows the rows, then
    // applied once it is done
    let mut view_evidence: Option<i64> = None;
    let mut delete: Option<(i64, String)> = None;

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(140.0)) // name
        .column(Column::auto().at_least(80.0)) // sitio
        .column(Column::auto().at_least(90.0)) // date
        .column(Column::auto().at_least(60.0)) // time in
        .column(Column::auto().at_least(60.0)) // time out
        .column(Column::remainder()) // concern
        .column(Column::auto().at_least(70.0)) // actions
        .header(TABLE_HEADER_HEIGHT, |mut header| {
            for title in ["Name", "Sitio", "Date", "Time In", "Time Out", "Concern", ""] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for entry in &entries {
                body.row(TABLE_ROW_HEIGHT, |mut row| {
                    row.col(|ui| {
                        ui.label(entry.full_name());
                    });
                    row.col(|ui| {
                        ui.label(&entry.sitio);
                    });
                    row.col(|ui| {
                        ui.label(&entry.date);
                    });
                    row.col(|ui| {
                        ui.label(&entry.time_in);
                    });
                    row.col(|ui| {
                        ui.label(&entry.time_out);
                    });
                    row.col(|ui| {
                        ui.label(&entry.concern);
                    });
                    row.col(|ui| {
                        ui.horizontal(|ui| {
                            if ui.small_button("🖼").on_hover_text("View evidence").clicked() {
                                view_evidence = Some(entry.id);
                            }
                            if ui.small_button("🗑").on_hover_text("Delete entry").clicked() {
                                delete = Some((entry.id, entry.full_name()));
                            }
                        });
                    });
                });
            }
        });

    if let Some(entry_id) = view_evidence {
        app.view_evidence(entry_id);
    }
    if let Some((entry_id, label)) = delete {
        app.request_delete(entry_id, label);
    }

    ui.separator();
    render_evidence_panel(app, ui);
}
