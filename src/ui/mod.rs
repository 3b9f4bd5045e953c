mod confirm_dialog;
mod dashboard;
mod evidence_panel;
mod help_dialog;
mod logbook;
mod sidebar;

pub use confirm_dialog::render_confirm_dialog;
pub use dashboard::render_dashboard;
pub use evidence_panel::render_evidence_panel;
pub use help_dialog::render_help_dialog;
pub use logbook::render_logbook;
pub use sidebar::render_sidebar;
