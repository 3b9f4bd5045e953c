//! Date input widget for optional `YYYY-MM-DD` filter bounds

use egui::{Response, TextEdit, Ui};

use crate::state::parse_date;

/// A small labelled text input for a date bound. Input that does not
/// parse is tinted as an error but leaves the bound inactive rather
/// than rejecting it.
pub struct DateInput<'a> {
    label: &'a str,
    value: &'a mut String,
}

impl<'a> DateInput<'a> {
    pub fn new(label: &'a str, value: &'a mut String) -> Self {
        Self { label, value }
    }

    /// Show the widget
    pub fn show(self, ui: &mut Ui) -> Response {
        ui.horizontal(|ui| {
            ui.label(self.label);

            let invalid = !self.value.trim().is_empty() && parse_date(self.value).is_none();
            let mut edit = TextEdit::singleline(self.value)
                .hint_text("YYYY-MM-DD")
                .desired_width(90.0);
            if invalid {
                edit = edit.text_color(ui.visuals().error_fg_color);
            }
            ui.add(edit)
        })
        .inner
    }
}
