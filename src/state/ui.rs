//! UI interaction state

#![allow(dead_code)]

/// Top-level view selected from the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveView {
    Dashboard,
    Logbook,
}

impl Default for ActiveView {
    fn default() -> Self {
        ActiveView::Dashboard
    }
}

/// A destructive navigation intercepted until the user confirms it
#[derive(Debug, Clone)]
pub struct PendingDelete {
    pub entry_id: i64,
    /// Name shown in the confirmation prompt
    pub label: String,
    /// Original navigation target, followed only on confirmation
    pub url: String,
}

/// UI state: sidebar, active view, dialogs, and the status-bar error
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Sidebar expanded/collapsed; persisted across sessions
    pub sidebar_expanded: bool,

    /// Currently shown view
    pub active_view: ActiveView,

    /// Dark mode theme toggle
    pub dark_mode: bool,

    /// Show the help window
    pub show_help: bool,

    /// Delete awaiting confirmation, if any
    pub pending_delete: Option<PendingDelete>,

    /// Error message to display in the status bar
    pub error_message: Option<String>,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            dark_mode: true,
            ..Self::default()
        }
    }

    /// Flip the sidebar between expanded and collapsed
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_expanded = !self.sidebar_expanded;
    }

    /// Set an error message
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
    }

    /// Clear the current error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Check if there's an error to display
    pub fn has_error(&self) -> bool {
        self.error_message.is_some()
    }

    /// True while any modal dialog is up
    pub fn has_modal(&self) -> bool {
        self.show_help || self.pending_delete.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sidebar_toggle_flips_the_flag() {
        let mut ui = UiState::new();
        assert!(!ui.sidebar_expanded);
        ui.toggle_sidebar();
        assert!(ui.sidebar_expanded);
        ui.toggle_sidebar();
        assert!(!ui.sidebar_expanded);
    }

    #[test]
    fn error_message_lifecycle() {
        let mut ui = UiState::new();
        assert!(!ui.has_error());
        ui.set_error("boom");
        assert!(ui.has_error());
        ui.clear_error();
        assert!(!ui.has_error());
    }
}
