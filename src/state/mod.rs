//! Application state management
//!
//! This module organizes the DashOxide application state into logical
//! components: the snapshot data, the chart registry, the table
//! filter, the evidence panel state, and UI interaction state. One
//! `AppState` is constructed per window and torn down with it; there
//! is no process-wide state.

mod filters;
mod ui;

pub use filters::{parse_date, LogFilter};
pub use ui::{ActiveView, PendingDelete, UiState};

use std::time::Duration;

use crate::charts::{ChartRegistry, SurfaceId};
use crate::constants::resize::DEBOUNCE_MS;
use crate::data::{DashboardSnapshot, LogEntry};
use crate::debounce::ResizeDebouncer;

/// State of the on-demand evidence panel. Loading resolves into one of
/// three outcomes: loaded with files, loaded empty, or failed.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum EvidenceState {
    #[default]
    Idle,
    Loading {
        entry_id: i64,
    },
    Loaded {
        entry_id: i64,
        files: Vec<String>,
    },
    Empty {
        entry_id: i64,
    },
    Failed {
        entry_id: i64,
        message: String,
    },
}

impl EvidenceState {
    /// The entry this state belongs to, if any
    pub fn entry_id(&self) -> Option<i64> {
        match self {
            EvidenceState::Idle => None,
            EvidenceState::Loading { entry_id }
            | EvidenceState::Loaded { entry_id, .. }
            | EvidenceState::Empty { entry_id }
            | EvidenceState::Failed { entry_id, .. } => Some(*entry_id),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, EvidenceState::Loading { .. })
    }
}

/// Main application state container
pub struct AppState {
    /// Latest dashboard snapshot, if one has loaded
    pub snapshot: Option<DashboardSnapshot>,

    /// Live chart surfaces keyed by surface id
    pub charts: ChartRegistry,

    /// Logbook table filter configuration
    pub filter: LogFilter,

    /// Evidence panel state for the selected entry
    pub evidence: EvidenceState,

    /// UI interaction state
    pub ui: UiState,

    /// Pending resize burst, if any
    pub resize: ResizeDebouncer,

    /// Last observed chart surface size
    pub surface_size: Option<(f32, f32)>,

    /// Snapshot refresh in flight
    pub refreshing: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            snapshot: None,
            charts: ChartRegistry::default(),
            filter: LogFilter::default(),
            evidence: EvidenceState::Idle,
            ui: UiState::new(),
            resize: ResizeDebouncer::new(Duration::from_millis(DEBOUNCE_MS)),
            surface_size: None,
            refreshing: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a snapshot is loaded
    pub fn has_snapshot(&self) -> bool {
        self.snapshot.is_some()
    }

    /// Replace the snapshot and rebuild all chart pagination state
    /// wholesale. Evidence tied to the old snapshot is reset.
    pub fn install_snapshot(&mut self, snapshot: DashboardSnapshot) {
        let size = self.surface_size.unwrap_or((1024.0, 768.0));
        self.charts = ChartRegistry::initialize(&snapshot, &Self::enabled_surfaces(), size);
        self.snapshot = Some(snapshot);
        self.evidence = EvidenceState::Idle;
        self.ui.clear_error();
    }

    /// Surfaces present in this layout; all three panels by default
    pub fn enabled_surfaces() -> [SurfaceId; 3] {
        [
            SurfaceId::ProjectChart,
            SurfaceId::LogbookChart,
            SurfaceId::ReportChart,
        ]
    }

    /// Logbook rows visible under the current filter, in snapshot order
    pub fn visible_entries(&self) -> Vec<LogEntry> {
        self.snapshot
            .as_ref()
            .map(|s| {
                s.entries
                    .iter()
                    .filter(|e| self.filter.matches(e))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Drop a deleted entry from the local snapshot without refetching
    pub fn remove_entry(&mut self, entry_id: i64) {
        if let Some(snapshot) = &mut self.snapshot {
            snapshot.entries.retain(|e| e.id != entry_id);
        }
        if self.evidence.entry_id() == Some(entry_id) {
            self.evidence = EvidenceState::Idle;
        }
    }

    /// True while any background fetch should keep the UI repainting
    pub fn busy(&self) -> bool {
        self.refreshing || self.evidence.is_loading()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{LogEntry, StatRecord};

    fn snapshot() -> DashboardSnapshot {
        DashboardSnapshot {
            projects: vec![StatRecord {
                status: Some("Ongoing".to_string()),
                count: 2.0,
                ..Default::default()
            }],
            entries: vec![
                LogEntry {
                    id: 1,
                    first_name: "Ana".to_string(),
                    last_name: "Reyes".to_string(),
                    sitio: "Centro".to_string(),
                    date: "2025-10-01".to_string(),
                    ..Default::default()
                },
                LogEntry {
                    id: 2,
                    first_name: "Jose".to_string(),
                    last_name: "Santos".to_string(),
                    sitio: "Riverside".to_string(),
                    date: "2025-10-02".to_string(),
                    ..Default::default()
                },
            ],
            ..Default::default()
        }
    }

    #[test]
    fn install_snapshot_builds_charts_and_resets_evidence() {
        let mut state = AppState::new();
        state.evidence = EvidenceState::Empty { entry_id: 9 };

        state.install_snapshot(snapshot());
        assert!(state.has_snapshot());
        assert_eq!(state.charts.len(), 3);
        assert_eq!(state.evidence, EvidenceState::Idle);
    }

    #[test]
    fn visible_entries_honor_the_filter() {
        let mut state = AppState::new();
        state.install_snapshot(snapshot());
        assert_eq!(state.visible_entries().len(), 2);

        state.filter.sitio = Some("Centro".to_string());
        let visible = state.visible_entries();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, 1);
    }

    #[test]
    fn remove_entry_drops_row_and_stale_evidence() {
        let mut state = AppState::new();
        state.install_snapshot(snapshot());
        state.evidence = EvidenceState::Loaded {
            entry_id: 1,
            files: vec!["a.jpg".to_string()],
        };

        state.remove_entry(1);
        assert_eq!(state.visible_entries().len(), 1);
        assert_eq!(state.evidence, EvidenceState::Idle);
    }
}
