//! Application controller
//!
//! `DashOxide` owns the state container and the remote client, routes
//! worker-thread completions into state, and hosts the actions the UI
//! triggers: snapshot loading, evidence viewing, and confirmed
//! deletes.

use std::path::PathBuf;
use std::sync::mpsc::Receiver;

use tracing::{debug, info};

use crate::constants::net::{BASE_URL_ENV, DEFAULT_BASE_URL};
use crate::constants::storage::SIDEBAR_EXPANDED_KEY;
use crate::data::DashboardSnapshot;
use crate::error::DashError;
use crate::remote::{self, RemoteClient, RemoteEvent};
use crate::state::{AppState, EvidenceState, PendingDelete};

pub struct DashOxide {
    /// Application state
    pub state: AppState,

    /// Server access; all calls run on worker threads
    remote: RemoteClient,

    /// Completion events from worker threads, drained once per frame
    events: Receiver<RemoteEvent>,
}

impl DashOxide {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        info!(%base_url, "starting dashboard client");

        let (remote, events) = RemoteClient::new(base_url);

        let mut state = AppState::new();
        // Restore the persisted sidebar flag ("1"/"0", same encoding the
        // web dashboard kept in localStorage)
        state.ui.sidebar_expanded = cc
            .storage
            .and_then(|s| s.get_string(SIDEBAR_EXPANDED_KEY))
            .map(|v| v == "1")
            .unwrap_or(false);

        let mut app = Self {
            state,
            remote,
            events,
        };
        app.refresh_snapshot();
        app
    }

    pub fn base_url(&self) -> &str {
        self.remote.base_url()
    }

    /// Kick off a background snapshot refresh
    pub fn refresh_snapshot(&mut self) {
        if self.state.refreshing {
            return;
        }
        self.state.refreshing = true;
        self.remote.spawn_snapshot_refresh();
    }

    /// Load a snapshot from a local JSON file instead of the server
    pub fn load_snapshot_file(&mut self, path: PathBuf) -> Result<(), DashError> {
        let snapshot = DashboardSnapshot::load(&path)?;
        info!(path = %path.display(), entries = snapshot.entries.len(), "snapshot loaded from file");
        self.state.install_snapshot(snapshot);
        Ok(())
    }

    /// File-picker entry point for local snapshots
    pub fn open_snapshot_dialog(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .pick_file()
        {
            if let Err(e) = self.load_snapshot_file(path) {
                self.state.ui.set_error(e.user_message());
            }
        }
    }

    /// Start fetching the evidence listing for an entry
    pub fn view_evidence(&mut self, entry_id: i64) {
        self.state.evidence = EvidenceState::Loading { entry_id };
        self.remote.spawn_evidence_fetch(entry_id);
    }

    /// Intercept a delete: record the navigation target and let the
    /// confirmation dialog decide
    pub fn request_delete(&mut self, entry_id: i64, label: String) {
        self.state.ui.pending_delete = Some(PendingDelete {
            entry_id,
            label,
            url: remote::delete_url(self.remote.base_url(), entry_id),
        });
    }

    /// Proceed to the intercepted delete target
    pub fn confirm_delete(&mut self) {
        if let Some(pending) = self.state.ui.pending_delete.take() {
            self.remote.spawn_delete(pending.entry_id, pending.url);
        }
    }

    /// Discard the intercepted delete
    pub fn cancel_delete(&mut self) {
        self.state.ui.pending_delete = None;
    }

    /// Drain worker-thread completions into state. Called once per
    /// frame; completion order is unspecified, so evidence results for
    /// an entry no longer shown are dropped.
    pub fn poll_remote(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            match event {
                RemoteEvent::Snapshot(Ok(snapshot)) => {
                    self.state.refreshing = false;
                    info!(
                        projects = snapshot.projects.len(),
                        days = snapshot.logbook_daily.len(),
                        reports = snapshot.reports.len(),
                        entries = snapshot.entries.len(),
                        "snapshot refreshed"
                    );
                    self.state.install_snapshot(snapshot);
                }
                RemoteEvent::Snapshot(Err(message)) => {
                    self.state.refreshing = false;
                    self.state.ui.set_error(message);
                }
                RemoteEvent::Evidence { entry_id, result } => {
                    if self.state.evidence.entry_id() != Some(entry_id) {
                        debug!(entry_id, "dropping stale evidence result");
                        continue;
                    }
                    self.state.evidence = evidence_outcome(entry_id, result);
                }
                RemoteEvent::Deleted { entry_id, result } => match result {
                    Ok(()) => self.state.remove_entry(entry_id),
                    Err(message) => self.state.ui.set_error(message),
                },
            }
        }
    }

    /// Evidence image URL under the fixed uploads path
    pub fn evidence_image_url(&self, filename: &str) -> String {
        remote::upload_url(self.remote.base_url(), filename)
    }

    /// Persist the sidebar flag; called by the eframe storage hook
    pub fn persist(&self, storage: &mut dyn eframe::Storage) {
        let flag = if self.state.ui.sidebar_expanded { "1" } else { "0" };
        storage.set_string(SIDEBAR_EXPANDED_KEY, flag.to_string());
    }
}

/// Fold a finished evidence fetch into its three observable outcomes:
/// loaded with files, loaded empty, or failed
fn evidence_outcome(
    entry_id: i64,
    result: std::result::Result<Vec<String>, String>,
) -> EvidenceState {
    match result {
        Ok(files) if files.is_empty() => EvidenceState::Empty { entry_id },
        Ok(files) => EvidenceState::Loaded { entry_id, files },
        Err(message) => EvidenceState::Failed { entry_id, message },
    }
}
