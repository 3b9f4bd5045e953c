//! Remote access to the hosting server
//!
//! Every network call runs on a worker thread and reports back over an
//! mpsc channel the UI loop drains once per frame, so the interface
//! never blocks on the server. Completion order across in-flight calls
//! is unspecified; consumers match results to what they are currently
//! showing and drop stale ones.

use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread;
use std::time::Duration;

use serde::Deserialize;
use tracing::{info, warn};

use crate::constants::net::{
    DASHBOARD_PATH, DELETE_PATH, EVIDENCE_PATH, REQUEST_TIMEOUT_SECS, UPLOADS_PATH,
};
use crate::data::DashboardSnapshot;
use crate::error::Result;

/// Wire shape of the evidence listing endpoint
#[derive(Debug, Deserialize)]
pub struct EvidenceResponse {
    #[serde(default)]
    pub evidence_files: Vec<String>,
}

/// Completion message from a worker thread
pub enum RemoteEvent {
    /// Snapshot refresh finished
    Snapshot(std::result::Result<DashboardSnapshot, String>),
    /// Evidence listing finished for one logbook entry
    Evidence {
        entry_id: i64,
        result: std::result::Result<Vec<String>, String>,
    },
    /// Confirmed delete finished for one logbook entry
    Deleted {
        entry_id: i64,
        result: std::result::Result<(), String>,
    },
}

/// Parse the evidence payload into the list of uploaded filenames
pub fn parse_evidence(json: &str) -> Result<Vec<String>> {
    let response: EvidenceResponse = serde_json::from_str(json)?;
    Ok(response.evidence_files)
}

/// Absolute URL of one uploaded evidence image
pub fn upload_url(base_url: &str, filename: &str) -> String {
    format!("{}{}/{}", base_url.trim_end_matches('/'), UPLOADS_PATH, filename)
}

/// URL a confirmed delete navigates to
pub fn delete_url(base_url: &str, entry_id: i64) -> String {
    format!("{}{}/{}", base_url.trim_end_matches('/'), DELETE_PATH, entry_id)
}

fn evidence_url(base_url: &str, entry_id: i64) -> String {
    format!("{}{}/{}", base_url.trim_end_matches('/'), EVIDENCE_PATH, entry_id)
}

fn dashboard_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), DASHBOARD_PATH)
}

/// Handle for spawning server calls; cheap to keep on the app
pub struct RemoteClient {
    base_url: String,
    tx: Sender<RemoteEvent>,
}

impl RemoteClient {
    /// Create a client and the receiving end the UI loop polls
    pub fn new(base_url: impl Into<String>) -> (Self, Receiver<RemoteEvent>) {
        let (tx, rx) = channel();
        (
            Self {
                base_url: base_url.into(),
                tx,
            },
            rx,
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the dashboard snapshot in the background
    pub fn spawn_snapshot_refresh(&self) {
        let url = dashboard_url(&self.base_url);
        let tx = self.tx.clone();
        thread::spawn(move || {
            let result = fetch_snapshot(&url).map_err(|e| {
                warn!(error = %e, "snapshot refresh failed");
                e.user_message()
            });
            // Receiver gone means the app is shutting down
            let _ = tx.send(RemoteEvent::Snapshot(result));
        });
    }

    /// Fetch the evidence listing for one entry in the background
    pub fn spawn_evidence_fetch(&self, entry_id: i64) {
        let url = evidence_url(&self.base_url, entry_id);
        let tx = self.tx.clone();
        thread::spawn(move || {
            let result = fetch_evidence(&url).map_err(|e| {
                warn!(entry_id, error = %e, "evidence fetch failed");
                e.user_message()
            });
            let _ = tx.send(RemoteEvent::Evidence { entry_id, result });
        });
    }

    /// Navigate to a confirmed delete target in the background
    pub fn spawn_delete(&self, entry_id: i64, url: String) {
        let tx = self.tx.clone();
        thread::spawn(move || {
            let result = request_delete(&url).map_err(|e| {
                warn!(entry_id, error = %e, "delete failed");
                e.user_message()
            });
            if result.is_ok() {
                info!(entry_id, "logbook entry deleted");
            }
            let _ = tx.send(RemoteEvent::Deleted { entry_id, result });
        });
    }
}

fn blocking_client() -> Result<reqwest::blocking::Client> {
    Ok(reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()?)
}

fn fetch_snapshot(url: &str) -> Result<DashboardSnapshot> {
    let body = blocking_client()?
        .get(url)
        .send()?
        .error_for_status()?
        .text()?;
    DashboardSnapshot::parse(&body)
}

fn fetch_evidence(url: &str) -> Result<Vec<String>> {
    let body = blocking_client()?
        .get(url)
        .send()?
        .error_for_status()?
        .text()?;
    parse_evidence(&body)
}

fn request_delete(url: &str) -> Result<()> {
    blocking_client()?.get(url).send()?.error_for_status()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DashError;

    #[test]
    fn evidence_parsing_preserves_order() {
        let files = parse_evidence(r#"{"evidence_files": ["a.jpg", "b.jpg"]}"#).unwrap();
        assert_eq!(files, vec!["a.jpg", "b.jpg"]);
    }

    #[test]
    fn evidence_parsing_handles_empty_and_absent_lists() {
        assert!(parse_evidence(r#"{"evidence_files": []}"#).unwrap().is_empty());
        assert!(parse_evidence("{}").unwrap().is_empty());
    }

    #[test]
    fn evidence_parsing_rejects_malformed_payloads() {
        assert!(matches!(
            parse_evidence("not json"),
            Err(DashError::Json(_))
        ));
    }

    #[test]
    fn urls_are_joined_against_the_base() {
        assert_eq!(
            upload_url("http://localhost:5000/", "a.jpg"),
            "http://localhost:5000/static/uploads/a.jpg"
        );
        assert_eq!(
            delete_url("http://localhost:5000", 7),
            "http://localhost:5000/logbook/delete/7"
        );
        assert_eq!(
            evidence_url("http://localhost:5000", 7),
            "http://localhost:5000/logbook/evidence/7"
        );
        assert_eq!(
            dashboard_url("http://localhost:5000"),
            "http://localhost:5000/api/dashboard"
        );
    }
}
