//! Dashboard data model
//!
//! Record shapes mirror what the hosting server aggregates for the
//! dashboard: projects grouped by status, logbook entries per day for
//! the current month, reports grouped by type, plus the raw logbook
//! rows and the known sitio list. Records are read-only once captured.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use std::path::Path;

use crate::error::Result;

/// A single (label, value) pair fed to the chart paginator
#[derive(Debug, Clone, PartialEq)]
pub struct DataPoint {
    pub label: String,
    pub value: f64,
}

impl DataPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Fallback category label when a record carries neither status nor type
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Deserialize a count that may be missing, null, a number, or a
/// numeric string. Anything unusable is coerced to 0 rather than
/// rejected.
fn de_count<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum CountValue {
        Number(f64),
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    let raw = Option::<CountValue>::deserialize(deserializer)?;
    Ok(match raw {
        Some(CountValue::Number(n)) if n.is_finite() => n,
        Some(CountValue::Text(s)) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    })
}

/// A grouped aggregate row: projects by status or reports by type
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatRecord {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "de_count")]
    pub count: f64,
}

impl StatRecord {
    /// Category label: status, else type, else "Unknown". Empty strings
    /// fall through like absent fields.
    pub fn label(&self) -> &str {
        non_empty(&self.status)
            .or_else(|| non_empty(&self.kind))
            .unwrap_or(UNKNOWN_LABEL)
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// A per-day aggregate row for the trend chart
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrendRecord {
    #[serde(default)]
    pub log_date: String,
    #[serde(default, deserialize_with = "de_count")]
    pub count: f64,
}

impl TrendRecord {
    /// Parse the `YYYY-MM-DD` date key
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.log_date, "%Y-%m-%d").ok()
    }
}

/// A raw logbook row as stored by the server
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogEntry {
    pub id: i64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub middle_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub sitio: String,
    #[serde(default)]
    pub time_in: String,
    #[serde(default)]
    pub time_out: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub concern: String,
}

impl LogEntry {
    /// Full name as shown in the table's name column
    pub fn full_name(&self) -> String {
        [
            self.first_name.as_str(),
            self.middle_name.as_str(),
            self.last_name.as_str(),
        ]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
    }

    /// Parse the entry date when it is a well-formed `YYYY-MM-DD` string
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }
}

/// The full read-only payload supplied by the hosting server at load time
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DashboardSnapshot {
    /// Projects grouped by status
    #[serde(default, rename = "project_data")]
    pub projects: Vec<StatRecord>,

    /// Logbook entries per day for the current month
    #[serde(default, rename = "logbook_data")]
    pub logbook_daily: Vec<TrendRecord>,

    /// Reports grouped by type
    #[serde(default, rename = "report_data")]
    pub reports: Vec<StatRecord>,

    /// Raw logbook rows for the table view
    #[serde(default)]
    pub entries: Vec<LogEntry>,

    /// Known sitio names for the location filter
    #[serde(default)]
    pub sitios: Vec<String>,
}

impl DashboardSnapshot {
    /// Load a snapshot from a local JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse a snapshot from its JSON wire form
    pub fn parse(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Sum of project counts across all statuses
    pub fn total_projects(&self) -> f64 {
        self.projects.iter().map(|r| r.count).sum()
    }

    /// Sum of report counts across all types
    pub fn total_reports(&self) -> f64 {
        self.reports.iter().map(|r| r.count).sum()
    }

    /// Sum of logbook entries over the charted month
    pub fn entries_this_month(&self) -> f64 {
        self.logbook_daily.iter().map(|r| r.count).sum()
    }
}

/// Map grouped aggregates to chart points, preserving input order
pub fn stat_points(records: &[StatRecord]) -> Vec<DataPoint> {
    records
        .iter()
        .map(|r| DataPoint::new(r.label(), r.count))
        .collect()
}

/// Map per-day aggregates to chart points, sorted ascending by date.
/// Unparsable date keys sort before all valid ones so they stay visible
/// rather than vanishing.
pub fn trend_points(records: &[TrendRecord]) -> Vec<DataPoint> {
    let mut sorted: Vec<&TrendRecord> = records.iter().collect();
    sorted.sort_by_key(|r| r.parsed_date());
    sorted
        .into_iter()
        .map(|r| DataPoint::new(r.log_date.clone(), r.count))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn stat_label_falls_back_to_type_then_unknown() {
        let by_status: StatRecord =
            serde_json::from_str(r#"{"status": "Ongoing", "count": 4}"#).unwrap();
        assert_eq!(by_status.label(), "Ongoing");

        let by_type: StatRecord =
            serde_json::from_str(r#"{"type": "Incident", "count": 2}"#).unwrap();
        assert_eq!(by_type.label(), "Incident");

        let neither: StatRecord = serde_json::from_str(r#"{"count": 1}"#).unwrap();
        assert_eq!(neither.label(), "Unknown");

        // Empty strings behave like absent fields
        let empty: StatRecord =
            serde_json::from_str(r#"{"status": "", "type": "Blotter"}"#).unwrap();
        assert_eq!(empty.label(), "Blotter");
    }

    #[test]
    fn count_coercion_defaults_to_zero() {
        let missing: StatRecord = serde_json::from_str(r#"{"status": "open"}"#).unwrap();
        assert_eq!(missing.count, 0.0);

        let null: StatRecord =
            serde_json::from_str(r#"{"status": "open", "count": null}"#).unwrap();
        assert_eq!(null.count, 0.0);

        let text: StatRecord =
            serde_json::from_str(r#"{"status": "open", "count": "7"}"#).unwrap();
        assert_eq!(text.count, 7.0);

        let garbage: StatRecord =
            serde_json::from_str(r#"{"status": "open", "count": "n/a"}"#).unwrap();
        assert_eq!(garbage.count, 0.0);

        let object: StatRecord =
            serde_json::from_str(r#"{"status": "open", "count": {"value": 3}}"#).unwrap();
        assert_eq!(object.count, 0.0);
    }

    #[test]
    fn trend_points_sort_ascending_by_date() {
        let records = vec![
            TrendRecord {
                log_date: "2025-11-02".to_string(),
                count: 3.0,
            },
            TrendRecord {
                log_date: "2025-10-31".to_string(),
                count: 2.0,
            },
        ];
        let points = trend_points(&records);
        assert_eq!(points[0].label, "2025-10-31");
        assert_eq!(points[1].label, "2025-11-02");
        assert_eq!(points[0].value, 2.0);
    }

    #[test]
    fn full_name_skips_missing_middle_name() {
        let entry = LogEntry {
            first_name: "Juan".to_string(),
            last_name: "Dela Cruz".to_string(),
            ..Default::default()
        };
        assert_eq!(entry.full_name(), "Juan Dela Cruz");
    }

    #[test]
    fn snapshot_parses_server_field_names() {
        let json = r#"{
            "project_data": [{"status": "Completed", "count": 5}],
            "logbook_data": [{"log_date": "2025-10-01", "count": 2}],
            "report_data": [{"type": "Blotter", "count": 1}],
            "entries": [{"id": 1, "first_name": "Ana", "last_name": "Reyes",
                         "sitio": "Centro", "date": "2025-10-01"}],
            "sitios": ["Centro", "Riverside"]
        }"#;
        let snapshot = DashboardSnapshot::parse(json).unwrap();
        assert_eq!(snapshot.projects.len(), 1);
        assert_eq!(snapshot.logbook_daily.len(), 1);
        assert_eq!(snapshot.reports.len(), 1);
        assert_eq!(snapshot.entries[0].full_name(), "Ana Reyes");
        assert_eq!(snapshot.total_projects(), 5.0);
        assert_eq!(snapshot.entries_this_month(), 2.0);
    }

    #[test]
    fn snapshot_tolerates_missing_arrays() {
        let snapshot = DashboardSnapshot::parse("{}").unwrap();
        assert!(snapshot.projects.is_empty());
        assert!(snapshot.entries.is_empty());
        assert_eq!(snapshot.total_reports(), 0.0);
    }

    #[test]
    fn snapshot_loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"project_data": [{{"status": "Ongoing", "count": 2}}]}}"#
        )
        .unwrap();
        let snapshot = DashboardSnapshot::load(file.path()).unwrap();
        assert_eq!(snapshot.projects[0].label(), "Ongoing");
        assert_eq!(snapshot.projects[0].count, 2.0);
    }
}
