//! Logbook table filtering

#![allow(dead_code)]

use chrono::NaiveDate;

use crate::data::LogEntry;

/// Parse a `YYYY-MM-DD` filter input; anything else leaves the bound
/// inactive
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Filter configuration for the logbook table: name substring, sitio
/// equality, inclusive date range. Rows failing the predicate are
/// hidden, not removed.
#[derive(Debug, Clone, Default)]
pub struct LogFilter {
    /// Case-insensitive substring matched against the full name
    pub search_name: String,

    /// Exact sitio match; None shows all sitios
    pub sitio: Option<String>,

    /// Raw `from` date input as typed
    pub from_input: String,

    /// Raw `to` date input as typed
    pub to_input: String,
}

impl LogFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all filters
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Check if any filters are active
    pub fn is_active(&self) -> bool {
        !self.search_name.is_empty()
            || self.sitio.is_some()
            || self.from_date().is_some()
            || self.to_date().is_some()
    }

    pub fn from_date(&self) -> Option<NaiveDate> {
        parse_date(&self.from_input)
    }

    pub fn to_date(&self) -> Option<NaiveDate> {
        parse_date(&self.to_input)
    }

    /// Whether `entry` stays visible under the current filters.
    ///
    /// Date bounds are inclusive and only apply when the entry's own
    /// date parses; an entry with an unreadable date is never hidden
    /// by the range.
    pub fn matches(&self, entry: &LogEntry) -> bool {
        if !self.search_name.is_empty() {
            let name = entry.full_name().to_lowercase();
            if !name.contains(&self.search_name.to_lowercase()) {
                return false;
            }
        }

        if let Some(sitio) = &self.sitio {
            if entry.sitio.trim() != sitio {
                return false;
            }
        }

        if let Some(entry_date) = entry.parsed_date() {
            if let Some(from) = self.from_date() {
                if entry_date < from {
                    return false;
                }
            }
            if let Some(to) = self.to_date() {
                if entry_date > to {
                    return false;
                }
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, sitio: &str, date: &str) -> LogEntry {
        LogEntry {
            first_name: name.to_string(),
            last_name: "Reyes".to_string(),
            sitio: sitio.to_string(),
            date: date.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn name_match_is_case_insensitive_substring() {
        let mut filter = LogFilter::new();
        filter.search_name = "ana".to_string();
        assert!(filter.matches(&entry("Ana", "Centro", "2025-10-01")));
        assert!(filter.matches(&entry("Mariana", "Centro", "2025-10-01")));
        assert!(!filter.matches(&entry("Jose", "Centro", "2025-10-01")));
    }

    #[test]
    fn sitio_filter_requires_exact_match() {
        let mut filter = LogFilter::new();
        filter.sitio = Some("Centro".to_string());
        assert!(filter.matches(&entry("Ana", "Centro", "2025-10-01")));
        assert!(filter.matches(&entry("Ana", " Centro ", "2025-10-01")));
        assert!(!filter.matches(&entry("Ana", "Riverside", "2025-10-01")));
    }

    #[test]
    fn date_bounds_are_inclusive() {
        let mut filter = LogFilter::new();
        filter.from_input = "2025-10-01".to_string();
        filter.to_input = "2025-10-31".to_string();

        assert!(filter.matches(&entry("Ana", "Centro", "2025-10-01")));
        assert!(filter.matches(&entry("Ana", "Centro", "2025-10-31")));
        assert!(!filter.matches(&entry("Ana", "Centro", "2025-09-30")));
        assert!(!filter.matches(&entry("Ana", "Centro", "2025-11-01")));
    }

    #[test]
    fn unparsable_entry_date_is_never_hidden_by_range() {
        let mut filter = LogFilter::new();
        filter.from_input = "2025-10-01".to_string();
        assert!(filter.matches(&entry("Ana", "Centro", "someday")));
    }

    #[test]
    fn unparsable_filter_input_leaves_bound_inactive() {
        let mut filter = LogFilter::new();
        filter.from_input = "next week".to_string();
        assert_eq!(filter.from_date(), None);
        assert!(!filter.is_active());
        assert!(filter.matches(&entry("Ana", "Centro", "2025-10-01")));
    }

    #[test]
    fn clear_resets_everything() {
        let mut filter = LogFilter::new();
        filter.search_name = "ana".to_string();
        filter.sitio = Some("Centro".to_string());
        filter.from_input = "2025-10-01".to_string();
        assert!(filter.is_active());

        filter.clear();
        assert!(!filter.is_active());
    }
}
