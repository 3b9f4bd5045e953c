//! Paginated dashboard charts
//!
//! One generic component replaces the three near-identical chart
//! scripts the server used to drive: a chart is a surface id, a kind,
//! a paginator over extracted (label, value) points, and at most one
//! live rendered handle. The static table below is the only per-chart
//! configuration; everything else is shared.

mod paginator;
mod registry;
mod rendered;

pub use paginator::Paginator;
pub use registry::{ChartRegistry, ChartState};
pub use rendered::{ChartGeometry, ChartLayout, PieSlice, RenderedChart};

use egui::Color32;

use crate::constants::charts::{MAGNITUDE_PAGE_SIZE, PROPORTION_PAGE_SIZE, TREND_PAGE_SIZE};
use crate::data::{self, DashboardSnapshot, DataPoint};

/// Visual encoding of a chart surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// One slice per category (pie)
    Proportion,
    /// One connected point per ordered date key (line)
    Trend,
    /// One bar per category (bar)
    Magnitude,
}

impl ChartKind {
    /// Fixed items-per-page for this kind
    pub fn page_size(self) -> usize {
        match self {
            ChartKind::Proportion => PROPORTION_PAGE_SIZE,
            ChartKind::Trend => TREND_PAGE_SIZE,
            ChartKind::Magnitude => MAGNITUDE_PAGE_SIZE,
        }
    }
}

/// Identifier of a chart drawing surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SurfaceId {
    ProjectChart,
    LogbookChart,
    ReportChart,
}

impl SurfaceId {
    pub fn as_str(self) -> &'static str {
        match self {
            SurfaceId::ProjectChart => "project-chart",
            SurfaceId::LogbookChart => "logbook-chart",
            SurfaceId::ReportChart => "report-chart",
        }
    }
}

/// Per-chart configuration: surface, kind, title, and how to pull its
/// points out of the snapshot
pub struct ChartSpec {
    pub id: SurfaceId,
    pub kind: ChartKind,
    pub title: &'static str,
    pub extract: fn(&DashboardSnapshot) -> Vec<DataPoint>,
}

fn project_points(snapshot: &DashboardSnapshot) -> Vec<DataPoint> {
    data::stat_points(&snapshot.projects)
}

fn logbook_points(snapshot: &DashboardSnapshot) -> Vec<DataPoint> {
    data::trend_points(&snapshot.logbook_daily)
}

fn report_points(snapshot: &DashboardSnapshot) -> Vec<DataPoint> {
    data::stat_points(&snapshot.reports)
}

/// The dashboard's chart surfaces, in display order
pub const CHART_SPECS: [ChartSpec; 3] = [
    ChartSpec {
        id: SurfaceId::ProjectChart,
        kind: ChartKind::Proportion,
        title: "Projects by Status",
        extract: project_points,
    },
    ChartSpec {
        id: SurfaceId::LogbookChart,
        kind: ChartKind::Trend,
        title: "Logbook Entries This Month",
        extract: logbook_points,
    },
    ChartSpec {
        id: SurfaceId::ReportChart,
        kind: ChartKind::Magnitude,
        title: "Reports by Type",
        extract: report_points,
    },
];

/// Category color cycle shared by slices and legend swatches
pub fn category_color(index: usize) -> Color32 {
    const COLORS: [Color32; 5] = [
        Color32::from_rgb(0x00, 0x7b, 0xff), // blue
        Color32::from_rgb(0x28, 0xa7, 0x45), // green
        Color32::from_rgb(0xff, 0xc1, 0x07), // amber
        Color32::from_rgb(0xdc, 0x35, 0x45), // red
        Color32::from_rgb(0xff, 0x8a, 0x00), // orange
    ];
    COLORS[index % COLORS.len()]
}

/// Trend line color
pub const TREND_COLOR: Color32 = Color32::from_rgb(0x00, 0x7b, 0xff);

/// Magnitude bar color
pub const MAGNITUDE_COLOR: Color32 = Color32::from_rgb(0x17, 0xa2, 0xb8);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{StatRecord, TrendRecord};

    #[test]
    fn page_sizes_match_kind() {
        assert_eq!(ChartKind::Proportion.page_size(), 6);
        assert_eq!(ChartKind::Trend.page_size(), 10);
        assert_eq!(ChartKind::Magnitude.page_size(), 6);
    }

    fn spec_for(id: SurfaceId) -> &'static ChartSpec {
        CHART_SPECS.iter().find(|spec| spec.id == id).unwrap()
    }

    #[test]
    fn specs_cover_all_surfaces() {
        for id in [
            SurfaceId::ProjectChart,
            SurfaceId::LogbookChart,
            SurfaceId::ReportChart,
        ] {
            assert_eq!(spec_for(id).id, id);
        }
    }

    #[test]
    fn extraction_pulls_the_right_array() {
        let snapshot = DashboardSnapshot {
            projects: vec![StatRecord {
                status: Some("Ongoing".to_string()),
                count: 3.0,
                ..Default::default()
            }],
            logbook_daily: vec![TrendRecord {
                log_date: "2025-10-01".to_string(),
                count: 1.0,
            }],
            reports: Vec::new(),
            ..Default::default()
        };

        let projects = (spec_for(SurfaceId::ProjectChart).extract)(&snapshot);
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].label, "Ongoing");

        let trend = (spec_for(SurfaceId::LogbookChart).extract)(&snapshot);
        assert_eq!(trend[0].label, "2025-10-01");

        assert!((spec_for(SurfaceId::ReportChart).extract)(&snapshot).is_empty());
    }
}
