//! Owned chart collection
//!
//! The registry owns one `ChartState` per surface present in the
//! layout, keyed by surface id. It replaces the page-global mutable
//! map of live chart handles: constructed at initialization, rebuilt
//! wholesale when the snapshot changes, dropped at teardown.
//! Operations on an absent surface are silent no-ops so a layout that
//! omits a panel never crashes the dashboard.

use std::collections::BTreeMap;

use tracing::debug;

use crate::data::{DashboardSnapshot, DataPoint};

use super::rendered::{ChartLayout, RenderedChart};
use super::{ChartKind, Paginator, SurfaceId, CHART_SPECS};

/// One chart surface: its paginator plus the single live rendered
/// handle
pub struct ChartState {
    pub kind: ChartKind,
    pub title: &'static str,
    paginator: Paginator,
    layout: ChartLayout,
    rendered: Option<RenderedChart>,
}

impl ChartState {
    fn initialize(
        source: Vec<DataPoint>,
        page_size: usize,
        kind: ChartKind,
        title: &'static str,
        layout: ChartLayout,
    ) -> Self {
        let mut state = Self {
            kind,
            title,
            paginator: Paginator::new(source, page_size),
            layout,
            rendered: None,
        };
        state.render();
        state
    }

    /// Build the rendering for the current page. The previous handle
    /// for this surface is released before its replacement exists.
    fn render(&mut self) {
        self.rendered = None;
        self.rendered = Some(RenderedChart::build(
            self.kind,
            self.paginator.current_page(),
            self.layout,
        ));
    }

    /// Advance one page; re-renders only when the index changed
    pub fn next(&mut self) {
        if self.paginator.next() {
            self.render();
        }
    }

    /// Step back one page; re-renders only when the index changed
    pub fn previous(&mut self) {
        if self.paginator.previous() {
            self.render();
        }
    }

    pub fn indicator(&self) -> String {
        self.paginator.indicator()
    }

    pub fn page_count(&self) -> usize {
        self.paginator.page_count()
    }

    pub fn rendered(&self) -> Option<&RenderedChart> {
        self.rendered.as_ref()
    }

    fn relayout(&mut self, size: (f32, f32)) {
        self.layout = ChartLayout::from_size(size);
        if let Some(rendered) = &mut self.rendered {
            rendered.relayout(size);
        }
    }
}

/// All chart surfaces of the dashboard, keyed by surface id
#[derive(Default)]
pub struct ChartRegistry {
    charts: BTreeMap<SurfaceId, ChartState>,
}

impl ChartRegistry {
    /// Build charts for every configured surface present in `enabled`,
    /// extracting each surface's points from the snapshot. Surfaces
    /// missing from the layout are skipped silently.
    pub fn initialize(
        snapshot: &DashboardSnapshot,
        enabled: &[SurfaceId],
        surface_size: (f32, f32),
    ) -> Self {
        let layout = ChartLayout::from_size(surface_size);
        let mut charts = BTreeMap::new();

        for spec in &CHART_SPECS {
            if !enabled.contains(&spec.id) {
                debug!(surface = spec.id.as_str(), "chart surface absent, skipping");
                continue;
            }
            let source = (spec.extract)(snapshot);
            charts.insert(
                spec.id,
                ChartState::initialize(source, spec.kind.page_size(), spec.kind, spec.title, layout),
            );
        }

        Self { charts }
    }

    pub fn get(&self, id: SurfaceId) -> Option<&ChartState> {
        self.charts.get(&id)
    }

    /// Advance a surface one page; absent surface is a no-op
    pub fn next(&mut self, id: SurfaceId) {
        if let Some(chart) = self.charts.get_mut(&id) {
            chart.next();
        }
    }

    /// Step a surface back one page; absent surface is a no-op
    pub fn previous(&mut self, id: SurfaceId) {
        if let Some(chart) = self.charts.get_mut(&id) {
            chart.previous();
        }
    }

    /// Layout-adjustment pass over all live rendered handles, run once
    /// per debounced resize burst
    pub fn relayout_all(&mut self, size: (f32, f32)) {
        profiling::scope!("charts_relayout");
        for chart in self.charts.values_mut() {
            chart.relayout(size);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.charts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::ChartGeometry;
    use crate::data::{StatRecord, TrendRecord};

    const ALL_SURFACES: [SurfaceId; 3] = [
        SurfaceId::ProjectChart,
        SurfaceId::LogbookChart,
        SurfaceId::ReportChart,
    ];

    fn snapshot_with_projects(n: usize) -> DashboardSnapshot {
        DashboardSnapshot {
            projects: (0..n)
                .map(|i| StatRecord {
                    status: Some(format!("status-{}", i)),
                    count: (i + 1) as f64,
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn initializes_one_chart_per_enabled_surface() {
        let registry =
            ChartRegistry::initialize(&snapshot_with_projects(3), &ALL_SURFACES, (1024.0, 768.0));
        assert_eq!(registry.len(), 3);
        for id in ALL_SURFACES {
            assert!(registry.get(id).unwrap().rendered().is_some());
        }
    }

    #[test]
    fn missing_surface_is_silently_absent() {
        let mut registry = ChartRegistry::initialize(
            &snapshot_with_projects(3),
            &[SurfaceId::ProjectChart],
            (1024.0, 768.0),
        );
        assert!(registry.get(SurfaceId::ReportChart).is_none());

        // Navigation on an absent surface must not panic
        registry.next(SurfaceId::ReportChart);
        registry.previous(SurfaceId::LogbookChart);
    }

    #[test]
    fn empty_array_still_reports_one_page() {
        let registry =
            ChartRegistry::initialize(&DashboardSnapshot::default(), &ALL_SURFACES, (1024.0, 768.0));
        let chart = registry.get(SurfaceId::ProjectChart).unwrap();
        assert_eq!(chart.indicator(), "1 / 1");
        assert!(chart.rendered().unwrap().is_empty());
    }

    #[test]
    fn navigation_clamps_and_rerenders() {
        let mut registry =
            ChartRegistry::initialize(&snapshot_with_projects(14), &ALL_SURFACES, (1024.0, 768.0));

        registry.next(SurfaceId::ProjectChart);
        registry.next(SurfaceId::ProjectChart);
        registry.next(SurfaceId::ProjectChart); // clamped
        registry.previous(SurfaceId::ProjectChart);

        let chart = registry.get(SurfaceId::ProjectChart).unwrap();
        assert_eq!(chart.indicator(), "2 / 3");
        // The rendered page is the middle chunk of six
        assert_eq!(chart.rendered().unwrap().labels.len(), 6);
        assert_eq!(chart.rendered().unwrap().labels[0], "status-6");
    }

    #[test]
    fn trend_chart_pages_sorted_dates() {
        let snapshot = DashboardSnapshot {
            logbook_daily: vec![
                TrendRecord {
                    log_date: "2025-11-02".to_string(),
                    count: 3.0,
                },
                TrendRecord {
                    log_date: "2025-10-31".to_string(),
                    count: 2.0,
                },
            ],
            ..Default::default()
        };
        let registry = ChartRegistry::initialize(&snapshot, &ALL_SURFACES, (1024.0, 768.0));
        let rendered = registry
            .get(SurfaceId::LogbookChart)
            .unwrap()
            .rendered()
            .unwrap();
        assert_eq!(rendered.labels, vec!["2025-10-31", "2025-11-02"]);
        assert!(matches!(rendered.geometry, ChartGeometry::TrendPoints(_)));
    }

    #[test]
    fn relayout_updates_live_handles() {
        let mut registry =
            ChartRegistry::initialize(&snapshot_with_projects(3), &ALL_SURFACES, (1200.0, 700.0));
        registry.relayout_all((480.0, 700.0));
        let rendered = registry
            .get(SurfaceId::ProjectChart)
            .unwrap()
            .rendered()
            .unwrap();
        assert!(rendered.layout.compact);
    }
}
