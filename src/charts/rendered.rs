//! Prepared chart geometry
//!
//! A `RenderedChart` is the opaque handle behind one chart surface:
//! the geometry derived from the current page, ready for the painter
//! or egui_plot to draw each frame. A surface owns at most one live
//! handle; building a replacement only happens after the previous one
//! has been released.

use std::f32::consts::TAU;

use crate::constants::charts::PIE_ARC_STEP_DEG;
use crate::constants::layout::COMPACT_BREAKPOINT;
use crate::data::DataPoint;

use super::ChartKind;

/// One pie wedge, angles in radians measured clockwise from 12 o'clock
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieSlice {
    pub start: f32,
    pub sweep: f32,
    /// Share of the page total, in [0, 1]
    pub fraction: f32,
    /// Index into the rendered labels (drives the color cycle)
    pub label_index: usize,
}

/// Kind-specific drawable geometry for one page
#[derive(Debug, Clone, PartialEq)]
pub enum ChartGeometry {
    /// Wedges for the categorical proportion view; zero-valued
    /// categories keep their legend entry but get no wedge
    Slices(Vec<PieSlice>),
    /// (position, value) points for the trend view, connected in order
    TrendPoints(Vec<[f64; 2]>),
    /// (position, height) bars for the magnitude view
    Bars(Vec<[f64; 2]>),
}

/// Layout hints re-derived from the surface size on the debounced
/// resize pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartLayout {
    /// Narrow surface: elide long labels, tuck the legend under the pie
    pub compact: bool,
    /// Draw every n-th axis label on dense trend pages
    pub label_stride: usize,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            compact: false,
            label_stride: 1,
        }
    }
}

impl ChartLayout {
    /// Derive hints from the available surface size
    pub fn from_size(size: (f32, f32)) -> Self {
        let (width, _height) = size;
        Self {
            compact: width < COMPACT_BREAKPOINT,
            label_stride: if width < COMPACT_BREAKPOINT / 2.0 { 2 } else { 1 },
        }
    }
}

/// The live rendering of one page of one chart surface
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedChart {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub geometry: ChartGeometry,
    pub layout: ChartLayout,
}

impl RenderedChart {
    /// Build the drawable geometry for `page` under `kind`
    pub fn build(kind: ChartKind, page: &[DataPoint], layout: ChartLayout) -> Self {
        let labels: Vec<String> = page.iter().map(|p| p.label.clone()).collect();
        let values: Vec<f64> = page.iter().map(|p| p.value).collect();

        let geometry = match kind {
            ChartKind::Proportion => ChartGeometry::Slices(slice_angles(&values)),
            ChartKind::Trend => ChartGeometry::TrendPoints(position_series(&values)),
            ChartKind::Magnitude => ChartGeometry::Bars(position_series(&values)),
        };

        Self {
            labels,
            values,
            geometry,
            layout,
        }
    }

    /// True when the page carries nothing to draw
    pub fn is_empty(&self) -> bool {
        match &self.geometry {
            ChartGeometry::Slices(slices) => slices.is_empty(),
            ChartGeometry::TrendPoints(points) => points.is_empty(),
            ChartGeometry::Bars(bars) => bars.is_empty(),
        }
    }

    /// Re-derive layout hints for a new surface size; geometry is
    /// unchanged, only presentation adjusts
    pub fn relayout(&mut self, size: (f32, f32)) {
        self.layout = ChartLayout::from_size(size);
    }

    /// Arc sample count for a wedge, at roughly `PIE_ARC_STEP_DEG`
    /// degrees per segment and never fewer than two samples
    pub fn arc_samples(sweep: f32) -> usize {
        let step = PIE_ARC_STEP_DEG.to_radians();
        ((sweep / step).ceil() as usize).max(2)
    }
}

/// Pair each value with its position index, giving the plot x axis
fn position_series(values: &[f64]) -> Vec<[f64; 2]> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| [i as f64, v])
        .collect()
}

/// Wedge angles for one pie page, clockwise from 12 o'clock. A page
/// whose values sum to zero draws nothing; zero-valued entries among a
/// nonzero total are skipped (their legend entry remains).
fn slice_angles(values: &[f64]) -> Vec<PieSlice> {
    let total: f64 = values.iter().filter(|v| v.is_finite() && **v > 0.0).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut slices = Vec::new();
    let mut cursor = 0.0_f32;
    for (index, &value) in values.iter().enumerate() {
        if !value.is_finite() || value <= 0.0 {
            continue;
        }
        let fraction = (value / total) as f32;
        let sweep = fraction * TAU;
        slices.push(PieSlice {
            start: cursor,
            sweep,
            fraction,
            label_index: index,
        });
        cursor += sweep;
    }
    slices
}
