use eframe::egui::{self, Pos2, RichText, Sense, Shape, Stroke, Ui, Vec2};
use egui_plot::{Bar, BarChart, Line, Plot};

use crate::app::DashOxide;
use crate::charts::{
    category_color, ChartGeometry, RenderedChart, SurfaceId, CHART_SPECS, MAGNITUDE_COLOR,
    TREND_COLOR,
};
use crate::constants::layout::CHART_HEIGHT;

/// Render the dashboard view: summary tiles plus one panel per chart
/// surface, each with its prev/next controls and page indicator.
pub fn render_dashboard(app: &mut DashOxide, ui: &mut Ui) {
    profiling::scope!("render_dashboard");

    if !app.state.has_snapshot() {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.heading("No data loaded");
            ui.label("Refresh from the server or open a snapshot JSON to get started");
        });
        return;
    }

    render_stat_tiles(app, ui);
    ui.separator();

    // Navigation clicks are applied after the panels are drawn so the
    // registry is only borrowed one way at a time
    let mut navigate: Option<(SurfaceId, bool)> = None;

    egui::ScrollArea::vertical()
        .id_salt("dashboard_scroll")
        .show(ui, |ui| {
            for spec in &CHART_SPECS {
                let Some(chart) = app.state.charts.get(spec.id) else {
                    // Panel omitted from this layout: silently absent
                    continue;
                };

                ui.group(|ui| {
                    ui.horizontal(|ui| {
                        ui.strong(chart.title);
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                let paged = chart.page_count() > 1;
                                let next = egui::Button::new("⏵");
                                if ui.add_enabled(paged, next).on_hover_text("Next page").clicked()
                                {
                                    navigate = Some((spec.id, true));
                                }
                                ui.monospace(chart.indicator());
                                let prev = egui::Button::new("⏴");
                                if ui
                                    .add_enabled(paged, prev)
                                    .on_hover_text("Previous page")
                                    .clicked()
                                {
                                    navigate = Some((spec.id, false));
                                }
                            },
                        );
                    });
                    ui.separator();

                    if let Some(rendered) = chart.rendered() {
                        if rendered.is_empty() {
                            ui.vertical_centered(|ui| {
                                ui.add_space(CHART_HEIGHT / 2.0 - 10.0);
                                ui.weak("No data to display");
                                ui.add_space(CHART_HEIGHT / 2.0 - 10.0);
                            });
                        } else {
                            match &rendered.geometry {
                                ChartGeometry::Slices(_) => draw_proportion(ui, rendered),
                                ChartGeometry::TrendPoints(_) => {
                                    draw_trend(ui, spec.id.as_str(), rendered)
                                }
                                ChartGeometry::Bars(_) => {
                                    draw_magnitude(ui, spec.id.as_str(), rendered)
                                }
                            }
                        }
                    }
                });
                ui.add_space(8.0);
            }
        });

    if let Some((id, forward)) = navigate {
        if forward {
            app.state.charts.next(id);
        } else {
            app.state.charts.previous(id);
        }
    }
}

/// Aggregate totals derived from the snapshot arrays
fn render_stat_tiles(app: &DashOxide, ui: &mut Ui) {
    let Some(snapshot) = &app.state.snapshot else {
        return;
    };

    let tiles = [
        ("Projects", snapshot.total_projects()),
        ("Entries this month", snapshot.entries_this_month()),
        ("Reports", snapshot.total_reports()),
    ];

    ui.columns(tiles.len(), |columns| {
        for (column, (label, value)) in columns.iter_mut().zip(tiles) {
            column.group(|ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(format!("{:.0}", value)).heading());
                    ui.weak(label);
                });
            });
        }
    });
}

/// Point on the pie rim at `angle` radians clockwise from 12 o'clock
fn rim_point(center: Pos2, radius: f32, angle: f32) -> Pos2 {
    Pos2::new(
        center.x + radius * angle.sin(),
        center.y - radius * angle.cos(),
    )
}

/// Categorical proportion view: a pie tessellated from triangle fans,
/// with a legend entry per category (zero-valued ones included)
fn draw_proportion(ui: &mut Ui, rendered: &RenderedChart) {
    let ChartGeometry::Slices(slices) = &rendered.geometry else {
        return;
    };

    let draw_pie = |ui: &mut Ui| {
        let side = CHART_HEIGHT.min(ui.available_width());
        let (response, painter) = ui.allocate_painter(Vec2::splat(side), Sense::hover());
        let rect = response.rect;
        let center = rect.center();
        let radius = rect.width().min(rect.height()) * 0.5 - 8.0;

        for slice in slices {
            let color = category_color(slice.label_index);
            let samples = RenderedChart::arc_samples(slice.sweep);
            let mut prev = rim_point(center, radius, slice.start);
            for i in 1..=samples {
                let angle = slice.start + slice.sweep * (i as f32 / samples as f32);
                let next = rim_point(center, radius, angle);
                painter.add(Shape::convex_polygon(
                    vec![center, prev, next],
                    color,
                    Stroke::NONE,
                ));
                prev = next;
            }
        }
    };

    let draw_legend = |ui: &mut Ui| {
        for (index, label) in rendered.labels.iter().enumerate() {
            let value = rendered.values.get(index).copied().unwrap_or(0.0);
            ui.horizontal(|ui| {
                ui.label(RichText::new("■").color(category_color(index)));
                ui.label(format!("{}: {:.0}", label, value));
            });
        }
    };

    if rendered.layout.compact {
        ui.vertical(|ui| {
            draw_pie(ui);
            draw_legend(ui);
        });
    } else {
        ui.horizontal(|ui| {
            draw_pie(ui);
            ui.vertical(draw_legend);
        });
    }
}

/// Axis label formatter mapping integer page positions back to the
/// rendered page's labels, thinned by `stride` on narrow surfaces
fn index_label_formatter(
    labels: Vec<String>,
    stride: usize,
) -> impl Fn(egui_plot::GridMark, &std::ops::RangeInclusive<f64>) -> String {
    let stride = stride.max(1);
    move |mark, _range| {
        let nearest = mark.value.round();
        if (mark.value - nearest).abs() > 0.05 || nearest < 0.0 {
            return String::new();
        }
        let index = nearest as usize;
        if index % stride != 0 {
            return String::new();
        }
        labels.get(index).cloned().unwrap_or_default()
    }
}

/// Trend-over-ordered-key view: one connected point per date key
fn draw_trend(ui: &mut Ui, plot_id: &str, rendered: &RenderedChart) {
    let ChartGeometry::TrendPoints(points) = &rendered.geometry else {
        return;
    };
    let points = points.clone();

    Plot::new(plot_id.to_string())
        .height(CHART_HEIGHT)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .include_y(0.0)
        .x_axis_formatter(index_label_formatter(
            rendered.labels.clone(),
            rendered.layout.label_stride,
        ))
        .show(ui, |plot_ui| {
            plot_ui.line(Line::new("Entries", points).color(TREND_COLOR));
        });
}

/// Magnitude comparison view: one bar per category
fn draw_magnitude(ui: &mut Ui, plot_id: &str, rendered: &RenderedChart) {
    let ChartGeometry::Bars(positions) = &rendered.geometry else {
        return;
    };
    let bars: Vec<Bar> = positions
        .iter()
        .map(|&[x, height]| Bar::new(x, height).width(0.6))
        .collect();

    Plot::new(plot_id.to_string())
        .height(CHART_HEIGHT)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .include_y(0.0)
        .x_axis_formatter(index_label_formatter(
            rendered.labels.clone(),
            rendered.layout.label_stride,
        ))
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new("Total", bars).color(MAGNITUDE_COLOR));
        });
}
