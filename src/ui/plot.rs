use std::f64::consts::TAU;

use eframe::egui::{self, Id, RichText, Stroke, Ui};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints, Polygon};

use crate::chart::{Chart, ChartOutcome, ChartRenderer, NamedSeries};
use crate::color::{self, series_colors};

const CHART_HEIGHT: f32 = 360.0;
/// Polygon vertices for a full circle; slices get a share of these.
const PIE_RESOLUTION: f64 = 180.0;

// ---------------------------------------------------------------------------
// Chart outcome (central panel)
// ---------------------------------------------------------------------------

/// Draw the result of the last chart request: a warning, one chart, or two
/// charts next to each other.
pub fn chart_outcome(ui: &mut Ui, outcome: &ChartOutcome) {
    match outcome {
        ChartOutcome::Warning(warning) => {
            ui.label(RichText::new(format!("⚠ {warning}")).color(color::WARNING));
        }
        ChartOutcome::Charts(charts) => match charts.as_slice() {
            [single] => draw_chart(ui, single, Id::new("chart_0")),
            many => {
                ui.columns(many.len(), |columns: &mut [Ui]| {
                    for (i, (column, c)) in columns.iter_mut().zip(many).enumerate() {
                        draw_chart(column, c, Id::new(("chart", i)));
                    }
                });
            }
        },
    }
}

fn draw_chart(ui: &mut Ui, chart: &Chart, id: Id) {
    ui.label(RichText::new(&chart.title).strong().size(18.0));
    let mut renderer = PlotRenderer { ui, id };
    chart.request.render_with(&mut renderer);
}

// ---------------------------------------------------------------------------
// egui_plot renderer
// ---------------------------------------------------------------------------

/// Draws chart requests into an `egui_plot` plot. X is the row index.
pub struct PlotRenderer<'u> {
    ui: &'u mut Ui,
    id: Id,
}

impl ChartRenderer for PlotRenderer<'_> {
    fn render_line(&mut self, series: &[NamedSeries]) {
        let colors = series_colors(series.len());
        Plot::new(self.id)
            .legend(Legend::default())
            .height(CHART_HEIGHT)
            .x_axis_label("Index")
            .y_axis_label("Values")
            .show(self.ui, |plot_ui| {
                for (s, color) in series.iter().zip(colors) {
                    // Same-named items share one legend entry.
                    for run in finite_runs(&s.values) {
                        let points = PlotPoints::from(run);
                        plot_ui.line(Line::new(points).name(&s.label).color(color).width(1.5));
                    }
                }
            });
    }

    fn render_bar(&mut self, series: &[NamedSeries]) {
        let colors = series_colors(series.len());
        let group = series.len().max(1) as f64;
        let width = 0.8 / group;

        Plot::new(self.id)
            .legend(Legend::default())
            .height(CHART_HEIGHT)
            .x_axis_label("Index")
            .y_axis_label("Values")
            .show(self.ui, |plot_ui| {
                for (k, (s, color)) in series.iter().zip(colors).enumerate() {
                    // Centre the group of bars on the row index.
                    let offset = (k as f64 - (group - 1.0) / 2.0) * width;
                    let bars: Vec<Bar> = s
                        .values
                        .iter()
                        .enumerate()
                        .filter(|(_, v)| v.is_finite())
                        .map(|(i, &v)| Bar::new(i as f64 + offset, v).width(width))
                        .collect();
                    plot_ui.bar_chart(BarChart::new(bars).name(&s.label).color(color));
                }
            });
    }

    fn render_pie(&mut self, labels: &[String], values: &[f64]) {
        let total: f64 = values.iter().sum();
        let colors = series_colors(values.len());

        Plot::new(self.id)
            .legend(Legend::default())
            .height(CHART_HEIGHT)
            .data_aspect(1.0)
            .show_axes(false)
            .show_grid(false)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .show(self.ui, |plot_ui| {
                // Counter-clockwise from 3 o'clock.
                let mut start = 0.0_f64;
                for ((label, &value), color) in labels.iter().zip(values).zip(colors) {
                    if value <= 0.0 {
                        continue;
                    }
                    let sweep = value / total * TAU;
                    let steps = (sweep / TAU * PIE_RESOLUTION).ceil().max(2.0) as usize;

                    let mut points = vec![[0.0, 0.0]];
                    points.extend((0..=steps).map(|i| {
                        let angle = start + sweep * i as f64 / steps as f64;
                        [angle.cos(), angle.sin()]
                    }));
                    plot_ui.polygon(
                        Polygon::new(PlotPoints::from(points))
                            .name(label)
                            .fill_color(color)
                            .stroke(Stroke::new(1.0, egui::Color32::WHITE)),
                    );
                    start += sweep;
                }
            });
    }
}

/// Split a series at its non-finite values into `[index, value]` runs, so a
/// missing value leaves a gap instead of being joined across.
fn finite_runs(values: &[f64]) -> Vec<Vec<[f64; 2]>> {
    let mut runs = Vec::new();
    let mut current = Vec::new();
    for (i, &v) in values.iter().enumerate() {
        if v.is_finite() {
            current.push([i as f64, v]);
        } else if !current.is_empty() {
            runs.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}
