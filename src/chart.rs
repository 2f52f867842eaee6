use std::fmt;

use crate::viz::PlanWarning;

// ---------------------------------------------------------------------------
// Chart kinds and requests
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartKind {
    #[default]
    Line,
    Bar,
    Pie,
}

impl ChartKind {
    pub const ALL: [ChartKind; 3] = [ChartKind::Line, ChartKind::Bar, ChartKind::Pie];

    pub fn label(self) -> &'static str {
        match self {
            ChartKind::Line => "Line Chart",
            ChartKind::Bar => "Bar Chart",
            ChartKind::Pie => "Pie Chart",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One plotted series; `NaN` marks a missing value.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedSeries {
    pub label: String,
    pub values: Vec<f64>,
}

impl NamedSeries {
    pub fn new(label: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            values,
        }
    }
}

/// What to draw and in which mode.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartRequest {
    Line(Vec<NamedSeries>),
    Bar(Vec<NamedSeries>),
    Pie { labels: Vec<String>, values: Vec<f64> },
}

impl ChartRequest {
    pub fn kind(&self) -> ChartKind {
        match self {
            ChartRequest::Line(_) => ChartKind::Line,
            ChartRequest::Bar(_) => ChartKind::Bar,
            ChartRequest::Pie { .. } => ChartKind::Pie,
        }
    }

    /// Hand the request to `renderer` in the matching mode.
    pub fn render_with<R: ChartRenderer + ?Sized>(&self, renderer: &mut R) {
        match self {
            ChartRequest::Line(series) => renderer.render_line(series),
            ChartRequest::Bar(series) => renderer.render_bar(series),
            ChartRequest::Pie { labels, values } => renderer.render_pie(labels, values),
        }
    }
}

/// Drawing backend. Only ever sees finished series, never tables.
pub trait ChartRenderer {
    fn render_line(&mut self, series: &[NamedSeries]);
    fn render_bar(&mut self, series: &[NamedSeries]);
    fn render_pie(&mut self, labels: &[String], values: &[f64]);
}

#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub title: String,
    pub request: ChartRequest,
}

/// Result of pressing a "show"/"compare" button.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartOutcome {
    Warning(PlanWarning),
    Charts(Vec<Chart>),
}

impl From<Result<Vec<Chart>, PlanWarning>> for ChartOutcome {
    fn from(planned: Result<Vec<Chart>, PlanWarning>) -> Self {
        match planned {
            Ok(charts) => {
                for chart in &charts {
                    log::debug!("planned {} '{}'", chart.request.kind(), chart.title);
                }
                ChartOutcome::Charts(charts)
            }
            Err(warning) => {
                log::warn!("chart not drawn: {warning}");
                ChartOutcome::Warning(warning)
            }
        }
    }
}
