//! Turns column picks into chart requests.
//!
//! Every function here is pure: it reads tables and selections and returns a
//! [`ChartOutcome`]. Nothing is drawn and nothing is cached.

use thiserror::Error;

use crate::chart::{Chart, ChartKind, ChartOutcome, ChartRequest, NamedSeries};
use crate::data::align::align;
use crate::data::model::{Table, Value};
use crate::data::select::{select, select_single, ColumnSelection, UnknownColumn};

pub const COMPARISON_TITLE: &str = "Dynamic Comparison of Datasets";

/// Why a button press produced a message instead of a chart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanWarning {
    #[error("Please select at least one column.")]
    EmptySelection,
    #[error("Select one column from each dataset to compare.")]
    MissingComparisonColumn,
    #[error("Upload both CSV files to compare them.")]
    MissingUpload,
    #[error("A pie chart needs two columns: the first gives the labels, the second the slice sizes.")]
    PieNeedsTwoColumns,
    #[error("Column '{0}' contains text and cannot be plotted as a line or bar chart.")]
    NotNumeric(String),
    #[error("Column '{0}' has text or negative values and cannot size pie slices.")]
    InvalidPieValues(String),
    #[error("Column '{0}' has nothing to draw: every slice would be empty.")]
    EmptyPie(String),
    #[error(transparent)]
    UnknownColumn(#[from] UnknownColumn),
}

// ---------------------------------------------------------------------------
// Static visualization (remote dataset)
// ---------------------------------------------------------------------------

/// Chart the picked columns of one table.
///
/// Line and bar draw one series per column in pick order. Pie takes the
/// first pick as labels and the second as slice sizes; further picks are
/// ignored.
pub fn plan_static(table: &Table, selection: &ColumnSelection, kind: ChartKind) -> ChartOutcome {
    let planned = static_request(table, selection, kind).map(|request| {
        vec![Chart {
            title: format!("Static Visualization for {}", selection.names().join(", ")),
            request,
        }]
    });
    planned.into()
}

fn static_request(
    table: &Table,
    selection: &ColumnSelection,
    kind: ChartKind,
) -> Result<ChartRequest, PlanWarning> {
    if selection.is_empty() {
        return Err(PlanWarning::EmptySelection);
    }
    let view = select(table, selection.names())?;

    match kind {
        ChartKind::Line | ChartKind::Bar => {
            let series = view
                .columns()
                .iter()
                .map(|c| numeric_series(&c.name, &c.values))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(series_request(kind, series))
        }
        ChartKind::Pie => {
            let [labels, sizes, ..] = view.columns() else {
                return Err(PlanWarning::PieNeedsTwoColumns);
            };
            pie_request(&labels.values, &sizes.name, &sizes.values)
        }
    }
}

// ---------------------------------------------------------------------------
// Dynamic visualization (two uploads)
// ---------------------------------------------------------------------------

/// Compare one column of each table over their aligned prefix.
///
/// For pie charts `column_a` supplies the labels and `column_b` the slice
/// sizes. The roles are not interchangeable.
pub fn plan_comparison(
    table_a: &Table,
    column_a: Option<&str>,
    table_b: &Table,
    column_b: Option<&str>,
    kind: ChartKind,
) -> ChartOutcome {
    let planned = comparison_request(table_a, column_a, table_b, column_b, kind).map(|request| {
        vec![Chart {
            title: COMPARISON_TITLE.to_string(),
            request,
        }]
    });
    planned.into()
}

fn comparison_request(
    table_a: &Table,
    column_a: Option<&str>,
    table_b: &Table,
    column_b: Option<&str>,
    kind: ChartKind,
) -> Result<ChartRequest, PlanWarning> {
    let (Some(column_a), Some(column_b)) = (column_a, column_b) else {
        return Err(PlanWarning::MissingComparisonColumn);
    };
    let (a, b) = align(
        select_single(table_a, column_a)?,
        select_single(table_b, column_b)?,
    );

    match kind {
        ChartKind::Line | ChartKind::Bar => {
            let (label_a, label_b) = comparison_labels(column_a, column_b);
            let series = vec![numeric_series(&label_a, a)?, numeric_series(&label_b, b)?];
            Ok(series_request(kind, series))
        }
        ChartKind::Pie => pie_request(a, column_b, b),
    }
}

/// Plot each table's picks in its own line chart, at full length.
pub fn plan_side_by_side(
    table_a: &Table,
    selection_a: &ColumnSelection,
    table_b: &Table,
    selection_b: &ColumnSelection,
) -> ChartOutcome {
    side_by_side_charts(table_a, selection_a, table_b, selection_b).into()
}

fn side_by_side_charts(
    table_a: &Table,
    selection_a: &ColumnSelection,
    table_b: &Table,
    selection_b: &ColumnSelection,
) -> Result<Vec<Chart>, PlanWarning> {
    if selection_a.is_empty() && selection_b.is_empty() {
        return Err(PlanWarning::EmptySelection);
    }
    Ok(vec![
        Chart {
            title: "Dataset 1".to_string(),
            request: ChartRequest::Line(line_series(table_a, selection_a)?),
        },
        Chart {
            title: "Dataset 2".to_string(),
            request: ChartRequest::Line(line_series(table_b, selection_b)?),
        },
    ])
}

fn line_series(table: &Table, selection: &ColumnSelection) -> Result<Vec<NamedSeries>, PlanWarning> {
    select(table, selection.names())?
        .columns()
        .iter()
        .map(|c| numeric_series(&c.name, &c.values))
        .collect()
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn series_request(kind: ChartKind, series: Vec<NamedSeries>) -> ChartRequest {
    match kind {
        ChartKind::Bar => ChartRequest::Bar(series),
        _ => ChartRequest::Line(series),
    }
}

/// Same column name on both sides would collapse into one legend entry.
fn comparison_labels(column_a: &str, column_b: &str) -> (String, String) {
    if column_a == column_b {
        (
            format!("{column_a} (dataset 1)"),
            format!("{column_b} (dataset 2)"),
        )
    } else {
        (column_a.to_string(), column_b.to_string())
    }
}

/// Nulls become `NaN` gaps; any text value rejects the column.
fn numeric_series(label: &str, values: &[Value]) -> Result<NamedSeries, PlanWarning> {
    let values = values
        .iter()
        .map(|v| match v {
            Value::Null => Ok(f64::NAN),
            Value::Text(_) => Err(PlanWarning::NotNumeric(label.to_string())),
            other => Ok(other.as_f64().unwrap_or(f64::NAN)),
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(NamedSeries::new(label, values))
}

/// Labels come from `labels`' display text, sizes from `sizes`. Rows with a
/// null size are skipped together with their label.
fn pie_request(
    labels: &[Value],
    sizes_name: &str,
    sizes: &[Value],
) -> Result<ChartRequest, PlanWarning> {
    let mut slice_labels = Vec::new();
    let mut slice_values = Vec::new();

    for (label, size) in labels.iter().zip(sizes) {
        if size.is_null() {
            continue;
        }
        let value = match size.as_f64() {
            Some(v) if v.is_finite() && v >= 0.0 => v,
            _ => return Err(PlanWarning::InvalidPieValues(sizes_name.to_string())),
        };
        slice_labels.push(label.to_string());
        slice_values.push(value);
    }

    if slice_values.iter().sum::<f64>() <= 0.0 {
        return Err(PlanWarning::EmptyPie(sizes_name.to_string()));
    }
    log::debug!("pie over '{sizes_name}' with {} slices", slice_values.len());
    Ok(ChartRequest::Pie {
        labels: slice_labels,
        values: slice_values,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::load_uploaded;

    fn energy_a() -> Table {
        let mut csv = String::from("month,kwh,region\n");
        for i in 0..10 {
            csv.push_str(&format!("m{i},{},north\n", i * 10));
        }
        load_uploaded(csv.as_bytes()).unwrap()
    }

    fn energy_b() -> Table {
        let mut csv = String::from("month,kwh,solar\n");
        for i in 0..7 {
            csv.push_str(&format!("m{i},{},{}.5\n", 100 + i, i));
        }
        load_uploaded(csv.as_bytes()).unwrap()
    }

    fn single_chart(outcome: ChartOutcome) -> Chart {
        match outcome {
            ChartOutcome::Charts(mut charts) if charts.len() == 1 => charts.remove(0),
            other => panic!("expected one chart, got {other:?}"),
        }
    }

    #[test]
    fn static_with_no_columns_warns() {
        let outcome = plan_static(&energy_a(), &ColumnSelection::default(), ChartKind::Line);
        assert_eq!(outcome, ChartOutcome::Warning(PlanWarning::EmptySelection));
    }

    #[test]
    fn static_line_keeps_pick_order_and_title() {
        let table = energy_b();
        let selection: ColumnSelection = ["solar", "kwh"].into_iter().collect();
        let chart = single_chart(plan_static(&table, &selection, ChartKind::Line));

        assert_eq!(chart.title, "Static Visualization for solar, kwh");
        let ChartRequest::Line(series) = chart.request else {
            panic!("expected a line chart");
        };
        assert_eq!(series[0].label, "solar");
        assert_eq!(series[0].values[..3], [0.5, 1.5, 2.5]);
        assert_eq!(series[1].label, "kwh");
        assert_eq!(series[1].values.len(), 7);
    }

    #[test]
    fn static_bar_rejects_text_columns() {
        let selection: ColumnSelection = ["kwh", "region"].into_iter().collect();
        assert_eq!(
            plan_static(&energy_a(), &selection, ChartKind::Bar),
            ChartOutcome::Warning(PlanWarning::NotNumeric("region".into()))
        );
    }

    #[test]
    fn static_pie_needs_two_columns() {
        let selection: ColumnSelection = ["kwh"].into_iter().collect();
        assert_eq!(
            plan_static(&energy_a(), &selection, ChartKind::Pie),
            ChartOutcome::Warning(PlanWarning::PieNeedsTwoColumns)
        );
    }

    #[test]
    fn static_pie_uses_first_pick_as_labels() {
        let selection: ColumnSelection = ["month", "kwh"].into_iter().collect();
        let chart = single_chart(plan_static(&energy_b(), &selection, ChartKind::Pie));
        let ChartRequest::Pie { labels, values } = chart.request else {
            panic!("expected a pie chart");
        };
        assert_eq!(labels[..2], ["m0", "m1"]);
        assert_eq!(values[..2], [100.0, 101.0]);
    }

    #[test]
    fn unknown_column_becomes_a_warning() {
        let selection: ColumnSelection = ["gas"].into_iter().collect();
        assert_eq!(
            plan_static(&energy_a(), &selection, ChartKind::Line),
            ChartOutcome::Warning(PlanWarning::UnknownColumn(UnknownColumn("gas".into())))
        );
    }

    #[test]
    fn comparison_truncates_to_shorter_table() {
        let (a, b) = (energy_a(), energy_b());
        let chart = single_chart(plan_comparison(
            &a,
            Some("kwh"),
            &b,
            Some("solar"),
            ChartKind::Line,
        ));
        assert_eq!(chart.title, COMPARISON_TITLE);

        let ChartRequest::Line(series) = chart.request else {
            panic!("expected a line chart");
        };
        assert_eq!(series[0].label, "kwh");
        assert_eq!(series[0].values, [0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0]);
        assert_eq!(series[1].label, "solar");
        assert_eq!(series[1].values, [0.5, 1.5, 2.5, 3.5, 4.5, 5.5, 6.5]);
    }

    #[test]
    fn comparison_of_same_named_columns_gets_distinct_labels() {
        let chart = single_chart(plan_comparison(
            &energy_a(),
            Some("kwh"),
            &energy_b(),
            Some("kwh"),
            ChartKind::Bar,
        ));
        let ChartRequest::Bar(series) = chart.request else {
            panic!("expected a bar chart");
        };
        assert_eq!(series[0].label, "kwh (dataset 1)");
        assert_eq!(series[1].label, "kwh (dataset 2)");
    }

    #[test]
    fn comparison_pie_takes_labels_from_first_dataset() {
        let chart = single_chart(plan_comparison(
            &energy_a(),
            Some("region"),
            &energy_b(),
            Some("kwh"),
            ChartKind::Pie,
        ));
        let ChartRequest::Pie { labels, values } = chart.request else {
            panic!("expected a pie chart");
        };
        assert_eq!(labels.len(), 7);
        assert!(labels.iter().all(|l| l == "north"));
        assert_eq!(values, [100.0, 101.0, 102.0, 103.0, 104.0, 105.0, 106.0]);
    }

    #[test]
    fn comparison_pie_rejects_text_sizes() {
        assert_eq!(
            plan_comparison(
                &energy_b(),
                Some("kwh"),
                &energy_a(),
                Some("region"),
                ChartKind::Pie
            ),
            ChartOutcome::Warning(PlanWarning::InvalidPieValues("region".into()))
        );
    }

    #[test]
    fn comparison_needs_both_picks() {
        assert_eq!(
            plan_comparison(&energy_a(), Some("kwh"), &energy_b(), None, ChartKind::Line),
            ChartOutcome::Warning(PlanWarning::MissingComparisonColumn)
        );
    }

    #[test]
    fn comparison_with_empty_table_is_empty_series() {
        let empty = load_uploaded(b"kwh\n").unwrap();
        let chart = single_chart(plan_comparison(
            &empty,
            Some("kwh"),
            &energy_b(),
            Some("kwh"),
            ChartKind::Line,
        ));
        let ChartRequest::Line(series) = chart.request else {
            panic!("expected a line chart");
        };
        assert!(series.iter().all(|s| s.values.is_empty()));
    }

    #[test]
    fn pie_skips_null_sizes_and_rejects_all_zero() {
        let table = load_uploaded(b"name,size\na,2\nb,\nc,0\n").unwrap();
        let selection: ColumnSelection = ["name", "size"].into_iter().collect();
        let chart = single_chart(plan_static(&table, &selection, ChartKind::Pie));
        assert_eq!(
            chart.request,
            ChartRequest::Pie {
                labels: vec!["a".into(), "c".into()],
                values: vec![2.0, 0.0],
            }
        );

        let zeros = load_uploaded(b"name,size\na,0\nb,0\n").unwrap();
        assert_eq!(
            plan_static(&zeros, &selection, ChartKind::Pie),
            ChartOutcome::Warning(PlanWarning::EmptyPie("size".into()))
        );
    }

    #[test]
    fn pie_rejects_negative_sizes() {
        let table = load_uploaded(b"name,size\na,2\nb,-1\n").unwrap();
        let selection: ColumnSelection = ["name", "size"].into_iter().collect();
        assert_eq!(
            plan_static(&table, &selection, ChartKind::Pie),
            ChartOutcome::Warning(PlanWarning::InvalidPieValues("size".into()))
        );
    }

    #[test]
    fn null_values_become_gaps() {
        let table = load_uploaded(b"kwh,site\n1,a\n,b\n3,c\n").unwrap();
        let selection: ColumnSelection = ["kwh"].into_iter().collect();
        let chart = single_chart(plan_static(&table, &selection, ChartKind::Line));
        let ChartRequest::Line(series) = chart.request else {
            panic!("expected a line chart");
        };
        assert_eq!(series[0].values[0], 1.0);
        assert!(series[0].values[1].is_nan());
        assert_eq!(series[0].values[2], 3.0);
    }

    #[test]
    fn side_by_side_plots_each_dataset_at_full_length() {
        let (a, b) = (energy_a(), energy_b());
        let picks_a: ColumnSelection = ["kwh"].into_iter().collect();
        let picks_b = ColumnSelection::default();

        let ChartOutcome::Charts(charts) = plan_side_by_side(&a, &picks_a, &b, &picks_b) else {
            panic!("expected charts");
        };
        assert_eq!(charts.len(), 2);
        assert_eq!(charts[0].title, "Dataset 1");
        assert_eq!(charts[1].title, "Dataset 2");
        let ChartRequest::Line(left) = &charts[0].request else {
            panic!("expected a line chart");
        };
        assert_eq!(left[0].values.len(), 10);
        assert_eq!(charts[1].request, ChartRequest::Line(Vec::new()));
    }

    #[test]
    fn side_by_side_with_nothing_picked_warns() {
        let empty = ColumnSelection::default();
        assert_eq!(
            plan_side_by_side(&energy_a(), &empty, &energy_b(), &empty),
            ChartOutcome::Warning(PlanWarning::EmptySelection)
        );
    }
}
