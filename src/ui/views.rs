use std::hash::Hash;

use eframe::egui::{self, RichText, ScrollArea, Ui};
use egui_extras::{Column as TableColumn, TableBuilder};

use crate::chart::ChartKind;
use crate::color;
use crate::data::model::Table;
use crate::data::select::{available_columns, ColumnSelection};
use crate::state::{AppState, ComparisonLayout, RemoteDataset, Upload, VisualizationMode};
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// Central panel
// ---------------------------------------------------------------------------

/// Render the active visualization, or why it cannot be shown.
pub fn central_panel(ui: &mut Ui, state: &mut AppState) {
    if !state.is_authenticated() {
        return;
    }

    // The fetch runs inline before any panel is drawn, so only a failure
    // needs handling here.
    if let RemoteDataset::Failed(message) = &state.remote {
        ui.label(RichText::new(message).color(color::ERROR));
        if ui.button("🔄 Retry").clicked() {
            state.retry_dataset();
        }
        return;
    }

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| match state.mode {
            VisualizationMode::Static => static_view(ui, state),
            VisualizationMode::Dynamic => dynamic_view(ui, state),
        });
}

fn view_header(ui: &mut Ui, text: &str) {
    ui.label(RichText::new(text).size(24.0).strong().color(color::ACCENT));
    ui.add_space(6.0);
}

// ---------------------------------------------------------------------------
// Static visualization
// ---------------------------------------------------------------------------

fn static_view(ui: &mut Ui, state: &mut AppState) {
    let RemoteDataset::Loaded(table) = &state.remote else {
        return;
    };
    // Clone what we need so we can mutate state below.
    let columns: Vec<String> = available_columns(table)
        .into_iter()
        .map(str::to_string)
        .collect();

    view_header(ui, "📊 Static Visualization");
    ui.label("Select one or more columns and view a static chart.");
    ui.add_space(6.0);

    ui.strong("Select columns for static visualization:");
    column_checkboxes(ui, &columns, &mut state.static_selection);
    ui.add_space(6.0);

    ui.horizontal(|ui: &mut Ui| {
        ui.label("Chart type:");
        chart_kind_selector(ui, "static_kind", &mut state.static_kind);
    });
    if state.static_kind == ChartKind::Pie {
        ui.weak("Pie: the first picked column gives the labels, the second the slice sizes.");
    }

    if ui.button("Show Static Visualization").clicked() {
        state.show_static();
    }
    ui.add_space(8.0);

    if let Some(outcome) = &state.outcome {
        plot::chart_outcome(ui, outcome);
    }
}

// ---------------------------------------------------------------------------
// Dynamic visualization
// ---------------------------------------------------------------------------

fn dynamic_view(ui: &mut Ui, state: &mut AppState) {
    view_header(ui, "📉 Dynamic Visualization");

    for slot in Upload::BOTH {
        upload_section(ui, state, slot);
        ui.add_space(6.0);
    }

    if !state.comparison_ready() {
        ui.label("Upload both CSV files to compare them.");
        return;
    }

    ui.horizontal(|ui: &mut Ui| {
        ui.label("Comparison layout:");
        ui.radio_value(&mut state.layout, ComparisonLayout::Aligned, "Aligned (one chart)");
        ui.radio_value(&mut state.layout, ComparisonLayout::SideBySide, "Side by side");
    });
    ui.add_space(6.0);

    match state.layout {
        ComparisonLayout::Aligned => {
            for slot in Upload::BOTH {
                column_pick(ui, state, slot);
            }
            ui.horizontal(|ui: &mut Ui| {
                ui.label("Chart type:");
                chart_kind_selector(ui, "compare_kind", &mut state.compare_kind);
            });
            ui.weak("Longer data is cut to the length of the shorter dataset.");
            if state.compare_kind == ChartKind::Pie {
                ui.weak("Pie: the first dataset's column gives the labels, the second's the slice sizes.");
            }
        }
        ComparisonLayout::SideBySide => {
            for slot in Upload::BOTH {
                let Some(table) = &state.upload(slot).table else {
                    continue;
                };
                let columns: Vec<String> = available_columns(table)
                    .into_iter()
                    .map(str::to_string)
                    .collect();
                ui.strong(format!("Select columns for the {} dataset:", slot.ordinal()));
                column_checkboxes(ui, &columns, &mut state.upload_mut(slot).selection);
            }
        }
    }

    ui.add_space(6.0);
    if ui.button("Compare the datasets").clicked() {
        state.compare();
    }
    ui.add_space(8.0);

    if let Some(outcome) = &state.outcome {
        plot::chart_outcome(ui, outcome);
    }
}

fn upload_section(ui: &mut Ui, state: &mut AppState, slot: Upload) {
    ui.group(|ui: &mut Ui| {
        ui.horizontal(|ui: &mut Ui| {
            ui.strong(slot.prompt());
            if ui.button("Browse…").clicked() {
                panels::open_upload_dialog(state, slot);
            }
        });

        let preview_rows = state.config.preview_rows;
        let upload = state.upload(slot);
        if let Some(name) = &upload.file_name {
            ui.label(format!("📄 {name}"));
        }
        if let Some(error) = &upload.error {
            ui.label(RichText::new(error).color(color::ERROR));
        }
        if let Some(table) = &upload.table {
            ui.label(format!(
                "Preview of the {} dataset ({} rows × {} columns):",
                slot.ordinal(),
                table.row_count(),
                table.column_count()
            ));
            if table.is_empty() {
                ui.weak("The file has a header but no rows.");
            } else {
                preview_table(ui, table, preview_rows, slot);
            }
        }
    });
}

/// Single column pick for the aligned comparison.
fn column_pick(ui: &mut Ui, state: &mut AppState, slot: Upload) {
    let Some(table) = &state.upload(slot).table else {
        return;
    };
    let columns: Vec<String> = available_columns(table)
        .into_iter()
        .map(str::to_string)
        .collect();
    let upload = state.upload_mut(slot);

    ui.horizontal(|ui: &mut Ui| {
        ui.label(format!("Column from the {} dataset:", slot.ordinal()));
        egui::ComboBox::from_id_salt(("pick", slot))
            .selected_text(upload.pick.as_deref().unwrap_or("—"))
            .show_ui(ui, |ui: &mut Ui| {
                for col in &columns {
                    ui.selectable_value(&mut upload.pick, Some(col.clone()), col);
                }
            });
    });
}

// ---------------------------------------------------------------------------
// Shared widgets
// ---------------------------------------------------------------------------

/// Multi-select as a row of checkboxes; pick order is kept by the selection.
fn column_checkboxes(ui: &mut Ui, columns: &[String], selection: &mut ColumnSelection) {
    ui.horizontal_wrapped(|ui: &mut Ui| {
        for col in columns {
            let mut checked = selection.contains(col);
            if ui.checkbox(&mut checked, col).changed() {
                selection.toggle(col);
            }
        }
    });
    if !selection.is_empty() {
        ui.weak(format!("Picked: {}", selection.names().join(", ")));
    }
}

fn chart_kind_selector(ui: &mut Ui, id_salt: &str, kind: &mut ChartKind) {
    egui::ComboBox::from_id_salt(id_salt)
        .selected_text(kind.label())
        .show_ui(ui, |ui: &mut Ui| {
            for option in ChartKind::ALL {
                ui.selectable_value(kind, option, option.label());
            }
        });
}

/// First `rows` rows of `table` in a striped grid.
fn preview_table(ui: &mut Ui, table: &Table, rows: usize, id_salt: impl Hash) {
    let shown = table.row_count().min(rows);
    ui.push_id(id_salt, |ui: &mut Ui| {
        ScrollArea::horizontal().show(ui, |ui: &mut Ui| {
            TableBuilder::new(ui)
                .striped(true)
                .vscroll(false)
                .columns(TableColumn::auto().at_least(60.0), table.column_count())
                .header(20.0, |mut header| {
                    for column in table.columns() {
                        header.col(|ui: &mut Ui| {
                            ui.strong(&column.name);
                        });
                    }
                })
                .body(|mut body| {
                    for row in 0..shown {
                        body.row(18.0, |mut cells| {
                            for col in 0..table.column_count() {
                                cells.col(|ui: &mut Ui| {
                                    let text = table
                                        .cell(row, col)
                                        .map(ToString::to_string)
                                        .unwrap_or_default();
                                    ui.label(text);
                                });
                            }
                        });
                    }
                });
        });
    });
}
