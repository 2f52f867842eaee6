use eframe::egui::{self, Button, Color32, RichText, Ui};

use crate::color;
use crate::state::{AppState, RemoteDataset, StatusLevel, StatusMessage, Upload, VisualizationMode};

// ---------------------------------------------------------------------------
// Left side panel – options and help
// ---------------------------------------------------------------------------

/// Render the left options panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.add_space(6.0);
    ui.heading(RichText::new("📊 Visualization Options").color(Color32::WHITE));
    ui.separator();

    ui.label(RichText::new("Choose Visualization Type").color(Color32::WHITE));
    for mode in [VisualizationMode::Static, VisualizationMode::Dynamic] {
        if ui
            .radio(state.mode == mode, RichText::new(mode.label()).color(Color32::WHITE))
            .clicked()
        {
            state.set_mode(mode);
        }
    }
    ui.separator();

    help_section(
        ui,
        "About Us",
        "We are dedicated to providing insights into energy consumption data to help improve sustainability.",
    );
    help_section(
        ui,
        "User Guide",
        "1. Log in with your credentials.\n2. Select a visualization type.\n3. Choose your desired columns and parameters for analysis.",
    );
    help_section(
        ui,
        "Help & Support",
        "For assistance, please contact us at: aishvipareek05@gmail.com\nPhone: +9158645236",
    );

    ui.add_space(8.0);
    let logout = ui.add_sized(
        [ui.available_width(), 32.0],
        Button::new(RichText::new("Logout").strong().color(Color32::WHITE)).fill(color::LOGOUT),
    );
    if logout.clicked() {
        state.logout();
    }
}

fn help_section(ui: &mut Ui, title: &str, body: &str) {
    ui.label(RichText::new(title).strong().size(16.0).color(color::ACCENT));
    ui.label(RichText::new(body).color(Color32::WHITE));
    ui.separator();
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Reload dataset").clicked() {
                state.retry_dataset();
                ui.close_menu();
            }
            if ui.button("Logout").clicked() {
                state.logout();
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(user) = state.session.username() {
            ui.label(RichText::new(format!("🎉 Welcome back, {user}!")).color(color::SUCCESS));
            ui.separator();
        }

        if let RemoteDataset::Loaded(table) = &state.remote {
            ui.label(format!(
                "{} rows × {} columns loaded",
                table.row_count(),
                table.column_count()
            ));
            ui.separator();
        }

        status_line(ui, state.status.as_ref());
    });
}

/// Last interaction feedback, coloured by severity.
pub fn status_line(ui: &mut Ui, status: Option<&StatusMessage>) {
    let Some(message) = status else {
        return;
    };
    let color = match message.level {
        StatusLevel::Success => color::SUCCESS,
        StatusLevel::Warning => color::WARNING,
        StatusLevel::Error => color::ERROR,
    };
    ui.label(RichText::new(&message.text).color(color));
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_upload_dialog(state: &mut AppState, slot: Upload) {
    let file = rfd::FileDialog::new()
        .set_title(slot.prompt())
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.upload_from_path(slot, &path);
    }
}
