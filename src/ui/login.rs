use eframe::egui::{self, Button, Key, RichText, TextEdit, Ui};

use crate::color;
use crate::state::AppState;
use crate::ui::panels::status_line;

const FORM_WIDTH: f32 = 360.0;

// ---------------------------------------------------------------------------
// Login screen (shown while the session is anonymous)
// ---------------------------------------------------------------------------

pub fn login_screen(ui: &mut Ui, state: &mut AppState) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.add_space(40.0);
        ui.label(
            RichText::new("🔋 Welcome to the Energy Consumption App 🔋")
                .size(32.0)
                .strong()
                .color(color::ACCENT),
        );
        ui.add_space(10.0);
        ui.label(
            RichText::new("🔑 Please Log In")
                .size(24.0)
                .strong()
                .color(color::HIGHLIGHT),
        );
        ui.add_space(30.0);

        let width = FORM_WIDTH.min(ui.available_width() * 0.9);

        ui.add(
            TextEdit::singleline(&mut state.login_form.username)
                .hint_text("👤 Username")
                .desired_width(width),
        );
        ui.add_space(6.0);
        let password = ui.add(
            TextEdit::singleline(&mut state.login_form.password)
                .hint_text("🔒 Password")
                .password(true)
                .desired_width(width),
        );
        let pressed_enter = password.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));
        ui.add_space(12.0);

        let login = ui.add_sized(
            [width, 36.0],
            Button::new(RichText::new("Login").size(18.0).strong()).fill(color::ACCENT),
        );
        if login.clicked() || pressed_enter {
            state.submit_login();
        }

        ui.add_space(6.0);
        if ui
            .add(egui::Label::new(RichText::new("Forgot Password?").color(color::HIGHLIGHT)).sense(egui::Sense::click()))
            .clicked()
        {
            state.forgot_password();
        }

        ui.add_space(16.0);
        status_line(ui, state.status.as_ref());
    });
}
