use eframe::egui;

use crate::auth::session::AuthState;
use crate::color;
use crate::config::AppConfig;
use crate::state::AppState;
use crate::ui::{login, panels, views};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct EnergyDashboardApp {
    pub state: AppState,
}

impl EnergyDashboardApp {
    pub fn new(config: AppConfig) -> Self {
        Self {
            state: AppState::new(config),
        }
    }
}

impl eframe::App for EnergyDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Anonymous: login form only ----
        if self.state.session.state() == AuthState::Anonymous {
            egui::CentralPanel::default().show(ctx, |ui| {
                login::login_screen(ui, &mut self.state);
            });
            return;
        }

        // Blocks this frame on first pass after login.
        self.state.ensure_dataset();

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: options ----
        egui::SidePanel::left("options_panel")
            .default_width(240.0)
            .resizable(true)
            .frame(egui::Frame::side_top_panel(&ctx.style()).fill(color::SIDEBAR))
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: visualization ----
        egui::CentralPanel::default().show(ctx, |ui| {
            views::central_panel(ui, &mut self.state);
        });
    }
}
