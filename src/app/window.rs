use crate::app::core::{Event, PickerState};
use crate::app::main::App;
use crate::config::Config;
use crate::device_display::impl_gui::DisplayView;
use crate::library::logger::interface::Logger;
use eframe::egui;
use std::sync::Arc;
use std::time::Duration;

/// The eframe window. Each frame drains finished work into the app before
/// drawing, so all state changes happen on the UI thread.
pub struct AppWindow {
    app: App,
    view: DisplayView,
    title: String,
    tick_rate: Duration,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl AppWindow {
    pub fn new(
        app: App,
        view: DisplayView,
        config: &Config,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Self {
        Self {
            app,
            view,
            title: config.window_title.clone(),
            tick_rate: config.tick_rate,
            logger: logger.with_namespace("window"),
        }
    }

    fn choose_photo(&mut self) {
        if let Err(e) = self.app.dispatch(Event::OpenPickerClicked) {
            let _ = self.logger.error(&format!("Failed to open picker: {}", e));
        }
    }
}

impl eframe::App for AppWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Err(e) = self.app.pump() {
            let _ = self.logger.error(&format!("Failed to apply events: {}", e));
        }

        let picker_open = self.app.state().picker == PickerState::Open;
        let mut clicked = false;

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(self.title.as_str());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    clicked = ui
                        .add_enabled(!picker_open, egui::Button::new("📷 Choose Photo"))
                        .clicked();
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| self.view.ui(ui));
        });

        if clicked {
            self.choose_photo();
        }

        if self.app.is_busy() {
            ctx.request_repaint_after(self.tick_rate);
        }
    }
}
