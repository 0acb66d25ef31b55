use chrono::NaiveDate;
use eframe::egui;

use super::{
    care_table,
    consumption_chart,
    reminders,
    PlantBuddyApp,
};

pub fn show(ctx: &egui::Context, app: &PlantBuddyApp, today: NaiveDate) {
    egui::CentralPanel::default().show(ctx, |ui| {
        if app.care_log.is_empty() {
            ui_empty_state(ui, app);
            return;
        }

        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.add_space(4.0);
            ui.heading(
                egui::RichText::new("House Plant Buddy").color(app.theme.cyan(ui.ctx())).strong(),
            );
            ui.label(
                egui::RichText::new("Smart Water Reminders").color(app.theme.comment(ui.ctx())),
            );
            ui.add_space(12.0);

            care_table::ui_care_table(ui, app, today);

            ui.add_space(16.0);
            ui.separator();
            ui.add_space(8.0);

            reminders::ui_reminders(ui, app, today);

            ui.add_space(16.0);
            ui.separator();
            ui.add_space(8.0);

            consumption_chart::ui_consumption_chart(ui, app);
            ui.add_space(12.0);
        });
    });
}

fn ui_empty_state(ui: &mut egui::Ui, app: &PlantBuddyApp) {
    ui.vertical_centered(|ui| {
        ui.add_space(100.0);

        ui.label(
            egui::RichText::new("No plants added yet.")
                .size(32.0)
                .color(app.theme.cyan(ui.ctx())),
        );

        ui.add_space(4.0);

        ui.label(
            egui::RichText::new(
                "Record a watering in the panel on the left to start tracking your plants.",
            )
            .size(13.0)
            .color(app.theme.comment(ui.ctx())),
        );
    });
}
