use chrono::NaiveDate;
use eframe::egui;
use egui_extras::{
    Column,
    TableBuilder,
};

use super::{
    theme::blend_colors,
    PlantBuddyApp,
};
use crate::core::CareRecord;

pub fn ui_care_table(ui: &mut egui::Ui, app: &PlantBuddyApp, today: NaiveDate) {
    let records = app.care_log.records();
    let text_height = egui::TextStyle::Body.resolve(ui.style()).size.max(20.0);

    egui::ScrollArea::horizontal().show(ui, |ui| {
        // Enhance row background contrast for better text readability
        let base_bg = ui.visuals().faint_bg_color;
        ui.style_mut().visuals.faint_bg_color = if ui.visuals().dark_mode {
            base_bg.linear_multiply(1.4)
        } else {
            base_bg.linear_multiply(0.75)
        };

        TableBuilder::new(ui)
            .striped(true)
            .resizable(false)
            .vscroll(false)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::auto().at_least(105.0))
            .column(Column::auto().at_least(150.0))
            .column(Column::auto().at_least(95.0))
            .column(Column::auto().at_least(95.0))
            .column(Column::auto().at_least(85.0))
            .column(Column::auto().at_least(85.0))
            .column(Column::auto().at_least(90.0))
            .column(Column::auto().at_least(90.0))
            .column(Column::auto().at_least(80.0))
            .column(Column::auto().at_least(80.0))
            .column(Column::remainder().at_least(100.0))
            .header(25.0, |mut header| {
                let labels = [
                    "Common Name",
                    "Species",
                    "Interval (days)",
                    "Last Watered",
                    "Amount (ml)",
                    "Typical (ml)",
                    "Medium",
                    "Location",
                    "Height (cm)",
                    "Sunlight (h)",
                    "Next Watering",
                ];
                for label in labels {
                    header.col(|ui| {
                        ui.label(app.theme.heading(ui.ctx(), label));
                    });
                }
            })
            .body(|body| {
                body.rows(text_height, records.len(), |mut row| {
                    let record = &records[row.index()];

                    row.col(|ui| {
                        ui.strong(record.common_name.as_str());
                    });
                    row.col(|ui| {
                        ui.label(egui::RichText::new(&record.species).italics());
                    });
                    row.col(|ui| {
                        ui.label(format!("{}", record.adjusted_interval));
                    });
                    row.col(|ui| {
                        ui.label(record.last_watered.format("%Y-%m-%d").to_string());
                    });
                    row.col(|ui| {
                        ui.label(format!("{:.0}", record.amount_given));
                    });
                    row.col(|ui| {
                        ui.label(format!("{:.0}", record.typical_water));
                    });
                    row.col(|ui| {
                        ui.label(record.planting_medium.as_str());
                    });
                    row.col(|ui| {
                        ui.label(record.location.as_str());
                    });
                    row.col(|ui| {
                        ui.label(format!("{:.1}", record.height_cm));
                    });
                    row.col(|ui| {
                        ui.label(format!("{:.1}", record.sunlight_hours));
                    });
                    row.col(|ui| {
                        ui_col_next_watering(ui, app, record, today);
                    });
                });
            });
    });
}

fn ui_col_next_watering(
    ui: &mut egui::Ui,
    app: &PlantBuddyApp,
    record: &CareRecord,
    today: NaiveDate,
) {
    let date_text = record.next_watering.format("%Y-%m-%d").to_string();

    if record.is_due(today) {
        let due_color = blend_colors(ui.visuals().text_color(), app.theme.red(ui.ctx()), 0.85);
        ui.label(egui::RichText::new(date_text).color(due_color).strong())
            .on_hover_text("Due for watering");
    } else {
        ui.label(date_text);
    }
}
