use chrono::NaiveDate;
use eframe::egui;

use super::PlantBuddyApp;
use crate::core::CareRecord;

pub fn ui_reminders(ui: &mut egui::Ui, app: &PlantBuddyApp, today: NaiveDate) {
    ui.heading(app.theme.heading(ui.ctx(), "Watering Reminders"));
    ui.add_space(4.0);

    let mut any_due = false;
    for record in app.care_log.due_for_watering(today) {
        any_due = true;
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("💧").color(app.theme.blue(ui.ctx())));
            ui.label(reminder_message(record));
        });
    }

    if !any_due {
        ui.label(
            egui::RichText::new("No plants need watering today.")
                .color(app.theme.comment(ui.ctx())),
        );
    }
}

fn reminder_message(record: &CareRecord) -> String {
    if record.location.is_empty() {
        format!("Time to water your {}!", record.common_name)
    } else {
        format!("Time to water your {} in {}!", record.common_name, record.location)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn record(location: &str) -> CareRecord {
        let last_watered = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        CareRecord {
            common_name: "Pothos".to_string(),
            species: "Epipremnum aureum".to_string(),
            adjusted_interval: 7,
            last_watered,
            amount_given: 100.0,
            typical_water: 250.0,
            planting_medium: String::new(),
            location: location.to_string(),
            height_cm: 20.0,
            sunlight_hours: 6.0,
            next_watering: NaiveDate::from_ymd_opt(2024, 1, 8).unwrap(),
        }
    }

    #[test]
    fn message_includes_the_location_when_one_was_given() {
        assert_eq!(
            reminder_message(&record("the kitchen")),
            "Time to water your Pothos in the kitchen!"
        );
    }

    #[test]
    fn message_skips_the_location_clause_when_empty() {
        assert_eq!(reminder_message(&record("")), "Time to water your Pothos!");
    }
}
