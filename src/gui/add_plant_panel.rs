use std::ops::RangeInclusive;

use eframe::egui;
use egui_extras::DatePickerButton;

use super::{
    theme::Theme,
    ActionQueue,
    PlantBuddyApp,
    PlantForm,
    UiAction,
};
use crate::core::{
    watering::{
        adjusted_interval,
        next_watering,
    },
    Catalog,
    CatalogEntry,
};

const WATER_RANGE_ML: RangeInclusive<f32> = 10.0..=1000.0;
const SUNLIGHT_RANGE_HOURS: RangeInclusive<f32> = 0.0..=24.0;
const HEIGHT_RANGE_CM: RangeInclusive<f32> = 0.1..=10_000.0;

pub fn show(ctx: &egui::Context, app: &mut PlantBuddyApp) {
    let mut actions = ActionQueue::new();

    egui::SidePanel::left("add_plant_panel").resizable(false).exact_width(330.0).show(ctx, |ui| {
        let PlantBuddyApp { catalog, form, status_flash, theme, .. } = app;

        ui.spacing_mut().slider_width = 190.0;

        ui.add_space(8.0);
        ui.heading(theme.heading(ui.ctx(), "Add a New Plant"));
        ui.add_space(8.0);

        ui_species_picker(ui, catalog, form, &mut actions);

        if let Some(entry) = catalog.get(&form.common_name) {
            ui.label(egui::RichText::new(&entry.species).italics().color(theme.comment(ui.ctx())));
            ui.add_space(6.0);
            ui_species_photo(ui, entry);
            ui.add_space(10.0);

            ui_care_fields(ui, form);
            ui.add_space(8.0);
            ui_schedule_preview(ui, form, entry, theme);
        }

        ui.add_space(12.0);

        let add_clicked =
            ui.add_sized([ui.available_width(), 28.0], egui::Button::new("Add Plant")).clicked();

        if add_clicked {
            actions.push(UiAction::AddPlant);
        }

        ui.add_space(6.0);
        status_flash.show(ui, theme);
    });

    let had_actions = !actions.is_empty();
    execute_actions(app, &mut actions);

    if had_actions {
        ctx.request_repaint();
    }
}

fn execute_actions(app: &mut PlantBuddyApp, actions: &mut ActionQueue) {
    for action in actions.drain() {
        match action {
            UiAction::SelectPlant(common_name) => {
                if let Some(entry) = app.catalog.get(&common_name) {
                    app.form.select(entry);
                }
            }
            UiAction::AddPlant => {
                match app.care_log.add_record(&app.catalog, app.form.submission()) {
                    Ok(record) => {
                        println!(
                            "Added {}: watering every {} days, next on {}",
                            record.common_name, record.adjusted_interval, record.next_watering
                        );
                        app.status_flash.flash("Plant added successfully!");
                    }
                    Err(e) => {
                        app.modals.error.show_error(
                            "Couldn't Add Plant",
                            "The submitted species is not part of the catalog.",
                            Some(e.to_string()),
                        );
                    }
                }
            }
        }
    }
}

fn ui_species_picker(
    ui: &mut egui::Ui,
    catalog: &Catalog,
    form: &mut PlantForm,
    actions: &mut ActionQueue,
) {
    ui.label("Common Name:");

    let previous = form.common_name.clone();
    egui::ComboBox::from_id_salt("species_combo")
        .width(ui.available_width().min(220.0))
        .selected_text(form.common_name.clone())
        .show_ui(ui, |ui| {
            for name in catalog.names() {
                ui.selectable_value(&mut form.common_name, name.to_string(), name);
            }
        });

    if form.common_name != previous {
        actions.push(UiAction::SelectPlant(form.common_name.clone()));
    }
}

fn ui_species_photo(ui: &mut egui::Ui, entry: &CatalogEntry) {
    ui.vertical_centered(|ui| {
        ui.add(
            egui::Image::new(entry.image_ref.as_str())
                .max_size(egui::vec2(290.0, 140.0))
                .show_loading_spinner(true),
        );
    });
}

fn ui_care_fields(ui: &mut egui::Ui, form: &mut PlantForm) {
    ui.label("Date of Last Watering:");
    ui.add(DatePickerButton::new(&mut form.last_watered).id_salt("last_watered_picker"));
    ui.add_space(6.0);

    ui.label("Amount of Water (ml):");
    ui.add(egui::Slider::new(&mut form.amount_given, WATER_RANGE_ML).fixed_decimals(0));
    ui.add_space(6.0);

    ui.label("Medium of Planting:");
    ui.add(
        egui::TextEdit::singleline(&mut form.planting_medium)
            .hint_text("e.g. potting soil")
            .desired_width(f32::INFINITY),
    );
    ui.add_space(6.0);

    ui.label("Location of the Plant:");
    ui.add(
        egui::TextEdit::singleline(&mut form.location)
            .hint_text("e.g. living room window")
            .desired_width(f32::INFINITY),
    );
    ui.add_space(6.0);

    ui.label("Height of the Plant (cm):");
    ui.add(egui::DragValue::new(&mut form.height_cm).range(HEIGHT_RANGE_CM).speed(0.5));
    ui.add_space(6.0);

    ui.label("Sunlight Exposure (hours/day):");
    ui.add(egui::Slider::new(&mut form.sunlight_hours, SUNLIGHT_RANGE_HOURS).fixed_decimals(1));
}

fn ui_schedule_preview(ui: &mut egui::Ui, form: &PlantForm, entry: &CatalogEntry, theme: &Theme) {
    let interval = adjusted_interval(entry.base_interval, entry.avg_sunlight, form.sunlight_hours);
    let next = next_watering(form.last_watered, interval);

    let cadence = match interval {
        1 => "every day".to_string(),
        n => format!("every {} days", n),
    };

    ui.label(
        egui::RichText::new(format!("Waters {}, next on {}", cadence, next.format("%b %d, %Y")))
            .color(theme.comment(ui.ctx()))
            .italics(),
    );
}
