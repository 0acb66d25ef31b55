mod form;
mod modals;

use chrono::Local;
use eframe::egui;
use modals::Modals;

use super::{
    add_plant_panel,
    dashboard,
    settings::SettingsData,
    status_flash::StatusFlash,
    theme::{
        set_theme,
        Theme,
    },
    top_bar::{
        TopBar,
        TopBarAction,
    },
};
use crate::{
    core::{
        CareLog,
        Catalog,
    },
    persistence::{
        load_json_or_default,
        save_json,
    },
};

pub use form::PlantForm;

pub struct PlantBuddyApp {
    // Domain State
    pub catalog: Catalog,
    pub care_log: CareLog,

    // Configuration
    pub settings_data: SettingsData,

    // UI State
    pub form: PlantForm,
    pub theme: Theme,
    pub status_flash: StatusFlash,

    // Modals
    pub modals: Modals,
}

impl PlantBuddyApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings_data = load_json_or_default::<SettingsData>("settings.json");
        let catalog = Catalog::builtin();
        let form = PlantForm::for_catalog(&catalog);

        let app = Self {
            // Domain State
            catalog,
            care_log: CareLog::new(),

            // Configuration
            settings_data,

            // UI State
            form,
            theme: Theme::everforest(),
            status_flash: StatusFlash::new(),

            // Modals
            modals: Modals::default(),
        };

        egui_extras::install_image_loaders(&cc.egui_ctx);
        app.setup_theme(cc);

        // Apply saved theme preference (set_theme switches to the registered variant)
        cc.egui_ctx.set_theme(if app.settings_data.dark_mode {
            egui::Theme::Dark
        } else {
            egui::Theme::Light
        });

        cc.egui_ctx.options_mut(|o| {
            o.theme_preference = if app.settings_data.dark_mode {
                egui::ThemePreference::Dark
            } else {
                egui::ThemePreference::Light
            };
        });

        //Make sure it opens above other windows so you can see it.
        cc.egui_ctx
            .send_viewport_cmd(egui::ViewportCommand::WindowLevel(egui::WindowLevel::AlwaysOnTop));
        cc.egui_ctx
            .send_viewport_cmd(egui::ViewportCommand::WindowLevel(egui::WindowLevel::Normal));

        app
    }

    fn setup_theme(&self, cc: &eframe::CreationContext<'_>) {
        set_theme(&cc.egui_ctx, self.theme.clone());
    }

    fn save_settings(&self) {
        if let Err(e) = save_json(&self.settings_data, "settings.json") {
            eprintln!("Failed to save settings: {}", e);
        }
    }

    /// The theme switch in the top bar writes straight into the egui context;
    /// mirror it into the saved settings when it changes.
    fn sync_theme_preference(&mut self, ctx: &egui::Context) {
        let dark_mode = ctx.theme() == egui::Theme::Dark;
        if dark_mode != self.settings_data.dark_mode {
            self.settings_data.dark_mode = dark_mode;
            self.save_settings();
        }
    }

    fn start_new_session(&mut self) {
        let discarded = self.care_log.len();
        self.care_log.clear();
        self.form = PlantForm::for_catalog(&self.catalog);
        self.status_flash.clear();
        println!("Started a new session ({} care entries discarded)", discarded);
    }
}

impl eframe::App for PlantBuddyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let today = Local::now().date_naive();
        let due_count = self.care_log.due_for_watering(today).count();

        if let Some(action) = TopBar::show(ctx, self.care_log.len(), due_count) {
            match action {
                TopBarAction::NewSession => self.modals.reset.open_confirm(self.care_log.len()),
            }
        }

        self.sync_theme_preference(ctx);

        add_plant_panel::show(ctx, self);
        dashboard::show(ctx, self, today);

        self.modals.error.show(ctx);

        if let Some(confirmed) = self.modals.reset.show(ctx, &self.theme) {
            if confirmed {
                self.start_new_session();
            }
        }
    }
}
