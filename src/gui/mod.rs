pub mod actions;
pub mod add_plant_panel;
pub mod care_table;
pub mod consumption_chart;
pub mod dashboard;
pub mod error_modal;
pub mod reminders;
pub mod reset_modal;
pub mod settings;
pub mod status_flash;
pub mod theme;
pub mod top_bar;

mod app;

pub use actions::{
    ActionQueue,
    UiAction,
};
pub use app::{
    PlantBuddyApp,
    PlantForm,
};
