pub mod care_log;
pub mod catalog;
pub mod errors;
pub mod models;
pub mod watering;

#[cfg(test)]
mod care_log_tests;

pub use care_log::CareLog;
pub use catalog::{
    Catalog,
    CatalogEntry,
};
pub use errors::PlantBuddyError;
pub use models::{
    CareRecord,
    CareSubmission,
    WaterUsage,
};
