use chrono::{
    Local,
    NaiveDate,
};

use crate::core::{
    CareSubmission,
    Catalog,
    CatalogEntry,
};

const DEFAULT_WATER_ML: f32 = 100.0;
const DEFAULT_HEIGHT_CM: f32 = 0.1;

/// Working state of the add-plant form. Lives for the whole session so the
/// fields keep whatever the user last typed.
pub struct PlantForm {
    pub common_name: String,
    pub last_watered: NaiveDate,
    pub amount_given: f32,
    pub planting_medium: String,
    pub location: String,
    pub height_cm: f32,
    pub sunlight_hours: f32,
}

impl PlantForm {
    pub fn for_catalog(catalog: &Catalog) -> Self {
        let (common_name, sunlight_hours) = catalog
            .entries()
            .first()
            .map(|entry| (entry.common_name.clone(), entry.avg_sunlight))
            .unwrap_or_default();

        Self {
            common_name,
            last_watered: Local::now().date_naive(),
            amount_given: DEFAULT_WATER_ML,
            planting_medium: String::new(),
            location: String::new(),
            height_cm: DEFAULT_HEIGHT_CM,
            sunlight_hours,
        }
    }

    /// Point the form at a different species. Sunlight snaps back to that
    /// species' average; everything else keeps the user's input.
    pub fn select(&mut self, entry: &CatalogEntry) {
        self.common_name = entry.common_name.clone();
        self.sunlight_hours = entry.avg_sunlight;
    }

    pub fn submission(&self) -> CareSubmission {
        CareSubmission {
            common_name: self.common_name.clone(),
            last_watered: self.last_watered,
            amount_given: self.amount_given,
            planting_medium: self.planting_medium.trim().to_string(),
            location: self.location.trim().to_string(),
            height_cm: self.height_cm,
            sunlight_hours: self.sunlight_hours,
        }
    }
}
