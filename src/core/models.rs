use chrono::NaiveDate;

/// One accepted care entry. Everything is fixed at creation time; later
/// submissions never touch existing records.
#[derive(Debug, Clone)]
pub struct CareRecord {
    pub common_name: String,      // Catalog key (e.g., "Peace Lily")
    pub species: String,          // Binomial name, copied from the catalog
    pub adjusted_interval: u32,   // Days between waterings for this plant
    pub last_watered: NaiveDate,
    pub amount_given: f32,        // ml the user actually gave
    pub typical_water: f32,       // ml the species typically needs, copied from the catalog
    pub planting_medium: String,  // Free text, may be empty
    pub location: String,         // Free text, may be empty
    pub height_cm: f32,
    pub sunlight_hours: f32,      // Reported hours of sun per day
    pub next_watering: NaiveDate, // last_watered + adjusted_interval
}

impl CareRecord {
    /// Due today or overdue. The boundary day itself counts as due.
    pub fn is_due(&self, today: NaiveDate) -> bool {
        self.next_watering <= today
    }
}

/// What the user filled in, before the catalog lookup and interval math.
#[derive(Debug, Clone)]
pub struct CareSubmission {
    pub common_name: String,
    pub last_watered: NaiveDate,
    pub amount_given: f32,
    pub planting_medium: String,
    pub location: String,
    pub height_cm: f32,
    pub sunlight_hours: f32,
}

/// One bar pair in the consumption chart: what a plant got vs. what its
/// species typically needs. One entry per care record, duplicates included.
#[derive(Debug, Clone, PartialEq)]
pub struct WaterUsage {
    pub common_name: String,
    pub amount_given: f32,
    pub typical_water: f32,
}
