use chrono::NaiveDate;

use crate::core::{
    catalog::Catalog,
    errors::PlantBuddyError,
    models::{
        CareRecord,
        CareSubmission,
        WaterUsage,
    },
    watering::{
        adjusted_interval,
        next_watering,
    },
};

/// All care entries recorded in the current session, in the order they were
/// added. Nothing here is persisted; closing the app discards the log.
#[derive(Debug, Default)]
pub struct CareLog {
    records: Vec<CareRecord>,
}

impl CareLog {
    pub fn new() -> Self {
        CareLog { records: Vec::new() }
    }

    /// Validates a submission against the catalog, derives the watering
    /// schedule, and appends the resulting record. Existing records are
    /// never modified.
    pub fn add_record(
        &mut self,
        catalog: &Catalog,
        submission: CareSubmission,
    ) -> Result<&CareRecord, PlantBuddyError> {
        let entry = catalog
            .get(&submission.common_name)
            .ok_or_else(|| PlantBuddyError::UnknownPlant(submission.common_name.clone()))?;

        let interval =
            adjusted_interval(entry.base_interval, entry.avg_sunlight, submission.sunlight_hours);

        let record = CareRecord {
            common_name: submission.common_name,
            species: entry.species.clone(),
            adjusted_interval: interval,
            last_watered: submission.last_watered,
            amount_given: submission.amount_given,
            typical_water: entry.typical_water,
            planting_medium: submission.planting_medium,
            location: submission.location,
            height_cm: submission.height_cm,
            sunlight_hours: submission.sunlight_hours,
            next_watering: next_watering(submission.last_watered, interval),
        };

        let index = self.records.len();
        self.records.push(record);
        Ok(&self.records[index])
    }

    pub fn records(&self) -> &[CareRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records whose next watering falls on or before `today`, in insertion
    /// order. Reading the reminders changes nothing; the same plants stay due
    /// until a new record is added for them.
    pub fn due_for_watering(&self, today: NaiveDate) -> impl Iterator<Item = &CareRecord> {
        self.records.iter().filter(move |record| record.is_due(today))
    }

    /// One sample per record, in insertion order. Two records for the same
    /// species stay separate samples.
    pub fn water_usage(&self) -> Vec<WaterUsage> {
        self.records
            .iter()
            .map(|record| WaterUsage {
                common_name: record.common_name.clone(),
                amount_given: record.amount_given,
                typical_water: record.typical_water,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}
