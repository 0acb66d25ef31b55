#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::core::{
        CareLog,
        CareSubmission,
        Catalog,
        PlantBuddyError,
    };

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn submission(
        common_name: &str,
        last_watered: NaiveDate,
        sunlight_hours: f32,
    ) -> CareSubmission {
        CareSubmission {
            common_name: common_name.to_string(),
            last_watered,
            amount_given: 120.0,
            planting_medium: "potting soil".to_string(),
            location: "kitchen".to_string(),
            height_cm: 25.0,
            sunlight_hours,
        }
    }

    #[test]
    fn peace_lily_at_its_average_sunlight() {
        let catalog = Catalog::builtin();
        let mut log = CareLog::new();

        let record =
            log.add_record(&catalog, submission("Peace Lily", date(2024, 1, 1), 4.0)).unwrap();

        assert_eq!(record.species, "Spathiphyllum wallisii");
        assert_eq!(record.adjusted_interval, 4);
        assert_eq!(record.next_watering, date(2024, 1, 5));
        assert_eq!(record.typical_water, 200.0);
    }

    #[test]
    fn snake_plant_in_a_dim_corner() {
        let catalog = Catalog::builtin();
        let mut log = CareLog::new();

        // 14 * (1 + 0.1 * 4) = 19.6, rounds up to 20
        let record =
            log.add_record(&catalog, submission("Snake Plant", date(2024, 1, 1), 2.0)).unwrap();

        assert_eq!(record.adjusted_interval, 20);
        assert_eq!(record.next_watering, date(2024, 1, 21));
    }

    #[test]
    fn unknown_plants_are_rejected() {
        let catalog = Catalog::builtin();
        let mut log = CareLog::new();

        let result = log.add_record(&catalog, submission("Cactus", date(2024, 1, 1), 6.0));

        assert!(matches!(result, Err(PlantBuddyError::UnknownPlant(name)) if name == "Cactus"));
        assert!(log.is_empty());
    }

    #[test]
    fn records_keep_insertion_order() {
        let catalog = Catalog::builtin();
        let mut log = CareLog::new();

        log.add_record(&catalog, submission("Pothos", date(2024, 1, 3), 6.0)).unwrap();
        log.add_record(&catalog, submission("Snake Plant", date(2024, 1, 1), 6.0)).unwrap();
        log.add_record(&catalog, submission("Peace Lily", date(2024, 1, 2), 4.0)).unwrap();

        let names: Vec<&str> = log.records().iter().map(|r| r.common_name.as_str()).collect();
        assert_eq!(names, ["Pothos", "Snake Plant", "Peace Lily"]);
    }

    #[test]
    fn adding_a_record_leaves_earlier_records_untouched() {
        let catalog = Catalog::builtin();
        let mut log = CareLog::new();

        log.add_record(&catalog, submission("Pothos", date(2024, 1, 1), 6.0)).unwrap();
        let first_next = log.records()[0].next_watering;

        log.add_record(&catalog, submission("Pothos", date(2024, 2, 1), 12.0)).unwrap();

        assert_eq!(log.records()[0].next_watering, first_next);
        assert_eq!(log.records()[0].adjusted_interval, 7);
    }

    #[test]
    fn due_filter_includes_the_boundary_day() {
        let catalog = Catalog::builtin();
        let mut log = CareLog::new();

        // Peace Lily: next watering on Jan 5. Snake Plant: next watering on Jan 15.
        log.add_record(&catalog, submission("Peace Lily", date(2024, 1, 1), 4.0)).unwrap();
        log.add_record(&catalog, submission("Snake Plant", date(2024, 1, 1), 6.0)).unwrap();

        assert_eq!(log.due_for_watering(date(2024, 1, 4)).count(), 0);

        let due: Vec<&str> =
            log.due_for_watering(date(2024, 1, 5)).map(|r| r.common_name.as_str()).collect();
        assert_eq!(due, ["Peace Lily"]);

        let all_due: Vec<&str> =
            log.due_for_watering(date(2024, 1, 15)).map(|r| r.common_name.as_str()).collect();
        assert_eq!(all_due, ["Peace Lily", "Snake Plant"]);
    }

    #[test]
    fn reading_reminders_does_not_consume_them() {
        let catalog = Catalog::builtin();
        let mut log = CareLog::new();

        log.add_record(&catalog, submission("Spider Plant", date(2024, 1, 1), 6.0)).unwrap();

        let today = date(2024, 2, 1);
        let first: Vec<&str> =
            log.due_for_watering(today).map(|r| r.common_name.as_str()).collect();
        let second: Vec<&str> =
            log.due_for_watering(today).map(|r| r.common_name.as_str()).collect();

        assert_eq!(first, second);
        assert_eq!(first, ["Spider Plant"]);
    }

    #[test]
    fn water_usage_keeps_duplicate_species_as_separate_samples() {
        let catalog = Catalog::builtin();
        let mut log = CareLog::new();

        let mut first = submission("Pothos", date(2024, 1, 1), 6.0);
        first.amount_given = 100.0;
        let mut second = submission("Pothos", date(2024, 1, 8), 6.0);
        second.amount_given = 300.0;

        log.add_record(&catalog, first).unwrap();
        log.add_record(&catalog, second).unwrap();

        let usage = log.water_usage();
        assert_eq!(usage.len(), 2);
        assert_eq!(usage[0].common_name, "Pothos");
        assert_eq!(usage[0].amount_given, 100.0);
        assert_eq!(usage[1].amount_given, 300.0);
        assert!(usage.iter().all(|sample| sample.typical_water == 250.0));
    }

    #[test]
    fn clear_discards_the_whole_session() {
        let catalog = Catalog::builtin();
        let mut log = CareLog::new();

        log.add_record(&catalog, submission("Fiddle Leaf Fig", date(2024, 1, 1), 6.0)).unwrap();
        log.add_record(&catalog, submission("Peace Lily", date(2024, 1, 1), 4.0)).unwrap();
        assert_eq!(log.len(), 2);

        log.clear();

        assert!(log.is_empty());
        assert_eq!(log.due_for_watering(date(2024, 12, 31)).count(), 0);
        assert!(log.water_usage().is_empty());
    }
}
