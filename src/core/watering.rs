use chrono::{
    Days,
    NaiveDate,
};

/// Fraction of the base interval shed (or gained) per hour of sunlight
/// above (or below) the species average.
pub const SUNLIGHT_RATE: f32 = 0.1;

/// A plant is never scheduled more often than once a day.
pub const MIN_INTERVAL_DAYS: u32 = 1;

/// Watering interval in days for a plant getting `actual_sunlight` hours per day.
///
/// At the species average the base interval comes back unchanged. Each hour of
/// sunlight above the average shortens the interval by 10% of the base, and
/// each hour below stretches it by the same amount. The scaled value is
/// rounded to the nearest whole day and floored at one day. Extreme sunlight
/// can drive the scaled value negative; only the final value is floored.
pub fn adjusted_interval(base_interval: u32, avg_sunlight: f32, actual_sunlight: f32) -> u32 {
    let factor = 1.0 - SUNLIGHT_RATE * (actual_sunlight - avg_sunlight);
    let scaled = base_interval as f32 * factor;
    scaled.round().max(MIN_INTERVAL_DAYS as f32) as u32
}

/// Calendar date of the next watering: `last_watered` plus the interval,
/// carried across month and year boundaries.
pub fn next_watering(last_watered: NaiveDate, interval_days: u32) -> NaiveDate {
    last_watered + Days::new(u64::from(interval_days))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn average_sunlight_keeps_the_base_interval() {
        for base in [1, 4, 7, 10, 14, 30] {
            assert_eq!(adjusted_interval(base, 6.0, 6.0), base);
        }
    }

    #[test]
    fn extra_sunlight_shortens_the_interval() {
        // 7 * (1 - 0.1 * 6) = 2.8
        assert_eq!(adjusted_interval(7, 6.0, 12.0), 3);
    }

    #[test]
    fn less_sunlight_stretches_the_interval() {
        // 14 * (1 + 0.1 * 4) = 19.6
        assert_eq!(adjusted_interval(14, 6.0, 2.0), 20);
    }

    #[test]
    fn half_days_round_to_the_nearest_day() {
        // 5 * 1.1 = 5.5
        assert_eq!(adjusted_interval(5, 6.0, 5.0), 6);
    }

    #[test]
    fn interval_never_drops_below_one_day() {
        // 7 * (1 - 0.1 * 24) = -9.8
        assert_eq!(adjusted_interval(7, 6.0, 30.0), 1);

        for hours in 0..=48 {
            assert!(adjusted_interval(7, 6.0, hours as f32) >= MIN_INTERVAL_DAYS);
        }
    }

    #[test]
    fn next_watering_is_plain_calendar_addition() {
        assert_eq!(next_watering(date(2024, 1, 1), 4), date(2024, 1, 5));
    }

    #[test]
    fn next_watering_carries_across_month_boundaries() {
        assert_eq!(next_watering(date(2024, 1, 30), 7), date(2024, 2, 6));
    }

    #[test]
    fn next_watering_respects_leap_years() {
        assert_eq!(next_watering(date(2024, 2, 27), 3), date(2024, 3, 1));
        assert_eq!(next_watering(date(2023, 2, 27), 3), date(2023, 3, 2));
    }

    #[test]
    fn next_watering_carries_across_year_boundaries() {
        assert_eq!(next_watering(date(2023, 12, 30), 5), date(2024, 1, 4));
    }
}
