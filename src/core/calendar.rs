use crate::domain::model::MealPeriod;
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

pub const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

pub const DAY_ABBREVIATIONS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Hour at which the home page switches from lunch to dinner.
pub const DINNER_FROM_HOUR: u32 = 14;
/// Hour at which the home page switches to tomorrow's lunch.
pub const TOMORROW_FROM_HOUR: u32 = 20;

pub fn day_name(date: NaiveDate) -> &'static str {
    DAY_NAMES[date.weekday().num_days_from_monday() as usize]
}

/// Abbreviations for the six days following `start`, for navigation.
pub fn upcoming_abbreviations(start: NaiveDate) -> Vec<&'static str> {
    let first = start.weekday().num_days_from_monday() as usize;
    (1..7).map(|i| DAY_ABBREVIATIONS[(first + i) % 7]).collect()
}

/// `[00:00 of date, 00:00 of the next day)`.
pub fn day_bounds(date: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
    let start = date.and_time(NaiveTime::MIN);
    (start, start + Duration::days(1))
}

/// Which `(day offset, meal)` the home page shows at `now`.
pub fn meal_for_time(now: NaiveDateTime) -> (usize, MealPeriod) {
    let hour = now.hour();
    if hour < DINNER_FROM_HOUR {
        (0, MealPeriod::Lunch)
    } else if hour < TOMORROW_FROM_HOUR {
        (0, MealPeriod::Dinner)
    } else {
        (1, MealPeriod::Lunch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 16)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn test_day_name() {
        // 2026-10-16 is a Friday
        assert_eq!(day_name(NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()), "Friday");
    }

    #[test]
    fn test_upcoming_abbreviations_wrap_the_week() {
        let friday = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        assert_eq!(
            upcoming_abbreviations(friday),
            vec!["Sat", "Sun", "Mon", "Tue", "Wed", "Thu"]
        );
    }

    #[test]
    fn test_meal_for_time_boundaries() {
        assert_eq!(meal_for_time(at(13, 59)), (0, MealPeriod::Lunch));
        assert_eq!(meal_for_time(at(14, 0)), (0, MealPeriod::Dinner));
        assert_eq!(meal_for_time(at(19, 59)), (0, MealPeriod::Dinner));
        assert_eq!(meal_for_time(at(20, 0)), (1, MealPeriod::Lunch));
    }

    #[test]
    fn test_day_bounds() {
        let date = NaiveDate::from_ymd_opt(2026, 12, 31).unwrap();
        let (start, end) = day_bounds(date);
        assert_eq!(start, date.and_hms_opt(0, 0, 0).unwrap());
        assert_eq!(end.date(), NaiveDate::from_ymd_opt(2027, 1, 1).unwrap());
    }
}
