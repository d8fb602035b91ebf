//! Plain data handed to the page renderer and the history API.

use crate::core::calendar::{day_name, meal_for_time, upcoming_abbreviations};
use crate::domain::model::{HallMenu, MealPeriod, MenuRecord, WeekWindow};
use crate::utils::error::{ApiErrorPayload, MenuError, Result};
use chrono::NaiveDateTime;
use serde::Serialize;

/// Data for `meal.html`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MealView {
    pub meal: MealPeriod,
    pub day: &'static str,
    pub next_week: Vec<&'static str>,
    pub halls: HallMenu,
}

/// Data for `index.html` (the about page).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AboutView {
    pub day: &'static str,
    pub next_week: Vec<&'static str>,
}

pub fn meal_view(window: &WeekWindow, meal: MealPeriod, index: usize) -> Result<MealView> {
    let day = window
        .day(index)
        .ok_or(MenuError::DayOutOfRange { index })?;

    Ok(MealView {
        meal,
        day: day_name(day.date),
        next_week: upcoming_abbreviations(window.start()),
        halls: day.meal(meal).clone(),
    })
}

pub fn index_view(window: &WeekWindow, now: NaiveDateTime) -> Result<MealView> {
    let (offset, meal) = meal_for_time(now);
    meal_view(window, meal, offset)
}

pub fn about_view(window: &WeekWindow) -> AboutView {
    AboutView {
        day: day_name(window.start()),
        next_week: upcoming_abbreviations(window.start()),
    }
}

/// Outcome of `/api/<month>/<day>/<year>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiResponse {
    Found(MenuRecord),
    Failed { status: u16, payload: ApiErrorPayload },
}

impl ApiResponse {
    pub fn status(&self) -> u16 {
        match self {
            ApiResponse::Found(_) => 200,
            ApiResponse::Failed { status, .. } => *status,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        let json = match self {
            ApiResponse::Found(record) => serde_json::to_string(record)?,
            ApiResponse::Failed { payload, .. } => serde_json::to_string(payload)?,
        };
        Ok(json)
    }
}

impl From<Result<MenuRecord>> for ApiResponse {
    fn from(result: Result<MenuRecord>) -> Self {
        match result {
            Ok(record) => ApiResponse::Found(record),
            Err(e) => ApiResponse::Failed {
                status: e.status_code(),
                payload: e.to_api_payload(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Category, DayMenu, FoodItem, Hall, WINDOW_DAYS};
    use chrono::{Duration, NaiveDate};

    fn window() -> WeekWindow {
        let start = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        let days = (0..WINDOW_DAYS)
            .map(|i| {
                let mut day = DayMenu::empty(start + Duration::days(i as i64));
                day.lunch.set(
                    Hall::Whitman,
                    vec![FoodItem::new(format!("Lunch {}", i), Category::None).unwrap()],
                );
                day.dinner.set(
                    Hall::Whitman,
                    vec![FoodItem::new(format!("Dinner {}", i), Category::None).unwrap()],
                );
                day
            })
            .collect();
        WeekWindow::new(start, days)
    }

    fn at(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 16)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_meal_view_for_offset() {
        let view = meal_view(&window(), MealPeriod::Dinner, 2).unwrap();
        assert_eq!(view.day, "Sunday");
        assert_eq!(view.next_week, vec!["Sat", "Sun", "Mon", "Tue", "Wed", "Thu"]);
        assert_eq!(view.halls.get(Hall::Whitman)[0].text(), "Dinner 2");
    }

    #[test]
    fn test_out_of_range_index() {
        let err = meal_view(&window(), MealPeriod::Lunch, 7).unwrap_err();
        assert!(matches!(err, MenuError::DayOutOfRange { index: 7 }));
    }

    #[test]
    fn test_index_view_follows_time_of_day() {
        let w = window();
        assert_eq!(index_view(&w, at(11)).unwrap().halls.get(Hall::Whitman)[0].text(), "Lunch 0");
        assert_eq!(index_view(&w, at(17)).unwrap().halls.get(Hall::Whitman)[0].text(), "Dinner 0");
        let late = index_view(&w, at(21)).unwrap();
        assert_eq!(late.meal, MealPeriod::Lunch);
        assert_eq!(late.day, "Saturday");
        assert_eq!(late.halls.get(Hall::Whitman)[0].text(), "Lunch 1");
    }

    #[test]
    fn test_about_view() {
        let view = about_view(&window());
        assert_eq!(view.day, "Friday");
        assert_eq!(view.next_week.len(), 6);
    }

    #[test]
    fn test_api_response_from_errors() {
        let date = NaiveDate::from_ymd_opt(2016, 3, 7).unwrap();
        let missing = ApiResponse::from(Err::<MenuRecord, _>(MenuError::NotFound { date }));
        assert_eq!(missing.status(), 404);
        assert!(missing.to_json().unwrap().contains("DoesNotExist"));

        let duplicated =
            ApiResponse::from(Err::<MenuRecord, _>(MenuError::IntegrityError { date, count: 2 }));
        assert_eq!(duplicated.status(), 500);
    }
}
