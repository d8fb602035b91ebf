use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Dietary tag or section label attached to a menu line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "")]
    None,
    #[serde(rename = "vegan")]
    Vegan,
    #[serde(rename = "vegetarian")]
    Vegetarian,
    #[serde(rename = "pork")]
    Pork,
    #[serde(rename = "label")]
    Label,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodItem {
    #[serde(rename = "item")]
    text: String,
    #[serde(rename = "type")]
    category: Category,
}

impl FoodItem {
    /// Returns `None` for empty text; every item carries a non-empty name.
    pub fn new(text: impl Into<String>, category: Category) -> Option<Self> {
        let text = text.into();
        if text.is_empty() {
            return None;
        }
        Some(Self { text, category })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn is_label(&self) -> bool {
        self.category == Category::Label
    }
}

/// The six dining halls. Declaration order is the rendering order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hall {
    Wucox,
    Cjl,
    Whitman,
    Roma,
    Forbes,
    Grad,
}

impl Hall {
    pub const ALL: [Hall; 6] = [
        Hall::Wucox,
        Hall::Cjl,
        Hall::Whitman,
        Hall::Roma,
        Hall::Forbes,
        Hall::Grad,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Hall::Wucox => "wucox",
            Hall::Cjl => "cjl",
            Hall::Whitman => "whitman",
            Hall::Roma => "roma",
            Hall::Forbes => "forbes",
            Hall::Grad => "grad",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Hall::Wucox => "Wu/Wilcox",
            Hall::Cjl => "CJL",
            Hall::Whitman => "Whitman",
            Hall::Roma => "Rocky/Mathey",
            Hall::Forbes => "Forbes",
            Hall::Grad => "Graduate College",
        }
    }

    /// FoodPro `locationNum` query value.
    pub fn location_num(self) -> &'static str {
        match self {
            Hall::Roma => "01",
            Hall::Wucox => "02",
            Hall::Forbes => "03",
            Hall::Grad => "04",
            Hall::Cjl => "05",
            Hall::Whitman => "08",
        }
    }

    pub fn from_name(name: &str) -> Option<Hall> {
        Hall::ALL.into_iter().find(|hall| hall.as_str() == name)
    }
}

impl fmt::Display for Hall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealPeriod {
    Lunch,
    Dinner,
}

impl MealPeriod {
    pub fn as_str(self) -> &'static str {
        match self {
            MealPeriod::Lunch => "lunch",
            MealPeriod::Dinner => "dinner",
        }
    }
}

impl fmt::Display for MealPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One meal's items for every hall, iterated in [`Hall::ALL`] order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HallMenu {
    halls: BTreeMap<Hall, Vec<FoodItem>>,
}

impl HallMenu {
    pub fn empty() -> Self {
        Self {
            halls: Hall::ALL.into_iter().map(|hall| (hall, Vec::new())).collect(),
        }
    }

    pub fn get(&self, hall: Hall) -> &[FoodItem] {
        self.halls.get(&hall).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn set(&mut self, hall: Hall, items: Vec<FoodItem>) {
        self.halls.insert(hall, items);
    }

    pub fn iter(&self) -> impl Iterator<Item = (Hall, &[FoodItem])> + '_ {
        Hall::ALL.into_iter().map(move |hall| (hall, self.get(hall)))
    }

    pub fn item_count(&self) -> usize {
        self.halls.values().map(Vec::len).sum()
    }
}

impl Default for HallMenu {
    fn default() -> Self {
        Self::empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayMenu {
    pub date: NaiveDate,
    pub lunch: HallMenu,
    pub dinner: HallMenu,
}

impl DayMenu {
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            lunch: HallMenu::empty(),
            dinner: HallMenu::empty(),
        }
    }

    pub fn meal(&self, meal: MealPeriod) -> &HallMenu {
        match meal {
            MealPeriod::Lunch => &self.lunch,
            MealPeriod::Dinner => &self.dinner,
        }
    }
}

pub const WINDOW_DAYS: usize = 7;

/// Seven consecutive days starting at `start`. Replaced wholesale, never edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekWindow {
    start: NaiveDate,
    days: Vec<DayMenu>,
}

impl WeekWindow {
    /// `days` must hold one entry per date from `start` onwards.
    pub fn new(start: NaiveDate, days: Vec<DayMenu>) -> Self {
        debug_assert_eq!(days.len(), WINDOW_DAYS);
        Self { start, days }
    }

    pub fn empty(start: NaiveDate) -> Self {
        let days = (0..WINDOW_DAYS)
            .map(|offset| DayMenu::empty(start + Duration::days(offset as i64)))
            .collect();
        Self { start, days }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn day(&self, index: usize) -> Option<&DayMenu> {
        self.days.get(index)
    }

    pub fn days(&self) -> &[DayMenu] {
        &self.days
    }
}

/// A persisted snapshot of one day's menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuRecord {
    pub date_modified: NaiveDateTime,
    pub lunch: HallMenu,
    pub dinner: HallMenu,
}

/// One text fragment lifted from the menu page, with its outer markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFragment {
    pub text: String,
    pub markup: String,
}

impl RawFragment {
    pub fn new(text: impl Into<String>, markup: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            markup: markup.into(),
        }
    }

    /// A fragment without any rendering markup.
    pub fn plain(text: impl Into<String>) -> Self {
        let text = text.into();
        let markup = format!("<div>{}</div>", text);
        Self { text, markup }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_food_item_rejects_empty_text() {
        assert!(FoodItem::new("", Category::None).is_none());
        assert!(FoodItem::new("Rice", Category::None).is_some());
    }

    #[test]
    fn test_hall_menu_serializes_in_hall_order() {
        let mut menu = HallMenu::empty();
        menu.set(Hall::Grad, vec![FoodItem::new("Soup", Category::Vegan).unwrap()]);

        let json = serde_json::to_string(&menu).unwrap();
        let wucox = json.find("\"wucox\"").unwrap();
        let cjl = json.find("\"cjl\"").unwrap();
        let grad = json.find("\"grad\"").unwrap();
        assert!(wucox < cjl && cjl < grad);
        assert!(json.contains(r#"{"item":"Soup","type":"vegan"}"#));
    }

    #[test]
    fn test_plain_category_serializes_as_empty_string() {
        let item = FoodItem::new("Grilled Chicken", Category::None).unwrap();
        assert_eq!(
            serde_json::to_string(&item).unwrap(),
            r#"{"item":"Grilled Chicken","type":""}"#
        );
    }

    #[test]
    fn test_location_numbers() {
        let nums: Vec<_> = Hall::ALL.iter().map(|h| h.location_num()).collect();
        assert_eq!(nums, vec!["02", "05", "08", "01", "03", "04"]);
    }

    #[test]
    fn test_empty_window_covers_seven_days() {
        let start = NaiveDate::from_ymd_opt(2026, 12, 29).unwrap();
        let window = WeekWindow::empty(start);
        assert_eq!(window.days().len(), WINDOW_DAYS);
        assert_eq!(window.day(6).unwrap().date, NaiveDate::from_ymd_opt(2027, 1, 4).unwrap());
        assert!(window.day(7).is_none());
    }
}
