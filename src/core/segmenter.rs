use crate::core::classifier::classify;
use crate::domain::model::{FoodItem, RawFragment};

pub const LUNCH_SENTINEL: &str = "Lunch";
pub const DINNER_SENTINEL: &str = "Dinner";
pub const FOOTER_SENTINEL: &str = "Powered by FoodPro";

/// How the FoodPro footer line is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FooterPolicy {
    /// The footer is an ordinary fragment.
    #[default]
    Ignore,
    /// The footer closes whichever section is open.
    EndsDinner,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Preamble,
    Lunch,
    Dinner,
    Closed,
}

/// Classified items of one hall, split by meal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MealSegments {
    pub lunch: Vec<FoodItem>,
    pub dinner: Vec<FoodItem>,
}

impl MealSegments {
    pub fn is_empty(&self) -> bool {
        self.lunch.is_empty() && self.dinner.is_empty()
    }
}

/// Split one hall's fragment stream into lunch and dinner items.
///
/// State starts fresh for every call, so each hall is segmented on its own.
pub fn segment(fragments: &[RawFragment], footer: FooterPolicy) -> MealSegments {
    let mut section = Section::Preamble;
    let mut segments = MealSegments::default();

    for fragment in fragments {
        match fragment.text.as_str() {
            LUNCH_SENTINEL => {
                section = Section::Lunch;
                continue;
            }
            DINNER_SENTINEL => {
                section = Section::Dinner;
                continue;
            }
            FOOTER_SENTINEL if footer == FooterPolicy::EndsDinner => {
                section = Section::Closed;
                continue;
            }
            _ => {}
        }

        let target = match section {
            Section::Lunch => &mut segments.lunch,
            Section::Dinner => &mut segments.dinner,
            Section::Preamble | Section::Closed => continue,
        };

        if let Some(item) = classify(fragment) {
            target.push(item);
        }
    }

    segments
}

/// Whether the stream carries at least one meal sentinel.
pub fn has_meal_sentinel(fragments: &[RawFragment]) -> bool {
    fragments
        .iter()
        .any(|f| f.text == LUNCH_SENTINEL || f.text == DINNER_SENTINEL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Category;

    fn plain(texts: &[&str]) -> Vec<RawFragment> {
        texts.iter().map(|t| RawFragment::plain(*t)).collect()
    }

    fn texts(items: &[FoodItem]) -> Vec<&str> {
        items.iter().map(FoodItem::text).collect()
    }

    #[test]
    fn test_splits_lunch_and_dinner() {
        let fragments = plain(&[
            "Lunch",
            "-- Main Entree --",
            "Chicken",
            "-- Vegetarian & Vegan Entree --",
            "Tofu",
            "-- Side --",
            "Rice",
            "Dinner",
            "Soup",
        ]);

        let segments = segment(&fragments, FooterPolicy::Ignore);
        assert_eq!(
            texts(&segments.lunch),
            vec![
                "-- Main Entree --",
                "Chicken",
                "-- Vegetarian & Vegan Entree --",
                "Tofu",
                "-- Side --",
                "Rice"
            ]
        );
        assert_eq!(texts(&segments.dinner), vec!["Soup"]);
        assert_eq!(segments.lunch[0].category(), Category::Label);
        assert_eq!(segments.lunch[1].category(), Category::None);
    }

    #[test]
    fn test_no_sentinels_gives_empty_lists() {
        let fragments = plain(&["Menus for Monday", "Chicken", "Rice"]);
        let segments = segment(&fragments, FooterPolicy::Ignore);
        assert!(segments.is_empty());
        assert!(!has_meal_sentinel(&fragments));
    }

    #[test]
    fn test_preamble_and_empty_fragments_dropped() {
        let fragments = plain(&["Whitman College", "Lunch", "", "Pasta", "", "Dinner", ""]);
        let segments = segment(&fragments, FooterPolicy::Ignore);
        assert_eq!(texts(&segments.lunch), vec!["Pasta"]);
        assert!(segments.dinner.is_empty());
    }

    #[test]
    fn test_footer_policy() {
        let fragments = plain(&["Dinner", "Soup", "Powered by FoodPro", "Nutrition Key"]);

        let ignored = segment(&fragments, FooterPolicy::Ignore);
        assert_eq!(
            texts(&ignored.dinner),
            vec!["Soup", "Powered by FoodPro", "Nutrition Key"]
        );

        let ended = segment(&fragments, FooterPolicy::EndsDinner);
        assert_eq!(texts(&ended.dinner), vec!["Soup"]);
    }

    #[test]
    fn test_lunch_after_dinner_switches_back() {
        let fragments = plain(&["Dinner", "Soup", "Lunch", "Salad"]);
        let segments = segment(&fragments, FooterPolicy::Ignore);
        assert_eq!(texts(&segments.lunch), vec!["Salad"]);
        assert_eq!(texts(&segments.dinner), vec!["Soup"]);
    }
}
