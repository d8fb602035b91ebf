use crate::domain::model::{Category, FoodItem, RawFragment};

const VEGAN_COLOR: &str = "#0000FF";
const VEGETARIAN_COLOR: &str = "#00FF00";
const PORK_COLOR: &str = "#8000FF";
const LABEL_PREFIX: char = '-';

/// Decide the category of a menu line from its markup and text.
///
/// Color markers win over the label prefix, so a colored line that starts
/// with `-` is still a dietary item.
pub fn categorize(text: &str, markup: &str) -> Category {
    if markup.contains(VEGAN_COLOR) {
        Category::Vegan
    } else if markup.contains(VEGETARIAN_COLOR) {
        Category::Vegetarian
    } else if markup.contains(PORK_COLOR) {
        Category::Pork
    } else if text.starts_with(LABEL_PREFIX) {
        Category::Label
    } else {
        Category::None
    }
}

/// Classify one fragment. Empty text yields nothing.
pub fn classify(fragment: &RawFragment) -> Option<FoodItem> {
    FoodItem::new(
        fragment.text.as_str(),
        categorize(&fragment.text, &fragment.markup),
    )
}
