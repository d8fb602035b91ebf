use crate::domain::model::FoodItem;

pub const MAIN_ENTREE_SENTINEL: &str = "-- Main Entree --";
pub const VEG_ENTREE_SENTINEL: &str = "-- Vegetarian & Vegan Entree --";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Before,
    Main,
    After,
}

/// Move the "Main Entree" block to sit right after the first item.
///
/// The block runs from the main-entree label up to the next label other
/// than the vegetarian/vegan entree label. Everything outside the block keeps
/// its relative order; a list without the label comes back untouched.
pub fn float_main_entrees(items: Vec<FoodItem>) -> Vec<FoodItem> {
    if items.len() <= 1 {
        return items;
    }

    let total = items.len();
    let mut before = Vec::new();
    let mut main = Vec::new();
    let mut after = Vec::new();
    let mut phase = Phase::Before;

    for item in items {
        phase = match phase {
            Phase::Before if item.text() == MAIN_ENTREE_SENTINEL => Phase::Main,
            Phase::Main if item.is_label() && item.text() != VEG_ENTREE_SENTINEL => Phase::After,
            current => current,
        };

        match phase {
            Phase::Before => before.push(item),
            Phase::Main => main.push(item),
            Phase::After => after.push(item),
        }
    }

    let mut reordered = Vec::with_capacity(total);
    let mut before = before.into_iter();
    reordered.extend(before.next());
    reordered.extend(main);
    reordered.extend(before);
    reordered.extend(after);
    reordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::classifier::classify;
    use crate::domain::model::RawFragment;

    fn items(texts: &[&str]) -> Vec<FoodItem> {
        texts
            .iter()
            .filter_map(|t| classify(&RawFragment::plain(*t)))
            .collect()
    }

    fn texts(items: &[FoodItem]) -> Vec<&str> {
        items.iter().map(FoodItem::text).collect()
    }

    #[test]
    fn test_main_block_follows_first_item() {
        let input = items(&[
            "-- Soups --",
            "Minestrone",
            "-- Main Entree --",
            "Roast Chicken",
            "-- Vegetarian & Vegan Entree --",
            "Lentil Stew",
            "-- Desserts --",
            "Brownie",
        ]);

        let output = float_main_entrees(input);
        assert_eq!(
            texts(&output),
            vec![
                "-- Soups --",
                "-- Main Entree --",
                "Roast Chicken",
                "-- Vegetarian & Vegan Entree --",
                "Lentil Stew",
                "Minestrone",
                "-- Desserts --",
                "Brownie",
            ]
        );
    }

    #[test]
    fn test_single_header_places_main_at_index_one() {
        let input = items(&["-- Grill --", "-- Main Entree --", "Meatloaf", "Gravy", "-- Sides --", "Peas"]);
        let count = input.len();

        let output = float_main_entrees(input);
        assert_eq!(output.len(), count);
        assert_eq!(output[1].text(), MAIN_ENTREE_SENTINEL);
        assert_eq!(texts(&output[1..4]), vec!["-- Main Entree --", "Meatloaf", "Gravy"]);
    }

    #[test]
    fn test_without_marker_is_noop() {
        let input = items(&["-- Soups --", "Chowder", "-- Grill --", "Burger"]);
        let output = float_main_entrees(input.clone());
        assert_eq!(output, input);
    }

    #[test]
    fn test_marker_first_is_unchanged() {
        let input = items(&[
            "-- Main Entree --",
            "Chicken",
            "-- Vegetarian & Vegan Entree --",
            "Tofu",
            "-- Side --",
            "Rice",
        ]);
        let output = float_main_entrees(input.clone());
        assert_eq!(output, input);
    }

    #[test]
    fn test_short_lists_unchanged() {
        assert!(float_main_entrees(Vec::new()).is_empty());
        let one = items(&["-- Main Entree --"]);
        assert_eq!(float_main_entrees(one.clone()), one);
    }

    #[test]
    fn test_only_first_block_moves() {
        let input = items(&[
            "-- Deli --",
            "Turkey Club",
            "-- Main Entree --",
            "Lasagna",
            "-- Grill --",
            "-- Main Entree --",
            "Stuffed Peppers",
        ]);

        let output = float_main_entrees(input);
        assert_eq!(
            texts(&output),
            vec![
                "-- Deli --",
                "-- Main Entree --",
                "Lasagna",
                "Turkey Club",
                "-- Grill --",
                "-- Main Entree --",
                "Stuffed Peppers",
            ]
        );
    }
}
