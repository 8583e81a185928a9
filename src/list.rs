//! List Utilities
//!
//! Pure helpers for the render-time filter and the optimistic in-place
//! updates applied before a network call completes.

use crate::models::Item;

/// Items whose name contains `search` case-insensitively, in list order.
/// An empty search matches everything.
pub fn filter_items(items: &[Item], search: &str) -> Vec<Item> {
    let needle = search.to_lowercase();
    items
        .iter()
        .filter(|it| it.item.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Flip the checked flag of the item with `id`.
/// Returns the new value, or None if the id is not in the list.
pub fn toggle_checked(items: &mut [Item], id: &str) -> Option<bool> {
    let item = items.iter_mut().find(|it| it.id == id)?;
    item.checked = !item.checked;
    Some(item.checked)
}

/// Remove the item with `id`. Returns true if something was removed.
pub fn remove_item(items: &mut Vec<Item>, id: &str) -> bool {
    let before = items.len();
    items.retain(|it| it.id != id);
    items.len() != before
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Item;

    fn make_item(id: &str, name: &str, checked: bool) -> Item {
        Item {
            id: id.to_string(),
            item: name.to_string(),
            checked,
        }
    }

    fn sample() -> Vec<Item> {
        vec![
            make_item("1", "Milk", false),
            make_item("2", "Bread", false),
            make_item("3", "Almond milk", true),
        ]
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let items = sample();

        let visible = filter_items(&items, "mi");
        assert_eq!(visible.len(), 2);
        assert_eq!(visible[0].item, "Milk");
        assert_eq!(visible[1].item, "Almond milk");

        let visible = filter_items(&items, "BREAD");
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "2");
    }

    #[test]
    fn test_empty_search_matches_everything() {
        let items = sample();
        assert_eq!(filter_items(&items, ""), items);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let items = sample();
        let once = filter_items(&items, "milk");
        let twice = filter_items(&once, "milk");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_filter_with_no_match_is_empty() {
        assert!(filter_items(&sample(), "durian").is_empty());
    }

    #[test]
    fn test_toggle_flips_only_the_target() {
        let mut items = sample();

        assert_eq!(toggle_checked(&mut items, "1"), Some(true));
        assert!(items[0].checked);
        assert!(!items[1].checked);
        assert!(items[2].checked);

        // Flipping again restores the original value
        assert_eq!(toggle_checked(&mut items, "1"), Some(false));
        assert!(!items[0].checked);
    }

    #[test]
    fn test_toggle_unknown_id_is_a_no_op() {
        let mut items = sample();
        assert_eq!(toggle_checked(&mut items, "99"), None);
        assert_eq!(items, sample());
    }

    #[test]
    fn test_remove_drops_exactly_one_item() {
        let mut items = sample();

        assert!(remove_item(&mut items, "2"));
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|it| it.id != "2"));

        assert!(!remove_item(&mut items, "2"));
        assert_eq!(items.len(), 2);
    }
}
