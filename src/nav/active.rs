//! Active-route derivation for the tab strip and the side menu.
//!
//! Both highlights are computed from the same location with the same matching
//! rules, so they cannot disagree on the active top-level destination.

use crate::config::{Destination, MenuEntry};
use crate::nav::route::{is_within, normalize};

/// An entry is active when the location equals its target, or when it owns
/// sub-destinations and the location is a strict descendant of its target.
pub fn menu_entry_is_active(entry: &MenuEntry, location: &str) -> bool {
    if entry.has_children() {
        is_within(location, &entry.path)
    } else {
        normalize(location) == normalize(&entry.path)
    }
}

/// Index of the highlighted top-level menu entry, if any.
pub fn active_menu_entry(menu: &[MenuEntry], location: &str) -> Option<usize> {
    menu.iter()
        .enumerate()
        .filter(|(_, entry)| menu_entry_is_active(entry, location))
        .max_by_key(|(_, entry)| normalize(&entry.path).len())
        .map(|(idx, _)| idx)
}

/// Index of the active tab. Tabs own their whole subtree; the longest
/// matching path wins and the first tab is the fallback, so exactly one
/// destination is always active.
pub fn active_destination(destinations: &[Destination], location: &str) -> usize {
    destinations
        .iter()
        .enumerate()
        .filter(|(_, destination)| is_within(location, &destination.path))
        .max_by_key(|(_, destination)| normalize(&destination.path).len())
        .map(|(idx, _)| idx)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn leaf_entry_matches_exactly() {
        let entry = MenuEntry::leaf("Inventory", "/inventory");
        assert!(menu_entry_is_active(&entry, "/inventory"));
        assert!(menu_entry_is_active(&entry, "/inventory/"));
        assert!(!menu_entry_is_active(&entry, "/inventory/stock"));
    }

    #[test]
    fn parent_entry_matches_descendants() {
        let config = Config::default();
        let orders = &config.menu[2];
        assert!(menu_entry_is_active(orders, "/orders"));
        assert!(menu_entry_is_active(orders, "/orders/place"));
        assert!(!menu_entry_is_active(orders, "/ordersx"));
    }

    #[test]
    fn unknown_location_falls_back_to_first_tab() {
        let config = Config::default();
        assert_eq!(active_destination(&config.destinations, "/nowhere"), 0);
        assert_eq!(active_destination(&config.destinations, "/settlement"), 5);
        assert_eq!(active_destination(&config.destinations, "/orders/track"), 2);
    }
}
