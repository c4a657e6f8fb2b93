//! Tab strip and side menu agree on the active top-level destination.

mod common;

use common::test_config;
use fieldsales::config::{Destination, Glyph, MenuEntry};
use fieldsales::nav::{active_destination, active_menu_entry, menu_entry_is_active};
use fieldsales::nav::route::normalize;

const LOCATIONS: &[&str] = &[
    "/",
    "/dashboard",
    "/dashboard/",
    "/dealers",
    "/dealers/info",
    "/dealers/credit-note",
    "/dealersx",
    "/orders",
    "/orders/place",
    "/orders/track/42",
    "/inventory",
    "/inventory/item/7",
    "/field-development",
    "/settlement",
    "/unknown",
    "/(auth)",
];

fn assert_consistent(destinations: &[Destination], menu: &[MenuEntry]) {
    for location in LOCATIONS {
        let tab = &destinations[active_destination(destinations, location)];
        let Some(entry) = active_menu_entry(menu, location) else {
            continue;
        };
        let entry = &menu[entry];
        // When both highlight, they point at the same section.
        if destinations.iter().any(|d| normalize(&d.path) == normalize(&entry.path)) {
            assert_eq!(
                normalize(&tab.path),
                normalize(&entry.path),
                "tab and menu disagree at {location}"
            );
        }
    }
}

#[test]
fn default_config_is_consistent() {
    let config = test_config();
    assert_consistent(&config.destinations, &config.menu);
}

#[test]
fn nested_tab_paths_prefer_the_longest_match() {
    let destinations = vec![
        Destination {
            label: "Orders".into(),
            glyph: Glyph::Clipboard,
            path: "/orders".into(),
        },
        Destination {
            label: "Track".into(),
            glyph: Glyph::Package,
            path: "/orders/track".into(),
        },
    ];
    let menu = vec![
        MenuEntry::parent(
            "Orders",
            "/orders",
            vec![MenuEntry::leaf("Place Order", "/orders/place")],
        ),
        MenuEntry::parent(
            "Track",
            "/orders/track",
            vec![MenuEntry::leaf("Live", "/orders/track/live")],
        ),
    ];
    assert_eq!(active_destination(&destinations, "/orders/track/live"), 1);
    assert_eq!(active_menu_entry(&menu, "/orders/track/live"), Some(1));
    assert_consistent(&destinations, &menu);
}

#[test]
fn leaf_entries_match_exactly_and_parents_by_prefix() {
    let config = test_config();
    let dashboard = &config.menu[0];
    assert!(!dashboard.has_children());
    assert!(menu_entry_is_active(dashboard, "/dashboard"));
    assert!(!menu_entry_is_active(dashboard, "/dashboard/today"));

    let dealers = config.menu.iter().find(|e| e.label == "Dealers").unwrap();
    assert!(menu_entry_is_active(dealers, "/dealers/info"));
    assert!(menu_entry_is_active(dealers, "/dealers"));
    assert!(!menu_entry_is_active(dealers, "/dealersx"));
}

#[test]
fn unmatched_location_falls_back_to_first_tab() {
    let config = test_config();
    assert_eq!(active_destination(&config.destinations, "/unknown"), 0);
    assert_eq!(active_menu_entry(&config.menu, "/unknown"), None);
}
