//! Embedded menu data standing in for the ordering backend.
//!
//! The storefront has no persistence layer; the server functions in
//! [`crate::api`] serve these JSON fixtures instead of proxying a live
//! backend. The shapes are exactly what the real backend would return.

use std::collections::HashMap;

use orderup_menu::catalog::{Menu, MenuGroup, MenuSummary};
use orderup_menu::error::MenuError;
use orderup_menu::options::OptionCatalog;

const MENUS_JSON: &str = include_str!("../fixtures/menus.json");
const MENU_GROUPS_JSON: &str = include_str!("../fixtures/menu_groups.json");
const RECENT_ORDERS_JSON: &str = include_str!("../fixtures/recent_orders.json");
const MENU_OPTIONS_JSON: &str = include_str!("../fixtures/menu_options.json");

fn parse<T: serde::de::DeserializeOwned>(json: &str) -> Result<T, MenuError> {
    serde_json::from_str(json).map_err(|e| MenuError::LoadFailure(e.to_string()))
}

/// All menu groups, in category tab order.
pub fn menu_groups() -> Result<Vec<MenuGroup>, MenuError> {
    parse(MENU_GROUPS_JSON)
}

/// The customer's recent orders.
pub fn recent_orders() -> Result<Vec<MenuSummary>, MenuError> {
    parse(RECENT_ORDERS_JSON)
}

/// One menu by id.
pub fn menu(id: &str) -> Result<Menu, MenuError> {
    let menus: Vec<Menu> = parse(MENUS_JSON)?;
    menus
        .into_iter()
        .find(|menu| menu.id.as_str() == id)
        .ok_or_else(|| MenuError::MenuNotFound(id.to_string()))
}

/// The option catalog for one menu.
pub fn menu_options(id: &str) -> Result<OptionCatalog, MenuError> {
    let mut catalogs: HashMap<String, OptionCatalog> = parse(MENU_OPTIONS_JSON)?;
    catalogs
        .remove(id)
        .ok_or_else(|| MenuError::MenuNotFound(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_groups_parse() {
        let groups = menu_groups().unwrap();
        assert!(!groups.is_empty());
        assert_eq!(groups[0].category, "recommends");
        assert!(groups.iter().all(|g| !g.items.is_empty()));
    }

    #[test]
    fn test_recent_orders_parse() {
        let recent = recent_orders().unwrap();
        assert!(!recent.is_empty());
    }

    #[test]
    fn test_menu_lookup() {
        let menu = menu("garlic-fried-chicken").unwrap();
        assert_eq!(menu.name, "Garlic Fried Chicken");
        assert!(!menu.reviews.is_empty());
    }

    #[test]
    fn test_menu_lookup_miss() {
        assert_eq!(
            menu("no-such-menu").unwrap_err(),
            MenuError::MenuNotFound("no-such-menu".to_string())
        );
    }

    #[test]
    fn test_every_menu_has_an_option_catalog() {
        let menus: Vec<Menu> = super::parse(MENUS_JSON).unwrap();
        for m in menus {
            let catalog = menu_options(m.id.as_str()).unwrap();
            assert!(!catalog.is_empty(), "no options for {}", m.id);
        }
    }

    #[test]
    fn test_menu_options_lookup_miss() {
        assert!(menu_options("no-such-menu").is_err());
    }

    #[test]
    fn test_listing_entries_reference_known_menus() {
        let groups = menu_groups().unwrap();
        for group in groups {
            for item in group.items {
                assert!(menu(item.id.as_str()).is_ok(), "unknown menu {}", item.id);
            }
        }
    }
}
