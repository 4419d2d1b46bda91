//! Menu catalog types: menus, menu groups, reviews, and order types.
//!
//! Field names serialize in camelCase to match the ordering backend's JSON.

use crate::ids::MenuId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// How an order is handed to the customer. Drives the landing page tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderType {
    #[default]
    Takeout,
    DineIn,
    Delivery,
}

impl OrderType {
    /// All order types, in tab order.
    pub const ALL: [OrderType; 3] = [OrderType::Takeout, OrderType::DineIn, OrderType::Delivery];

    /// Tab label.
    pub fn label(&self) -> &'static str {
        match self {
            OrderType::Takeout => "Takeout",
            OrderType::DineIn => "Dine-in",
            OrderType::Delivery => "Delivery",
        }
    }

    /// Notice line shown under the active tab.
    pub fn notice(&self) -> &'static str {
        match self {
            OrderType::Takeout => "Packed up and ready for you to take away.",
            OrderType::DineIn => "Prepared for you to enjoy at the restaurant.",
            OrderType::Delivery => "Delivered to wherever you are.",
        }
    }

    /// Order type at a tab position.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Tab position of this order type.
    pub fn index(&self) -> usize {
        match self {
            OrderType::Takeout => 0,
            OrderType::DineIn => 1,
            OrderType::Delivery => 2,
        }
    }
}

/// A customer review on a menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub reviewer: String,
    pub content: String,
    /// Star rating, 1 through 5.
    pub rating: u8,
}

/// A full menu, as rendered by the detail page.
///
/// `Default` is the placeholder the page renders before its fetch resolves,
/// and the fallback when the fetch fails.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Menu {
    pub id: MenuId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: Money,
    #[serde(default)]
    pub image_url: String,
    /// Short badge text next to the name (e.g., "Popular").
    #[serde(default)]
    pub badge: Option<String>,
    #[serde(default)]
    pub is_popular: bool,
    /// Customer photo URLs.
    #[serde(default)]
    pub pictures: Vec<String>,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

/// A menu listing entry: recent orders and group listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuSummary {
    pub id: MenuId,
    pub name: String,
    pub price: Money,
    #[serde(default)]
    pub is_popular: bool,
    #[serde(default)]
    pub image_url: String,
}

/// A category of menus, driving the category tab strip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuGroup {
    /// Category slug (e.g., "recommends").
    pub category: String,
    /// Human-readable category name.
    pub category_name: String,
    #[serde(default)]
    pub items: Vec<MenuSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_type_tab_order() {
        assert_eq!(OrderType::from_index(0), Some(OrderType::Takeout));
        assert_eq!(OrderType::from_index(2), Some(OrderType::Delivery));
        assert_eq!(OrderType::from_index(3), None);
        for ty in OrderType::ALL {
            assert_eq!(OrderType::from_index(ty.index()), Some(ty));
        }
    }

    #[test]
    fn test_order_type_labels() {
        assert_eq!(OrderType::DineIn.label(), "Dine-in");
        assert!(OrderType::Delivery.notice().contains("Delivered"));
    }

    #[test]
    fn test_default_menu_is_renderable() {
        let menu = Menu::default();
        assert_eq!(menu.name, "");
        assert!(menu.price.is_zero());
        assert!(menu.pictures.is_empty());
        assert!(menu.reviews.is_empty());
    }

    #[test]
    fn test_menu_deserializes_from_backend_shape() {
        let json = r#"{
            "id": "fried-chicken",
            "name": "Fried Chicken",
            "description": "Crispy, twice-fried.",
            "price": {"amount": 18900},
            "imageUrl": "/img/fried-chicken.jpg",
            "badge": "Popular",
            "isPopular": true,
            "pictures": ["/img/p1.jpg"],
            "reviews": [{"reviewer": "mina", "content": "So good", "rating": 5}]
        }"#;
        let menu: Menu = serde_json::from_str(json).unwrap();
        assert_eq!(menu.id.as_str(), "fried-chicken");
        assert_eq!(menu.price, Money::won(18900));
        assert_eq!(menu.badge.as_deref(), Some("Popular"));
        assert_eq!(menu.reviews[0].rating, 5);
    }

    #[test]
    fn test_menu_group_deserializes_without_items() {
        let json = r#"{"category": "recommends", "categoryName": "Recommended"}"#;
        let group: MenuGroup = serde_json::from_str(json).unwrap();
        assert_eq!(group.category, "recommends");
        assert!(group.items.is_empty());
    }
}
