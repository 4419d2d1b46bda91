//! Shopping cart with lines keyed by menu and selected options.

use serde::{Deserialize, Serialize};

use crate::error::MenuError;
use crate::ids::MenuId;
use crate::money::{Currency, Money};

/// One cart line: a menu, its quantity, and the option selection it was
/// customized with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub menu_id: MenuId,
    pub name: String,
    pub unit_price: Money,
    pub quantity: u32,
    /// Human-readable selection, from `OptionCatalog::selection_summary`.
    pub selected_options: Vec<String>,
}

impl CartLine {
    /// Build a cart line. Rejects a zero quantity.
    pub fn new(
        menu_id: MenuId,
        name: impl Into<String>,
        unit_price: Money,
        quantity: u32,
        selected_options: Vec<String>,
    ) -> Result<Self, MenuError> {
        if quantity == 0 {
            return Err(MenuError::InvalidQuantity(0));
        }
        Ok(Self {
            menu_id,
            name: name.into(),
            unit_price,
            quantity,
            selected_options,
        })
    }

    pub fn subtotal(&self) -> Money {
        self.unit_price * self.quantity as i64
    }
}

/// The shopping cart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    pub lines: Vec<CartLine>,
}

impl Cart {
    /// Add a line, merging with an existing line for the same menu with the
    /// same option selection.
    pub fn add(&mut self, line: CartLine) {
        if let Some(existing) = self.lines.iter_mut().find(|existing| {
            existing.menu_id == line.menu_id && existing.selected_options == line.selected_options
        }) {
            existing.quantity += line.quantity;
        } else {
            self.lines.push(line);
        }
    }

    /// Cart total. All lines are priced in the storefront's currency.
    pub fn total(&self) -> Money {
        let currency = self
            .lines
            .first()
            .map(|line| line.unit_price.currency)
            .unwrap_or(Currency::Krw);
        self.lines
            .iter()
            .fold(Money::zero(currency), |acc, line| acc + line.subtotal())
    }

    /// Total number of items across all lines.
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(quantity: u32, options: &[&str]) -> CartLine {
        CartLine::new(
            MenuId::new("fried-chicken"),
            "Fried Chicken",
            Money::won(18900),
            quantity,
            options.iter().map(|s| s.to_string()).collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let result = CartLine::new(MenuId::new("m"), "M", Money::won(1000), 0, Vec::new());
        assert_eq!(result.unwrap_err(), MenuError::InvalidQuantity(0));
    }

    #[test]
    fn test_subtotal() {
        assert_eq!(line(3, &[]).subtotal(), Money::won(56700));
    }

    #[test]
    fn test_add_merges_same_menu_and_options() {
        let mut cart = Cart::default();
        cart.add(line(1, &["spicy", "cheese x2"]));
        cart.add(line(2, &["spicy", "cheese x2"]));

        assert_eq!(cart.lines.len(), 1);
        assert_eq!(cart.lines[0].quantity, 3);
    }

    #[test]
    fn test_add_keeps_different_selections_apart() {
        let mut cart = Cart::default();
        cart.add(line(1, &["spicy"]));
        cart.add(line(1, &[]));

        assert_eq!(cart.lines.len(), 2);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_total() {
        let mut cart = Cart::default();
        assert!(cart.is_empty());
        assert!(cart.total().is_zero());

        cart.add(line(2, &[]));
        cart.add(line(1, &["spicy"]));
        assert_eq!(cart.total(), Money::won(56700));
        assert_eq!(cart.item_count(), 3);
    }
}
