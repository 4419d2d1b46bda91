//! Order-customization option catalog and its pure state transitions.
//!
//! A catalog is loaded once per menu and never mutated in place: every
//! operation returns a new catalog that rebuilds only the touched sequence
//! and shares the siblings through `Arc`. A renderer holding the previous
//! value observes no change while the next value is being computed.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{MenuError, OptionKind};

/// A yes/no base option (e.g., "spicy").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseOption {
    pub name: String,
    #[serde(default)]
    pub is_selected: bool,
}

/// A single-select topping option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToppingSelectOption {
    pub name: String,
    #[serde(default)]
    pub is_selected: bool,
}

/// A topping ordered by amount. The amount is unsigned, so non-negativity
/// holds by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToppingAmountOption {
    pub name: String,
    #[serde(default)]
    pub amount: u32,
}

/// The customizable options of one menu.
///
/// `Default` is the well-defined empty catalog; the popup renders against
/// it until the asynchronous load completes. Within each sequence, `name`
/// uniquely identifies an option.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionCatalog {
    #[serde(default)]
    pub base_options: Arc<Vec<BaseOption>>,
    #[serde(default)]
    pub topping_select_options: Arc<Vec<ToppingSelectOption>>,
    #[serde(default)]
    pub topping_amount_options: Arc<Vec<ToppingAmountOption>>,
}

impl OptionCatalog {
    /// True when no sequence has any entries (the pre-load state).
    pub fn is_empty(&self) -> bool {
        self.base_options.is_empty()
            && self.topping_select_options.is_empty()
            && self.topping_amount_options.is_empty()
    }

    /// Flip `is_selected` of the named base option.
    pub fn toggle_base_option(&self, name: &str) -> Result<Self, MenuError> {
        let base_options = replace_entry(
            &self.base_options,
            OptionKind::Base,
            name,
            |o| o.name == name,
            |o| BaseOption {
                is_selected: !o.is_selected,
                ..o.clone()
            },
        )?;
        Ok(Self {
            base_options,
            ..self.clone()
        })
    }

    /// Flip `is_selected` of the named single-select topping option.
    pub fn toggle_topping_select_option(&self, name: &str) -> Result<Self, MenuError> {
        let topping_select_options = replace_entry(
            &self.topping_select_options,
            OptionKind::ToppingSelect,
            name,
            |o| o.name == name,
            |o| ToppingSelectOption {
                is_selected: !o.is_selected,
                ..o.clone()
            },
        )?;
        Ok(Self {
            topping_select_options,
            ..self.clone()
        })
    }

    /// Increment the named topping amount by one. No upper bound.
    pub fn increase_option_amount(&self, name: &str) -> Result<Self, MenuError> {
        let topping_amount_options = replace_entry(
            &self.topping_amount_options,
            OptionKind::ToppingAmount,
            name,
            |o| o.name == name,
            |o| ToppingAmountOption {
                amount: o.amount + 1,
                ..o.clone()
            },
        )?;
        Ok(Self {
            topping_amount_options,
            ..self.clone()
        })
    }

    /// Decrement the named topping amount by one, floor-clamped at zero:
    /// decrementing an amount of zero returns a catalog equal to the input.
    pub fn decrease_option_amount(&self, name: &str) -> Result<Self, MenuError> {
        let current = self
            .topping_amount_options
            .iter()
            .find(|o| o.name == name)
            .ok_or_else(|| MenuError::option_not_found(OptionKind::ToppingAmount, name))?;
        if current.amount == 0 {
            return Ok(self.clone());
        }
        let topping_amount_options = replace_entry(
            &self.topping_amount_options,
            OptionKind::ToppingAmount,
            name,
            |o| o.name == name,
            |o| ToppingAmountOption {
                amount: o.amount - 1,
                ..o.clone()
            },
        )?;
        Ok(Self {
            topping_amount_options,
            ..self.clone()
        })
    }

    /// Cart-line description of the current selection: selected base and
    /// topping names, amount toppings as `name xN`.
    pub fn selection_summary(&self) -> Vec<String> {
        let mut summary = Vec::new();
        for option in self.base_options.iter().filter(|o| o.is_selected) {
            summary.push(option.name.clone());
        }
        for option in self.topping_select_options.iter().filter(|o| o.is_selected) {
            summary.push(option.name.clone());
        }
        for option in self.topping_amount_options.iter().filter(|o| o.amount > 0) {
            summary.push(format!("{} x{}", option.name, option.amount));
        }
        summary
    }
}

/// Rebuild one sequence with the matched entry replaced. The returned `Arc`
/// is fresh; the caller keeps sharing every sibling sequence.
fn replace_entry<T: Clone>(
    seq: &Arc<Vec<T>>,
    kind: OptionKind,
    name: &str,
    matches: impl Fn(&T) -> bool,
    update: impl FnOnce(&T) -> T,
) -> Result<Arc<Vec<T>>, MenuError> {
    let index = seq
        .iter()
        .position(matches)
        .ok_or_else(|| MenuError::option_not_found(kind, name))?;
    let mut next: Vec<T> = seq.as_ref().clone();
    next[index] = update(&seq[index]);
    Ok(Arc::new(next))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> OptionCatalog {
        OptionCatalog {
            base_options: Arc::new(vec![
                BaseOption {
                    name: "spicy".to_string(),
                    is_selected: false,
                },
                BaseOption {
                    name: "boneless".to_string(),
                    is_selected: true,
                },
            ]),
            topping_select_options: Arc::new(vec![
                ToppingSelectOption {
                    name: "honey glaze".to_string(),
                    is_selected: false,
                },
                ToppingSelectOption {
                    name: "soy glaze".to_string(),
                    is_selected: false,
                },
            ]),
            topping_amount_options: Arc::new(vec![
                ToppingAmountOption {
                    name: "cheese".to_string(),
                    amount: 0,
                },
                ToppingAmountOption {
                    name: "pickles".to_string(),
                    amount: 2,
                },
            ]),
        }
    }

    #[test]
    fn test_default_catalog_is_empty() {
        assert!(OptionCatalog::default().is_empty());
        assert!(!sample_catalog().is_empty());
    }

    #[test]
    fn test_toggle_base_option_flips_only_target() {
        let catalog = sample_catalog();
        let next = catalog.toggle_base_option("spicy").unwrap();

        assert!(next.base_options[0].is_selected);
        // Sibling entry untouched.
        assert!(next.base_options[1].is_selected);
        // Sibling sequences shared, not copied.
        assert!(Arc::ptr_eq(
            &catalog.topping_select_options,
            &next.topping_select_options
        ));
        assert!(Arc::ptr_eq(
            &catalog.topping_amount_options,
            &next.topping_amount_options
        ));
        // The original catalog observed no mutation.
        assert!(!catalog.base_options[0].is_selected);
    }

    #[test]
    fn test_toggle_base_option_round_trips() {
        let catalog = sample_catalog();
        let back = catalog
            .toggle_base_option("spicy")
            .unwrap()
            .toggle_base_option("spicy")
            .unwrap();
        assert_eq!(back, catalog);
    }

    #[test]
    fn test_toggle_topping_select_option() {
        let catalog = sample_catalog();
        let next = catalog.toggle_topping_select_option("honey glaze").unwrap();
        assert!(next.topping_select_options[0].is_selected);
        assert!(!next.topping_select_options[1].is_selected);
        assert!(Arc::ptr_eq(&catalog.base_options, &next.base_options));
    }

    #[test]
    fn test_increase_option_amount() {
        let catalog = sample_catalog();
        let next = catalog.increase_option_amount("pickles").unwrap();
        assert_eq!(next.topping_amount_options[1].amount, 3);
        assert_eq!(next.topping_amount_options[0].amount, 0);
        assert_eq!(catalog.topping_amount_options[1].amount, 2);
    }

    #[test]
    fn test_decrease_option_amount() {
        let catalog = sample_catalog();
        let next = catalog.decrease_option_amount("pickles").unwrap();
        assert_eq!(next.topping_amount_options[1].amount, 1);
    }

    #[test]
    fn test_decrease_at_zero_is_a_no_op() {
        let catalog = sample_catalog();
        let next = catalog.decrease_option_amount("cheese").unwrap();
        assert_eq!(next, catalog);
        assert_eq!(next.topping_amount_options[0].amount, 0);
    }

    #[test]
    fn test_amount_never_goes_negative() {
        let mut catalog = sample_catalog();
        for _ in 0..5 {
            catalog = catalog.decrease_option_amount("cheese").unwrap();
        }
        catalog = catalog.increase_option_amount("cheese").unwrap();
        catalog = catalog.decrease_option_amount("cheese").unwrap();
        catalog = catalog.decrease_option_amount("cheese").unwrap();
        assert_eq!(catalog.topping_amount_options[0].amount, 0);
    }

    #[test]
    fn test_unknown_name_is_an_error_and_leaves_state_observable() {
        let catalog = sample_catalog();
        let err = catalog.toggle_base_option("unknown").unwrap_err();
        assert_eq!(
            err,
            MenuError::option_not_found(OptionKind::Base, "unknown")
        );
        // The input catalog is untouched and still usable.
        assert_eq!(catalog, sample_catalog());

        assert!(catalog.toggle_topping_select_option("unknown").is_err());
        assert!(catalog.increase_option_amount("unknown").is_err());
        assert!(catalog.decrease_option_amount("unknown").is_err());
    }

    #[test]
    fn test_operations_do_not_cross_sequences() {
        // "cheese" exists only in the amount sequence.
        let catalog = sample_catalog();
        assert!(catalog.toggle_base_option("cheese").is_err());
        assert!(catalog.toggle_topping_select_option("cheese").is_err());
    }

    #[test]
    fn test_selection_summary() {
        let catalog = sample_catalog()
            .toggle_base_option("spicy")
            .unwrap()
            .toggle_topping_select_option("soy glaze")
            .unwrap();
        assert_eq!(
            catalog.selection_summary(),
            vec!["spicy", "boneless", "soy glaze", "pickles x2"]
        );
    }

    #[test]
    fn test_deserializes_from_backend_shape() {
        let json = r#"{
            "baseOptions": [{"name": "spicy", "isSelected": false}],
            "toppingSelectOptions": [{"name": "honey glaze"}],
            "toppingAmountOptions": [{"name": "cheese", "amount": 2}]
        }"#;
        let catalog: OptionCatalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.base_options[0].name, "spicy");
        assert!(!catalog.topping_select_options[0].is_selected);
        assert_eq!(catalog.topping_amount_options[0].amount, 2);
    }

    #[test]
    fn test_partial_payload_fills_empty_sequences() {
        let catalog: OptionCatalog = serde_json::from_str("{}").unwrap();
        assert!(catalog.is_empty());
    }
}
