//! Storefront domain error types.

use std::fmt;
use thiserror::Error;

/// Which option sequence a lookup targeted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionKind {
    /// Yes/no base options.
    Base,
    /// Single-select topping options.
    ToppingSelect,
    /// Amount-select topping options.
    ToppingAmount,
}

impl OptionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionKind::Base => "base",
            OptionKind::ToppingSelect => "topping-select",
            OptionKind::ToppingAmount => "topping-amount",
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Errors that can occur in storefront domain operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MenuError {
    /// No option with the given name exists in the targeted sequence.
    #[error("{kind} option not found: {name}")]
    OptionNotFound { kind: OptionKind, name: String },

    /// Menu not found.
    #[error("Menu not found: {0}")]
    MenuNotFound(String),

    /// Invalid quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Menu or option catalog fetch failed.
    #[error("Load failure: {0}")]
    LoadFailure(String),
}

impl MenuError {
    /// Shorthand for a lookup miss in an option sequence.
    pub fn option_not_found(kind: OptionKind, name: impl Into<String>) -> Self {
        MenuError::OptionNotFound {
            kind,
            name: name.into(),
        }
    }
}
