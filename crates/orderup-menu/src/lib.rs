//! Menu and ordering domain types for the OrderUp storefront.
//!
//! This crate holds everything the storefront renders and mutates, with no
//! view code of its own:
//!
//! - **Catalog**: Menus, menu groups, reviews, order types
//! - **Options**: The order-customization option catalog and its pure,
//!   copy-on-write state transitions
//! - **Store**: An observable container that replaces the option catalog
//!   wholesale and notifies subscribers
//! - **Cart**: Cart lines keyed by menu and selected options
//!
//! # Example
//!
//! ```rust,ignore
//! use orderup_menu::prelude::*;
//!
//! let store = OptionStore::new();
//! store.load(catalog_from_backend);
//!
//! // Every operation produces a new catalog; siblings are shared.
//! store.toggle_base_option("spicy")?;
//! store.increase_option_amount("cheese")?;
//!
//! let summary = store.current().selection_summary();
//! ```

pub mod cart;
pub mod catalog;
pub mod error;
pub mod ids;
pub mod money;
pub mod options;
pub mod store;

pub use error::{MenuError, OptionKind};
pub use ids::MenuId;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{MenuError, OptionKind};
    pub use crate::ids::MenuId;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Menu, MenuGroup, MenuSummary, OrderType, Review};

    // Options
    pub use crate::options::{
        BaseOption, OptionCatalog, ToppingAmountOption, ToppingSelectOption,
    };

    // Store
    pub use crate::store::{OptionStore, SubscriptionId};

    // Cart
    pub use crate::cart::{Cart, CartLine};
}
