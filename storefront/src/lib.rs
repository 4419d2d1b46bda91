//! OrderUp storefront.
//!
//! Browser-side rendering layer for the food-ordering pages:
//! - Landing page with order-type tabs, recent orders, and menu categories
//! - Menu detail page with quantity selection and customer reviews
//! - Order-customization popup backed by `orderup_menu::store::OptionStore`
//!
//! Menu data comes from server functions under `/api`; until a fetch
//! resolves, every page renders against well-defined default values.

pub mod api;
pub mod app;
pub mod components;
pub mod fixtures;
pub mod pages;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use app::App;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
