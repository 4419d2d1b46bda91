//! Page-level controllers: tab selection, quantity, popup visibility.

mod detail;
mod menu;

pub use detail::DetailPage;
pub use menu::MenuPage;
