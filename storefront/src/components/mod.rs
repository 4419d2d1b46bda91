//! Shared view components.

mod option_popup;
mod spin_button;

pub use option_popup::{last_path_segment, OptionPopup};
pub use spin_button::{quantity_callbacks, SpinButton};
