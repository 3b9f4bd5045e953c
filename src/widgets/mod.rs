//! Reusable UI widgets

mod date_input;
mod filter_controls;

pub use date_input::DateInput;
pub use filter_controls::FilterControls;
