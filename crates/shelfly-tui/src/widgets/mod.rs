//! Small reusable rendering helpers shared across screens.

pub mod fmt;
pub mod select_button;
