//! Reusable form controls
//!
//! Inputs, selects, checkboxes, password fields with a visibility toggle,
//! and the buttons that drive the card wizard.

mod button;
mod eye_icon;
mod input;
mod password;

pub use button::*;
pub use eye_icon::*;
pub use input::*;
pub use password::*;
