//! campusgate UI Components
//!
//! Dioxus controls for the account pages. Each control renders one form
//! field from the core model and reports interactions back through event
//! handlers; none of them own validation or session state.
//!
//! ## Styling hooks
//!
//! - `form-input` marks required controls
//! - `box-shadow` inline styles carry validation markers
//! - `--error-color` / `--next-btn-background-color` drive marker colors

pub mod components;

pub use components::*;
