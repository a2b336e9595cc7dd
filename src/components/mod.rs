//! Page-level components for campusgate.
//!
//! These bind the core state machines to the webview: the card deck and
//! its fields, the background carousel, the code boxes and the page frame.

mod background_carousel;
mod card_deck;
mod field_control;
mod otp_boxes;
mod page_shell;

pub use background_carousel::BackgroundCarousel;
pub use card_deck::{CardDeck, CARDS_CONTAINER_ID};
pub use field_control::{toggle_id, FieldControl};
pub use otp_boxes::OtpBoxes;
pub use page_shell::PageShell;
