//! campusgate Core Library
//!
//! Framework-free state behind the account-creation and login pages.
//!
//! ## Overview
//!
//! The pages are a short wizard of cards. Everything they do on user
//! interaction lives here as plain state machines so the Dioxus layer only
//! binds events and renders:
//!
//! - **Viewport**: screen-derived scale, flow and responsive tweaks
//! - **Session mirror**: field values copied to a session-scoped store
//! - **Navigator**: next/back scrolling by one card extent
//! - **Validator**: first-failure submit gate plus password confirmation
//! - **Password**: visibility toggle state
//! - **OTP**: single-character box redistribution
//! - **Carousel**: decorative rotating background grid and its ticker
//!
//! ## Quick Start
//!
//! ```
//! use campusgate_core::{Card, CardNavigator, Field, FieldKind, Form, FormValidator, PageFlow};
//!
//! let form = Form::new(vec![Card::new("login")
//!     .field(Field::new("student-email", "Email", FieldKind::Email).required())]);
//!
//! let report = FormValidator::new(CardNavigator::new(PageFlow::Row)).validate(&form);
//! assert!(!report.is_valid());
//! ```

pub mod carousel;
pub mod config;
pub mod error;
pub mod field;
pub mod logging;
pub mod navigator;
pub mod otp;
pub mod password;
pub mod session;
pub mod validator;
pub mod viewport;

// Re-exports
pub use carousel::{start_rotation, BackgroundCarousel, CarouselLayout, RotationHandle, Tile};
pub use config::{PageConfig, MAX_MOBILE_SCREEN_WIDTH};
pub use error::{FormError, FormResult};
pub use field::{Card, Field, FieldId, FieldKind, Form, CONFIRM_PASSWORD_FIELD, PASSWORD_FIELD};
pub use navigator::{Axis, CardNavigator, ScrollCommand};
pub use otp::{OtpSlots, DEFAULT_OTP_LENGTH};
pub use password::{EyeIcon, Visibility};
pub use session::{MemorySessionStore, SessionKey, SessionMirror, SessionSource, SessionStore};
pub use validator::{FieldMarker, FieldVisual, FormValidator, ValidationReport};
pub use viewport::{LayoutTweaks, PageFlow, ScreenSize, Viewport};
