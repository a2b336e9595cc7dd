//! Page-wide context for campusgate.
//!
//! Provides the immutable configuration, the viewport computed at load and
//! the session mirror to all components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let config = use_page_config();
//! let viewport = use_viewport();
//! let mirror = use_session_mirror();
//! ```

use campusgate_core::{PageConfig, ScreenSize, SessionMirror, Viewport};
use dioxus::desktop::DesktopContext;
use dioxus::prelude::*;

/// Hook to access the startup configuration.
///
/// Injected once by the launcher and never mutated.
pub fn use_page_config() -> PageConfig {
    use_context::<PageConfig>()
}

/// Hook to access the viewport computed when the app mounted.
pub fn use_viewport() -> Viewport {
    use_context::<Viewport>()
}

/// Hook to access the session mirror shared by every page.
pub fn use_session_mirror() -> SessionMirror {
    use_context::<SessionMirror>()
}

/// Logical size of the monitor hosting the window, or the reference
/// screen when no monitor is reported.
pub fn detect_screen(window: &DesktopContext) -> ScreenSize {
    window
        .current_monitor()
        .map(|monitor| {
            let size = monitor.size().to_logical::<f64>(monitor.scale_factor());
            ScreenSize::new(size.width.round() as u32, size.height.round() as u32)
        })
        .unwrap_or_else(ScreenSize::reference)
}
