//! Styling for campusgate.
//!
//! Static rules live in [`GLOBAL_STYLES`]; the values computed at startup
//! (colors, scale, flow, mobile font size) are emitted as a `:root` block.

mod styles;

use campusgate_core::{PageConfig, Viewport};

pub use styles::GLOBAL_STYLES;

/// `:root` block carrying the startup configuration and viewport.
pub fn root_css(config: &PageConfig, viewport: &Viewport) -> String {
    format!(
        ":root {{ {} {} }}",
        config.root_css_variables(),
        viewport.root_style()
    )
}
