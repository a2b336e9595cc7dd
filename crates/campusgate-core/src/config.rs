//! Immutable page configuration.
//!
//! Everything the page would otherwise read from ambient style state
//! (colors, language attribute) is captured here once at startup and
//! handed to components by value.

use crate::viewport::ScreenSize;

/// Screen widths strictly below this are treated as mobile.
pub const MAX_MOBILE_SCREEN_WIDTH: u32 = 950;

/// Default pool of background portraits, relative to the asset directory.
pub const DEFAULT_BACKGROUND_IMAGES: &[&str] = &[
    "assets/students/student-1.jpg",
    "assets/students/student-2.jpg",
    "assets/students/student-3.jpg",
    "assets/students/student-4.jpg",
    "assets/students/student-5.jpg",
    "assets/students/student-6.jpg",
];

/// Page-wide configuration, built once and never mutated.
#[derive(Clone, Debug, PartialEq)]
pub struct PageConfig {
    /// Value of the document `lang` attribute
    pub language: String,
    /// `--error-color`: underline/glow for invalid fields
    pub error_color: String,
    /// `--next-btn-background-color`: emphasis color for focused fields
    pub accent_color: String,
    /// `--background-color`: card background on mobile layouts
    pub background_color: String,
    /// Image pool the background carousel samples from
    pub background_images: Vec<String>,
    /// Forces a screen size instead of querying the monitor
    pub screen_override: Option<ScreenSize>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            error_color: "#ff3366".to_string(),
            accent_color: "#00d4aa".to_string(),
            background_color: "#0a0a0a".to_string(),
            background_images: DEFAULT_BACKGROUND_IMAGES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            screen_override: None,
        }
    }
}

impl PageConfig {
    /// Replace the language attribute.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Replace the carousel image pool. An empty list keeps the defaults.
    pub fn with_background_images(mut self, images: Vec<String>) -> Self {
        if !images.is_empty() {
            self.background_images = images;
        }
        self
    }

    /// Pin the screen size used by the viewport adapter.
    pub fn with_screen(mut self, screen: Option<ScreenSize>) -> Self {
        self.screen_override = screen;
        self
    }

    /// CSS custom property block for the document root.
    pub fn root_css_variables(&self) -> String {
        format!(
            "--error-color: {}; --next-btn-background-color: {}; --background-color: {};",
            self.error_color, self.accent_color, self.background_color
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_image_pool() {
        let config = PageConfig::default();
        assert_eq!(config.language, "en");
        assert_eq!(config.background_images.len(), DEFAULT_BACKGROUND_IMAGES.len());
        assert!(config.screen_override.is_none());
    }

    #[test]
    fn empty_image_list_keeps_defaults() {
        let config = PageConfig::default().with_background_images(Vec::new());
        assert_eq!(config.background_images.len(), DEFAULT_BACKGROUND_IMAGES.len());

        let config = PageConfig::default().with_background_images(vec!["a.png".into()]);
        assert_eq!(config.background_images, vec!["a.png".to_string()]);
    }

    #[test]
    fn root_variables_carry_colors() {
        let config = PageConfig::default();
        let css = config.root_css_variables();
        assert!(css.contains("--error-color: #ff3366;"));
        assert!(css.contains("--next-btn-background-color: #00d4aa;"));
    }
}
