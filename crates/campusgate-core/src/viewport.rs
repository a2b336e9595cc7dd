//! Viewport adapter.
//!
//! Reads the screen size once at load and derives the CSS scale factor,
//! the root font-size override, the page flow and the responsive layout
//! tweaks applied to cards.

use std::fmt;
use std::str::FromStr;

use crate::config::MAX_MOBILE_SCREEN_WIDTH;
use crate::error::FormError;

/// Screen the layout was designed against.
pub const REFERENCE_WIDTH: f64 = 1680.0;
pub const REFERENCE_HEIGHT: f64 = 1050.0;

/// Root font size forced on mobile screens.
pub const MOBILE_ROOT_FONT_SIZE: &str = "16px";

/// z-index that lifts the cards above the moving background.
pub const CARD_Z_INDEX: u32 = 99999;

/// Screen dimensions in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenSize {
    pub width: u32,
    pub height: u32,
}

impl ScreenSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// The reference desktop screen.
    pub fn reference() -> Self {
        Self::new(REFERENCE_WIDTH as u32, REFERENCE_HEIGHT as u32)
    }
}

impl fmt::Display for ScreenSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for ScreenSize {
    type Err = FormError;

    /// Parses `WIDTHxHEIGHT`, e.g. `1280x800`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || FormError::InvalidScreenSize(s.to_string());
        let (w, h) = s
            .trim()
            .split_once(['x', 'X'])
            .ok_or_else(invalid)?;
        let width: u32 = w.trim().parse().map_err(|_| invalid())?;
        let height: u32 = h.trim().parse().map_err(|_| invalid())?;
        if width == 0 || height == 0 {
            return Err(invalid());
        }
        Ok(Self::new(width, height))
    }
}

/// Flex direction of the page, fixed for the page's lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageFlow {
    /// Cards side by side; navigation scrolls horizontally
    Row,
    /// Cards stacked in reverse; navigation scrolls vertically
    Column,
}

impl PageFlow {
    /// Value written to `--page-flex-direction`
    pub fn css_value(&self) -> &'static str {
        match self {
            PageFlow::Row => "row",
            PageFlow::Column => "column",
        }
    }

    /// Flex direction of the cards container. Column flow stacks the first
    /// card at the bottom, so advancing scrolls upward.
    pub fn cards_direction(&self) -> &'static str {
        match self {
            PageFlow::Row => "row",
            PageFlow::Column => "column-reverse",
        }
    }
}

/// Responsive adjustments derived from the screen width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LayoutTweaks {
    /// Lift cards container and card containers above the background
    pub raise_cards: bool,
    /// Show the page header above the cards
    pub show_page_header: bool,
    /// Drop card shadows and paint card containers with the page background
    pub flatten_cards: bool,
    /// Render the mobile history-back button
    pub show_mobile_go_back: bool,
}

impl LayoutTweaks {
    pub fn cards_container_style(&self) -> String {
        if self.raise_cards {
            format!("z-index: {CARD_Z_INDEX};")
        } else {
            String::new()
        }
    }

    pub fn card_container_style(&self, background_color: &str) -> String {
        let mut style = String::new();
        if self.raise_cards {
            style.push_str(&format!("z-index: {CARD_Z_INDEX};"));
        }
        if self.flatten_cards {
            style.push_str(&format!(
                "background-color: {background_color}; align-items: flex-start; padding-top: 3rem;"
            ));
        }
        style
    }

    pub fn card_style(&self) -> &'static str {
        if self.flatten_cards {
            "box-shadow: none;"
        } else {
            ""
        }
    }
}

/// Everything the page derives from the screen size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub screen: ScreenSize,
    /// Value of `--screen-scale`
    pub scale: f64,
    pub flow: PageFlow,
    pub tweaks: LayoutTweaks,
}

impl Viewport {
    pub fn from_screen(screen: ScreenSize) -> Self {
        let width_scale = screen.width as f64 / REFERENCE_WIDTH;
        let height_scale = screen.height as f64 / REFERENCE_HEIGHT;
        let scale = width_scale.max(height_scale);

        let mobile = screen.width < MAX_MOBILE_SCREEN_WIDTH;
        let desktop = screen.width > MAX_MOBILE_SCREEN_WIDTH;

        let tweaks = LayoutTweaks {
            raise_cards: desktop,
            show_page_header: mobile,
            flatten_cards: mobile,
            show_mobile_go_back: mobile,
        };

        Self {
            screen,
            scale,
            flow: if mobile { PageFlow::Column } else { PageFlow::Row },
            tweaks,
        }
    }

    pub fn is_mobile(&self) -> bool {
        self.screen.width < MAX_MOBILE_SCREEN_WIDTH
    }

    /// Root font size override, if any.
    pub fn root_font_size(&self) -> Option<&'static str> {
        self.is_mobile().then_some(MOBILE_ROOT_FONT_SIZE)
    }

    /// Inline style of the cards container.
    pub fn cards_container_style(&self) -> String {
        format!(
            "flex-direction: {}; {}",
            self.flow.cards_direction(),
            self.tweaks.cards_container_style()
        )
    }

    /// CSS declarations for the document root.
    pub fn root_style(&self) -> String {
        let mut style = format!(
            "--screen-scale: {}; --page-flex-direction: {};",
            self.scale,
            self.flow.css_value()
        );
        if let Some(size) = self.root_font_size() {
            style.push_str(&format!(" font-size: {size};"));
        }
        style
    }
}
