//! Page Shell Component
//!
//! Common frame of every page: background carousel, the header shown on
//! small screens and the mobile go-back control.

use campusgate_ui::GoBackButton;
use dioxus::prelude::*;

use super::BackgroundCarousel;
use crate::context::use_viewport;

#[component]
pub fn PageShell(
    /// Heading shown above the cards on small screens
    title: String,
    /// Page content
    children: Element,
) -> Element {
    let viewport = use_viewport();
    let navigator = use_navigator();
    let tweaks = viewport.tweaks;

    rsx! {
        div { class: "page",
            BackgroundCarousel {}
            if tweaks.show_mobile_go_back {
                GoBackButton {
                    id: "mobile-go-back-btn".to_string(),
                    onclick: move |_| navigator.go_back(),
                }
            }
            if tweaks.show_page_header {
                header { id: "page-header", class: "page-header",
                    h1 { class: "page-title", "{title}" }
                }
            }
            main { class: "page-content", {children} }
        }
    }
}
