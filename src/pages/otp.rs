//! Verification page - one-time-code boxes.

use campusgate_core::DEFAULT_OTP_LENGTH;
use campusgate_ui::{Button, ButtonVariant, GoBackButton};
use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{OtpBoxes, PageShell, CARDS_CONTAINER_ID};
use crate::context::{use_page_config, use_viewport};

#[component]
pub fn Otp() -> Element {
    let navigator = use_navigator();
    let config = use_page_config();
    let viewport = use_viewport();
    let mut code = use_signal(|| Option::<String>::None);

    let submit = move |_: ()| match code() {
        Some(code) => {
            tracing::info!(digits = code.len(), "verification code submitted");
            navigator.push(Route::Login {});
        }
        None => tracing::debug!("verification code incomplete"),
    };

    rsx! {
        PageShell { title: "Verify".to_string(),
            div { id: CARDS_CONTAINER_ID, class: "cards-container",
                style: viewport.cards_container_style(),
                div { class: "card-container",
                    style: viewport.tweaks.card_container_style(&config.background_color),
                    div { class: "card", style: viewport.tweaks.card_style(),
                        div { class: "card-header",
                            GoBackButton {
                                id: "first-card-go-back-btn".to_string(),
                                onclick: move |_| navigator.go_back(),
                            }
                            h2 { class: "card-title", "Enter your code" }
                        }
                        p { class: "card-hint",
                            "We sent a {DEFAULT_OTP_LENGTH}-digit code to your email."
                        }
                        OtpBoxes {
                            length: DEFAULT_OTP_LENGTH,
                            on_change: move |value: Option<String>| code.set(value),
                        }
                        div { class: "card-actions",
                            Button {
                                variant: ButtonVariant::Submit,
                                id: "submit-btn".to_string(),
                                disabled: code().is_none(),
                                onclick: submit,
                                "Verify"
                            }
                        }
                    }
                }
            }
        }
    }
}
