//! Password recovery page.
//!
//! One card asking for the account email; the code is then entered on the
//! verification page.

use campusgate_core::{Card, Field, FieldKind, Form};
use campusgate_ui::{Button, ButtonVariant};
use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{CardDeck, PageShell};

pub fn recovery_form() -> Form {
    Form::new(vec![Card::new("Reset Password")
        .field(Field::new("student-email", "University email", FieldKind::Email).required())])
}

#[component]
pub fn ForgetPassword() -> Element {
    let navigator = use_navigator();

    rsx! {
        PageShell { title: "Reset Password".to_string(),
            CardDeck {
                form: recovery_form(),
                submit_label: "Send code".to_string(),
                first_card_go_back: true,
                on_valid: move |_| {
                    tracing::info!("recovery email accepted");
                    navigator.push(Route::Otp {});
                },
                footer: rsx! {
                    Button {
                        variant: ButtonVariant::Link,
                        id: "go-to-OTP-page-btn".to_string(),
                        onclick: move |_| {
                            navigator.push(Route::Otp {});
                        },
                        "I already have a code"
                    }
                },
            }
        }
    }
}
