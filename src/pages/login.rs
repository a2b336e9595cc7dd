//! Login page - single card with email and password.

use campusgate_core::{Card, Field, FieldKind, Form, PASSWORD_FIELD};
use campusgate_ui::{Button, ButtonVariant};
use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{CardDeck, PageShell};

pub fn login_form() -> Form {
    Form::new(vec![Card::new("Log In")
        .field(Field::new("student-email", "University email", FieldKind::Email).required())
        .field(Field::new(PASSWORD_FIELD, "Password", FieldKind::Password).required())])
}

#[component]
pub fn Login() -> Element {
    let navigator = use_navigator();

    rsx! {
        PageShell { title: "Log In".to_string(),
            CardDeck {
                form: login_form(),
                submit_label: "Log in".to_string(),
                on_valid: move |_| tracing::info!("login details accepted"),
                footer: rsx! {
                    Button {
                        variant: ButtonVariant::Link,
                        id: "forget-password-btn".to_string(),
                        onclick: move |_| {
                            navigator.push(Route::ForgetPassword {});
                        },
                        "Forgot your password?"
                    }
                    p { class: "card-footnote",
                        "New here? "
                        Link { to: Route::CreateAccount {}, "Create an account" }
                    }
                },
            }
        }
    }
}
