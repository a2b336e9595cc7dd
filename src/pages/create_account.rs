//! Create-account page - three-card sign-up wizard.
//!
//! Personal details, contact details, then credentials with a password
//! confirmation and terms checkbox.

use campusgate_core::{
    Card, Field, FieldKind, Form, CONFIRM_PASSWORD_FIELD, PASSWORD_FIELD,
};
use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{CardDeck, PageShell};

/// Faculties offered in the personal-details card.
pub const FACULTIES: &[&str] = &[
    "Engineering",
    "Medicine",
    "Science",
    "Commerce",
    "Arts",
    "Law",
];

/// Cards of the sign-up wizard in display order.
pub fn signup_form() -> Form {
    Form::new(vec![
        Card::new("Personal Info")
            .field(Field::new("student-first-name", "First name", FieldKind::Text).required())
            .field(Field::new("student-last-name", "Last name", FieldKind::Text).required())
            .field(
                Field::new("student-faculty", "Faculty", FieldKind::Select)
                    .with_options(FACULTIES.iter().copied())
                    .required(),
            ),
        Card::new("Contact Info")
            .field(Field::new("student-email", "University email", FieldKind::Email).required())
            .field(Field::new("student-phone", "Phone number", FieldKind::Text)),
        Card::new("Credentials")
            .field(Field::new(PASSWORD_FIELD, "Password", FieldKind::Password).required())
            .field(
                Field::new(CONFIRM_PASSWORD_FIELD, "Confirm password", FieldKind::Password)
                    .required(),
            )
            .field(
                Field::new("student-terms", "I accept the terms of use", FieldKind::Checkbox)
                    .required(),
            ),
    ])
}

#[component]
pub fn CreateAccount() -> Element {
    let navigator = use_navigator();

    let on_valid = move |form: Form| {
        tracing::info!(
            email = form.value_of("student-email").unwrap_or_default(),
            "account details accepted"
        );
        navigator.push(Route::Login {});
    };

    rsx! {
        PageShell { title: "Create Account".to_string(),
            CardDeck {
                form: signup_form(),
                submit_label: "Create account".to_string(),
                first_card_go_back: true,
                on_valid: on_valid,
                footer: rsx! {
                    p { class: "card-footnote",
                        "Already registered? "
                        Link { to: Route::Login {}, "Log in" }
                    }
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campusgate_core::{CardNavigator, FieldId, FieldMarker, FormValidator, PageFlow};

    fn fill(form: &mut Form, name: &str, value: &str) {
        let id = form.find(name).expect("field exists");
        form.set_value(id, value);
    }

    #[test]
    fn wizard_has_three_cards() {
        let form = signup_form();
        assert_eq!(form.card_count(), 3);
        assert!(form.find(PASSWORD_FIELD).is_some());
        assert!(form.find(CONFIRM_PASSWORD_FIELD).is_some());
        assert_eq!(
            form.get(form.find("student-faculty").unwrap()).unwrap().options.len(),
            FACULTIES.len()
        );
    }

    #[test]
    fn empty_wizard_stops_at_first_name() {
        let form = signup_form();
        let report = FormValidator::new(CardNavigator::new(PageFlow::Row)).validate(&form);
        assert_eq!(report.first_invalid, Some(FieldId::new(0, 0)));
        assert_eq!(report.markers.get(&FieldId::new(0, 0)), Some(&FieldMarker::Error));
        assert!(!report.markers.contains_key(&FieldId::new(1, 0)));
    }

    #[test]
    fn complete_wizard_passes() {
        let mut form = signup_form();
        fill(&mut form, "student-first-name", "Ada");
        fill(&mut form, "student-last-name", "Lovelace");
        fill(&mut form, "student-faculty", "Science");
        fill(&mut form, "student-email", "ada@uni.edu");
        fill(&mut form, PASSWORD_FIELD, "analytical");
        fill(&mut form, CONFIRM_PASSWORD_FIELD, "analytical");
        let terms = form.find("student-terms").unwrap();
        form.set_checked(terms, true);

        let report = FormValidator::new(CardNavigator::new(PageFlow::Row)).validate(&form);
        assert!(report.is_valid(), "{report:?}");
        assert!(report.scroll.is_none());
    }
}
