//! End-to-end walk through a sign-up session without a view layer.
//!
//! Mirrors what the pages do: build the form, rehydrate it, fill fields
//! with blur events, submit, then rebuild the page and rehydrate again.

use std::collections::BTreeMap;
use std::sync::Arc;

use campusgate_core::{
    Card, CardNavigator, Field, FieldKind, FieldMarker, FieldVisual, Form, FormValidator,
    MemorySessionStore, PageConfig, ScreenSize, SessionMirror, SessionStore, Viewport,
    CONFIRM_PASSWORD_FIELD, PASSWORD_FIELD,
};

fn signup_form() -> Form {
    Form::new(vec![
        Card::new("personal")
            .field(Field::new("first-name", "First name", FieldKind::Text).required())
            .field(
                Field::new("faculty", "Faculty", FieldKind::Select)
                    .required()
                    .with_options(["Science", "Arts"]),
            ),
        Card::new("contact")
            .field(Field::new("student-email", "Email", FieldKind::Email).required()),
        Card::new("credentials")
            .field(Field::new(PASSWORD_FIELD, "Password", FieldKind::Password).required())
            .field(Field::new(CONFIRM_PASSWORD_FIELD, "Confirm", FieldKind::Password).required()),
    ])
}

fn type_and_blur(form: &mut Form, mirror: &SessionMirror, name: &str, value: &str) {
    let id = form.find(name).expect("field exists");
    form.set_value(id, value);
    let field = form.get(id).expect("field exists");
    mirror.on_blur(field.kind, &field.name, &field.value);
}

#[test]
fn signup_session_survives_page_rebuild() {
    let store: Arc<dyn SessionStore> = Arc::new(MemorySessionStore::new());
    let mirror = SessionMirror::new(store.clone());
    let viewport = Viewport::from_screen(ScreenSize::new(1440, 900));
    let validator = FormValidator::new(CardNavigator::new(viewport.flow));

    let mut form = signup_form();
    mirror.rehydrate(&mut form);
    for card in 0..form.card_count() {
        form.set_extent(card, 600.0).unwrap();
    }

    type_and_blur(&mut form, &mirror, "first-name", "Ada");
    type_and_blur(&mut form, &mirror, "faculty", "Science");
    type_and_blur(&mut form, &mirror, "student-email", "ada");
    type_and_blur(&mut form, &mirror, PASSWORD_FIELD, "analytical");
    type_and_blur(&mut form, &mirror, CONFIRM_PASSWORD_FIELD, "analytic");

    let report = validator.validate(&form);
    assert_eq!(report.first_invalid, form.find("student-email"));
    assert_eq!(report.scroll.map(|s| s.delta), Some(-600.0));
    assert!(report.confirm_mismatch);

    let mut visuals: BTreeMap<_, FieldVisual> = BTreeMap::new();
    report.apply(&mut visuals);
    let email = form.find("student-email").unwrap();
    assert_eq!(visuals[&email].marker, Some(FieldMarker::Error));
    assert!(
        visuals[&email]
            .style(&PageConfig::default())
            .contains("#ff3366")
    );

    // Rebuilding the page restores everything that was blurred.
    let mut rebuilt = signup_form();
    mirror.rehydrate(&mut rebuilt);
    assert_eq!(rebuilt.value_of("first-name").unwrap(), "Ada");
    assert_eq!(rebuilt.value_of("faculty").unwrap(), "Science");
    assert_eq!(rebuilt.value_of(PASSWORD_FIELD).unwrap(), "analytical");
    assert_eq!(store.len(), 5);

    type_and_blur(&mut rebuilt, &mirror, "student-email", "ada@uni.edu");
    type_and_blur(&mut rebuilt, &mirror, CONFIRM_PASSWORD_FIELD, "analytical");
    let report = validator.validate(&rebuilt);
    assert!(report.is_valid());
    assert!(report.scroll.is_none());
}

#[test]
fn mobile_layout_reveals_vertically() {
    let viewport = Viewport::from_screen(ScreenSize::new(390, 844));
    let validator = FormValidator::new(CardNavigator::new(viewport.flow));

    let mut form = signup_form();
    for card in 0..form.card_count() {
        form.set_extent(card, 844.0).unwrap();
    }
    let report = validator.validate(&form);
    assert_eq!(report.first_invalid, form.find("first-name"));
    assert_eq!(report.scroll.map(|s| s.delta), Some(1688.0));
}
