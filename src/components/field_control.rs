//! Binds one form field to its control.
//!
//! Input updates the form, blur mirrors the value to the session and
//! focus/blur toggle the emphasis marker on fields that passed validation.

use std::collections::BTreeMap;

use campusgate_core::{FieldId, FieldKind, FieldVisual, Form, CONFIRM_PASSWORD_FIELD, PASSWORD_FIELD};
use campusgate_ui::{CheckboxField, PasswordField, SelectField, TextField};
use dioxus::prelude::*;

use crate::context::{use_page_config, use_session_mirror};

/// Id of the visibility toggle for a password field.
pub fn toggle_id(field_name: &str) -> String {
    match field_name {
        PASSWORD_FIELD => "eye-icon-container-password".to_string(),
        CONFIRM_PASSWORD_FIELD => "eye-icon-container-sure-password".to_string(),
        other => format!("eye-icon-container-{other}"),
    }
}

#[component]
pub fn FieldControl(
    id: FieldId,
    mut form: Signal<Form>,
    mut visuals: Signal<BTreeMap<FieldId, FieldVisual>>,
) -> Element {
    let config = use_page_config();
    let mirror = use_session_mirror();

    let Some(field) = form.read().get(id).cloned() else {
        tracing::warn!(?id, "field control rendered for a missing field");
        return rsx! {};
    };
    let toggle = toggle_id(&field.name);
    let marker_style = visuals
        .read()
        .get(&id)
        .map(|visual| visual.style(&config))
        .unwrap_or_default();

    let focus = move |_: ()| {
        visuals.write().entry(id).or_default().focus();
    };
    let blur = move |_: ()| {
        visuals.write().entry(id).or_default().blur();
        if let Some(field) = form.peek().get(id) {
            mirror.on_blur(field.kind, &field.name, &field.value);
        }
    };
    let input = move |value: String| form.write().set_value(id, value);

    match field.kind {
        FieldKind::Password => rsx! {
            PasswordField {
                toggle_id: toggle,
                field: field,
                marker_style: marker_style,
                oninput: input,
                onfocus: focus,
                onblur: blur,
            }
        },
        FieldKind::Select => rsx! {
            SelectField {
                field: field,
                marker_style: marker_style,
                onchange: input,
                onfocus: focus,
                onblur: blur,
            }
        },
        FieldKind::Checkbox => rsx! {
            CheckboxField {
                field: field,
                marker_style: marker_style,
                ontoggle: move |checked| form.write().set_checked(id, checked),
                onblur: blur,
            }
        },
        FieldKind::Text | FieldKind::Email => rsx! {
            TextField {
                field: field,
                marker_style: marker_style,
                oninput: input,
                onfocus: focus,
                onblur: blur,
            }
        },
    }
}
