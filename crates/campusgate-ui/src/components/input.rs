//! Form Field Components
//!
//! Text-like inputs, selects and checkboxes rendering one core [`Field`].
//! Features:
//! - `form-input` marker attribute on required controls
//! - Validation marker applied through the `marker_style` prop
//! - Focus/blur reported so the page can mirror and emphasise

use campusgate_core::{Field, FieldKind};
use dioxus::prelude::*;

/// Properties for the TextField component
#[derive(Clone, PartialEq, Props)]
pub struct TextFieldProps {
    /// Field being rendered
    pub field: Field,
    /// Inline style carrying the validation marker
    #[props(default)]
    pub marker_style: String,
    /// Overrides the input type (password visibility toggle)
    #[props(default)]
    pub input_type: Option<String>,
    /// Handler called when the value changes
    pub oninput: EventHandler<String>,
    #[props(default)]
    pub onfocus: Option<EventHandler<()>>,
    #[props(default)]
    pub onblur: Option<EventHandler<()>>,
    /// Rendered after the input inside the same wrapper
    #[props(default)]
    pub children: Element,
}

/// Labelled text/email/password input
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     TextField {
///         field: form.read().get(id).cloned().unwrap(),
///         marker_style: visual.style(&config),
///         oninput: move |v| form.write().set_value(id, v),
///         onblur: move |_| mirror.on_blur(kind, &name, &value),
///     }
/// }
/// ```
#[component]
pub fn TextField(props: TextFieldProps) -> Element {
    let field = &props.field;
    let input_type = props
        .input_type
        .clone()
        .or_else(|| field.kind.input_type().map(str::to_string))
        .unwrap_or_else(|| "text".to_string());
    let oninput = props.oninput;
    let onfocus = props.onfocus;
    let onblur = props.onblur;

    rsx! {
        div { class: field_class(field.kind),
            label { class: "input-label", r#for: "{field.name}", "{field.label}" }
            div { class: "input-wrapper",
                input {
                    id: "{field.name}",
                    name: "{field.name}",
                    class: "input-field",
                    r#type: "{input_type}",
                    value: "{field.value}",
                    style: "{props.marker_style}",
                    "form-input": field.required.then_some("true"),
                    oninput: move |e| oninput.call(e.value()),
                    onfocus: move |_| {
                        if let Some(handler) = onfocus {
                            handler.call(());
                        }
                    },
                    onblur: move |_| {
                        if let Some(handler) = onblur {
                            handler.call(());
                        }
                    },
                }
                {props.children}
            }
        }
    }
}

/// Properties for the SelectField component
#[derive(Clone, PartialEq, Props)]
pub struct SelectFieldProps {
    pub field: Field,
    #[props(default)]
    pub marker_style: String,
    pub onchange: EventHandler<String>,
    #[props(default)]
    pub onfocus: Option<EventHandler<()>>,
    #[props(default)]
    pub onblur: Option<EventHandler<()>>,
}

/// Labelled drop-down; an empty value shows the placeholder option
#[component]
pub fn SelectField(props: SelectFieldProps) -> Element {
    let field = &props.field;
    let onchange = props.onchange;
    let onfocus = props.onfocus;
    let onblur = props.onblur;

    rsx! {
        div { class: field_class(field.kind),
            label { class: "input-label", r#for: "{field.name}", "{field.label}" }
            select {
                id: "{field.name}",
                name: "{field.name}",
                class: "input-field select-field",
                value: "{field.value}",
                style: "{props.marker_style}",
                "form-input": field.required.then_some("true"),
                onchange: move |e| onchange.call(e.value()),
                onfocus: move |_| {
                    if let Some(handler) = onfocus {
                        handler.call(());
                    }
                },
                onblur: move |_| {
                    if let Some(handler) = onblur {
                        handler.call(());
                    }
                },
                option { value: "", disabled: true, selected: field.value.is_empty(), "Choose..." }
                for choice in field.options.iter() {
                    option {
                        key: "{choice}",
                        value: "{choice}",
                        selected: *choice == field.value,
                        "{choice}"
                    }
                }
            }
        }
    }
}

/// Properties for the CheckboxField component
#[derive(Clone, PartialEq, Props)]
pub struct CheckboxFieldProps {
    pub field: Field,
    #[props(default)]
    pub marker_style: String,
    /// Called with the new checked state
    pub ontoggle: EventHandler<bool>,
    #[props(default)]
    pub onblur: Option<EventHandler<()>>,
}

/// Checkbox with its label on the right
#[component]
pub fn CheckboxField(props: CheckboxFieldProps) -> Element {
    let field = &props.field;
    let checked = field.checked;
    let ontoggle = props.ontoggle;
    let onblur = props.onblur;

    rsx! {
        div { class: field_class(field.kind),
            input {
                id: "{field.name}",
                name: "{field.name}",
                class: "checkbox-input",
                r#type: "checkbox",
                checked: checked,
                style: "{props.marker_style}",
                "form-input": field.required.then_some("true"),
                onchange: move |_| ontoggle.call(!checked),
                onblur: move |_| {
                    if let Some(handler) = onblur {
                        handler.call(());
                    }
                },
            }
            label { class: "checkbox-label", r#for: "{field.name}", "{field.label}" }
        }
    }
}

/// CSS class for the wrapper of a field of the given kind
pub fn field_class(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Checkbox => "form-field checkbox-field",
        FieldKind::Select => "form-field select-wrapper",
        _ => "form-field",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_class_by_kind() {
        assert_eq!(field_class(FieldKind::Checkbox), "form-field checkbox-field");
        assert_eq!(field_class(FieldKind::Select), "form-field select-wrapper");
        assert_eq!(field_class(FieldKind::Email), "form-field");
    }
}
