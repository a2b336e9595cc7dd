//! Password field with a visibility toggle.

use campusgate_core::{Field, Visibility};
use dioxus::prelude::*;

use super::{eye_icon_label, EyeGlyph, IconButton, TextField};

#[derive(Clone, PartialEq, Props)]
pub struct PasswordFieldProps {
    pub field: Field,
    #[props(default)]
    pub marker_style: String,
    /// Id of the toggle control, e.g. `eye-icon-container-password`
    pub toggle_id: String,
    pub oninput: EventHandler<String>,
    pub onfocus: EventHandler<()>,
    pub onblur: EventHandler<()>,
}

/// Password input whose eye button swaps obscured/plain rendering.
///
/// Visibility is presentation only and never reaches the form model.
#[component]
pub fn PasswordField(props: PasswordFieldProps) -> Element {
    let mut visibility = use_signal(Visibility::default);
    let icon = visibility().icon();

    rsx! {
        TextField {
            field: props.field.clone(),
            marker_style: props.marker_style.clone(),
            input_type: visibility().input_type().to_string(),
            oninput: props.oninput,
            onfocus: props.onfocus,
            onblur: props.onblur,
            IconButton {
                id: props.toggle_id.clone(),
                class: "eye-icon-container".to_string(),
                aria_label: eye_icon_label(icon).to_string(),
                onclick: move |_| {
                    visibility.with_mut(|v| v.toggle());
                    tracing::trace!(state = ?visibility(), "toggled password visibility");
                },
                EyeGlyph { icon }
            }
        }
    }
}
