//! Button Components
//!
//! Button styles used across the account pages:
//! - Next: advances the card wizard (accent background)
//! - Back: steps the wizard back
//! - Submit: validates the form
//! - Link: text-only navigation (forget password, go to OTP)

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Forward action - accent background
    #[default]
    Next,
    /// Step back - outlined
    Back,
    /// Form submission
    Submit,
    /// Inline text link
    Link,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Next => "btn-next",
            ButtonVariant::Back => "btn-back",
            ButtonVariant::Submit => "btn-submit",
            ButtonVariant::Link => "btn-link",
        }
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Optional element id
    #[props(default)]
    pub id: Option<String>,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button
///
/// Clicks never submit a native form; the page decides what a click does.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Next,
///         onclick: move |_| advance(),
///         "Next"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let base_class = props.variant.class();
    let extra_class = props.class.as_deref().unwrap_or("");
    let full_class = if extra_class.is_empty() {
        base_class.to_string()
    } else {
        format!("{} {}", base_class, extra_class)
    };

    rsx! {
        button {
            id: props.id.clone(),
            class: "{full_class}",
            r#type: "button",
            disabled: props.disabled,
            onclick: move |e| {
                e.prevent_default();
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Icon button for compact actions (go back, visibility toggle)
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    /// The icon content
    pub children: Element,
    /// Click handler
    pub onclick: EventHandler<()>,
    /// Accessible label
    pub aria_label: String,
    /// Optional element id
    #[props(default)]
    pub id: Option<String>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let extra_class = props.class.as_deref().unwrap_or("");
    let full_class = if extra_class.is_empty() {
        "icon-btn".to_string()
    } else {
        format!("icon-btn {}", extra_class)
    };

    rsx! {
        button {
            id: props.id.clone(),
            class: "{full_class}",
            r#type: "button",
            "aria-label": "{props.aria_label}",
            onclick: move |e| {
                e.prevent_default();
                props.onclick.call(());
            },
            {props.children}
        }
    }
}

/// Left-pointing arrow used by the go-back buttons
#[component]
pub fn GoBackButton(id: String, onclick: EventHandler<()>) -> Element {
    rsx! {
        IconButton {
            id: id,
            onclick: onclick,
            aria_label: "Go back".to_string(),
            class: "go-back-btn".to_string(),
            "\u{2190}"
        }
    }
}
