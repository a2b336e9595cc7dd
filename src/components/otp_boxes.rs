//! OTP Boxes Component
//!
//! Row of single-character inputs for a verification code. Pasting fills
//! the row from the first box, typing advances focus and backspace on an
//! empty box steps back.

use std::rc::Rc;

use campusgate_core::{FormError, FormResult, OtpSlots, DEFAULT_OTP_LENGTH};
use dioxus::prelude::*;

/// Read the desktop clipboard as text.
///
/// The webview paste event carries no payload, so the text is fetched
/// from the system clipboard instead.
fn read_clipboard() -> FormResult<String> {
    let mut clipboard = arboard::Clipboard::new().map_err(|e| FormError::Clipboard(e.to_string()))?;
    clipboard
        .get_text()
        .map_err(|e| FormError::Clipboard(e.to_string()))
}

async fn focus_box(refs: Signal<Vec<Option<Rc<MountedData>>>>, index: usize) {
    let element = refs.peek().get(index).cloned().flatten();
    if let Some(element) = element {
        if let Err(err) = element.set_focus(true).await {
            tracing::warn!(?err, index, "could not focus code box");
        }
    }
}

#[component]
pub fn OtpBoxes(
    /// Number of boxes
    #[props(default = DEFAULT_OTP_LENGTH)]
    length: usize,
    /// Called after every change with the code, or `None` while any box
    /// is empty
    #[props(default)]
    on_change: Option<EventHandler<Option<String>>>,
) -> Element {
    let mut slots = use_signal(|| OtpSlots::new(length));
    let mut refs = use_signal(|| vec![None::<Rc<MountedData>>; length]);

    // Focus moves and code reporting shared by every handler
    let settle = move |target: Option<usize>| {
        if let Some(index) = target {
            spawn(focus_box(refs, index));
        }
        let code = slots.peek().is_complete().then(|| slots.peek().code());
        if let Some(handler) = on_change {
            handler.call(code);
        }
    };

    let count = slots.read().len();

    rsx! {
        div { id: "OTP-input-container", class: "otp-container",
            for i in 0..count {
                input {
                    key: "{i}",
                    class: "otp-box",
                    r#type: "text",
                    inputmode: "numeric",
                    maxlength: "1",
                    autocomplete: "one-time-code",
                    value: slots.read().value(i).to_string(),
                    onmounted: move |e| {
                        if let Some(slot) = refs.write().get_mut(i) {
                            *slot = Some(e.data());
                        }
                    },
                    onfocus: move |_| slots.write().set_focus(i),
                    oninput: move |e| {
                        let target = slots.write().input(i, &e.value());
                        settle(target);
                    },
                    onkeydown: move |e| {
                        if e.key() == Key::Backspace {
                            let target = slots.write().backspace(i);
                            settle(target);
                        }
                    },
                    onpaste: move |e| {
                        e.prevent_default();
                        match read_clipboard() {
                            Ok(text) => {
                                let target = slots.write().paste(&text);
                                settle(target);
                            }
                            Err(err) => tracing::warn!(%err, "paste into code boxes failed"),
                        }
                    },
                }
            }
        }
    }
}

