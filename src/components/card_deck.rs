//! Card Deck Component
//!
//! Renders a [`Form`] as a row (or reversed column) of cards inside one
//! scrollable container. Next/back buttons scroll by one card extent;
//! submit validates and, on failure, scrolls back to the card holding the
//! first invalid field.

use std::collections::BTreeMap;
use std::rc::Rc;

use campusgate_core::{
    Axis, CardNavigator, FieldId, FieldVisual, Form, FormValidator, ScrollCommand,
};
use campusgate_ui::{Button, ButtonVariant, GoBackButton};
use dioxus::prelude::*;

use super::FieldControl;
use crate::context::{use_page_config, use_session_mirror, use_viewport};

/// Element id of the scrollable cards container
pub const CARDS_CONTAINER_ID: &str = "cards-container";

type CardRefs = Signal<Vec<Option<Rc<MountedData>>>>;

#[derive(Clone, PartialEq, Props)]
pub struct CardDeckProps {
    /// Cards as built by the page; rehydrated from the session on mount
    pub form: Form,
    /// Label of the submit button on the last card
    #[props(default = "Submit".to_string())]
    pub submit_label: String,
    /// Show a history-back button on the first card
    #[props(default = false)]
    pub first_card_go_back: bool,
    /// Called with the form when a submit pass finds no errors
    #[props(default)]
    pub on_valid: Option<EventHandler<Form>>,
    /// Extra controls rendered at the bottom of the last card
    #[props(default = VNode::empty())]
    pub footer: Element,
}

/// Measure a card and record its extent along the scroll axis.
///
/// An unmounted card keeps its last recorded extent.
async fn measure_card(refs: CardRefs, mut form: Signal<Form>, card: usize, axis: Axis) {
    let element = refs.peek().get(card).cloned().flatten();
    if let Some(element) = element {
        match element.get_client_rect().await {
            Ok(rect) => {
                let extent = match axis {
                    Axis::Horizontal => rect.width(),
                    Axis::Vertical => rect.height(),
                };
                if let Err(err) = form.write().set_extent(card, extent) {
                    tracing::warn!(%err, "could not record card extent");
                }
            }
            Err(err) => tracing::warn!(?err, card, "could not measure card"),
        }
    }
}

/// Perform a smooth scroll of the cards container.
async fn scroll_cards(command: ScrollCommand) {
    tracing::debug!(?command, "scrolling cards");
    let script = command.to_script(CARDS_CONTAINER_ID);
    if let Err(err) = document::eval(&script).await {
        tracing::warn!(?err, "cards scroll failed");
    }
}

#[component]
pub fn CardDeck(props: CardDeckProps) -> Element {
    let config = use_page_config();
    let viewport = use_viewport();
    let mirror = use_session_mirror();
    let history = use_navigator();

    let initial = props.form.clone();
    let form = use_signal(move || {
        let mut form = initial;
        mirror.rehydrate(&mut form);
        form
    });
    let mut visuals = use_signal(BTreeMap::<FieldId, FieldVisual>::new);
    let card_count = form.peek().card_count();
    let mut card_refs: CardRefs = use_signal(|| vec![None; card_count]);

    let navigator = CardNavigator::new(viewport.flow);
    let validator = FormValidator::new(navigator);
    let axis = navigator.axis();
    let on_valid = props.on_valid;

    let next = move |_: ()| {
        spawn(async move {
            measure_card(card_refs, form, 0, axis).await;
            let extent = form.peek().step_extent();
            scroll_cards(navigator.advance(extent)).await;
        });
    };

    let back = move |_: ()| {
        spawn(async move {
            measure_card(card_refs, form, 0, axis).await;
            let extent = form.peek().step_extent();
            scroll_cards(navigator.retreat(extent)).await;
        });
    };

    let submit = move |_: ()| {
        spawn(async move {
            for card in 0..card_count {
                measure_card(card_refs, form, card, axis).await;
            }
            let report = validator.validate(&form.peek());
            report.apply(&mut visuals.write());

            if let Some(command) = report.scroll {
                scroll_cards(command).await;
            }
            if report.is_valid() {
                tracing::info!("form passed validation");
                if let Some(handler) = on_valid {
                    handler.call(form.peek().clone());
                }
            }
        });
    };

    let titles: Vec<String> = form.peek().cards.iter().map(|c| c.title.clone()).collect();
    let field_counts: Vec<usize> = form.peek().cards.iter().map(|c| c.fields.len()).collect();
    let tweaks = viewport.tweaks;
    let container_style = tweaks.card_container_style(&config.background_color);

    rsx! {
        div {
            id: CARDS_CONTAINER_ID,
            class: "cards-container",
            style: viewport.cards_container_style(),
            for (c, title) in titles.into_iter().enumerate() {
                div {
                    key: "{c}",
                    class: "card-container",
                    style: container_style.clone(),
                    onmounted: move |e| {
                        if let Some(slot) = card_refs.write().get_mut(c) {
                            *slot = Some(e.data());
                        }
                    },
                    div { class: "card", style: tweaks.card_style(),
                        div { class: "card-header",
                            if c == 0 && props.first_card_go_back {
                                GoBackButton {
                                    id: "first-card-go-back-btn".to_string(),
                                    onclick: move |_| history.go_back(),
                                }
                            }
                            h2 { class: "card-title", "{title}" }
                        }
                        div { class: "card-fields",
                            for i in 0..field_counts[c] {
                                FieldControl {
                                    key: "{c}-{i}",
                                    id: FieldId::new(c, i),
                                    form: form,
                                    visuals: visuals,
                                }
                            }
                        }
                        div { class: "card-actions",
                            if c > 0 {
                                Button {
                                    variant: ButtonVariant::Back,
                                    class: "back-btn".to_string(),
                                    onclick: back,
                                    "Back"
                                }
                            }
                            if c + 1 < card_count {
                                Button {
                                    variant: ButtonVariant::Next,
                                    class: "next-btn".to_string(),
                                    onclick: next,
                                    "Next"
                                }
                            } else {
                                Button {
                                    variant: ButtonVariant::Submit,
                                    id: "submit-btn".to_string(),
                                    onclick: submit,
                                    "{props.submit_label}"
                                }
                            }
                        }
                        if c + 1 == card_count {
                            div { class: "card-footer", {props.footer.clone()} }
                        }
                    }
                }
            }
        }
    }
}
