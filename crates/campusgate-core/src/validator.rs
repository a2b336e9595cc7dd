//! Submit-time form validation.
//!
//! Required fields are walked card by card in document order. The first
//! field with an empty (or `@`-less email) value is marked and its card is
//! scrolled into view; nothing after it is examined on that pass. The
//! password confirmation check runs regardless of an early exit.

use std::collections::BTreeMap;

use crate::config::PageConfig;
use crate::field::{Field, FieldId, FieldKind, Form, CONFIRM_PASSWORD_FIELD, PASSWORD_FIELD};
use crate::navigator::{CardNavigator, ScrollCommand};

/// Visual state applied to a field after validation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldMarker {
    /// Thin dark underline on a valid field
    Neutral,
    /// Accent underline while a validated field has focus
    Emphasis,
    /// Error-colored underline
    Error,
    /// Error-colored glow on an unchecked required checkbox
    UncheckedError,
    /// No decoration (checked checkbox)
    Cleared,
}

impl FieldMarker {
    pub fn is_error(&self) -> bool {
        matches!(self, FieldMarker::Error | FieldMarker::UncheckedError)
    }

    /// `box-shadow` value for this marker.
    pub fn box_shadow(&self, config: &PageConfig) -> String {
        match self {
            FieldMarker::Neutral => "0 1px 0 0 #000".to_string(),
            FieldMarker::Emphasis => format!("0 2px 0 0 {}", config.accent_color),
            FieldMarker::Error => format!("0 2px 0 0 {}", config.error_color),
            FieldMarker::UncheckedError => format!(
                "{e} 0px 1px 4px, {e} 0px 0px 0px 3px",
                e = config.error_color
            ),
            FieldMarker::Cleared => "0 0 0 0 #fff".to_string(),
        }
    }
}

/// Per-field presentation state kept by the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldVisual {
    pub marker: Option<FieldMarker>,
    /// Set once the field passed validation; focus/blur then toggle
    /// between [`FieldMarker::Emphasis`] and [`FieldMarker::Neutral`]
    pub emphasis_armed: bool,
}

impl FieldVisual {
    pub fn focus(&mut self) {
        if self.emphasis_armed {
            self.marker = Some(FieldMarker::Emphasis);
        }
    }

    pub fn blur(&mut self) {
        if self.emphasis_armed {
            self.marker = Some(FieldMarker::Neutral);
        }
    }

    /// Inline style for the control, empty when undecorated.
    pub fn style(&self, config: &PageConfig) -> String {
        self.marker
            .map(|m| format!("box-shadow: {};", m.box_shadow(config)))
            .unwrap_or_default()
    }
}

/// Outcome of one submit pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValidationReport {
    /// Markers to apply, keyed by field. Fields not present keep their
    /// current presentation.
    pub markers: BTreeMap<FieldId, FieldMarker>,
    /// Fields that passed and get focus/blur emphasis
    pub armed: Vec<FieldId>,
    /// First field that failed the value rule, if any
    pub first_invalid: Option<FieldId>,
    /// Scroll bringing the first invalid field's card into view
    pub scroll: Option<ScrollCommand>,
    /// Confirmation differs from the primary password
    pub confirm_mismatch: bool,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        !self.markers.values().any(FieldMarker::is_error)
    }

    pub fn error_count(&self) -> usize {
        self.markers.values().filter(|m| m.is_error()).count()
    }

    /// Fold this report into the page's per-field visuals.
    pub fn apply(&self, visuals: &mut BTreeMap<FieldId, FieldVisual>) {
        for id in &self.armed {
            visuals.entry(*id).or_default().emphasis_armed = true;
        }
        for (id, marker) in &self.markers {
            visuals.entry(*id).or_default().marker = Some(*marker);
        }
    }
}

/// Whether a non-checkbox field fails the value rule.
pub fn is_invalid_value(field: &Field) -> bool {
    field.value.trim().is_empty() || (field.kind == FieldKind::Email && !field.value.contains('@'))
}

#[derive(Clone, Copy, Debug)]
pub struct FormValidator {
    navigator: CardNavigator,
}

impl FormValidator {
    pub fn new(navigator: CardNavigator) -> Self {
        Self { navigator }
    }

    pub fn validate(&self, form: &Form) -> ValidationReport {
        let mut report = ValidationReport::default();
        let cards = form.card_count();

        'cards: for (c, card) in form.cards.iter().enumerate() {
            for (i, field) in card.fields.iter().enumerate() {
                if !field.required {
                    continue;
                }
                let id = FieldId::new(c, i);

                if field.kind.is_checkbox() {
                    let marker = if field.checked {
                        FieldMarker::Cleared
                    } else {
                        FieldMarker::UncheckedError
                    };
                    report.markers.insert(id, marker);
                    continue;
                }

                if is_invalid_value(field) {
                    tracing::debug!(field = %field.name, card = c, "first invalid field");
                    report.markers.insert(id, FieldMarker::Error);
                    report.first_invalid = Some(id);
                    report.scroll = Some(self.navigator.reveal(card.extent, c, cards));
                    break 'cards;
                }

                report.markers.insert(id, FieldMarker::Neutral);
                report.armed.push(id);
            }
        }

        if let Some(confirm_id) = form.find(CONFIRM_PASSWORD_FIELD) {
            let password = form.value_of(PASSWORD_FIELD).unwrap_or_default();
            let confirm = form.get(confirm_id).map(|f| f.value.as_str()).unwrap_or_default();
            if password != confirm {
                report.confirm_mismatch = true;
                report.markers.insert(confirm_id, FieldMarker::Error);
                report.armed.retain(|id| *id != confirm_id);
            }
        }

        tracing::debug!(
            errors = report.error_count(),
            scrolled = report.scroll.is_some(),
            "validated form"
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Card;
    use crate::navigator::Axis;
    use crate::viewport::PageFlow;

    fn signup() -> Form {
        let mut form = Form::new(vec![
            Card::new("personal")
                .field(Field::new("first-name", "First name", FieldKind::Text).required())
                .field(Field::new("last-name", "Last name", FieldKind::Text).required())
                .field(Field::new("nickname", "Nickname", FieldKind::Text)),
            Card::new("contact")
                .field(Field::new("student-email", "Email", FieldKind::Email).required()),
            Card::new("credentials")
                .field(Field::new(PASSWORD_FIELD, "Password", FieldKind::Password).required())
                .field(
                    Field::new(CONFIRM_PASSWORD_FIELD, "Confirm", FieldKind::Password).required(),
                )
                .field(Field::new("terms", "Terms", FieldKind::Checkbox).required()),
        ]);
        for c in 0..3 {
            form.set_extent(c, 500.0).unwrap();
        }
        form
    }

    fn fill(form: &mut Form) {
        for (name, value) in [
            ("first-name", "Ada"),
            ("last-name", "Lovelace"),
            ("student-email", "ada@uni.edu"),
            (PASSWORD_FIELD, "engine"),
            (CONFIRM_PASSWORD_FIELD, "engine"),
        ] {
            let id = form.find(name).unwrap();
            form.set_value(id, value);
        }
        let terms = form.find("terms").unwrap();
        form.set_checked(terms, true);
    }

    fn validator() -> FormValidator {
        FormValidator::new(CardNavigator::new(PageFlow::Row))
    }

    #[test]
    fn complete_form_passes_without_scroll() {
        let mut form = signup();
        fill(&mut form);
        let report = validator().validate(&form);
        assert!(report.is_valid());
        assert_eq!(report.scroll, None);
        assert_eq!(report.first_invalid, None);
        assert_eq!(report.markers[&FieldId::new(2, 2)], FieldMarker::Cleared);
        assert_eq!(report.armed.len(), 5);
    }

    #[test]
    fn optional_fields_are_never_marked() {
        let mut form = signup();
        fill(&mut form);
        let report = validator().validate(&form);
        assert!(!report.markers.contains_key(&FieldId::new(0, 2)));
    }

    #[test]
    fn first_failure_stops_the_walk() {
        let mut form = signup();
        fill(&mut form);
        form.set_value(FieldId::new(0, 1), "   ");
        form.set_value(FieldId::new(1, 0), "");

        let report = validator().validate(&form);
        assert_eq!(report.first_invalid, Some(FieldId::new(0, 1)));
        assert_eq!(report.markers[&FieldId::new(0, 1)], FieldMarker::Error);
        assert!(!report.markers.contains_key(&FieldId::new(1, 0)));
        assert_eq!(
            report.scroll,
            Some(ScrollCommand { axis: Axis::Horizontal, delta: -1000.0 })
        );
    }

    #[test]
    fn email_without_at_is_invalid() {
        let mut form = signup();
        fill(&mut form);
        form.set_value(FieldId::new(1, 0), "ada.uni.edu");
        let report = validator().validate(&form);
        assert_eq!(report.first_invalid, Some(FieldId::new(1, 0)));
        assert_eq!(report.scroll.map(|s| s.delta), Some(-500.0));
    }

    #[test]
    fn column_flow_scrolls_positive() {
        let mut form = signup();
        fill(&mut form);
        form.set_value(FieldId::new(0, 0), "");
        let report = FormValidator::new(CardNavigator::new(PageFlow::Column)).validate(&form);
        assert_eq!(
            report.scroll,
            Some(ScrollCommand { axis: Axis::Vertical, delta: 1000.0 })
        );
    }

    #[test]
    fn unchecked_checkbox_marks_but_does_not_scroll() {
        let mut form = signup();
        fill(&mut form);
        let terms = form.find("terms").unwrap();
        form.set_checked(terms, false);
        let report = validator().validate(&form);
        assert_eq!(report.markers[&terms], FieldMarker::UncheckedError);
        assert_eq!(report.scroll, None);
        assert!(!report.is_valid());
    }

    #[test]
    fn confirm_mismatch_checked_even_after_early_exit() {
        let mut form = signup();
        fill(&mut form);
        form.set_value(FieldId::new(0, 0), "");
        let confirm = form.find(CONFIRM_PASSWORD_FIELD).unwrap();
        form.set_value(confirm, "different");

        let report = validator().validate(&form);
        assert_eq!(report.first_invalid, Some(FieldId::new(0, 0)));
        assert!(report.confirm_mismatch);
        assert_eq!(report.markers[&confirm], FieldMarker::Error);
        assert_eq!(report.error_count(), 2);
    }

    #[test]
    fn confirm_mismatch_is_not_armed() {
        let mut form = signup();
        fill(&mut form);
        let confirm = form.find(CONFIRM_PASSWORD_FIELD).unwrap();
        form.set_value(confirm, "nope");
        let report = validator().validate(&form);
        assert!(!report.armed.contains(&confirm));
        assert_eq!(report.scroll, None);
    }

    #[test]
    fn armed_visual_toggles_emphasis() {
        let config = PageConfig::default();
        let mut form = signup();
        fill(&mut form);
        let report = validator().validate(&form);

        let mut visuals = BTreeMap::new();
        report.apply(&mut visuals);
        let visual = visuals.get_mut(&FieldId::new(0, 0)).unwrap();
        assert_eq!(visual.style(&config), "box-shadow: 0 1px 0 0 #000;");
        visual.focus();
        assert_eq!(visual.marker, Some(FieldMarker::Emphasis));
        assert_eq!(visual.style(&config), "box-shadow: 0 2px 0 0 #00d4aa;");
        visual.blur();
        assert_eq!(visual.marker, Some(FieldMarker::Neutral));
    }

    #[test]
    fn unarmed_visual_ignores_focus() {
        let mut visual = FieldVisual {
            marker: Some(FieldMarker::Error),
            emphasis_armed: false,
        };
        visual.focus();
        assert_eq!(visual.marker, Some(FieldMarker::Error));
        assert_eq!(FieldVisual::default().style(&PageConfig::default()), "");
    }

    #[test]
    fn unchecked_marker_uses_glow() {
        let shadow = FieldMarker::UncheckedError.box_shadow(&PageConfig::default());
        assert_eq!(shadow, "#ff3366 0px 1px 4px, #ff3366 0px 0px 0px 3px");
    }
}
