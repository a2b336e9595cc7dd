//! Form model: fields grouped into ordered cards.
//!
//! The page builds a [`Form`] once from its markup description and every
//! component works on that owned, indexable sequence instead of querying
//! the view again.

use crate::error::{FormError, FormResult};

/// Name of the primary password field.
pub const PASSWORD_FIELD: &str = "student-password";

/// Name of the password confirmation field.
pub const CONFIRM_PASSWORD_FIELD: &str = "student-sure-password";

/// Kind of form control backing a field
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Text,
    Password,
    /// Email-like input; must contain `@` to validate
    Email,
    Checkbox,
    /// Drop-down selection
    Select,
}

impl FieldKind {
    /// Value for the `type` attribute of an input element.
    ///
    /// Selects are not inputs and return `None`.
    pub fn input_type(&self) -> Option<&'static str> {
        match self {
            FieldKind::Text => Some("text"),
            FieldKind::Password => Some("password"),
            FieldKind::Email => Some("email"),
            FieldKind::Checkbox => Some("checkbox"),
            FieldKind::Select => None,
        }
    }

    pub fn is_checkbox(&self) -> bool {
        matches!(self, FieldKind::Checkbox)
    }
}

/// Position of a field: card index, then index within the card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldId {
    pub card: usize,
    pub index: usize,
}

impl FieldId {
    pub fn new(card: usize, index: usize) -> Self {
        Self { card, index }
    }
}

/// A named form control
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub value: String,
    /// Required fields carry the `form-input` marker and are validated
    pub required: bool,
    /// Checkbox state; ignored for other kinds
    pub checked: bool,
    /// Choices for select fields
    pub options: Vec<String>,
}

impl Field {
    pub fn new(name: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind,
            value: if kind.is_checkbox() {
                "on".to_string()
            } else {
                String::new()
            },
            required: false,
            checked: false,
            options: Vec::new(),
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }
}

/// One wizard step
#[derive(Clone, Debug, PartialEq)]
pub struct Card {
    pub title: String,
    pub fields: Vec<Field>,
    /// Width (row flow) or height (column flow) in pixels, measured from
    /// the rendered card. Zero until measured.
    pub extent: f64,
}

impl Card {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            fields: Vec::new(),
            extent: 0.0,
        }
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }
}

/// Ordered cards making up one page's form
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Form {
    pub cards: Vec<Card>,
}

impl Form {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// Every field in card order, then document order.
    pub fn fields(&self) -> impl Iterator<Item = (FieldId, &Field)> {
        self.cards.iter().enumerate().flat_map(|(c, card)| {
            card.fields
                .iter()
                .enumerate()
                .map(move |(i, field)| (FieldId::new(c, i), field))
        })
    }

    pub fn get(&self, id: FieldId) -> Option<&Field> {
        self.cards.get(id.card)?.fields.get(id.index)
    }

    pub fn get_mut(&mut self, id: FieldId) -> Option<&mut Field> {
        self.cards.get_mut(id.card)?.fields.get_mut(id.index)
    }

    /// Locate a field by name. Names are unique per page.
    pub fn find(&self, name: &str) -> Option<FieldId> {
        self.fields()
            .find(|(_, field)| field.name == name)
            .map(|(id, _)| id)
    }

    pub fn value_of(&self, name: &str) -> FormResult<&str> {
        let id = self
            .find(name)
            .ok_or_else(|| FormError::FieldNotFound(name.to_string()))?;
        Ok(self.get(id).map(|f| f.value.as_str()).unwrap_or_default())
    }

    pub fn set_value(&mut self, id: FieldId, value: impl Into<String>) {
        if let Some(field) = self.get_mut(id) {
            field.value = value.into();
        }
    }

    pub fn set_checked(&mut self, id: FieldId, checked: bool) {
        if let Some(field) = self.get_mut(id) {
            field.checked = checked;
        }
    }

    /// Record a measured card extent.
    pub fn set_extent(&mut self, card: usize, extent: f64) -> FormResult<()> {
        let len = self.cards.len();
        let card = self
            .cards
            .get_mut(card)
            .ok_or(FormError::CardOutOfRange { index: card, len })?;
        card.extent = extent;
        Ok(())
    }

    /// Extent of the first card; navigation steps by this amount.
    pub fn step_extent(&self) -> f64 {
        self.cards.first().map(|c| c.extent).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Form {
        Form::new(vec![
            Card::new("who")
                .field(Field::new("first-name", "First name", FieldKind::Text).required())
                .field(Field::new("nickname", "Nickname", FieldKind::Text)),
            Card::new("contact").field(
                Field::new("student-email", "Email", FieldKind::Email).required(),
            ),
        ])
    }

    #[test]
    fn fields_iterate_in_card_then_document_order() {
        let form = sample();
        let ids: Vec<FieldId> = form.fields().map(|(id, _)| id).collect();
        assert_eq!(
            ids,
            vec![FieldId::new(0, 0), FieldId::new(0, 1), FieldId::new(1, 0)]
        );
    }

    #[test]
    fn find_and_value_of() {
        let mut form = sample();
        let id = form.find("student-email").unwrap();
        assert_eq!(id, FieldId::new(1, 0));
        form.set_value(id, "a@b.c");
        assert_eq!(form.value_of("student-email").unwrap(), "a@b.c");
        assert_eq!(
            form.value_of("missing"),
            Err(FormError::FieldNotFound("missing".to_string()))
        );
    }

    #[test]
    fn checkbox_defaults_to_on_value() {
        let field = Field::new("terms", "Terms", FieldKind::Checkbox);
        assert_eq!(field.value, "on");
        assert!(!field.checked);
        assert_eq!(field.kind.input_type(), Some("checkbox"));
        assert_eq!(FieldKind::Select.input_type(), None);
    }

    #[test]
    fn set_extent_bounds_checked() {
        let mut form = sample();
        form.set_extent(0, 420.0).unwrap();
        assert_eq!(form.step_extent(), 420.0);
        assert_eq!(
            form.set_extent(5, 1.0),
            Err(FormError::CardOutOfRange { index: 5, len: 2 })
        );
    }

    #[test]
    fn empty_form_has_zero_step() {
        assert_eq!(Form::default().step_extent(), 0.0);
        assert_eq!(Form::default().fields().count(), 0);
    }
}
