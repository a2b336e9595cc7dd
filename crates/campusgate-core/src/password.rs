//! Password visibility toggle state.

/// Whether a password field renders its value
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Obscured,
    Plain,
}

/// Icon shown on the toggle control
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EyeIcon {
    /// Shown while the value is plain
    Open,
    /// Shown while the value is obscured
    Slashed,
}

impl Visibility {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Visibility::Obscured => Visibility::Plain,
            Visibility::Plain => Visibility::Obscured,
        }
    }

    pub fn toggle(&mut self) {
        *self = self.toggled();
    }

    /// `type` attribute for the underlying input.
    pub fn input_type(&self) -> &'static str {
        match self {
            Visibility::Obscured => "password",
            Visibility::Plain => "text",
        }
    }

    pub fn icon(&self) -> EyeIcon {
        match self {
            Visibility::Obscured => EyeIcon::Slashed,
            Visibility::Plain => EyeIcon::Open,
        }
    }
}
