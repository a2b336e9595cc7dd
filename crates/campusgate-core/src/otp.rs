//! One-time-code box row.
//!
//! A fixed number of single-character boxes kept in sync with pasted,
//! typed and deleted input. Every operation returns the index of the box
//! that should receive focus next, if focus should move.

/// Number of boxes on the verification page.
pub const DEFAULT_OTP_LENGTH: usize = 6;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OtpSlots {
    boxes: Vec<String>,
    focused: Option<usize>,
}

impl Default for OtpSlots {
    fn default() -> Self {
        Self::new(DEFAULT_OTP_LENGTH)
    }
}

/// Remove whitespace and hyphens from pasted text.
pub fn sanitize(clip: &str) -> String {
    clip.chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect()
}

impl OtpSlots {
    pub fn new(len: usize) -> Self {
        Self {
            boxes: vec![String::new(); len],
            focused: None,
        }
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    pub fn boxes(&self) -> &[String] {
        &self.boxes
    }

    pub fn value(&self, index: usize) -> &str {
        self.boxes.get(index).map(String::as_str).unwrap_or_default()
    }

    /// The combined code across all boxes.
    pub fn code(&self) -> String {
        self.boxes.concat()
    }

    pub fn is_complete(&self) -> bool {
        !self.boxes.is_empty() && self.boxes.iter().all(|b| !b.is_empty())
    }

    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    /// Record that the view moved focus to `index`.
    pub fn set_focus(&mut self, index: usize) {
        if index < self.boxes.len() {
            self.focused = Some(index);
        }
    }

    fn move_focus(&mut self, target: Option<usize>) -> Option<usize> {
        if let Some(index) = target {
            self.focused = Some(index);
        }
        target
    }

    /// Distribute pasted text one character per box from box 0.
    ///
    /// Boxes past the pasted length are cleared; characters past the last
    /// box are dropped. Focus lands on box `min(len, pasted) - 1`.
    pub fn paste(&mut self, clip: &str) -> Option<usize> {
        let pin: Vec<char> = sanitize(clip).chars().collect();
        for (i, slot) in self.boxes.iter_mut().enumerate() {
            *slot = pin.get(i).map(|c| c.to_string()).unwrap_or_default();
        }
        let target = self.boxes.len().min(pin.len()).checked_sub(1);
        tracing::debug!(pasted = pin.len(), ?target, "distributed pasted code");
        self.move_focus(target)
    }

    /// Typed input into box `index`; `value` is the box's new content.
    ///
    /// A non-empty value advances focus unless this is the last box.
    pub fn input(&mut self, index: usize, value: &str) -> Option<usize> {
        let slot = self.boxes.get_mut(index)?;
        *slot = value.to_string();
        let target = (!value.is_empty() && index + 1 < self.boxes.len()).then_some(index + 1);
        self.move_focus(target)
    }

    /// Backspace pressed in box `index`.
    ///
    /// An empty box that is not the first retreats focus. The keydown runs
    /// before the platform deletes anything, so a non-empty box stays put.
    pub fn backspace(&mut self, index: usize) -> Option<usize> {
        let empty = self.boxes.get(index).map(String::is_empty)?;
        let target = (empty && index > 0).then(|| index - 1);
        self.move_focus(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_strips_spaces_and_hyphens() {
        assert_eq!(sanitize(" 12-34 \t56\n"), "123456");
        assert_eq!(sanitize("--"), "");
    }

    #[test]
    fn paste_fills_boxes_and_focuses_last_filled() {
        let mut otp = OtpSlots::new(6);
        assert_eq!(otp.paste("123-456"), Some(5));
        assert_eq!(otp.code(), "123456");
        assert!(otp.is_complete());
        assert_eq!(otp.focused(), Some(5));
    }

    #[test]
    fn short_paste_leaves_trailing_boxes_empty() {
        let mut otp = OtpSlots::new(6);
        otp.input(5, "9");
        assert_eq!(otp.paste("12"), Some(1));
        assert_eq!(otp.boxes(), &["1", "2", "", "", "", ""]);
        assert!(!otp.is_complete());
    }

    #[test]
    fn long_paste_is_truncated() {
        let mut otp = OtpSlots::new(4);
        assert_eq!(otp.paste("abcdefgh"), Some(3));
        assert_eq!(otp.code(), "abcd");
    }

    #[test]
    fn empty_paste_clears_without_focus() {
        let mut otp = OtpSlots::new(4);
        otp.paste("1234");
        assert_eq!(otp.paste(" - "), None);
        assert_eq!(otp.code(), "");
        assert_eq!(otp.focused(), Some(3));
    }

    #[test]
    fn typing_advances_except_at_end() {
        let mut otp = OtpSlots::new(3);
        assert_eq!(otp.input(0, "7"), Some(1));
        assert_eq!(otp.input(1, "8"), Some(2));
        assert_eq!(otp.input(2, "9"), None);
        assert_eq!(otp.code(), "789");
    }

    #[test]
    fn clearing_a_box_does_not_advance() {
        let mut otp = OtpSlots::new(3);
        otp.input(0, "7");
        assert_eq!(otp.input(0, ""), None);
    }

    #[test]
    fn backspace_on_empty_retreats_except_at_start() {
        let mut otp = OtpSlots::new(3);
        assert_eq!(otp.backspace(2), Some(1));
        assert_eq!(otp.backspace(0), None);
        otp.input(1, "5");
        assert_eq!(otp.backspace(1), None);
    }

    #[test]
    fn zero_length_row_is_inert() {
        let mut otp = OtpSlots::new(0);
        assert!(otp.is_empty());
        assert_eq!(otp.paste("1234"), None);
        assert_eq!(otp.input(0, "1"), None);
        assert_eq!(otp.backspace(0), None);
        assert!(!otp.is_complete());
    }

    #[test]
    fn multibyte_characters_occupy_one_box() {
        let mut otp = OtpSlots::new(3);
        otp.paste("é-ß");
        assert_eq!(otp.boxes(), &["é", "ß", ""]);
    }
}
