//! Local text buffer behind the composer input.

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ComposerState {
    text: String,
    /// Cursor position as a character index, not a byte offset.
    cursor_position: usize,
}

impl ComposerState {
    pub fn text(&self) -> &str {
        &self.text
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Replaces the whole buffer and parks the cursor at its end.
    pub fn on_text_changed(&mut self, new_text: impl Into<String>) {
        self.text = new_text.into();
        self.cursor_position = self.text.chars().count();
    }

    /// Hands out the buffer for submission and resets it.
    ///
    /// Emptiness is checked exactly: whitespace-only text is still submitted.
    pub fn take_submission(&mut self) -> Option<String> {
        if self.text.is_empty() {
            return None;
        }

        self.cursor_position = 0;
        Some(std::mem::take(&mut self.text))
    }

    pub fn insert_char(&mut self, ch: char) {
        let byte_idx = self.char_to_byte_index(self.cursor_position);
        self.text.insert(byte_idx, ch);
        self.cursor_position += 1;
    }

    /// Backspace.
    pub fn delete_char_before(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
            self.remove_char_at_cursor();
        }
    }

    /// Delete key.
    pub fn delete_char_at(&mut self) {
        if self.cursor_position < self.char_count() {
            self.remove_char_at_cursor();
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.char_count() {
            self.cursor_position += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_position = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_position = self.char_count();
    }

    /// Text before the cursor, used to place the terminal cursor.
    pub fn text_before_cursor(&self) -> &str {
        &self.text[..self.char_to_byte_index(self.cursor_position)]
    }

    fn remove_char_at_cursor(&mut self) {
        let byte_idx = self.char_to_byte_index(self.cursor_position);
        let next_byte_idx = self.char_to_byte_index(self.cursor_position + 1);
        self.text.drain(byte_idx..next_byte_idx);
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    fn char_to_byte_index(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(byte_idx, _)| byte_idx)
            .unwrap_or(self.text.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> ComposerState {
        let mut state = ComposerState::default();
        for ch in text.chars() {
            state.insert_char(ch);
        }
        state
    }

    #[test]
    fn new_state_is_empty() {
        let state = ComposerState::default();

        assert!(state.is_empty());
        assert_eq!(state.text(), "");
        assert_eq!(state.cursor_position(), 0);
    }

    #[test]
    fn on_text_changed_replaces_buffer_unconditionally() {
        let mut state = typed("draft");

        state.on_text_changed("replacement");
        assert_eq!(state.text(), "replacement");
        assert_eq!(state.cursor_position(), 11);

        state.on_text_changed("");
        assert!(state.is_empty());
        assert_eq!(state.cursor_position(), 0);
    }

    #[test]
    fn take_submission_returns_text_and_resets_buffer() {
        let mut state = typed("hello");

        assert_eq!(state.take_submission(), Some("hello".to_owned()));
        assert!(state.is_empty());
        assert_eq!(state.cursor_position(), 0);
    }

    #[test]
    fn take_submission_ignores_empty_buffer() {
        let mut state = ComposerState::default();

        assert_eq!(state.take_submission(), None);
        assert!(state.is_empty());
    }

    #[test]
    fn take_submission_does_not_trim_whitespace() {
        let mut state = ComposerState::default();
        state.on_text_changed("   ");

        assert_eq!(state.take_submission(), Some("   ".to_owned()));
    }

    #[test]
    fn insert_char_at_middle_position() {
        let mut state = typed("Ho");
        state.move_cursor_left();
        state.insert_char('i');

        assert_eq!(state.text(), "Hio");
        assert_eq!(state.cursor_position(), 2);
    }

    #[test]
    fn delete_char_before_at_start_does_nothing() {
        let mut state = typed("H");
        state.move_cursor_home();
        state.delete_char_before();

        assert_eq!(state.text(), "H");
        assert_eq!(state.cursor_position(), 0);
    }

    #[test]
    fn delete_char_at_middle_removes_correct_char() {
        let mut state = typed("abc");
        state.move_cursor_home();
        state.move_cursor_right();
        state.delete_char_at();

        assert_eq!(state.text(), "ac");
        assert_eq!(state.cursor_position(), 1);
    }

    #[test]
    fn cursor_stays_within_bounds() {
        let mut state = typed("abc");

        state.move_cursor_right();
        assert_eq!(state.cursor_position(), 3);

        state.move_cursor_home();
        state.move_cursor_left();
        assert_eq!(state.cursor_position(), 0);

        state.move_cursor_end();
        assert_eq!(state.cursor_position(), 3);
    }

    #[test]
    fn handles_multibyte_characters() {
        let mut state = typed("Привет");
        assert_eq!(state.cursor_position(), 6);

        state.delete_char_before();
        assert_eq!(state.text(), "Приве");

        state.move_cursor_home();
        state.delete_char_at();
        assert_eq!(state.text(), "риве");
    }

    #[test]
    fn text_before_cursor_respects_char_boundaries() {
        let mut state = typed("héllo");
        state.move_cursor_home();
        state.move_cursor_right();
        state.move_cursor_right();

        assert_eq!(state.text_before_cursor(), "hé");
    }

    #[test]
    fn clearing_through_text_change_resets_cursor() {
        let mut state = typed("Hi");
        state.on_text_changed(String::new());

        assert!(state.is_empty());
        assert_eq!(state.cursor_position(), 0);
    }
}
