// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

/// Single-line input of the form: the FASTA path (mode B), the requested length (mode C) and the
/// export path of a generated sequence.
///
/// The text is kept as entered; checking it (path exists, length in range) is left to the app,
/// which reports what is wrong instead of the editor quietly fixing it. Pasted line breaks are
/// the only thing removed, since the input has a single line.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LineEditor {
    chars: Vec<char>,
    cursor: usize,
}

impl LineEditor {
    pub fn new() -> Self {
        Self::default()
    }

    // Prefilled input (default length, configured export path); cursor at the end so that typing
    // extends it.
    pub fn from_text(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let cursor = chars.len();
        Self { chars, cursor }
    }

    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn insert_char(&mut self, c: char) {
        self.chars.insert(self.cursor, c);
        self.cursor += 1;
    }

    pub fn insert_str(&mut self, s: &str) {
        for c in s.chars().filter(|c| !matches!(c, '\n' | '\r')) {
            self.insert_char(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = self.cursor.checked_sub(1) {
            self.chars.remove(prev);
            self.cursor = prev;
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.chars.len());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.chars.len();
    }
}

#[cfg(test)]
mod tests {
    use super::LineEditor;
    use crate::seq::random::parse_length;

    #[test]
    fn default_length_is_edited_in_place() {
        let mut editor = LineEditor::from_text("50000");
        editor.move_home();
        editor.move_right();
        editor.insert_char('0');
        assert_eq!(editor.text(), "500000");
        editor.move_end();
        editor.backspace();
        assert_eq!(parse_length(&editor.text()).unwrap(), 50_000);
    }

    #[test]
    fn pasted_length_keeps_stray_chars_for_validation() {
        let mut editor = LineEditor::new();
        editor.insert_str("50\t000\n");
        assert_eq!(editor.text(), "50\t000");
        assert!(parse_length(&editor.text()).is_err());
        editor.clear();
        editor.insert_str("1,000,000\r\n");
        assert_eq!(parse_length(&editor.text()).unwrap(), 1_000_000);
    }

    #[test]
    fn non_ascii_path() {
        let mut editor = LineEditor::from_text("données/");
        assert_eq!(editor.cursor(), 8);
        editor.insert_str("séq.fa");
        assert_eq!(editor.text(), "données/séq.fa");
        editor.move_left();
        editor.move_left();
        editor.move_left();
        editor.backspace();
        assert_eq!(editor.text(), "données/sé.fa");
        editor.backspace();
        editor.backspace();
        editor.backspace();
        assert_eq!(editor.text(), "données.fa");
    }
}
