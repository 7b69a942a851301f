// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

// Multi-line input for pasted or typed FASTA text. Every char is kept exactly as entered (only
// line endings are normalized), so that validation sees what the user supplied. Columns are char
// indices.
#[derive(Clone, Debug, PartialEq)]
pub struct TextArea {
    lines: Vec<Vec<char>>,
    row: usize,
    col: usize,
    scroll: usize,
}

impl Default for TextArea {
    fn default() -> Self {
        TextArea::new("")
    }
}

impl TextArea {
    pub fn new(text: &str) -> Self {
        let mut lines: Vec<Vec<char>> = text.lines().map(|line| line.chars().collect()).collect();
        if lines.is_empty() {
            lines.push(Vec::new());
        }
        Self {
            lines,
            row: 0,
            col: 0,
            scroll: 0,
        }
    }

    pub fn text(&self) -> String {
        self.lines().collect::<Vec<String>>().join("\n")
    }

    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.lines.iter().map(|line| line.iter().collect())
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn is_blank(&self) -> bool {
        self.lines
            .iter()
            .all(|line| line.iter().all(|c| c.is_whitespace()))
    }

    pub fn clear(&mut self) {
        *self = TextArea::default();
    }

    pub fn insert_char(&mut self, c: char) {
        let idx = self.col;
        let line = self.current_line_mut();
        let insert_at = idx.min(line.len());
        line.insert(insert_at, c);
        self.col = insert_at + 1;
    }

    // Bracketed paste: "\r\n" and lone '\r' become line breaks.
    pub fn insert_str(&mut self, s: &str) {
        let normalized = s.replace("\r\n", "\n").replace('\r', "\n");
        for c in normalized.chars() {
            if c == '\n' {
                self.newline();
            } else {
                self.insert_char(c);
            }
        }
    }

    pub fn backspace(&mut self) {
        if self.col > 0 {
            let idx = self.col;
            let line = self.current_line_mut();
            let idx = idx.min(line.len());
            if idx > 0 {
                line.remove(idx - 1);
                self.col = idx - 1;
            }
        } else if self.row > 0 {
            let current = self.lines.remove(self.row);
            self.row -= 1;
            let prev_len = self.lines[self.row].len();
            self.lines[self.row].extend(current);
            self.col = prev_len;
        }
    }

    pub fn delete_word_left(&mut self) {
        let start = {
            let line = self.current_line();
            if line.is_empty() {
                self.col = 0;
                return;
            }
            let mut idx = self.col.min(line.len());
            while idx > 0 && line[idx - 1].is_whitespace() {
                idx -= 1;
            }
            while idx > 0 && !line[idx - 1].is_whitespace() {
                idx -= 1;
            }
            idx
        };
        while self.col > start {
            self.backspace();
        }
    }

    pub fn newline(&mut self) {
        let idx = self.col;
        let line = self.current_line_mut();
        let split_at = idx.min(line.len());
        let remainder = line.split_off(split_at);
        self.row += 1;
        self.lines.insert(self.row, remainder);
        self.col = 0;
    }

    pub fn move_left(&mut self) {
        if self.col > 0 {
            self.col -= 1;
        } else if self.row > 0 {
            self.row -= 1;
            self.col = self.lines[self.row].len();
        }
    }

    pub fn move_right(&mut self) {
        let len = self.current_line().len();
        if self.col < len {
            self.col += 1;
        } else if self.row + 1 < self.lines.len() {
            self.row += 1;
            self.col = 0;
        }
    }

    pub fn move_up(&mut self) {
        if self.row > 0 {
            self.row -= 1;
            self.col = self.col.min(self.current_line().len());
        }
    }

    pub fn move_down(&mut self) {
        if self.row + 1 < self.lines.len() {
            self.row += 1;
            self.col = self.col.min(self.current_line().len());
        }
    }

    pub fn move_line_start(&mut self) {
        self.col = 0;
    }

    pub fn move_line_end(&mut self) {
        self.col = self.current_line().len();
    }

    pub fn ensure_visible(&mut self, height: usize) {
        if self.row < self.scroll {
            self.scroll = self.row;
        } else if self.row >= self.scroll + height {
            self.scroll = self.row.saturating_sub(height.saturating_sub(1));
        }
    }

    fn current_line(&self) -> &Vec<char> {
        &self.lines[self.row]
    }

    fn current_line_mut(&mut self) -> &mut Vec<char> {
        &mut self.lines[self.row]
    }
}
