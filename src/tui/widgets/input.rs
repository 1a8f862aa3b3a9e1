use std::cmp;

/// Single-line text input for the capture field.
///
/// Cursor arithmetic is in characters, not bytes, so multi-byte input moves
/// and deletes one visible character at a time.
#[derive(Debug, Clone, Default)]
pub struct Input {
    text: String,
    cursor_col: usize,
}

impl Input {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor_col(&self) -> usize {
        self.cursor_col
    }

    /// True if nothing but whitespace has been typed
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn insert_char(&mut self, ch: char) {
        let col = cmp::min(self.cursor_col, self.text.chars().count());
        let mut chars: Vec<char> = self.text.chars().collect();
        chars.insert(col, ch);
        self.text = chars.into_iter().collect();
        self.cursor_col = col + 1;
    }

    /// Delete the character before the cursor (Backspace)
    pub fn delete_char(&mut self) {
        let col = cmp::min(self.cursor_col, self.text.chars().count());
        if col == 0 {
            return;
        }
        let mut chars: Vec<char> = self.text.chars().collect();
        chars.remove(col - 1);
        self.text = chars.into_iter().collect();
        self.cursor_col = col - 1;
    }

    /// Delete the character under the cursor (Delete)
    pub fn delete_forward(&mut self) {
        let len = self.text.chars().count();
        let col = cmp::min(self.cursor_col, len);
        if col >= len {
            return;
        }
        let mut chars: Vec<char> = self.text.chars().collect();
        chars.remove(col);
        self.text = chars.into_iter().collect();
        self.cursor_col = col;
    }

    pub fn move_cursor_left(&mut self) {
        if self.cursor_col > 0 {
            self.cursor_col -= 1;
        }
    }

    pub fn move_cursor_right(&mut self) {
        let len = self.text.chars().count();
        if self.cursor_col < len {
            self.cursor_col += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_col = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_col = self.text.chars().count();
    }

    /// Take the current text out of the field, leaving it cleared with the
    /// cursor at the start. Used by the commit path after a successful add.
    pub fn take(&mut self) -> String {
        self.cursor_col = 0;
        std::mem::take(&mut self.text)
    }
}
