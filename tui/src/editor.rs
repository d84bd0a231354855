/// Minimal multiline edit buffer for the content pane: insert, delete
/// and horizontal cursor movement over char boundaries. No undo history.
#[derive(Debug, Default, Clone)]
pub struct EditorBuffer {
    buffer: String,
    cursor: usize,
}

impl EditorBuffer {
    /// Buffer seeded with `text`, cursor at the end.
    pub fn with_text(text: &str) -> Self {
        Self {
            buffer: text.to_string(),
            cursor: text.len(),
        }
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn insert_char(&mut self, ch: char) {
        self.buffer.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    pub fn backspace(&mut self) -> bool {
        let Some(prev) = self.prev_boundary() else {
            return false;
        };
        self.buffer.drain(prev..self.cursor);
        self.cursor = prev;
        true
    }

    pub fn move_left(&mut self) -> bool {
        match self.prev_boundary() {
            Some(prev) => {
                self.cursor = prev;
                true
            }
            None => false,
        }
    }

    pub fn move_right(&mut self) -> bool {
        match self.buffer[self.cursor..].chars().next() {
            Some(ch) => {
                self.cursor += ch.len_utf8();
                true
            }
            None => false,
        }
    }

    /// Cursor position as (line index, text of the line before the cursor),
    /// for placing the terminal cursor.
    pub fn cursor_line_prefix(&self) -> (usize, &str) {
        let before = &self.buffer[..self.cursor];
        let line = before.matches('\n').count();
        let start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
        (line, &before[start..])
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.buffer[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
    }
}
