use lexicon_search::normalize_query;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CharClass {
    Word,
    Whitespace,
    Other,
}

/// Single-line query field state. Offsets are UTF-8 byte indices that
/// always sit on char boundaries.
#[derive(Clone, Debug, Default)]
pub struct QueryInput {
    text: String,
    cursor: usize,
}

#[allow(dead_code)]
impl QueryInput {
    #[inline]
    fn char_class(ch: char) -> CharClass {
        if ch.is_alphanumeric() || ch == '_' {
            CharClass::Word
        } else if ch.is_whitespace() {
            CharClass::Whitespace
        } else {
            CharClass::Other
        }
    }

    pub fn new(text: String) -> Self {
        let cursor = text.len();
        Self { text, cursor }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// The normalized query for the current text.
    pub fn query(&self) -> String {
        normalize_query(&self.text)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Cursor position in chars, for placing the terminal caret.
    pub fn cursor_column(&self) -> usize {
        self.text[..self.cursor].chars().count()
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn insert_char(&mut self, ch: char) {
        self.text.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    fn previous_char_boundary(&self, offset: usize) -> usize {
        self.text[..offset]
            .char_indices()
            .next_back()
            .map(|(idx, _)| idx)
            .unwrap_or(0)
    }

    fn next_char_boundary(&self, offset: usize) -> usize {
        self.text[offset..]
            .chars()
            .next()
            .map(|ch| offset + ch.len_utf8())
            .unwrap_or(self.text.len())
    }

    fn previous_word_boundary(&self, offset: usize) -> usize {
        if offset == 0 {
            return 0;
        }

        let mut boundary = 0;
        let mut seen_word = false;
        for (idx, ch) in self.text[..offset].char_indices().rev() {
            if Self::char_class(ch) == CharClass::Word {
                seen_word = true;
                boundary = idx;
                continue;
            }
            if seen_word {
                boundary = idx + ch.len_utf8();
                break;
            }
            boundary = idx;
        }
        boundary
    }

    pub fn move_left(&mut self) {
        self.cursor = self.previous_char_boundary(self.cursor);
    }

    pub fn move_right(&mut self) {
        self.cursor = self.next_char_boundary(self.cursor);
    }

    pub fn move_to_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_to_end(&mut self) {
        self.cursor = self.text.len();
    }

    /// Returns whether any text was removed.
    fn delete_range(&mut self, start: usize, end: usize) -> bool {
        if start >= end {
            return false;
        }
        self.text.replace_range(start..end, "");
        self.cursor = start;
        true
    }

    pub fn delete_backward(&mut self) -> bool {
        let start = self.previous_char_boundary(self.cursor);
        self.delete_range(start, self.cursor)
    }

    pub fn delete_forward(&mut self) -> bool {
        let end = self.next_char_boundary(self.cursor);
        self.delete_range(self.cursor, end)
    }

    pub fn delete_word_backward(&mut self) -> bool {
        let start = self.previous_word_boundary(self.cursor);
        self.delete_range(start, self.cursor)
    }

    pub fn delete_to_start(&mut self) -> bool {
        self.delete_range(0, self.cursor)
    }
}
