#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View {
    Timer,
    Todos,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TodoMode {
    Browsing,
    Adding,
    Editing { index: usize },
}

/// A single-line text input with mid-string cursor support and an optional
/// character limit.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextInput {
    pub value: String,
    pub cursor: usize,
    pub limit: Option<usize>,
}

impl TextInput {
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            ..Self::default()
        }
    }

    /// Replace the content and put the cursor at the end.
    pub fn set_value(&mut self, s: &str) {
        self.value = match self.limit {
            Some(limit) => s.chars().take(limit).collect(),
            None => s.to_string(),
        };
        self.cursor = self.value.len();
    }

    /// Insert a character at the cursor position. Ignored once the limit is
    /// reached.
    pub fn insert(&mut self, c: char) {
        if self
            .limit
            .is_some_and(|limit| self.value.chars().count() >= limit)
        {
            return;
        }
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the character immediately before the cursor (backspace).
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let new_cursor = self.prev_boundary(self.cursor);
        self.value.drain(new_cursor..self.cursor);
        self.cursor = new_cursor;
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.prev_boundary(self.cursor);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.value.len() {
            self.cursor = self.next_boundary(self.cursor);
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.value.len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Returns the string split at the cursor: (before, after).
    pub fn split_at_cursor(&self) -> (&str, &str) {
        (&self.value[..self.cursor], &self.value[self.cursor..])
    }

    fn prev_boundary(&self, pos: usize) -> usize {
        let mut p = pos - 1;
        while !self.value.is_char_boundary(p) {
            p -= 1;
        }
        p
    }

    fn next_boundary(&self, pos: usize) -> usize {
        let mut p = pos + 1;
        while p < self.value.len() && !self.value.is_char_boundary(p) {
            p += 1;
        }
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_backspace_at_cursor() {
        let mut input = TextInput::default();
        for c in "helo".chars() {
            input.insert(c);
        }
        input.move_left();
        input.insert('l');
        assert_eq!(input.value, "hello");
        assert_eq!(input.split_at_cursor(), ("hell", "o"));

        input.end();
        input.backspace();
        assert_eq!(input.value, "hell");
        input.home();
        input.backspace();
        assert_eq!(input.value, "hell");
    }

    #[test]
    fn multibyte_characters_keep_boundaries() {
        let mut input = TextInput::default();
        input.set_value("a☕b");
        input.move_left();
        input.move_left();
        assert_eq!(input.split_at_cursor(), ("a", "☕b"));
        input.move_right();
        assert_eq!(input.split_at_cursor(), ("a☕", "b"));
        input.backspace();
        assert_eq!(input.value, "ab");
    }

    #[test]
    fn limit_caps_typed_and_set_text() {
        let mut input = TextInput::with_limit(3);
        for c in "abcd".chars() {
            input.insert(c);
        }
        assert_eq!(input.value, "abc");

        input.set_value("☕☕☕☕");
        assert_eq!(input.value, "☕☕☕");
        assert_eq!(input.cursor, input.value.len());

        input.clear();
        assert_eq!(input.value, "");
        assert_eq!(input.limit, Some(3));
    }
}
