//! Single-line text input used by the contact form.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthChar;

/// Text input field widget. The cursor is a char index, not a byte offset.
#[derive(Debug, Clone)]
pub struct TextInput {
    value: String,
    cursor: usize,
    focused: bool,
    placeholder: String,
    label: String,
    accent: Color,
}

impl TextInput {
    /// Creates new input with label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            value: String::new(),
            cursor: 0,
            focused: false,
            placeholder: String::new(),
            label: label.into(),
            accent: Color::Cyan,
        }
    }

    /// Sets placeholder text.
    #[must_use]
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = text.into();
        self
    }

    /// Sets the focused border color.
    #[must_use]
    pub const fn accent(mut self, color: Color) -> Self {
        self.accent = color;
        self
    }

    /// Sets focus state.
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Returns current value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Sets value and moves the cursor to the end.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.char_count();
    }

    /// Clears value.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map_or(self.value.len(), |(i, _)| i)
    }

    /// Inserts character at cursor.
    pub fn input_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    /// Deletes character before cursor.
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.value.remove(at);
        }
    }

    /// Deletes character at cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_index(self.cursor);
            self.value.remove(at);
        }
    }

    /// Moves cursor left.
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Moves cursor right.
    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    /// Moves cursor to start.
    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    /// Moves cursor to end.
    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Returns the slice that fits in `width` columns with the cursor visible,
    /// and the cursor column within it.
    fn visible_window(&self, width: usize) -> (&str, usize) {
        if width == 0 {
            return ("", 0);
        }

        let widths: Vec<usize> = self
            .value
            .chars()
            .map(|c| c.width().unwrap_or(0))
            .collect();

        let mut start = 0;
        let mut cursor_col: usize = widths[..self.cursor].iter().sum();
        while cursor_col >= width && start < self.cursor {
            cursor_col -= widths[start];
            start += 1;
        }

        let mut used = 0;
        let mut end = start;
        while end < widths.len() && used + widths[end] <= width {
            used += widths[end];
            end += 1;
        }

        let from = self.byte_index(start);
        let to = self.byte_index(end);
        (&self.value[from..to], cursor_col)
    }
}

impl Widget for &TextInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Style::default().fg(self.accent)
        } else {
            Style::default().fg(Color::Gray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(self.label.as_str());

        let inner = block.inner(area);
        block.render(area, buf);

        let (text, cursor_col) = self.visible_window(inner.width as usize);
        if self.value.is_empty() {
            Paragraph::new(self.placeholder.as_str())
                .style(Style::default().fg(Color::DarkGray))
                .render(inner, buf);
        } else {
            Paragraph::new(text)
                .style(Style::default().fg(Color::White))
                .render(inner, buf);
        }

        if self.focused && inner.width > 0 && inner.height > 0 {
            let cursor_x = inner.x + u16::try_from(cursor_col).unwrap_or(u16::MAX);
            if cursor_x < inner.right() {
                buf[(cursor_x, inner.y)]
                    .set_style(Style::default().bg(Color::White).fg(Color::Black));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_input_basic() {
        let mut input = TextInput::new("Name");
        assert!(input.value().is_empty());

        input.input_char('a');
        input.input_char('b');
        assert_eq!(input.value(), "ab");

        input.backspace();
        assert_eq!(input.value(), "a");
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = TextInput::new("Message");
        input.set_value("héllo");
        input.move_start();
        input.move_right();
        input.move_right();
        input.backspace();
        assert_eq!(input.value(), "hllo");

        input.input_char('é');
        input.move_end();
        input.input_char('!');
        assert_eq!(input.value(), "héllo!");

        input.move_start();
        input.delete();
        assert_eq!(input.value(), "éllo!");
    }

    #[test]
    fn test_visible_window_follows_cursor() {
        let mut input = TextInput::new("Subject");
        input.set_value("abcdefghij");

        let (text, col) = input.visible_window(4);
        assert_eq!(text, "hij");
        assert_eq!(col, 3);

        input.move_start();
        let (text, col) = input.visible_window(4);
        assert_eq!(text, "abcd");
        assert_eq!(col, 0);
    }

    #[test]
    fn test_renders_placeholder_and_label() {
        let input = TextInput::new("Email").placeholder("you@example.com");
        let area = Rect::new(0, 0, 24, 3);
        let mut buf = Buffer::empty(area);
        (&input).render(area, &mut buf);

        let top: String = (0..area.width).map(|x| buf[(x, 0)].symbol()).collect();
        let middle: String = (0..area.width).map(|x| buf[(x, 1)].symbol()).collect();
        assert!(top.contains("Email"));
        assert!(middle.contains("you@example.com"));
    }
}
