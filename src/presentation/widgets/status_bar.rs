//! Bottom status line: form banners on the left, key hints on the right.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::domain::FormStatus;

/// Status bar severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    /// Informational.
    Info,
    /// Success.
    Success,
    /// Error.
    Error,
}

impl StatusLevel {
    /// Returns color for level.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Info => Color::Cyan,
            Self::Success => Color::Green,
            Self::Error => Color::Red,
        }
    }
}

/// Status bar widget.
#[derive(Debug, Clone)]
pub struct StatusBar {
    message: String,
    hints: Vec<(&'static str, &'static str)>,
    level: StatusLevel,
}

impl StatusBar {
    /// Creates empty status bar.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            message: String::new(),
            hints: Vec::new(),
            level: StatusLevel::Info,
        }
    }

    /// Sets the message.
    #[must_use]
    pub fn message(mut self, content: impl Into<String>) -> Self {
        self.message = content.into();
        self
    }

    /// Sets key hints as `(key, action)` pairs shown right-aligned.
    #[must_use]
    pub fn hints(mut self, hints: &[(&'static str, &'static str)]) -> Self {
        self.hints = hints.to_vec();
        self
    }

    /// Sets status level.
    #[must_use]
    pub const fn level(mut self, level: StatusLevel) -> Self {
        self.level = level;
        self
    }

    /// Creates a bar showing the contact form banner, if any.
    #[must_use]
    pub fn from_form_status(status: &FormStatus) -> Self {
        match status {
            FormStatus::None => Self::new(),
            FormStatus::Success(msg) => Self::new().message(msg).level(StatusLevel::Success),
            FormStatus::Error(msg) => Self::new().message(msg).level(StatusLevel::Error),
        }
    }

    fn hint_spans(&self) -> (Vec<Span<'static>>, usize) {
        let key_style = Style::default()
            .fg(Color::Black)
            .bg(Color::Gray)
            .add_modifier(Modifier::BOLD);
        let label_style = Style::default().fg(Color::DarkGray);

        let mut spans = Vec::with_capacity(self.hints.len() * 2);
        let mut width = 0;
        for (key, label) in &self.hints {
            let key = format!(" {key} ");
            let label = format!(" {label}  ");
            width += key.width() + label.width();
            spans.push(Span::styled(key, key_style));
            spans.push(Span::styled(label, label_style));
        }
        (spans, width)
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for &StatusBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let width = area.width as usize;
        let message_style = Style::default()
            .fg(self.level.color())
            .add_modifier(Modifier::BOLD);

        let (hint_spans, hints_width) = self.hint_spans();
        let message = format!(" {}", self.message);
        let message_width = message.width();

        let mut spans = vec![Span::styled(message, message_style)];
        if message_width + hints_width <= width {
            spans.push(Span::raw(" ".repeat(width - message_width - hints_width)));
            spans.extend(hint_spans);
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
