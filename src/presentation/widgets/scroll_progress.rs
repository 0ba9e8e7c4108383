//! Reading progress gauge pinned to the top row.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

/// One-row gauge filled in proportion to the scroll progress.
pub struct ScrollProgress {
    progress: f64,
    color: Color,
}

impl ScrollProgress {
    #[must_use]
    pub fn new(progress: f64, color: Color) -> Self {
        Self {
            progress: progress.clamp(0.0, 1.0),
            color,
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn filled(&self, width: u16) -> u16 {
        (self.progress * f64::from(width)).round() as u16
    }
}

impl Widget for ScrollProgress {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let filled = self.filled(area.width);
        let done = Style::default().fg(self.color);
        let rest = Style::default().fg(Color::DarkGray);

        for x in area.left()..area.right() {
            let (symbol, style) = if x - area.left() < filled {
                ("━", done)
            } else {
                ("─", rest)
            };
            buf[(x, area.y)].set_symbol(symbol).set_style(style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_proportion() {
        let area = Rect::new(0, 0, 10, 1);
        let mut buf = Buffer::empty(area);
        ScrollProgress::new(0.5, Color::Blue).render(area, &mut buf);

        let filled = (0..10).filter(|x| buf[(*x, 0)].symbol() == "━").count();
        assert_eq!(filled, 5);
    }

    #[test]
    fn test_progress_is_clamped() {
        assert_eq!(ScrollProgress::new(3.0, Color::Blue).filled(8), 8);
        assert_eq!(ScrollProgress::new(-1.0, Color::Blue).filled(8), 0);
    }
}
