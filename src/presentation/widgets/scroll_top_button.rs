//! Floating scroll-to-top affordance.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

const LABEL: &str = "▲ top";
const WIDTH: u16 = 9;
const HEIGHT: u16 = 3;
const MARGIN: u16 = 2;

/// Button shown in the bottom-right corner of the page viewport.
pub struct ScrollTopButton {
    color: Color,
    hovered: bool,
}

impl ScrollTopButton {
    #[must_use]
    pub const fn new(color: Color) -> Self {
        Self {
            color,
            hovered: false,
        }
    }

    #[must_use]
    pub const fn hovered(mut self, hovered: bool) -> Self {
        self.hovered = hovered;
        self
    }

    /// Returns where the button sits inside `viewport`, if it fits.
    #[must_use]
    pub fn area_in(viewport: Rect) -> Option<Rect> {
        if viewport.width < WIDTH + MARGIN || viewport.height < HEIGHT + 1 {
            return None;
        }
        Some(Rect::new(
            viewport.right() - WIDTH - MARGIN,
            viewport.bottom() - HEIGHT - 1,
            WIDTH,
            HEIGHT,
        ))
    }
}

impl Widget for ScrollTopButton {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut style = Style::default().fg(Color::White).bg(self.color);
        if self.hovered {
            style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(style);
        Paragraph::new(LABEL).centered().block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchored_bottom_right() {
        let viewport = Rect::new(0, 2, 80, 20);
        let area = ScrollTopButton::area_in(viewport).unwrap();
        assert_eq!(area.right(), 78);
        assert_eq!(area.bottom(), 21);
    }

    #[test]
    fn test_hidden_in_tiny_viewport() {
        assert!(ScrollTopButton::area_in(Rect::new(0, 0, 8, 3)).is_none());
    }
}
