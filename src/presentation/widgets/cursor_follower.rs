//! Ring that grows around hovered interactive elements.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Widget},
};

use crate::domain::hover::{HoverState, MAX_SCALE};

/// Draws the follower ring for a [`HoverState`].
pub struct CursorFollower<'a> {
    hover: &'a HoverState,
    color: Color,
}

impl<'a> CursorFollower<'a> {
    #[must_use]
    pub const fn new(hover: &'a HoverState, color: Color) -> Self {
        Self { hover, color }
    }

    /// Ring bounds around the hovered cell, clipped to `area`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn ring_area(&self, area: Rect) -> Option<Rect> {
        let point = self.hover.follower_point()?;
        let scale = self.hover.scale().clamp(0.0, MAX_SCALE);
        let half_width = (scale * 2.0).ceil().max(1.0) as u16;
        let half_height = scale.ceil().max(1.0) as u16;

        let left = point.x.saturating_sub(half_width);
        let top = point.y.saturating_sub(half_height);
        let ring = Rect::new(left, top, half_width * 2 + 1, half_height * 2 + 1);
        let clipped = ring.intersection(area);
        (!clipped.is_empty()).then_some(clipped)
    }
}

impl Widget for CursorFollower<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(ring) = self.ring_area(area) else {
            return;
        };
        if ring.width < 2 || ring.height < 2 {
            return;
        }

        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.color))
            .render(ring, buf);
    }
}
