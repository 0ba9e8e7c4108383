use crate::domain::Section;
use crate::presentation::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

const NAV_GAP: u16 = 1;

pub struct HeaderBarStyle {
    pub background: Style,
    pub badge: Style,
    pub name: Style,
    pub nav: Style,
    pub nav_active: Style,
    pub nav_key: Style,
}

impl HeaderBarStyle {
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            badge: Style::default()
                .bg(theme.accent)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            name: theme.heading_style,
            nav_active: Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ..Self::default()
        }
    }
}

impl Default for HeaderBarStyle {
    fn default() -> Self {
        Self {
            background: Style::default(),
            badge: Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            name: Style::default().add_modifier(Modifier::BOLD),
            nav: Style::default().fg(Color::Gray),
            nav_active: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            nav_key: Style::default().fg(Color::DarkGray),
        }
    }
}

/// Site header: owner badge on the left, section navigation on the right.
pub struct HeaderBar<'a> {
    name: &'a str,
    initials: &'a str,
    active: Option<Section>,
    style: HeaderBarStyle,
}

impl<'a> HeaderBar<'a> {
    #[must_use]
    pub fn new(name: &'a str, initials: &'a str) -> Self {
        Self {
            name,
            initials,
            active: None,
            style: HeaderBarStyle::default(),
        }
    }

    #[must_use]
    pub const fn active(mut self, section: Option<Section>) -> Self {
        self.active = section;
        self
    }

    #[must_use]
    pub fn style(mut self, style: HeaderBarStyle) -> Self {
        self.style = style;
        self
    }

    fn nav_text(index: usize, section: Section) -> String {
        format!(" {} {} ", index + 1, section.title().to_lowercase())
    }

    /// Returns the clickable area of each navigation entry. Entries that do
    /// not fit after the name are dropped from the left.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn nav_areas(&self, area: Rect) -> Vec<(Section, Rect)> {
        let left_width = self.left_width();
        let mut x = area.right();
        let mut areas = Vec::new();

        for (index, section) in Section::NAV.iter().enumerate().rev() {
            let width = Self::nav_text(index, *section).width() as u16;
            if x < area.x + left_width + width + NAV_GAP {
                break;
            }
            x -= width;
            areas.push((*section, Rect::new(x, area.y, width, 1)));
            x -= NAV_GAP;
        }

        areas.reverse();
        areas
    }

    #[allow(clippy::cast_possible_truncation)]
    fn left_width(&self) -> u16 {
        (self.initials.width() + 2 + 1 + self.name.width()) as u16
    }
}

impl Widget for HeaderBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        for x in area.left()..area.right() {
            buf[(x, area.y)]
                .set_char(' ')
                .set_style(self.style.background);
        }

        let left_line = Line::from(vec![
            Span::styled(format!(" {} ", self.initials), self.style.badge),
            Span::raw(" "),
            Span::styled(self.name, self.style.name),
        ]);
        let left_area = Rect::new(area.x, area.y, self.left_width().min(area.width), 1);
        Paragraph::new(left_line).render(left_area, buf);

        for (section, nav_area) in self.nav_areas(area) {
            let nav_index = Section::NAV
                .iter()
                .position(|s| *s == section)
                .unwrap_or_default();
            let style = if self.active == Some(section) {
                self.style.nav_active
            } else {
                self.style.nav
            };
            let text = Self::nav_text(nav_index, section);
            let (key, label) = text.split_at(2);
            Paragraph::new(Line::from(vec![
                Span::styled(key.to_string(), self.style.nav_key),
                Span::styled(label.to_string(), style),
            ]))
            .render(nav_area, buf);
        }
    }
}
