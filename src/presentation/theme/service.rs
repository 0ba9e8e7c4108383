use super::adapter::ColorConverter;
use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;

const FALLBACK_ACCENT: Color = Color::Blue;

/// Styles shared by every screen.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub accent: Color,
    /// Deep variant of the accent, used for the transition panels.
    pub panel: Color,
    pub heading_style: Style,
    pub link_style: Style,
    pub selection_style: Style,
    pub dimmed_style: Style,
    pub base_style: Style,
    pub success_style: Style,
    pub error_style: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new("Blue")
    }
}

impl Theme {
    #[must_use]
    pub fn new(accent_color_str: &str) -> Self {
        Self::from_color(parse_color(accent_color_str))
    }

    #[must_use]
    pub fn from_color(accent: Color) -> Self {
        let accent_hsl = ColorConverter::to_hsl(accent);

        let mut panel_hsl = accent_hsl;
        panel_hsl.l = 0.25;
        panel_hsl.s = 0.7;
        let panel = ColorConverter::to_ratatui(panel_hsl);

        let mut selection_bg_hsl = accent_hsl;
        selection_bg_hsl.l = 0.2;
        selection_bg_hsl.s = 0.3;
        let selection_bg = ColorConverter::to_ratatui(selection_bg_hsl);

        let mut link_hsl = accent_hsl;
        link_hsl.l = link_hsl.l.max(0.6);
        let link = ColorConverter::to_ratatui(link_hsl);

        Self {
            accent,
            panel,
            heading_style: Style::default().fg(accent).add_modifier(Modifier::BOLD),
            link_style: Style::default().fg(link).add_modifier(Modifier::UNDERLINED),
            selection_style: Style::default().bg(selection_bg).fg(Color::White),
            dimmed_style: Style::default().fg(Color::DarkGray),
            base_style: Style::default().fg(Color::Reset),
            success_style: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            error_style: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        }
    }
}

fn parse_color(s: &str) -> Color {
    if let Ok(c) = Color::from_str(s) {
        return c;
    }

    if s.starts_with('#')
        && let Some((r, g, b)) = parse_hex_color(s)
    {
        return Color::Rgb(r, g, b);
    }

    match s.to_lowercase().as_str() {
        "indigo" => Color::Indexed(63),
        "orange" => Color::Indexed(208),
        _ => FALLBACK_ACCENT,
    }
}

fn parse_hex_color(s: &str) -> Option<(u8, u8, u8)> {
    let s = s.trim_start_matches('#');
    if !s.is_ascii() {
        return None;
    }

    let channel = |hex: &str| u8::from_str_radix(hex, 16).ok();
    match s.len() {
        6 => Some((channel(&s[0..2])?, channel(&s[2..4])?, channel(&s[4..6])?)),
        3 => {
            let double = |i: usize| channel(&s[i..=i].repeat(2));
            Some((double(0)?, double(1)?, double(2)?))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("Red"), Color::Red);
        assert_eq!(parse_color("blue"), Color::Blue);
        assert_eq!(parse_color("#3b82f6"), Color::Rgb(0x3b, 0x82, 0xf6));
        assert_eq!(parse_color("#0f0"), Color::Rgb(0, 255, 0));
        assert_eq!(parse_color("Indigo"), Color::Indexed(63));
        assert_eq!(parse_color("not-a-color"), FALLBACK_ACCENT);
        assert_eq!(parse_color("#12"), FALLBACK_ACCENT);
    }

    #[test]
    fn test_theme_uses_accent_for_headings() {
        let theme = Theme::new("#3b82f6");
        assert_eq!(theme.accent, Color::Rgb(0x3b, 0x82, 0xf6));
        assert_eq!(theme.heading_style.fg, Some(theme.accent));
        assert_ne!(theme.panel, theme.accent);
    }
}
