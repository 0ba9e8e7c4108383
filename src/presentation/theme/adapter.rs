//! Conversions between ratatui colors and `coolor` color spaces.

use coolor::{Hsl, Rgb};
use ratatui::style::Color;

/// Color math used by the theme and the fade animations.
pub struct ColorConverter;

impl ColorConverter {
    /// Resolves a terminal color to its approximate RGB value.
    #[must_use]
    pub fn to_rgb(color: Color) -> Rgb {
        let (r, g, b) = match color {
            Color::Rgb(r, g, b) => (r, g, b),
            Color::Black | Color::Reset => (0, 0, 0),
            Color::Red => ansi_to_rgb(1),
            Color::Green => ansi_to_rgb(2),
            Color::Yellow => ansi_to_rgb(3),
            Color::Blue => ansi_to_rgb(4),
            Color::Magenta => ansi_to_rgb(5),
            Color::Cyan => ansi_to_rgb(6),
            Color::Gray => ansi_to_rgb(7),
            Color::DarkGray => ansi_to_rgb(8),
            Color::LightRed => ansi_to_rgb(9),
            Color::LightGreen => ansi_to_rgb(10),
            Color::LightYellow => ansi_to_rgb(11),
            Color::LightBlue => ansi_to_rgb(12),
            Color::LightMagenta => ansi_to_rgb(13),
            Color::LightCyan => ansi_to_rgb(14),
            Color::White => ansi_to_rgb(15),
            Color::Indexed(i) => ansi_to_rgb(i),
        };
        Rgb::new(r, g, b)
    }

    #[must_use]
    pub fn to_hsl(color: Color) -> Hsl {
        Self::to_rgb(color).to_hsl()
    }

    #[must_use]
    pub fn to_ratatui(hsl: Hsl) -> Color {
        let rgb: Rgb = hsl.to_rgb();
        Color::Rgb(rgb.r, rgb.g, rgb.b)
    }

    /// Linear blend from `from` to `to`; `t` is clamped to `0.0..=1.0`.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::similar_names
    )]
    pub fn blend(from: Color, to: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let a = Self::to_rgb(from);
        let b = Self::to_rgb(to);
        let mix = |x: u8, y: u8| (f32::from(x) + (f32::from(y) - f32::from(x)) * t).round() as u8;
        Color::Rgb(mix(a.r, b.r), mix(a.g, b.g), mix(a.b, b.b))
    }
}

fn ansi_to_rgb(i: u8) -> (u8, u8, u8) {
    match i {
        0 => (0, 0, 0),
        1 => (170, 0, 0),
        2 => (0, 170, 0),
        3 => (170, 85, 0),
        4 => (0, 0, 170),
        5 => (170, 0, 170),
        6 => (0, 170, 170),
        7 => (170, 170, 170),
        8 => (85, 85, 85),
        9 => (255, 85, 85),
        10 => (85, 255, 85),
        11 => (255, 255, 85),
        12 => (85, 85, 255),
        13 => (255, 85, 255),
        14 => (85, 255, 255),
        15 => (255, 255, 255),
        16..=231 => {
            let i = i - 16;
            let level = |c: u8| if c == 0 { 0 } else { c * 40 + 55 };
            (level(i / 36), level((i / 6) % 6), level(i % 6))
        }
        232..=255 => {
            let v = (i - 232) * 10 + 8;
            (v, v, v)
        }
    }
}
