//! Overlay played between the loading screen and the page.

use std::time::Duration;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};
use tachyonfx::Interpolation;
use tracing::debug;

use crate::domain::OneShotTimer;
use crate::presentation::theme::Theme;
use crate::presentation::theme::adapter::ColorConverter;

const PANEL_DURATION: Duration = Duration::from_millis(1800);
const PANEL_TIMES: [f32; 4] = [0.0, 0.3, 0.7, 1.0];
const WELCOME_TIMES: [f32; 4] = [0.1, 0.3, 0.7, 0.9];
const RISE_HOLD_FALL: [f32; 4] = [0.0, 1.0, 1.0, 0.0];
const WELCOME_TEXT: &str = "W E L C O M E";

const PARTICLE_COUNT: u32 = 30;
const PARTICLE_DURATION_SECS: f32 = 1.5;
const PARTICLE_DELAY_SECS: f32 = 0.8;
const PARTICLE_DELAY_JITTER_SECS: f32 = 0.3;
const PARTICLE_SPREAD: f32 = 1.5;
const PARTICLE_TIMES: [f32; 4] = [0.0, 1.0 / 3.0, 2.0 / 3.0, 1.0];
const PARTICLE_SCALES: [f32; 4] = [0.0, 1.0, 0.5, 0.0];

fn keyframes(t: f32, times: [f32; 4], values: [f32; 4], ease: Interpolation) -> f32 {
    if t <= times[0] {
        return values[0];
    }
    for i in 1..times.len() {
        if t <= times[i] {
            let span = times[i] - times[i - 1];
            let local = if span > 0.0 {
                (t - times[i - 1]) / span
            } else {
                1.0
            };
            return values[i - 1] + (values[i] - values[i - 1]) * ease.alpha(local);
        }
    }
    values[values.len() - 1]
}

/// Fraction of each half of the screen covered by its panel at `t`.
#[must_use]
pub fn panel_coverage(t: f32) -> f32 {
    keyframes(t, PANEL_TIMES, RISE_HOLD_FALL, Interpolation::CubicInOut)
}

/// Opacity of the WELCOME banner at `t`.
#[must_use]
pub fn welcome_opacity(t: f32) -> f32 {
    keyframes(t, WELCOME_TIMES, RISE_HOLD_FALL, Interpolation::CubicInOut)
}

/// Deterministic `0.0..1.0` hash of `seed`.
#[allow(clippy::cast_precision_loss)]
fn scatter(seed: u32) -> f32 {
    let mut x = seed.wrapping_mul(0x9E37_79B9) ^ 0x85EB_CA6B;
    x ^= x >> 15;
    x = x.wrapping_mul(0x2C1B_3C6D);
    x ^= x >> 12;
    x as f32 / u32::MAX as f32
}

#[derive(Debug, Clone, Copy)]
struct Particle {
    dx: f32,
    dy: f32,
    delay: f32,
}

impl Particle {
    fn new(index: u32) -> Self {
        Self {
            dx: (scatter(index * 3) - 0.5) * PARTICLE_SPREAD,
            dy: (scatter(index * 3 + 1) - 0.5) * PARTICLE_SPREAD,
            delay: PARTICLE_DELAY_SECS + scatter(index * 3 + 2) * PARTICLE_DELAY_JITTER_SECS,
        }
    }

    /// Offset from the center as a fraction of the area, and scale.
    fn sample(&self, elapsed_secs: f32) -> Option<(f32, f32, f32)> {
        let t = (elapsed_secs - self.delay) / PARTICLE_DURATION_SECS;
        if !(0.0..=1.0).contains(&t) {
            return None;
        }
        let travel = Interpolation::CubicOut.alpha(t);
        let scale = keyframes(t, PARTICLE_TIMES, PARTICLE_SCALES, Interpolation::CubicOut);
        Some((self.dx * travel, self.dy * travel, scale))
    }
}

/// Panels closing over the screen, a WELCOME banner and a particle burst.
///
/// Completion is reported once, after the configured duration, independent
/// of how long the panel animation itself runs.
pub struct PageTransition {
    timer: OneShotTimer,
    elapsed: Duration,
    particles: Vec<Particle>,
    panel: Color,
    particle: Color,
}

impl PageTransition {
    #[must_use]
    pub fn new(duration: Duration, theme: &Theme) -> Self {
        let mut particle_hsl = ColorConverter::to_hsl(theme.accent);
        particle_hsl.l = particle_hsl.l.max(0.65);

        Self {
            timer: OneShotTimer::new(duration),
            elapsed: Duration::ZERO,
            particles: (0..PARTICLE_COUNT).map(Particle::new).collect(),
            panel: theme.panel,
            particle: ColorConverter::to_ratatui(particle_hsl),
        }
    }

    /// Starts playing from the beginning.
    pub fn start(&mut self) {
        self.elapsed = Duration::ZERO;
        self.timer.arm();
        debug!(duration_ms = self.timer.duration().as_millis(), "Transition started");
    }

    /// Advances the animation. Returns `true` on the tick it completes.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if !self.timer.is_pending() {
            return false;
        }
        self.elapsed = self.elapsed.saturating_add(dt);
        self.timer.advance(dt)
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.timer.is_pending()
    }

    fn progress(&self) -> f32 {
        (self.elapsed.as_secs_f32() / PANEL_DURATION.as_secs_f32()).clamp(0.0, 1.0)
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn render_panels(&self, area: Rect, buf: &mut Buffer) {
        let half = f32::from(area.height) / 2.0;
        let covered = (panel_coverage(self.progress()) * half).round() as u16;
        if covered == 0 {
            return;
        }

        let style = Style::default().bg(self.panel);
        let top = Rect::new(area.x, area.y, area.width, covered.min(area.height));
        let bottom_height = covered.min(area.height);
        let bottom = Rect::new(
            area.x,
            area.bottom() - bottom_height,
            area.width,
            bottom_height,
        );
        for rect in [top, bottom] {
            for y in rect.top()..rect.bottom() {
                for x in rect.left()..rect.right() {
                    buf[(x, y)].set_char(' ').set_style(style);
                }
            }
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn render_welcome(&self, area: Rect, buf: &mut Buffer) {
        let opacity = welcome_opacity(self.progress());
        if opacity <= 0.0 {
            return;
        }

        let fg = ColorConverter::blend(self.panel, Color::White, opacity);
        let width = WELCOME_TEXT.chars().count() as u16;
        let x = area.x + area.width.saturating_sub(width) / 2;
        let y = area.y + area.height / 2;
        buf.set_string(
            x,
            y,
            WELCOME_TEXT,
            Style::default().fg(fg).add_modifier(Modifier::BOLD),
        );
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn render_particles(&self, area: Rect, buf: &mut Buffer) {
        let elapsed = self.elapsed.as_secs_f32();
        let cx = f32::from(area.x) + f32::from(area.width) / 2.0;
        let cy = f32::from(area.y) + f32::from(area.height) / 2.0;

        for particle in &self.particles {
            let Some((dx, dy, scale)) = particle.sample(elapsed) else {
                continue;
            };
            let symbol = match scale {
                s if s > 0.66 => "●",
                s if s > 0.33 => "•",
                s if s > 0.0 => "·",
                _ => continue,
            };
            let x = cx + dx * f32::from(area.width);
            let y = cy + dy * f32::from(area.height);
            if x < f32::from(area.left())
                || y < f32::from(area.top())
                || x >= f32::from(area.right())
                || y >= f32::from(area.bottom())
            {
                continue;
            }
            buf[(x as u16, y as u16)]
                .set_symbol(symbol)
                .set_fg(self.particle);
        }
    }
}

impl Widget for &PageTransition {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.is_running() || area.is_empty() {
            return;
        }
        self.render_panels(area, buf);
        self.render_particles(area, buf);
        self.render_welcome(area, buf);
    }
}
