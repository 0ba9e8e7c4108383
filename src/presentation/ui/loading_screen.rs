use std::time::Duration;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, Paragraph, Widget, Wrap},
};
use tachyonfx::{Effect, Interpolation, fx};

use crate::application::services::Typewriter;
use crate::domain::Portfolio;
use crate::presentation::theme::Theme;

const WINDOW_TITLE: &str = "portfolio-initializer.rs";
const WINDOW_WIDTH: u16 = 64;
const WINDOW_HEIGHT: u16 = 11;
const SIGNATURE_HEIGHT: u16 = 2;
const SNIPPET_INTERVAL: Duration = Duration::from_millis(1500);
const TYPE_DELAY: Duration = Duration::from_millis(50);

/// Returns the stage message for a loading percentage.
#[must_use]
pub const fn stage_message(percent: u8) -> &'static str {
    match percent {
        0..30 => "Loading components...",
        30..60 => "Compiling project experience...",
        60..90 => "Optimizing portfolio assets...",
        _ => "Finalizing and preparing for display...",
    }
}

fn snippets(portfolio: &Portfolio) -> Vec<String> {
    let skills = portfolio
        .skills
        .iter()
        .flat_map(|category| category.skills.iter())
        .take(3)
        .map(|skill| format!("\"{skill}\""))
        .collect::<Vec<_>>()
        .join(", ");

    vec![
        format!("let developer = \"{}\";", portfolio.profile.name),
        format!("let skills = [{skills}];"),
        "fn create_great_code() -> bool { true }".to_string(),
        "// Loading portfolio experience...".to_string(),
        "Portfolio::initialize().await?;".to_string(),
    ]
}

pub struct LoadingScreen {
    intro_effect: Option<Effect>,
    intro_finished: bool,
    snippets: Vec<String>,
    snippet_index: usize,
    snippet_elapsed: Duration,
    typewriter: Typewriter,
    percent: u8,
    name: String,
    headline: String,
    initials: String,
    theme: Theme,
    pending_duration: Duration,
}

impl LoadingScreen {
    #[must_use]
    pub fn new(portfolio: &Portfolio, theme: Theme, animations: bool) -> Self {
        let snippets = snippets(portfolio);
        let typewriter = Typewriter::once(snippets[0].clone(), TYPE_DELAY);
        let intro_effect = animations.then(|| fx::coalesce((800, Interpolation::CircOut)));

        Self {
            intro_finished: intro_effect.is_none(),
            intro_effect,
            snippets,
            snippet_index: 0,
            snippet_elapsed: Duration::ZERO,
            typewriter,
            percent: 0,
            name: portfolio.profile.name.clone(),
            headline: portfolio.profile.headline.clone(),
            initials: portfolio.profile.initials(),
            theme,
            pending_duration: Duration::ZERO,
        }
    }

    /// Advances the snippet cycle and typewriter; `progress` is the loading
    /// phase progress in `0.0..=1.0`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn tick(&mut self, duration: Duration, progress: f64) {
        self.pending_duration = self.pending_duration.saturating_add(duration);
        self.percent = (progress.clamp(0.0, 1.0) * 100.0).floor() as u8;

        self.snippet_elapsed = self.snippet_elapsed.saturating_add(duration);
        if self.snippet_elapsed < SNIPPET_INTERVAL {
            self.typewriter.tick(duration);
            return;
        }

        while self.snippet_elapsed >= SNIPPET_INTERVAL {
            self.snippet_elapsed -= SNIPPET_INTERVAL;
            self.snippet_index = (self.snippet_index + 1) % self.snippets.len();
        }
        self.typewriter = Typewriter::once(self.snippets[self.snippet_index].clone(), TYPE_DELAY);
        self.typewriter.tick(self.snippet_elapsed);
    }

    #[must_use]
    pub const fn percent(&self) -> u8 {
        self.percent
    }

    #[must_use]
    pub fn visible_snippet(&self) -> &str {
        self.typewriter.visible()
    }

    fn window_title(&self) -> Line<'static> {
        Line::from(vec![
            Span::styled(" ● ", Style::default().fg(Color::Red)),
            Span::styled("● ", Style::default().fg(Color::Yellow)),
            Span::styled("● ", Style::default().fg(Color::Green)),
            Span::styled(format!(" {WINDOW_TITLE} "), self.theme.dimmed_style),
        ])
    }

    fn render_window(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.dimmed_style)
            .title(self.window_title());
        let inner = block.inner(area).inner(ratatui::layout::Margin::new(1, 0));
        block.render(area, buf);

        let [prompt, snippet, _, status, gauge, _, stage] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new("➜ ~ Initializing portfolio components")
            .style(Style::default().fg(Color::Green))
            .render(prompt, buf);

        let mut code = vec![Span::styled(
            self.typewriter.visible().to_string(),
            Style::default().fg(self.theme.accent),
        )];
        if self.typewriter.show_caret() {
            code.push(Span::styled("|", self.theme.dimmed_style));
        }
        Paragraph::new(Line::from(code))
            .wrap(Wrap { trim: false })
            .render(snippet, buf);

        let state = if self.percent >= 100 {
            "Complete"
        } else {
            "In progress..."
        };
        let [label, state_area] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(14)]).areas(status);
        Paragraph::new(format!("Portfolio loading: {}%", self.percent))
            .render(label, buf);
        Paragraph::new(state)
            .right_aligned()
            .style(Style::default().fg(self.theme.accent))
            .render(state_area, buf);

        Gauge::default()
            .gauge_style(Style::default().fg(self.theme.accent).bg(Color::DarkGray))
            .ratio(f64::from(self.percent) / 100.0)
            .label("")
            .use_unicode(true)
            .render(gauge, buf);

        Paragraph::new(stage_message(self.percent))
            .style(self.theme.dimmed_style.add_modifier(Modifier::ITALIC))
            .render(stage, buf);
    }

    fn render_signature(&self, area: Rect, buf: &mut Buffer) {
        let badge = Style::default()
            .bg(self.theme.accent)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);
        let lines = vec![
            Line::from(vec![
                Span::styled(format!(" {} ", self.initials), badge),
                Span::raw(" "),
                Span::styled(self.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
            ]),
            Line::from(Span::styled(
                self.headline.clone(),
                Style::default().fg(self.theme.accent),
            )),
        ];
        Paragraph::new(lines).centered().render(area, buf);
    }
}

impl Widget for &mut LoadingScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = WINDOW_WIDTH.min(area.width);
        let height = (WINDOW_HEIGHT + 1 + SIGNATURE_HEIGHT).min(area.height);
        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;
        let center_area = Rect::new(x, y, width, height);

        let [window, _, signature] = Layout::vertical([
            Constraint::Length(WINDOW_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(SIGNATURE_HEIGHT),
        ])
        .areas(center_area);

        self.render_window(window, buf);
        self.render_signature(signature, buf);

        let duration = self.pending_duration;
        self.pending_duration = Duration::ZERO;

        if !self.intro_finished
            && let Some(effect) = &mut self.intro_effect
        {
            let overflow = effect.process(duration.into(), buf, center_area);
            if overflow.is_some() {
                self.intro_finished = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn screen() -> LoadingScreen {
        LoadingScreen::new(&Portfolio::bundled(), Theme::default(), false)
    }

    #[test_case(0, "Loading components..." ; "start")]
    #[test_case(29, "Loading components..." ; "below first threshold")]
    #[test_case(30, "Compiling project experience..." ; "first threshold")]
    #[test_case(59, "Compiling project experience..." ; "below second threshold")]
    #[test_case(60, "Optimizing portfolio assets..." ; "second threshold")]
    #[test_case(89, "Optimizing portfolio assets..." ; "below third threshold")]
    #[test_case(90, "Finalizing and preparing for display..." ; "third threshold")]
    #[test_case(100, "Finalizing and preparing for display..." ; "complete")]
    fn test_stage_message(percent: u8, expected: &str) {
        assert_eq!(stage_message(percent), expected);
    }

    #[test]
    fn test_percent_tracks_progress() {
        let mut screen = screen();
        screen.tick(ms(40), 0.01);
        assert_eq!(screen.percent(), 1);
        screen.tick(ms(40), 0.999);
        assert_eq!(screen.percent(), 99);
        screen.tick(ms(40), 1.0);
        assert_eq!(screen.percent(), 100);
    }

    #[test]
    fn test_snippets_cycle_with_typewriter() {
        let mut screen = screen();
        screen.tick(ms(100), 0.0);
        assert_eq!(screen.visible_snippet(), "le");

        screen.tick(ms(1400), 0.0);
        assert_eq!(screen.visible_snippet(), "");
        assert_eq!(screen.snippet_index, 1);

        screen.tick(ms(50), 0.0);
        assert_eq!(screen.visible_snippet(), "l");

        for _ in 0..4 {
            screen.tick(SNIPPET_INTERVAL, 0.0);
        }
        assert_eq!(screen.snippet_index, 0);
    }

    #[test]
    fn test_snippet_names_owner() {
        let screen = screen();
        assert!(screen.snippets[0].contains(&Portfolio::bundled().profile.name));
        assert_eq!(screen.snippets.len(), 5);
    }

    #[test]
    fn test_renders_window_and_signature() {
        let mut screen = screen();
        screen.tick(ms(2000), 0.5);
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        (&mut screen).render(area, &mut buf);

        let text: String = (0..area.height)
            .flat_map(|y| (0..area.width).map(move |x| (x, y)))
            .map(|(x, y)| buf[(x, y)].symbol().to_string())
            .collect();
        assert!(text.contains(WINDOW_TITLE));
        assert!(text.contains("Portfolio loading: 50%"));
        assert!(text.contains("Compiling project experience..."));
        assert!(text.contains(&screen.name));
    }
}
