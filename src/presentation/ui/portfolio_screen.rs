//! The portfolio page: header, scrollable body, contact form and overlays.

use std::sync::Arc;
use std::time::Duration;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Position, Rect},
    style::Color,
    widgets::{StatefulWidget, Widget},
};

use super::page_scroll::PageScroll;
use crate::application::ScrollRequest;
use crate::application::services::{Typewriter, TypewriterTimings};
use crate::domain::hover::HoverPoint;
use crate::domain::{ContactField, Portfolio, ScrollState, Section, SequenceFlags};
use crate::presentation::theme::Theme;
use crate::presentation::theme::adapter::ColorConverter;
use crate::presentation::widgets::{
    ContactFormState, ContactFormView, FORM_HEIGHT, FormLayout, HeaderBar, HeaderBarStyle,
    HotspotAction, HotspotMap, PageDocument, ScrollProgress, ScrollTopButton, StatusBar,
};

const REVEAL_BASE_DELAY: Duration = Duration::from_millis(300);
const REVEAL_STEP: Duration = Duration::from_millis(100);
const REVEAL_FADE: Duration = Duration::from_millis(800);

const BROWSE_HINTS: &[(&str, &str)] = &[
    ("j/k", "scroll"),
    ("1-4", "jump"),
    ("c", "contact"),
    ("y", "copy email"),
    ("q", "quit"),
];
const FORM_HINTS: &[(&str, &str)] = &[("Tab", "next"), ("Ctrl+S", "send"), ("Esc", "back")];

/// Opacity of the section at display `index`, `since_reveal` after the reveal.
#[must_use]
pub fn section_opacity(since_reveal: Duration, index: usize) -> f32 {
    let steps = u32::try_from(index).unwrap_or(u32::MAX);
    let delay = REVEAL_BASE_DELAY.saturating_add(REVEAL_STEP.saturating_mul(steps));
    let Some(shown_for) = since_reveal.checked_sub(delay) else {
        return 0.0;
    };
    (shown_for.as_secs_f32() / REVEAL_FADE.as_secs_f32()).clamp(0.0, 1.0)
}

/// Maps a span of document rows onto the screen, clipped to the viewport.
fn project(viewport: Rect, offset: usize, row: usize, x: u16, width: u16, height: u16) -> Option<Rect> {
    let visible = offset..offset + viewport.height as usize;
    let first = row.max(visible.start);
    let last = (row + height as usize).min(visible.end);
    if first >= last {
        return None;
    }

    let y = u16::try_from(first - offset).ok()?;
    let h = u16::try_from(last - first).ok()?;
    let rect = Rect::new(viewport.x + x, viewport.y + y, width, h).intersection(viewport);
    (!rect.is_empty()).then_some(rect)
}

/// Page state that outlives frames.
pub struct PortfolioScreenState {
    portfolio: Arc<Portfolio>,
    theme: Theme,
    initials: String,
    scroll: PageScroll,
    extent_clamped: bool,
    roles: Typewriter,
    form: ContactFormState,
    revealed_for: Option<Duration>,
    animations: bool,
    document: PageDocument,
    hotspots: HotspotMap,
    viewport: Rect,
}

impl PortfolioScreenState {
    /// Creates hidden page state; nothing is laid out until the first render.
    #[must_use]
    pub fn new(portfolio: Arc<Portfolio>, theme: Theme, animations: bool) -> Self {
        let roles = Typewriter::looping(portfolio.profile.roles.clone(), TypewriterTimings::ROLES);
        Self {
            initials: portfolio.profile.initials(),
            form: ContactFormState::new(theme.accent),
            portfolio,
            theme,
            scroll: PageScroll::new(),
            extent_clamped: false,
            roles,
            revealed_for: None,
            animations,
            document: PageDocument::default(),
            hotspots: HotspotMap::default(),
            viewport: Rect::default(),
        }
    }

    /// Starts the staggered section fade-in. Only the first call has an effect.
    pub fn reveal(&mut self) {
        if self.revealed_for.is_some() {
            return;
        }
        self.revealed_for = Some(if self.animations {
            Duration::ZERO
        } else {
            Duration::MAX
        });
    }

    #[must_use]
    pub const fn is_revealed(&self) -> bool {
        self.revealed_for.is_some()
    }

    /// Advances page animations. Returns whether the scroll offset changed.
    pub fn tick(&mut self, dt: Duration) -> bool {
        self.roles.tick(dt);
        if let Some(elapsed) = &mut self.revealed_for {
            *elapsed = elapsed.saturating_add(dt);
        }
        self.scroll.tick(dt)
    }

    #[must_use]
    pub const fn scroll(&self) -> &ScrollState {
        self.scroll.state()
    }

    /// Returns whether a render clamped the offset since the last call.
    pub fn take_extent_clamped(&mut self) -> bool {
        std::mem::take(&mut self.extent_clamped)
    }

    fn viewport_rows(&self) -> usize {
        self.viewport.height as usize
    }

    /// Manual scrolling; returns whether the offset moved.
    pub fn scroll_by(&mut self, rows: isize) -> bool {
        self.scroll.scroll_by(rows)
    }

    pub fn page_up(&mut self) -> bool {
        self.scroll.page_up(self.viewport_rows())
    }

    pub fn page_down(&mut self) -> bool {
        self.scroll.page_down(self.viewport_rows())
    }

    pub fn scroll_end(&mut self) -> bool {
        self.scroll.end()
    }

    /// Performs a viewport change requested by the sequence controller.
    pub fn apply(&mut self, request: ScrollRequest) -> bool {
        match request {
            ScrollRequest::Top { smooth: true } => {
                self.scroll.smooth_to(request.target_row());
                false
            }
            ScrollRequest::Top { smooth: false } => self.scroll.set_offset(request.target_row()),
        }
    }

    /// Smooth scrolls to the start of `section`.
    pub fn jump_to(&mut self, section: Section) {
        self.scroll.smooth_to(self.document.anchor(section));
    }

    /// Enters form mode on `field` and brings the form into view.
    pub fn edit_contact(&mut self, field: ContactField) {
        self.form.focus_field(field);
        if let Some((row, _)) = self.document.form_area() {
            let offset = self.scroll.offset();
            let fully_visible =
                row >= offset && row + FORM_HEIGHT as usize <= offset + self.viewport_rows();
            if !fully_visible {
                self.scroll.smooth_to(row.saturating_sub(2));
            }
        }
    }

    #[must_use]
    pub const fn form(&self) -> &ContactFormState {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ContactFormState {
        &mut self.form
    }

    /// Returns the action under a screen cell.
    #[must_use]
    pub fn hotspot_at(&self, x: u16, y: u16) -> Option<HotspotAction> {
        self.hotspots.hit(x, y).map(|spot| spot.action.clone())
    }

    #[must_use]
    pub fn resume(&self) -> Option<&str> {
        self.portfolio.profile.resume.as_deref()
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.portfolio.contact.email
    }

    fn render_body(&self, area: Rect, buf: &mut Buffer) {
        let offset = self.scroll.offset();
        let lines = self.document.lines();
        for (y, line) in (area.top()..area.bottom()).zip(lines.iter().skip(offset)) {
            buf.set_line(area.x, y, line, area.width);
        }
    }

    fn render_form(&mut self, area: Rect, buf: &mut Buffer) {
        let Some((form_row, form_rect)) = self.document.form_area() else {
            return;
        };
        let offset = self.scroll.offset();
        let Some(visible) = project(area, offset, form_row, form_rect.x, form_rect.width, FORM_HEIGHT)
        else {
            return;
        };

        let scratch_area = Rect::new(0, 0, form_rect.width, FORM_HEIGHT);
        let mut scratch = Buffer::empty(scratch_area);
        ContactFormView::new(&self.form, &self.theme).render(scratch_area, &mut scratch);

        let skipped = u16::try_from(offset.saturating_sub(form_row)).unwrap_or(0);
        for y in 0..visible.height {
            for x in 0..visible.width {
                buf[(visible.x + x, visible.y + y)] = scratch[(x, y + skipped)].clone();
            }
        }

        let layout = FormLayout::new(scratch_area);
        let mut register = |rect: Rect, action: HotspotAction| {
            let row = form_row + rect.y as usize;
            if let Some(screen) = project(area, offset, row, form_rect.x + rect.x, rect.width, rect.height) {
                self.hotspots.push(screen, action);
            }
        };
        for field in ContactField::ALL {
            register(layout.field(field), HotspotAction::FocusField(field));
        }
        register(layout.button, HotspotAction::Submit);
    }

    fn apply_reveal(&self, area: Rect, buf: &mut Buffer) {
        let since = self.revealed_for.unwrap_or_default();
        let offset = self.scroll.offset();

        for (section, rows) in self.document.sections() {
            let opacity = section_opacity(since, section.index());
            if opacity >= 1.0 {
                continue;
            }
            let Some(rect) = project(area, offset, rows.start, 0, area.width, u16::try_from(rows.len()).unwrap_or(u16::MAX))
            else {
                continue;
            };
            for y in rect.top()..rect.bottom() {
                for x in rect.left()..rect.right() {
                    let cell = &mut buf[(x, y)];
                    if opacity <= 0.0 {
                        cell.reset();
                    } else {
                        let target = if cell.fg == Color::Reset { Color::Gray } else { cell.fg };
                        cell.set_fg(ColorConverter::blend(Color::Black, target, opacity));
                    }
                }
            }
        }
    }

    fn register_links(&mut self, area: Rect) {
        let offset = self.scroll.offset();
        for link in self.document.links() {
            if let Some(rect) = project(area, offset, link.row, link.x, link.width, 1) {
                self.hotspots.push(rect, link.action.clone());
            }
        }
    }
}

/// Renders the page once the intro sequence has revealed it.
pub struct PortfolioScreen {
    flags: SequenceFlags,
    hover: Option<HoverPoint>,
}

impl PortfolioScreen {
    #[must_use]
    pub const fn new(flags: SequenceFlags) -> Self {
        Self { flags, hover: None }
    }

    #[must_use]
    pub const fn hover(mut self, point: Option<HoverPoint>) -> Self {
        self.hover = point;
        self
    }
}

impl StatefulWidget for PortfolioScreen {
    type State = PortfolioScreenState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        state.hotspots.clear();
        if !self.flags.is_revealed() {
            return;
        }

        let [progress_row, header_row, page_area, status_row] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        state.viewport = page_area;
        state.document = PageDocument::build(
            &state.portfolio,
            &state.theme,
            page_area.width,
            state.roles.visible(),
        );
        state.extent_clamped |= state
            .scroll
            .set_extent(state.document.height(), page_area.height as usize);

        state.render_body(page_area, buf);
        state.render_form(page_area, buf);
        state.apply_reveal(page_area, buf);
        state.register_links(page_area);

        let active = state
            .document
            .section_at(state.scroll.offset())
            .filter(|section| Section::NAV.contains(section));
        let header = HeaderBar::new(&state.portfolio.profile.name, &state.initials)
            .active(active)
            .style(HeaderBarStyle::from_theme(&state.theme));
        let nav = header.nav_areas(header_row);
        header.render(header_row, buf);
        for (section, rect) in nav {
            state.hotspots.push(rect, HotspotAction::Jump(section));
        }

        ScrollProgress::new(state.scroll.state().progress(), state.theme.accent).render(progress_row, buf);

        if self.flags.scroll_top_visible
            && let Some(button) = ScrollTopButton::area_in(page_area)
        {
            let hovered = self
                .hover
                .is_some_and(|p| button.contains(Position::new(p.x, p.y)));
            ScrollTopButton::new(state.theme.accent)
                .hovered(hovered)
                .render(button, buf);
            state.hotspots.push(button, HotspotAction::ScrollTop);
        }

        let hints = if state.form.is_editing() {
            FORM_HINTS
        } else {
            BROWSE_HINTS
        };
        (&StatusBar::from_form_status(state.form.status()).hints(hints)).render(status_row, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Phase;
    use test_case::test_case;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn state() -> PortfolioScreenState {
        PortfolioScreenState::new(Arc::new(Portfolio::bundled()), Theme::default(), true)
    }

    fn revealed(scroll_top_visible: bool) -> SequenceFlags {
        SequenceFlags::from_phase(Phase::Revealed, scroll_top_visible)
    }

    fn draw(state: &mut PortfolioScreenState, flags: SequenceFlags) -> Buffer {
        let area = Rect::new(0, 0, 100, 30);
        let mut buf = Buffer::empty(area);
        PortfolioScreen::new(flags).render(area, &mut buf, state);
        buf
    }

    fn screen_text(buf: &Buffer) -> String {
        let area = buf.area;
        (area.top()..area.bottom())
            .flat_map(|y| (area.left()..area.right()).map(move |x| (x, y)))
            .map(|(x, y)| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test_case(0, 0, 0.0 ; "before first delay")]
    #[test_case(300, 0, 0.0 ; "first section starts")]
    #[test_case(700, 0, 0.5 ; "first section half way")]
    #[test_case(1100, 0, 1.0 ; "first section done")]
    #[test_case(700, 4, 0.0 ; "later section still hidden")]
    #[test_case(1500, 4, 0.5 ; "later section half way")]
    fn test_section_opacity(since_ms: u64, index: usize, expected: f32) {
        assert!((section_opacity(ms(since_ms), index) - expected).abs() < 1e-4);
    }

    #[test]
    fn test_project_clips_to_viewport() {
        let viewport = Rect::new(0, 2, 80, 10);
        assert_eq!(project(viewport, 5, 3, 4, 10, 4), Some(Rect::new(4, 2, 10, 2)));
        assert_eq!(project(viewport, 5, 20, 4, 10, 1), None);
        assert_eq!(project(viewport, 0, 9, 0, 10, 3), Some(Rect::new(0, 11, 10, 1)));
    }

    #[test]
    fn test_hidden_until_revealed() {
        let mut state = state();
        for phase in [Phase::Loading, Phase::Transitioning] {
            let buf = draw(&mut state, SequenceFlags::from_phase(phase, false));
            assert_eq!(buf, Buffer::empty(buf.area));
            assert!(state.hotspot_at(1, 1).is_none());
        }
    }

    #[test]
    fn test_revealed_page_renders_header_and_hero() {
        let mut state = state();
        state.reveal();
        state.tick(ms(5000));
        let buf = draw(&mut state, revealed(false));
        let text = screen_text(&buf);

        assert!(text.contains(&state.portfolio.profile.name));
        assert!(text.contains("Hello, I'm"));
        assert!(!state.hotspots.is_empty());
    }

    #[test]
    fn test_sections_fade_in_order() {
        let mut state = state();
        state.reveal();
        let buf = draw(&mut state, revealed(false));
        assert!(!screen_text(&buf).contains("Hello, I'm"));

        state.tick(ms(1100));
        let buf = draw(&mut state, revealed(false));
        assert!(screen_text(&buf).contains("Hello, I'm"));
    }

    #[test]
    fn test_scroll_top_button_follows_flag() {
        let mut state = state();
        state.reveal();
        state.tick(ms(5000));

        draw(&mut state, revealed(false));
        let button = ScrollTopButton::area_in(state.viewport).unwrap();
        assert_ne!(state.hotspot_at(button.x + 1, button.y + 1), Some(HotspotAction::ScrollTop));

        draw(&mut state, revealed(true));
        assert_eq!(state.hotspot_at(button.x + 1, button.y + 1), Some(HotspotAction::ScrollTop));
    }

    #[test]
    fn test_nav_jump_scrolls_to_section() {
        let mut state = state();
        state.reveal();
        draw(&mut state, revealed(false));

        state.jump_to(Section::Projects);
        state.tick(ms(1000));
        let expected = state
            .document
            .anchor(Section::Projects)
            .min(state.scroll().max_offset());
        assert_eq!(state.scroll().offset(), expected);
        assert!(expected > 0);
    }

    #[test]
    fn test_scroll_to_top_request_is_smooth() {
        let mut state = state();
        state.reveal();
        draw(&mut state, revealed(false));
        state.scroll_end();
        let bottom = state.scroll().offset();

        assert!(!state.apply(ScrollRequest::Top { smooth: true }));
        assert_eq!(state.scroll().offset(), bottom);
        state.tick(ms(100));
        assert!(state.scroll().offset() < bottom);
        state.tick(ms(400));
        assert_eq!(state.scroll().offset(), 0);
    }

    #[test]
    fn test_form_hotspots_when_in_view() {
        let mut state = state();
        state.reveal();
        state.tick(ms(5000));
        draw(&mut state, revealed(false));

        state.edit_contact(ContactField::Name);
        state.tick(ms(500));
        draw(&mut state, revealed(false));

        let (row, rect) = state.document.form_area().unwrap();
        let name = FormLayout::new(Rect::new(0, 0, rect.width, FORM_HEIGHT)).field(ContactField::Name);
        let screen_y = state.viewport.y + u16::try_from(row - state.scroll().offset()).unwrap() + name.y + 1;
        let screen_x = state.viewport.x + rect.x + name.x + 1;
        assert_eq!(
            state.hotspot_at(screen_x, screen_y),
            Some(HotspotAction::FocusField(ContactField::Name))
        );
        assert!(state.form().is_editing());
    }
}
