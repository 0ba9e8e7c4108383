//! Scrollable page body laid out as styled lines.

use std::ops::Range;

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::domain::Portfolio;
use crate::domain::Section;
use crate::domain::content::Project;
use crate::presentation::theme::Theme;

use super::contact_form::FORM_HEIGHT;
use super::hotspot::HotspotAction;

/// Widest the content column grows on large terminals.
pub const MAX_CONTENT_WIDTH: u16 = 96;
const SIDE_PADDING: u16 = 2;
const INLINE_GAP: usize = 2;
const BOLD: Style = Style::new().add_modifier(Modifier::BOLD);

/// Clickable text on the page, positioned in document rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLink {
    /// Document row.
    pub row: usize,
    /// Column relative to the page viewport.
    pub x: u16,
    /// Width in columns.
    pub width: u16,
    /// Click action.
    pub action: HotspotAction,
}

/// The laid out page for one viewport width.
#[derive(Debug, Clone, Default)]
pub struct PageDocument {
    lines: Vec<Line<'static>>,
    sections: Vec<(Section, Range<usize>)>,
    links: Vec<PageLink>,
    form_area: Option<(usize, Rect)>,
}

impl PageDocument {
    /// Lays out `portfolio` for a viewport `width` columns wide.
    #[must_use]
    pub fn build(portfolio: &Portfolio, theme: &Theme, width: u16, hero_role: &str) -> Self {
        let mut builder = PageBuilder::new(theme, width);
        builder.hero(portfolio, hero_role);
        builder.skills(portfolio);
        builder.education(portfolio);
        builder.projects(portfolio);
        builder.achievements(portfolio);
        builder.contact(portfolio);
        builder.footer(portfolio);
        builder.doc
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Returns every row.
    #[must_use]
    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }

    /// Returns the row span of each section, in display order.
    #[must_use]
    pub fn sections(&self) -> &[(Section, Range<usize>)] {
        &self.sections
    }

    /// Returns the first row of `section`.
    #[must_use]
    pub fn anchor(&self, section: Section) -> usize {
        self.sections
            .iter()
            .find(|(s, _)| *s == section)
            .map_or(0, |(_, rows)| rows.start)
    }

    /// Returns the section containing `row`.
    #[must_use]
    pub fn section_at(&self, row: usize) -> Option<Section> {
        self.sections
            .iter()
            .find(|(_, rows)| rows.contains(&row))
            .map(|(s, _)| *s)
    }

    /// Returns every link.
    #[must_use]
    pub fn links(&self) -> &[PageLink] {
        &self.links
    }

    /// Returns the first row of the contact form and its box; the box `y`
    /// is zero and must be offset by the caller.
    #[must_use]
    pub const fn form_area(&self) -> Option<(usize, Rect)> {
        self.form_area
    }
}

enum Inline {
    Text(String, Style),
    Link(String, Style, HotspotAction),
}

impl Inline {
    fn width(&self) -> usize {
        match self {
            Self::Text(text, _) | Self::Link(text, _, _) => text.width(),
        }
    }
}

struct PageBuilder<'a> {
    theme: &'a Theme,
    margin: u16,
    width: u16,
    current: Option<(Section, usize)>,
    doc: PageDocument,
}

impl<'a> PageBuilder<'a> {
    fn new(theme: &'a Theme, viewport_width: u16) -> Self {
        let width = viewport_width
            .saturating_sub(SIDE_PADDING * 2)
            .clamp(1, MAX_CONTENT_WIDTH);
        let margin = viewport_width.saturating_sub(width) / 2;
        Self {
            theme,
            margin,
            width,
            current: None,
            doc: PageDocument::default(),
        }
    }

    fn row(&self) -> usize {
        self.doc.lines.len()
    }

    fn push(&mut self, spans: Vec<Span<'static>>) {
        let mut line = vec![Span::raw(" ".repeat(self.margin as usize))];
        line.extend(spans);
        self.doc.lines.push(Line::from(line));
    }

    fn blank(&mut self) {
        self.doc.lines.push(Line::default());
    }

    fn begin(&mut self, section: Section) {
        self.end();
        self.current = Some((section, self.row()));
    }

    fn end(&mut self) {
        if let Some((section, start)) = self.current.take() {
            let end = self.row();
            self.doc.sections.push((section, start..end));
        }
    }

    fn heading(&mut self, section: Section) {
        self.blank();
        self.push(vec![
            Span::styled("## ", Style::default().fg(self.theme.accent)),
            Span::styled(section.title(), self.theme.heading_style),
        ]);
        let rule = "─".repeat((section.title().width() + 3).min(self.width as usize));
        self.push(vec![Span::styled(rule, self.theme.dimmed_style)]);
        self.blank();
    }

    fn subheading(&mut self, title: &str) {
        self.blank();
        self.push(vec![Span::styled(title.to_string(), self.theme.heading_style)]);
    }

    fn text(&mut self, text: &str, style: Style) {
        for line in wrap_text(text, self.width as usize) {
            self.push(vec![Span::styled(line, style)]);
        }
    }

    /// Flows items left to right, wrapping between items.
    #[allow(clippy::cast_possible_truncation)]
    fn inline(&mut self, items: Vec<Inline>) {
        let width = self.width as usize;
        let mut spans: Vec<Span<'static>> = Vec::new();
        let mut col = 0;

        for item in items {
            let item_width = item.width();
            if col > 0 && col + INLINE_GAP + item_width > width {
                self.push(std::mem::take(&mut spans));
                col = 0;
            }
            if col > 0 {
                spans.push(Span::raw(" ".repeat(INLINE_GAP)));
                col += INLINE_GAP;
            }

            match item {
                Inline::Text(text, style) => spans.push(Span::styled(text, style)),
                Inline::Link(text, style, action) => {
                    self.doc.links.push(PageLink {
                        row: self.row(),
                        x: self.margin + col as u16,
                        width: item_width.min(width.saturating_sub(col)) as u16,
                        action,
                    });
                    spans.push(Span::styled(text, style));
                }
            }
            col += item_width;
        }

        if !spans.is_empty() {
            self.push(spans);
        }
    }

    fn link(&self, label: impl Into<String>, url: &str) -> Inline {
        Inline::Link(
            label.into(),
            self.theme.link_style,
            HotspotAction::Open(url.to_string()),
        )
    }

    fn hero(&mut self, portfolio: &Portfolio, role: &str) {
        let profile = &portfolio.profile;
        self.begin(Section::Home);
        self.blank();
        self.blank();
        self.push(vec![Span::styled("Hello, I'm", self.theme.dimmed_style)]);
        self.push(vec![Span::styled(
            profile.name.to_uppercase(),
            self.theme.heading_style,
        )]);
        self.push(vec![Span::styled(
            "━".repeat(profile.name.width().min(self.width as usize)),
            Style::default().fg(self.theme.accent),
        )]);
        self.push(vec![
            Span::styled("> ", self.theme.dimmed_style),
            Span::styled(role.to_string(), Style::default().fg(self.theme.accent)),
            Span::styled("▌", Style::default().fg(self.theme.accent)),
        ]);
        self.blank();
        self.text(&profile.bio, self.theme.base_style);
        self.blank();

        let mut actions = Vec::new();
        if let Some(resume) = &profile.resume {
            actions.push(Inline::Link(
                "[↓ Resume]".to_string(),
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD),
                HotspotAction::Open(resume.clone()),
            ));
        }
        for social in &profile.socials {
            actions.push(self.link(format!("{} {}", social.kind.glyph(), social.label), &social.url));
        }
        self.inline(actions);
        self.blank();
    }

    fn skills(&mut self, portfolio: &Portfolio) {
        self.begin(Section::Skills);
        self.heading(Section::Skills);
        for category in &portfolio.skills {
            self.push(vec![Span::styled(category.title.clone(), BOLD)]);
            let chips = category
                .skills
                .iter()
                .map(|skill| Inline::Text(format!("▪ {skill}"), self.theme.base_style))
                .collect();
            self.inline(chips);
            self.blank();
        }
    }

    fn education(&mut self, portfolio: &Portfolio) {
        self.begin(Section::Education);
        self.heading(Section::Education);
        for entry in &portfolio.education {
            self.text(&entry.degree, BOLD);
            self.text(
                &format!("{} · {}", entry.institution, entry.period),
                self.theme.dimmed_style,
            );
            self.text(&entry.description, self.theme.base_style);
            self.blank();
        }

        if !portfolio.certifications.is_empty() {
            self.subheading("Certifications");
            for cert in &portfolio.certifications {
                let mut items = vec![
                    Inline::Text(cert.title.clone(), BOLD),
                    Inline::Text(format!("{} · {}", cert.issuer, cert.date), self.theme.dimmed_style),
                ];
                if let Some(link) = &cert.link {
                    items.push(self.link("↗ credential", link));
                }
                self.inline(items);
            }
            self.blank();
        }
    }

    fn project(&mut self, project: &Project, compact: bool) {
        let mut title = vec![Inline::Text(
            project.title.clone(),
            if compact {
                BOLD
            } else {
                BOLD.fg(self.theme.accent)
            },
        )];
        if let Some(link) = &project.link {
            title.push(self.link("↗ view", link));
        }
        self.inline(title);
        self.text(&project.description, self.theme.base_style);
        if !project.tech.is_empty() {
            let chips = project
                .tech
                .iter()
                .map(|tech| Inline::Text(format!("[{tech}]"), self.theme.dimmed_style))
                .collect();
            self.inline(chips);
        }
        self.blank();
    }

    fn projects(&mut self, portfolio: &Portfolio) {
        self.begin(Section::Projects);
        self.heading(Section::Projects);
        for project in &portfolio.projects {
            self.project(project, false);
        }
        if !portfolio.other_projects.is_empty() {
            self.subheading("Other Noteworthy Projects");
            for project in &portfolio.other_projects {
                self.project(project, true);
            }
        }
    }

    fn achievements(&mut self, portfolio: &Portfolio) {
        self.begin(Section::Achievements);
        self.heading(Section::Achievements);
        for achievement in &portfolio.achievements {
            let mut title = vec![Inline::Text(achievement.title.clone(), BOLD)];
            if let Some(date) = &achievement.date {
                title.push(Inline::Text(date.clone(), self.theme.dimmed_style));
            }
            if let Some(link) = &achievement.link {
                title.push(self.link("↗ details", link));
            }
            self.inline(title);
            self.text(&achievement.description, self.theme.base_style);
            self.blank();
        }

        if !portfolio.coding_profiles.is_empty() {
            self.subheading("Coding Profiles");
            for profile in &portfolio.coding_profiles {
                let mut items = vec![
                    Inline::Text(profile.platform.clone(), BOLD),
                    Inline::Text(format!("@{}", profile.username), self.theme.base_style),
                ];
                if let Some(rating) = &profile.rating {
                    items.push(Inline::Text(rating.clone(), self.theme.dimmed_style));
                }
                items.push(self.link("↗ profile", &profile.link));
                self.inline(items);
            }
            self.blank();
        }
    }

    fn contact(&mut self, portfolio: &Portfolio) {
        let contact = &portfolio.contact;
        self.begin(Section::Contact);
        self.heading(Section::Contact);
        self.text(
            "Have a project in mind or just want to say hello? Send a message below.",
            self.theme.base_style,
        );
        self.blank();

        let email = self.link(format!("@ {}", contact.email), &format!("mailto:{}", contact.email));
        self.inline(vec![
            email,
            Inline::Link(
                "[copy]".to_string(),
                self.theme.dimmed_style,
                HotspotAction::CopyEmail,
            ),
        ]);
        if let Some(phone) = &contact.phone {
            self.text(&format!("☎ {phone}"), self.theme.base_style);
        }
        if let Some(location) = &contact.location {
            self.text(&format!("⌖ {location}"), self.theme.base_style);
        }
        self.blank();

        let form_row = self.row();
        self.doc.form_area = Some((form_row, Rect::new(self.margin, 0, self.width, FORM_HEIGHT)));
        for _ in 0..FORM_HEIGHT {
            self.blank();
        }
        self.blank();
    }

    fn footer(&mut self, portfolio: &Portfolio) {
        self.begin(Section::Footer);
        self.push(vec![Span::styled(
            "─".repeat(self.width as usize),
            self.theme.dimmed_style,
        )]);
        let links = portfolio
            .profile
            .socials
            .iter()
            .map(|social| self.link(social.kind.glyph(), &social.url))
            .collect::<Vec<_>>();
        let mut items = vec![Inline::Text(
            format!("© {} · built with Rust and ratatui", portfolio.profile.name),
            self.theme.dimmed_style,
        )];
        items.extend(links);
        self.inline(items);
        self.blank();
        self.end();
    }
}

/// Greedy word wrap by display width. Words wider than `width` are split.
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();
        if current_width > 0 && current_width + 1 + word_width <= width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
            continue;
        }
        if current_width > 0 {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }

        if word_width <= width {
            current.push_str(word);
            current_width = word_width;
            continue;
        }

        for c in word.chars() {
            let char_width = c.width().unwrap_or(0);
            if current_width > 0 && current_width + char_width > width {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            current.push(c);
            current_width += char_width;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(width: u16) -> PageDocument {
        PageDocument::build(&Portfolio::bundled(), &Theme::default(), width, "Engineer")
    }

    #[test]
    fn test_wrap_text() {
        assert_eq!(
            wrap_text("the quick brown fox", 9),
            vec!["the quick", "brown fox"]
        );
        assert_eq!(wrap_text("abcdefgh", 3), vec!["abc", "def", "gh"]);
        assert!(wrap_text("   ", 10).is_empty());
    }

    #[test]
    fn test_sections_in_display_order() {
        let doc = doc(100);
        let order: Vec<Section> = doc.sections().iter().map(|(s, _)| *s).collect();
        assert_eq!(order, Section::ALL.to_vec());

        let last = doc.sections().last().map(|(_, rows)| rows.end);
        assert_eq!(last, Some(doc.height()));
        assert!(doc.sections().windows(2).all(|w| w[0].1.end == w[1].1.start));
    }

    #[test]
    fn test_anchor_and_section_at_agree() {
        let doc = doc(100);
        for section in Section::ALL {
            assert_eq!(doc.section_at(doc.anchor(section)), Some(section));
        }
        assert_eq!(doc.anchor(Section::Home), 0);
    }

    #[test]
    fn test_links_fit_content_column() {
        let doc = doc(120);
        assert!(!doc.links().is_empty());
        for link in doc.links() {
            assert!(link.x >= (120 - MAX_CONTENT_WIDTH) / 2);
            assert!(link.x + link.width <= 120);
            assert!(link.row < doc.height());
        }
        assert!(doc.links().iter().any(|l| l.action == HotspotAction::CopyEmail));
    }

    #[test]
    fn test_form_area_is_reserved_in_contact() {
        let doc = doc(80);
        let (row, area) = doc.form_area().unwrap();
        assert_eq!(doc.section_at(row), Some(Section::Contact));
        assert_eq!(area.height, FORM_HEIGHT);
        assert_eq!(area.width, 76);
    }

    #[test]
    fn test_narrow_viewport_grows_document() {
        assert!(doc(40).height() > doc(120).height());
    }
}
