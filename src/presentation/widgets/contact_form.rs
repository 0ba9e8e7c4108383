//! Contact form state and widget.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use tracing::debug;

use crate::application::{ContactResponse, SubmitContactUseCase};
use crate::domain::{ContactError, ContactField, ContactForm, FormStatus};
use crate::presentation::events::EventHandler;
use crate::presentation::theme::Theme;

use super::input::TextInput;

/// Rows the form occupies on the page.
pub const FORM_HEIGHT: u16 = 11;

const SUBMIT_LABEL: &str = " ✉ Send Message ";
const SENDING_LABEL: &str = " Sending... ";

/// Outcome of a key press in form mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    /// Key handled, nothing else to do.
    None,
    /// User asked to submit.
    Submit,
    /// User left form mode.
    Leave,
}

/// Screen areas of the form parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormLayout {
    /// Input boxes in [`ContactField::ALL`] order.
    pub fields: [Rect; 4],
    /// Banner line.
    pub banner: Rect,
    /// Submit button.
    pub button: Rect,
}

impl FormLayout {
    /// Splits `area` into the form parts.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn new(area: Rect) -> Self {
        let [top, subject, message, banner, button_row] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);
        let [name, email] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).areas(top);

        let button_width = (SUBMIT_LABEL.chars().count() as u16).min(button_row.width);
        Self {
            fields: [name, email, subject, message],
            banner,
            button: Rect::new(button_row.x, button_row.y, button_width, button_row.height),
        }
    }

    /// Returns the box of one field.
    #[must_use]
    pub fn field(&self, field: ContactField) -> Rect {
        let index = ContactField::ALL
            .iter()
            .position(|f| *f == field)
            .unwrap_or_default();
        self.fields[index]
    }
}

/// Contact form state.
#[derive(Debug, Clone)]
pub struct ContactFormState {
    inputs: [TextInput; 4],
    focus: Option<ContactField>,
    status: FormStatus,
    submitting: bool,
}

impl ContactFormState {
    /// Creates an empty form with inputs highlighted in `accent`.
    #[must_use]
    pub fn new(accent: Color) -> Self {
        let input = |field: ContactField, placeholder: &str| {
            let label = if field.is_required() {
                format!(" {} * ", field.label())
            } else {
                format!(" {} ", field.label())
            };
            TextInput::new(label).placeholder(placeholder).accent(accent)
        };

        Self {
            inputs: [
                input(ContactField::Name, "Your name"),
                input(ContactField::Email, "you@example.com"),
                input(ContactField::Subject, "What is this about?"),
                input(ContactField::Message, "Your message..."),
            ],
            focus: None,
            status: FormStatus::None,
            submitting: false,
        }
    }

    fn input(&self, field: ContactField) -> &TextInput {
        match field {
            ContactField::Name => &self.inputs[0],
            ContactField::Email => &self.inputs[1],
            ContactField::Subject => &self.inputs[2],
            ContactField::Message => &self.inputs[3],
        }
    }

    fn input_mut(&mut self, field: ContactField) -> &mut TextInput {
        match field {
            ContactField::Name => &mut self.inputs[0],
            ContactField::Email => &mut self.inputs[1],
            ContactField::Subject => &mut self.inputs[2],
            ContactField::Message => &mut self.inputs[3],
        }
    }

    /// Returns whether keys go to the form.
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        self.focus.is_some()
    }

    /// Returns the focused field.
    #[must_use]
    pub const fn focus(&self) -> Option<ContactField> {
        self.focus
    }

    /// Returns the banner.
    #[must_use]
    pub const fn status(&self) -> &FormStatus {
        &self.status
    }

    /// Returns whether a submission is in flight.
    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Moves keyboard focus to `field`.
    pub fn focus_field(&mut self, field: ContactField) {
        for f in ContactField::ALL {
            self.input_mut(f).set_focused(f == field);
        }
        self.focus = Some(field);
    }

    /// Leaves form mode, keeping the typed values.
    pub fn blur(&mut self) {
        for input in &mut self.inputs {
            input.set_focused(false);
        }
        self.focus = None;
    }

    /// Returns the current values.
    #[must_use]
    pub fn form(&self) -> ContactForm {
        ContactForm::new(
            self.input(ContactField::Name).value(),
            self.input(ContactField::Email).value(),
            self.input(ContactField::Subject).value(),
            self.input(ContactField::Message).value(),
        )
    }

    /// Handles key event, returns action.
    ///
    /// While a submission is in flight only `Esc` is honoured, so nothing typed
    /// after the send is lost when a successful submission clears the fields.
    pub fn handle_key(&mut self, key: KeyEvent) -> FormAction {
        let Some(field) = self.focus else {
            return FormAction::None;
        };

        if self.submitting && key.code != KeyCode::Esc {
            return FormAction::None;
        }

        if EventHandler::is_submit_event(&key) {
            return FormAction::Submit;
        }

        match key.code {
            KeyCode::Esc => {
                self.blur();
                return FormAction::Leave;
            }
            KeyCode::Enter if field == ContactField::Message => return FormAction::Submit,
            KeyCode::Enter | KeyCode::Tab => self.focus_field(field.next()),
            KeyCode::BackTab => self.focus_field(field.previous()),
            KeyCode::Char(c) => self.input_mut(field).input_char(c),
            KeyCode::Backspace => self.input_mut(field).backspace(),
            KeyCode::Delete => self.input_mut(field).delete(),
            KeyCode::Left => self.input_mut(field).move_left(),
            KeyCode::Right => self.input_mut(field).move_right(),
            KeyCode::Home => self.input_mut(field).move_start(),
            KeyCode::End => self.input_mut(field).move_end(),
            _ => {}
        }

        FormAction::None
    }

    /// Validates the form and marks it as submitting.
    ///
    /// Returns `None` while another submission is in flight, or when
    /// validation fails; the failure is shown in the banner and nothing is sent.
    pub fn begin_submit(&mut self) -> Option<ContactForm> {
        if self.submitting {
            debug!("Submission already in flight, ignoring");
            return None;
        }

        let form = self.form();
        if let Err(e) = form.validate() {
            self.status = FormStatus::Error(SubmitContactUseCase::banner_for(&e));
            return None;
        }

        self.submitting = true;
        self.status = FormStatus::None;
        Some(form)
    }

    /// Applies the result of a submission. Values are cleared only on success.
    pub fn finish_submit(&mut self, result: Result<ContactResponse, ContactError>) {
        self.submitting = false;
        match result {
            Ok(response) => {
                for input in &mut self.inputs {
                    input.clear();
                }
                self.status = FormStatus::Success(response.message);
            }
            Err(e) => {
                self.status = FormStatus::Error(SubmitContactUseCase::banner_for(&e));
            }
        }
    }
}

/// Renders a [`ContactFormState`].
pub struct ContactFormView<'a> {
    state: &'a ContactFormState,
    theme: &'a Theme,
}

impl<'a> ContactFormView<'a> {
    #[must_use]
    pub const fn new(state: &'a ContactFormState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }
}

impl Widget for ContactFormView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = FormLayout::new(area);

        for field in ContactField::ALL {
            self.state.input(field).render(layout.field(field), buf);
        }

        let banner = match &self.state.status {
            FormStatus::None if !self.state.is_editing() => Line::from(Span::styled(
                "Press c or click a field to write a message",
                self.theme.dimmed_style,
            )),
            FormStatus::None => Line::from(Span::styled(
                "Tab next field · Enter on message or Ctrl+S to send · Esc to leave",
                self.theme.dimmed_style,
            )),
            FormStatus::Success(msg) => Line::from(Span::styled(msg.as_str(), self.theme.success_style)),
            FormStatus::Error(msg) => Line::from(Span::styled(msg.as_str(), self.theme.error_style)),
        };
        Paragraph::new(banner).render(layout.banner, buf);

        let (label, style) = if self.state.submitting {
            (SENDING_LABEL, Style::default().fg(Color::Gray).bg(Color::DarkGray))
        } else {
            (
                SUBMIT_LABEL,
                Style::default()
                    .fg(Color::White)
                    .bg(self.theme.accent)
                    .add_modifier(Modifier::BOLD),
            )
        };
        Paragraph::new(Span::styled(label, style)).render(layout.button, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::{FAILURE_MESSAGE, SUCCESS_MESSAGE};
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(state: &mut ContactFormState, text: &str) {
        for c in text.chars() {
            state.handle_key(key(KeyCode::Char(c)));
        }
    }

    fn filled() -> ContactFormState {
        let mut state = ContactFormState::new(Color::Blue);
        state.focus_field(ContactField::Name);
        type_text(&mut state, "Ada");
        state.handle_key(key(KeyCode::Tab));
        type_text(&mut state, "ada@example.com");
        state.handle_key(key(KeyCode::Tab));
        state.handle_key(key(KeyCode::Tab));
        type_text(&mut state, "Hello");
        state
    }

    #[test]
    fn test_keys_ignored_when_not_editing() {
        let mut state = ContactFormState::new(Color::Blue);
        assert_eq!(state.handle_key(key(KeyCode::Char('x'))), FormAction::None);
        assert!(state.form().name.is_empty());
    }

    #[test]
    fn test_tab_cycles_fields() {
        let mut state = ContactFormState::new(Color::Blue);
        state.focus_field(ContactField::Message);
        state.handle_key(key(KeyCode::Tab));
        assert_eq!(state.focus(), Some(ContactField::Name));
        state.handle_key(key(KeyCode::BackTab));
        assert_eq!(state.focus(), Some(ContactField::Message));
    }

    #[test]
    fn test_enter_on_last_field_submits() {
        let mut state = filled();
        assert_eq!(state.focus(), Some(ContactField::Message));
        assert_eq!(state.handle_key(key(KeyCode::Enter)), FormAction::Submit);

        state.focus_field(ContactField::Name);
        assert_eq!(state.handle_key(key(KeyCode::Enter)), FormAction::None);
        assert_eq!(state.focus(), Some(ContactField::Email));

        let ctrl_s = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert_eq!(state.handle_key(ctrl_s), FormAction::Submit);
    }

    #[test]
    fn test_escape_leaves_and_keeps_values() {
        let mut state = filled();
        assert_eq!(state.handle_key(key(KeyCode::Esc)), FormAction::Leave);
        assert!(!state.is_editing());
        assert_eq!(state.form().name, "Ada");
    }

    #[test]
    fn test_invalid_form_is_not_submitted() {
        let mut state = ContactFormState::new(Color::Blue);
        assert!(state.begin_submit().is_none());
        assert!(!state.is_submitting());
        assert_eq!(
            state.status(),
            &FormStatus::Error("Please fill in all required fields".to_string())
        );
    }

    #[test]
    fn test_single_submission_in_flight() {
        let mut state = filled();
        let form = state.begin_submit().unwrap();
        assert_eq!(form.subject, "");
        assert!(state.is_submitting());
        assert!(state.begin_submit().is_none());
    }

    #[test]
    fn test_edits_ignored_while_submitting() {
        let mut state = filled();
        state.begin_submit();

        assert_eq!(state.handle_key(key(KeyCode::Char('x'))), FormAction::None);
        assert_eq!(state.handle_key(key(KeyCode::Backspace)), FormAction::None);
        assert_eq!(state.handle_key(key(KeyCode::Enter)), FormAction::None);
        assert_eq!(state.form().message, "Hello");

        state.finish_submit(Err(ContactError::network("connection refused")));
        state.handle_key(key(KeyCode::Char('x')));
        assert_eq!(state.form().message, "Hellox");
    }

    #[test]
    fn test_success_clears_fields() {
        let mut state = filled();
        state.begin_submit();
        state.finish_submit(Ok(ContactResponse::delivered()));

        assert!(!state.is_submitting());
        assert_eq!(state.status(), &FormStatus::Success(SUCCESS_MESSAGE.to_string()));
        assert_eq!(state.form(), ContactForm::new("", "", "", ""));
    }

    #[test]
    fn test_failure_keeps_fields() {
        let mut state = filled();
        state.begin_submit();
        state.finish_submit(Err(ContactError::network("connection refused")));

        assert!(!state.is_submitting());
        assert_eq!(state.status(), &FormStatus::Error(FAILURE_MESSAGE.to_string()));
        assert_eq!(state.form().name, "Ada");
    }

    #[test]
    fn test_layout_fits_height() {
        let layout = FormLayout::new(Rect::new(2, 10, 60, FORM_HEIGHT));
        assert_eq!(layout.field(ContactField::Name).width, 30);
        assert_eq!(layout.button.y, 10 + FORM_HEIGHT - 1);
        assert_eq!(layout.field(ContactField::Message).y, 16);
    }
}
