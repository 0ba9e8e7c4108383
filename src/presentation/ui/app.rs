//! Main application orchestrator.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{Event, EventStream, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use futures_util::StreamExt;
use ratatui::backend::Backend;
use ratatui::{DefaultTerminal, Frame, Terminal};
use tokio::sync::mpsc;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, info, warn};

use crate::application::dto::{ContactRequest, ContactResponse};
use crate::application::use_cases::SubmitContactUseCase;
use crate::application::{SequenceController, SequenceTimings};
use crate::domain::errors::ContactError;
use crate::domain::hover::HoverState;
use crate::domain::ports::{ContactRelayPort, LinkOpenerPort};
use crate::domain::scroll::WHEEL_STEP_ROWS;
use crate::domain::{ContactField, Phase, Portfolio};
use crate::presentation::events::{EventHandler, EventResult, PageCommand};
use crate::presentation::theme::Theme;
use crate::presentation::ui::{
    LoadingScreen, PageTransition, PortfolioScreen, PortfolioScreenState,
};
use crate::presentation::widgets::{CursorFollower, FormAction, HotspotAction};

const ANIMATION_TICK_RATE: Duration = Duration::from_millis(33);

#[derive(Debug)]
enum Action {
    ContactResult(Result<ContactResponse, ContactError>),
}

/// Presentation settings resolved from configuration.
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Intro sequence timings.
    pub timings: SequenceTimings,
    /// Theme derived from the configured accent color.
    pub theme: Theme,
    /// Play `TachyonFX` effects and fades.
    pub animations: bool,
}

pub struct App {
    exiting: bool,
    controller: SequenceController,
    last_phase: Phase,
    loading: LoadingScreen,
    transition: PageTransition,
    page: PortfolioScreenState,
    hover: HoverState,
    theme: Theme,
    submit_use_case: Arc<SubmitContactUseCase>,
    opener: Arc<dyn LinkOpenerPort>,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
}

impl App {
    #[must_use]
    pub fn new(
        portfolio: Portfolio,
        settings: AppSettings,
        relay: Arc<dyn ContactRelayPort>,
        opener: Arc<dyn LinkOpenerPort>,
    ) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let AppSettings {
            timings,
            theme,
            animations,
        } = settings;

        let loading = LoadingScreen::new(&portfolio, theme, animations);
        let transition = PageTransition::new(timings.transition, &theme);
        let page = PortfolioScreenState::new(Arc::new(portfolio), theme, animations);

        Self {
            exiting: false,
            controller: SequenceController::new(timings),
            last_phase: Phase::Loading,
            loading,
            transition,
            page,
            hover: HoverState::new(),
            theme,
            submit_use_case: Arc::new(SubmitContactUseCase::new(relay)),
            opener,
            action_tx,
            action_rx,
        }
    }

    /// # Errors
    /// Returns error if drawing to the terminal fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        self.controller.activate();

        let result = self.run_event_loop(terminal).await;

        self.controller.deactivate();
        info!("Application exiting normally");
        result
    }

    async fn run_event_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();
        let mut animation_interval = interval(ANIMATION_TICK_RATE);
        animation_interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut last_tick = Instant::now();

        self.draw(terminal)?;

        while !self.exiting {
            let terminal_event = terminal_events.next();

            tokio::select! {
                Some(action) = self.action_rx.recv() => {
                    self.handle_action(action);
                    self.draw(terminal)?;
                }

                _ = animation_interval.tick() => {
                    let now = Instant::now();
                    self.tick(now.duration_since(last_tick));
                    last_tick = now;
                    self.draw(terminal)?;
                }

                Some(Ok(event)) = terminal_event => {
                    if self.handle_terminal_event(event) == EventResult::Exit {
                        self.exiting = true;
                    }
                    self.draw(terminal)?;
                }
            }
        }

        Ok(())
    }

    /// Advances the sequence and every animation by `dt`.
    fn tick(&mut self, dt: Duration) {
        self.controller.tick(dt);

        let phase = self.controller.phase();
        let entered = phase != self.last_phase;
        self.last_phase = phase;

        match phase {
            Phase::Loading => self.loading.tick(dt, self.controller.loading_progress()),
            Phase::Transitioning => {
                // Time spent this tick belonged to the loading phase.
                let dt = if entered {
                    self.transition.start();
                    Duration::ZERO
                } else {
                    dt
                };
                if self.transition.tick(dt) {
                    self.controller.on_transition_complete();
                    self.page.reveal();
                    self.last_phase = self.controller.phase();
                }
            }
            Phase::Revealed => {}
        }

        if self.page.tick(dt) {
            self.sync_scroll();
        }
        self.hover.tick(dt);
    }

    fn sync_scroll(&mut self) {
        self.controller.on_scroll(self.page.scroll().offset_px());
    }

    /// Draws a frame. A resize can clamp the page offset during layout, so the
    /// controller is told afterwards.
    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> color_eyre::Result<()>
    where
        B::Error: Send + Sync + 'static,
    {
        terminal.draw(|frame| self.render(frame))?;
        if self.page.take_extent_clamped() {
            self.sync_scroll();
        }
        Ok(())
    }

    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let flags = self.controller.flags();

        if flags.loading {
            frame.render_widget(&mut self.loading, area);
            return;
        }

        frame.render_stateful_widget(
            PortfolioScreen::new(flags).hover(self.hover.point()),
            area,
            &mut self.page,
        );

        if flags.transitioning {
            frame.render_widget(&self.transition, area);
        } else {
            frame.render_widget(CursorFollower::new(&self.hover, self.theme.accent), area);
        }
    }

    fn handle_terminal_event(&mut self, event: Event) -> EventResult {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => {
                self.handle_mouse(mouse);
                EventResult::Consumed
            }
            _ => EventResult::Continue,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        if EventHandler::is_force_quit_event(&key) {
            return EventResult::Exit;
        }

        if !self.controller.flags().is_revealed() {
            return if EventHandler::is_quit_event(&key) {
                EventResult::Exit
            } else {
                EventResult::Continue
            };
        }

        if self.page.form().is_editing() {
            if self.page.form_mut().handle_key(key) == FormAction::Submit {
                self.submit_contact();
            }
            return EventResult::Consumed;
        }

        if EventHandler::is_quit_event(&key) {
            return EventResult::Exit;
        }

        match EventHandler::page_command(&key) {
            Some(command) => {
                self.run_command(command);
                EventResult::Consumed
            }
            None => EventResult::Continue,
        }
    }

    fn run_command(&mut self, command: PageCommand) {
        let moved = match command {
            PageCommand::ScrollBy(rows) => self.page.scroll_by(rows),
            PageCommand::PageUp => self.page.page_up(),
            PageCommand::PageDown => self.page.page_down(),
            PageCommand::ScrollBottom => self.page.scroll_end(),
            PageCommand::ScrollTop => {
                let request = self.controller.scroll_to_top();
                self.page.apply(request)
            }
            PageCommand::Jump(section) => {
                self.page.jump_to(section);
                false
            }
            PageCommand::EditContact => {
                self.page.edit_contact(ContactField::Name);
                false
            }
            PageCommand::OpenResume => {
                match self.page.resume().map(str::to_owned) {
                    Some(url) => self.open_link(&url),
                    None => debug!("No resume configured"),
                }
                false
            }
            PageCommand::CopyEmail => {
                self.copy_email();
                false
            }
        };

        if moved {
            self.sync_scroll();
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if !self.controller.flags().is_revealed() {
            return;
        }

        let (x, y) = (mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                if self.page.hotspot_at(x, y).is_some() {
                    self.hover.set(x, y);
                } else {
                    self.hover.clear();
                }
            }
            MouseEventKind::Down(MouseButton::Left) => match self.page.hotspot_at(x, y) {
                Some(action) => self.activate_hotspot(action),
                None => self.page.form_mut().blur(),
            },
            MouseEventKind::ScrollDown => self.scroll_wheel(true),
            MouseEventKind::ScrollUp => self.scroll_wheel(false),
            _ => {}
        }
    }

    #[allow(clippy::cast_possible_wrap)]
    fn scroll_wheel(&mut self, down: bool) {
        let step = WHEEL_STEP_ROWS as isize;
        self.run_command(PageCommand::ScrollBy(if down { step } else { -step }));
    }

    fn activate_hotspot(&mut self, action: HotspotAction) {
        debug!(?action, "Hotspot activated");
        match action {
            HotspotAction::Open(url) => self.open_link(&url),
            HotspotAction::Jump(section) => self.run_command(PageCommand::Jump(section)),
            HotspotAction::ScrollTop => self.run_command(PageCommand::ScrollTop),
            HotspotAction::FocusField(field) => self.page.edit_contact(field),
            HotspotAction::Submit => self.submit_contact(),
            HotspotAction::CopyEmail => self.copy_email(),
        }
    }

    fn open_link(&self, url: &str) {
        if let Err(e) = self.opener.open(url) {
            warn!(error = %e, url = %url, "Could not open link");
        }
    }

    fn copy_email(&self) {
        self.opener.copy(self.page.email());
        info!("Copied contact e-mail to clipboard");
    }

    fn submit_contact(&mut self) {
        let Some(form) = self.page.form_mut().begin_submit() else {
            return;
        };

        let use_case = Arc::clone(&self.submit_use_case);
        let tx = self.action_tx.clone();

        tokio::spawn(async move {
            let result = use_case.execute(ContactRequest::new(form)).await;
            let _ = tx.send(Action::ContactResult(result));
        });
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::ContactResult(result) => self.page.form_mut().finish_submit(result),
        }
    }
}
