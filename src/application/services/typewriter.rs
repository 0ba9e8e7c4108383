//! Typewriter text animation.

use std::time::Duration;

const MIN_STEP: Duration = Duration::from_millis(1);

/// Per-character timing of a [`Typewriter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterTimings {
    /// Delay before each typed character.
    pub type_delay: Duration,
    /// Delay before each deleted character.
    pub delete_delay: Duration,
    /// Pause on a fully typed text before deleting it.
    pub hold: Duration,
}

impl TypewriterTimings {
    /// Timing used for the hero role loop.
    pub const ROLES: Self = Self {
        type_delay: Duration::from_millis(60),
        delete_delay: Duration::from_millis(30),
        hold: Duration::from_millis(3000),
    };

    /// Timing used for loading screen snippets.
    #[must_use]
    pub const fn typing(delay: Duration) -> Self {
        Self {
            type_delay: delay,
            delete_delay: delay,
            hold: Duration::ZERO,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Typing,
    Holding,
    Deleting,
    Done,
}

/// Types texts out character by character, optionally cycling through them.
#[derive(Debug, Clone)]
pub struct Typewriter {
    texts: Vec<String>,
    index: usize,
    shown: usize,
    stage: Stage,
    elapsed: Duration,
    timings: TypewriterTimings,
    looping: bool,
}

impl Typewriter {
    /// Types a single text once and stops.
    #[must_use]
    pub fn once(text: impl Into<String>, delay: Duration) -> Self {
        Self {
            texts: vec![text.into()],
            index: 0,
            shown: 0,
            stage: Stage::Typing,
            elapsed: Duration::ZERO,
            timings: TypewriterTimings::typing(delay),
            looping: false,
        }
    }

    /// Types, holds and deletes each text in turn, forever.
    #[must_use]
    pub fn looping(texts: Vec<String>, timings: TypewriterTimings) -> Self {
        let stage = if texts.is_empty() {
            Stage::Done
        } else {
            Stage::Typing
        };
        Self {
            texts,
            index: 0,
            shown: 0,
            stage,
            elapsed: Duration::ZERO,
            timings,
            looping: true,
        }
    }

    fn current_len(&self) -> usize {
        self.texts
            .get(self.index)
            .map_or(0, |text| text.chars().count())
    }

    /// Advances the animation. Returns whether the visible text changed.
    pub fn tick(&mut self, dt: Duration) -> bool {
        self.elapsed = self.elapsed.saturating_add(dt);
        let mut changed = false;

        loop {
            let step = match self.stage {
                Stage::Typing => self.timings.type_delay,
                Stage::Holding => self.timings.hold,
                Stage::Deleting => self.timings.delete_delay,
                Stage::Done => return changed,
            }
            .max(MIN_STEP);
            if self.elapsed < step {
                return changed;
            }
            self.elapsed -= step;

            match self.stage {
                Stage::Typing => {
                    if self.shown < self.current_len() {
                        self.shown += 1;
                        changed = true;
                    }
                    if self.shown >= self.current_len() {
                        self.stage = if self.looping {
                            Stage::Holding
                        } else {
                            Stage::Done
                        };
                    }
                }
                Stage::Holding => self.stage = Stage::Deleting,
                Stage::Deleting => {
                    if self.shown > 0 {
                        self.shown -= 1;
                        changed = true;
                    }
                    if self.shown == 0 {
                        self.index = (self.index + 1) % self.texts.len().max(1);
                        self.stage = Stage::Typing;
                    }
                }
                Stage::Done => {}
            }
        }
    }

    /// Returns the currently visible prefix.
    #[must_use]
    pub fn visible(&self) -> &str {
        let Some(text) = self.texts.get(self.index) else {
            return "";
        };
        let end = text
            .char_indices()
            .nth(self.shown)
            .map_or(text.len(), |(i, _)| i);
        &text[..end]
    }

    /// Returns whether a one-shot text has been fully typed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.stage == Stage::Done
    }

    /// Returns whether a caret should trail the text.
    #[must_use]
    pub fn show_caret(&self) -> bool {
        self.looping || !self.is_complete()
    }
}
