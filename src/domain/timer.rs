//! Cancellable one-shot timer driven by frame deltas.

use std::time::Duration;

/// Lifecycle of a [`OneShotTimer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum TimerState {
    /// Not armed yet.
    #[default]
    Idle,
    /// Counting towards its deadline.
    Armed,
    /// Deadline reached; will not fire again until re-armed.
    Fired,
    /// Disarmed before firing.
    Cancelled,
}

/// A delay that fires at most once per arming.
///
/// The timer does not own a clock. Callers feed it elapsed time through
/// [`OneShotTimer::advance`], which keeps it deterministic under test and
/// lets the render loop drive it with measured frame deltas.
#[derive(Debug, Clone)]
pub struct OneShotTimer {
    duration: Duration,
    elapsed: Duration,
    state: TimerState,
}

impl OneShotTimer {
    /// Creates an idle timer with the given delay.
    #[must_use]
    pub const fn new(duration: Duration) -> Self {
        Self {
            duration,
            elapsed: Duration::ZERO,
            state: TimerState::Idle,
        }
    }

    /// Arms the timer, resetting any elapsed time.
    pub fn arm(&mut self) {
        self.elapsed = Duration::ZERO;
        self.state = TimerState::Armed;
    }

    /// Disarms a pending timer. Fired or idle timers are left untouched.
    pub fn cancel(&mut self) {
        if self.state == TimerState::Armed {
            self.state = TimerState::Cancelled;
        }
    }

    /// Advances the timer and returns `true` on the single call that reaches the deadline.
    pub fn advance(&mut self, dt: Duration) -> bool {
        if self.state != TimerState::Armed {
            return false;
        }

        self.elapsed = self.elapsed.saturating_add(dt);
        if self.elapsed >= self.duration {
            self.state = TimerState::Fired;
            return true;
        }
        false
    }

    /// Returns whether the timer is still counting.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.state == TimerState::Armed
    }

    /// Returns time accumulated since arming.
    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Returns the configured delay.
    #[must_use]
    pub const fn duration(&self) -> Duration {
        self.duration
    }
}
