//! Intro sequence controller.
//!
//! Owns the `loading`, `transitioning` and `scroll_top_visible` flags. It is the
//! single writer; views receive [`SequenceFlags`] snapshots and never mutate it.

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::domain::{OneShotTimer, Phase, SequenceFlags};

/// Default length of the loading phase.
pub const LOADING_DURATION_MS: u64 = 4000;
/// Default length of the transition animation.
pub const TRANSITION_DURATION_MS: u64 = 2000;
/// Default scroll offset above which the scroll-to-top affordance shows.
pub const SCROLL_TOP_THRESHOLD: u32 = 300;

/// Timing knobs of the intro sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceTimings {
    /// Length of [`Phase::Loading`].
    pub loading: Duration,
    /// Length of [`Phase::Transitioning`], owned by the transition overlay.
    pub transition: Duration,
    /// Pixel-equivalent offset threshold for the scroll-to-top affordance.
    pub scroll_top_threshold: u32,
}

impl Default for SequenceTimings {
    fn default() -> Self {
        Self {
            loading: Duration::from_millis(LOADING_DURATION_MS),
            transition: Duration::from_millis(TRANSITION_DURATION_MS),
            scroll_top_threshold: SCROLL_TOP_THRESHOLD,
        }
    }
}

/// Viewport change requested by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollRequest {
    /// Scroll to offset zero.
    Top {
        /// Ease towards the target instead of jumping.
        smooth: bool,
    },
}

impl ScrollRequest {
    /// Row offset the request targets.
    #[must_use]
    pub const fn target_row(self) -> usize {
        match self {
            Self::Top { .. } => 0,
        }
    }
}

/// Drives `Loading -> Transitioning -> Revealed` and the scroll-to-top flag.
#[derive(Debug)]
pub struct SequenceController {
    timings: SequenceTimings,
    phase: Phase,
    active: bool,
    loading_timer: OneShotTimer,
    scroll_top_visible: bool,
    last_scroll_px: u32,
}

impl SequenceController {
    /// Creates an inactive controller in [`Phase::Loading`].
    #[must_use]
    pub const fn new(timings: SequenceTimings) -> Self {
        Self {
            timings,
            phase: Phase::Loading,
            active: false,
            loading_timer: OneShotTimer::new(timings.loading),
            scroll_top_visible: false,
            last_scroll_px: 0,
        }
    }

    /// Starts the sequence. Repeated calls while active are ignored.
    pub fn activate(&mut self) {
        if self.active {
            debug!("Sequence already active, ignoring activation");
            return;
        }

        self.active = true;
        self.phase = Phase::Loading;
        self.loading_timer.arm();

        info!(
            loading_ms = self.timings.loading.as_millis(),
            "Sequence activated"
        );
    }

    /// Advances the loading timer by `dt`.
    pub fn tick(&mut self, dt: Duration) {
        if !self.active {
            return;
        }

        if self.loading_timer.advance(dt) {
            self.on_loading_timer_fired();
        }
    }

    /// Loading finished: `loading := false` and `transitioning := true` in one step.
    fn on_loading_timer_fired(&mut self) {
        if !self.active || self.phase != Phase::Loading {
            warn!(phase = %self.phase, "Loading timer fired outside loading phase");
            return;
        }

        self.phase = Phase::Transitioning;
        info!(
            elapsed_ms = self.loading_timer.elapsed().as_millis(),
            "Loading complete, starting transition"
        );
    }

    /// Called once by the transition overlay when its animation ends.
    pub fn on_transition_complete(&mut self) {
        if !self.active || self.phase != Phase::Transitioning {
            warn!(phase = %self.phase, active = self.active, "Unexpected transition completion");
            return;
        }

        self.phase = Phase::Revealed;
        info!("Transition complete, content revealed");
    }

    /// Records a new scroll offset in pixel-equivalent units.
    pub fn on_scroll(&mut self, offset_y: u32) {
        self.last_scroll_px = offset_y;
        self.scroll_top_visible = offset_y > self.timings.scroll_top_threshold;
    }

    /// User asked to go back to the top.
    #[must_use]
    pub fn scroll_to_top(&self) -> ScrollRequest {
        debug!(from_px = self.last_scroll_px, "Scroll to top requested");
        ScrollRequest::Top { smooth: true }
    }

    /// Tears the sequence down. Safe to call repeatedly; a pending loading
    /// timer is cancelled and can no longer change the phase.
    pub fn deactivate(&mut self) {
        if !self.active {
            return;
        }

        self.loading_timer.cancel();
        self.active = false;
        debug!(phase = %self.phase, "Sequence deactivated");
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns whether the controller is running.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the read-only flag snapshot for views.
    #[must_use]
    pub const fn flags(&self) -> SequenceFlags {
        SequenceFlags::from_phase(self.phase, self.scroll_top_visible)
    }

    /// Returns how far the loading phase has progressed, in `0.0..=1.0`.
    #[must_use]
    pub fn loading_progress(&self) -> f64 {
        match self.phase {
            Phase::Loading => {
                let total = self.timings.loading.as_secs_f64();
                if total <= 0.0 {
                    return 1.0;
                }
                (self.loading_timer.elapsed().as_secs_f64() / total).clamp(0.0, 1.0)
            }
            Phase::Transitioning | Phase::Revealed => 1.0,
        }
    }

    /// Returns configured timings.
    #[must_use]
    pub const fn timings(&self) -> SequenceTimings {
        self.timings
    }
}

impl Default for SequenceController {
    fn default() -> Self {
        Self::new(SequenceTimings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ScrollState;
    use test_case::test_case;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn active() -> SequenceController {
        let mut controller = SequenceController::default();
        controller.activate();
        controller
    }

    #[test]
    fn test_loading_until_deadline() {
        let mut controller = active();

        for _ in 0..3999 {
            controller.tick(ms(1));
            let flags = controller.flags();
            assert!(flags.loading);
            assert!(!flags.transitioning);
        }

        controller.tick(ms(1));
        let flags = controller.flags();
        assert!(!flags.loading);
        assert!(flags.transitioning);
    }

    #[test]
    fn test_full_sequence() {
        let mut controller = active();
        assert_eq!(controller.phase(), Phase::Loading);

        controller.tick(ms(4000));
        assert_eq!(controller.phase(), Phase::Transitioning);

        controller.tick(ms(60_000));
        assert_eq!(controller.phase(), Phase::Transitioning);
        assert!(!controller.flags().is_revealed());

        controller.on_transition_complete();
        let flags = controller.flags();
        assert!(!flags.loading);
        assert!(!flags.transitioning);
        assert!(flags.is_revealed());
    }

    #[test]
    fn test_never_returns_to_loading() {
        let mut controller = active();
        controller.tick(ms(4000));
        controller.on_transition_complete();

        controller.tick(ms(10_000));
        controller.activate();
        assert_eq!(controller.phase(), Phase::Revealed);
    }

    #[test]
    fn test_transition_complete_ignored_while_loading() {
        let mut controller = active();
        controller.on_transition_complete();
        assert_eq!(controller.phase(), Phase::Loading);
    }

    #[test]
    fn test_transition_complete_is_one_shot() {
        let mut controller = active();
        controller.tick(ms(4000));
        controller.on_transition_complete();
        controller.on_transition_complete();
        assert_eq!(controller.phase(), Phase::Revealed);
    }

    #[test]
    fn test_reveal_never_precedes_transition_complete() {
        let mut controller = active();
        let mut revealed_frames = 0;
        for _ in 0..200 {
            controller.tick(ms(33));
            if controller.flags().is_revealed() {
                revealed_frames += 1;
            }
        }
        assert_eq!(revealed_frames, 0);
    }

    #[test]
    fn test_deactivate_before_timer_prevents_transition() {
        let mut controller = active();
        controller.tick(ms(2000));
        controller.deactivate();

        controller.tick(ms(10_000));
        assert_eq!(controller.phase(), Phase::Loading);
        assert!(!controller.is_active());

        controller.deactivate();
        assert!(!controller.is_active());
    }

    #[test]
    fn test_deactivate_ignores_late_transition_complete() {
        let mut controller = active();
        controller.tick(ms(4000));
        controller.deactivate();
        controller.on_transition_complete();
        assert_eq!(controller.phase(), Phase::Transitioning);
    }

    #[test]
    fn test_reactivate_after_teardown_restarts() {
        let mut controller = active();
        controller.tick(ms(4000));
        controller.on_transition_complete();
        controller.deactivate();

        controller.activate();
        assert_eq!(controller.phase(), Phase::Loading);
        controller.tick(ms(3999));
        assert_eq!(controller.phase(), Phase::Loading);
        controller.tick(ms(1));
        assert_eq!(controller.phase(), Phase::Transitioning);
    }

    #[test]
    fn test_inactive_controller_ignores_ticks() {
        let mut controller = SequenceController::default();
        controller.tick(ms(5000));
        assert_eq!(controller.phase(), Phase::Loading);
    }

    #[test_case(0, false ; "top")]
    #[test_case(300, false ; "at threshold")]
    #[test_case(301, true ; "past threshold")]
    #[test_case(5000, true ; "far down")]
    fn test_scroll_threshold(offset: u32, visible: bool) {
        let mut controller = SequenceController::default();
        controller.on_scroll(offset);
        assert_eq!(controller.flags().scroll_top_visible, visible);
    }

    #[test]
    fn test_scroll_sequence() {
        let mut controller = SequenceController::default();
        let observed: Vec<bool> = [0, 150, 301, 299]
            .into_iter()
            .map(|offset| {
                controller.on_scroll(offset);
                controller.flags().scroll_top_visible
            })
            .collect();
        assert_eq!(observed, vec![false, false, true, false]);
    }

    #[test]
    fn test_row_offsets_use_cell_height() {
        let mut controller = SequenceController::default();
        let mut scroll = ScrollState::new();
        scroll.set_extent(100, 10);

        scroll.set_offset(15);
        controller.on_scroll(scroll.offset_px());
        assert!(!controller.flags().scroll_top_visible);

        scroll.set_offset(16);
        controller.on_scroll(scroll.offset_px());
        assert!(controller.flags().scroll_top_visible);
    }

    #[test]
    fn test_scroll_flag_orthogonal_to_phase() {
        let mut controller = active();
        controller.on_scroll(400);
        assert!(controller.flags().loading);
        assert!(controller.flags().scroll_top_visible);
    }

    #[test]
    fn test_scroll_to_top_is_smooth() {
        let controller = SequenceController::default();
        let request = controller.scroll_to_top();
        assert_eq!(request, ScrollRequest::Top { smooth: true });
        assert_eq!(request.target_row(), 0);
    }

    #[test]
    fn test_loading_progress() {
        let mut controller = active();
        assert!((controller.loading_progress() - 0.0).abs() < f64::EPSILON);
        controller.tick(ms(1000));
        assert!((controller.loading_progress() - 0.25).abs() < 1e-9);
        controller.tick(ms(3000));
        assert!((controller.loading_progress() - 1.0).abs() < f64::EPSILON);
    }
}
