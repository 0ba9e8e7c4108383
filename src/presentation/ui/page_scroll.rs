//! Smooth scrolling on top of the page scroll model.

use std::time::Duration;

use tachyonfx::Interpolation;

use crate::domain::ScrollState;

const SMOOTH_SCROLL_DURATION: Duration = Duration::from_millis(400);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ScrollAnimation {
    from: usize,
    to: usize,
    elapsed: Duration,
}

/// Page scroll position with an optional eased scroll in flight.
///
/// Manual movement always cancels a running animation.
#[derive(Debug, Clone, Default)]
pub struct PageScroll {
    state: ScrollState,
    animation: Option<ScrollAnimation>,
}

impl PageScroll {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: ScrollState::new(),
            animation: None,
        }
    }

    /// Returns the underlying scroll model.
    #[must_use]
    pub const fn state(&self) -> &ScrollState {
        &self.state
    }

    #[must_use]
    pub const fn offset(&self) -> usize {
        self.state.offset()
    }

    /// Updates the extent, retargeting a running animation. Returns whether
    /// the offset was clamped.
    pub fn set_extent(&mut self, content_height: usize, viewport_height: usize) -> bool {
        let changed = self.state.set_extent(content_height, viewport_height);
        let max = self.state.max_offset();
        if let Some(anim) = &mut self.animation {
            anim.to = anim.to.min(max);
        }
        changed
    }

    pub fn set_offset(&mut self, offset: usize) -> bool {
        self.animation = None;
        self.state.set_offset(offset)
    }

    pub fn scroll_by(&mut self, delta: isize) -> bool {
        self.animation = None;
        self.state.scroll_by(delta)
    }

    pub fn page_up(&mut self, viewport_height: usize) -> bool {
        self.animation = None;
        self.state.page_up(viewport_height)
    }

    pub fn page_down(&mut self, viewport_height: usize) -> bool {
        self.animation = None;
        self.state.page_down(viewport_height)
    }

    pub fn end(&mut self) -> bool {
        self.animation = None;
        self.state.end()
    }

    /// Starts an eased scroll towards `target`.
    pub fn smooth_to(&mut self, target: usize) {
        let to = target.min(self.state.max_offset());
        let from = self.state.offset();
        self.animation = (to != from).then_some(ScrollAnimation {
            from,
            to,
            elapsed: Duration::ZERO,
        });
    }

    /// Advances a running smooth scroll. Returns whether the offset changed.
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn tick(&mut self, dt: Duration) -> bool {
        let Some(mut anim) = self.animation else {
            return false;
        };

        anim.elapsed = anim.elapsed.saturating_add(dt);
        let t = (anim.elapsed.as_secs_f32() / SMOOTH_SCROLL_DURATION.as_secs_f32()).min(1.0);
        let eased = Interpolation::CubicOut.alpha(t);

        let from = anim.from as f32;
        let to = anim.to as f32;
        let next = if t >= 1.0 {
            anim.to
        } else {
            (from + (to - from) * eased).round().max(0.0) as usize
        };

        self.animation = (t < 1.0).then_some(anim);
        self.state.set_offset(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scrolled(max: usize) -> PageScroll {
        let mut scroll = PageScroll::new();
        scroll.set_extent(max + 10, 10);
        scroll
    }

    #[test]
    fn test_smooth_scroll_reaches_target() {
        let mut scroll = scrolled(100);
        scroll.set_offset(80);
        scroll.smooth_to(0);
        assert!(scroll.animation.is_some());

        let mut previous = scroll.offset();
        for _ in 0..10 {
            scroll.tick(Duration::from_millis(50));
            assert!(scroll.offset() <= previous);
            previous = scroll.offset();
        }

        assert_eq!(scroll.offset(), 0);
        assert!(scroll.animation.is_none());
    }

    #[test]
    fn test_eases_out() {
        let mut scroll = scrolled(100);
        scroll.set_offset(100);
        scroll.smooth_to(0);

        scroll.tick(Duration::from_millis(100));
        assert!(100 - scroll.offset() > 25);
    }

    #[test]
    fn test_manual_scroll_cancels_animation() {
        let mut scroll = scrolled(100);
        scroll.set_offset(60);
        scroll.smooth_to(0);
        scroll.tick(Duration::from_millis(50));

        scroll.scroll_by(3);
        assert!(scroll.animation.is_none());
        assert!(!scroll.tick(Duration::from_millis(50)));
    }

    #[test]
    fn test_shrinking_extent_retargets_animation() {
        let mut scroll = scrolled(100);
        scroll.smooth_to(90);
        assert!(!scroll.set_extent(40, 10));

        scroll.tick(Duration::from_millis(400));
        assert_eq!(scroll.offset(), 30);
    }

    #[test]
    fn test_smooth_to_current_offset_is_noop() {
        let mut scroll = scrolled(100);
        scroll.smooth_to(0);
        assert!(scroll.animation.is_none());
    }
}
