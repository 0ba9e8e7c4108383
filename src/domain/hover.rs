//! Shared hover position driving the cursor follower.

use std::time::Duration;

const GROW_DURATION: Duration = Duration::from_millis(200);

/// Largest follower scale, reached after [`GROW_DURATION`].
pub const MAX_SCALE: f32 = 3.0;

/// Terminal cell the pointer is hovering over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoverPoint {
    /// Column.
    pub x: u16,
    /// Row.
    pub y: u16,
}

/// Hover state shared by every interactive element.
///
/// Interactive widgets report the pointer with [`HoverState::set`] and clear
/// it with [`HoverState::clear`]; the follower reads [`HoverState::scale`].
#[derive(Debug, Clone, Default)]
pub struct HoverState {
    point: Option<HoverPoint>,
    last_point: Option<HoverPoint>,
    scale: f32,
}

impl HoverState {
    /// Creates an empty hover state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            point: None,
            last_point: None,
            scale: 0.0,
        }
    }

    /// Records the pointer over an interactive element.
    pub fn set(&mut self, x: u16, y: u16) {
        let point = HoverPoint { x, y };
        self.point = Some(point);
        self.last_point = Some(point);
    }

    /// Pointer left every interactive element.
    pub fn clear(&mut self) {
        self.point = None;
    }

    /// Returns the hovered cell, if any.
    #[must_use]
    pub const fn point(&self) -> Option<HoverPoint> {
        self.point
    }

    /// Returns where the follower should be drawn while it grows or shrinks.
    #[must_use]
    pub fn follower_point(&self) -> Option<HoverPoint> {
        if self.scale > 0.0 {
            self.point.or(self.last_point)
        } else {
            None
        }
    }

    /// Returns the follower scale in `0.0..=MAX_SCALE`.
    #[must_use]
    pub const fn scale(&self) -> f32 {
        self.scale
    }

    /// Animates the follower towards its target scale. Returns whether it changed.
    #[allow(clippy::cast_possible_truncation)]
    pub fn tick(&mut self, dt: Duration) -> bool {
        let target = if self.point.is_some() { MAX_SCALE } else { 0.0 };
        if (self.scale - target).abs() < f32::EPSILON {
            return false;
        }

        let step = (dt.as_secs_f64() / GROW_DURATION.as_secs_f64()) as f32 * MAX_SCALE;
        self.scale = if self.scale < target {
            (self.scale + step).min(target)
        } else {
            (self.scale - step).max(target)
        };
        if self.scale <= 0.0 {
            self.last_point = None;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grows_while_hovered() {
        let mut hover = HoverState::new();
        hover.set(4, 2);

        assert!(hover.tick(Duration::from_millis(100)));
        assert!((hover.scale() - 1.5).abs() < 0.01);

        hover.tick(Duration::from_millis(200));
        assert!((hover.scale() - MAX_SCALE).abs() < f32::EPSILON);
        assert!(!hover.tick(Duration::from_millis(16)));
    }

    #[test]
    fn test_shrinks_at_last_point_after_clear() {
        let mut hover = HoverState::new();
        hover.set(4, 2);
        hover.tick(Duration::from_millis(300));

        hover.clear();
        assert_eq!(hover.point(), None);
        assert_eq!(hover.follower_point(), Some(HoverPoint { x: 4, y: 2 }));

        hover.tick(Duration::from_millis(300));
        assert_eq!(hover.follower_point(), None);
    }
}
