//! Load, transition and reveal phases of the page.

/// Phase of the one-time intro sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Loading screen is shown.
    #[default]
    Loading,
    /// Page transition animation is running.
    Transitioning,
    /// Content is visible and interactive.
    Revealed,
}

impl Phase {
    /// Returns the `loading` flag for this phase.
    #[must_use]
    pub const fn is_loading(self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns the `transitioning` flag for this phase.
    #[must_use]
    pub const fn is_transitioning(self) -> bool {
        matches!(self, Self::Transitioning)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Loading => write!(f, "loading"),
            Self::Transitioning => write!(f, "transitioning"),
            Self::Revealed => write!(f, "revealed"),
        }
    }
}

/// Read-only snapshot of the sequence state handed to views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceFlags {
    /// Loading screen active.
    pub loading: bool,
    /// Transition overlay active.
    pub transitioning: bool,
    /// Scroll-to-top affordance visible.
    pub scroll_top_visible: bool,
}

impl SequenceFlags {
    /// Builds flags from a phase. Both intro flags come from the same phase,
    /// so `loading == transitioning == false` only ever means [`Phase::Revealed`].
    #[must_use]
    pub const fn from_phase(phase: Phase, scroll_top_visible: bool) -> Self {
        Self {
            loading: phase.is_loading(),
            transitioning: phase.is_transitioning(),
            scroll_top_visible,
        }
    }

    /// Content reveal gate.
    #[must_use]
    pub const fn is_revealed(self) -> bool {
        !self.loading && !self.transitioning
    }
}

impl Default for SequenceFlags {
    fn default() -> Self {
        Self::from_phase(Phase::default(), false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_per_phase() {
        let loading = SequenceFlags::from_phase(Phase::Loading, false);
        assert!(loading.loading && !loading.transitioning);
        assert!(!loading.is_revealed());

        let transitioning = SequenceFlags::from_phase(Phase::Transitioning, false);
        assert!(!transitioning.loading && transitioning.transitioning);
        assert!(!transitioning.is_revealed());

        let revealed = SequenceFlags::from_phase(Phase::Revealed, true);
        assert!(revealed.is_revealed());
        assert!(revealed.scroll_top_visible);
    }

    #[test]
    fn test_default_is_loading() {
        let flags = SequenceFlags::default();
        assert!(flags.loading);
        assert!(!flags.scroll_top_visible);
    }
}
