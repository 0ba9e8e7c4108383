//! Clickable regions registered while rendering.

use ratatui::layout::{Position, Rect};

use crate::domain::{ContactField, Section};

/// What happens when a hotspot is clicked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HotspotAction {
    /// Open a URL with the platform opener.
    Open(String),
    /// Smooth scroll to a section.
    Jump(Section),
    /// Smooth scroll back to the top.
    ScrollTop,
    /// Start editing a contact form field.
    FocusField(ContactField),
    /// Submit the contact form.
    Submit,
    /// Copy the contact e-mail to the clipboard.
    CopyEmail,
}

/// A clickable region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hotspot {
    /// Region in the coordinate space it was registered in.
    pub area: Rect,
    /// Click action.
    pub action: HotspotAction,
}

impl Hotspot {
    /// Creates a hotspot.
    #[must_use]
    pub const fn new(area: Rect, action: HotspotAction) -> Self {
        Self { area, action }
    }
}

/// Hotspots of the last rendered frame, in screen coordinates.
#[derive(Debug, Clone, Default)]
pub struct HotspotMap {
    spots: Vec<Hotspot>,
}

impl HotspotMap {
    /// Drops every hotspot.
    pub fn clear(&mut self) {
        self.spots.clear();
    }

    /// Registers a hotspot. Later registrations win on overlap.
    pub fn push(&mut self, area: Rect, action: HotspotAction) {
        if area.is_empty() {
            return;
        }
        self.spots.push(Hotspot::new(area, action));
    }

    /// Returns the topmost hotspot under a cell.
    #[must_use]
    pub fn hit(&self, x: u16, y: u16) -> Option<&Hotspot> {
        let position = Position::new(x, y);
        self.spots
            .iter()
            .rev()
            .find(|spot| spot.area.contains(position))
    }

    /// Returns the number of hotspots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.spots.len()
    }

    /// Returns whether no hotspot is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_prefers_latest() {
        let mut map = HotspotMap::default();
        map.push(Rect::new(0, 0, 10, 2), HotspotAction::Jump(Section::Home));
        map.push(Rect::new(4, 1, 3, 1), HotspotAction::ScrollTop);

        assert_eq!(
            map.hit(5, 1).map(|s| &s.action),
            Some(&HotspotAction::ScrollTop)
        );
        assert_eq!(
            map.hit(1, 0).map(|s| &s.action),
            Some(&HotspotAction::Jump(Section::Home))
        );
        assert!(map.hit(10, 0).is_none());
    }

    #[test]
    fn test_empty_areas_are_ignored() {
        let mut map = HotspotMap::default();
        map.push(Rect::new(3, 3, 0, 1), HotspotAction::Submit);
        assert!(map.is_empty());
    }
}
