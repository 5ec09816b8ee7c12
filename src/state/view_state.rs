//! Content-view state management.
//!
//! Tracks which content panel the page is currently asked to show. The
//! requested key is what the presentation sequencer reconciles against each
//! frame; switching it is what drives exit/enter choreography.

use serde::{Deserialize, Serialize};

/// Keys of the content panels the page can present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ViewKey {
    /// The sponsor card grid with its caption.
    #[default]
    Sponsors,
    /// The club blurb with the join link.
    About,
}

impl ViewKey {
    /// Label shown on the footer navigation button.
    pub fn label(self) -> &'static str {
        match self {
            ViewKey::Sponsors => "Sponsors",
            ViewKey::About => "About",
        }
    }

    /// The other view, used by the footer toggle.
    pub fn toggled(self) -> Self {
        match self {
            ViewKey::Sponsors => ViewKey::About,
            ViewKey::About => ViewKey::Sponsors,
        }
    }
}

/// State related to content-view selection.
#[derive(Debug, Clone)]
pub struct ViewState {
    /// The content key the page should currently present.
    requested: ViewKey,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    /// Creates a new view state showing the sponsor grid.
    pub fn new() -> Self {
        Self {
            requested: ViewKey::Sponsors,
        }
    }

    /// Creates a view state restored from a persisted key.
    pub fn with_view(requested: ViewKey) -> Self {
        Self { requested }
    }

    // ===== Queries =====

    /// The currently requested content key.
    pub fn requested(&self) -> ViewKey {
        self.requested
    }

    // ===== Mutations =====

    /// Requests a different content panel.
    pub fn request(&mut self, key: ViewKey) {
        self.requested = key;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_between_views() {
        assert_eq!(ViewKey::Sponsors.toggled(), ViewKey::About);
        assert_eq!(ViewKey::About.toggled(), ViewKey::Sponsors);
    }

    #[test]
    fn request_updates_key() {
        let mut state = ViewState::new();
        assert_eq!(state.requested(), ViewKey::Sponsors);
        state.request(ViewKey::About);
        assert_eq!(state.requested(), ViewKey::About);
    }
}
