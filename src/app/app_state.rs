//! Centralized application state for the clubdeck GUI.
//!
//! This module implements the State pattern by composing focused state
//! components that each manage a specific aspect of the application's state:
//! - Keeps invariants local within each component
//! - Allows borrow-checker friendly access to different state aspects
//! - Provides intent-revealing methods for state mutations

use crate::state::{ThemeState, ViewKey, ViewState};
use clubdeck::Presence;

/// Main application state composed of focused state components.
pub struct AppState {
    // ===== Focused State Components =====
    /// Content-view selection state
    pub view: ViewState,

    /// Theme and styling state
    pub theme: ThemeState,

    // ===== Top-Level State =====
    /// The presentation sequencer driving panel enter/exit choreography.
    ///
    /// Owns the first-render latch; its preview flag is fixed at startup.
    pub sequencer: Presence<ViewKey>,
}

impl AppState {
    /// Creates a new application state with default values.
    ///
    /// # Arguments
    /// * `preview_mode` - true when running inside an embedded preview host;
    ///   resolved once in `main` and passed down explicitly
    pub fn new(preview_mode: bool) -> Self {
        Self {
            view: ViewState::new(),
            theme: ThemeState::new(),
            sequencer: Presence::new(preview_mode),
        }
    }

    /// Creates a new AppState with preferences restored from storage.
    pub fn with_preferences(preview_mode: bool, theme_name: String, view: ViewKey) -> Self {
        let mut state = Self::new(preview_mode);
        state.view = ViewState::with_view(view);
        state.theme = ThemeState::with_theme(theme_name);
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restored_preferences_override_defaults() {
        let state = AppState::with_preferences(true, "Midnight".to_string(), ViewKey::About);
        assert_eq!(state.view.requested(), ViewKey::About);
        assert_eq!(state.theme.current_theme_name(), "Midnight");
        // Defaults from `new` still apply to everything not restored
        assert!(state.sequencer.is_first_render());
        assert!(state.sequencer.entries().is_empty());
    }
}
