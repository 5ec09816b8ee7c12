//! Application-level coordination of content switches and sequencing.
//!
//! Routes view-switch interactions into state and steps the presentation
//! sequencer once per frame, keeping the render tree consistent with the
//! requested content while transitions play out.

use crate::app::AppState;
use crate::state::ViewKey;

/// Coordinates content-view switches and per-frame sequencer updates.
pub struct ViewCoordinator;

impl ViewCoordinator {
    /// Handles a navigation request from the footer.
    pub fn request_view(state: &mut AppState, key: ViewKey) {
        if state.view.requested() == key {
            return;
        }
        log::info!("switching view to {:?}", key);
        state.view.request(key);
    }

    /// Steps the sequencer for this frame.
    ///
    /// Reconciles the live entry set against the requested view, then settles
    /// finished entrances and drops finished exits. Called once per frame
    /// before any panel renders.
    ///
    /// # Arguments
    /// * `now` - frame time in seconds from the egui input clock
    pub fn step_sequencer(state: &mut AppState, now: f64) {
        state.sequencer.sync(state.view.requested(), now);
        state.sequencer.advance(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clubdeck::Phase;

    #[test]
    fn first_frame_presents_requested_view_without_entrance() {
        let mut state = AppState::new(false);
        ViewCoordinator::step_sequencer(&mut state, 0.0);

        let entries = state.sequencer.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(*entries[0].key(), ViewKey::Sponsors);
        assert_eq!(entries[0].phase(), Phase::Visible);
    }

    #[test]
    fn navigation_retires_old_view_and_mounts_new_one() {
        let mut state = AppState::new(false);
        ViewCoordinator::step_sequencer(&mut state, 0.0);

        ViewCoordinator::request_view(&mut state, ViewKey::About);
        ViewCoordinator::step_sequencer(&mut state, 1.0);

        let entries = state.sequencer.entries();
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().any(|e| *e.key() == ViewKey::Sponsors && e.is_exiting()));
        assert!(entries
            .iter()
            .any(|e| *e.key() == ViewKey::About && e.phase() == Phase::Entering { since: 1.0 }));
    }

    #[test]
    fn redundant_navigation_is_ignored() {
        let mut state = AppState::new(false);
        ViewCoordinator::step_sequencer(&mut state, 0.0);
        ViewCoordinator::request_view(&mut state, ViewKey::Sponsors);
        ViewCoordinator::step_sequencer(&mut state, 0.5);

        assert_eq!(state.sequencer.entries().len(), 1);
        assert!(state.sequencer.is_first_render());
    }
}
