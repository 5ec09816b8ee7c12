//! State management modules for the clubdeck GUI.
//!
//! This module contains state-only logic (no UI concerns):
//! - View state (which content panel is requested)
//! - Theme state (theme manager, current theme)

mod view_state;
mod theme_state;

pub use view_state::{ViewKey, ViewState};
pub use theme_state::ThemeState;
