//! Application-level modules for the clubdeck GUI.
//!
//! This module contains the view/theme/settings coordinators and centralized
//! state management.

mod app_state;
mod view_coordinator;
mod theme_coordinator;
mod settings_coordinator;

pub use app_state::AppState;
pub use view_coordinator::ViewCoordinator;
pub use theme_coordinator::ThemeCoordinator;
pub use settings_coordinator::SettingsCoordinator;
