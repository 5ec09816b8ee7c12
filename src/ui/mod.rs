//! UI panels for the clubdeck landing page.
//!
//! Each module renders one visual region; `panel_manager` orchestrates them
//! and routes user interactions back to the application coordinators.

pub mod background;
pub mod hero;
pub mod sponsor_panel;
pub mod about_panel;
pub mod footer;
pub mod panel_manager;
