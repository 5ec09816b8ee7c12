//! Footer panel UI rendering
//!
//! Handles the bottom bar with the club line, content navigation, and the
//! theme selector.

use crate::app::AppState;
use egui::RichText;

/// Result of user interaction with the footer panel
pub enum FooterInteraction {
    /// User clicked the navigation toggle
    ViewRequested(crate::state::ViewKey),
    /// User picked a theme from the selector
    ThemeSelected(String),
}

/// Renders the footer with navigation and theme controls
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
///
/// # Returns
/// * `Option<FooterInteraction>` - User interaction result
pub fn render_footer(ui: &mut egui::Ui, state: &AppState) -> Option<FooterInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        ui.label(RichText::new("Nust Hackclub®").strong());
        ui.separator();

        let other = state.view.requested().toggled();
        if ui.button(other.label()).clicked() {
            interaction = Some(FooterInteraction::ViewRequested(other));
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let current = state.theme.current_theme_name().to_string();
            egui::ComboBox::from_id_salt("theme_select")
                .selected_text(current.clone())
                .show_ui(ui, |ui| {
                    for name in state.theme.theme_manager().list_themes() {
                        if ui.selectable_label(name == current, name).clicked() {
                            interaction = Some(FooterInteraction::ThemeSelected(name.to_string()));
                        }
                    }
                });
            ui.label(RichText::new("Theme:").weak());
        });
    });

    interaction
}
