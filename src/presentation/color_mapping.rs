//! Color lookup for the landing page.
//!
//! This module provides functions for:
//! - Resolving the current theme's color palette (with fallback)
//! - Assigning accent colors to outbound link kinds
//!
//! Color assignment is deterministic based on link kind.

use clubdeck::{LinkKind, ThemeColors, ThemeManager};
use egui::Color32;

/// Returns a reference to the current theme's color palette.
///
/// # Arguments
/// * `theme_manager` - The theme manager instance
/// * `current_theme_name` - The name of the currently active theme
///
/// # Returns
/// A reference to the theme's colors, or the Dusk colors as fallback
pub fn theme_colors<'a>(
    theme_manager: &'a ThemeManager,
    current_theme_name: &str,
) -> &'a ThemeColors {
    theme_manager
        .get_theme(current_theme_name)
        .map(|t| &t.colors)
        .unwrap_or_else(|| {
            // Fallback to the default palette
            &theme_manager.get_theme("Dusk").unwrap().colors
        })
}

/// Returns the accent color for an outbound link kind.
pub fn link_color(kind: LinkKind, colors: &ThemeColors) -> Color32 {
    match kind {
        LinkKind::Instagram => colors.link,
        LinkKind::GoogleMaps => colors.text_dim,
    }
}

/// Icon glyph shown on a link button.
pub fn link_icon(kind: LinkKind) -> &'static str {
    match kind {
        LinkKind::Instagram => "📷",
        LinkKind::GoogleMaps => "📍",
    }
}
