//! Hero title rendering.
//!
//! The title never exit-animates. When a content switch changes the layout,
//! its position is smoothed with egui's value animation (layout-position
//! interpolation) instead of replaying an entrance.

use crate::state::ViewKey;
use clubdeck::{ThemeColors, DURATION};
use egui::{Align2, Rect, RichText};

/// Renders the hero title anchored near the top of the viewport.
///
/// # Arguments
/// * `ctx` - The egui context
/// * `colors` - The current theme's color palette
/// * `requested` - The content view currently requested; determines the
///   title's resting position
/// * `viewport` - The full viewport rectangle
pub fn render_hero(ctx: &egui::Context, colors: &ThemeColors, requested: ViewKey, viewport: Rect) {
    // The sponsor grid is taller than the about blurb, so the title sits
    // higher while sponsors are shown.
    let target_offset = match requested {
        ViewKey::Sponsors => viewport.height() * 0.10,
        ViewKey::About => viewport.height() * 0.18,
    };
    let offset = ctx.animate_value_with_time(
        egui::Id::new("hero_position"),
        target_offset,
        DURATION as f32,
    );

    egui::Area::new(egui::Id::new("hero"))
        .anchor(Align2::CENTER_TOP, egui::vec2(0.0, offset))
        .order(egui::Order::Middle)
        .show(ctx, |ui| {
            ui.label(
                RichText::new("Nust Hackclub")
                    .size(64.0)
                    .italics()
                    .color(colors.hero_text),
            );
        });
}
