//! About panel rendering.
//!
//! The alternate content view: a short club blurb with a join link. Its rows
//! share the sponsor cards' entrance fade.

use crate::state::ViewKey;
use clubdeck::{motion, PresenceEntry, ThemeColors};
use egui::RichText;

/// Renders the about blurb for one presence entry.
pub fn render_about_panel(
    ui: &mut egui::Ui,
    colors: &ThemeColors,
    now: f64,
    entry: &PresenceEntry<ViewKey>,
) {
    let (opacity, y_offset) = motion::card_entrance(now, entry.mounted_at());

    ui.set_max_width(560.0);
    ui.vertical_centered(|ui| {
        ui.add_space(y_offset);
        ui.scope(|ui| {
            ui.multiply_opacity(opacity);
            ui.label(
                RichText::new("A student club for people who make things.")
                    .size(22.0)
                    .color(colors.text),
            );
            ui.add_space(10.0);
            ui.label(
                RichText::new("Follow Kro Guys taake aur khaapa mile")
                    .size(16.0)
                    .color(colors.text_dim),
            );
            ui.add_space(16.0);
            ui.hyperlink_to(
                RichText::new("Join us on Instagram").size(17.0),
                "https://www.instagram.com/nusthackclub",
            );
        });
    });
}
