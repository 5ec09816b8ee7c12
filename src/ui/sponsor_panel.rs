//! Sponsor card grid and caption rendering.
//!
//! Renders the partner-sponsor cards with their outbound link buttons, and
//! the caption line below them. Each card fades and rises in on entrance;
//! the caption additionally skips its fade on the very first render,
//! mirroring the panel-level rule.

use crate::presentation::color_mapping;
use crate::state::ViewKey;
use crate::utils::link_host;
use clubdeck::{motion, Phase, PresenceEntry, Sponsor, ThemeColors, SPONSORS};
use egui::{RichText, Stroke};

const CARD_WIDTH: f32 = 180.0;
const GRID_MAX_WIDTH: f32 = 760.0;

/// Renders the sponsor grid and caption for one presence entry.
///
/// # Arguments
/// * `ui` - The UI of the entry's content area
/// * `colors` - The current theme's color palette
/// * `now` - Frame time in seconds
/// * `entry` - The presence entry being rendered
pub fn render_sponsor_panel(
    ui: &mut egui::Ui,
    colors: &ThemeColors,
    now: f64,
    entry: &PresenceEntry<ViewKey>,
) {
    ui.set_max_width(GRID_MAX_WIDTH);
    ui.vertical_centered(|ui| {
        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing = egui::vec2(16.0, 16.0);
            for sponsor in SPONSORS.iter() {
                render_card(ui, colors, now, entry.mounted_at(), sponsor);
            }
        });

        ui.add_space(18.0);
        render_caption(ui, colors, now, entry);
    });
}

/// Renders one sponsor card with its entrance animation.
///
/// Cards are not gated by the first-render rule; they always fade and rise
/// in from their panel's mount time.
fn render_card(
    ui: &mut egui::Ui,
    colors: &ThemeColors,
    now: f64,
    mounted_at: f64,
    sponsor: &Sponsor,
) {
    let (opacity, y_offset) = motion::card_entrance(now, mounted_at);

    ui.vertical(|ui| {
        ui.add_space(y_offset);
        ui.scope(|ui| {
            ui.multiply_opacity(opacity);
            egui::Frame::NONE
                .fill(colors.card_fill)
                .stroke(Stroke::new(1.0, colors.card_border))
                .corner_radius(12.0)
                .inner_margin(14.0)
                .show(ui, |ui| {
                    ui.set_width(CARD_WIDTH);
                    ui.vertical_centered(|ui| {
                        ui.label(RichText::new(sponsor.name).strong().size(17.0));
                        ui.add_space(8.0);
                        ui.horizontal(|ui| {
                            // Center the row of link buttons within the card
                            let button_w = 32.0;
                            let row_w = sponsor.links.len() as f32 * (button_w + 6.0) - 6.0;
                            let pad = ((CARD_WIDTH - row_w) * 0.5).max(0.0);
                            ui.add_space(pad);
                            for link in sponsor.links {
                                let icon = color_mapping::link_icon(link.kind);
                                let accent = color_mapping::link_color(link.kind, colors);
                                let button = egui::Button::new(
                                    RichText::new(icon).size(18.0).color(accent),
                                )
                                .min_size(egui::vec2(button_w, button_w))
                                .corner_radius(8.0);
                                let response = ui.add(button).on_hover_text(format!(
                                    "{} {} — {}",
                                    sponsor.name,
                                    link.kind.label(),
                                    link_host(link.url)
                                ));
                                if response.clicked() {
                                    log::debug!("opening {}", link.url);
                                    ui.ctx().open_url(egui::OpenUrl::new_tab(link.url));
                                }
                            }
                        });
                    });
                });
        });
    });
}

/// Renders the caption line with its phase-dependent opacity.
fn render_caption(
    ui: &mut egui::Ui,
    colors: &ThemeColors,
    now: f64,
    entry: &PresenceEntry<ViewKey>,
) {
    let opacity = match entry.phase() {
        Phase::Exiting { since, .. } => motion::caption_exit_opacity(now, since),
        _ => motion::caption_opacity(now, entry.mounted_at(), entry.instant()),
    };

    ui.scope(|ui| {
        ui.multiply_opacity(opacity);
        ui.label(
            RichText::new("Explore our partner sponsors and connect with them!")
                .size(18.0)
                .color(colors.text),
        );
    });
}
