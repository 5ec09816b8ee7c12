//! Panel orchestration and layout management.
//!
//! Coordinates the backdrop, hero title, sequenced content areas, and footer,
//! and routes user interactions back to the application coordinators. Each
//! live presence entry gets its own content area; the entry's sampled
//! transform is applied to that area's layer, which is how an exiting panel
//! keeps rendering (displaced and scaled down) until the sequencer drops it.

use crate::app::AppState;
use crate::presentation::color_mapping;
use crate::state::ViewKey;
use crate::ui::{about_panel, background, footer, hero, sponsor_panel};
use clubdeck::{Phase, PresenceEntry, ThemeColors};
use egui::emath::TSTransform;

/// Result of panel interactions that need to be handled by the application coordinator.
pub enum PanelInteraction {
    /// User requested a different content view
    ViewRequested(ViewKey),
    /// User picked a theme
    ThemeSelected(String),
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// This is the main entry point for rendering the entire UI, called from
    /// the eframe::App::update() implementation.
    pub fn render_all_panels(ctx: &egui::Context, state: &AppState) -> Option<PanelInteraction> {
        let now = ctx.input(|i| i.time);
        let mut interaction: Option<PanelInteraction> = None;

        // Get theme colors for rendering
        let colors = color_mapping::theme_colors(
            state.theme.theme_manager(),
            state.theme.current_theme_name(),
        )
        .clone();

        // Footer panel at the bottom
        let footer_frame = egui::Frame::NONE
            .fill(colors.footer_background)
            .inner_margin(10.0);
        egui::TopBottomPanel::bottom("footer")
            .frame(footer_frame)
            .show(ctx, |ui| {
                if let Some(footer_interaction) = footer::render_footer(ui, state) {
                    interaction = Some(match footer_interaction {
                        footer::FooterInteraction::ViewRequested(key) => {
                            PanelInteraction::ViewRequested(key)
                        }
                        footer::FooterInteraction::ThemeSelected(name) => {
                            PanelInteraction::ThemeSelected(name)
                        }
                    });
                }
            });

        // Backdrop and hero fill the remaining viewport
        let mut viewport = egui::Rect::NOTHING;
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                viewport = ui.max_rect();
                background::render_background(ui, viewport, &colors);
            });
        hero::render_hero(ctx, &colors, state.view.requested(), viewport);

        // One content area per live presence entry, exiting entries included
        for entry in state.sequencer.entries() {
            Self::render_content_entry(ctx, &colors, now, entry);
        }

        interaction
    }

    /// Renders one presence entry in its own transformed area.
    fn render_content_entry(
        ctx: &egui::Context,
        colors: &ThemeColors,
        now: f64,
        entry: &PresenceEntry<ViewKey>,
    ) {
        let response = egui::Area::new(Self::entry_area_id(entry))
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 30.0))
            .order(egui::Order::Middle)
            .show(ctx, |ui| match entry.key() {
                ViewKey::Sponsors => sponsor_panel::render_sponsor_panel(ui, colors, now, entry),
                ViewKey::About => about_panel::render_about_panel(ui, colors, now, entry),
            });

        // Scale around the area's center, then displace vertically
        let transform = entry.transform_at(now);
        if transform.scale != 1.0 || transform.y_offset != 0.0 {
            let center = response.response.rect.center().to_vec2();
            let layer_transform =
                TSTransform::from_translation(center + egui::vec2(0.0, transform.y_offset))
                    * TSTransform::from_scaling(transform.scale)
                    * TSTransform::from_translation(-center);
            ctx.set_transform_layer(response.response.layer_id, layer_transform);
        }
    }

    /// Stable area id for an entry.
    ///
    /// A key can be live and exiting at the same time (rapid switch back), so
    /// exiting areas are additionally keyed by their retirement timestamp.
    fn entry_area_id(entry: &PresenceEntry<ViewKey>) -> egui::Id {
        match entry.phase() {
            Phase::Exiting { since, .. } => {
                egui::Id::new(("content", entry.key().label(), since.to_bits()))
            }
            _ => egui::Id::new(("content", entry.key().label())),
        }
    }
}
