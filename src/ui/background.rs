//! Full-viewport backdrop rendering.
//!
//! Paints the landscape the page sits on: a vertical sky gradient with two
//! bands of rolling hills. Purely presentational; themed via the active
//! palette.

use clubdeck::ThemeColors;
use egui::{Color32, Pos2, Rect};
use std::sync::Arc;

/// Paints the backdrop into `rect`.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `rect` - The full viewport rectangle
/// * `colors` - The current theme's color palette
pub fn render_background(ui: &egui::Ui, rect: Rect, colors: &ThemeColors) {
    let painter = ui.painter();

    painter.add(gradient_shape(rect, colors.sky_top, colors.sky_bottom));

    // Far hill band: large circles peeking over the horizon line
    let horizon = rect.bottom() - rect.height() * 0.22;
    hill_band(ui, rect, horizon, rect.width() * 0.42, colors.hill_far, &[0.05, 0.45, 0.85]);

    // Near hill band: lower, darker, denser
    let near_line = rect.bottom() - rect.height() * 0.10;
    hill_band(ui, rect, near_line, rect.width() * 0.34, colors.hill_near, &[0.0, 0.3, 0.62, 0.95]);

    // Ground fill below the near band
    let ground = Rect::from_min_max(Pos2::new(rect.left(), near_line), rect.max);
    painter.rect_filled(ground, 0.0, colors.hill_near);
}

/// Builds the vertical sky gradient as a two-triangle mesh.
fn gradient_shape(rect: Rect, top: Color32, bottom: Color32) -> egui::Shape {
    let mut mesh = egui::Mesh::default();
    mesh.colored_vertex(rect.left_top(), top);
    mesh.colored_vertex(rect.right_top(), top);
    mesh.colored_vertex(rect.left_bottom(), bottom);
    mesh.colored_vertex(rect.right_bottom(), bottom);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(2, 1, 3);
    egui::Shape::mesh(Arc::new(mesh))
}

/// Draws one band of hills as overlapping circles along a baseline.
///
/// `positions` are horizontal centers as fractions of the rect width.
fn hill_band(
    ui: &egui::Ui,
    rect: Rect,
    baseline: f32,
    radius: f32,
    color: Color32,
    positions: &[f32],
) {
    let painter = ui.painter();
    for (i, frac) in positions.iter().enumerate() {
        // Alternate sizes so the skyline is not uniform
        let r = if i % 2 == 0 { radius } else { radius * 0.72 };
        let center = Pos2::new(rect.left() + rect.width() * frac, baseline + r * 0.55);
        painter.circle_filled(center, r, color);
    }
}
