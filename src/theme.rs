//! Theme support for the clubdeck landing page.
//!
//! Provides the color palettes the page is drawn with ("Dusk" by default,
//! plus "Light" and "Midnight") and a centralized theme manager.
//!
//! # Examples
//!
//! ```
//! use clubdeck::theme::ThemeManager;
//!
//! let manager = ThemeManager::new();
//! let dusk = manager.get_theme("Dusk").unwrap();
//! println!("Dusk sky: {:?}", dusk.colors.sky_top);
//! ```

use egui::Color32;
use std::collections::HashMap;

/// Complete color palette for a theme, covering backdrop, cards, and chrome.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Backdrop gradient stops
    pub sky_top: Color32,
    pub sky_bottom: Color32,
    pub hill_near: Color32,
    pub hill_far: Color32,

    // Foreground colors
    pub hero_text: Color32,
    pub text: Color32,
    pub text_dim: Color32,

    // Card colors
    pub card_fill: Color32,
    pub card_border: Color32,
    pub card_hover: Color32,

    // Interactive/chrome colors
    pub selection: Color32,
    pub hover: Color32,
    pub border: Color32,
    pub link: Color32,
    pub footer_background: Color32,
}

/// A complete theme definition with metadata and color palette.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub description: String,
    pub colors: ThemeColors,
}

/// Centralized theme manager providing access to all available themes.
pub struct ThemeManager {
    themes: HashMap<String, Theme>,
}

impl ThemeManager {
    /// Creates a new ThemeManager initialized with all built-in themes.
    pub fn new() -> Self {
        let mut themes = HashMap::new();

        themes.insert("Dusk".to_string(), dusk_theme());
        themes.insert("Light".to_string(), light_theme());
        themes.insert("Midnight".to_string(), midnight_theme());

        Self { themes }
    }

    /// Retrieves a theme by name.
    pub fn get_theme(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// Returns a sorted list of all available theme names.
    pub fn list_themes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// Applies a theme's colors to egui visuals.
    pub fn apply_theme(&self, theme: &Theme, visuals: &mut egui::Visuals) {
        let colors = &theme.colors;

        // Panels are transparent over the painted backdrop; the footer frame
        // fills itself explicitly.
        visuals.panel_fill = Color32::TRANSPARENT;
        visuals.extreme_bg_color = colors.footer_background;
        visuals.faint_bg_color = colors.hover;

        visuals.override_text_color = Some(colors.text);

        visuals.selection.bg_fill = colors.selection;
        visuals.selection.stroke.color = colors.link;

        visuals.widgets.noninteractive.bg_fill = Color32::TRANSPARENT;
        visuals.widgets.noninteractive.bg_stroke.color = colors.border;
        visuals.widgets.inactive.bg_fill = colors.card_fill;
        visuals.widgets.hovered.bg_fill = colors.card_hover;
        visuals.widgets.active.bg_fill = colors.selection;

        visuals.hyperlink_color = colors.link;
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates the Dusk theme, the default: warm evening sky over dark hills.
fn dusk_theme() -> Theme {
    Theme {
        name: "Dusk".to_string(),
        description: "Evening sky gradient with warm accents".to_string(),
        colors: ThemeColors {
            sky_top: hex_to_color32("#2b2150"),
            sky_bottom: hex_to_color32("#b25f4a"),
            hill_near: hex_to_color32("#1b1433"),
            hill_far: hex_to_color32("#3a2b5c"),

            hero_text: hex_to_color32("#f6ede3"),
            text: hex_to_color32("#ece4da"),
            text_dim: hex_to_color32("#a99aa4"),

            card_fill: with_alpha(hex_to_color32("#1b1433"), 96),
            card_border: with_alpha(hex_to_color32("#a99aa4"), 80),
            card_hover: with_alpha(hex_to_color32("#3a2b5c"), 140),

            selection: hex_to_color32("#5a4080"),
            hover: with_alpha(hex_to_color32("#3a2b5c"), 120),
            border: hex_to_color32("#6a5a80"),
            link: hex_to_color32("#f2a65a"),
            footer_background: with_alpha(hex_to_color32("#140f26"), 200),
        },
    }
}

/// Creates the Light theme: daylight gradient, dark text.
fn light_theme() -> Theme {
    Theme {
        name: "Light".to_string(),
        description: "Daylight gradient with dark text".to_string(),
        colors: ThemeColors {
            sky_top: hex_to_color32("#aed4ef"),
            sky_bottom: hex_to_color32("#f5e6c8"),
            hill_near: hex_to_color32("#7ba36e"),
            hill_far: hex_to_color32("#a4c49a"),

            hero_text: hex_to_color32("#26211c"),
            text: hex_to_color32("#332c26"),
            text_dim: hex_to_color32("#6e655c"),

            card_fill: with_alpha(Color32::WHITE, 140),
            card_border: with_alpha(hex_to_color32("#6e655c"), 90),
            card_hover: with_alpha(Color32::WHITE, 200),

            selection: hex_to_color32("#b4c8ff"),
            hover: with_alpha(Color32::WHITE, 120),
            border: hex_to_color32("#a09888"),
            link: hex_to_color32("#2864c8"),
            footer_background: with_alpha(Color32::WHITE, 170),
        },
    }
}

/// Creates the Midnight theme: cold late-night palette.
fn midnight_theme() -> Theme {
    Theme {
        name: "Midnight".to_string(),
        description: "Cold late-night palette".to_string(),
        colors: ThemeColors {
            sky_top: hex_to_color32("#060a18"),
            sky_bottom: hex_to_color32("#16304a"),
            hill_near: hex_to_color32("#04060f"),
            hill_far: hex_to_color32("#0c1830"),

            hero_text: hex_to_color32("#dce8f5"),
            text: hex_to_color32("#c5d4e3"),
            text_dim: hex_to_color32("#6a7c90"),

            card_fill: with_alpha(hex_to_color32("#0c1830"), 110),
            card_border: with_alpha(hex_to_color32("#6a7c90"), 80),
            card_hover: with_alpha(hex_to_color32("#16304a"), 150),

            selection: hex_to_color32("#24507c"),
            hover: with_alpha(hex_to_color32("#16304a"), 120),
            border: hex_to_color32("#3c5268"),
            link: hex_to_color32("#64b4e6"),
            footer_background: with_alpha(hex_to_color32("#04060f"), 210),
        },
    }
}

/// Converts a hex color string (like "#282a36") to Color32.
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::from_rgb(0, 0, 0) // Fallback to black
    }
}

/// Sets the alpha channel of a color.
pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}
