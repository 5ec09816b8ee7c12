//! Clubdeck landing page GUI application
//!
//! This binary renders the club's single-page landing screen using the egui
//! framework: a full-viewport backdrop, the animated hero title, the sponsor
//! card grid with outbound links, and a footer with navigation and theming.
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state management and coordination
//! - `presentation/` - Color lookup and link-kind styling
//! - `state/` - View and theme state components
//! - `ui/` - Panel rendering and interaction handling
//! - `utils/` - Formatting helpers
//!
//! The enter/exit choreography itself lives in the `clubdeck` library
//! (`motion` and `presence`), where it is testable without a UI runtime.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;

mod app;
mod presentation;
mod state;
mod ui;
mod utils;

use app::{AppState, SettingsCoordinator, ThemeCoordinator, ViewCoordinator};
use state::ViewKey;
use ui::panel_manager::PanelManager;

const LAST_VIEW_KEY: &str = "last_view";

/// Resolves the embedded-preview signal from the process environment.
///
/// True when `--preview` is passed or the embed host string carries a
/// preview marker; absent or unreadable values mean standalone.
fn detect_preview_mode() -> bool {
    if std::env::args().any(|arg| arg == "--preview") {
        return true;
    }
    std::env::var("CLUBDECK_EMBED_HOST")
        .map(|host| host.contains("preview"))
        .unwrap_or(false)
}

/// Main application entry point that initializes and launches the landing page GUI.
fn main() -> anyhow::Result<()> {
    env_logger::init();

    // The preview flag is read exactly once here and handed to the app
    // constructor; nothing else may consult the environment for it.
    let preview_mode = detect_preview_mode();
    log::info!(
        "starting clubdeck ({} mode)",
        if preview_mode { "embedded-preview" } else { "standalone" }
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_title("Nust Hackclub"),
        ..Default::default()
    };

    eframe::run_native(
        "Nust Hackclub",
        options,
        Box::new(move |cc| Ok(Box::new(ClubdeckApp::new(cc, preview_mode)))),
    )
    .map_err(|err| anyhow::anyhow!("failed to launch UI: {err}"))
}

/// The landing page application.
///
/// Delegates most functionality to coordinators:
/// - `ViewCoordinator` handles content switches and per-frame sequencing
/// - `ThemeCoordinator` handles theme persistence and application
/// - `PanelManager` handles panel layout and rendering
struct ClubdeckApp {
    /// Centralized application state
    state: AppState,
}

impl ClubdeckApp {
    /// Creates a new instance with preferences loaded from persistent storage.
    ///
    /// # Arguments
    /// * `cc` - The eframe creation context
    /// * `preview_mode` - true when running inside an embedded preview host
    fn new(cc: &eframe::CreationContext, preview_mode: bool) -> Self {
        let theme_name = ThemeCoordinator::load_theme_from_storage(cc.storage);
        let last_view: ViewKey = SettingsCoordinator::load_setting(cc.storage, LAST_VIEW_KEY);

        Self {
            state: AppState::with_preferences(preview_mode, theme_name, last_view),
        }
    }

    /// Handles panel interactions by delegating to the coordinators.
    fn handle_panel_interaction(&mut self, interaction: ui::panel_manager::PanelInteraction) {
        match interaction {
            ui::panel_manager::PanelInteraction::ViewRequested(key) => {
                ViewCoordinator::request_view(&mut self.state, key);
            }
            ui::panel_manager::PanelInteraction::ThemeSelected(name) => {
                log::info!("switching theme to {name}");
                self.state.theme.set_theme(name);
            }
        }
    }
}

impl eframe::App for ClubdeckApp {
    /// Called when the app is being shut down - ensures preferences are saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        ThemeCoordinator::save_theme_to_storage(storage, self.state.theme.current_theme_name());
        SettingsCoordinator::save_setting(storage, LAST_VIEW_KEY, &self.state.view.requested());
    }

    /// Main update loop that renders all UI panels and advances sequencing.
    ///
    /// 1. Apply current theme
    /// 2. Step the presentation sequencer for this frame
    /// 3. Render all panels via PanelManager
    /// 4. Handle panel interactions
    /// 5. Keep repainting while transitions are in flight
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);

        ThemeCoordinator::apply_current_theme(ctx, &self.state);

        ViewCoordinator::step_sequencer(&mut self.state, now);

        if let Some(interaction) = PanelManager::render_all_panels(ctx, &self.state) {
            self.handle_panel_interaction(interaction);
        }

        if self.state.sequencer.is_animating(now) {
            ctx.request_repaint();
        }
    }
}
