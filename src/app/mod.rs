//! App module - contains the main application state and logic

mod context_menu;
mod images;
mod publish;

pub(crate) use context_menu::EntryAction;
pub(crate) use images::ImageView;

use crate::board::{Board, PendingPublish};
use crate::error::FetchError;
use crate::fetch::CoffeeClient;
use crate::settings::Settings;
use crate::theme;
use crate::types::ImageLoad;
use eframe::egui;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;
use tracing::debug;

// ============================================================================
// APP STATE
// ============================================================================

/// A publish waiting for its fetch to come back
pub(crate) struct InFlight {
    pub pending: PendingPublish,
    pub rx: oneshot::Receiver<Result<String, FetchError>>,
}

pub struct App {
    pub(crate) board: Board,
    pub(crate) client: CoffeeClient,
    pub(crate) runtime: tokio::runtime::Runtime,
    pub(crate) in_flight: Option<InFlight>,
    // Picture downloads (shared with background tasks) and decoded textures
    pub(crate) images: Arc<Mutex<HashMap<String, ImageLoad>>>,
    pub(crate) textures: HashMap<String, Option<egui::TextureHandle>>,
    pub(crate) focus_input: bool,
    // Toast notification
    pub(crate) toast_message: Option<String>,
    pub(crate) toast_start: Option<std::time::Instant>,
    // Window
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) settings: Settings,
    pub(crate) data_dir: PathBuf,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: Settings,
        data_dir: PathBuf,
    ) -> std::io::Result<Self> {
        // Light or dark, whatever the OS says
        cc.egui_ctx.set_theme(egui::ThemePreference::System);

        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        Self::with_settings(settings, data_dir)
    }

    /// Build the state without touching any egui context
    pub(crate) fn with_settings(settings: Settings, data_dir: PathBuf) -> std::io::Result<Self> {
        let runtime = tokio::runtime::Runtime::new()?;
        let client = CoffeeClient::new(settings.endpoint_or_default());
        debug!(endpoint = client.endpoint(), "Coffee client ready");

        Ok(Self {
            board: Board::new(),
            client,
            runtime,
            in_flight: None,
            images: Arc::new(Mutex::new(HashMap::new())),
            textures: HashMap::new(),
            focus_input: true,
            toast_message: None,
            toast_start: None,
            window_pos: None,
            window_size: None,
            needs_center: false,
            settings,
            data_dir,
        })
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            ..self.settings.clone()
        };
        settings.save(&self.data_dir);
    }

    pub(crate) fn show_toast(&mut self, msg: impl Into<String>) {
        self.toast_message = Some(msg.into());
        self.toast_start = Some(std::time::Instant::now());
    }
}
