//! App module - contains the main application state and logic

mod assistant;
mod carousel;
mod images;
mod modals;
mod sections;
mod selection;

use crate::settings::Settings;
use crate::state::{AssistantReply, PortfolioState};
use crate::theme;
use crate::types::Theme;
use crate::utils::get_cache_dir;
use eframe::egui;
use images::FailedSet;
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) state: PortfolioState,
    pub(crate) settings: Settings,
    pub(crate) data_dir: PathBuf,
    pub(crate) cache_dir: PathBuf,
    pub(crate) runtime: tokio::runtime::Runtime,
    pub(crate) http: reqwest::Client,
    // Assistant answer handed back from the runtime
    pub(crate) pending_answer: Arc<Mutex<Option<AssistantReply>>>,
    // Remote image cache
    pub(crate) image_cache: HashMap<String, Option<egui::TextureHandle>>,
    pub(crate) image_loading: HashSet<String>,
    pub(crate) image_failed: FailedSet,
    pub(crate) prefetched: HashSet<Theme>,
    // Visuals currently installed on the context
    pub(crate) applied_theme: Option<Theme>,
    // Window geometry, saved on exit
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
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
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        let cache_dir = get_cache_dir();
        std::fs::create_dir_all(&cache_dir).ok();

        Ok(Self {
            state: PortfolioState::default(),
            settings,
            data_dir,
            cache_dir,
            runtime: tokio::runtime::Runtime::new()?,
            http: reqwest::Client::new(),
            pending_answer: Arc::new(Mutex::new(None)),
            image_cache: HashMap::new(),
            image_loading: HashSet::new(),
            image_failed: Arc::new(Mutex::new(HashSet::new())),
            prefetched: HashSet::new(),
            applied_theme: None,
            window_pos: None,
            window_size: None,
            needs_center: false,
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

    pub fn palette(&self) -> &'static theme::Palette {
        theme::palette(self.state.theme)
    }

    /// Install the visuals for the active persona when it changed
    pub fn sync_visuals(&mut self, ctx: &egui::Context) {
        if self.applied_theme != Some(self.state.theme) {
            theme::apply_visuals(ctx, self.state.theme);
            self.applied_theme = Some(self.state.theme);
        }
    }

    /// Start fetching gallery images and skill icons for the active persona
    pub fn prefetch_theme_images(&mut self, ctx: &egui::Context) {
        let theme = self.state.theme;
        if !self.prefetched.insert(theme) {
            return;
        }
        let mut urls: Vec<&'static str> = crate::content::skills_for(theme)
            .iter()
            .flat_map(|cat| cat.items.iter().map(|item| item.icon))
            .collect();
        urls.extend(
            crate::content::projects_for(theme)
                .iter()
                .flat_map(|p| p.images.iter().copied()),
        );
        self.prefetch_images(ctx, urls);
    }

    /// Open an external link (GitHub, LinkedIn, mailto)
    pub fn open_link(&self, target: &str) {
        if let Err(e) = open::that(target) {
            tracing::warn!(%target, error = %e, "Failed to open link");
        }
    }
}
