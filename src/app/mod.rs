//! App module - contains the main application state and logic

mod fetch;

pub use fetch::TOAST_KEY;

use crate::settings::Settings;
use crate::theme;
use crate::types::{DashboardState, DayPeriod};
use chrono::{DateTime, FixedOffset, Timelike};
use eframe::egui;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) dashboard: Arc<Mutex<DashboardState>>,
    pub(crate) runtime: tokio::runtime::Runtime,
    pub(crate) fetch_started: bool,
    // View
    pub(crate) show_details: bool,
    pub(crate) show_settings: bool,
    pub(crate) use_24h_clock: bool,
    pub(crate) quote_tags: String,
    // Scratch buffer for the settings window
    pub(crate) quote_tags_edit: String,
    // Theme
    pub(crate) active_period: DayPeriod,
    pub(crate) logo_texture: Option<egui::TextureHandle>,
    // Toast notification
    pub(crate) toast_message: Option<String>,
    pub(crate) toast_start: Option<std::time::Instant>,
    pub(crate) central_panel_rect: Option<egui::Rect>,
    // Window tracking
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings, data_dir: PathBuf) -> Self {
        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        // Until the world time payload lands, classify from the system
        // clock so the first frame is not mis-themed.
        let active_period = DayPeriod::from_hour(chrono::Local::now().hour());
        theme::apply_visuals(&cc.egui_ctx, theme::palette(active_period.is_daytime()));

        Self {
            dashboard: Arc::new(Mutex::new(DashboardState::default())),
            runtime: tokio::runtime::Runtime::new().unwrap(),
            fetch_started: false,
            show_details: settings.show_details,
            show_settings: false,
            use_24h_clock: settings.use_24h_clock,
            quote_tags_edit: settings.quote_tags.clone(),
            quote_tags: settings.quote_tags,
            active_period,
            logo_texture: None,
            toast_message: None,
            toast_start: None,
            central_panel_rect: None,
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir,
        }
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            show_details: self.show_details,
            use_24h_clock: self.use_24h_clock,
            quote_tags: self.quote_tags.clone(),
        };
        settings.save(&self.data_dir);
    }

    pub(crate) fn palette(&self) -> &'static theme::Palette {
        theme::palette(self.active_period.is_daytime())
    }

    /// Wall clock to display: the last world time payload advanced by the
    /// time elapsed since it arrived.
    pub(crate) fn displayed_time(&self) -> Option<DateTime<FixedOffset>> {
        let state = self.dashboard.lock().unwrap();
        let dt = state.time.data.as_ref()?.local_datetime()?;
        let elapsed = state
            .time_received
            .map(|at| at.elapsed())
            .unwrap_or_default();
        let elapsed = chrono::Duration::from_std(elapsed).unwrap_or_else(|_| chrono::Duration::zero());
        Some(dt + elapsed)
    }
}
