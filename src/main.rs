#![windows_subsystem = "windows"]
//! Daybreak - Main entry point

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod app;
mod constants;
mod settings;
mod theme;
mod types;
mod ui;
mod utils;

use app::App;
use chrono::Timelike;
use constants::*;
use eframe::egui;
use tracing::info;
use types::DayPeriod;
use ui::components::{format_clock, utc_offset_label, weekday_name};

/// Initialize file logging. Returns a guard that must be held for the app lifetime.
fn init_logging(data_dir: &std::path::Path) -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let logs_dir = data_dir.join("logs");
    std::fs::create_dir_all(&logs_dir).ok();

    let file_appender = tracing_appender::rolling::daily(&logs_dir, "daybreak.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,daybreak=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    guard
}

fn main() -> eframe::Result<()> {
    let data_dir = utils::data_dir();
    std::fs::create_dir_all(&data_dir).ok();

    // Initialize logging - guard must live for entire app lifetime
    let _log_guard = init_logging(&data_dir);

    info!(version = APP_VERSION, "Daybreak starting");

    // Load saved window position/size
    let settings = settings::Settings::load(&data_dir);
    let win_pos = match (settings.window_x, settings.window_y) {
        (Some(x), Some(y)) => Some(egui::pos2(x, y)),
        _ => None,
    };
    let win_size = match (settings.window_w, settings.window_h) {
        (Some(w), Some(h)) => Some(egui::vec2(w, h)),
        _ => None,
    };

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(win_size.unwrap_or(egui::vec2(theme::WINDOW_DEFAULT.0, theme::WINDOW_DEFAULT.1)))
        .with_min_inner_size([theme::WINDOW_MIN.0, theme::WINDOW_MIN.1])
        .with_title("Daybreak");

    // Window/taskbar icon rasterized from the embedded SVG
    {
        let (rgba, width, height) = utils::rasterize_logo_square(256);
        let icon = egui::IconData { rgba, width, height };
        viewport = viewport.with_icon(std::sync::Arc::new(icon));
    }

    let needs_center = win_pos.is_none();

    if let Some(pos) = win_pos {
        viewport = viewport.with_position(pos);
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Daybreak",
        options,
        Box::new(move |cc| {
            let mut app = App::new(cc, settings, data_dir);
            app.needs_center = needs_center;
            Ok(Box::new(app))
        }),
    )
}

// ============================================================================
// MAIN UPDATE LOOP & UI RENDERING
// ============================================================================

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Track window position/size for saving on exit
        ctx.input(|i| {
            if let Some(rect) = i.viewport().outer_rect {
                self.window_pos = Some(rect.min);
            }
            if let Some(rect) = i.viewport().inner_rect {
                self.window_size = Some(rect.size());
            }
        });

        // Start the endpoint fetches on first frame
        if !self.fetch_started {
            self.fetch_started = true;
            self.start_initial_fetch(ctx);
        }

        // Center window on first launch
        if self.needs_center {
            self.needs_center = false;
            if let Some(cmd) = egui::ViewportCommand::center_on_screen(ctx) {
                ctx.send_viewport_cmd(cmd);
            }
        }

        // Re-theme when the clock crosses the day/night boundary
        if let Some(dt) = self.displayed_time() {
            let period = DayPeriod::from_hour(dt.hour());
            if period != self.active_period {
                info!(?period, "Day period changed, switching palette");
                self.active_period = period;
                theme::apply_visuals(ctx, self.palette());
            }
        }

        // Check for fetch failures reported by background tasks
        if let Some(msg) = ctx.memory(|mem| mem.data.get_temp::<String>(app::TOAST_KEY.into())) {
            ctx.memory_mut(|mem| mem.data.remove::<String>(app::TOAST_KEY.into()));
            self.toast_message = Some(msg);
            self.toast_start = Some(std::time::Instant::now());
        }

        let p = self.palette();

        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(p.bg_base)
                    .inner_margin(egui::Margin::same(16)),
            )
            .show(ctx, |ui| {
                // Store panel rect for toast positioning
                self.central_panel_rect = Some(ui.max_rect());

                self.render_header(ui, ctx);
                ui.add_space(theme::SPACING_XL);
                self.render_clock(ui);
                ui.add_space(theme::SPACING_MD);
                self.render_location(ui);
                ui.add_space(theme::SPACING_XL);
                self.render_quote_card(ui, ctx);
                ui.add_space(theme::SPACING_LG);
                self.render_details(ui);
            });

        self.render_settings_window(ctx);
        self.render_toast(ctx);

        // Tick the clock while time data is on screen
        if self.displayed_time().is_some() {
            ctx.request_repaint_after(std::time::Duration::from_secs(1));
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Application shutting down");
        self.save_settings();
    }
}

// ============================================================================
// PANEL RENDERING
// ============================================================================

impl App {
    fn render_header(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let p = self.palette();
        ui.horizontal(|ui| {
            let texture = self.logo_texture.get_or_insert_with(|| {
                let (pixels, w, h) = utils::rasterize_logo(96);
                ctx.load_texture(
                    "logo",
                    egui::ColorImage::from_rgba_unmultiplied([w as usize, h as usize], &pixels),
                    egui::TextureOptions::LINEAR,
                )
            });
            ui.image(egui::load::SizedTexture::new(
                texture.id(),
                egui::vec2(22.0, 22.0),
            ));
            ui.add(
                egui::Label::new(
                    egui::RichText::new("DAYBREAK")
                        .size(theme::FONT_SECTION)
                        .color(p.text_dim),
                )
                .selectable(false),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .add(egui::Button::new(egui_phosphor::regular::GEAR).frame(false))
                    .on_hover_text("Settings")
                    .clicked()
                {
                    self.show_settings = !self.show_settings;
                }
            });
        });
    }

    fn render_clock(&mut self, ui: &mut egui::Ui) {
        let p = self.palette();
        let displayed = self.displayed_time();
        let time_payload = {
            let state = self.dashboard.lock().unwrap();
            state.time.data.clone()
        };

        ui.vertical_centered(|ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new(self.active_period.greeting())
                        .size(theme::FONT_GREETING)
                        .color(p.text_secondary),
                )
                .selectable(false),
            );

            let clock_text = displayed
                .map(|dt| format_clock(&dt, self.use_24h_clock))
                .unwrap_or_else(|| "--:--".to_string());
            ui.add(
                egui::Label::new(
                    egui::RichText::new(clock_text)
                        .size(theme::FONT_CLOCK)
                        .strong()
                        .color(p.text_primary),
                )
                .selectable(false),
            );

            if let Some(time) = time_payload {
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(time.abbreviation)
                            .size(theme::FONT_LABEL)
                            .color(p.text_muted),
                    )
                    .selectable(false),
                );
            }
        });
    }

    fn render_location(&mut self, ui: &mut egui::Ui) {
        let p = self.palette();
        let (location, loading) = {
            let state = self.dashboard.lock().unwrap();
            (state.location.data.clone(), state.location.is_loading())
        };

        let text = match &location {
            Some(loc) => format!("{}, {}", loc.city, loc.country_code),
            None if loading => "Locating...".to_string(),
            None => "Location unavailable".to_string(),
        };
        let color = if location.is_some() {
            p.text_secondary
        } else {
            p.text_dim
        };

        ui.vertical_centered(|ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new(format!(
                        "{}  {}",
                        egui_phosphor::regular::MAP_PIN,
                        text
                    ))
                    .size(theme::FONT_BODY)
                    .color(color),
                )
                .selectable(false),
            );
        });
    }

    fn render_quote_card(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let p = self.palette();
        let (quote, loading) = {
            let state = self.dashboard.lock().unwrap();
            (state.quote.data.clone(), state.quote.is_loading())
        };

        theme::card_frame(p).show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(egui_phosphor::regular::QUOTES)
                            .size(18.0)
                            .color(p.accent),
                    )
                    .selectable(false),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if loading {
                        ui.add(egui::Spinner::new().size(14.0));
                    } else if ui
                        .add(egui::Button::new(egui_phosphor::regular::ARROWS_CLOCKWISE).frame(false))
                        .on_hover_text("New quote")
                        .clicked()
                    {
                        self.refresh_quote(ctx);
                    }
                });
            });

            match &quote {
                Some(quote) => {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(&quote.content)
                                .size(theme::FONT_QUOTE)
                                .italics()
                                .color(p.text_primary),
                        )
                        .wrap(),
                    );
                    ui.add_space(theme::SPACING_SM);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(format!("— {}", quote.author))
                                    .size(theme::FONT_LABEL)
                                    .color(p.text_muted),
                            )
                            .selectable(false),
                        );
                    });
                }
                None => {
                    let placeholder = if loading { "Fetching a quote..." } else { "No quote yet" };
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(placeholder)
                                .size(theme::FONT_QUOTE)
                                .color(p.text_dim),
                        )
                        .selectable(false),
                    );
                }
            }
        });
    }

    fn render_details(&mut self, ui: &mut egui::Ui) {
        let p = self.palette();

        ui.vertical_centered(|ui| {
            let (icon, label) = if self.show_details {
                (egui_phosphor::regular::CARET_UP, "less")
            } else {
                (egui_phosphor::regular::CARET_DOWN, "more")
            };
            if ui
                .add(
                    egui::Button::new(
                        egui::RichText::new(format!("{} {}", icon, label))
                            .size(theme::FONT_LABEL)
                            .color(p.text_muted),
                    )
                    .frame(false),
                )
                .clicked()
            {
                self.show_details = !self.show_details;
            }
        });

        if !self.show_details {
            return;
        }

        let (time, location) = {
            let state = self.dashboard.lock().unwrap();
            (state.time.data.clone(), state.location.data.clone())
        };

        let mut rows: Vec<(&str, String)> = Vec::new();
        match &time {
            Some(t) => {
                rows.push(("Timezone", t.timezone.clone()));
                rows.push(("UTC offset", utc_offset_label(&t.utc_offset)));
                rows.push(("Day of week", weekday_name(t.day_of_week).to_string()));
                rows.push(("Day of year", t.day_of_year.to_string()));
                rows.push(("Week number", t.week_number.to_string()));
            }
            None => rows.push(("Timezone", "—".to_string())),
        }
        match &location {
            Some(loc) if !loc.region_name.is_empty() => {
                rows.push(("Region", loc.region_name.clone()));
                rows.push(("Country", loc.country_name.clone()));
            }
            Some(loc) => rows.push(("Country", loc.country_name.clone())),
            None => {}
        }

        ui.add_space(theme::SPACING_SM);
        theme::card_frame(p).show(ui, |ui| {
            use egui_extras::{Column, TableBuilder};

            TableBuilder::new(ui)
                .column(Column::exact(110.0))
                .column(Column::remainder())
                .body(|mut body| {
                    for (label, value) in &rows {
                        body.row(theme::DETAILS_ROW_HEIGHT, |mut row| {
                            row.col(|ui| {
                                ui.add(
                                    egui::Label::new(
                                        egui::RichText::new(*label)
                                            .size(theme::FONT_LABEL)
                                            .color(p.text_dim),
                                    )
                                    .selectable(false),
                                );
                            });
                            row.col(|ui| {
                                ui.add(
                                    egui::Label::new(
                                        egui::RichText::new(value)
                                            .size(theme::FONT_BODY)
                                            .color(p.text_secondary),
                                    )
                                    .selectable(false),
                                );
                            });
                        });
                    }
                });
        });
    }

    // ========================================================================
    // SETTINGS WINDOW
    // ========================================================================

    fn render_settings_window(&mut self, ctx: &egui::Context) {
        if !self.show_settings {
            return;
        }
        let p = self.palette();
        let mut open = true;
        let mut close_requested = false;

        egui::Window::new("Settings")
            .open(&mut open)
            .resizable(false)
            .collapsible(false)
            .show(ctx, |ui| {
                ui.checkbox(&mut self.use_24h_clock, "24-hour clock");
                ui.add_space(theme::SPACING_MD);

                ui.add(
                    egui::Label::new(
                        egui::RichText::new("QUOTE TAGS")
                            .size(theme::FONT_SECTION)
                            .color(p.text_dim),
                    )
                    .selectable(false),
                );
                ui.add(
                    egui::TextEdit::singleline(&mut self.quote_tags_edit)
                        .hint_text("pipe-separated, e.g. technology|wisdom")
                        .desired_width(240.0),
                );

                ui.add_space(theme::SPACING_MD);
                ui.horizontal(|ui| {
                    if ui.add(theme::button_accent(p, "Apply")).clicked() {
                        let tags = self.quote_tags_edit.trim();
                        self.quote_tags = if tags.is_empty() {
                            DEFAULT_QUOTE_TAGS.to_string()
                        } else {
                            tags.to_string()
                        };
                        self.quote_tags_edit = self.quote_tags.clone();
                        self.save_settings();
                        self.refresh_quote(ctx);
                        close_requested = true;
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(format!("v{}", APP_VERSION))
                                    .size(theme::FONT_SECTION)
                                    .color(p.text_dim),
                            )
                            .selectable(false),
                        );
                    });
                });
            });

        if !open || close_requested {
            self.show_settings = false;
        }
    }

    // ========================================================================
    // TOAST
    // ========================================================================

    /// Render toast notification (bottom-right of central panel, 3s visible
    /// then fade, pause on hover)
    fn render_toast(&mut self, ctx: &egui::Context) {
        let p = self.palette();
        if let (Some(msg), Some(panel_rect)) = (&self.toast_message.clone(), self.central_panel_rect)
        {
            let visible_duration = 3.0;
            let fade_duration = 0.5;
            let total_duration = visible_duration + fade_duration;
            let margin = 12.0;

            let toast_pos = egui::pos2(panel_rect.right() - margin, panel_rect.bottom() - margin);

            let response = egui::Area::new(egui::Id::new("fetch_toast_area"))
                .fixed_pos(toast_pos)
                .pivot(egui::Align2::RIGHT_BOTTOM)
                .show(ctx, |ui| {
                    let elapsed = self
                        .toast_start
                        .map(|t| t.elapsed().as_secs_f32())
                        .unwrap_or(0.0);
                    let alpha = if elapsed > visible_duration {
                        (total_duration - elapsed) / fade_duration
                    } else {
                        1.0
                    };

                    egui::Frame::new()
                        .fill(egui::Color32::from_rgba_unmultiplied(
                            p.bg_elevated.r(),
                            p.bg_elevated.g(),
                            p.bg_elevated.b(),
                            (230.0 * alpha) as u8,
                        ))
                        .stroke(egui::Stroke::new(
                            1.0,
                            egui::Color32::from_rgba_unmultiplied(
                                p.status_error.r(),
                                p.status_error.g(),
                                p.status_error.b(),
                                (100.0 * alpha) as u8,
                            ),
                        ))
                        .corner_radius(6.0)
                        .inner_margin(egui::Margin::symmetric(16, 10))
                        .show(ui, |ui| {
                            ui.label(
                                egui::RichText::new(msg).color(
                                    egui::Color32::from_rgba_unmultiplied(
                                        p.text_primary.r(),
                                        p.text_primary.g(),
                                        p.text_primary.b(),
                                        (255.0 * alpha) as u8,
                                    ),
                                ),
                            );
                        });
                });

            // Pause timer while hovering
            if response.response.hovered() {
                self.toast_start = Some(std::time::Instant::now());
            }

            let elapsed = self
                .toast_start
                .map(|t| t.elapsed().as_secs_f32())
                .unwrap_or(0.0);
            if elapsed >= total_duration {
                self.toast_message = None;
                self.toast_start = None;
            } else {
                ctx.request_repaint();
            }
        }
    }
}
