#![windows_subsystem = "windows"]
//! Coffee Board - Main entry point

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod app;
mod board;
mod constants;
mod error;
mod fetch;
mod settings;
mod theme;
mod types;
mod ui;
mod utils;

use app::{App, EntryAction};
use constants::*;
use eframe::egui;
use tracing::info;
use ui::components;

/// Initialize file logging. Returns a guard that must be held for the app lifetime.
fn init_logging(data_dir: &std::path::Path) -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{fmt, EnvFilter, prelude::*};

    let logs_dir = data_dir.join("logs");
    std::fs::create_dir_all(&logs_dir).ok();

    let file_appender = tracing_appender::rolling::daily(&logs_dir, "coffee-board.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,coffee_board=debug"));

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
    let data_dir = utils::get_data_dir();
    std::fs::create_dir_all(&data_dir).ok();

    // Initialize logging - guard must live for entire app lifetime
    let _log_guard = init_logging(&data_dir);

    info!(version = APP_VERSION, "Coffee Board starting");

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

    // Phone-shaped by default
    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(win_size.unwrap_or(egui::vec2(420.0, 760.0)))
        .with_min_inner_size([320.0, 480.0])
        .with_title(APP_NAME);

    let needs_center = win_pos.is_none();

    if let Some(pos) = win_pos {
        viewport = viewport.with_position(pos);
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |cc| {
            let mut app = App::new(cc, settings, data_dir)?;
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

        // Center window on first launch
        if self.needs_center {
            self.needs_center = false;
            if let Some(cmd) = egui::ViewportCommand::center_on_screen(ctx) {
                ctx.send_viewport_cmd(cmd);
            }
        }

        // Check for a finished publish
        self.poll_publish(ctx);

        let p = theme::palette(ctx.theme());
        let mut publish = false;
        let mut entry_action: Option<(usize, EntryAction)> = None;

        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(p.bg)
                    .inner_margin(egui::Margin::same(theme::INPUT_PADDING as i8)),
            )
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false; 2])
                    .show(ui, |ui| {
                        theme::input_frame(p).show(ui, |ui| {
                            let input = ui.add(
                                egui::TextEdit::singleline(&mut self.board.input)
                                    .hint_text(INPUT_HINT)
                                    .text_color(p.text)
                                    .frame(false)
                                    .desired_width(f32::INFINITY),
                            );
                            if self.focus_input {
                                self.focus_input = false;
                                input.request_focus();
                            }
                            if input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                                publish = true;
                                self.focus_input = true;
                            }
                        });

                        ui.add_space(6.0);

                        let busy = self.board.is_busy();
                        let button = theme::button_accent(PUBLISH_LABEL)
                            .min_size(egui::vec2(ui.available_width(), theme::BUTTON_HEIGHT));
                        if ui.add_enabled(!busy, button).clicked() {
                            publish = true;
                        }

                        if busy {
                            ui.horizontal(|ui| {
                                ui.spinner();
                                ui.label(egui::RichText::new("Brewing…").color(p.text_dim));
                            });
                        }

                        if let Some(message) = self.board.error() {
                            components::error_line(ui, message);
                        }

                        ui.vertical_centered(|ui| {
                            for idx in 0..self.board.entries().len() {
                                let entry = self.board.entries()[idx].clone();
                                let image = self.image_view(ctx, &entry.image_url);
                                let response = components::entry_card(ui, p, idx, &entry, image);
                                response.context_menu(|ui| {
                                    if let Some(action) = self.entry_context_menu(ui) {
                                        entry_action = Some((idx, action));
                                    }
                                });
                            }
                            ui.add_space(theme::ENTRY_GAP);
                        });
                    });
            });

        if publish {
            self.publish(ctx);
        }
        if let Some((idx, action)) = entry_action {
            self.apply_entry_action(ctx, idx, action);
        }

        self.render_toast(ctx, p);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!(entries = self.board.entries().len(), "Application shutting down");
        self.save_settings();
    }
}

impl App {
    /// Toast at the bottom of the window: 3s visible then fade, paused on hover
    fn render_toast(&mut self, ctx: &egui::Context, p: theme::Palette) {
        let Some(msg) = self.toast_message.clone() else {
            return;
        };
        let visible_duration = 3.0;
        let fade_duration = 0.5;
        let total_duration = visible_duration + fade_duration;
        let margin = 12.0;

        let screen = ctx.screen_rect();
        let toast_pos = egui::pos2(screen.center().x, screen.bottom() - margin);

        let response = egui::Area::new(egui::Id::new("board_toast"))
            .fixed_pos(toast_pos)
            .pivot(egui::Align2::CENTER_BOTTOM)
            .show(ctx, |ui| {
                let elapsed = self.toast_start.map(|t| t.elapsed().as_secs_f32()).unwrap_or(0.0);
                let alpha = if elapsed > visible_duration {
                    ((total_duration - elapsed) / fade_duration).clamp(0.0, 1.0)
                } else {
                    1.0
                };

                egui::Frame::new()
                    .fill(p.surface.gamma_multiply(alpha))
                    .stroke(egui::Stroke::new(1.0, theme::ACCENT.gamma_multiply(alpha)))
                    .corner_radius(6.0)
                    .inner_margin(egui::Margin::symmetric(16, 10))
                    .show(ui, |ui| {
                        ui.label(egui::RichText::new(msg).color(p.text.gamma_multiply(alpha)));
                    });
            });

        // Pause timer while hovering
        if response.response.hovered() {
            self.toast_start = Some(std::time::Instant::now());
        }

        let elapsed = self.toast_start.map(|t| t.elapsed().as_secs_f32()).unwrap_or(0.0);
        if elapsed >= total_duration {
            self.toast_message = None;
            self.toast_start = None;
        } else {
            ctx.request_repaint();
        }
    }
}
