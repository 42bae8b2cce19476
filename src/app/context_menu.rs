//! Context menu for entry cards

use super::App;
use crate::theme;
use eframe::egui;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EntryAction {
    CopyUrl,
    OpenInBrowser,
}

impl App {
    pub(crate) fn entry_context_menu(&self, ui: &mut egui::Ui) -> Option<EntryAction> {
        ui.spacing_mut().item_spacing.y = 2.0;
        theme::set_menu_width(ui, &["Copy image URL", "Open in browser"]);

        let mut action = None;
        if theme::menu_item(ui, egui_phosphor::regular::COPY, "Copy image URL") {
            action = Some(EntryAction::CopyUrl);
            ui.close_menu();
        }
        if theme::menu_item(ui, egui_phosphor::regular::ARROW_SQUARE_OUT, "Open in browser") {
            action = Some(EntryAction::OpenInBrowser);
            ui.close_menu();
        }
        action
    }

    pub(crate) fn apply_entry_action(&mut self, ctx: &egui::Context, entry_idx: usize, action: EntryAction) {
        let Some(url) = self.board.entries().get(entry_idx).map(|e| e.image_url.clone()) else {
            return;
        };
        match action {
            EntryAction::CopyUrl => {
                ctx.copy_text(url);
                self.show_toast("Image URL copied");
            }
            EntryAction::OpenInBrowser => {
                info!(url = %url, "Opening picture in browser");
                if let Err(e) = open::that(&url) {
                    warn!(error = %e, "Failed to open browser");
                    self.show_toast("Couldn't open the browser");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;

    #[test]
    fn copy_shows_toast() {
        let ctx = egui::Context::default();
        let mut app = App::with_settings(Settings::default(), std::env::temp_dir()).unwrap();
        app.board.input = "cortado".to_string();
        let pending = app.board.submit().unwrap();
        app.board.complete(pending, Ok("https://example.com/c.jpg".to_string()));

        app.apply_entry_action(&ctx, 0, EntryAction::CopyUrl);
        assert_eq!(app.toast_message.as_deref(), Some("Image URL copied"));
    }

    #[test]
    fn unknown_entry_is_ignored() {
        let ctx = egui::Context::default();
        let mut app = App::with_settings(Settings::default(), std::env::temp_dir()).unwrap();
        app.apply_entry_action(&ctx, 3, EntryAction::CopyUrl);
        assert!(app.toast_message.is_none());
    }
}
