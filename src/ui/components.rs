//! Reusable UI components
//!
//! Standalone widgets for the board screen. They only draw; state changes
//! go back through the returned responses.

use crate::app::ImageView;
use crate::theme::{self, Palette};
use crate::types::Entry;
use crate::utils::file_name_from_url;
use chrono::{DateTime, Local};
use eframe::egui;

/// Caption under a picture: file name and publish time
pub fn entry_caption(entry: &Entry) -> String {
    format!(
        "{} · {}",
        file_name_from_url(&entry.image_url),
        format_published_at(&entry.published_at)
    )
}

pub fn format_published_at(at: &DateTime<Local>) -> String {
    at.format("%H:%M").to_string()
}

/// Error line under the publish button
pub fn error_line(ui: &mut egui::Ui, message: &str) {
    ui.add(
        egui::Label::new(
            egui::RichText::new(message)
                .color(theme::STATUS_ERROR)
                .size(theme::FONT_ERROR),
        )
        .wrap(),
    );
}

/// One entry: label on top, picture below. Returns the card's response so
/// the caller can attach a context menu.
pub(crate) fn entry_card(
    ui: &mut egui::Ui,
    p: Palette,
    idx: usize,
    entry: &Entry,
    image: ImageView,
) -> egui::Response {
    let (img_w, img_h) = theme::IMAGE_SIZE;
    let card_width = img_w + 8.0;
    let inner = ui.allocate_ui_with_layout(
        egui::vec2(card_width, 0.0),
        egui::Layout::top_down(egui::Align::Min),
        |ui| {
            ui.set_width(card_width);
            ui.add_space(theme::ENTRY_GAP);
            ui.add(
                egui::Label::new(egui::RichText::new(&entry.label).color(p.text).size(theme::FONT_BODY))
                    .wrap(),
            );

            theme::image_frame(p).show(ui, |ui| {
                let size = egui::vec2(img_w, img_h);
                match image {
                    ImageView::Ready(texture) => {
                        ui.image(egui::load::SizedTexture::new(texture.id(), size));
                    }
                    ImageView::Loading => placeholder(ui, size, None),
                    ImageView::Failed => placeholder(ui, size, Some(p.text_dim)),
                }
            });

            ui.add(
                egui::Label::new(
                    egui::RichText::new(entry_caption(entry))
                        .color(p.text_dim)
                        .size(theme::FONT_CAPTION),
                )
                .truncate(),
            );
        },
    );
    ui.interact(inner.response.rect, ui.id().with(("entry", idx)), egui::Sense::click())
}

/// Fixed-size box holding a spinner, or a broken-image icon when `failed` is set
fn placeholder(ui: &mut egui::Ui, size: egui::Vec2, failed: Option<egui::Color32>) {
    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    let mut child = ui.new_child(
        egui::UiBuilder::new()
            .max_rect(rect)
            .layout(egui::Layout::centered_and_justified(egui::Direction::TopDown)),
    );
    match failed {
        Some(color) => {
            child.label(
                egui::RichText::new(egui_phosphor::regular::IMAGE_BROKEN)
                    .size(32.0)
                    .color(color),
            );
        }
        None => {
            child.spinner();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn caption_has_file_and_time() {
        let entry = Entry {
            label: "americano".to_string(),
            image_url: "https://coffee.alexflipnote.dev/x1_coffee.png".to_string(),
            published_at: Local.with_ymd_and_hms(2026, 10, 18, 9, 5, 0).unwrap(),
        };
        assert_eq!(entry_caption(&entry), "x1_coffee.png · 09:05");
    }
}
