//! Entry picture loading

use super::App;
use crate::types::ImageLoad;
use eframe::egui;
use tracing::{debug, warn};

/// What an entry card can show for its picture right now
pub(crate) enum ImageView {
    Loading,
    Ready(egui::TextureHandle),
    Failed,
}

impl App {
    /// Start downloading a picture in the background. No-op if already known.
    pub fn load_image(&mut self, ctx: &egui::Context, url: &str) {
        {
            let mut images = self.images.lock().unwrap_or_else(|e| e.into_inner());
            if images.contains_key(url) {
                return;
            }
            images.insert(url.to_string(), ImageLoad::Loading);
        }

        debug!(url, "Downloading picture");

        let images = self.images.clone();
        let client = self.client.clone();
        let url = url.to_string();
        let ctx = ctx.clone();

        self.runtime.spawn(async move {
            let status = match client.download_image(&url).await {
                Ok(bytes) => ImageLoad::Ready(bytes),
                Err(e) => {
                    warn!(url = %url, error = %e, "Picture download failed");
                    ImageLoad::Failed(e.to_string())
                }
            };
            images
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .insert(url, status);
            ctx.request_repaint();
        });
    }

    /// Texture for a picture, decoding the downloaded bytes on first use.
    pub(crate) fn image_view(&mut self, ctx: &egui::Context, url: &str) -> ImageView {
        if let Some(cached) = self.textures.get(url) {
            return match cached {
                Some(texture) => ImageView::Ready(texture.clone()),
                None => ImageView::Failed,
            };
        }

        let status = self
            .images
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(url)
            .cloned();

        match status {
            Some(ImageLoad::Ready(bytes)) => {
                let texture = match image::load_from_memory(&bytes) {
                    Ok(img) => {
                        let rgba = img.to_rgba8();
                        let size = [rgba.width() as usize, rgba.height() as usize];
                        let pixels = rgba.into_raw();
                        Some(ctx.load_texture(
                            url,
                            egui::ColorImage::from_rgba_unmultiplied(size, &pixels),
                            egui::TextureOptions::LINEAR,
                        ))
                    }
                    Err(e) => {
                        warn!(url, error = %e, "Picture could not be decoded");
                        None
                    }
                };
                // Bytes are no longer needed once the texture exists
                self.images
                    .lock()
                    .unwrap_or_else(|e| e.into_inner())
                    .insert(url.to_string(), ImageLoad::Ready(Vec::new()));
                self.textures.insert(url.to_string(), texture.clone());
                match texture {
                    Some(texture) => ImageView::Ready(texture),
                    None => ImageView::Failed,
                }
            }
            Some(ImageLoad::Failed(reason)) => {
                debug!(url, reason = %reason, "Showing broken picture");
                self.textures.insert(url.to_string(), None);
                ImageView::Failed
            }
            Some(ImageLoad::Loading) => ImageView::Loading,
            None => {
                // Not requested yet
                self.load_image(ctx, url);
                ImageView::Loading
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;

    fn test_app() -> App {
        App::with_settings(Settings::default(), std::env::temp_dir()).unwrap()
    }

    fn png_bytes() -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(2, 3, image::Rgba([0xfd, 0xce, 0x2a, 0xff]));
        let mut out = std::io::Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[test]
    fn ready_bytes_become_texture() {
        let ctx = egui::Context::default();
        let mut app = test_app();
        let url = "http://example.invalid/cup.png";
        app.images
            .lock()
            .unwrap()
            .insert(url.to_string(), ImageLoad::Ready(png_bytes()));

        match app.image_view(&ctx, url) {
            ImageView::Ready(texture) => assert_eq!(texture.size(), [2, 3]),
            _ => panic!("expected a texture"),
        }
        // Second lookup comes from the texture cache
        assert!(matches!(app.image_view(&ctx, url), ImageView::Ready(_)));
    }

    #[test]
    fn undecodable_bytes_fail() {
        let ctx = egui::Context::default();
        let mut app = test_app();
        let url = "http://example.invalid/broken.png";
        app.images
            .lock()
            .unwrap()
            .insert(url.to_string(), ImageLoad::Ready(b"nope".to_vec()));

        assert!(matches!(app.image_view(&ctx, url), ImageView::Failed));
        assert!(matches!(app.image_view(&ctx, url), ImageView::Failed));
    }

    #[test]
    fn failed_download_is_reported() {
        let ctx = egui::Context::default();
        let mut app = test_app();
        let url = "http://example.invalid/gone.png";
        app.images
            .lock()
            .unwrap()
            .insert(url.to_string(), ImageLoad::Failed("HTTP 404".into()));

        assert!(matches!(app.image_view(&ctx, url), ImageView::Failed));
    }

    #[test]
    fn loading_stays_loading() {
        let ctx = egui::Context::default();
        let mut app = test_app();
        let url = "http://example.invalid/slow.png";
        app.images
            .lock()
            .unwrap()
            .insert(url.to_string(), ImageLoad::Loading);

        assert!(matches!(app.image_view(&ctx, url), ImageView::Loading));
        assert!(!app.textures.contains_key(url));
    }
}
