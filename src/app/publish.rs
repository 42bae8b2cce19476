//! Publish flow: button press -> coffee fetch -> new entry

use super::{App, InFlight};
use crate::error::FetchError;
use eframe::egui;
use tokio::sync::oneshot::{self, error::TryRecvError};
use tracing::{debug, info};

impl App {
    /// Handle a press of the publish button (or Enter in the text field).
    pub fn publish(&mut self, ctx: &egui::Context) {
        let pending = match self.board.submit() {
            Ok(pending) => pending,
            Err(e) => {
                debug!(reason = %e, "Publish refused");
                return;
            }
        };

        info!(label = %pending.label(), "Publishing");

        let (tx, rx) = oneshot::channel();
        let client = self.client.clone();
        let ctx = ctx.clone();
        self.runtime.spawn(async move {
            let result = client.random_image().await;
            let _ = tx.send(result);
            ctx.request_repaint();
        });

        self.in_flight = Some(InFlight { pending, rx });
    }

    /// Pick up the result of an outstanding publish, if it has arrived.
    pub fn poll_publish(&mut self, ctx: &egui::Context) {
        let Some(mut in_flight) = self.in_flight.take() else {
            return;
        };

        let result = match in_flight.rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => {
                self.in_flight = Some(in_flight);
                return;
            }
            Err(TryRecvError::Closed) => Err(FetchError::Aborted),
        };

        let image_url = result.as_ref().ok().cloned();
        self.board.complete(in_flight.pending, result);
        if let Some(url) = image_url {
            self.load_image(ctx, &url);
            self.focus_input = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{EMPTY_INPUT_ERROR, FETCH_FAILED_ERROR};
    use crate::fetch::CoffeeClient;
    use crate::settings::Settings;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::time::{Duration, Instant};

    /// Answer one request with the given status and body on a background thread.
    fn serve_once(status_line: &'static str, body: String) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        std::thread::spawn(move || {
            if let Ok((mut socket, _)) = listener.accept() {
                let mut buf = [0u8; 4096];
                let _ = socket.read(&mut buf);
                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status_line,
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes());
            }
        });
        format!("http://{}/random.json", addr)
    }

    fn test_app(endpoint: &str) -> App {
        let mut app = App::with_settings(Settings::default(), std::env::temp_dir()).unwrap();
        let client = reqwest::Client::builder().no_proxy().build().unwrap();
        app.client = CoffeeClient::with_client(client, endpoint);
        app
    }

    fn wait_idle(app: &mut App, ctx: &egui::Context) {
        let deadline = Instant::now() + Duration::from_secs(10);
        while app.board.is_busy() && Instant::now() < deadline {
            app.poll_publish(ctx);
            std::thread::sleep(Duration::from_millis(10));
        }
    }

    #[test]
    fn publish_appends_entry() {
        let endpoint = serve_once("200 OK", r#"{"file":"http://127.0.0.1:9/cup.jpg"}"#.to_string());
        let ctx = egui::Context::default();
        let mut app = test_app(&endpoint);

        app.board.input = "flat white".to_string();
        app.publish(&ctx);
        assert!(app.board.is_busy());
        wait_idle(&mut app, &ctx);

        assert_eq!(app.board.entries().len(), 1);
        assert_eq!(app.board.entries()[0].label, "flat white");
        assert_eq!(app.board.entries()[0].image_url, "http://127.0.0.1:9/cup.jpg");
        assert!(app.board.input.is_empty());
        assert_eq!(app.board.error(), None);
        assert!(app.in_flight.is_none());
    }

    #[test]
    fn failed_publish_shows_error() {
        let endpoint = serve_once("503 Service Unavailable", String::new());
        let ctx = egui::Context::default();
        let mut app = test_app(&endpoint);

        app.board.input = "mocha".to_string();
        app.publish(&ctx);
        wait_idle(&mut app, &ctx);

        assert!(app.board.entries().is_empty());
        assert_eq!(app.board.error(), Some(FETCH_FAILED_ERROR));
        assert_eq!(app.board.input, "mocha");
    }

    #[test]
    fn empty_publish_never_spawns() {
        let ctx = egui::Context::default();
        let mut app = test_app("http://127.0.0.1:9/unused");

        app.publish(&ctx);
        assert!(app.in_flight.is_none());
        assert_eq!(app.board.error(), Some(EMPTY_INPUT_ERROR));
    }
}
