//! HTTP access to the coffee endpoint and to the pictures it points at

use crate::error::FetchError;
use crate::types::CoffeeResponse;
use tracing::debug;

#[derive(Clone)]
pub struct CoffeeClient {
    client: reqwest::Client,
    endpoint: String,
}

impl CoffeeClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Ask the endpoint for a random coffee picture and return its URL.
    pub async fn random_image(&self) -> Result<String, FetchError> {
        let response = self.client.get(&self.endpoint).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }
        let body = response.text().await?;
        let url = parse_image_url(&body)?;
        debug!(url = %url, "Coffee image fetched");
        Ok(url)
    }

    /// Download the raw bytes of a picture.
    pub async fn download_image(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }
        Ok(response.bytes().await?.to_vec())
    }
}

/// Extract the `file` field from an endpoint response body.
/// A missing, null or empty field counts as no image.
pub fn parse_image_url(body: &str) -> Result<String, FetchError> {
    let parsed: CoffeeResponse = serde_json::from_str(body)?;
    match parsed.file {
        Some(file) if !file.is_empty() => Ok(file),
        _ => Err(FetchError::MissingImage),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve a single canned HTTP response on a local port, return its URL.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        });
        format!("http://{}/random.json", addr)
    }

    fn local_client(endpoint: String) -> CoffeeClient {
        let client = reqwest::Client::builder().no_proxy().build().unwrap();
        CoffeeClient::with_client(client, endpoint)
    }

    #[test]
    fn parses_file_field() {
        let url = parse_image_url(r#"{"file": "https://coffee.alexflipnote.dev/abc_coffee.jpg"}"#).unwrap();
        assert_eq!(url, "https://coffee.alexflipnote.dev/abc_coffee.jpg");
    }

    #[test]
    fn missing_or_empty_file_is_an_error() {
        assert!(matches!(parse_image_url("{}"), Err(FetchError::MissingImage)));
        assert!(matches!(parse_image_url(r#"{"file": null}"#), Err(FetchError::MissingImage)));
        assert!(matches!(parse_image_url(r#"{"file": ""}"#), Err(FetchError::MissingImage)));
    }

    #[test]
    fn bad_json_is_malformed() {
        assert!(matches!(parse_image_url("<html>"), Err(FetchError::Malformed(_))));
        assert!(matches!(parse_image_url(r#"{"file": 42}"#), Err(FetchError::Malformed(_))));
    }

    #[tokio::test]
    async fn fetches_url_from_server() {
        let endpoint = serve_once("200 OK", r#"{"file":"https://example.com/cup.png"}"#).await;
        let url = local_client(endpoint).random_image().await.unwrap();
        assert_eq!(url, "https://example.com/cup.png");
    }

    #[tokio::test]
    async fn server_error_is_reported() {
        let endpoint = serve_once("500 Internal Server Error", "oops").await;
        let err = local_client(endpoint).random_image().await.unwrap_err();
        assert!(matches!(err, FetchError::Status(s) if s.as_u16() == 500));
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_transport_error() {
        // Bind then drop to get a port nobody listens on
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = local_client(format!("http://{}/random.json", addr))
            .random_image()
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Transport(_)));
    }

    #[tokio::test]
    async fn downloads_image_bytes() {
        let endpoint = serve_once("200 OK", "not really a png").await;
        let bytes = local_client(String::new()).download_image(&endpoint).await.unwrap();
        assert_eq!(bytes, b"not really a png");
    }
}
