//! Common types and data structures

use chrono::{DateTime, Local};

/// One published item: the user's text and the coffee picture it got
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub label: String,
    pub image_url: String,
    pub published_at: DateTime<Local>,
}

/// Load status of an entry's picture
#[derive(Clone)]
pub enum ImageLoad {
    Loading,
    Ready(Vec<u8>),
    Failed(String),
}

/// Response body of the coffee endpoint
#[derive(serde::Deserialize)]
pub struct CoffeeResponse {
    #[serde(default)]
    pub file: Option<String>,
}
