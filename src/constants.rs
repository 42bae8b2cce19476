//! Application constants and configuration

pub const APP_NAME: &str = "Coffee Board";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default endpoint, answers `{"file": "<image url>"}`
pub const COFFEE_ENDPOINT: &str = "https://coffee.alexflipnote.dev/random.json";

// User-facing strings
pub const INPUT_HINT: &str = "Quoi de neuf ?";
pub const PUBLISH_LABEL: &str = "Publier";
pub const EMPTY_INPUT_ERROR: &str = "Make sure that the input is filled before publishing !";
pub const FETCH_FAILED_ERROR: &str = "Couldn't get image";
