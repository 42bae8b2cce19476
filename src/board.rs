//! Board state: the published entries, the text field and the error line.
//!
//! This is kept free of egui and networking so the publish rules can be
//! exercised directly. The app feeds it button presses and fetch results.

use crate::constants::{EMPTY_INPUT_ERROR, FETCH_FAILED_ERROR};
use crate::error::{FetchError, SubmitError};
use crate::types::Entry;
use chrono::Local;
use tracing::{debug, warn};

/// Handed out by [`Board::submit`]; holds the label captured at press time.
#[derive(Debug)]
#[must_use = "a pending publish must be completed"]
pub struct PendingPublish {
    label: String,
}

impl PendingPublish {
    pub fn label(&self) -> &str {
        &self.label
    }
}

#[derive(Default)]
pub struct Board {
    entries: Vec<Entry>,
    pub input: String,
    error: String,
    in_flight: bool,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Current error line, `None` when there is nothing to show
    pub fn error(&self) -> Option<&str> {
        if self.error.is_empty() {
            None
        } else {
            Some(&self.error)
        }
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight
    }

    /// Start a publish. On success the caller must fetch an image and pass
    /// the outcome to [`Board::complete`].
    pub fn submit(&mut self) -> Result<PendingPublish, SubmitError> {
        if self.in_flight {
            debug!("Publish ignored, previous fetch still running");
            return Err(SubmitError::Busy);
        }
        if self.input.is_empty() {
            self.error = EMPTY_INPUT_ERROR.to_string();
            return Err(SubmitError::EmptyInput);
        }
        self.in_flight = true;
        Ok(PendingPublish {
            label: self.input.clone(),
        })
    }

    /// Finish a publish started by [`Board::submit`].
    pub fn complete(&mut self, pending: PendingPublish, result: Result<String, FetchError>) {
        self.in_flight = false;
        match result {
            Ok(image_url) => {
                debug!(label = %pending.label, url = %image_url, "Entry published");
                self.entries.push(Entry {
                    label: pending.label,
                    image_url,
                    published_at: Local::now(),
                });
                self.input.clear();
                self.error.clear();
            }
            Err(e) => {
                warn!(error = %e, "Could not get a coffee image");
                self.error = FETCH_FAILED_ERROR.to_string();
            }
        }
    }
}
