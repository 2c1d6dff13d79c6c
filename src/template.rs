//! Per-slide template cache and background fetcher.
//!
//! Fetches run as one blocking GET per request on a named worker
//! thread. Results come back over a single channel and are drained by
//! the frame loop; nothing here retries, times out, or cancels.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use tracing::error;

use crate::error::{Error, Result};

/// Slide index -> resolved HTML. Entries are written at most once per
/// index on success and never invalidated for the widget's lifetime.
/// Failed fetches leave the entry unset so reselection can retry.
#[derive(Debug)]
pub struct TemplateStore {
    entries: Vec<Option<String>>,
}

impl TemplateStore {
    pub fn new(slide_count: usize) -> Self {
        Self {
            entries: vec![None; slide_count],
        }
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index)?.as_deref()
    }

    pub fn set(&mut self, index: usize, template: String) {
        if let Some(entry) = self.entries.get_mut(index) {
            *entry = Some(template);
        }
    }
}

/// Outcome of one template GET, tagged with the slide it was for.
#[derive(Debug)]
pub struct FetchResult {
    pub index: usize,
    pub url: String,
    pub result: Result<String>,
}

/// Issues template GETs on worker threads and funnels the results back
/// through one channel, to be applied from the frame loop.
pub struct TemplateFetcher {
    tx: Sender<FetchResult>,
    rx: Receiver<FetchResult>,
}

impl TemplateFetcher {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self { tx, rx }
    }

    /// Start one GET for `url`. The result arrives via [`poll`].
    ///
    /// [`poll`]: TemplateFetcher::poll
    pub fn request(&self, index: usize, url: &str) {
        let tx = self.tx.clone();
        let url = url.to_string();
        let spawned = thread::Builder::new()
            .name(format!("accordion-fetch-{index}"))
            .spawn(move || {
                let result = fetch_template(&url);
                if let Err(e) = &result {
                    error!("Error: {e}");
                }
                // The receiver only goes away when the widget does.
                let _ = tx.send(FetchResult { index, url, result });
            });
        if let Err(e) = spawned {
            error!("failed to spawn template fetch thread: {e}");
        }
    }

    /// Drain every completed fetch without blocking.
    pub fn poll(&self) -> Vec<FetchResult> {
        self.rx.try_iter().collect()
    }
}

impl Default for TemplateFetcher {
    fn default() -> Self {
        Self::new()
    }
}

fn fetch_template(url: &str) -> Result<String> {
    let response = reqwest::blocking::get(url)?;
    let status = response.status();
    if status == reqwest::StatusCode::OK {
        Ok(response.text()?)
    } else {
        Err(Error::TemplateStatus {
            url: url.to_string(),
            status: status.as_u16(),
        })
    }
}
