//! Shared fixtures for unit tests

use crate::config::{AppState, Config};
use crate::content::PageTable;
use crate::logger::AccessLogEntry;
use crate::middleware::AccessSink;
use crate::random::{RandomError, RandomSource};
use hyper::body::Bytes;
use std::sync::{Arc, Mutex};

/// Fills every byte with the same value
pub struct FixedRandom(pub u8);

impl RandomSource for FixedRandom {
    fn fill(&self, buf: &mut [u8]) -> Result<(), RandomError> {
        buf.fill(self.0);
        Ok(())
    }
}

/// Always fails, like an exhausted entropy source
pub struct FailingRandom;

impl RandomSource for FailingRandom {
    fn fill(&self, _buf: &mut [u8]) -> Result<(), RandomError> {
        Err(RandomError::new("entropy source offline"))
    }
}

/// Collects access lines in memory
#[derive(Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl AccessSink for MemorySink {
    fn record(&self, entry: &AccessLogEntry) {
        self.lines.lock().unwrap().push(entry.to_string());
    }
}

pub fn pages(entries: &[(&str, &str)]) -> PageTable {
    entries
        .iter()
        .map(|(name, text)| ((*name).to_string(), Bytes::from(text.to_string())))
        .collect()
}

/// Default configuration and the standard pipeline writing to the process log
pub fn state_with(pages: PageTable, random: Arc<dyn RandomSource>) -> Arc<AppState> {
    let config = Config::with_defaults().unwrap();
    Arc::new(AppState::new(config, pages, random))
}
