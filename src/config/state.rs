// Application state module
// Read-only state shared by every connection task

use std::sync::Arc;

use super::types::Config;
use crate::content::PageTable;
use crate::middleware::{LoggerSink, Pipeline};
use crate::random::RandomSource;

/// Application state
///
/// Built once before the listener is bound and never mutated afterwards,
/// so request handling takes no locks.
pub struct AppState {
    pub config: Config,
    pub pages: PageTable,
    pub pipeline: Pipeline,
}

impl AppState {
    /// Create `AppState` with the standard session and access-log stages
    pub fn new(config: Config, pages: PageTable, random: Arc<dyn RandomSource>) -> Self {
        let pipeline = Pipeline::standard(&config, random, Arc::new(LoggerSink));
        Self::with_pipeline(config, pages, pipeline)
    }

    pub const fn with_pipeline(config: Config, pages: PageTable, pipeline: Pipeline) -> Self {
        Self {
            config,
            pages,
            pipeline,
        }
    }
}
