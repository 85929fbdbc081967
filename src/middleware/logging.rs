//! Access logging stage.
//!
//! Runs after session assignment so a session issued on this request is
//! already fingerprinted. Never fails the request.

use super::{Flow, RequestContext, Stage};
use crate::logger::{self, AccessLogEntry};
use std::sync::Arc;

/// Fingerprint logged when the request carries no session
pub const NO_SESSION: &str = "none";

const FINGERPRINT_CHARS: usize = 4;

/// First four characters of a session identifier, or `none`.
pub fn fingerprint(session_id: Option<&str>) -> &str {
    match session_id {
        Some(id) if !id.is_empty() => id
            .char_indices()
            .nth(FINGERPRINT_CHARS)
            .map_or(id, |(end, _)| &id[..end]),
        _ => NO_SESSION,
    }
}

/// Destination for access log entries
pub trait AccessSink: Send + Sync {
    fn record(&self, entry: &AccessLogEntry);
}

/// Sends entries to the process log writer
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggerSink;

impl AccessSink for LoggerSink {
    fn record(&self, entry: &AccessLogEntry) {
        logger::log_access(entry);
    }
}

pub struct AccessLogStage {
    sink: Arc<dyn AccessSink>,
}

impl AccessLogStage {
    pub fn new(sink: Arc<dyn AccessSink>) -> Self {
        Self { sink }
    }
}

impl Stage for AccessLogStage {
    fn name(&self) -> &'static str {
        "access_log"
    }

    fn apply(&self, ctx: &mut RequestContext) -> Flow {
        let entry = AccessLogEntry::new(
            ctx.method.as_str(),
            fingerprint(ctx.session_id.as_deref()),
            &ctx.path,
        );
        self.sink.record(&entry);
        Flow::Continue
    }
}
