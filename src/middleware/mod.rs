//! Request middleware pipeline
//!
//! Every request passes through an ordered list of stages before the page
//! handler runs. A stage may annotate the request context, queue response
//! headers, or answer the request itself.

mod cookie;
mod logging;
mod session;

pub use cookie::{find_cookie, format_set_cookie, SESSION_COOKIE_NAME};
pub use logging::{fingerprint, AccessLogStage, AccessSink, LoggerSink, NO_SESSION};
pub use session::{generate_session_id, SessionStage, SESSION_ID_BYTES};

use crate::config::Config;
use crate::random::RandomSource;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{HeaderMap, Method, Request, Response};
use std::borrow::Cow;
use std::sync::Arc;

/// Per-request state shared by the stages and the terminal handler
#[derive(Debug)]
pub struct RequestContext {
    pub method: Method,
    /// Percent-decoded request path
    pub path: String,
    /// Session identifier presented by the client or issued by a stage
    pub session_id: Option<String>,
    /// Headers merged into the handler's response
    pub response_headers: HeaderMap,
}

impl RequestContext {
    pub fn from_request<B>(req: &Request<B>) -> Self {
        Self {
            method: req.method().clone(),
            path: decode_path(req.uri().path()),
            session_id: find_cookie(req.headers(), SESSION_COOKIE_NAME).map(str::to_owned),
            response_headers: HeaderMap::new(),
        }
    }
}

/// Decode `%XX` escapes, keeping the raw path if it is not UTF-8 once decoded
fn decode_path(raw: &str) -> String {
    urlencoding::decode(raw).map_or_else(|_| raw.to_string(), Cow::into_owned)
}

/// Outcome of a stage
pub enum Flow {
    Continue,
    /// Stop the pipeline and send this response
    Respond(Response<Full<Bytes>>),
}

/// A single request interceptor
pub trait Stage: Send + Sync {
    fn name(&self) -> &'static str;

    fn apply(&self, ctx: &mut RequestContext) -> Flow;
}

/// Ordered stages applied around a terminal handler
#[derive(Default)]
pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session issuance followed by access logging (when enabled)
    pub fn standard(
        config: &Config,
        random: Arc<dyn RandomSource>,
        sink: Arc<dyn AccessSink>,
    ) -> Self {
        let pipeline = Self::new().with_stage(SessionStage::new(random, config.session));
        if config.logging.access_log {
            pipeline.with_stage(AccessLogStage::new(sink))
        } else {
            pipeline
        }
    }

    #[must_use]
    pub fn with_stage(mut self, stage: impl Stage + 'static) -> Self {
        self.stages.push(Box::new(stage));
        self
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    /// Run the stages in order, then `handler` unless a stage answered.
    pub fn run<F>(&self, mut ctx: RequestContext, handler: F) -> Response<Full<Bytes>>
    where
        F: FnOnce(&RequestContext) -> Response<Full<Bytes>>,
    {
        for stage in &self.stages {
            if let Flow::Respond(response) = stage.apply(&mut ctx) {
                return response;
            }
        }

        let mut response = handler(&ctx);
        for (name, value) in &ctx.response_headers {
            response.headers_mut().append(name, value.clone());
        }
        response
    }
}
