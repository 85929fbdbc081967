//! Session assignment stage.
//!
//! Issues an opaque random identifier to clients that arrive without one.
//! Nothing is stored server-side; the cookie is the whole session.

use super::cookie::{format_set_cookie, SESSION_COOKIE_NAME};
use super::{Flow, RequestContext, Stage};
use crate::config::SessionConfig;
use crate::http;
use crate::logger;
use crate::random::{RandomError, RandomSource};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use hyper::header::{HeaderValue, SET_COOKIE};
use std::sync::Arc;

/// Random bytes per session identifier
pub const SESSION_ID_BYTES: usize = 32;

/// Draw a fresh identifier and encode it with the standard base64 alphabet.
pub fn generate_session_id(random: &dyn RandomSource) -> Result<String, RandomError> {
    let mut bytes = [0u8; SESSION_ID_BYTES];
    random.fill(&mut bytes)?;
    Ok(STANDARD.encode(bytes))
}

pub struct SessionStage {
    random: Arc<dyn RandomSource>,
    cookie: SessionConfig,
}

impl SessionStage {
    pub fn new(random: Arc<dyn RandomSource>, cookie: SessionConfig) -> Self {
        Self { random, cookie }
    }

    fn issue(&self, ctx: &mut RequestContext) -> Result<(), String> {
        let id = generate_session_id(self.random.as_ref())
            .map_err(|e| format!("Failed to generate session ID: {e}"))?;
        let cookie = format_set_cookie(
            SESSION_COOKIE_NAME,
            &id,
            self.cookie.secure,
            self.cookie.http_only,
        );
        let value = HeaderValue::from_str(&cookie)
            .map_err(|e| format!("Invalid session cookie header: {e}"))?;
        ctx.response_headers.append(SET_COOKIE, value);
        ctx.session_id = Some(id);
        Ok(())
    }
}

impl Stage for SessionStage {
    fn name(&self) -> &'static str {
        "session"
    }

    fn apply(&self, ctx: &mut RequestContext) -> Flow {
        if ctx.session_id.is_some() {
            return Flow::Continue;
        }

        match self.issue(ctx) {
            Ok(()) => Flow::Continue,
            Err(message) => {
                logger::log_error(&message);
                Flow::Respond(http::build_500_response())
            }
        }
    }
}
