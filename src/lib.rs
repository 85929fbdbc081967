//! Serves a directory of pages assembled once at startup by expanding
//! `!file` transclusion lines, with a session cookie and an access log line
//! for every request.

pub mod config;
pub mod content;
pub mod error;
pub mod handler;
pub mod http;
pub mod logger;
pub mod middleware;
pub mod random;
pub mod server;

#[cfg(test)]
mod test_utils;
