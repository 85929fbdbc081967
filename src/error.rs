use crate::content::ContentError;
use std::net::{AddrParseError, SocketAddr};
use thiserror::Error;

/// Errors that stop the server before it accepts traffic
#[derive(Error, Debug)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("failed to open log files: {0}")]
    Logger(#[source] std::io::Error),

    #[error("content assembly failed: {0}")]
    Content(#[from] ContentError),

    #[error("invalid listen address: {0}")]
    Address(#[from] AddrParseError),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("runtime error: {0}")]
    Runtime(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StartupError>;
