//! Logger module
//!
//! Provides logging utilities for the page server including:
//! - Server lifecycle logging
//! - Per-request access lines
//! - Error and warning logging
//! - File-based logging support

mod format;
pub mod writer;

pub use format::AccessLogEntry;

use crate::config::{Config, LogLevel, LoggingConfig};
use std::net::SocketAddr;

/// Initialize the logger with configuration
///
/// Should be called once at application startup.
pub fn init(config: &LoggingConfig) -> std::io::Result<()> {
    writer::init(
        config.level,
        config.access_log_file.as_deref(),
        config.error_log_file.as_deref(),
    )
}

/// Before `init()` the default level applies
fn enabled_by_default(level: LogLevel) -> bool {
    level <= LogLevel::default()
}

/// Write to info/access log
fn write_info(message: &str) {
    match writer::get() {
        Some(w) => w.write_info(message),
        None if enabled_by_default(LogLevel::Info) => println!("{}", writer::stamp(message)),
        None => {}
    }
}

fn write_debug(message: &str) {
    match writer::get() {
        Some(w) => w.write_debug(message),
        None if enabled_by_default(LogLevel::Debug) => println!("{}", writer::stamp(message)),
        None => {}
    }
}

fn write_warning(message: &str) {
    match writer::get() {
        Some(w) => w.write_warning(message),
        None if enabled_by_default(LogLevel::Warn) => eprintln!("{}", writer::stamp(message)),
        None => {}
    }
}

/// Write to error log
fn write_error(message: &str) {
    match writer::get() {
        Some(w) => w.write_error(message),
        None => eprintln!("{}", writer::stamp(message)),
    }
}

/// Write to access log specifically
fn write_access(message: &str) {
    match writer::get() {
        Some(w) => w.write_access(message),
        None => println!("{}", writer::stamp(message)),
    }
}

pub fn log_server_start(addr: &SocketAddr, config: &Config, page_count: usize) {
    write_info("======================================");
    write_info("Page server started successfully");
    write_info(&format!("Listening on: http://{addr}"));
    write_info(&format!("Content directory: {}", config.content.dir));
    write_info(&format!("Pages loaded: {page_count}"));
    write_info(&format!("Log level: {}", config.logging.level));
    if let Some(workers) = config.server.workers {
        write_info(&format!("Worker threads: {workers}"));
    }
    if let Some(ref path) = config.logging.access_log_file {
        write_info(&format!("Access log: {path}"));
    }
    if let Some(ref path) = config.logging.error_log_file {
        write_info(&format!("Error log: {path}"));
    }
    write_info("======================================");
}

pub fn log_page_loaded(name: &str, bytes: usize) {
    write_debug(&format!("[Content] Loaded {name} ({bytes} bytes)"));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_warning(&format!("[WARN] {message}"));
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry) {
    write_access(&entry.to_string());
}

pub fn log_shutdown(signal: &str) {
    write_info(&format!("[Signal] {signal} received, shutting down"));
}
