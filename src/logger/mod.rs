//! Logger module
//!
//! Logging utilities for the server: startup banner, access logging in
//! combined or JSON format, error and warning output, optional file targets.
//! Before `init` runs (and in tests) everything falls back to stdout/stderr.

mod format;
pub mod writer;

pub use format::AccessLogEntry;

use crate::config::Config;
use std::net::SocketAddr;

/// Initialize the logger from configuration. Call once at startup.
pub fn init(config: &Config) -> std::io::Result<()> {
    writer::init(
        config.logging.access_log_file.as_deref(),
        config.logging.error_log_file.as_deref(),
    )
}

fn write_info(message: &str) {
    match writer::get() {
        Some(w) => w.write_info(message),
        None => println!("{message}"),
    }
}

fn write_error(message: &str) {
    match writer::get() {
        Some(w) => w.write_error(message),
        None => eprintln!("{message}"),
    }
}

/// Startup banner: paths and catalog size, logged before the runtime starts.
pub fn log_startup(config: &Config, chains_loaded: usize) {
    write_info("======================================");
    write_info("Chain Fit Studio backend starting");
    write_info(&format!("Static root: {}", config.paths.static_root));
    write_info(&format!("Chain directory: {}", config.paths.chain_dir));
    if std::path::Path::new(&config.paths.static_root).join("index.html").is_file() {
        write_info("Front-end bundle found");
    } else {
        write_error("[WARN] Front-end bundle missing, SPA routes will get a placeholder page");
    }
    write_info(&format!("Chains loaded: {chains_loaded}"));
    write_info("======================================");
}

pub fn log_server_start(addr: &SocketAddr, config: &Config, chains_loaded: usize) {
    write_info(&format!("Listening on: http://{addr}"));
    write_info(&format!("Log level: {}", config.logging.level));
    if let Some(workers) = config.server.workers {
        write_info(&format!("Worker threads: {workers}"));
    }
    write_info(&format!(
        "Serving {chains_loaded} chains at /api/chains, health at /health"
    ));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}

pub fn log_response(size: usize) {
    write_info(&format!("[Response] {size} bytes"));
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    write_info(&entry.format(format));
}

pub fn log_api_request(method: &str, path: &str, status: u16) {
    write_info(&format!("[API] {method} {path} - {status}"));
}
