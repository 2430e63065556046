//! Console logging
//!
//! The server logs to stdout/stderr only. Startup and shutdown notices go to
//! stdout; errors and warnings go to stderr.

use chrono::Local;
use hyper::{Method, Uri};
use std::path::Path;

pub fn log_server_start(port: u16, root: &Path) {
    println!("======================================");
    println!("Server running at http://localhost:{port}/");
    println!("Serving files from: {}", root.display());
    println!("Open your browser to test Glide Reader");
    println!("======================================\n");
}

pub fn log_shutdown() {
    println!("\nServer stopped");
}

pub fn log_request(method: &Method, uri: &Uri) {
    println!(
        "[{}] {method} {uri}",
        Local::now().format("%d/%b/%Y %H:%M:%S")
    );
}

pub fn log_response(status: u16, bytes: u64) {
    println!("  -> {status} ({bytes} bytes)");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}
