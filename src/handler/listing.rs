//! Directory listing module
//!
//! Renders a plain HTML listing for directories with no index file.

use crate::handler::router::RequestContext;
use crate::http;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::Path;
use tokio::fs;

/// Serve a generated listing for a directory
pub async fn serve_listing(ctx: &RequestContext<'_>, dir: &Path) -> Response<Full<Bytes>> {
    match collect_entries(dir).await {
        Ok(entries) => {
            let html = render_listing(ctx.path, &entries);
            http::build_html_response(html, ctx.is_head)
        }
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read directory '{}': {}",
                dir.display(),
                e
            ));
            http::build_404_response()
        }
    }
}

/// Read a directory's entry names, sorted, with directories marked by a
/// trailing slash.
pub async fn collect_entries(dir: &Path) -> std::io::Result<Vec<String>> {
    let mut entries = Vec::new();
    let mut read_dir = fs::read_dir(dir).await?;
    while let Some(entry) = read_dir.next_entry().await? {
        let mut name = entry.file_name().to_string_lossy().into_owned();
        if entry.file_type().await?.is_dir() {
            name.push('/');
        }
        entries.push(name);
    }
    entries.sort();
    Ok(entries)
}

/// Render the listing page for a directory request path
pub fn render_listing(request_path: &str, entries: &[String]) -> String {
    let title = format!("Directory listing for {}", escape_html(request_path));
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    html.push_str("    <meta charset=\"utf-8\">\n");
    html.push_str(&format!("    <title>{title}</title>\n"));
    html.push_str("</head>\n<body>\n");
    html.push_str(&format!("    <h1>{title}</h1>\n"));
    html.push_str("    <hr>\n    <ul>\n");
    for entry in entries {
        let (name, slash) = match entry.strip_suffix('/') {
            Some(n) => (n, "/"),
            None => (entry.as_str(), ""),
        };
        let href = format!("{}{slash}", urlencoding::encode(name));
        html.push_str(&format!(
            "        <li><a href=\"{href}\">{}{slash}</a></li>\n",
            escape_html(name)
        ));
    }
    html.push_str("    </ul>\n    <hr>\n</body>\n</html>\n");
    html
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
