//! Static file serving module
//!
//! Maps request paths onto the serving root and builds the file, listing,
//! redirect, or not-found response.

use crate::config::ServerConfig;
use crate::handler::listing;
use crate::handler::router::RequestContext;
use crate::http::{self, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Outcome of resolving a request path against the root directory
#[derive(Debug, PartialEq, Eq)]
pub enum Resolved {
    File(PathBuf),
    Listing(PathBuf),
    Redirect(String),
    NotFound,
}

/// Serve a request path from the configured root
pub async fn serve(ctx: &RequestContext<'_>, config: &ServerConfig) -> Response<Full<Bytes>> {
    match resolve_path(&config.root, ctx.path, &config.index_files) {
        Resolved::File(file_path) => serve_file(ctx, &file_path).await,
        Resolved::Listing(dir_path) => listing::serve_listing(ctx, &dir_path).await,
        Resolved::Redirect(target) => http::build_redirect_response(&target),
        Resolved::NotFound => http::build_404_response(),
    }
}

/// Map a request path onto the filesystem under `root`.
///
/// Percent-encoded paths are decoded first. The resolved path is
/// canonicalized and must stay under the root; anything that escapes it is
/// treated as not found. Directory paths without a trailing slash redirect so
/// relative links in the listing resolve correctly.
pub fn resolve_path(root: &Path, request_path: &str, index_files: &[String]) -> Resolved {
    let decoded = urlencoding::decode(request_path)
        .map(std::borrow::Cow::into_owned)
        .unwrap_or_else(|_| request_path.to_string());
    let relative = decoded.trim_start_matches('/');

    let root_canonical = match root.canonicalize() {
        Ok(p) => p,
        Err(e) => {
            logger::log_warning(&format!(
                "Serving root not found or inaccessible '{}': {e}",
                root.display()
            ));
            return Resolved::NotFound;
        }
    };

    // File not found is the common case (404), not worth logging
    let Ok(canonical) = root_canonical.join(relative).canonicalize() else {
        return Resolved::NotFound;
    };
    if !canonical.starts_with(&root_canonical) {
        logger::log_warning(&format!("Path traversal attempt blocked: {request_path}"));
        return Resolved::NotFound;
    }

    if canonical.is_dir() {
        if !decoded.ends_with('/') {
            return Resolved::Redirect(format!("{request_path}/"));
        }
        for index in index_files {
            let index_path = canonical.join(index);
            if index_path.is_file() {
                return Resolved::File(index_path);
            }
        }
        return Resolved::Listing(canonical);
    }

    Resolved::File(canonical)
}

/// Read a file and build the 200 response
async fn serve_file(ctx: &RequestContext<'_>, file_path: &Path) -> Response<Full<Bytes>> {
    let content = match fs::read(file_path).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read file '{}': {}",
                file_path.display(),
                e
            ));
            return http::build_404_response();
        }
    };

    let content_type = mime::get_content_type(file_path.extension().and_then(|e| e.to_str()));
    http::build_file_response(content, content_type, ctx.is_head)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as std_fs;

    fn test_root(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "glide_serve_static_{}_{name}",
            std::process::id()
        ));
        let _ = std_fs::remove_dir_all(&dir);
        std_fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn index_files() -> Vec<String> {
        vec!["index.html".to_string(), "index.htm".to_string()]
    }

    #[test]
    fn test_resolve_existing_file() {
        let root = test_root("file");
        std_fs::write(root.join("app.js"), b"console.log(1)").unwrap();

        let resolved = resolve_path(&root, "/app.js", &index_files());
        assert_eq!(resolved, Resolved::File(root.canonicalize().unwrap().join("app.js")));
    }

    #[test]
    fn test_resolve_missing_file() {
        let root = test_root("missing");
        assert_eq!(resolve_path(&root, "/nope.txt", &index_files()), Resolved::NotFound);
    }

    #[test]
    fn test_directory_without_slash_redirects() {
        let root = test_root("redirect");
        std_fs::create_dir(root.join("assets")).unwrap();

        let resolved = resolve_path(&root, "/assets", &index_files());
        assert_eq!(resolved, Resolved::Redirect("/assets/".to_string()));
    }

    #[test]
    fn test_directory_with_index_serves_index() {
        let root = test_root("index");
        std_fs::create_dir(root.join("docs")).unwrap();
        std_fs::write(root.join("docs/index.html"), b"<html></html>").unwrap();

        let resolved = resolve_path(&root, "/docs/", &index_files());
        assert_eq!(
            resolved,
            Resolved::File(root.canonicalize().unwrap().join("docs/index.html"))
        );
    }

    #[test]
    fn test_directory_without_index_lists() {
        let root = test_root("listing");
        std_fs::create_dir(root.join("media")).unwrap();

        let resolved = resolve_path(&root, "/media/", &index_files());
        assert_eq!(
            resolved,
            Resolved::Listing(root.canonicalize().unwrap().join("media"))
        );
    }

    #[test]
    fn test_root_path_without_index_lists_root() {
        let root = test_root("rootdir");
        let resolved = resolve_path(&root, "/", &index_files());
        assert_eq!(resolved, Resolved::Listing(root.canonicalize().unwrap()));
    }

    #[test]
    fn test_traversal_is_blocked() {
        let root = test_root("traversal");
        // A sibling file outside the root must stay unreachable
        std_fs::write(root.parent().unwrap().join("secret.txt"), b"secret").unwrap();

        assert_eq!(
            resolve_path(&root, "/../secret.txt", &index_files()),
            Resolved::NotFound
        );
        assert_eq!(
            resolve_path(&root, "/%2e%2e/secret.txt", &index_files()),
            Resolved::NotFound
        );
    }

    #[test]
    fn test_percent_encoded_path_is_decoded() {
        let root = test_root("encoded");
        std_fs::write(root.join("my book.txt"), b"text").unwrap();

        let resolved = resolve_path(&root, "/my%20book.txt", &index_files());
        assert_eq!(
            resolved,
            Resolved::File(root.canonicalize().unwrap().join("my book.txt"))
        );
    }
}
