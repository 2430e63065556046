//! Request dispatch module
//!
//! Entry point for HTTP request processing: method validation, static file
//! dispatch, and the CORS decoration applied to every outgoing response.

use crate::config::ServerConfig;
use crate::handler::static_files;
use crate::http::{self, cors};
use crate::logger;
use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

/// Request context encapsulating what file serving needs to know
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub is_head: bool,
}

/// Main entry point for HTTP request handling
pub async fn handle_request<B>(
    req: Request<B>,
    config: Arc<ServerConfig>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method();
    let path = req.uri().path();
    logger::log_request(method, req.uri());

    let response = match check_http_method(method) {
        Some(early) => early,
        None => {
            let ctx = RequestContext {
                path,
                is_head: *method == Method::HEAD,
            };
            static_files::serve(&ctx, &config).await
        }
    };

    logger::log_response(response.status().as_u16(), response_size(&response));

    // Every response passes through the CORS decorator before it is written.
    Ok(cors::apply(response))
}

/// Exact body size of a fully buffered response
fn response_size(response: &Response<Full<Bytes>>) -> u64 {
    response.body().size_hint().exact().unwrap_or(0)
}

/// Check HTTP method and return an early response for non-GET/HEAD methods
fn check_http_method(method: &Method) -> Option<Response<Full<Bytes>>> {
    match method {
        &Method::GET | &Method::HEAD => None,
        &Method::OPTIONS => Some(http::build_options_response()),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_405_response())
        }
    }
}
