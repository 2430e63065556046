// Connection handling module

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use std::sync::Arc;
use tokio::net::TcpStream;

use crate::config::ServerConfig;
use crate::handler;
use crate::logger;

/// Serve one connection to completion on the current task.
///
/// Keep-alive is disabled: with sequential serving, a browser holding an idle
/// connection open would stall every other client.
pub async fn serve_connection(stream: TcpStream, config: Arc<ServerConfig>) {
    let io = TokioIo::new(stream);

    let conn = http1::Builder::new()
        .keep_alive(false)
        .serve_connection(
            io,
            service_fn(move |req| {
                let config = Arc::clone(&config);
                async move { handler::handle_request(req, config).await }
            }),
        );

    if let Err(err) = conn.await {
        logger::log_connection_error(&err);
    }
}
