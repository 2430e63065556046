use std::sync::Arc;

mod config;
mod handler;
mod http;
mod logger;
mod server;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let root = config::ServerConfig::binary_dir()?;
    let cfg = config::ServerConfig::new(root);

    // Single-threaded runtime: connections are served one at a time
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.socket_addr()?;

    // Bind failure (port already in use) propagates and aborts startup
    let listener = server::create_listener(addr)?;

    let shutdown = Arc::new(server::signal::ShutdownSignal::new());
    server::signal::start_signal_handler(Arc::clone(&shutdown));

    logger::log_server_start(cfg.port, &cfg.root);

    server::run(listener, Arc::new(cfg), shutdown).await?;

    logger::log_shutdown();
    Ok(())
}
