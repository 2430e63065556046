// Server loop module
// Sequential accept-and-serve: one connection is fully handled before the
// next accept. An interrupt stops the loop even while a connection is in
// flight.

use std::sync::Arc;
use tokio::net::TcpListener;

use super::connection::serve_connection;
use super::signal::ShutdownSignal;
use crate::config::ServerConfig;
use crate::logger;

pub async fn run(
    listener: TcpListener,
    config: Arc<ServerConfig>,
    shutdown: Arc<ShutdownSignal>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        if shutdown.is_requested() {
            break;
        }

        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, _peer_addr)) => {
                        tokio::select! {
                            () = serve_connection(stream, Arc::clone(&config)) => {}
                            () = shutdown.wait() => break,
                        }
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            () = shutdown.wait() => break,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::listener::create_listener;
    use std::path::PathBuf;
    use std::time::Duration;

    fn test_setup() -> (TcpListener, Arc<ServerConfig>, Arc<ShutdownSignal>) {
        let listener = create_listener("127.0.0.1:0".parse().unwrap()).unwrap();
        let config = Arc::new(ServerConfig::new(PathBuf::from(".")));
        let shutdown = Arc::new(ShutdownSignal::new());
        (listener, config, shutdown)
    }

    #[tokio::test]
    async fn test_loop_exits_when_shutdown_already_requested() {
        let (listener, config, shutdown) = test_setup();
        shutdown.trigger();

        let result = tokio::time::timeout(Duration::from_secs(1), run(listener, config, shutdown))
            .await
            .expect("accept loop did not stop after shutdown");
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_interrupt_stops_running_loop() {
        let (listener, config, shutdown) = test_setup();

        let trigger = Arc::clone(&shutdown);
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            trigger.trigger();
        });

        let result = tokio::time::timeout(Duration::from_secs(1), run(listener, config, shutdown))
            .await
            .expect("accept loop did not stop after shutdown");
        assert!(result.is_ok());
    }
}
