//! Serve command implementation
//!
//! This module implements the `userhooks serve` command, which runs the
//! ingress server until Ctrl+C or SIGTERM.

use anyhow::{Context, Result};
use std::net::SocketAddr;
use tokio::signal;
use tracing::info;
use userhooks_adapters::{HttpServer, ServerConfig};

use super::build_router;

/// Arguments for the serve command
pub struct ServeArgs {
    /// Address to bind
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Store path pattern to watch
    pub pattern: String,
}

/// Execute the serve command
pub async fn execute_serve_command(args: ServeArgs) -> Result<()> {
    let listen_addr = parse_listen_address(&args.host, args.port)?;
    let router = build_router(&args.pattern)?;

    println!("🪝 Starting userhooks ingress server...");
    println!("👀 Watching: {}", args.pattern);
    println!("🔌 Listening on: {}", listen_addr);
    println!();

    let server = HttpServer::new(ServerConfig { listen_addr }, router);
    server.run(wait_for_shutdown()).await?;

    info!("Shutdown complete");
    println!("✅ Server stopped");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn wait_for_shutdown() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C"),
        _ = terminate => info!("Received SIGTERM"),
    }
}

/// Parse the bind address with a helpful error message
pub fn parse_listen_address(host: &str, port: u16) -> Result<SocketAddr> {
    format!("{}:{}", host, port).parse().with_context(|| {
        format!(
            "Invalid listen address '{}:{}'. Expected an IP address (e.g., 127.0.0.1)",
            host, port
        )
    })
}
