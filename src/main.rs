//! Telegram Bot API relay.
//!
//! # Architecture Overview
//!
//! ```text
//!                     ┌─────────────────────────────────────────┐
//!                     │                  RELAY                  │
//!  Client / Telegram  │  ┌────────┐   ┌──────────┐   ┌───────┐  │
//!  ───────────────────┼─▶│  http  │──▶│ routing  │──▶│ relay │──┼──▶ Bot API
//!                     │  │ server │   │ classify │   │handler│  │
//!                     │  └────────┘   └──────────┘   └───┬───┘  │
//!                     │                                  └──────┼──▶ webhook backend
//!                     │                                         │
//!                     │  config · observability · lifecycle     │
//!                     └─────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use telegram_bot_proxy::config::{loader, RelayConfig};
use telegram_bot_proxy::lifecycle::{signals, Shutdown};
use telegram_bot_proxy::observability::logging;
use telegram_bot_proxy::HttpServer;

#[derive(Parser)]
#[command(name = "telegram-bot-proxy")]
#[command(about = "Relay for the Telegram Bot API and webhook updates", long_about = None)]
struct Cli {
    /// TOML configuration file; defaults are used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override listener.bind_address
    #[arg(long)]
    bind: Option<String>,

    /// Override webhook.backend_base_url
    #[arg(long)]
    backend_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => loader::read_config(path)?,
        None => RelayConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }
    if let Some(backend_url) = cli.backend_url {
        config.webhook.backend_base_url = backend_url;
    }
    loader::validate(&config)?;

    logging::init(&config.observability);

    tracing::info!("telegram-bot-proxy v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        max_body_size = config.security.max_body_size,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    shutdown.trigger_on(signals::shutdown_signal());

    let server = HttpServer::new(config)?;
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
