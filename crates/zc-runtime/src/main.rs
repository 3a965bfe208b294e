//! # z-chain Service Runtime
//!
//! The main entry point for the z-chain conversion service.
//!
//! ## Startup Sequence
//!
//! 1. Initialize logging
//! 2. Load configuration from environment
//! 3. Load RSA keys (generated on first run)
//! 4. Open the history store and unseal any sealed history
//! 5. Serve the HTTP gateway until SIGINT/SIGTERM
//! 6. Seal the history before exit
//!
//! The history file is plaintext only while the process runs; between runs
//! it lives RSA-sealed on disk.

use std::net::IpAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use parking_lot::Mutex;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use zc_crypto::RsaKeyPair;
use zc_gateway::{GatewayConfig, GatewayService, SharedHistoryStore};
use zc_history::FileHistoryStore;

/// Runtime configuration, resolved from the environment.
struct RuntimeConfig {
    gateway: GatewayConfig,
    data_dir: PathBuf,
}

impl RuntimeConfig {
    fn history_path(&self) -> PathBuf {
        self.data_dir.join("history.jsonl")
    }

    fn sealed_path(&self) -> PathBuf {
        self.data_dir.join("history.enc")
    }

    fn private_key_path(&self) -> PathBuf {
        self.data_dir.join("private.pem")
    }

    fn public_key_path(&self) -> PathBuf {
        self.data_dir.join("public.pem")
    }
}

/// Load configuration from environment variables, with defaults.
fn load_config() -> RuntimeConfig {
    let mut gateway = GatewayConfig::default();

    if let Ok(host) = std::env::var("ZC_HOST") {
        match host.parse::<IpAddr>() {
            Ok(h) => gateway.host = h,
            Err(_) => warn!(host = %host, "ZC_HOST is not a valid IP address, keeping default"),
        }
    }
    if let Ok(port) = std::env::var("ZC_PORT") {
        match port.parse() {
            Ok(p) => gateway.port = p,
            Err(_) => warn!(port = %port, "ZC_PORT is not a valid port, keeping default"),
        }
    }

    let data_dir = std::env::var("ZC_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data"));

    RuntimeConfig { gateway, data_dir }
}

/// Resolve on SIGINT (Ctrl+C) or, on Unix, SIGTERM.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        let mut sigterm =
            match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
                Ok(s) => s,
                Err(e) => {
                    error!(error = %e, "failed to install SIGTERM handler");
                    if let Err(e) = tokio::signal::ctrl_c().await {
                        error!(error = %e, "failed to listen for Ctrl+C");
                    }
                    return;
                }
            };

        tokio::select! {
            r = tokio::signal::ctrl_c() => {
                if let Err(e) = r {
                    error!(error = %e, "failed to listen for Ctrl+C");
                }
            }
            _ = sigterm.recv() => {}
        }
    }

    #[cfg(not(unix))]
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for Ctrl+C");
    }

    info!("Shutting down server...");
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    // Load configuration
    let config = load_config();

    // Load RSA keys (generated and persisted on first run)
    let keys = RsaKeyPair::load_or_generate(&config.private_key_path(), &config.public_key_path())
        .context("loading RSA keys")?;
    info!("RSA keys ready");

    // Open the history store and restore any sealed history
    let mut store =
        FileHistoryStore::open(config.history_path()).context("opening history store")?;
    match zc_history::unseal(&config.sealed_path(), keys.private(), &mut store) {
        Ok(0) => {}
        Ok(n) => info!(records = n, "sealed history restored"),
        Err(e) => warn!(error = %e, "failed to unseal history, continuing without it"),
    }

    let history: SharedHistoryStore = Arc::new(Mutex::new(store));

    // Serve until a shutdown signal arrives
    let service = GatewayService::new(config.gateway.clone(), Arc::clone(&history))
        .context("creating gateway")?;
    service.serve(shutdown_signal()).await?;

    // Seal the history before exit
    let mut guard = history.lock();
    match zc_history::seal(&mut *guard, keys.public(), &config.sealed_path()) {
        Ok(n) => info!(records = n, "history sealed for shutdown"),
        Err(e) => error!(error = %e, "failed to seal history on shutdown"),
    }

    Ok(())
}
