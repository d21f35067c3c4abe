//! SwiftCafe server
//!
//! Reads `$SWIFTCAFE_CONFIG` or `~/.config/swiftcafe/config.toml`; a missing
//! file means defaults. See the `swiftcafe-server` binary for CLI overrides.

use tracing::{info, warn};

use swiftcafe::config::{default_config_path, AppConfig};
use swiftcafe::server::{init_tracing, ServerHandle, ServerOptions};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = default_config_path();
    let loaded = AppConfig::load(&config_path);
    let config = loaded.as_ref().cloned().unwrap_or_default();

    init_tracing(&config);
    match loaded {
        Ok(_) => info!("Configuration loaded from {}", config_path.display()),
        Err(e) => warn!("Failed to load config: {}. Using defaults.", e),
    }

    let handle = ServerHandle::start(ServerOptions {
        config,
        ..Default::default()
    })
    .await?;

    handle.install_signal_handler();
    handle.wait().await;
    Ok(())
}
