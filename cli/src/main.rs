//! SwiftCafe server CLI
//!
//! ```sh
//! # Default config (~/.config/swiftcafe/config.toml)
//! swiftcafe-server
//!
//! # Custom config path and port
//! swiftcafe-server --config /etc/swiftcafe/config.toml --port 8080
//!
//! # Validate config without starting
//! swiftcafe-server --check
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::{info, warn};

use swiftcafe::config::AppConfig;
use swiftcafe::server::{init_tracing, ServerHandle, ServerOptions};

#[derive(Parser, Debug)]
#[command(
    name = "swiftcafe-server",
    version,
    about = "Café table booking and food ordering server",
    long_about = "SwiftCafe HTTP server: table booking, menu cart, UPI payment \
                  and admin dashboard.\n\n\
                  Default config: ~/.config/swiftcafe/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "SWIFTCAFE_CONFIG")]
    config: Option<PathBuf>,

    /// Override the HTTP listen port.
    #[arg(short, long)]
    port: Option<u16>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration file and exit without starting the server.
    #[arg(long)]
    check: bool,

    /// Skip database migrations on startup.
    #[arg(long)]
    no_migrate: bool,

    /// Skip creating the default admin account.
    #[arg(long)]
    no_admin: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(swiftcafe::default_config_path);

    let (mut config, load_error) = match AppConfig::load(&config_path) {
        Ok(cfg) => (cfg, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }

    if cli.check {
        if let Some(e) = load_error {
            eprintln!("Invalid configuration {}: {}", config_path.display(), e);
            std::process::exit(1);
        }
        println!("Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   Address     : {}", config.server.address());
        println!("   Database    : {}", config.database.connection_url());
        println!("   Log level   : {}", config.logging.level);
        println!("   Table price : {}", config.payment.table_price);
        return Ok(());
    }

    init_tracing(&config);
    match load_error {
        None => info!("Configuration loaded from {}", config_path.display()),
        Some(e) => warn!(
            "Failed to load config from {}: {}. Using defaults.",
            config_path.display(),
            e
        ),
    }

    let handle = ServerHandle::start(ServerOptions {
        config,
        auto_migrate: !cli.no_migrate,
        create_default_admin: !cli.no_admin,
    })
    .await?;

    handle.install_signal_handler();
    info!("Press Ctrl+C to shutdown gracefully.");

    handle.wait().await;

    Ok(())
}
