//! Reusable server runtime
//!
//! [`ServerHandle`] owns the whole lifecycle: metrics recorder, database
//! connection and migrations, default admin account, HTTP listener and
//! graceful shutdown.

use std::sync::OnceLock;
use std::time::Duration;

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use tracing::{error, info, warn};

use crate::config::AppConfig;
use crate::infrastructure::database::migrator::Migrator;
use crate::infrastructure::init_database;
use crate::interfaces::http::{create_router, AppState};
use crate::shared::shutdown::{ShutdownCoordinator, ShutdownSignal};

// ── Options ────────────────────────────────────────────────────────

pub struct ServerOptions {
    pub config: AppConfig,
    /// Run database migrations on startup (default: true).
    pub auto_migrate: bool,
    /// Create the configured admin account if no admin exists (default: true).
    pub create_default_admin: bool,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            config: AppConfig::default(),
            auto_migrate: true,
            create_default_admin: true,
        }
    }
}

// ── ServerHandle ───────────────────────────────────────────────────

/// Handle to a running server.
///
/// ```rust,no_run
/// use swiftcafe::server::{ServerHandle, ServerOptions};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let handle = ServerHandle::start(ServerOptions::default()).await?;
///     handle.install_signal_handler();
///     handle.wait().await;
///     Ok(())
/// }
/// ```
pub struct ServerHandle {
    /// The configuration the server was started with.
    pub config: AppConfig,
    /// Port the HTTP listener is bound to.
    pub port: u16,

    db: DatabaseConnection,
    shutdown: ShutdownCoordinator,
    http_task: tokio::task::JoinHandle<()>,
}

impl ServerHandle {
    pub async fn start(opts: ServerOptions) -> Result<Self, Box<dyn std::error::Error>> {
        let app_cfg = opts.config;

        info!("Starting SwiftCafe...");

        let prometheus_handle = prometheus_handle();

        // ── Database ───────────────────────────────────────────
        let db_config = app_cfg.database.to_database_config();
        let db = init_database(&db_config).await?;

        if opts.auto_migrate {
            info!("Running database migrations...");
            Migrator::up(&db, None).await?;
            info!("Migrations completed");
        }

        let state = AppState::new(db.clone(), &app_cfg);

        if opts.create_default_admin {
            match state.accounts.ensure_admin(&app_cfg.admin.seed()).await {
                Ok(true) => warn!(
                    email = %app_cfg.admin.email,
                    "Default admin created; change its password"
                ),
                Ok(false) => {}
                Err(e) => error!(error = %e, "Failed to create default admin"),
            }
        }

        // ── HTTP server ────────────────────────────────────────
        let shutdown = ShutdownCoordinator::new(app_cfg.server.shutdown_timeout);
        let router = create_router(state, &app_cfg.session, prometheus_handle);

        let addr = app_cfg.server.address();
        let listener = tokio::net::TcpListener::bind(&addr).await?;
        let port = listener.local_addr()?.port();
        info!("HTTP server listening on http://{}", addr);
        info!("Swagger UI available at http://{}/docs/", addr);

        let http_shutdown = shutdown.signal();
        let http_server = axum::serve(
            listener,
            router.into_make_service_with_connect_info::<std::net::SocketAddr>(),
        )
        .with_graceful_shutdown(async move {
            http_shutdown.wait().await;
            info!("HTTP server received shutdown signal");
        });

        let http_task = tokio::spawn(async move {
            if let Err(e) = http_server.await {
                error!("HTTP server error: {}", e);
            }
        });

        Ok(Self {
            config: app_cfg,
            port,
            db,
            shutdown,
            http_task,
        })
    }

    pub fn shutdown_signal(&self) -> ShutdownSignal {
        self.shutdown.signal()
    }

    /// Trigger shutdown on SIGTERM / SIGINT.
    pub fn install_signal_handler(&self) {
        self.shutdown.start_signal_listener();
    }

    /// Send the shutdown signal without waiting.
    pub fn trigger_shutdown(&self) {
        self.shutdown.signal().trigger();
    }

    /// Wait for the HTTP task to stop, then close the database.
    ///
    /// In-flight requests get `server.shutdown_timeout` seconds once
    /// shutdown has been triggered.
    pub async fn wait(self) {
        let signal = self.shutdown.signal();
        let timeout = Duration::from_secs(self.shutdown.timeout_secs());
        let mut http_task = self.http_task;

        tokio::select! {
            result = &mut http_task => log_join(result),
            _ = signal.wait() => {
                info!("Waiting up to {}s for in-flight requests...", timeout.as_secs());
                match tokio::time::timeout(timeout, &mut http_task).await {
                    Ok(result) => log_join(result),
                    Err(_) => {
                        warn!("Shutdown timeout elapsed; aborting HTTP server");
                        http_task.abort();
                    }
                }
            }
        }

        if let Err(e) = self.db.close().await {
            warn!("Error closing database connection: {}", e);
        } else {
            info!("Database connection closed");
        }

        info!("SwiftCafe shutdown complete");
    }

    /// Trigger shutdown and wait for completion.
    pub async fn shutdown(self) {
        info!("Shutting down SwiftCafe...");
        self.trigger_shutdown();
        self.wait().await;
    }

    pub fn is_running(&self) -> bool {
        !self.http_task.is_finished()
    }
}

fn log_join(result: Result<(), tokio::task::JoinError>) {
    match result {
        Ok(()) => info!("HTTP server stopped"),
        Err(e) => error!("HTTP server task panicked: {}", e),
    }
}

/// The global recorder can be installed once per process; later starts reuse it.
fn prometheus_handle() -> Option<PrometheusHandle> {
    static PROM_HANDLE: OnceLock<Option<PrometheusHandle>> = OnceLock::new();

    PROM_HANDLE
        .get_or_init(|| match PrometheusBuilder::new().install_recorder() {
            Ok(handle) => {
                info!("Prometheus metrics recorder installed");
                Some(handle)
            }
            Err(e) => {
                warn!(error = %e, "Metrics disabled: recorder could not be installed");
                None
            }
        })
        .clone()
}

/// Initialize tracing from the logging section.
///
/// `RUST_LOG` overrides `logging.level`. Call once, before [`ServerHandle::start`].
pub fn init_tracing(config: &AppConfig) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level));

    match config.logging.format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }
}
