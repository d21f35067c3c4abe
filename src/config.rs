//! Application configuration
//!
//! Loaded from a TOML file; every section and field has a default so a
//! partial file is valid.
//!
//! ```toml
//! [server]
//! port = 5000
//!
//! [payment]
//! upi_id = "swiftcafe@oksbi"
//! table_price = 500
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::application::AdminSeed;
use crate::infrastructure::payment::UpiConfig;
use crate::infrastructure::DatabaseConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// `$SWIFTCAFE_CONFIG`, or `~/.config/swiftcafe/config.toml`
pub fn default_config_path() -> PathBuf {
    if let Ok(path) = std::env::var("SWIFTCAFE_CONFIG") {
        return PathBuf::from(path);
    }
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("swiftcafe")
        .join("config.toml")
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseSection,
    pub logging: LoggingConfig,
    pub session: SessionConfig,
    pub payment: PaymentConfig,
    pub admin: AdminConfig,
    pub auth: AuthConfig,
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }
}

// ── Sections ────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Seconds to wait for in-flight requests on shutdown
    pub shutdown_timeout: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            shutdown_timeout: 30,
        }
    }
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSection {
    /// Full connection URL; takes precedence over `path`
    pub url: Option<String>,
    /// SQLite file path
    pub path: String,
    pub max_connections: u32,
}

impl Default for DatabaseSection {
    fn default() -> Self {
        Self {
            url: None,
            path: "./swiftcafe.db".to_string(),
            max_connections: 10,
        }
    }
}

impl DatabaseSection {
    pub fn connection_url(&self) -> String {
        match &self.url {
            Some(url) => url.clone(),
            None => format!("sqlite://{}?mode=rwc", self.path),
        }
    }

    pub fn to_database_config(&self) -> DatabaseConfig {
        DatabaseConfig {
            url: self.connection_url(),
            max_connections: self.max_connections,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// trace, debug, info, warn, error
    pub level: String,
    /// "text" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Inactivity after which a session is dropped
    pub expiry_minutes: i64,
    pub secure_cookie: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            expiry_minutes: 120,
            secure_cookie: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentConfig {
    pub upi_id: String,
    pub payee_name: String,
    pub currency: String,
    /// Table reservation fee in rupees
    pub table_price: i64,
}

impl Default for PaymentConfig {
    fn default() -> Self {
        let upi = UpiConfig::default();
        Self {
            upi_id: upi.upi_id,
            payee_name: upi.payee_name,
            currency: upi.currency,
            table_price: 500,
        }
    }
}

impl PaymentConfig {
    pub fn upi(&self) -> UpiConfig {
        UpiConfig {
            upi_id: self.upi_id.clone(),
            payee_name: self.payee_name.clone(),
            currency: self.currency.clone(),
        }
    }
}

/// Account created on first start when no admin exists
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    pub username: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            username: "admin".to_string(),
            name: "Cafe Admin".to_string(),
            email: "admin@swiftcafe.local".to_string(),
            phone: "0000000000".to_string(),
            password: "admin123".to_string(),
        }
    }
}

impl AdminConfig {
    pub fn seed(&self) -> AdminSeed {
        AdminSeed {
            username: self.username.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            password: self.password.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Accept `role = "admin"` on the public registration endpoint;
    /// turn off to allow only the seeded admin
    pub allow_admin_signup: bool,
    pub bcrypt_cost: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            allow_admin_signup: true,
            bcrypt_cost: crate::infrastructure::crypto::DEFAULT_COST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_fills_defaults() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [server]
            port = 8080

            [payment]
            table_price = 750
            "#,
        )
        .unwrap();

        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.payment.table_price, 750);
        assert_eq!(cfg.payment.currency, "INR");
        assert_eq!(cfg.logging.level, "info");
        assert!(cfg.auth.allow_admin_signup);
    }

    #[test]
    fn database_url_precedence() {
        let mut db = DatabaseSection::default();
        assert_eq!(db.connection_url(), "sqlite://./swiftcafe.db?mode=rwc");
        db.url = Some("sqlite::memory:".into());
        assert_eq!(db.connection_url(), "sqlite::memory:");
    }

    #[test]
    fn load_from_file() {
        let path = std::env::temp_dir().join(format!("swiftcafe-cfg-{}.toml", uuid::Uuid::new_v4()));
        std::fs::write(&path, "[session]\nexpiry_minutes = 15\n").unwrap();

        let loaded = AppConfig::load(&path).unwrap();
        assert_eq!(loaded.session.expiry_minutes, 15);
        std::fs::remove_file(&path).ok();

        assert!(matches!(AppConfig::load(&path), Err(ConfigError::Io(_))));
    }
}
