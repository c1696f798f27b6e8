//! # Gateway Configuration
//!
//! Connection parameters for the PostgreSQL server.
//!
//! The terminal client receives database name, port and user as positional
//! startup arguments; host and password have conventional defaults
//! (`localhost`, empty password).

use sqlx::postgres::PgConnectOptions;

/// Connection parameters for [`crate::Gateway`].
///
/// ## Example
/// ```rust
/// use emporium_db::GatewayConfig;
///
/// let config = GatewayConfig::new("emporium", 5432, "postgres")
///     .host("db.internal")
///     .password("secret");
/// assert_eq!(config.url(), "postgres://postgres@db.internal:5432/emporium");
/// ```
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Server hostname. Default: `localhost`.
    pub host: String,

    /// Server port.
    pub port: u16,

    /// Database name.
    pub database: String,

    /// Login user.
    pub user: String,

    /// Login password. Default: empty.
    pub password: String,
}

impl GatewayConfig {
    /// Creates a configuration from the three startup arguments.
    pub fn new(database: impl Into<String>, port: u16, user: impl Into<String>) -> Self {
        GatewayConfig {
            host: "localhost".to_string(),
            port,
            database: database.into(),
            user: user.into(),
            password: String::new(),
        }
    }

    /// Sets the server hostname.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Sets the login password.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// The connection URL, without credentials beyond the user name.
    ///
    /// Used for startup logging; the password never appears.
    pub fn url(&self) -> String {
        format!(
            "postgres://{}@{}:{}/{}",
            self.user, self.host, self.port, self.database
        )
    }

    /// Builds sqlx connect options from these parameters.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.database)
            .username(&self.user)
            .password(&self.password)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GatewayConfig::new("emporium", 5432, "postgres");
        assert_eq!(config.host, "localhost");
        assert_eq!(config.password, "");
    }

    #[test]
    fn test_builder() {
        let config = GatewayConfig::new("emporium", 6543, "app")
            .host("db.internal")
            .password("secret");
        assert_eq!(config.host, "db.internal");
        assert_eq!(config.port, 6543);
        assert_eq!(config.password, "secret");
    }

    #[test]
    fn test_url_omits_password() {
        let config = GatewayConfig::new("emporium", 5432, "postgres").password("secret");
        assert!(!config.url().contains("secret"));
    }
}
