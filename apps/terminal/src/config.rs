//! # Startup Arguments
//!
//! The client takes exactly three positional arguments:
//!
//! ```text
//! emporium <dbname> <port> <user>
//! ```
//!
//! Host and password are conventional extras: host defaults to
//! `localhost`, password to the empty string (override with `--password`
//! or the `EMPORIUM_DB_PASSWORD` environment variable).

use clap::Parser;

use emporium_db::GatewayConfig;

/// Terminal client for the Emporium retail database.
#[derive(Debug, Parser)]
#[command(name = "emporium", version, about)]
pub struct Args {
    /// Name of the database to connect to
    pub dbname: String,

    /// Port the PostgreSQL server listens on
    pub port: u16,

    /// Database login user
    pub user: String,

    /// Database server hostname
    #[arg(long, default_value = "localhost")]
    pub host: String,

    /// Database login password
    #[arg(long, env = "EMPORIUM_DB_PASSWORD", default_value = "", hide_env_values = true)]
    pub password: String,
}

impl Args {
    /// Builds the gateway configuration from the parsed arguments.
    pub fn gateway_config(&self) -> GatewayConfig {
        GatewayConfig::new(&self.dbname, self.port, &self.user)
            .host(&self.host)
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
    fn test_three_positional_arguments() {
        let args = Args::try_parse_from(["emporium", "shop", "5432", "postgres"]).unwrap();
        assert_eq!(args.dbname, "shop");
        assert_eq!(args.port, 5432);
        assert_eq!(args.user, "postgres");
        assert_eq!(args.host, "localhost");
        assert_eq!(args.password, "");
    }

    #[test]
    fn test_missing_arguments_rejected() {
        assert!(Args::try_parse_from(["emporium", "shop", "5432"]).is_err());
        assert!(Args::try_parse_from(["emporium"]).is_err());
    }

    #[test]
    fn test_non_numeric_port_rejected() {
        assert!(Args::try_parse_from(["emporium", "shop", "fivethousand", "postgres"]).is_err());
    }

    #[test]
    fn test_gateway_config_mapping() {
        let args =
            Args::try_parse_from(["emporium", "shop", "5432", "postgres", "--host", "db.lab"])
                .unwrap();
        let config = args.gateway_config();
        assert_eq!(config.database, "shop");
        assert_eq!(config.host, "db.lab");
        assert_eq!(config.url(), "postgres://postgres@db.lab:5432/shop");
    }
}
