use std::env;
use std::path::PathBuf;

use clap::Parser;

const DEFAULT_DATABASE_URL: &str = "postgresql://localhost/growth_db";
const DEFAULT_API_BASE_URL: &str = "http://localhost:5001";

/// Reporting API configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub database_max_connections: u32,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            database_max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .unwrap_or(10),
            host: env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("BACKEND_PORT")
                .unwrap_or_else(|_| "5001".to_string())
                .parse()
                .unwrap_or(5001),
        }
    }
}

/// Dashboard UI configuration: where to reach the API and where to listen.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub api_base_url: String,
    pub host: String,
    pub port: u16,
}

impl DashboardConfig {
    pub fn from_env() -> Self {
        Self {
            api_base_url: env::var("API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()),
            host: env::var("DASHBOARD_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("DASHBOARD_PORT")
                .unwrap_or_else(|_| "5173".to_string())
                .parse()
                .unwrap_or(5173),
        }
    }
}

/// Command line of the `seed` tool.
#[derive(Debug, Clone, PartialEq, Parser)]
#[command(name = "seed")]
#[command(about = "Load development data into the users and orders tables")]
pub struct SeedArgs {
    /// CSV file with header `user_id,country,amount,order_date`; the built-in
    /// sample dataset is loaded when omitted
    pub csv: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_args_optional_csv_path() {
        let args = SeedArgs::try_parse_from(["seed"]).unwrap();
        assert_eq!(args.csv, None);

        let args = SeedArgs::try_parse_from(["seed", "data/orders.csv"]).unwrap();
        assert_eq!(args.csv, Some(PathBuf::from("data/orders.csv")));
    }

    #[test]
    fn seed_args_reject_extra_arguments() {
        assert!(SeedArgs::try_parse_from(["seed", "a.csv", "b.csv"]).is_err());
        assert!(SeedArgs::try_parse_from(["seed", "--unknown"]).is_err());
    }

    // Env vars are process-global; keep every mutation in this one test.
    #[test]
    fn defaults_and_fallbacks() {
        for key in [
            "DATABASE_URL",
            "DATABASE_MAX_CONNECTIONS",
            "BACKEND_HOST",
            "BACKEND_PORT",
            "API_BASE_URL",
            "DASHBOARD_HOST",
            "DASHBOARD_PORT",
        ] {
            env::remove_var(key);
        }

        let config = AppConfig::from_env();
        assert_eq!(config.database_url, "postgresql://localhost/growth_db");
        assert_eq!(config.database_max_connections, 10);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 5001);

        let dashboard = DashboardConfig::from_env();
        assert_eq!(dashboard.api_base_url, "http://localhost:5001");
        assert_eq!(dashboard.port, 5173);

        env::set_var("BACKEND_PORT", "not-a-port");
        env::set_var("DATABASE_MAX_CONNECTIONS", "4");
        let config = AppConfig::from_env();
        assert_eq!(config.port, 5001);
        assert_eq!(config.database_max_connections, 4);

        env::remove_var("BACKEND_PORT");
        env::remove_var("DATABASE_MAX_CONNECTIONS");
    }
}
