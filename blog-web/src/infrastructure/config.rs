//! Process configuration read from the environment (and `.env`).

use anyhow::{Context, Result};
use std::env;

pub const MEMORY_DATABASE_URL: &str = "memory://";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub database_max_connections: u32,
    pub http_host: String,
    pub http_port: u16,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// `DATABASE_URL` is required. `HTTP_HOST`, `HTTP_PORT` and
    /// `DATABASE_MAX_CONNECTIONS` fall back to `0.0.0.0`, `3000` and `5`.
    pub fn from_env() -> Result<Self> {
        let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

        let http_host = env::var("HTTP_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let http_port = parse_var("HTTP_PORT", 3000)?;
        let database_max_connections = parse_var("DATABASE_MAX_CONNECTIONS", 5)?;

        Ok(Self {
            database_url,
            database_max_connections,
            http_host,
            http_port,
        })
    }

    pub fn http_addr(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }
}

fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} has an invalid value: {:?}", name, raw)),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear() {
        for name in [
            "DATABASE_URL",
            "DATABASE_MAX_CONNECTIONS",
            "HTTP_HOST",
            "HTTP_PORT",
        ] {
            env::remove_var(name);
        }
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear();
        env::set_var("DATABASE_URL", "postgres://localhost/blog");

        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.database_url, "postgres://localhost/blog");
        assert_eq!(config.database_max_connections, 5);
        assert_eq!(config.http_addr(), "0.0.0.0:3000");
        clear();
    }

    #[test]
    #[serial]
    fn test_database_url_is_required() {
        clear();
        let err = AppConfig::from_env().unwrap_err();
        assert!(err.to_string().contains("DATABASE_URL"));
    }

    #[test]
    #[serial]
    fn test_rejects_bad_port() {
        clear();
        env::set_var("DATABASE_URL", MEMORY_DATABASE_URL);
        env::set_var("HTTP_PORT", "not-a-port");

        let err = AppConfig::from_env().unwrap_err();
        assert!(err.to_string().contains("HTTP_PORT"));
        clear();
    }

    #[test]
    #[serial]
    fn test_overrides() {
        clear();
        env::set_var("DATABASE_URL", MEMORY_DATABASE_URL);
        env::set_var("HTTP_HOST", "127.0.0.1");
        env::set_var("HTTP_PORT", "8080");
        env::set_var("DATABASE_MAX_CONNECTIONS", "12");

        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.http_addr(), "127.0.0.1:8080");
        assert_eq!(config.database_max_connections, 12);
        clear();
    }
}
