//! Configuration Module
//!
//! Loads service configuration from environment variables.
//!
//! Database settings are not validated here: a missing host, user or
//! database name only surfaces as a store error on the first query.

use std::env;
use std::str::FromStr;

/// Default ceiling on jokes returned by a single request
pub const DEFAULT_MAX_COUNT: usize = 100;

/// MySQL connection settings.
#[derive(Debug, Clone, Default)]
pub struct DatabaseConfig {
    /// `MYSQL_HOST`
    pub host: Option<String>,
    /// `MYSQL_USER`
    pub user: Option<String>,
    /// `MYSQL_PASSWORD`
    pub password: Option<String>,
    /// `MYSQL_DATABASE`
    pub database: Option<String>,
    /// `MYSQL_PORT` (default: 3306)
    pub port: u16,
}

impl DatabaseConfig {
    /// Reads the `MYSQL_*` variables.
    pub fn from_env() -> Self {
        Self {
            host: env_string("MYSQL_HOST"),
            user: env_string("MYSQL_USER"),
            password: env_string("MYSQL_PASSWORD"),
            database: env_string("MYSQL_DATABASE"),
            port: env_parse("MYSQL_PORT", 3306),
        }
    }
}

/// Joke service configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Upper bound on the `count` a single request may ask for
    pub max_count: usize,
    /// Store connection settings
    pub database: DatabaseConfig,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `PORT` - HTTP server port (default: 3000)
    /// - `JOKE_MAX_COUNT` - Ceiling on jokes per request (default: 100, at least 1)
    /// - `MYSQL_HOST`, `MYSQL_USER`, `MYSQL_PASSWORD`, `MYSQL_DATABASE`, `MYSQL_PORT`
    pub fn from_env() -> Self {
        Self {
            server_port: env_parse("PORT", 3000),
            max_count: env_parse("JOKE_MAX_COUNT", DEFAULT_MAX_COUNT).max(1),
            database: DatabaseConfig::from_env(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            max_count: DEFAULT_MAX_COUNT,
            database: DatabaseConfig {
                port: 3306,
                ..DatabaseConfig::default()
            },
        }
    }
}

/// Submission microservice configuration.
#[derive(Debug, Clone)]
pub struct SubmitConfig {
    /// HTTP server port
    pub server_port: u16,
    /// Base URL of the joke service, used once at startup to seed types
    pub jokes_url: String,
}

impl SubmitConfig {
    /// # Environment Variables
    /// - `PORT` - HTTP server port (default: 3002)
    /// - `JOKES_URL` - Joke service base URL (default: http://localhost:3000)
    pub fn from_env() -> Self {
        Self {
            server_port: env_parse("PORT", 3002),
            jokes_url: env_string("JOKES_URL").unwrap_or_else(|| DEFAULT_JOKES_URL.to_string()),
        }
    }
}

impl Default for SubmitConfig {
    fn default() -> Self {
        Self {
            server_port: 3002,
            jokes_url: DEFAULT_JOKES_URL.to_string(),
        }
    }
}

/// Where the joke service listens by default
pub const DEFAULT_JOKES_URL: &str = "http://localhost:3000";

/// Where the submission microservice listens by default
pub const DEFAULT_SUBMIT_URL: &str = "http://localhost:3002";

fn env_string(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}

fn env_parse<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.max_count, 100);
        assert_eq!(config.database.port, 3306);
        assert!(config.database.host.is_none());
    }

    #[test]
    fn test_submit_config_default() {
        let config = SubmitConfig::default();
        assert_eq!(config.server_port, 3002);
        assert_eq!(config.jokes_url, "http://localhost:3000");
    }

    #[test]
    fn test_env_parse_falls_back_on_garbage() {
        env::set_var("JOKE_SERVICE_TEST_PORT", "not-a-port");
        assert_eq!(env_parse("JOKE_SERVICE_TEST_PORT", 1234u16), 1234);

        env::set_var("JOKE_SERVICE_TEST_PORT", "8080");
        assert_eq!(env_parse("JOKE_SERVICE_TEST_PORT", 1234u16), 8080);
        env::remove_var("JOKE_SERVICE_TEST_PORT");
    }

    #[test]
    fn test_max_count_is_at_least_one() {
        env::set_var("JOKE_MAX_COUNT", "0");
        assert_eq!(Config::from_env().max_count, 1);

        env::set_var("JOKE_MAX_COUNT", "25");
        assert_eq!(Config::from_env().max_count, 25);
        env::remove_var("JOKE_MAX_COUNT");
    }

    #[test]
    fn test_env_string_ignores_empty() {
        env::set_var("JOKE_SERVICE_TEST_EMPTY", "");
        assert!(env_string("JOKE_SERVICE_TEST_EMPTY").is_none());
        env::remove_var("JOKE_SERVICE_TEST_EMPTY");
    }
}
