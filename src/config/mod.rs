use std::env;
use std::time::Duration;

use thiserror::Error;

use crate::fetcher::{DEFAULT_FETCH_TIMEOUT, DEFAULT_USER_AGENT};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{name} must be a valid {expected}, got {value:?}")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

#[derive(Clone, Debug)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub is_dev: bool,
    /// When set, callers must present this key as `code` or `x-functions-key`.
    pub function_key: Option<String>,
    pub fetch_timeout: Duration,
    pub user_agent: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let server_port = match env::var("SERVER_PORT") {
            Ok(v) => v.parse().map_err(|_| ConfigError::Invalid {
                name: "SERVER_PORT",
                expected: "port number",
                value: v,
            })?,
            Err(_) => 7071,
        };

        let fetch_timeout = match env::var("FETCH_TIMEOUT_SECS") {
            Ok(v) => v
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| ConfigError::Invalid {
                    name: "FETCH_TIMEOUT_SECS",
                    expected: "number of seconds",
                    value: v,
                })?,
            Err(_) => DEFAULT_FETCH_TIMEOUT,
        };

        Ok(Config {
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            server_port,
            is_dev: env::var("APP_ENV").as_deref() != Ok("production"),
            function_key: env::var("FUNCTION_KEY").ok().filter(|k| !k.is_empty()),
            fetch_timeout,
            user_agent: env::var("FETCH_USER_AGENT")
                .unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string()),
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
