//! HTTP server configuration

use serde::{Deserialize, Serialize};

/// Bind address and CORS settings for the HTTP server.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,

    /// Port to bind to
    pub port: u16,

    /// Origin allowed to make credentialed cross-site requests
    /// (the frontend that carries the refresh cookie)
    pub allowed_origin: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("127.0.0.1"),
            port: 8000,
            allowed_origin: String::from("http://localhost:3000"),
        }
    }
}

impl ServerConfig {
    /// Load the configuration from `SERVER_HOST` / `SERVER_PORT` /
    /// `CORS_ALLOWED_ORIGIN`, falling back to the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: std::env::var("SERVER_HOST").unwrap_or(defaults.host),
            port: std::env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            allowed_origin: std::env::var("CORS_ALLOWED_ORIGIN").unwrap_or(defaults.allowed_origin),
        }
    }

    /// The `host:port` string handed to the HTTP server bind call.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
