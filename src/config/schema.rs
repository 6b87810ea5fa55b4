//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the site server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct SiteConfig {
    /// Listener configuration (bind host and port).
    pub listener: ListenerConfig,

    /// Static content settings.
    pub content: ContentConfig,

    /// Contact endpoint settings.
    pub contact: ContactConfig,

    /// Per-client rate limiting for the contact endpoint.
    pub rate_limit: RateLimitConfig,
}

impl SiteConfig {
    /// Address string suitable for `TcpListener::bind`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.listener.host, self.listener.port)
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Host to bind (e.g., "127.0.0.1").
    pub host: String,

    /// Port to bind.
    pub port: u16,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

/// Static content configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Site root directory served to clients.
    pub public_dir: String,

    /// Document served for unresolved paths, relative to `public_dir`.
    /// Falls back to a plain-text 404 when the file does not exist.
    pub not_found_page: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            public_dir: "public".to_string(),
            not_found_page: "404.html".to_string(),
        }
    }
}

/// Contact endpoint configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ContactConfig {
    /// Append-only NDJSON file receiving accepted inquiries.
    pub data_file: String,

    /// Maximum accepted request body size in bytes.
    pub max_body_bytes: usize,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            data_file: "data/inquiries.ndjson".to_string(),
            max_body_bytes: 64 * 1024,
        }
    }
}

/// Rate limiting configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RateLimitConfig {
    /// Trailing window over which attempts are counted, in milliseconds.
    pub window_ms: u64,

    /// Maximum attempts per client within the window.
    pub max_requests: usize,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            window_ms: 60 * 60 * 1000,
            max_requests: 5,
        }
    }
}
