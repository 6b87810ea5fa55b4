//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! optional config file (TOML)
//!     → loader.rs (parse & deserialize, defaults fill gaps)
//!     → environment overrides (HOST, PORT)
//!     → validation (semantic checks)
//!     → SiteConfig (validated, immutable)
//!     → shared via Arc to all subsystems
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - All fields have defaults so the server runs with no config at all
//! - Environment variables win over the file for host/port, matching how
//!   the site is deployed behind a process supervisor

pub mod loader;
pub mod schema;

pub use loader::{load_config, ConfigError};
pub use schema::{ContactConfig, ContentConfig, ListenerConfig, RateLimitConfig, SiteConfig};
