//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request:
//!     → rate_limit.rs (per-client sliding window, contact endpoint only)
//!     → headers.rs (uniform security response headers, every route)
//! ```
//!
//! # Design Decisions
//! - Fail closed: a client over its window is rejected before any parsing
//! - No trust in client input: forwarded-for is only an identifier, never
//!   an authorization signal

pub mod headers;
pub mod rate_limit;

pub use rate_limit::RateLimiter;
