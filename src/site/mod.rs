//! Static site subsystem.
//!
//! # Data Flow
//! ```text
//! GET/HEAD request path
//!     → resolver.rs (decode, normalize, traversal guard, candidate lookup)
//!     → serve.rs (read file, content negotiation, 404 fallback)
//!     → mime.rs (extension → Content-Type)
//! ```

pub mod mime;
pub mod resolver;
pub mod serve;

pub use resolver::StaticResolver;
