//! HTTP subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum router, middleware, dispatch)
//!     → POST /api/contact   → contact::handler
//!     → GET/HEAD <any path> → site::serve
//!     → error.rs (failure → structured response)
//! ```

pub mod error;
pub mod server;

pub use error::SiteError;
pub use server::{AppState, HttpServer};
