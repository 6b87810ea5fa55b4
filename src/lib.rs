//! Static marketing-site server with a contact inquiry endpoint.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────┐
//!                    │                  SITESERVE                   │
//!                    │                                              │
//!  Client Request    │  ┌─────────┐      ┌───────────────────────┐  │
//!  ──────────────────┼─▶│  http   │─────▶│ POST /api/contact     │  │
//!                    │  │ server  │      │   contact::handler    │  │
//!                    │  └────┬────┘      │   rate → parse →      │  │
//!                    │       │           │   validate → persist  │  │
//!                    │       │           └───────────┬───────────┘  │
//!                    │       │                       ▼              │
//!                    │       │               data/inquiries.ndjson  │
//!                    │       │                                      │
//!                    │       │           ┌───────────────────────┐  │
//!                    │       └──────────▶│ GET/HEAD <any path>   │  │
//!                    │                   │   site::resolver      │  │
//!                    │                   │   site::serve         │  │
//!                    │                   └───────────────────────┘  │
//!                    │                                              │
//!                    │  ┌────────────────────────────────────────┐  │
//!                    │  │          Cross-Cutting Concerns        │  │
//!                    │  │  config   security headers   tracing   │  │
//!                    │  │  rate limiting      lifecycle/shutdown │  │
//!                    │  └────────────────────────────────────────┘  │
//!                    └──────────────────────────────────────────────┘
//! ```
//!
//! Every response carries the security headers from [`security::headers`].
//! Accepted inquiries are appended as one JSON line each to a durable
//! NDJSON log owned by [`contact::store::InquiryStore`].

// Core subsystems
pub mod config;
pub mod contact;
pub mod http;
pub mod site;

// Cross-cutting concerns
pub mod lifecycle;
pub mod security;

pub use config::SiteConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
