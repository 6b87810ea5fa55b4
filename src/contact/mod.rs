//! Contact inquiry subsystem.
//!
//! # Data Flow
//! ```text
//! POST /api/contact
//!     → handler.rs (rate check → parse → validate → honeypot → persist)
//!     → body.rs (size-capped read, content-type negotiation)
//!     → validate.rs (pure sanitize + validate)
//!     → store.rs (append-only NDJSON log)
//! ```
//!
//! # Design Decisions
//! - Validation is a pure function over the parsed payload; the honeypot
//!   check lives in the handler so spam rejection stays distinguishable
//!   from validation failure internally while looking identical on the wire
//! - Records are immutable once appended; the log is never rewritten

pub mod body;
pub mod handler;
pub mod store;
pub mod validate;

pub use store::{InquiryRecord, InquiryStore};
