//! The contact endpoint.
//!
//! Request lifecycle: rate check → parse → validate → honeypot → persist,
//! with early exit to the mapped response at every gate.

use std::net::SocketAddr;
use std::time::{SystemTime, UNIX_EPOCH};

use axum::body::Body;
use axum::extract::{ConnectInfo, State};
use axum::http::{header, HeaderMap};
use axum::Json;
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde_json::{json, Value};

use crate::contact::body::{self, BodyError};
use crate::contact::store::InquiryRecord;
use crate::contact::validate;
use crate::http::error::SiteError;
use crate::http::server::AppState;

/// `POST /api/contact`
pub async fn submit_inquiry(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    request_body: Body,
) -> Result<Json<Value>, SiteError> {
    let client_id = client_id(&headers, Some(peer));

    if !state.limiter.check_and_record(&client_id) {
        tracing::warn!(client = %client_id, "Contact rate limit exceeded");
        return Err(SiteError::RateLimited);
    }

    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok());
    let payload = body::parse_body(
        request_body,
        content_type,
        state.config.contact.max_body_bytes,
    )
    .await
    .map_err(|e| match e {
        BodyError::TooLarge => SiteError::PayloadTooLarge,
        BodyError::Invalid => SiteError::InvalidBody(e.to_string()),
    })?;

    let outcome = validate::validate(&payload);

    // Honeypot: legitimate users never fill `website`. Discard silently
    // with a response indistinguishable from a generic bad request.
    if !outcome.data.website.is_empty() {
        tracing::warn!(client = %client_id, "Honeypot field filled, discarding submission");
        return Err(SiteError::SpamSuspected);
    }

    if !outcome.ok {
        return Err(SiteError::ValidationFailed(outcome.errors));
    }

    state.store.ensure_ready().await?;

    let id = new_inquiry_id();
    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    let record = InquiryRecord::new(id.clone(), client_id, user_agent, outcome.data);
    state.store.append(&record).await?;

    tracing::info!(id = %id, client = %record.ip, "Inquiry recorded");
    Ok(Json(json!({ "ok": true, "id": id })))
}

/// First forwarded-for value, else the peer address, else a sentinel.
fn client_id(headers: &HeaderMap, peer: Option<SocketAddr>) -> String {
    if let Some(forwarded) = headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
    {
        if let Some(first) = forwarded.split(',').next() {
            let first = first.trim();
            if !first.is_empty() {
                return first.to_string();
            }
        }
    }
    match peer {
        Some(addr) => addr.ip().to_string(),
        None => "unknown".to_string(),
    }
}

/// Unique inquiry id: base36 epoch-millis prefix plus a random suffix,
/// e.g. `inq_m0z3k1xq_a8b2cd`.
fn new_inquiry_id() -> String {
    let now_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(6)
        .map(char::from)
        .collect();
    format!("inq_{}_{}", base36(now_ms), suffix.to_ascii_lowercase())
}

fn base36(mut n: u128) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}
