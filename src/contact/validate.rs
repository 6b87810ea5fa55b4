//! Inquiry sanitization and validation.
//!
//! Pure functions over the parsed payload: no clock, no IO. The `website`
//! honeypot field is sanitized but deliberately never validated here; the
//! handler inspects it so spam rejection stays separate from legitimate
//! validation errors.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use serde_json::{Map, Value};

const NAME_MAX: usize = 80;
const ORGANIZATION_MAX: usize = 120;
const EMAIL_MAX: usize = 120;
const INQUIRY_TYPE_MAX: usize = 80;
const WEBSITE_MAX: usize = 120;
const MESSAGE_MAX: usize = 2000;
const MESSAGE_MIN: usize = 20;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?i)[-._+a-z0-9]+@[-.a-z0-9]+\.[a-z]{2,}$").expect("email pattern is valid")
});

/// Sanitized inquiry fields, ready for persistence.
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedInquiry {
    pub name: String,
    pub organization: String,
    pub email: String,
    #[serde(rename = "inquiryType")]
    pub inquiry_type: String,
    pub message: String,
    #[serde(rename = "privacyConsent")]
    pub privacy_consent: bool,
    pub website: String,
}

/// Outcome of validating one payload. Ephemeral, per request.
#[derive(Debug)]
pub struct ValidationResult {
    pub ok: bool,
    pub errors: Vec<String>,
    pub data: SanitizedInquiry,
}

/// Sanitize the payload and check every rule, collecting one error string
/// per failed rule in fixed rule order.
pub fn validate(payload: &Map<String, Value>) -> ValidationResult {
    let data = SanitizedInquiry {
        name: sanitize_text(payload.get("name"), NAME_MAX),
        organization: sanitize_text(payload.get("organization"), ORGANIZATION_MAX),
        email: sanitize_text(payload.get("email"), EMAIL_MAX).to_lowercase(),
        inquiry_type: sanitize_text(payload.get("inquiryType"), INQUIRY_TYPE_MAX),
        message: sanitize_message(payload.get("message")),
        privacy_consent: parse_consent(payload.get("privacyConsent")),
        website: sanitize_text(payload.get("website"), WEBSITE_MAX),
    };

    let mut errors = Vec::new();

    if data.name.is_empty() {
        errors.push("name is required".to_string());
    }
    if data.organization.is_empty() {
        errors.push("organization is required".to_string());
    }
    if data.email.is_empty() || !EMAIL_PATTERN.is_match(&data.email) {
        errors.push("valid email is required".to_string());
    }
    if data.inquiry_type.is_empty() {
        errors.push("inquiryType is required".to_string());
    }
    if data.message.chars().count() < MESSAGE_MIN {
        errors.push("message must be at least 20 characters".to_string());
    }
    if !data.privacy_consent {
        errors.push("privacyConsent is required".to_string());
    }

    ValidationResult {
        ok: errors.is_empty(),
        errors,
        data,
    }
}

/// Collapse whitespace runs to single spaces, trim, and cap the length.
fn sanitize_text(value: Option<&Value>, max_chars: usize) -> String {
    let raw = stringify(value);
    let collapsed: Vec<&str> = raw.split_whitespace().collect();
    collapsed.join(" ").chars().take(max_chars).collect()
}

/// The message keeps its internal whitespace; only trim and cap.
fn sanitize_message(value: Option<&Value>) -> String {
    stringify(value).trim().chars().take(MESSAGE_MAX).collect()
}

fn parse_consent(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => s == "true" || s == "on",
        _ => false,
    }
}

fn stringify(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}
