//! Durable append-only inquiry log.
//!
//! One JSON-encoded record per line (NDJSON). Lines are only ever added,
//! never rewritten or deleted; each append is a single `write_all` behind
//! a lock so concurrent submissions cannot interleave partial lines.

use std::io;
use std::path::{Path, PathBuf};

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::contact::validate::SanitizedInquiry;

/// A validated, persisted submission. Immutable once written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InquiryRecord {
    pub id: String,
    #[serde(rename = "submittedAt")]
    pub submitted_at: String,
    pub ip: String,
    #[serde(rename = "userAgent")]
    pub user_agent: String,
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

impl InquiryRecord {
    /// Stamp a sanitized inquiry with its identity and submission time.
    pub fn new(id: String, ip: String, user_agent: String, data: SanitizedInquiry) -> Self {
        Self {
            id,
            submitted_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            ip,
            user_agent,
            name: data.name,
            organization: data.organization,
            email: data.email,
            inquiry_type: data.inquiry_type,
            message: data.message,
            privacy_consent: data.privacy_consent,
            website: data.website,
        }
    }
}

/// Owns the NDJSON file all accepted inquiries are appended to.
pub struct InquiryStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl InquiryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Create the storage location if absent.
    pub async fn ensure_ready(&self) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        Ok(())
    }

    /// Append one record as a single line.
    pub async fn append(&self, record: &InquiryRecord) -> io::Result<()> {
        let mut line = serde_json::to_string(record).map_err(io::Error::other)?;
        line.push('\n');

        let _guard = self.write_lock.lock().await;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
