//! Traversal-safe resolution of URL paths to files under the site root.

use std::path::{Path, PathBuf};

use percent_encoding::percent_decode_str;

/// Maps request paths to files inside a fixed site root.
///
/// The containment check runs before any filesystem probe; a path that
/// escapes the root is rejected outright, even when built from encoded
/// traversal sequences.
pub struct StaticResolver {
    root: PathBuf,
}

impl StaticResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve a request path to an existing regular file, or `None`.
    ///
    /// Lookup order for `/about`: `about` → `about.html` → `about/index.html`.
    /// The root path maps to `index.html`.
    pub async fn resolve(&self, url_path: &str) -> Option<PathBuf> {
        let decoded = percent_decode_str(url_path).decode_utf8().ok()?;
        let relative = normalize(&decoded);

        let candidate = self.root.join(&relative);
        if !candidate.starts_with(&self.root) {
            tracing::warn!(path = %url_path, "Path traversal attempt blocked");
            return None;
        }

        let candidates: Vec<PathBuf> = if relative.as_os_str().is_empty() {
            vec![self.root.join("index.html")]
        } else {
            vec![
                candidate.clone(),
                PathBuf::from(format!("{}.html", candidate.display())),
                candidate.join("index.html"),
            ]
        };

        for path in candidates {
            if is_regular_file(&path).await {
                return Some(path);
            }
        }

        None
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Collapse `.` and `..` segments lexically and strip anything that would
/// climb above the root. The result is always a relative path.
fn normalize(decoded: &str) -> PathBuf {
    let mut segments: Vec<&str> = Vec::new();
    for segment in decoded.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }
    segments.iter().collect()
}

async fn is_regular_file(path: &Path) -> bool {
    match tokio::fs::metadata(path).await {
        Ok(meta) => meta.is_file(),
        Err(_) => false,
    }
}
