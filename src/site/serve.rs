//! Static file responses.
//!
//! # Responsibilities
//! - Read the resolved file and build the response
//! - HEAD requests get headers only
//! - Unresolved paths get the configured 404 page, else plain text

use axum::body::Body;
use axum::http::{header, StatusCode};
use axum::response::Response;

use crate::site::mime;
use crate::site::resolver::StaticResolver;

/// Serve `url_path` from the site root, falling back to the 404 document.
pub async fn respond(
    resolver: &StaticResolver,
    url_path: &str,
    is_head: bool,
    not_found_page: &str,
) -> Response {
    let Some(path) = resolver.resolve(url_path).await else {
        return not_found(resolver, is_head, not_found_page).await;
    };

    match tokio::fs::read(&path).await {
        Ok(content) => {
            let extension = path.extension().and_then(|e| e.to_str());
            let content_type = mime::content_type_for(extension);
            file_response(StatusCode::OK, content_type, content, is_head)
        }
        Err(e) => {
            // Resolved but unreadable (deleted in between, permissions).
            tracing::error!(path = %path.display(), error = %e, "Failed to read static file");
            not_found(resolver, is_head, not_found_page).await
        }
    }
}

async fn not_found(resolver: &StaticResolver, is_head: bool, not_found_page: &str) -> Response {
    let page = resolver.root().join(not_found_page);
    match tokio::fs::read(&page).await {
        Ok(content) => file_response(
            StatusCode::NOT_FOUND,
            "text/html; charset=utf-8",
            content,
            is_head,
        ),
        Err(_) => file_response(
            StatusCode::NOT_FOUND,
            "text/plain; charset=utf-8",
            b"404 Not Found".to_vec(),
            is_head,
        ),
    }
}

fn file_response(
    status: StatusCode,
    content_type: &'static str,
    content: Vec<u8>,
    is_head: bool,
) -> Response {
    let length = content.len();
    let body = if is_head {
        Body::empty()
    } else {
        Body::from(content)
    };

    Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, content_type)
        .header(header::CONTENT_LENGTH, length)
        .body(body)
        .unwrap_or_else(|e| {
            tracing::error!(error = %e, "Failed to build static response");
            Response::new(Body::empty())
        })
}
