//! Request body accumulation and decoding.

use axum::body::Body;
use futures_util::StreamExt;
use serde_json::{Map, Value};
use thiserror::Error;

/// Failure modes of the body parser.
#[derive(Debug, Error)]
pub enum BodyError {
    #[error("Payload too large")]
    TooLarge,

    #[error("Invalid request body")]
    Invalid,
}

/// Read and decode a request body into a flat field map.
///
/// Bytes are accumulated with a hard ceiling; exceeding it aborts the read
/// immediately with [`BodyError::TooLarge`]. On completion the bytes are
/// decoded by content type: JSON objects and URL-encoded forms become field
/// maps, anything else is wrapped under a single `raw` key. An empty body
/// yields an empty map rather than an error.
pub async fn parse_body(
    body: Body,
    content_type: Option<&str>,
    max_bytes: usize,
) -> Result<Map<String, Value>, BodyError> {
    let mut stream = body.into_data_stream();
    let mut buf: Vec<u8> = Vec::new();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|_| BodyError::Invalid)?;
        if buf.len() + chunk.len() > max_bytes {
            return Err(BodyError::TooLarge);
        }
        buf.extend_from_slice(&chunk);
    }

    if buf.is_empty() {
        return Ok(Map::new());
    }

    let text = String::from_utf8_lossy(&buf);
    let content_type = content_type.unwrap_or("").to_ascii_lowercase();

    if content_type.contains("application/json") {
        return match serde_json::from_str::<Value>(&text) {
            Ok(Value::Object(map)) => Ok(map),
            // Valid JSON that is not an object carries no fields; the
            // validator reports the missing ones.
            Ok(_) => Ok(Map::new()),
            Err(_) => Err(BodyError::Invalid),
        };
    }

    if content_type.contains("application/x-www-form-urlencoded") {
        let pairs: Vec<(String, String)> =
            serde_urlencoded::from_str(&text).map_err(|_| BodyError::Invalid)?;
        let mut map = Map::new();
        for (key, value) in pairs {
            map.insert(key, Value::String(value));
        }
        return Ok(map);
    }

    let mut map = Map::new();
    map.insert("raw".to_string(), Value::String(text.into_owned()));
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn json_object_becomes_field_map() {
        let body = Body::from(r#"{"name":"Aiko","privacyConsent":true}"#);
        let map = parse_body(body, Some("application/json"), 1024).await.unwrap();
        assert_eq!(map["name"], "Aiko");
        assert_eq!(map["privacyConsent"], true);
    }

    #[tokio::test]
    async fn json_with_charset_parameter_is_json() {
        let body = Body::from(r#"{"name":"Aiko"}"#);
        let map = parse_body(body, Some("application/json; charset=utf-8"), 1024)
            .await
            .unwrap();
        assert_eq!(map["name"], "Aiko");
    }

    #[tokio::test]
    async fn malformed_json_is_invalid() {
        let body = Body::from("{not json");
        let err = parse_body(body, Some("application/json"), 1024)
            .await
            .unwrap_err();
        assert!(matches!(err, BodyError::Invalid));
    }

    #[tokio::test]
    async fn form_encoded_pairs_become_strings() {
        let body = Body::from("name=Aiko+Tanaka&privacyConsent=on");
        let map = parse_body(body, Some("application/x-www-form-urlencoded"), 1024)
            .await
            .unwrap();
        assert_eq!(map["name"], "Aiko Tanaka");
        assert_eq!(map["privacyConsent"], "on");
    }

    #[tokio::test]
    async fn unknown_content_type_wraps_raw_text() {
        let body = Body::from("hello there");
        let map = parse_body(body, Some("text/plain"), 1024).await.unwrap();
        assert_eq!(map["raw"], "hello there");
    }

    #[tokio::test]
    async fn empty_body_is_empty_map() {
        let map = parse_body(Body::empty(), Some("application/json"), 1024)
            .await
            .unwrap();
        assert!(map.is_empty());
    }

    #[tokio::test]
    async fn oversized_body_is_rejected() {
        let body = Body::from(vec![b'a'; 2048]);
        let err = parse_body(body, Some("application/json"), 1024)
            .await
            .unwrap_err();
        assert!(matches!(err, BodyError::TooLarge));
    }
}
