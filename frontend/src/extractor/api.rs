use crate::env_variable_utils::BACKEND_URL;
use crate::extractor::url_parser::watch_url;
use crate::models::{ApiItem, Envelope, Format, FormatsResponse, Transcript, VideoRecord};
use gloo_net::http::Request;
use serde_json::Value;
use thiserror::Error;

/// Substrings the backend uses when YouTube is rate limiting its IP.
pub const COOLDOWN_MARKERS: [&str; 2] = ["YouTube IP Ban", "Server Cooldown"];

const MAX_ERROR_BODY: usize = 200;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Failed to connect to backend: {0}")]
    Network(String),
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },
    #[error("{0}")]
    Backend(String),
    #[error("Server is currently cooling down from high traffic. Please try again in a few hours.")]
    Cooldown(String),
    #[error("Video not found or private")]
    NotFound,
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn from_backend_message(message: String) -> Self {
        if COOLDOWN_MARKERS.iter().any(|m| message.contains(m)) {
            ApiError::Cooldown(message)
        } else {
            ApiError::Backend(message)
        }
    }

    pub fn is_cooldown(&self) -> bool {
        matches!(self, ApiError::Cooldown(_))
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

pub fn basic_info_url(base: &str, video_id: &str) -> String {
    format!("{base}/api/basic-info?id={}", urlencoding::encode(video_id))
}

pub fn transcript_url(base: &str, video_id: &str) -> String {
    format!("{base}/api/transcript?id={}", urlencoding::encode(video_id))
}

pub fn formats_url(base: &str, video_id: &str) -> String {
    format!(
        "{base}/api/formats?url={}",
        urlencoding::encode(&watch_url(video_id))
    )
}

async fn get_body(url: &str) -> Result<(u16, String), ApiError> {
    log::debug!("GET {url}");
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    Ok((status, body))
}

pub async fn fetch_basic_info(video_id: &str) -> Result<VideoRecord, ApiError> {
    let (status, body) = get_body(&basic_info_url(&*BACKEND_URL, video_id)).await?;
    decode_basic_info(status, &body)
}

pub async fn fetch_transcript(video_id: &str) -> Result<Transcript, ApiError> {
    let (status, body) = get_body(&transcript_url(&*BACKEND_URL, video_id)).await?;
    decode_transcript(status, &body)
}

pub async fn fetch_formats(video_id: &str) -> Result<Vec<Format>, ApiError> {
    let (status, body) = get_body(&formats_url(&*BACKEND_URL, video_id)).await?;
    decode_formats(status, &body)
}

// An `error` field wins over the status code; the backend sends one with
// both 200 and 4xx/5xx responses.
fn decode_payload(status: u16, body: &str) -> Result<Value, ApiError> {
    let success = (200..300).contains(&status);
    match serde_json::from_str::<Value>(body) {
        Ok(value) => {
            if let Some(message) = backend_error(&value) {
                return Err(ApiError::from_backend_message(message));
            }
            if !success {
                return Err(http_error(status, body));
            }
            Ok(value)
        }
        Err(e) if success => Err(e.into()),
        Err(_) => Err(http_error(status, body)),
    }
}

fn backend_error(value: &Value) -> Option<String> {
    match value.get("error")? {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn http_error(status: u16, body: &str) -> ApiError {
    ApiError::Http {
        status,
        body: body.trim().chars().take(MAX_ERROR_BODY).collect(),
    }
}

pub fn decode_basic_info(status: u16, body: &str) -> Result<VideoRecord, ApiError> {
    let value = decode_payload(status, body)?;

    if let Some(items) = value.get("items") {
        let first = items
            .as_array()
            .and_then(|items| items.first())
            .ok_or(ApiError::NotFound)?;
        let item: ApiItem = serde_json::from_value(first.clone())?;
        return Ok(item.into_record(first.clone()));
    }

    if value.get("basic").is_some() {
        let envelope: Envelope = serde_json::from_value(value.clone())?;
        return Ok(envelope.into_record(value));
    }

    Err(ApiError::Decode(
        "expected `items` or `basic` in basic-info response".to_string(),
    ))
}

pub fn decode_transcript(status: u16, body: &str) -> Result<Transcript, ApiError> {
    let value = decode_payload(status, body)?;
    Ok(serde_json::from_value(value)?)
}

pub fn decode_formats(status: u16, body: &str) -> Result<Vec<Format>, ApiError> {
    let value = decode_payload(status, body)?;
    let response: FormatsResponse = serde_json::from_value(value)?;
    Ok(response.formats)
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;
    use crate::models::FileSize;

    #[test]
    fn urls_are_encoded() {
        let base = "https://backend.example";
        assert_eq!(
            basic_info_url(base, "dQw4w9WgXcQ"),
            "https://backend.example/api/basic-info?id=dQw4w9WgXcQ"
        );
        assert_eq!(
            transcript_url(base, "dQw4w9WgXcQ"),
            "https://backend.example/api/transcript?id=dQw4w9WgXcQ"
        );
        assert_eq!(
            formats_url(base, "dQw4w9WgXcQ"),
            "https://backend.example/api/formats?url=https%3A%2F%2Fwww.youtube.com%2Fwatch%3Fv%3DdQw4w9WgXcQ"
        );
    }

    #[test]
    fn items_envelope_decodes_first_item() {
        let record = decode_basic_info(200, WATCH_ITEM).unwrap();
        assert_eq!(record.id, "dQw4w9WgXcQ");
        assert_eq!(record.title, "Never Gonna Give You Up");
        assert_eq!(record.channel_title, "Rick Astley");
        assert_eq!(record.view_count.as_deref(), Some("1500000000"));
        assert_eq!(record.technical.duration.as_deref(), Some("PT3M33S"));
        assert_eq!(record.status.privacy.as_deref(), Some("public"));
        assert_eq!(record.status.made_for_kids, Some(false));
        assert_eq!(record.raw["snippet"]["channelTitle"], "Rick Astley");
    }

    #[test]
    fn sectioned_envelope_decodes() {
        let body = r#"{
            "id": "dQw4w9WgXcQ",
            "basic": { "title": "T", "channelTitle": "C", "tags": ["x"] },
            "metrics": { "viewCount": "5" },
            "technical": { "duration": "PT1M" },
            "status": { "privacyStatus": "unlisted", "madeForKids": true }
        }"#;
        let record = decode_basic_info(200, body).unwrap();
        assert_eq!(record.title, "T");
        assert_eq!(record.tags, Some(vec!["x".to_string()]));
        assert_eq!(record.status.privacy.as_deref(), Some("unlisted"));
        assert_eq!(record.location, None);
    }

    #[test]
    fn empty_items_means_not_found() {
        assert_eq!(
            decode_basic_info(200, r#"{"items": []}"#),
            Err(ApiError::NotFound)
        );
    }

    #[test]
    fn error_field_is_surfaced_as_is() {
        let err = decode_basic_info(200, r#"{"error": "Quota exceeded"}"#).unwrap_err();
        assert_eq!(err, ApiError::Backend("Quota exceeded".to_string()));
        assert_eq!(err.to_string(), "Quota exceeded");

        let err = decode_transcript(404, r#"{"error": "Transcript disabled or not available"}"#)
            .unwrap_err();
        assert_eq!(err.to_string(), "Transcript disabled or not available");
    }

    #[test]
    fn cooldown_marker_is_recognised_by_substring() {
        let body = r#"{"error": "ERROR: YouTube IP Ban detected, retry later"}"#;
        let err = decode_formats(500, body).unwrap_err();
        assert!(err.is_cooldown());

        let err = decode_formats(200, r#"{"error": "Server Cooldown"}"#).unwrap_err();
        assert!(err.is_cooldown());

        let err = decode_formats(500, r#"{"error": "Video unavailable"}"#).unwrap_err();
        assert!(!err.is_cooldown());
    }

    #[test]
    fn non_json_failures_keep_status() {
        let err = decode_transcript(502, "<html>Bad Gateway</html>").unwrap_err();
        assert_eq!(
            err,
            ApiError::Http {
                status: 502,
                body: "<html>Bad Gateway</html>".to_string()
            }
        );
        assert!(matches!(
            decode_transcript(200, "not json"),
            Err(ApiError::Decode(_))
        ));
    }

    #[test]
    fn transcript_with_timeline() {
        let body = r#"{
            "full_text": "hello world",
            "timeline": [
                { "text": "hello", "start": 0.0, "duration": 1.2 },
                { "text": "world", "start": 1.2, "duration": 0.8 }
            ]
        }"#;
        let transcript = decode_transcript(200, body).unwrap();
        assert_eq!(transcript.full_text, "hello world");
        assert_eq!(transcript.timeline.len(), 2);
        assert_eq!(transcript.timeline[1].start, 1.2);
    }

    #[test]
    fn formats_list() {
        let body = r#"{
            "title": "Video",
            "formats": [
                { "resolution": "360p", "filesize": 1048576, "url": "https://cdn/a", "ext": "mp4" },
                { "res": "720p", "size": null, "url": "https://cdn/b", "ext": "mp4" }
            ]
        }"#;
        let formats = decode_formats(200, body).unwrap();
        assert_eq!(formats.len(), 2);
        assert_eq!(formats[0].filesize, Some(FileSize::Bytes(1048576.0)));
        assert_eq!(formats[1].resolution.as_deref(), Some("720p"));
        assert!(decode_formats(200, r#"{"formats": []}"#).unwrap().is_empty());
    }
}
