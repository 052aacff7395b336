//! Display-ready values derived from the view-model. Components only lay
//! these out; everything here is plain data so it can be checked natively.

use crate::extractor::state::{FormatsState, TranscriptState};
use crate::models::{Format, VideoRecord};
use crate::utils::{format_count, format_filesize, format_iso8601_duration, format_publish_date};
use serde_json::Value;

pub const NO_TAGS: &str = "No tags found";
pub const NO_TRANSCRIPT: &str = "No transcript found";
pub const NO_FORMATS: &str = "No downloadable formats found";

/// Descriptions shorter than this are shown in full without a toggle.
pub const DESCRIPTION_TOGGLE_THRESHOLD: usize = 200;

#[derive(Debug, Clone, PartialEq)]
pub struct VideoSummary {
    pub id: String,
    pub title: String,
    pub channel: String,
    pub channel_url: Option<String>,
    pub published: String,
    pub thumbnail: Option<String>,
    pub views: String,
    pub likes: String,
    pub comments: String,
    pub description: String,
    pub description_toggle: bool,
}

impl VideoSummary {
    pub fn from_record(record: &VideoRecord) -> Self {
        Self {
            id: record.id.clone(),
            title: record.title.clone(),
            channel: record.channel_title.clone(),
            channel_url: record
                .channel_id
                .as_ref()
                .map(|id| format!("https://www.youtube.com/channel/{id}")),
            published: record
                .published_at
                .as_deref()
                .map(format_publish_date)
                .unwrap_or_default(),
            thumbnail: record.thumbnails.best().map(str::to_string),
            views: format_count(record.view_count.as_deref()),
            likes: format_count(record.like_count.as_deref()),
            comments: format_count(record.comment_count.as_deref()),
            description: record.description.clone(),
            description_toggle: record.description.chars().count()
                >= DESCRIPTION_TOGGLE_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TagsDisplay {
    Chips(Vec<String>),
    Placeholder(&'static str),
}

pub fn tags_display(record: &VideoRecord) -> TagsDisplay {
    match &record.tags {
        Some(tags) if !tags.is_empty() => TagsDisplay::Chips(tags.clone()),
        _ => TagsDisplay::Placeholder(NO_TAGS),
    }
}

/// Text put on the clipboard by "Copy tags"; `None` when there is nothing to copy.
pub fn tags_clipboard_text(record: &VideoRecord) -> Option<String> {
    record
        .tags
        .as_ref()
        .filter(|tags| !tags.is_empty())
        .map(|tags| tags.join(", "))
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormatRow {
    pub url: String,
    pub resolution: String,
    pub ext: String,
    pub size: String,
}

impl From<&Format> for FormatRow {
    fn from(format: &Format) -> Self {
        Self {
            url: format.url.clone(),
            resolution: format
                .resolution
                .clone()
                .unwrap_or_else(|| "N/A".to_string()),
            ext: format
                .ext
                .as_deref()
                .unwrap_or("?")
                .to_uppercase(),
            size: format_filesize(format.filesize.as_ref()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailRow {
    pub label: &'static str,
    pub value: String,
}

fn row(label: &'static str, value: Option<String>) -> DetailRow {
    DetailRow {
        label,
        value: value.unwrap_or_else(|| "N/A".to_string()),
    }
}

pub fn technical_rows(record: &VideoRecord) -> Vec<DetailRow> {
    let t = &record.technical;
    vec![
        row(
            "Duration",
            t.duration.as_deref().map(format_iso8601_duration),
        ),
        row("Definition", t.definition.as_deref().map(str::to_uppercase)),
        row("Dimension", t.dimension.as_deref().map(str::to_uppercase)),
    ]
}

pub fn status_rows(record: &VideoRecord) -> Vec<DetailRow> {
    let s = &record.status;
    vec![
        row("License", s.license.clone()),
        row("Privacy", s.privacy.clone()),
        row(
            "Made for kids",
            s.made_for_kids
                .map(|kids| (if kids { "Yes" } else { "No" }).to_string()),
        ),
    ]
}

pub fn location_text(record: &VideoRecord) -> Option<String> {
    record
        .location
        .map(|l| format!("{:.4}, {:.4}", l.latitude, l.longitude))
}

pub fn pretty_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_default()
}

pub fn json_download_href(record: &VideoRecord) -> String {
    format!(
        "data:text/json;charset=utf-8,{}",
        urlencoding::encode(&pretty_json(&record.raw))
    )
}

pub fn json_download_name(record: &VideoRecord) -> String {
    format!("yt-data-{}.json", record.id)
}

pub fn transcript_button_label(state: &TranscriptState) -> &'static str {
    match state {
        TranscriptState::NotRequested => "Load Transcript",
        TranscriptState::Loading => "Loading...",
        TranscriptState::Loaded(_) => "Loaded",
        TranscriptState::Failed(_) => "Retry",
    }
}

/// `None` once formats are listed; the button is hidden then.
pub fn formats_button_label(state: &FormatsState) -> Option<&'static str> {
    match state {
        FormatsState::NotRequested => Some("Analyze Formats"),
        FormatsState::Loading => Some("Analyzing Server..."),
        FormatsState::Loaded(_) => None,
        FormatsState::Cooldown | FormatsState::Failed(_) => Some("Analysis Failed"),
    }
}
