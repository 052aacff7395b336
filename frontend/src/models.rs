use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A single video as the page renders it, whichever envelope the backend sent.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VideoRecord {
    pub id: String,
    pub title: String,
    pub channel_title: String,
    pub channel_id: Option<String>,
    pub published_at: Option<String>,
    pub thumbnails: Thumbnails,
    pub description: String,
    pub tags: Option<Vec<String>>,
    pub view_count: Option<String>,
    pub like_count: Option<String>,
    pub comment_count: Option<String>,
    pub technical: TechnicalDetails,
    pub status: StatusDetails,
    pub location: Option<GeoLocation>,
    /// The JSON the record was built from, for the preview and download.
    pub raw: Value,
}

impl VideoRecord {
    pub fn history_entry(&self) -> HistoryEntry {
        HistoryEntry {
            id: self.id.clone(),
            title: self.title.clone(),
            thumb: self.thumbnails.smallest().unwrap_or_default().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Thumbnails {
    #[serde(default)]
    pub default: Option<Thumbnail>,
    #[serde(default)]
    pub medium: Option<Thumbnail>,
    #[serde(default)]
    pub high: Option<Thumbnail>,
    #[serde(default)]
    pub standard: Option<Thumbnail>,
    #[serde(default)]
    pub maxres: Option<Thumbnail>,
}

impl Thumbnails {
    /// Highest resolution available, for the header image.
    pub fn best(&self) -> Option<&str> {
        [
            &self.maxres,
            &self.high,
            &self.medium,
            &self.standard,
            &self.default,
        ]
        .into_iter()
        .find_map(|t| t.as_ref().map(|t| t.url.as_str()))
    }

    /// Lowest resolution available, for history thumbnails.
    pub fn smallest(&self) -> Option<&str> {
        [
            &self.default,
            &self.medium,
            &self.high,
            &self.standard,
            &self.maxres,
        ]
        .into_iter()
        .find_map(|t| t.as_ref().map(|t| t.url.as_str()))
    }

    fn from_single_url(url: String) -> Self {
        Self {
            default: Some(Thumbnail::from_url(url.clone())),
            high: Some(Thumbnail::from_url(url)),
            ..Default::default()
        }
    }

    fn is_empty(&self) -> bool {
        self.smallest().is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Thumbnail {
    pub url: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

impl Thumbnail {
    fn from_url(url: String) -> Self {
        Self {
            url,
            width: None,
            height: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TechnicalDetails {
    pub duration: Option<String>,
    pub definition: Option<String>,
    pub dimension: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct StatusDetails {
    pub license: Option<String>,
    pub privacy: Option<String>,
    pub made_for_kids: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    pub latitude: f64,
    pub longitude: f64,
}

// Counts arrive as numeric strings from the Data API but may be plain numbers.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

// --- `{ items: [ { id, snippet, statistics, ... } ] }` ---

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiItem {
    pub id: String,
    pub snippet: Snippet,
    #[serde(default)]
    pub statistics: Statistics,
    #[serde(default)]
    pub content_details: Option<ContentDetails>,
    #[serde(default)]
    pub status: Option<ApiStatus>,
    #[serde(default)]
    pub recording_details: Option<RecordingDetails>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub channel_title: String,
    #[serde(default)]
    pub channel_id: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub thumbnails: Thumbnails,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    #[serde(default, deserialize_with = "string_or_number")]
    pub view_count: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub like_count: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub comment_count: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ContentDetails {
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub definition: Option<String>,
    #[serde(default)]
    pub dimension: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiStatus {
    #[serde(default)]
    pub license: Option<String>,
    #[serde(default)]
    pub privacy_status: Option<String>,
    #[serde(default)]
    pub made_for_kids: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct RecordingDetails {
    #[serde(default)]
    pub location: Option<Coordinates>,
}

#[derive(Debug, Deserialize)]
pub struct Coordinates {
    #[serde(alias = "lat")]
    pub latitude: f64,
    #[serde(alias = "lng", alias = "long", alias = "lon")]
    pub longitude: f64,
}

impl From<Coordinates> for GeoLocation {
    fn from(c: Coordinates) -> Self {
        GeoLocation {
            latitude: c.latitude,
            longitude: c.longitude,
        }
    }
}

impl ApiItem {
    pub fn into_record(self, raw: Value) -> VideoRecord {
        let technical = self
            .content_details
            .map(|c| TechnicalDetails {
                duration: c.duration,
                definition: c.definition,
                dimension: c.dimension,
            })
            .unwrap_or_default();
        let status = self
            .status
            .map(|s| StatusDetails {
                license: s.license,
                privacy: s.privacy_status,
                made_for_kids: s.made_for_kids,
            })
            .unwrap_or_default();

        VideoRecord {
            id: self.id,
            title: self.snippet.title,
            channel_title: self.snippet.channel_title,
            channel_id: self.snippet.channel_id,
            published_at: self.snippet.published_at,
            thumbnails: self.snippet.thumbnails,
            description: self.snippet.description,
            tags: self.snippet.tags,
            view_count: self.statistics.view_count,
            like_count: self.statistics.like_count,
            comment_count: self.statistics.comment_count,
            technical,
            status,
            location: self
                .recording_details
                .and_then(|r| r.location)
                .map(GeoLocation::from),
            raw,
        }
    }
}

// --- `{ id, basic, metrics, technical, status, location? }` ---

#[derive(Debug, Deserialize)]
pub struct Envelope {
    pub id: String,
    pub basic: BasicSection,
    #[serde(default)]
    pub metrics: MetricsSection,
    #[serde(default)]
    pub technical: TechnicalSection,
    #[serde(default)]
    pub status: StatusSection,
    #[serde(default)]
    pub location: Option<Coordinates>,
}

#[derive(Debug, Deserialize)]
pub struct BasicSection {
    #[serde(default)]
    pub title: String,
    #[serde(default, alias = "channelTitle", alias = "channel")]
    pub channel_title: String,
    #[serde(default, alias = "channelId")]
    pub channel_id: Option<String>,
    #[serde(default, alias = "publishedAt")]
    pub published_at: Option<String>,
    #[serde(default)]
    pub thumbnails: Thumbnails,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct MetricsSection {
    #[serde(
        default,
        alias = "viewCount",
        alias = "view_count",
        deserialize_with = "string_or_number"
    )]
    pub views: Option<String>,
    #[serde(
        default,
        alias = "likeCount",
        alias = "like_count",
        deserialize_with = "string_or_number"
    )]
    pub likes: Option<String>,
    #[serde(
        default,
        alias = "commentCount",
        alias = "comment_count",
        deserialize_with = "string_or_number"
    )]
    pub comments: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TechnicalSection {
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub definition: Option<String>,
    #[serde(default)]
    pub dimension: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct StatusSection {
    #[serde(default)]
    pub license: Option<String>,
    #[serde(default, alias = "privacyStatus", alias = "privacy_status")]
    pub privacy: Option<String>,
    #[serde(default, alias = "madeForKids")]
    pub made_for_kids: Option<bool>,
}

impl Envelope {
    pub fn into_record(self, raw: Value) -> VideoRecord {
        let basic = self.basic;
        let thumbnails = match basic.thumbnail {
            Some(url) if basic.thumbnails.is_empty() => Thumbnails::from_single_url(url),
            _ => basic.thumbnails,
        };

        VideoRecord {
            id: self.id,
            title: basic.title,
            channel_title: basic.channel_title,
            channel_id: basic.channel_id,
            published_at: basic.published_at,
            thumbnails,
            description: basic.description,
            tags: basic.tags,
            view_count: self.metrics.views,
            like_count: self.metrics.likes,
            comment_count: self.metrics.comments,
            technical: TechnicalDetails {
                duration: self.technical.duration,
                definition: self.technical.definition,
                dimension: self.technical.dimension,
            },
            status: StatusDetails {
                license: self.status.license,
                privacy: self.status.privacy,
                made_for_kids: self.status.made_for_kids,
            },
            location: self.location.map(GeoLocation::from),
            raw,
        }
    }
}

// --- transcript & formats ---

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Transcript {
    #[serde(default)]
    pub full_text: String,
    #[serde(default)]
    pub timeline: Vec<TranscriptSegment>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TranscriptSegment {
    pub text: String,
    #[serde(default)]
    pub start: f64,
    #[serde(default)]
    pub duration: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FormatsResponse {
    #[serde(default)]
    pub formats: Vec<Format>,
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Format {
    #[serde(default)]
    pub url: String,
    #[serde(default, alias = "res")]
    pub resolution: Option<String>,
    #[serde(default)]
    pub ext: Option<String>,
    #[serde(default, alias = "size")]
    pub filesize: Option<FileSize>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FileSize {
    Bytes(f64),
    Label(String),
}

// --- local storage ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub thumb: String,
}
