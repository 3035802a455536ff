//! Raw YouTube Data API v3 shapes. Every field is optional; conversion into
//! the view records in [`crate::models`] is where defaults get applied.

use crate::models::{ChannelSummary, Comment, VideoDetail, VideoSummary};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

const VIDEO_KIND: &str = "youtube#video";

/// Counts arrive as strings in `statistics` and as numbers on comments.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Count {
    Number(u64),
    Text(String),
    Other(Value),
}

impl Count {
    pub fn value(&self) -> u64 {
        match self {
            Count::Number(n) => *n,
            Count::Text(s) => s.trim().parse().unwrap_or(0),
            Count::Other(_) => 0,
        }
    }
}

fn count(value: &Option<Count>) -> u64 {
    value.as_ref().map_or(0, Count::value)
}

/// Text field that tolerates the wrong JSON type: scalars are rendered as
/// text, anything else is treated as absent.
fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    })
}

/// Nested object that is treated as absent when it does not decode.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(T::deserialize(raw).ok())
}

/// `videos` items carry a plain id, `search` items an object with a kind.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ResourceId {
    Plain(String),
    Keyed {
        kind: Option<String>,
        #[serde(rename = "videoId")]
        video_id: Option<String>,
    },
}

impl ResourceId {
    pub fn video_id(&self) -> Option<&str> {
        match self {
            ResourceId::Plain(id) => Some(id.as_str()),
            ResourceId::Keyed { video_id, .. } => video_id.as_deref(),
        }
    }

    /// Only search hits of kind `youtube#video` count as videos.
    pub fn searched_video_id(&self) -> Option<&str> {
        match self {
            ResourceId::Keyed {
                kind: Some(kind),
                video_id: Some(id),
            } if kind == VIDEO_KIND => Some(id.as_str()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Thumbnail {
    #[serde(deserialize_with = "lenient_text")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Thumbnails {
    #[serde(deserialize_with = "lenient")]
    pub default: Option<Thumbnail>,
    #[serde(deserialize_with = "lenient")]
    pub medium: Option<Thumbnail>,
}

fn thumbnail_url(thumbnail: Option<&Thumbnail>) -> String {
    thumbnail
        .and_then(|t| t.url.clone())
        .unwrap_or_default()
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VideoSnippet {
    #[serde(deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub channel_id: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub channel_title: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub published_at: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub category_id: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub thumbnails: Option<Thumbnails>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VideoStatistics {
    pub view_count: Option<Count>,
    pub like_count: Option<Count>,
    pub comment_count: Option<Count>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct VideoResource {
    #[serde(deserialize_with = "lenient")]
    pub id: Option<ResourceId>,
    #[serde(deserialize_with = "lenient")]
    pub snippet: Option<VideoSnippet>,
    #[serde(deserialize_with = "lenient")]
    pub statistics: Option<VideoStatistics>,
}

impl VideoResource {
    pub fn into_detail(self) -> VideoDetail {
        let snippet = self.snippet.unwrap_or_default();
        let statistics = self.statistics.unwrap_or_default();
        let fallback = VideoSummary::default();

        let summary = VideoSummary {
            id: self
                .id
                .as_ref()
                .and_then(ResourceId::video_id)
                .map(str::to_string)
                .unwrap_or(fallback.id),
            title: snippet.title.unwrap_or(fallback.title),
            channel_title: snippet.channel_title.unwrap_or(fallback.channel_title),
            thumbnail_url: thumbnail_url(
                snippet.thumbnails.as_ref().and_then(|t| t.medium.as_ref()),
            ),
            view_count: count(&statistics.view_count),
            published_at: snippet.published_at.unwrap_or(fallback.published_at),
            category_id: snippet.category_id.unwrap_or(fallback.category_id),
        };

        VideoDetail {
            summary,
            description: snippet.description.unwrap_or_default(),
            like_count: count(&statistics.like_count),
            comment_count: count(&statistics.comment_count),
            channel_id: snippet.channel_id.filter(|id| !id.is_empty()),
        }
    }

    pub fn into_summary(self) -> VideoSummary {
        self.into_detail().summary
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SearchResultResource {
    #[serde(deserialize_with = "lenient")]
    pub id: Option<ResourceId>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ChannelSnippet {
    #[serde(deserialize_with = "lenient")]
    pub thumbnails: Option<Thumbnails>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChannelStatistics {
    pub subscriber_count: Option<Count>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ChannelResource {
    #[serde(deserialize_with = "lenient")]
    pub snippet: Option<ChannelSnippet>,
    #[serde(deserialize_with = "lenient")]
    pub statistics: Option<ChannelStatistics>,
}

impl ChannelResource {
    pub fn into_summary(self) -> ChannelSummary {
        let thumbnails = self.snippet.and_then(|s| s.thumbnails);
        ChannelSummary {
            thumbnail_url: thumbnail_url(thumbnails.as_ref().and_then(|t| t.default.as_ref())),
            subscriber_count: self
                .statistics
                .map_or(0, |s| count(&s.subscriber_count)),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CommentSnippet {
    #[serde(deserialize_with = "lenient_text")]
    pub author_display_name: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub author_profile_image_url: Option<String>,
    pub like_count: Option<Count>,
    #[serde(deserialize_with = "lenient_text")]
    pub text_display: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TopLevelComment {
    #[serde(deserialize_with = "lenient")]
    pub snippet: Option<CommentSnippet>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CommentThreadSnippet {
    #[serde(deserialize_with = "lenient")]
    pub top_level_comment: Option<TopLevelComment>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CommentThreadResource {
    #[serde(deserialize_with = "lenient")]
    pub snippet: Option<CommentThreadSnippet>,
}

impl CommentThreadResource {
    /// `None` when the thread has no top-level comment snippet.
    pub fn into_comment(self) -> Option<Comment> {
        let snippet = self.snippet?.top_level_comment?.snippet?;
        let fallback = Comment::default();
        Some(Comment {
            author_name: snippet.author_display_name.unwrap_or(fallback.author_name),
            author_avatar_url: snippet.author_profile_image_url.unwrap_or_default(),
            like_count: count(&snippet.like_count),
            text: snippet.text_display.unwrap_or_default(),
        })
    }
}

/// Body of a failed request: `{ "error": { "code": 403, "message": "..." } }`.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub code: Option<u16>,
    pub message: Option<String>,
}

impl ErrorResponse {
    pub fn describe(&self) -> String {
        match (&self.error.code, &self.error.message) {
            (Some(code), Some(message)) => format!("{code} {message}"),
            (None, Some(message)) => message.clone(),
            (Some(code), None) => format!("error code {code}"),
            (None, None) => "unspecified error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn counts_accept_strings_numbers_and_garbage() {
        let parsed: Vec<Count> =
            serde_json::from_value(json!(["1234", 56, "not a number", null, {"x": 1}])).unwrap();
        let values: Vec<u64> = parsed.iter().map(Count::value).collect();
        assert_eq!(values, vec![1234, 56, 0, 0, 0]);
    }

    #[test]
    fn resource_ids_come_in_two_shapes() {
        let plain: ResourceId = serde_json::from_value(json!("abc")).unwrap();
        assert_eq!(plain.video_id(), Some("abc"));
        assert_eq!(plain.searched_video_id(), None);

        let keyed: ResourceId =
            serde_json::from_value(json!({"kind": "youtube#video", "videoId": "xyz"})).unwrap();
        assert_eq!(keyed.video_id(), Some("xyz"));
        assert_eq!(keyed.searched_video_id(), Some("xyz"));

        let channel: ResourceId =
            serde_json::from_value(json!({"kind": "youtube#channel", "channelId": "c1"})).unwrap();
        assert_eq!(channel.searched_video_id(), None);
    }

    #[test]
    fn bare_video_item_normalizes_to_defaults() {
        let resource: VideoResource = serde_json::from_value(json!({})).unwrap();
        let detail = resource.into_detail();
        assert_eq!(detail.summary, VideoSummary::default());
        assert_eq!(detail.description, "");
        assert_eq!(detail.like_count, 0);
        assert_eq!(detail.comment_count, 0);
        assert_eq!(detail.channel_id, None);
    }

    #[test]
    fn full_video_item_keeps_every_field() {
        let resource: VideoResource = serde_json::from_value(json!({
            "id": "v1",
            "snippet": {
                "title": "Launch",
                "description": "All about it",
                "channelId": "UC1",
                "channelTitle": "Space",
                "publishedAt": "2024-01-01T00:00:00Z",
                "categoryId": "28",
                "thumbnails": {
                    "default": {"url": "https://i.ytimg.com/d.jpg"},
                    "medium": {"url": "https://i.ytimg.com/m.jpg"}
                }
            },
            "statistics": {"viewCount": "1500", "likeCount": "20", "commentCount": "3"}
        }))
        .unwrap();

        let detail = resource.into_detail();
        assert_eq!(detail.summary.id, "v1");
        assert_eq!(detail.summary.title, "Launch");
        assert_eq!(detail.summary.channel_title, "Space");
        assert_eq!(detail.summary.thumbnail_url, "https://i.ytimg.com/m.jpg");
        assert_eq!(detail.summary.view_count, 1500);
        assert_eq!(detail.summary.category_id, "28");
        assert_eq!(detail.description, "All about it");
        assert_eq!(detail.like_count, 20);
        assert_eq!(detail.comment_count, 3);
        assert_eq!(detail.channel_id.as_deref(), Some("UC1"));
    }

    #[test]
    fn wrongly_typed_fields_default_without_losing_the_item() {
        let resource: VideoResource = serde_json::from_value(json!({
            "id": "v1",
            "snippet": {
                "title": 17,
                "description": ["not", "text"],
                "channelId": "UC1",
                "channelTitle": {"name": "Space"},
                "categoryId": 10,
                "thumbnails": "none"
            },
            "statistics": {"viewCount": "1234", "likeCount": true}
        }))
        .unwrap();

        let detail = resource.into_detail();
        assert_eq!(detail.summary.id, "v1");
        assert_eq!(detail.summary.title, "17");
        assert_eq!(detail.summary.category_id, "10");
        assert_eq!(detail.summary.channel_title, crate::models::NO_CHANNEL);
        assert_eq!(detail.summary.thumbnail_url, "");
        assert_eq!(detail.summary.view_count, 1234);
        assert_eq!(detail.description, "");
        assert_eq!(detail.like_count, 0);
        assert_eq!(detail.channel_id.as_deref(), Some("UC1"));
    }

    #[test]
    fn wrongly_typed_nested_objects_count_as_absent() {
        let resource: VideoResource =
            serde_json::from_value(json!({"id": 5, "snippet": "junk", "statistics": 3})).unwrap();
        assert_eq!(resource.into_detail().summary, VideoSummary::default());

        let thread: CommentThreadResource = serde_json::from_value(json!({
            "snippet": {"topLevelComment": {"snippet": {"authorDisplayName": null, "textDisplay": 42}}}
        }))
        .unwrap();
        let comment = thread.into_comment().unwrap();
        assert_eq!(comment.author_name, "Unknown User");
        assert_eq!(comment.text, "42");
    }

    #[test]
    fn empty_channel_id_counts_as_absent() {
        let resource: VideoResource =
            serde_json::from_value(json!({"id": "v1", "snippet": {"channelId": ""}})).unwrap();
        assert_eq!(resource.into_detail().channel_id, None);
    }

    #[test]
    fn channel_uses_default_thumbnail() {
        let resource: ChannelResource = serde_json::from_value(json!({
            "snippet": {"thumbnails": {"default": {"url": "https://yt3/c.jpg"}}},
            "statistics": {"subscriberCount": "2500000"}
        }))
        .unwrap();
        let channel = resource.into_summary();
        assert_eq!(channel.thumbnail_url, "https://yt3/c.jpg");
        assert_eq!(channel.subscriber_count, 2_500_000);
    }

    #[test]
    fn comment_thread_without_top_level_snippet_is_none() {
        for raw in [
            json!({}),
            json!({"snippet": {}}),
            json!({"snippet": {"topLevelComment": {}}}),
        ] {
            let thread: CommentThreadResource = serde_json::from_value(raw).unwrap();
            assert!(thread.into_comment().is_none());
        }
    }

    #[test]
    fn comment_fields_fall_back_individually() {
        let thread: CommentThreadResource = serde_json::from_value(json!({
            "snippet": {"topLevelComment": {"snippet": {"textDisplay": "nice", "likeCount": 4}}}
        }))
        .unwrap();
        let comment = thread.into_comment().unwrap();
        assert_eq!(comment.author_name, "Unknown User");
        assert_eq!(comment.author_avatar_url, "");
        assert_eq!(comment.like_count, 4);
        assert_eq!(comment.text, "nice");
    }

    #[test]
    fn error_response_describes_code_and_message() {
        let error: ErrorResponse = serde_json::from_value(json!({
            "error": {"code": 403, "message": "quotaExceeded"}
        }))
        .unwrap();
        assert_eq!(error.describe(), "403 quotaExceeded");
    }
}
