use crate::catalog::transport::{ApiError, GlooTransport, Transport};
use crate::catalog::wire::{
    ChannelResource, CommentThreadResource, SearchResultResource, VideoResource,
};
use crate::config::AppConfig;
use crate::models::{ChannelSummary, Comment, VideoDetail, VideoSummary};
use serde::de::DeserializeOwned;
use serde_json::Value;

pub const TRENDING_PAGE_SIZE: u32 = 50;
pub const RECOMMENDED_PAGE_SIZE: u32 = 45;
pub const SEARCH_PAGE_SIZE: u32 = 25;
pub const COMMENT_PAGE_SIZE: u32 = 50;

const VIDEO_PARTS: &str = "snippet,contentDetails,statistics";
const SEARCH_DETAIL_PARTS: &str = "snippet,statistics";
const CHANNEL_PARTS: &str = "snippet,contentDetails,statistics";
const COMMENT_PARTS: &str = "snippet,replies";

#[derive(Debug, Clone, PartialEq)]
pub struct ApiSettings {
    pub base_url: String,
    pub api_key: String,
    pub region_code: String,
}

impl From<&AppConfig> for ApiSettings {
    fn from(config: &AppConfig) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
            api_key: config.api_key.clone(),
            region_code: config.region_code.clone(),
        }
    }
}

/// Read-only client for the video platform's catalog endpoints.
///
/// Every public operation swallows its failure: errors are logged and the
/// caller receives an empty list or `None`. Nothing is cached, so repeating a
/// call always goes back to the network.
pub struct CatalogClient<T = GlooTransport> {
    transport: T,
    settings: ApiSettings,
}

impl<T: Transport> CatalogClient<T> {
    pub fn new(transport: T, settings: ApiSettings) -> Self {
        Self {
            transport,
            settings,
        }
    }

    #[cfg(test)]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn fetch_trending(&self, category_id: &str) -> Vec<VideoDetail> {
        self.most_popular(category_id, TRENDING_PAGE_SIZE).await
    }

    /// Same-category side list shown next to the player.
    pub async fn fetch_recommended(&self, category_id: &str) -> Vec<VideoDetail> {
        self.most_popular(category_id, RECOMMENDED_PAGE_SIZE).await
    }

    async fn most_popular(&self, category_id: &str, page_size: u32) -> Vec<VideoDetail> {
        let page_size = page_size.to_string();
        let url = self.endpoint(
            "videos",
            &[
                ("part", VIDEO_PARTS),
                ("chart", "mostPopular"),
                ("maxResults", page_size.as_str()),
                ("regionCode", self.settings.region_code.as_str()),
                ("videoCategoryId", category_id),
            ],
        );

        match self.list::<VideoResource>(&url).await {
            Ok(items) => items.into_iter().map(VideoResource::into_detail).collect(),
            Err(e) => {
                log_failure(&format!("most popular videos for category {category_id}"), &e);
                Vec::new()
            }
        }
    }

    /// Keyword search in two steps: collect video ids from the search
    /// endpoint, then batch-fetch their snippets and statistics. The second
    /// request is skipped when the first yields no video ids.
    pub async fn search_videos(&self, term: &str) -> Vec<VideoSummary> {
        let term = term.trim();
        if term.is_empty() {
            return Vec::new();
        }

        let video_ids = match self.search_video_ids(term).await {
            Ok(ids) => ids,
            Err(e) => {
                log_failure(&format!("search results for '{term}'"), &e);
                return Vec::new();
            }
        };

        if video_ids.is_empty() {
            log::debug!("Search for '{term}' matched no videos");
            return Vec::new();
        }

        let ids = video_ids.join(",");
        let url = self.endpoint("videos", &[("part", SEARCH_DETAIL_PARTS), ("id", ids.as_str())]);

        match self.list::<VideoResource>(&url).await {
            Ok(items) => items.into_iter().map(VideoResource::into_summary).collect(),
            Err(e) => {
                log_failure(&format!("details for search '{term}'"), &e);
                Vec::new()
            }
        }
    }

    async fn search_video_ids(&self, term: &str) -> Result<Vec<String>, ApiError> {
        let page_size = SEARCH_PAGE_SIZE.to_string();
        let url = self.endpoint(
            "search",
            &[
                ("part", "snippet"),
                ("type", "video"),
                ("maxResults", page_size.as_str()),
                ("q", term),
            ],
        );

        let hits = self.list::<SearchResultResource>(&url).await?;
        Ok(hits
            .iter()
            .filter_map(|hit| hit.id.as_ref()?.searched_video_id())
            .map(str::to_string)
            .collect())
    }

    pub async fn fetch_video_detail(&self, video_id: &str) -> Option<VideoDetail> {
        let url = self.endpoint("videos", &[("part", VIDEO_PARTS), ("id", video_id)]);
        match self.first::<VideoResource>(&url).await {
            Ok(video) => Some(video.into_detail()),
            Err(e) => {
                log_failure(&format!("video {video_id}"), &e);
                None
            }
        }
    }

    pub async fn fetch_channel_detail(&self, channel_id: &str) -> Option<ChannelSummary> {
        let url = self.endpoint("channels", &[("part", CHANNEL_PARTS), ("id", channel_id)]);
        match self.first::<ChannelResource>(&url).await {
            Ok(channel) => Some(channel.into_summary()),
            Err(e) => {
                log_failure(&format!("channel {channel_id}"), &e);
                None
            }
        }
    }

    /// Top-level comments; threads without a top-level snippet are skipped.
    pub async fn fetch_comments(&self, video_id: &str) -> Vec<Comment> {
        let page_size = COMMENT_PAGE_SIZE.to_string();
        let url = self.endpoint(
            "commentThreads",
            &[
                ("part", COMMENT_PARTS),
                ("maxResults", page_size.as_str()),
                ("videoId", video_id),
            ],
        );

        match self.list::<CommentThreadResource>(&url).await {
            Ok(threads) => threads
                .into_iter()
                .filter_map(CommentThreadResource::into_comment)
                .collect(),
            Err(e) => {
                log_failure(&format!("comments for video {video_id}"), &e);
                Vec::new()
            }
        }
    }

    fn endpoint(&self, resource: &str, params: &[(&str, &str)]) -> String {
        let query = params
            .iter()
            .chain(std::iter::once(&("key", self.settings.api_key.as_str())))
            .map(|(name, value)| format!("{name}={}", urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}/{resource}?{query}", self.settings.base_url)
    }

    async fn list<R: DeserializeOwned>(&self, url: &str) -> Result<Vec<R>, ApiError> {
        let payload = self.transport.get_json(url).await?;
        decode_items(payload)
    }

    async fn first<R: DeserializeOwned>(&self, url: &str) -> Result<R, ApiError> {
        self.list(url).await?.into_iter().next().ok_or(ApiError::Empty)
    }
}

/// Pulls `items` out of a list response. A missing or non-array `items` is a
/// malformed response; an item that fails to decode is dropped on its own.
fn decode_items<R: DeserializeOwned>(payload: Value) -> Result<Vec<R>, ApiError> {
    let Value::Object(mut body) = payload else {
        return Err(ApiError::Malformed("response is not a JSON object".to_string()));
    };

    let items = match body.remove("items") {
        Some(Value::Array(items)) => items,
        Some(_) => return Err(ApiError::Malformed("`items` is not an array".to_string())),
        None => {
            let detail = body
                .get("error")
                .and_then(|e| e.get("message"))
                .and_then(Value::as_str)
                .unwrap_or("response has no `items`");
            return Err(ApiError::Malformed(detail.to_string()));
        }
    };

    Ok(items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value::<R>(item) {
            Ok(decoded) => Some(decoded),
            Err(e) => {
                log::warn!("Skipping undecodable item #{index}: {e}");
                None
            }
        })
        .collect())
}

fn log_failure(what: &str, error: &ApiError) {
    match error {
        ApiError::Empty => log::debug!("No {what}: {error}"),
        _ => log::error!("Failed to fetch {what}: {error}"),
    }
}
