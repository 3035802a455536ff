// Substitutes for fields the platform omits. Every optional upstream field maps
// to exactly one of these.
pub const NO_TITLE: &str = "No Title";
pub const NO_CHANNEL: &str = "No Channel";
pub const UNKNOWN_AUTHOR: &str = "Unknown User";
pub const DEFAULT_CATEGORY_ID: &str = "0";

/// One card in a listing. Counts default to `0`, text to the constants above
/// and URLs/ids/timestamps to the empty string.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoSummary {
    pub id: String,
    pub title: String,
    pub channel_title: String,
    pub thumbnail_url: String,
    pub view_count: u64,
    pub published_at: String,
    pub category_id: String,
}

impl Default for VideoSummary {
    fn default() -> Self {
        Self {
            id: String::new(),
            title: NO_TITLE.to_string(),
            channel_title: NO_CHANNEL.to_string(),
            thumbnail_url: String::new(),
            view_count: 0,
            published_at: String::new(),
            category_id: DEFAULT_CATEGORY_ID.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct VideoDetail {
    pub summary: VideoSummary,
    pub description: String,
    pub like_count: u64,
    pub comment_count: u64,
    pub channel_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChannelSummary {
    pub thumbnail_url: String,
    pub subscriber_count: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub author_name: String,
    pub author_avatar_url: String,
    pub like_count: u64,
    pub text: String,
}

impl Default for Comment {
    fn default() -> Self {
        Self {
            author_name: UNKNOWN_AUTHOR.to_string(),
            author_avatar_url: String::new(),
            like_count: 0,
            text: String::new(),
        }
    }
}

/// Last submitted search, owned by the app shell. A new search replaces it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchState {
    pub term: String,
    pub results: Vec<VideoSummary>,
}

impl SearchState {
    pub fn new(term: impl Into<String>, results: Vec<VideoSummary>) -> Self {
        Self {
            term: term.into(),
            results,
        }
    }

    pub fn trimmed_term(&self) -> &str {
        self.term.trim()
    }

    pub fn is_active(&self) -> bool {
        !self.trimmed_term().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_defaults_match_fallback_table() {
        let summary = VideoSummary::default();
        assert_eq!(summary.title, "No Title");
        assert_eq!(summary.channel_title, "No Channel");
        assert_eq!(summary.view_count, 0);
        assert_eq!(summary.category_id, "0");
        assert!(summary.id.is_empty());
        assert!(summary.thumbnail_url.is_empty());
    }

    #[test]
    fn search_state_is_active_only_for_non_blank_terms() {
        assert!(!SearchState::default().is_active());
        assert!(!SearchState::new("   ", Vec::new()).is_active());

        let state = SearchState::new("  rust  ", Vec::new());
        assert!(state.is_active());
        assert_eq!(state.trimmed_term(), "rust");
    }
}
