use crate::catalog::client::CatalogClient;
use crate::catalog::transport::Transport;
use crate::models::{SearchState, VideoSummary};

/// What the home feed is currently listing.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedMode {
    Trending { category_id: String },
    Search { term: String },
}

impl FeedMode {
    /// Search wins whenever the shell holds a non-blank term.
    pub fn select(category_id: &str, search: &SearchState) -> Self {
        if search.is_active() {
            FeedMode::Search {
                term: search.trimmed_term().to_string(),
            }
        } else {
            FeedMode::Trending {
                category_id: category_id.to_string(),
            }
        }
    }

    /// Results the shell already holds for this mode, shown until the fetch
    /// for the mode lands.
    pub fn seed(&self, search: &SearchState) -> Option<Vec<VideoSummary>> {
        match self {
            FeedMode::Search { term } if term == search.trimmed_term() => {
                Some(search.results.clone())
            }
            _ => None,
        }
    }
}

pub async fn load_feed<T: Transport>(
    client: &CatalogClient<T>,
    mode: &FeedMode,
) -> Vec<VideoSummary> {
    match mode {
        FeedMode::Trending { category_id } => client
            .fetch_trending(category_id)
            .await
            .into_iter()
            .map(|detail| detail.summary)
            .collect(),
        FeedMode::Search { term } => client.search_videos(term).await,
    }
}

/// Fetches the list for `mode` and hands it to `display`, replacing whatever
/// was shown before.
///
/// Refreshes are neither cancelled nor sequenced: when two overlap, whichever
/// resolves last is what stays on screen, even if it was dispatched first.
pub async fn refresh_feed<T: Transport>(
    client: &CatalogClient<T>,
    mode: FeedMode,
    display: impl Fn(Vec<VideoSummary>),
) {
    log::debug!("Refreshing feed: {mode:?}");
    let videos = load_feed(client, &mode).await;
    display(videos);
}
