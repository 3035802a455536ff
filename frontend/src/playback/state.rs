use crate::catalog::client::CatalogClient;
use crate::catalog::transport::Transport;
use crate::models::{ChannelSummary, Comment, VideoDetail};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackPhase {
    Idle,
    LoadingVideo,
    LoadingAux,
    Ready,
}

/// Everything the playback page shows for one video id.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    pub video_id: String,
    pub phase: PlaybackPhase,
    pub video: Option<VideoDetail>,
    pub channel: Option<ChannelSummary>,
    pub comments: Vec<Comment>,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::idle()
    }
}

impl PlaybackState {
    pub fn idle() -> Self {
        Self {
            video_id: String::new(),
            phase: PlaybackPhase::Idle,
            video: None,
            channel: None,
            comments: Vec::new(),
        }
    }

    /// Fresh state for a new video id, with nothing carried over from the
    /// previous one.
    pub fn loading(video_id: &str) -> Self {
        Self {
            video_id: video_id.to_string(),
            phase: PlaybackPhase::LoadingVideo,
            ..Self::idle()
        }
    }

    /// Records the video lookup. Without a channel id there is nothing left to
    /// fetch and the state is final.
    pub fn with_video(self, video: Option<VideoDetail>) -> Self {
        let phase = match video.as_ref().and_then(|v| v.channel_id.as_ref()) {
            Some(_) => PlaybackPhase::LoadingAux,
            None => PlaybackPhase::Ready,
        };
        Self {
            phase,
            video,
            ..self
        }
    }

    pub fn with_aux(self, channel: Option<ChannelSummary>, comments: Vec<Comment>) -> Self {
        Self {
            phase: PlaybackPhase::Ready,
            channel,
            comments,
            ..self
        }
    }

    pub fn channel_id(&self) -> Option<&str> {
        self.video.as_ref()?.channel_id.as_deref()
    }

    pub fn is_ready(&self) -> bool {
        self.phase == PlaybackPhase::Ready
    }

    /// Folds an update from a playback task into the displayed state. A task
    /// started for another video id may only take over by announcing a new
    /// load; its later updates are ignored once a different id is current.
    pub fn advance(&self, next: PlaybackState) -> PlaybackState {
        if next.phase == PlaybackPhase::LoadingVideo || next.video_id == self.video_id {
            next
        } else {
            log::debug!(
                "Dropping playback update for {} while showing {}",
                next.video_id,
                self.video_id
            );
            self.clone()
        }
    }
}

/// Runs the dependent fetch sequence for `video_id`, reporting each step.
///
/// The reset is reported before any request goes out. Channel and comments
/// are fetched concurrently, and only when the video names its channel.
pub async fn load_playback<T: Transport>(
    client: &CatalogClient<T>,
    video_id: &str,
    report: impl Fn(PlaybackState),
) {
    if video_id.is_empty() {
        report(PlaybackState::idle());
        return;
    }

    let loading = PlaybackState::loading(video_id);
    report(loading.clone());

    let video = client.fetch_video_detail(video_id).await;
    let state = loading.with_video(video);
    report(state.clone());

    let Some(channel_id) = state.channel_id().map(str::to_string) else {
        log::debug!("Video {video_id} has no channel id; skipping channel and comments");
        return;
    };

    let (channel, comments) = futures::join!(
        client.fetch_channel_detail(&channel_id),
        client.fetch_comments(video_id)
    );
    report(state.with_aux(channel, comments));
}
