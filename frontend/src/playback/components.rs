use crate::catalog::catalog_client;
use crate::models::{Comment, VideoDetail};
use crate::playback::embed_url;
use crate::playback::state::{load_playback, PlaybackState};
use crate::router::Route;
use crate::utils::{format_count, format_relative_time, truncate_chars};
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;

const DESCRIPTION_PREVIEW_CHARS: usize = 250;

impl Reducible for PlaybackState {
    type Action = PlaybackState;

    fn reduce(self: Rc<Self>, next: Self::Action) -> Rc<Self> {
        Rc::new(self.advance(next))
    }
}

#[derive(Properties, PartialEq)]
pub struct VideoPageProps {
    pub category_id: String,
    pub video_id: String,
}

#[function_component(VideoPage)]
pub fn video_page(props: &VideoPageProps) -> Html {
    html! {
        <div class="play-container">
            <PlayVideo video_id={props.video_id.clone()} />
            <Recommended category_id={props.category_id.clone()} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PlayVideoProps {
    pub video_id: String,
}

#[function_component(PlayVideo)]
pub fn play_video(props: &PlayVideoProps) -> Html {
    let playback = use_reducer(PlaybackState::idle);

    {
        let dispatcher = playback.dispatcher();
        use_effect_with(props.video_id.clone(), move |video_id| {
            let video_id = video_id.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let client = catalog_client();
                load_playback(&client, &video_id, move |state| dispatcher.dispatch(state)).await;
            });
            || ()
        });
    }

    let video = playback.video.as_ref();
    let title = video.map_or("Title here", |v| v.summary.title.as_str());
    let channel_title = video.map_or("", |v| v.summary.channel_title.as_str());
    let channel_thumbnail = playback
        .channel
        .as_ref()
        .map(|c| c.thumbnail_url.clone())
        .unwrap_or_default();
    let subscribers = playback.channel.as_ref().map_or(0, |c| c.subscriber_count);

    html! {
        <div class="play-video">
            <iframe
                src={embed_url(&props.video_id, true)}
                frameborder="0"
                allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share"
                referrerpolicy="strict-origin-when-cross-origin"
                allowfullscreen=true
            ></iframe>

            <h3>{ title }</h3>

            <VideoStats video={video.cloned()} />

            <hr />

            <div class="publisher">
                <img src={channel_thumbnail} alt="Channel" />
                <div>
                    <p>{ channel_title }</p>
                    <span>{ format!("{} Subscribers", format_count(subscribers)) }</span>
                </div>
                <button>{"Subscribe"}</button>
            </div>

            <div class="vid-description">
                <p>{ description_preview(video) }</p>
                <hr />
                <h4>{ format!("{} Comments", format_count(video.map_or(0, |v| v.comment_count))) }</h4>
                {
                    if playback.is_ready() {
                        html! {}
                    } else {
                        html! { <p class="loading">{"Loading..."}</p> }
                    }
                }
                { for playback.comments.iter().map(|comment| html! {
                    <CommentItem comment={comment.clone()} />
                })}
            </div>
        </div>
    }
}

fn description_preview(video: Option<&VideoDetail>) -> String {
    match video.map(|v| v.description.as_str()) {
        Some(description) if !description.is_empty() => {
            truncate_chars(description, DESCRIPTION_PREVIEW_CHARS).to_string()
        }
        _ => "Description here".to_string(),
    }
}

#[derive(Properties, PartialEq)]
pub struct VideoStatsProps {
    pub video: Option<VideoDetail>,
}

#[function_component(VideoStats)]
pub fn video_stats(props: &VideoStatsProps) -> Html {
    let Some(video) = &props.video else {
        return html! { <div class="play-video-info"></div> };
    };

    html! {
        <div class="play-video-info">
            <p>
                { format!(
                    "{} views \u{2022} {}",
                    format_count(video.summary.view_count),
                    format_relative_time(&video.summary.published_at)
                ) }
            </p>
            <div>
                <span>{ format!("\u{1F44D} {}", format_count(video.like_count)) }</span>
                <span>{"Share"}</span>
                <span>{"Save"}</span>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CommentItemProps {
    pub comment: Comment,
}

#[function_component(CommentItem)]
pub fn comment_item(props: &CommentItemProps) -> Html {
    let comment = &props.comment;
    html! {
        <div class="comment">
            <img src={comment.author_avatar_url.clone()} alt="user_profile" />
            <div>
                <h3>{ &comment.author_name }</h3>
                <p>{ &comment.text }</p>
                <div class="comment-action">
                    <span>{ format!("\u{1F44D} {}", format_count(comment.like_count)) }</span>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct RecommendedProps {
    pub category_id: String,
}

#[function_component(Recommended)]
pub fn recommended(props: &RecommendedProps) -> Html {
    let videos = use_state(Vec::<VideoDetail>::new);

    {
        let videos = videos.clone();
        use_effect_with(props.category_id.clone(), move |category_id| {
            let category_id = category_id.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let client = catalog_client();
                videos.set(client.fetch_recommended(&category_id).await);
            });
            || ()
        });
    }

    html! {
        <div class="recommended">
            { for videos.iter().map(|detail| {
                let video = &detail.summary;
                html! {
                    <Link<Route> to={Route::video(&video.category_id, &video.id)} classes="side-video-list">
                        <img src={video.thumbnail_url.clone()} alt="thumbnail" />
                        <div class="vid-info">
                            <h4>{ &video.title }</h4>
                            <p>{ &video.channel_title }</p>
                            <p>{ format!("{} Views", format_count(video.view_count)) }</p>
                        </div>
                    </Link<Route>>
                }
            })}
        </div>
    }
}
