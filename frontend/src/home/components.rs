use crate::catalog::catalog_client;
use crate::home::categories::{Category, CATEGORIES, HOME_CATEGORY_ID};
use crate::home::feed::{refresh_feed, FeedMode};
use crate::models::{SearchState, VideoSummary};
use crate::router::Route;
use crate::utils::{format_count, format_relative_time};
use crate::ShellContext;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub expanded: bool,
    pub selected: String,
    pub on_select: Callback<String>,
}

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let class = if props.expanded {
        "sidebar"
    } else {
        "sidebar small-sidebar"
    };

    html! {
        <div class={class}>
            <div class="shortcut-links">
                { for CATEGORIES.iter().map(|category| {
                    let Category { id, label, icon } = *category;
                    let on_click = {
                        let on_select = props.on_select.clone();
                        Callback::from(move |_| on_select.emit(id.to_string()))
                    };
                    let active = if props.selected == id { "side-link active" } else { "side-link" };
                    html! {
                        <div class={active} onclick={on_click}>
                            <span class="side-icon" title={label}>{ icon }</span>
                            <p>{ label }</p>
                        </div>
                    }
                })}
                <hr />
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct VideoCardProps {
    pub video: VideoSummary,
}

#[function_component(VideoCard)]
pub fn video_card(props: &VideoCardProps) -> Html {
    let video = &props.video;
    html! {
        <Link<Route> to={Route::video(&video.category_id, &video.id)} classes="card">
            <img src={video.thumbnail_url.clone()} alt={video.title.clone()} />
            <h2>{ &video.title }</h2>
            <h3>{ &video.channel_title }</h3>
            <p>
                { format!(
                    "{} views \u{2022} {}",
                    format_count(video.view_count),
                    format_relative_time(&video.published_at)
                ) }
            </p>
        </Link<Route>>
    }
}

#[derive(Properties, PartialEq)]
pub struct FeedProps {
    pub category: String,
    pub search: SearchState,
}

#[function_component(Feed)]
pub fn feed(props: &FeedProps) -> Html {
    let videos = use_state(Vec::<VideoSummary>::new);

    {
        let videos = videos.clone();
        use_effect_with(
            (props.category.clone(), props.search.clone()),
            move |(category, search)| {
                let mode = FeedMode::select(category, search);
                if let Some(seeded) = mode.seed(search) {
                    videos.set(seeded);
                }

                // One fetch per change; an older fetch may still land after this one.
                wasm_bindgen_futures::spawn_local(async move {
                    let client = catalog_client();
                    refresh_feed(&client, mode, move |list| videos.set(list)).await;
                });
                || ()
            },
        );
    }

    html! {
        <div class="feed">
            {
                if videos.is_empty() {
                    html! { <p class="no-results">{"No results found"}</p> }
                } else {
                    html! {
                        { for videos.iter().map(|video| html! {
                            <VideoCard video={video.clone()} />
                        })}
                    }
                }
            }
        </div>
    }
}

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let shell = use_context::<ShellContext>().unwrap_or_default();
    let category = use_state(|| HOME_CATEGORY_ID.to_string());

    let on_select = {
        let category = category.clone();
        Callback::from(move |id: String| category.set(id))
    };

    let container = if shell.sidebar {
        "container"
    } else {
        "container large-container"
    };

    html! {
        <>
            <Sidebar expanded={shell.sidebar} selected={(*category).clone()} on_select={on_select} />
            <div class={container}>
                <Feed category={(*category).clone()} search={shell.search.clone()} />
            </div>
        </>
    }
}
