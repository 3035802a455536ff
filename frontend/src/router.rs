use crate::home::components::HomePage;
use crate::playback::components::VideoPage;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/video/:category_id/:video_id")]
    Video {
        category_id: String,
        video_id: String,
    },
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Playback route for a video listed under `category_id`.
    pub fn video(category_id: &str, video_id: &str) -> Self {
        Route::Video {
            category_id: category_id.to_string(),
            video_id: video_id.to_string(),
        }
    }
}

pub fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <HomePage /> },
        Route::Video {
            category_id,
            video_id,
        } => html! { <VideoPage category_id={category_id} video_id={video_id} /> },
        Route::NotFound => html! {
            <div class="not-found">
                <h1>{"404 - Page Not Found"}</h1>
                <Link<Route> to={Route::Home}>
                    {"Back to trending"}
                </Link<Route>>
            </div>
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn video_route_carries_both_ids_in_its_path() {
        assert_eq!(Route::video("10", "abc123").to_path(), "/video/10/abc123");
        assert_eq!(Route::Home.to_path(), "/");
    }
}
