mod catalog;
mod config;
mod env_variable_utils;
mod home;
mod logging;
mod models;
mod navbar;
mod playback;
mod router;
mod utils;

use crate::env_variable_utils::CONFIG;
use crate::models::SearchState;
use crate::navbar::Navbar;
use crate::router::{switch, Route};
use yew::prelude::*;
use yew_router::prelude::*;

/// Shell state threaded down to the pages.
#[derive(Debug, Clone, PartialEq)]
pub struct ShellContext {
    pub sidebar: bool,
    pub search: SearchState,
}

impl Default for ShellContext {
    fn default() -> Self {
        Self {
            sidebar: true,
            search: SearchState::default(),
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let sidebar = use_state(|| true);
    let search = use_state(SearchState::default);

    let on_toggle_sidebar = {
        let sidebar = sidebar.clone();
        Callback::from(move |_: ()| sidebar.set(!*sidebar))
    };

    let on_search_results = {
        let search = search.clone();
        Callback::from(move |results: SearchState| search.set(results))
    };

    let context = ShellContext {
        sidebar: *sidebar,
        search: (*search).clone(),
    };

    html! {
        <BrowserRouter>
            <ContextProvider<ShellContext> context={context}>
                <Navbar on_toggle_sidebar={on_toggle_sidebar} on_search_results={on_search_results} />
                <Switch<Route> render={switch} />
            </ContextProvider<ShellContext>>
        </BrowserRouter>
    }
}

fn main() {
    logging::init_logger();
    log::set_max_level(logging::level_for(CONFIG.debug_mode));

    log::info!(
        "NAME: \"{}\", API: \"{}\" REGION: \"{}\" DEBUG: \"{}\"",
        CONFIG.app_name,
        CONFIG.api_base_url,
        CONFIG.region_code,
        CONFIG.debug_mode
    );

    yew::Renderer::<App>::new().render();
}
