use crate::catalog::catalog_client;
use crate::env_variable_utils::CONFIG;
use crate::models::SearchState;
use crate::router::Route;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub on_toggle_sidebar: Callback<()>,
    pub on_search_results: Callback<SearchState>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let on_menu_click = {
        let on_toggle_sidebar = props.on_toggle_sidebar.clone();
        Callback::from(move |_: MouseEvent| on_toggle_sidebar.emit(()))
    };

    html! {
        <nav class="flex-div">
            <div class="nav-left flex-div">
                <button class="menu-icon" onclick={on_menu_click} aria-label="menu">{"\u{2630}"}</button>
                <Link<Route> to={Route::Home}>
                    <span class="logo">{ &CONFIG.app_name }</span>
                </Link<Route>>
            </div>

            <div class="nav-middle flex-div">
                <div class="search-box flex-div">
                    <SearchBar on_search_results={props.on_search_results.clone()} />
                </div>
            </div>

            <div class="nav-right flex-div">
                <span class="nav-glyph" title="notifications">{"\u{1F514}"}</span>
                <span class="nav-glyph user-icon" title="profile">{"\u{1F464}"}</span>
            </div>
        </nav>
    }
}

#[derive(Properties, PartialEq)]
pub struct SearchBarProps {
    pub on_search_results: Callback<SearchState>,
}

#[function_component(SearchBar)]
pub fn search_bar(props: &SearchBarProps) -> Html {
    let current_input = use_state(String::new);
    let searching = use_state(|| false);
    let navigator = use_navigator();

    let on_input = {
        let current_input = current_input.clone();
        Callback::from(move |e: InputEvent| {
            let input_value = e.target_unchecked_into::<HtmlInputElement>().value();
            current_input.set(input_value);
        })
    };

    // Runs the search and reports the whole result set upward, replacing the
    // previous search. Failures report an empty result set.
    let on_submit = {
        let on_search_results = props.on_search_results.clone();
        let current_input = current_input.clone();
        let searching = searching.clone();
        Callback::from(move |e: web_sys::SubmitEvent| {
            e.prevent_default();

            let term = current_input.trim().to_string();
            let on_search_results = on_search_results.clone();
            let searching = searching.clone();

            if let Some(navigator) = &navigator {
                navigator.push(&Route::Home);
            }

            searching.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let results = catalog_client().search_videos(&term).await;
                log::info!("Search '{}' returned {} videos", term, results.len());
                on_search_results.emit(SearchState::new(term, results));
                searching.set(false);
            });
        })
    };

    html! {
        <form onsubmit={on_submit}>
            <input
                type="text"
                placeholder="Search"
                value={(*current_input).clone()}
                oninput={on_input}
            />
            <button type="submit" class="search-button" disabled={*searching}>
                {"\u{1F50D}"}
            </button>
        </form>
    }
}
