use payloads::APIClient;
use yew::prelude::*;
use yew_router::prelude::*;

mod components;
pub mod hooks;
pub mod logs;
mod pages;

use components::layout::MainLayout;
use pages::{HomePage, NotFoundPage, ProfilePage};

// Global API client - configurable via environment or same-origin fallback
pub fn get_api_client() -> APIClient {
    // Try environment variable first (set at build time)
    let address = option_env!("BACKEND_URL")
        .map(|url| url.to_string())
        .or_else(page_origin)
        .unwrap_or_else(|| {
            tracing::warn!("No BACKEND_URL and no page origin; API calls will fail");
            String::new()
        });

    APIClient {
        address,
        inner_client: reqwest::Client::new(),
    }
}

fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

#[function_component]
pub fn App() -> Html {
    html! {
        <BrowserRouter>
            <MainLayout>
                <Switch<Route> render={switch} />
            </MainLayout>
        </BrowserRouter>
    }
}

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/profile")]
    Profile,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <HomePage /> },
        Route::Profile => html! { <ProfilePage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
