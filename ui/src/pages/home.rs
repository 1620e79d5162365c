use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component]
pub fn HomePage() -> Html {
    html! {
        <div class="text-center space-y-4">
            <h1 class="text-3xl font-bold text-neutral-900 dark:text-neutral-100">
                {"Welcome"}
            </h1>
            <Link<Route>
                to={Route::Profile}
                classes="inline-flex items-center text-sm text-neutral-600 hover:text-neutral-800 dark:text-neutral-400 dark:hover:text-neutral-200"
            >
                {"View your profile →"}
            </Link<Route>>
        </div>
    }
}
