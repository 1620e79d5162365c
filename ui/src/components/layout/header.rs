use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component]
pub fn Header() -> Html {
    let route = use_route::<Route>();

    let tab = |to: Route, label: &str| {
        let is_active = route.as_ref() == Some(&to);
        html! {
            <Link<Route>
                to={to}
                classes={classes!(format!(
                    "py-2 px-1 border-b-2 font-medium text-sm {}",
                    if is_active {
                        "border-neutral-500 text-neutral-600 dark:text-neutral-400"
                    } else {
                        "border-transparent text-neutral-500 hover:text-neutral-700 hover:border-neutral-300 dark:text-neutral-400 dark:hover:text-neutral-300"
                    }
                ))}
            >
                {label.to_string()}
            </Link<Route>>
        }
    };

    html! {
        <header class="bg-white dark:bg-gray-800 border-b border-gray-200 dark:border-gray-700">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex-shrink-0">
                        <h1 class="text-xl font-semibold text-gray-900 dark:text-white">{"Profile"}</h1>
                    </div>
                    <nav class="-mb-px flex space-x-8">
                        {tab(Route::Home, "Home")}
                        {tab(Route::Profile, "Profile")}
                    </nav>
                </div>
            </div>
        </header>
    }
}
