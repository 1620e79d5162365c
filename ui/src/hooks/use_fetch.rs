use std::fmt::Display;
use std::future::Future;
use std::rc::Rc;

use fetch_state::{FetchBinding, FetchError, FetchOptions, FetchState};
use futures::future::LocalBoxFuture;
use yew::prelude::*;

/// Generic fetch hook return type
pub struct FetchHookReturn<T> {
    pub data: FetchState<T>,
    pub is_loading: bool,
    pub error: Option<FetchError>,
    pub refetch: Callback<()>,
    pub reset: Callback<()>,
}

impl<T: Clone> FetchHookReturn<T> {
    /// True when nothing is in flight and there is either a failure or no
    /// data to show, i.e. when offering a manual fetch makes sense.
    pub fn can_refetch(&self) -> bool {
        !self.is_loading && (self.error.is_some() || !self.data.is_fetched())
    }

    /// Render based on fetch state with contextual loading/error messages.
    ///
    /// - No data + loading: "Loading {context}..."
    /// - No data + error: "Error loading {context}: ..."
    /// - Has data: calls `render_fn(data, is_loading, error)`, where
    ///   `is_loading` means a refetch is in progress and `error` comes from
    ///   a failed refetch (the previous data is still shown)
    ///
    /// ```rust,ignore
    /// profile_hook.render("user profile", |profile, is_loading, error| {
    ///     html! { <ProfileDetails profile={profile.clone()} /> }
    /// })
    /// ```
    pub fn render<F>(&self, context: &str, render_fn: F) -> Html
    where
        F: Fn(&T, bool, Option<&FetchError>) -> Html,
    {
        match self.data.as_ref() {
            None => {
                if self.is_loading {
                    html! {
                        <div class="text-center py-12">
                            <p class="text-neutral-600 dark:text-neutral-400">
                                {format!("Loading {}...", context)}
                            </p>
                        </div>
                    }
                } else if let Some(error) = &self.error {
                    html! {
                        <div class="p-4 rounded-md bg-red-50 \
                                   dark:bg-red-900/20 border \
                                   border-red-200 dark:border-red-800">
                            <p class="text-sm text-red-700 \
                                      dark:text-red-400">
                                {format!("Error loading {}: {}", context, error)}
                            </p>
                        </div>
                    }
                } else {
                    // not fetched yet and nothing in flight (autorun off or
                    // after a reset)
                    html! {
                        <div class="text-center py-12">
                            <p class="text-neutral-600 dark:text-neutral-400">
                                {format!("No {} loaded", context)}
                            </p>
                        </div>
                    }
                }
            }
            Some(data) => render_fn(data, self.is_loading, self.error.as_ref()),
        }
    }
}

fn spawn_fetch(task: LocalBoxFuture<'static, ()>) {
    yew::platform::spawn_local(task);
}

/// Generic fetch hook composer.
///
/// Fetches after the first render and again whenever `deps` changes. Pass
/// `()` to fetch once per component instance. `refetch` always calls the
/// closure from the latest render.
///
/// # Example
///
/// ```rust,ignore
/// #[hook]
/// pub fn use_user_profile() -> FetchHookReturn<UserProfile> {
///     use_fetch((), || async move {
///         get_api_client().user_profile().await
///     })
/// }
/// ```
#[hook]
pub fn use_fetch<T, D, F, Fut, E>(deps: D, fetch_fn: F) -> FetchHookReturn<T>
where
    T: Clone + 'static,
    D: PartialEq + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, E>> + 'static,
    E: Display + 'static,
{
    use_fetch_with_options(deps, FetchOptions::default(), fetch_fn)
}

/// [`use_fetch`] with explicit [`FetchOptions`].
///
/// With `autorun` off nothing is fetched until `refetch` is emitted, even
/// when `deps` changes.
#[hook]
pub fn use_fetch_with_options<T, D, F, Fut, E>(
    deps: D,
    options: FetchOptions,
    fetch_fn: F,
) -> FetchHookReturn<T>
where
    T: Clone + 'static,
    D: PartialEq + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, E>> + 'static,
    E: Display + 'static,
{
    let update = use_force_update();
    let fetch_fn = Rc::new(fetch_fn);

    // One binding per component instance.
    let binding = {
        let fetch_fn = fetch_fn.clone();
        use_memo((), move |_| {
            let binding =
                FetchBinding::new(move || fetch_fn(), spawn_fetch, options);
            binding.subscribe(move || update.force_update());
            binding
        })
    };

    binding.set_producer(move || fetch_fn());

    {
        let binding = binding.clone();
        use_effect(move || {
            binding.sync(deps);
        });
    }

    {
        let binding = binding.clone();
        use_effect_with((), move |_| move || binding.teardown());
    }

    let state = binding.state().clone();
    let snapshot = state.snapshot();

    let refetch = {
        let state = state.clone();
        Callback::from(move |_| state.run())
    };

    let reset = {
        let state = state.clone();
        Callback::from(move |_| state.reset())
    };

    FetchHookReturn {
        data: snapshot.data,
        is_loading: snapshot.loading,
        error: snapshot.error,
        refetch,
        reset,
    }
}
