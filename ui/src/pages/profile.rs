use crate::components::PersonIcon;
use crate::hooks::{FetchError, use_profile};
use payloads::responses::UserProfile;
use yew::prelude::*;

#[function_component]
pub fn ProfilePage() -> Html {
    let profile_hook = use_profile();

    let on_retry = {
        let refetch = profile_hook.refetch.clone();
        Callback::from(move |_: MouseEvent| refetch.emit(()))
    };

    let on_clear = {
        let reset = profile_hook.reset.clone();
        Callback::from(move |_: MouseEvent| reset.emit(()))
    };

    let content = profile_hook.render("user profile", |profile, is_loading, error| {
        html! {
            <ProfileDetails
                profile={profile.clone()}
                refreshing={is_loading}
                error={error.map(FetchError::message)}
            />
        }
    });

    html! {
        <div class="flex flex-col items-center gap-5 py-12">
            <PersonIcon class={classes!("size-10", "text-neutral-900", "dark:text-white")} />
            <p class="text-gray-500">{"Profile"}</p>

            {content}

            <div class="flex gap-3">
                if profile_hook.can_refetch() {
                    <button
                        onclick={on_retry}
                        class="px-4 py-2 text-sm font-medium rounded-md \
                               bg-neutral-900 text-white hover:bg-neutral-700 \
                               dark:bg-neutral-100 dark:text-neutral-900"
                    >
                        {if profile_hook.error.is_some() { "Try again" } else { "Load profile" }}
                    </button>
                }
                if profile_hook.data.is_fetched() {
                    <button
                        onclick={on_clear}
                        class="px-4 py-2 text-sm font-medium rounded-md \
                               border border-neutral-300 text-neutral-700 \
                               dark:border-neutral-600 dark:text-neutral-300"
                    >
                        {"Clear"}
                    </button>
                }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ProfileDetailsProps {
    profile: UserProfile,
    refreshing: bool,
    error: Option<String>,
}

#[function_component]
fn ProfileDetails(props: &ProfileDetailsProps) -> Html {
    let profile = &props.profile;

    html! {
        <div class="w-full max-w-md space-y-4">
            if props.refreshing {
                <p class="text-sm text-neutral-500">{"Refreshing..."}</p>
            }
            if let Some(error) = &props.error {
                // last fetch failed, the details below are from an earlier one
                <div class="p-3 rounded-md bg-red-50 dark:bg-red-900/20 \
                            border border-red-200 dark:border-red-800">
                    <p class="text-sm text-red-700 dark:text-red-400">{error.clone()}</p>
                </div>
            }
            <dl class="divide-y divide-neutral-200 dark:divide-neutral-700">
                <Row label="Name" value={profile.shown_name().to_string()} />
                <Row label="Username" value={profile.username.clone()} />
                <Row label="Email" value={profile.email.clone()} />
                <Row
                    label="Email verified"
                    value={if profile.email_verified { "Yes" } else { "No" }.to_string()}
                />
                <Row label="Balance" value={profile.balance.to_string()} />
            </dl>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct RowProps {
    label: AttrValue,
    value: AttrValue,
}

#[function_component]
fn Row(props: &RowProps) -> Html {
    html! {
        <div class="flex justify-between py-2">
            <dt class="text-sm text-neutral-500 dark:text-neutral-400">{props.label.clone()}</dt>
            <dd class="text-sm font-medium text-neutral-900 dark:text-neutral-100">{props.value.clone()}</dd>
        </div>
    }
}
