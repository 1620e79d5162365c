use payloads::responses;
use yew::prelude::*;

use crate::get_api_client;
use crate::hooks::{FetchHookReturn, use_fetch};

/// Hook to fetch the current user's profile once per component instance.
#[hook]
pub fn use_profile() -> FetchHookReturn<responses::UserProfile> {
    use_fetch((), || async move {
        let api_client = get_api_client();
        api_client.user_profile().await
    })
}
