pub mod use_fetch;
pub mod use_profile;

pub use fetch_state::{FetchError, FetchOptions, FetchState};
pub use use_fetch::{FetchHookReturn, use_fetch, use_fetch_with_options};
pub use use_profile::use_profile;
