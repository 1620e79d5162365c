//! Loading/error/data state around a single asynchronous call.
//!
//! [`AsyncState`] wraps a zero-argument producer and exposes what UI code
//! needs to render it: the last fetched value, whether a call is
//! outstanding, and the last failure. Failures never propagate to the
//! caller; they are captured into the state as a [`FetchError`].
//!
//! ```rust
//! use fetch_state::{AsyncState, FetchOptions};
//! use futures::executor::LocalPool;
//!
//! let mut pool = LocalPool::new();
//! let state = AsyncState::with_options(
//!     || async { Ok::<_, String>("Ada".to_string()) },
//!     pool.spawner(),
//!     FetchOptions::default(),
//! );
//!
//! // autorun kicked off the first call during construction
//! assert!(state.is_loading());
//!
//! pool.run_until_stalled();
//! assert_eq!(state.data().as_ref(), Some(&"Ada".to_string()));
//! assert!(!state.is_loading());
//! ```
//!
//! The state is single-threaded (`Rc` based) and is driven by whatever
//! executor the caller provides through [`Spawn`].

mod binding;
mod error;
mod options;
mod spawn;
mod state;
mod wrapper;

pub use binding::FetchBinding;
pub use error::{FetchError, UNEXPECTED_ERROR_MESSAGE};
pub use options::FetchOptions;
pub use spawn::Spawn;
pub use state::{FetchState, Snapshot};
pub use wrapper::AsyncState;
