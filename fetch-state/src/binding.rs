use std::cell::RefCell;
use std::fmt::Display;
use std::future::Future;

use crate::{AsyncState, FetchOptions, Spawn};

/// An [`AsyncState`] tied to a component's render cycle.
///
/// The owning component calls [`set_producer`](FetchBinding::set_producer)
/// on every render, [`sync`](FetchBinding::sync) after every render with its
/// current dependencies, and [`teardown`](FetchBinding::teardown) when it
/// goes away. With `autorun` on, a run starts on the first sync and on every
/// sync whose dependencies differ from the previous ones. With `autorun`
/// off, only explicit [`AsyncState::run`] calls fetch.
pub struct FetchBinding<T, D> {
    state: AsyncState<T>,
    deps: RefCell<Option<D>>,
    autorun: bool,
}

impl<T: 'static, D: PartialEq> FetchBinding<T, D> {
    pub fn new<F, Fut, E>(
        producer: F,
        spawner: impl Spawn + 'static,
        options: FetchOptions,
    ) -> Self
    where
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = Result<T, E>> + 'static,
        E: Display,
    {
        FetchBinding {
            state: AsyncState::with_options(
                producer,
                spawner,
                options.autorun(false),
            ),
            deps: RefCell::new(None),
            autorun: options.autorun,
        }
    }

    pub fn state(&self) -> &AsyncState<T> {
        &self.state
    }

    pub fn set_producer<F, Fut, E>(&self, producer: F)
    where
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = Result<T, E>> + 'static,
        E: Display,
    {
        self.state.set_producer(producer);
    }

    /// Record the dependencies seen by the latest render. Returns whether
    /// a run was started.
    pub fn sync(&self, deps: D) -> bool {
        let changed = {
            let mut seen = self.deps.borrow_mut();
            let changed = seen.as_ref() != Some(&deps);
            *seen = Some(deps);
            changed
        };

        if changed && self.autorun {
            tracing::debug!("fetch dependencies changed");
            self.state.run();
            true
        } else {
            false
        }
    }

    /// Register the re-render callback.
    pub fn subscribe(&self, listener: impl Fn() + 'static) {
        self.state.subscribe(listener);
    }

    /// Stop notifying the component. A run still in flight settles into
    /// the state without anyone observing it.
    pub fn teardown(&self) {
        self.state.unsubscribe();
    }
}
