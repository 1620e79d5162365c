use std::cell::{Cell, RefCell};
use std::fmt::{self, Display};
use std::future::Future;
use std::panic::{self, AssertUnwindSafe};
use std::rc::{Rc, Weak};

use futures::future::{self as fut, FutureExt, LocalBoxFuture};

use crate::{FetchError, FetchOptions, FetchState, Snapshot, Spawn};

type Producer<T> =
    Rc<dyn Fn() -> LocalBoxFuture<'static, Result<T, FetchError>>>;
type Listener = Rc<dyn Fn()>;

/// Loading/error/data state around a zero-argument async producer.
///
/// Cloning is cheap and yields another handle to the same state.
///
/// Every [`run`](AsyncState::run) is tagged with a generation number. With
/// [`FetchOptions::discard_stale`] set (the default) only the latest
/// generation may write its outcome, so overlapping runs cannot leave an
/// older result on screen. [`reset`](AsyncState::reset) also starts a new
/// generation, which keeps in-flight runs from overwriting the reset state.
pub struct AsyncState<T> {
    inner: Rc<Inner<T>>,
}

struct Inner<T> {
    snapshot: RefCell<Snapshot<T>>,
    producer: RefCell<Producer<T>>,
    listener: RefCell<Option<Listener>>,
    spawner: Box<dyn Spawn>,
    generation: Cell<u64>,
    options: FetchOptions,
}

impl<T> Clone for AsyncState<T> {
    fn clone(&self) -> Self {
        AsyncState {
            inner: self.inner.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for AsyncState<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncState")
            .field("snapshot", &*self.inner.snapshot.borrow())
            .field("generation", &self.inner.generation.get())
            .field("options", &self.inner.options)
            .finish()
    }
}

impl<T: 'static> AsyncState<T> {
    /// Create a wrapper with default options, which runs the producer once
    /// right away.
    pub fn new<F, Fut, E>(producer: F, spawner: impl Spawn + 'static) -> Self
    where
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = Result<T, E>> + 'static,
        E: Display,
    {
        Self::with_options(producer, spawner, FetchOptions::default())
    }

    pub fn with_options<F, Fut, E>(
        producer: F,
        spawner: impl Spawn + 'static,
        options: FetchOptions,
    ) -> Self
    where
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = Result<T, E>> + 'static,
        E: Display,
    {
        let state = AsyncState {
            inner: Rc::new(Inner {
                snapshot: RefCell::new(Snapshot::default()),
                producer: RefCell::new(erase(producer)),
                listener: RefCell::new(None),
                spawner: Box::new(spawner),
                generation: Cell::new(0),
                options,
            }),
        };

        if options.autorun {
            state.run();
        }

        state
    }

    /// Swap the producer used by later runs. Never triggers a run itself.
    pub fn set_producer<F, Fut, E>(&self, producer: F)
    where
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = Result<T, E>> + 'static,
        E: Display,
    {
        *self.inner.producer.borrow_mut() = erase(producer);
    }

    /// Register the callback invoked after every state change. Replaces any
    /// previous listener.
    pub fn subscribe(&self, listener: impl Fn() + 'static) {
        *self.inner.listener.borrow_mut() = Some(Rc::new(listener));
    }

    pub fn unsubscribe(&self) {
        self.inner.listener.borrow_mut().take();
    }

    /// Invoke the producer in the background.
    ///
    /// `loading` is true and `error` is cleared by the time this returns.
    /// The outcome lands in the state once the producer settles. If the
    /// executor refuses the task, the run settles right away with
    /// [`FetchError::Unexpected`].
    pub fn run(&self) {
        let (generation, settle) = self.begin();
        if let Err(error) = self.inner.spawner.spawn(settle.boxed_local()) {
            self.settle(generation, Err(error));
        }
    }

    /// Like [`run`](AsyncState::run), but hands back the future that
    /// settles the state instead of spawning it.
    pub fn start(&self) -> impl Future<Output = ()> + use<T> {
        self.begin().1
    }

    fn begin(&self) -> (u64, impl Future<Output = ()> + use<T>) {
        let generation = self.inner.generation.get() + 1;
        self.inner.generation.set(generation);

        {
            let mut snapshot = self.inner.snapshot.borrow_mut();
            snapshot.loading = true;
            snapshot.error = None;
        }
        tracing::debug!(generation, "fetch started");
        self.notify();

        let producer = self.inner.producer.borrow().clone();
        let pending = invoke(&producer);
        let inner = Rc::downgrade(&self.inner);

        let settle = async move {
            let outcome = pending.await;
            match Weak::upgrade(&inner) {
                Some(inner) => AsyncState { inner }.settle(generation, outcome),
                None => {
                    tracing::debug!(generation, "fetch settled after its state was dropped")
                }
            }
        };
        (generation, settle)
    }

    /// Return to the initial state: no data, not loading, no error.
    pub fn reset(&self) {
        if self.inner.options.discard_stale {
            self.inner.generation.set(self.inner.generation.get() + 1);
        }
        *self.inner.snapshot.borrow_mut() = Snapshot::default();
        tracing::debug!(generation = self.inner.generation.get(), "fetch state reset");
        self.notify();
    }

    pub fn is_loading(&self) -> bool {
        self.inner.snapshot.borrow().loading
    }

    pub fn error(&self) -> Option<FetchError> {
        self.inner.snapshot.borrow().error.clone()
    }

    /// Generation number of the most recently issued run (or reset).
    pub fn generation(&self) -> u64 {
        self.inner.generation.get()
    }

    fn settle(&self, generation: u64, outcome: Result<T, FetchError>) {
        let latest = self.inner.generation.get();
        if self.inner.options.discard_stale && generation != latest {
            tracing::debug!(generation, latest, "discarding stale fetch result");
            return;
        }

        {
            let mut snapshot = self.inner.snapshot.borrow_mut();
            match outcome {
                Ok(value) => {
                    tracing::debug!(generation, "fetch succeeded");
                    snapshot.data = FetchState::Fetched(value);
                }
                Err(error) => {
                    tracing::debug!(generation, %error, "fetch failed");
                    snapshot.error = Some(error);
                }
            }
            snapshot.loading = false;
        }
        self.notify();
    }

    // The listener may read or mutate the state, so no borrow is held while
    // it runs.
    fn notify(&self) {
        let listener = self.inner.listener.borrow().clone();
        if let Some(listener) = listener {
            listener();
        }
    }
}

impl<T: Clone + 'static> AsyncState<T> {
    pub fn snapshot(&self) -> Snapshot<T> {
        self.inner.snapshot.borrow().clone()
    }

    pub fn data(&self) -> FetchState<T> {
        self.inner.snapshot.borrow().data.clone()
    }
}

fn erase<T, F, Fut, E>(producer: F) -> Producer<T>
where
    T: 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, E>> + 'static,
    E: Display,
{
    Rc::new(move || {
        producer()
            .map(|result| result.map_err(FetchError::operation))
            .boxed_local()
    })
}

/// Call the producer and poll its future with panics turned into
/// [`FetchError::Unexpected`].
fn invoke<T: 'static>(
    producer: &Producer<T>,
) -> LocalBoxFuture<'static, Result<T, FetchError>> {
    match panic::catch_unwind(AssertUnwindSafe(|| producer())) {
        Ok(pending) => AssertUnwindSafe(pending)
            .catch_unwind()
            .map(|polled| match polled {
                Ok(outcome) => outcome,
                Err(_) => {
                    tracing::warn!("fetch producer panicked while running");
                    Err(FetchError::Unexpected)
                }
            })
            .boxed_local(),
        Err(_) => {
            tracing::warn!("fetch producer panicked before returning a future");
            fut::ready(Err(FetchError::Unexpected)).boxed_local()
        }
    }
}
