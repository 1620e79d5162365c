#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use futures::channel::oneshot;
use futures::future::{FutureExt, LocalBoxFuture};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub name: String,
}

impl Profile {
    pub fn named(name: &str) -> Self {
        Profile {
            name: name.to_string(),
        }
    }
}

/// Install a test-writer subscriber so `fetch_state` debug events show up
/// in failing test output.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("fetch_state=debug"))
        .with_test_writer()
        .try_init();
}

type Pending<T> = oneshot::Sender<Result<T, String>>;

/// A producer whose invocations stay pending until the test settles them,
/// one by one and in any order.
pub struct Scripted<T> {
    pending: Rc<RefCell<Vec<Option<Pending<T>>>>>,
    calls: Rc<Cell<usize>>,
}

impl<T: 'static> Scripted<T> {
    pub fn new() -> Self {
        Scripted {
            pending: Rc::new(RefCell::new(Vec::new())),
            calls: Rc::new(Cell::new(0)),
        }
    }

    pub fn producer(
        &self,
    ) -> impl Fn() -> LocalBoxFuture<'static, Result<T, String>> + 'static {
        let pending = self.pending.clone();
        let calls = self.calls.clone();
        move || {
            calls.set(calls.get() + 1);
            let (tx, rx) = oneshot::channel();
            pending.borrow_mut().push(Some(tx));
            async move {
                match rx.await {
                    Ok(outcome) => outcome,
                    Err(_) => Err("producer abandoned".to_string()),
                }
            }
            .boxed_local()
        }
    }

    /// Number of times the producer has been invoked.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    pub fn resolve(&self, call: usize, value: T) {
        self.settle(call, Ok(value));
    }

    pub fn reject(&self, call: usize, message: &str) {
        self.settle(call, Err(message.to_string()));
    }

    fn settle(&self, call: usize, outcome: Result<T, String>) {
        let sender = self
            .pending
            .borrow_mut()
            .get_mut(call)
            .and_then(Option::take)
            .unwrap_or_else(|| panic!("call {call} was never made or already settled"));
        let _ = sender.send(outcome);
    }
}
