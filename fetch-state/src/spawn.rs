use futures::executor::LocalSpawner;
use futures::future::LocalBoxFuture;
use futures::task::LocalSpawnExt;

use crate::FetchError;

/// Something that can drive a `!Send` future to completion in the
/// background.
///
/// Closures of the right shape implement this, so a UI framework's
/// `spawn_local` can be passed as `|task| spawn_local(task)`. Such closures
/// cannot fail.
pub trait Spawn {
    /// Hand `task` to the executor. An `Err` means the task was dropped
    /// without ever being polled.
    fn spawn(&self, task: LocalBoxFuture<'static, ()>) -> Result<(), FetchError>;
}

impl<F> Spawn for F
where
    F: Fn(LocalBoxFuture<'static, ()>),
{
    fn spawn(&self, task: LocalBoxFuture<'static, ()>) -> Result<(), FetchError> {
        self(task);
        Ok(())
    }
}

impl Spawn for LocalSpawner {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>) -> Result<(), FetchError> {
        self.spawn_local(task).map_err(|err| {
            tracing::error!(%err, "failed to spawn fetch task");
            FetchError::Unexpected
        })
    }
}
