mod common;

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use anyhow::Context;
use common::{Profile, init_tracing};
use fetch_state::{AsyncState, FetchOptions, FetchState, Snapshot};
use futures::future::LocalBoxFuture;
use tokio::task::LocalSet;

fn spawn_on_local_set(task: LocalBoxFuture<'static, ()>) {
    tokio::task::spawn_local(task);
}

async fn settled<T: Clone + 'static>(
    state: &AsyncState<T>,
) -> anyhow::Result<Snapshot<T>> {
    tokio::time::timeout(Duration::from_secs(5), async {
        while state.is_loading() {
            tokio::time::sleep(Duration::from_millis(2)).await;
        }
    })
    .await
    .context("fetch never settled")?;
    Ok(state.snapshot())
}

#[tokio::test]
async fn resolves_after_a_delay() -> anyhow::Result<()> {
    init_tracing();
    LocalSet::new()
        .run_until(async {
            let state = AsyncState::new(
                || async {
                    tokio::time::sleep(Duration::from_millis(20)).await;
                    Ok::<_, String>(Profile::named("Ada"))
                },
                spawn_on_local_set,
            );
            assert!(state.is_loading());

            let snapshot = settled(&state).await?;
            assert_eq!(snapshot.data, FetchState::Fetched(Profile::named("Ada")));
            assert!(!snapshot.loading);
            assert_eq!(snapshot.error, None);
            Ok::<_, anyhow::Error>(())
        })
        .await
}

#[tokio::test]
async fn rejects_after_a_delay() -> anyhow::Result<()> {
    init_tracing();
    LocalSet::new()
        .run_until(async {
            let state = AsyncState::new(
                || async {
                    tokio::time::sleep(Duration::from_millis(20)).await;
                    Err::<Profile, _>(std::io::Error::other("network down"))
                },
                spawn_on_local_set,
            );

            let snapshot = settled(&state).await?;
            assert_eq!(snapshot.data, FetchState::NotFetched);
            assert!(!snapshot.loading);
            assert_eq!(
                snapshot.error.map(|err| err.message()),
                Some("network down".to_string())
            );
            Ok::<_, anyhow::Error>(())
        })
        .await
}

#[tokio::test]
async fn refetch_uses_a_fresh_call_each_time() -> anyhow::Result<()> {
    init_tracing();
    LocalSet::new()
        .run_until(async {
            let calls = Rc::new(Cell::new(0));
            let producer = {
                let calls = calls.clone();
                move || {
                    calls.set(calls.get() + 1);
                    let call = calls.get();
                    async move {
                        tokio::time::sleep(Duration::from_millis(5)).await;
                        Ok::<_, String>(call)
                    }
                }
            };
            let state = AsyncState::with_options(
                producer,
                spawn_on_local_set,
                FetchOptions::default().autorun(false),
            );

            state.run();
            assert_eq!(settled(&state).await?.data, FetchState::Fetched(1));

            state.run();
            assert_eq!(settled(&state).await?.data, FetchState::Fetched(2));
            assert_eq!(calls.get(), 2);
            Ok::<_, anyhow::Error>(())
        })
        .await
}
