//! Per-panel data loading state machine.
//!
//! Every panel resource moves through `Idle -> Loading -> Loaded | Failed`
//! independently: one resource failing never blocks a sibling, and a
//! failed load carries its message and stays retryable.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiError;

#[derive(Clone, Debug, PartialEq, Default)]
pub enum Remote<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

/// Drive `state` through the machine with the given fetch future.
pub fn load_into<T, Fut>(state: RwSignal<Remote<T>>, fut: Fut)
where
    T: Send + Sync + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    state.set(Remote::Loading);
    spawn_local(async move {
        match fut.await {
            Ok(data) => state.set(Remote::Loaded(data)),
            Err(e) => state.set(Remote::Failed(e.to_string())),
        }
    });
}
