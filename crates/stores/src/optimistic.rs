//! Optimistic mutation helper.
//!
//! A server-reconciled mutation runs in three phases: snapshot the state,
//! apply the tentative change, await the backend. On success the caller
//! adopts the server's snapshot; on failure the pre-mutation state is
//! restored wholesale, so a rollback is always exact regardless of what
//! the tentative change touched.

use std::future::Future;

/// Apply `tentative` to `state`, then await `call`. On `Err` the state is
/// restored to the snapshot taken before the tentative change and the
/// error is passed through; on `Ok` the tentative state is left in place
/// for the caller to reconcile against the returned value.
pub async fn optimistic<S, T, E, F, Fut>(
    state: &mut S,
    tentative: F,
    call: Fut,
) -> Result<T, E>
where
    S: Clone,
    F: FnOnce(&mut S),
    Fut: Future<Output = Result<T, E>>,
{
    let snapshot = state.clone();
    tentative(state);
    match call.await {
        Ok(value) => Ok(value),
        Err(err) => {
            *state = snapshot;
            Err(err)
        }
    }
}
