use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard};

use futures::future::{AbortHandle, Abortable};

/// The page that started a request has been torn down.
#[derive(Debug, Clone, Copy, Eq, PartialEq, thiserror::Error)]
#[error("owning view was unmounted")]
pub struct Unmounted;

#[derive(Default)]
struct ScopeState {
    cancelled: bool,
    in_flight: Vec<AbortHandle>,
}

/// Ties network calls to the lifetime of the view that issued them.
///
/// After `cancel`, pending calls resolve to `Err(Unmounted)` and new
/// calls are refused.
#[derive(Clone, Default)]
pub struct MountScope {
    state: Arc<Mutex<ScopeState>>,
}

impl MountScope {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, ScopeState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn is_cancelled(&self) -> bool {
        self.state().cancelled
    }

    pub async fn guard<F>(&self, future: F) -> Result<F::Output, Unmounted>
    where
        F: Future,
    {
        let (handle, registration) = AbortHandle::new_pair();
        {
            let mut state = self.state();
            if state.cancelled {
                return Err(Unmounted);
            }
            state.in_flight.retain(|h| !h.is_aborted());
            state.in_flight.push(handle);
        }

        Abortable::new(future, registration)
            .await
            .map_err(|_| Unmounted)
    }

    pub fn cancel(&self) {
        let mut state = self.state();
        state.cancelled = true;
        for handle in state.in_flight.drain(..) {
            handle.abort();
        }
    }
}

impl std::fmt::Debug for MountScope {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        let state = self.state();
        f.debug_struct("MountScope")
            .field("cancelled", &state.cancelled)
            .field("in_flight", &state.in_flight.len())
            .finish()
    }
}
