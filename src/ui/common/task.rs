//! Component-scoped async work
//!
//! Futures started through [`OwnedTask`] are aborted when the component that
//! created the task is cleaned up, so a late response never writes into
//! disposed signals.

use std::future::Future;
use std::sync::{Arc, Mutex};

use futures::future::{AbortHandle, Abortable};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Default)]
pub struct OwnedTask {
    handle: Arc<Mutex<Option<AbortHandle>>>,
}

impl OwnedTask {
    /// Create a task slot tied to the current component's lifetime
    pub fn new() -> Self {
        let task = Self::default();
        let handle = task.handle.clone();
        on_cleanup(move || abort(&handle));
        task
    }

    /// Run `fut`, cancelling whatever this slot was running before
    pub fn spawn(&self, fut: impl Future<Output = ()> + 'static) {
        abort(&self.handle);
        let (abort_handle, registration) = AbortHandle::new_pair();
        if let Ok(mut slot) = self.handle.lock() {
            *slot = Some(abort_handle);
        }
        spawn_local(async move {
            let _ = Abortable::new(fut, registration).await;
        });
    }
}

fn abort(handle: &Mutex<Option<AbortHandle>>) {
    if let Ok(mut slot) = handle.lock() {
        if let Some(handle) = slot.take() {
            handle.abort();
        }
    }
}
