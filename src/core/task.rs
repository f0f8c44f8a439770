//! Deferred asynchronous work returned by message handlers
//!
//! Handlers never await. They return a `Task` describing the futures to
//! run, and the event loop feeds each future's output back in as a new
//! message.

use futures::FutureExt;
use futures::future::LocalBoxFuture;
use std::future::Future;

#[must_use = "a Task does nothing unless handed to the event loop"]
pub struct Task<T> {
    futures: Vec<LocalBoxFuture<'static, T>>,
}

impl<T: 'static> Task<T> {
    pub fn none() -> Self {
        Self {
            futures: Vec::new(),
        }
    }

    pub fn future(future: impl Future<Output = T> + 'static) -> Self {
        Self {
            futures: vec![future.boxed_local()],
        }
    }

    pub fn into_futures(self) -> Vec<LocalBoxFuture<'static, T>> {
        self.futures
    }
}

impl<T> std::fmt::Debug for Task<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Task")
            .field("futures", &self.futures.len())
            .finish()
    }
}
