use std::future::Future;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

/// Commits the latest pushed value once no new value arrived for `delay`.
///
/// Must be created inside a tokio runtime. Dropping it cancels any pending
/// value without invoking the callback.
pub struct Debouncer<T> {
    tx: mpsc::UnboundedSender<T>,
    task: JoinHandle<()>,
}

impl<T> Debouncer<T>
where
    T: Send + 'static,
{
    pub fn new<F, Fut>(delay: Duration, callback: F) -> Self
    where
        F: Fn(T) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let (tx, mut rx) = mpsc::unbounded_channel::<T>();

        let task = tokio::spawn(async move {
            while let Some(first) = rx.recv().await {
                let mut latest = first;
                // Restart the quiet period on every new value.
                loop {
                    match tokio::time::timeout(delay, rx.recv()).await {
                        Ok(Some(next)) => latest = next,
                        Ok(None) => return,
                        Err(_) => break,
                    }
                }
                callback(latest).await;
            }
        });

        Self { tx, task }
    }

    pub fn push(&self, value: T) {
        if self.tx.send(value).is_err() {
            debug!("Debouncer task already stopped; value dropped");
        }
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        self.task.abort();
    }
}
