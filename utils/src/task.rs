use std::future::Future;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

#[derive(Debug)]
pub struct CancellableTask {
    pub thread: JoinHandle<()>,
    pub cancel_token: CancellationToken,
}

impl CancellableTask {
    /// Stops the job. `on_complete` is not called after this returns unless
    /// the job had already finished.
    pub fn cancel(&self) {
        self.cancel_token.cancel();
    }
}

/// Starts an asynchronous job in a separate Tokio task that runs once and
/// hands its result to `on_complete`, unless cancelled first.
///
/// Must be called from within a Tokio runtime.
pub fn spawn_cancellable<R, Fut, C>(job: Fut, on_complete: C) -> CancellableTask
where
    R: Send + 'static,
    Fut: Future<Output = R> + Send + 'static,
    C: FnOnce(R) + Send + 'static,
{
    let cancel_token = CancellationToken::new();
    let cancel_token_clone = cancel_token.clone();

    let thread = tokio::spawn(async move {
        tokio::select! {
            biased;
            _ = cancel_token_clone.cancelled() => (),
            result = job => on_complete(result),
        };
    });

    CancellableTask {
        thread,
        cancel_token,
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::sync::oneshot;

    use super::*;

    #[tokio::test]
    async fn completes_with_result() {
        let (tr, rc) = oneshot::channel();
        let task = spawn_cancellable(async { 7 }, move |value| {
            let _ = tr.send(value);
        });
        assert_eq!(rc.await.unwrap(), 7);
        task.thread.await.unwrap();
        assert!(!task.cancel_token.is_cancelled());
    }

    #[tokio::test]
    async fn cancelled_job_never_reports() {
        let (tr, rc) = oneshot::channel::<u32>();
        let task = spawn_cancellable(
            async {
                tokio::time::sleep(Duration::from_secs(60)).await;
                1
            },
            move |value| {
                let _ = tr.send(value);
            },
        );
        task.cancel();
        task.thread.await.unwrap();
        // sender dropped without sending
        assert!(rc.await.is_err());
    }
}
