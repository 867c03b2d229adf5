use std::{future::Future, sync::mpsc};

use thong_utils::{
    stock::{DailyBar, Query, StockApi},
    task::{spawn_cancellable, CancellableTask},
};

use crate::events::{AppEvent, FetchOrigin, FetchOutcome};

/// Where daily bars come from.
pub trait BarSource {
    fn fetch_bars(
        &self,
        query: Query,
    ) -> impl Future<Output = thong_utils::Result<Vec<DailyBar>>> + Send + 'static;
}

impl BarSource for StockApi {
    fn fetch_bars(
        &self,
        query: Query,
    ) -> impl Future<Output = thong_utils::Result<Vec<DailyBar>>> + Send + 'static {
        let api = self.clone();
        async move { api.daily_bars(&query).await }
    }
}

/// Runs one fetch on the tokio runtime and reports back as
/// [`AppEvent::BarsFetched`]. Nothing is sent once the task is cancelled.
pub fn spawn_fetch<S: BarSource>(
    source: &S,
    query: Query,
    seq: u64,
    origin: FetchOrigin,
    tr: mpsc::Sender<AppEvent>,
) -> CancellableTask {
    tracing::info!(seq, ?origin, %query, "fetch issued");
    spawn_cancellable(source.fetch_bars(query), move |result| {
        match &result {
            Ok(bars) => tracing::info!(seq, bars = bars.len(), "fetch completed"),
            Err(e) => tracing::warn!(seq, error = %e, "fetch failed"),
        }
        let _ = tr.send(AppEvent::BarsFetched(FetchOutcome {
            seq,
            origin,
            result,
        }));
    })
}
