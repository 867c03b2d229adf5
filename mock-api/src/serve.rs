use std::{
    net::SocketAddr,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
};

use axum::{
    extract::{Path, Query as QueryParams, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use thong_utils::stock::Query;
use tokio::{net::TcpListener, task::JoinHandle};
use tokio_util::sync::CancellationToken;

use crate::store::{BarStore, Lookup};

pub const DEFAULT_PORT: u16 = 5001;

#[derive(Clone)]
struct ServerState {
    store: Arc<BarStore>,
    request_count: Arc<AtomicUsize>,
}

#[derive(Debug, Deserialize)]
struct RangeParams {
    start: Option<String>,
    end: Option<String>,
}

pub fn router(store: BarStore, request_count: Arc<AtomicUsize>) -> Router {
    Router::new()
        .route("/api/stock/{symbol}", get(bars_handler))
        .with_state(ServerState {
            store: Arc::new(store),
            request_count,
        })
}

pub async fn bind(host: &str, port: u16) -> crate::Result<TcpListener> {
    TcpListener::bind(format!("{host}:{port}"))
        .await
        .map_err(|e| crate::Error::PortBindingFailed(port, e))
}

/// Serves until `shutdown` is cancelled.
pub async fn serve(
    listener: TcpListener,
    store: BarStore,
    request_count: Arc<AtomicUsize>,
    shutdown: CancellationToken,
) -> crate::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, "mock api listening");
    }
    axum::serve(listener, router(store, request_count))
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await
        .map_err(crate::Error::ServerCrashed)
}

async fn bars_handler(
    State(state): State<ServerState>,
    Path(symbol): Path<String>,
    QueryParams(params): QueryParams<RangeParams>,
) -> Response {
    state.request_count.fetch_add(1, Ordering::SeqCst);
    tracing::debug!(%symbol, ?params, "bars requested");

    let query = match parse_query(&symbol, params) {
        Ok(query) => query,
        Err(message) => return error_response(StatusCode::BAD_REQUEST, message),
    };

    match state
        .store
        .lookup(query.symbol(), query.start(), query.end())
    {
        Lookup::Bars(bars) => Json(bars).into_response(),
        Lookup::Response { status, body } => (
            StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            Json(body),
        )
            .into_response(),
        Lookup::NotFound => error_response(
            StatusCode::NOT_FOUND,
            format!("No data found for {}", query.symbol()),
        ),
    }
}

fn parse_query(symbol: &str, params: RangeParams) -> Result<Query, String> {
    let start = params
        .start
        .ok_or_else(|| "Missing 'start' query parameter".to_string())?;
    let end = params
        .end
        .ok_or_else(|| "Missing 'end' query parameter".to_string())?;
    Query::parse(symbol, &start, &end).map_err(|e| e.to_string())
}

fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

/// A mock api running on its own tokio task, stopped on drop.
#[derive(Debug)]
pub struct RunningMockApi {
    pub addr: SocketAddr,
    request_count: Arc<AtomicUsize>,
    shutdown: CancellationToken,
    thread: Option<JoinHandle<crate::Result<()>>>,
}

impl RunningMockApi {
    /// Binds an ephemeral port on localhost.
    pub async fn spawn(store: BarStore) -> crate::Result<Self> {
        let listener = bind("127.0.0.1", 0).await?;
        let addr = listener
            .local_addr()
            .map_err(crate::Error::LocalAddrFailed)?;
        let request_count = Arc::new(AtomicUsize::new(0));
        let shutdown = CancellationToken::new();

        let thread = tokio::spawn(serve(
            listener,
            store,
            request_count.clone(),
            shutdown.clone(),
        ));

        Ok(Self {
            addr,
            request_count,
            shutdown,
            thread: Some(thread),
        })
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }

    pub async fn stop(mut self) -> crate::Result<()> {
        self.shutdown.cancel();
        match self.thread.take() {
            Some(thread) => thread.await?,
            None => Ok(()),
        }
    }
}

impl Drop for RunningMockApi {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

/// Body of an error answer, for building fixtures.
pub fn error_body(message: &str) -> Value {
    json!({ "error": message })
}
