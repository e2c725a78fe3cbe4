use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use memberlens_core::{AppError, AppResult};
use tokio::sync::Mutex;
use url::Url;

/// Request seen by a [`StubDirectory`].
#[derive(Debug, Clone)]
pub(crate) struct RecordedRequest {
    pub(crate) method: Method,
    pub(crate) path: String,
    pub(crate) query: Vec<(String, String)>,
    pub(crate) authorization: Option<String>,
    pub(crate) accept: Option<String>,
    pub(crate) body: String,
}

impl RecordedRequest {
    pub(crate) fn query_value(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

type Responder = fn(&RecordedRequest) -> (StatusCode, String);

struct StubState {
    responder: Responder,
    requests: Mutex<Vec<RecordedRequest>>,
}

/// Loopback HTTP server answering every request through one responder.
pub(crate) struct StubDirectory {
    pub(crate) base_url: Url,
    state: Arc<StubState>,
}

impl StubDirectory {
    pub(crate) async fn spawn(responder: Responder) -> AppResult<Self> {
        let state = Arc::new(StubState {
            responder,
            requests: Mutex::new(Vec::new()),
        });
        let app = Router::new()
            .fallback(stub_handler)
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .map_err(|error| AppError::Internal(format!("failed to bind stub: {error}")))?;
        let address = listener
            .local_addr()
            .map_err(|error| AppError::Internal(format!("failed to read stub address: {error}")))?;
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        let base_url = Url::parse(&format!("http://{address}/sites/hr"))
            .map_err(|error| AppError::Internal(format!("invalid stub url: {error}")))?;

        Ok(Self { base_url, state })
    }

    pub(crate) async fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().await.clone()
    }
}

async fn stub_handler(
    State(state): State<Arc<StubState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> Response {
    let header_value = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned)
    };
    let request = RecordedRequest {
        method,
        path: uri.path().to_owned(),
        query: url::form_urlencoded::parse(uri.query().unwrap_or_default().as_bytes())
            .into_owned()
            .collect(),
        authorization: header_value(header::AUTHORIZATION),
        accept: header_value(header::ACCEPT),
        body,
    };

    let (status, body) = (state.responder)(&request);
    state.requests.lock().await.push(request);

    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response()
}

/// Returns a url on which nothing is listening.
pub(crate) async fn unreachable_url() -> AppResult<Url> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .map_err(|error| AppError::Internal(format!("failed to bind probe: {error}")))?;
    let address = listener
        .local_addr()
        .map_err(|error| AppError::Internal(format!("failed to read probe address: {error}")))?;
    drop(listener);

    Url::parse(&format!("http://{address}/"))
        .map_err(|error| AppError::Internal(format!("invalid probe url: {error}")))
}
