//! HTTP route handlers.

use std::sync::Arc;

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;
use tracing::{debug, warn};

use crate::decode::DecodeError;
use crate::domain::ResolvedPath;
use crate::resolver::{ResolveError, resolve_cancellable};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/health", get(health))
        .route("/calculate", post(calculate))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "OK"
}

/// Resolve the origin and terminus of the itinerary in the request body.
///
/// Decoding and resolution run on the blocking pool under a per-request
/// deadline; when it passes, both stages stop at their next cancellation
/// check.
async fn calculate(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<PathResponse>, AppError> {
    let cancel = CancellationToken::new();

    let deadline = tokio::spawn({
        let cancel = cancel.clone();
        let timeout = state.request_timeout;
        async move {
            tokio::time::sleep(timeout).await;
            cancel.cancel();
        }
    });

    let decoder = Arc::clone(&state.decoder);
    let outcome = tokio::task::spawn_blocking(move || -> Result<ResolvedPath, AppError> {
        let itinerary = decoder.decode(&body, &cancel)?;
        Ok(resolve_cancellable(&itinerary, &cancel)?)
    })
    .await;

    deadline.abort();

    let path = outcome.map_err(|e| AppError::Unavailable {
        message: format!("resolver task failed: {e}"),
    })??;

    debug!(origin = %path.origin, terminus = %path.terminus, "calculated flight path");

    Ok(Json(PathResponse::from(path)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// The payload could not be decoded
    BadRequest { message: String },
    /// The payload decoded but does not describe a single journey
    Unprocessable { message: String },
    /// The request could not be completed (deadline passed, task failure)
    Unavailable { message: String },
}

impl AppError {
    /// Returns the HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::Unprocessable { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Unavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl From<DecodeError> for AppError {
    fn from(e: DecodeError) -> Self {
        let message = format!("failed to decode payload: {e}");
        match e {
            DecodeError::Cancelled => AppError::Unavailable { message },
            _ => AppError::BadRequest { message },
        }
    }
}

impl From<ResolveError> for AppError {
    fn from(e: ResolveError) -> Self {
        let message = format!("failed to calculate flight path: {e}");
        match e {
            ResolveError::EmptyItinerary | ResolveError::InvalidItinerary(_) => {
                AppError::Unprocessable { message }
            }
            ResolveError::Cancelled => AppError::Unavailable { message },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            AppError::BadRequest { message }
            | AppError::Unprocessable { message }
            | AppError::Unavailable { message } => message,
        };

        warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use axum::body::Body;
    use axum::http::{Method, Request};
    use tower::ServiceExt;

    use crate::decode::{JsonPairsDecoder, JsonRecordsDecoder, PayloadDecoder};
    use crate::domain::Itinerary;

    const FOUR_LEGS: &str = r#"[{"source":"IND","destination":"EWR"},{"source":"SFO","destination":"ATL"},{"source":"GSO","destination":"IND"},{"source":"ATL","destination":"GSO"}]"#;

    fn router_with(decoder: Arc<dyn PayloadDecoder>, timeout: Duration) -> Router {
        create_router(AppState::new(decoder, timeout))
    }

    fn router() -> Router {
        router_with(Arc::new(JsonRecordsDecoder::new()), Duration::from_secs(5))
    }

    async fn send(router: Router, method: Method, uri: &str, body: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    /// Decoder that spins until the request deadline cancels it.
    struct StallingDecoder;

    impl PayloadDecoder for StallingDecoder {
        fn decode(
            &self,
            _raw: &[u8],
            cancel: &CancellationToken,
        ) -> Result<Itinerary, DecodeError> {
            while !cancel.is_cancelled() {
                std::thread::sleep(Duration::from_millis(1));
            }
            Err(DecodeError::Cancelled)
        }
    }

    #[tokio::test]
    async fn calculates_flight_path() {
        let (status, body) = send(router(), Method::POST, "/calculate", FOUR_LEGS).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, r#"{"source":"SFO","destination":"EWR"}"#);
    }

    #[tokio::test]
    async fn calculates_from_pairs_payload() {
        let router = router_with(Arc::new(JsonPairsDecoder::new()), Duration::from_secs(5));
        let (status, body) = send(
            router,
            Method::POST,
            "/calculate",
            r#"[["IND","EWR"],["SFO","ATL"],["GSO","IND"],["ATL","GSO"]]"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, r#"{"source":"SFO","destination":"EWR"}"#);
    }

    #[tokio::test]
    async fn invalid_json_is_bad_request() {
        let (status, body) = send(router(), Method::POST, "/calculate", "invalid json").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.starts_with(r#"{"error":"failed to decode payload: invalid JSON: "#));
    }

    #[tokio::test]
    async fn empty_token_is_bad_request() {
        let (status, body) = send(
            router(),
            Method::POST,
            "/calculate",
            r#"[{"source":"","destination":"EWR"}]"#,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            r#"{"error":"failed to decode payload: leg 0 has an empty source"}"#
        );
    }

    #[tokio::test]
    async fn empty_list_is_unprocessable() {
        let (status, body) = send(router(), Method::POST, "/calculate", "[]").await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body,
            r#"{"error":"failed to calculate flight path: itinerary has no legs"}"#
        );
    }

    #[tokio::test]
    async fn invalid_itinerary_is_unprocessable() {
        let (status, body) = send(
            router(),
            Method::POST,
            "/calculate",
            r#"[{"source":"SFO","destination":"EWR"},{"source":"SFO","destination":"EWR"}]"#,
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body,
            r#"{"error":"failed to calculate flight path: invalid itinerary: 'SFO' departs more than once (legs 0 and 1)"}"#
        );
    }

    #[tokio::test]
    async fn round_trip_is_unprocessable() {
        let (status, _) = send(
            router(),
            Method::POST,
            "/calculate",
            r#"[{"source":"SFO","destination":"EWR"},{"source":"EWR","destination":"SFO"}]"#,
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn deadline_is_service_unavailable() {
        let router = router_with(Arc::new(StallingDecoder), Duration::from_millis(10));
        let (status, body) = send(router, Method::POST, "/calculate", FOUR_LEGS).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            body,
            r#"{"error":"failed to decode payload: decoding cancelled"}"#
        );
    }

    #[tokio::test]
    async fn wrong_method_is_rejected() {
        let (status, body) = send(router(), Method::PUT, "/calculate", FOUR_LEGS).await;

        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn health_check() {
        for uri in ["/", "/health"] {
            let (status, body) = send(router(), Method::GET, uri, "").await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body, "OK");
        }
    }

    #[test]
    fn error_status_mapping() {
        assert_eq!(
            AppError::from(ResolveError::EmptyItinerary).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::from(ResolveError::Cancelled).status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            AppError::from(DecodeError::EmptyDestination { leg: 1 }).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::from(DecodeError::Cancelled).status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }
}
