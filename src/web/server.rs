use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{DefaultBodyLimit, State},
    http::{HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tower::limit::ConcurrencyLimitLayer;
use tower::ServiceBuilder;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::timeout::TimeoutLayer;

use crate::cli::ServeArgs;
use crate::core::comparison::ComparisonResult;
use crate::parsing::url::{parse_playlist_url, PlaylistRef};
use crate::provider::web_handler::{PlaylistSnapshot, ProviderError, WebHandlerProvider};
use crate::service::analysis::{analyze, OverlapAnalysis};
use crate::service::compare::build_comparison;

/// Bounds on the number of playlist URLs in one compare request
pub const MIN_COMPARE_URLS: usize = 2;
pub const MAX_COMPARE_URLS: usize = 20;

/// Request body limit; compare requests are a small list of URLs
pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// Shared application state
pub struct AppState {
    pub provider: WebHandlerProvider,
}

#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    pub playlist_urls: Vec<String>,
}

/// Successful compare payload: the raw comparison result flattened at the
/// top level, plus the engine's derived numbers.
#[derive(Serialize)]
pub struct CompareResponse {
    #[serde(flatten)]
    pub result: ComparisonResult,
    pub analysis: OverlapAnalysis,
}

/// Enhanced error response
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub error_type: String,
    pub details: Option<String>,
}

/// Create a safe error response that prevents information disclosure
/// while logging detailed errors server-side for debugging
pub fn create_safe_error_response(
    error_type: &str,
    user_message: &str,
    internal_error: Option<&str>,
) -> ErrorResponse {
    if let Some(internal_msg) = internal_error {
        tracing::error!("Internal error ({}): {}", error_type, internal_msg);
    }

    ErrorResponse {
        error: user_message.to_string(),
        error_type: error_type.to_string(),
        details: None,
    }
}

/// Run the web server
///
/// # Errors
///
/// Returns an error if the tokio runtime cannot be created or the server
/// fails to start.
pub fn run(args: ServeArgs) -> anyhow::Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move { run_server(args).await })
}

/// Create the application router with routes and middleware configured.
///
/// Rate limiting is applied separately in [`run`] because it needs the
/// peer address; everything else (headers, timeouts, limits) lives here so
/// tests can drive the router directly.
///
/// # Errors
///
/// Returns an error if the outbound HTTP client cannot be constructed.
pub fn create_router() -> anyhow::Result<Router> {
    let provider = WebHandlerProvider::new()?;
    let state = Arc::new(AppState { provider });

    let app = Router::new()
        .route("/health", get(health_handler))
        .route("/api/compare", post(compare_handler))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                // Security headers for browser protection
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("x-content-type-options"),
                    HeaderValue::from_static("nosniff"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("x-frame-options"),
                    HeaderValue::from_static("DENY"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("referrer-policy"),
                    HeaderValue::from_static("strict-origin-when-cross-origin"),
                ))
                // Request timeout covers the upstream playlist fetches
                .layer(TimeoutLayer::with_status_code(
                    StatusCode::REQUEST_TIMEOUT,
                    Duration::from_secs(30),
                ))
                // Limit concurrent requests to prevent DOS
                .layer(ConcurrencyLimitLayer::new(100))
                .layer(DefaultBodyLimit::max(MAX_BODY_BYTES)),
        );

    Ok(app)
}

async fn run_server(args: ServeArgs) -> anyhow::Result<()> {
    // IP-based rate limiting; requires the connect-info service below
    let governor_conf = GovernorConfigBuilder::default()
        .per_second(10)
        .burst_size(50)
        .finish()
        .ok_or_else(|| anyhow::anyhow!("invalid rate limiter configuration"))?;

    let app = create_router()?.layer(GovernorLayer {
        config: Arc::new(governor_conf),
    });

    let addr = format!("{}:{}", args.address, args.port);
    println!("Starting playlist-overlap web server at http://{addr}");

    if args.open {
        let _ = open::that(format!("http://{addr}"));
    }

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// API endpoint comparing a batch of playlists
async fn compare_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CompareRequest>,
) -> Response {
    let url_count = payload.playlist_urls.len();
    if !(MIN_COMPARE_URLS..=MAX_COMPARE_URLS).contains(&url_count) {
        return (
            StatusCode::BAD_REQUEST,
            Json(create_safe_error_response(
                "invalid_request",
                &format!(
                    "Provide between {MIN_COMPARE_URLS} and {MAX_COMPARE_URLS} playlist URLs"
                ),
                None,
            )),
        )
            .into_response();
    }

    let mut refs = Vec::with_capacity(url_count);
    for (index, url) in payload.playlist_urls.iter().enumerate() {
        match parse_playlist_url(url) {
            Ok(playlist_ref) => refs.push(playlist_ref),
            Err(e) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(create_safe_error_response(
                        "invalid_playlist_url",
                        &format!("Playlist #{}: {e}", index + 1),
                        None,
                    )),
                )
                    .into_response();
            }
        }
    }

    let snapshots = match fetch_all(&state, &refs).await {
        Ok(snapshots) => snapshots,
        Err(e) => {
            return (
                StatusCode::BAD_GATEWAY,
                Json(create_safe_error_response(
                    "provider_error",
                    &e.to_string(),
                    None,
                )),
            )
                .into_response();
        }
    };

    let result = build_comparison(&refs, &snapshots);
    let analysis = analyze(&result);

    Json(CompareResponse { result, analysis }).into_response()
}

/// Fetch every playlist concurrently; the first failure wins.
async fn fetch_all(
    state: &Arc<AppState>,
    refs: &[PlaylistRef],
) -> Result<Vec<PlaylistSnapshot>, ProviderError> {
    let mut handles = Vec::with_capacity(refs.len());
    for playlist_ref in refs {
        let state = Arc::clone(state);
        let playlist_ref = playlist_ref.clone();
        handles.push(tokio::spawn(async move {
            state.provider.fetch(&playlist_ref).await
        }));
    }

    let mut snapshots = Vec::with_capacity(handles.len());
    for handle in handles {
        let snapshot = handle
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))??;
        snapshots.push(snapshot);
    }
    Ok(snapshots)
}
