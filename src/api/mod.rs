//! HTTP surface: router, shared state and cross-cutting middleware.
//!
//! Every response carries permissive CORS headers, `OPTIONS` preflights are
//! answered directly, unknown paths produce a JSON 404 and a known path hit
//! with the wrong method produces a JSON 405.

pub mod error;
pub mod handlers;
pub mod responses;

use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

use axum::Router;
use axum::extract::Request;
use axum::http::{HeaderValue, Method, StatusCode, header};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use tokio::net::TcpListener;

use crate::config::ServiceConfig;
use crate::data::Dataset;
use crate::logging;
use crate::model::DataError;

/// State shared by every handler. The dataset is immutable after startup.
#[derive(Debug, Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
    pub max_prediction_years: i64,
}

impl AppState {
    pub fn new(dataset: Dataset, max_prediction_years: i64) -> Self {
        Self {
            dataset: Arc::new(dataset),
            max_prediction_years,
        }
    }

    /// Loads the embedded tables and applies the configured limits.
    pub fn load(config: &ServiceConfig) -> Result<Self, DataError> {
        Ok(Self::new(Dataset::load()?, config.predict.max_years))
    }
}

/// Builds the full application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root).fallback(handlers::method_not_allowed))
        .route(
            "/api/health",
            get(handlers::health).fallback(handlers::method_not_allowed),
        )
        .route(
            "/api/historical/timeseries",
            get(handlers::historical_timeseries).fallback(handlers::method_not_allowed),
        )
        .route(
            "/api/recent/timeseries",
            get(handlers::recent_timeseries).fallback(handlers::method_not_allowed),
        )
        .route(
            "/api/gldas/trend-analysis",
            get(handlers::gldas_trend_analysis).fallback(handlers::method_not_allowed),
        )
        .route(
            "/api/analysis/summary",
            get(handlers::analysis_summary).fallback(handlers::method_not_allowed),
        )
        .route(
            "/api/combined/timeline",
            get(handlers::combined_timeline).fallback(handlers::method_not_allowed),
        )
        .route(
            "/api/districts/groundwater",
            get(handlers::districts_groundwater).fallback(handlers::method_not_allowed),
        )
        .route(
            "/api/predict",
            post(handlers::predict_groundwater).fallback(handlers::method_not_allowed),
        )
        .fallback(handlers::not_found)
        .layer(middleware::from_fn(cors))
        .layer(middleware::from_fn(log_requests))
        .with_state(state)
}

/// Adds CORS headers to every response and short-circuits preflights.
async fn cors(request: Request, next: Next) -> Response {
    let mut response = if request.method() == Method::OPTIONS {
        StatusCode::OK.into_response()
    } else {
        next.run(request).await
    };

    let headers = response.headers_mut();
    headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    response
}

async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;
    logging::log_request(&method, &path, response.status().as_u16(), started.elapsed());
    response
}

/// Serves until the listener fails.
pub async fn serve(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    axum::serve(listener, router(state)).await
}

/// Serves until `shutdown` resolves, then drains in-flight requests.
pub async fn serve_with_shutdown<F>(
    listener: TcpListener,
    state: AppState,
    shutdown: F,
) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
}
