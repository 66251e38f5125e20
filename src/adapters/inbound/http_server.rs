//! HTTP Edge Server
//!
//! Inbound adapter that snapshots request attributes, invokes the decision
//! engine, and translates the outcome into an HTTP response: a 301/302 with
//! a Location header for `RedirectTo`, or content served in place for
//! `NoRedirect`. Diagnostic endpoints expose the extracted signals and the
//! decision counters.

use crate::application::{RawRequest, RedirectService};
use crate::config::Config;
use crate::domain::value_objects::RedirectDecision;
use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Health response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Metrics dump response.
#[derive(Debug, Serialize)]
pub struct MetricsResponse {
    pub decisions: HashMap<String, u64>,
    pub total: u64,
}

/// Shared state for the edge handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<RedirectService>,
    /// Lowercased name of the header carrying the upstream geo result.
    pub geo_header: String,
    /// Lowercased name of the test country override header.
    pub test_country_header: String,
    /// Status used when issuing locale redirects.
    pub redirect_status: StatusCode,
}

/// HTTP edge server.
pub struct HttpServer {
    listen_addr: String,
    state: AppState,
}

impl HttpServer {
    pub fn new(service: Arc<RedirectService>, cfg: &Config) -> anyhow::Result<Self> {
        let redirect_status = StatusCode::from_u16(cfg.redirect_status)?;
        Ok(Self {
            listen_addr: cfg.listen_addr.clone(),
            state: AppState {
                service,
                geo_header: cfg.geo_header.clone(),
                test_country_header: cfg.test_country_header.clone(),
                redirect_status,
            },
        })
    }

    /// Build the router. Exposed so integration tests can drive the
    /// handlers without binding a socket.
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/health", get(health_handler))
            .route("/debug/signals", get(debug_signals_handler))
            .route("/debug/metrics", get(debug_metrics_handler))
            // Every other path goes through the redirect decision.
            .fallback(edge_handler)
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }

    /// Run the edge server.
    ///
    /// The final Ok(()) is excluded from coverage since axum::serve runs forever.
    #[cfg_attr(coverage_nightly, coverage(off))]
    pub async fn run(&self) -> anyhow::Result<()> {
        let app = Self::router(self.state.clone());

        let listener = TcpListener::bind(&self.listen_addr).await?;
        tracing::info!("redirect edge listening on {}", self.listen_addr);

        axum::serve(listener, app).await?;
        Ok(())
    }
}

/// Pluck the decision-relevant attributes out of the request.
fn raw_request<'a>(
    state: &'a AppState,
    params: &'a HashMap<String, String>,
    headers: &'a HeaderMap,
) -> RawRequest<'a> {
    let header_str = |name: &str| headers.get(name).and_then(|v| v.to_str().ok());

    RawRequest {
        query_country: params.get("country").map(String::as_str),
        header_country: header_str(&state.test_country_header),
        upstream_geo: header_str(&state.geo_header),
        user_agent: header_str(header::USER_AGENT.as_str()),
    }
}

// Handler functions

async fn edge_handler(
    State(state): State<AppState>,
    query: Option<Query<HashMap<String, String>>>,
    headers: HeaderMap,
) -> Response {
    let params = query.map(|Query(q)| q).unwrap_or_default();
    let eval = state.service.evaluate(raw_request(&state, &params, &headers));

    match eval.decision {
        RedirectDecision::RedirectTo(path) => {
            (state.redirect_status, [(header::LOCATION, path)]).into_response()
        }
        RedirectDecision::NoRedirect => Json(serde_json::json!({
            "status": "ok",
            "locale": "default"
        }))
        .into_response(),
    }
}

async fn debug_signals_handler(
    State(state): State<AppState>,
    query: Option<Query<HashMap<String, String>>>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let params = query.map(|Query(q)| q).unwrap_or_default();
    let eval = state.service.evaluate(raw_request(&state, &params, &headers));
    Json(eval)
}

async fn debug_metrics_handler(State(state): State<AppState>) -> impl IntoResponse {
    let decisions = state.service.metrics_snapshot();
    let total = decisions.values().sum();
    Json(MetricsResponse { decisions, total })
}

async fn health_handler() -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };
    Json(response)
}
