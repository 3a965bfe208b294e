//! Gateway service - router construction and the serve loop.

use std::future::Future;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use parking_lot::Mutex;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use zc_history::{HistoryEntry, HistoryStore};
use zc_transform::transform;

use crate::domain::config::{GatewayConfig, LimitsConfig};
use crate::domain::error::{ApiError, GatewayError};
use crate::domain::types::{
    validate_input, ConvertQuery, ConvertRequest, ConvertResponse, HistoryResponse,
};
use crate::middleware::create_cors_layer;

/// The history store as shared by the gateway and the runtime's
/// seal/unseal hooks.
pub type SharedHistoryStore = Arc<Mutex<dyn HistoryStore>>;

/// The HTTP gateway service.
pub struct GatewayService {
    config: GatewayConfig,
    history: SharedHistoryStore,
}

impl GatewayService {
    /// Create a new gateway over the given history store.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::Config` if the configuration fails validation.
    pub fn new(config: GatewayConfig, history: SharedHistoryStore) -> Result<Self, GatewayError> {
        config.validate()?;
        Ok(Self { config, history })
    }

    /// Build the router with its middleware stack.
    pub fn router(&self) -> Router {
        let state = AppState {
            history: Arc::clone(&self.history),
            limits: self.config.limits.clone(),
        };

        let mut router = Router::new()
            .route("/api/convert", get(convert_get).post(convert_post))
            .route("/api/history", get(get_history))
            .route("/health", get(health_check))
            .with_state(state)
            .layer(TraceLayer::new_for_http())
            .layer(RequestBodyLimitLayer::new(self.config.limits.max_body_bytes));

        if self.config.cors.enabled {
            router = router.layer(create_cors_layer(&self.config.cors));
        }

        router
    }

    /// Serve until the shutdown future resolves, then drain in-flight
    /// requests and return.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::Bind` if the listen address is unavailable and
    /// `GatewayError::Serve` if the server loop fails.
    pub async fn serve<F>(self, shutdown: F) -> Result<(), GatewayError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = self.config.bind_addr();
        let router = self.router();

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| GatewayError::Bind {
                addr: addr.to_string(),
                message: e.to_string(),
            })?;

        info!(addr = %addr, "starting HTTP server");
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| GatewayError::Serve(e.to_string()))?;

        info!("HTTP server stopped");
        Ok(())
    }
}

/// Application state shared across handlers
#[derive(Clone)]
struct AppState {
    history: SharedHistoryStore,
    limits: LimitsConfig,
}

async fn convert_get(
    State(state): State<AppState>,
    Query(query): Query<ConvertQuery>,
) -> Result<Json<ConvertResponse>, ApiError> {
    run_conversion(&state, query.input_string.as_deref())
}

async fn convert_post(
    State(state): State<AppState>,
    Json(body): Json<ConvertRequest>,
) -> Result<Json<ConvertResponse>, ApiError> {
    run_conversion(&state, body.input_string.as_deref())
}

/// Validate, transform, record. Shared by both `/api/convert` methods.
fn run_conversion(
    state: &AppState,
    raw: Option<&str>,
) -> Result<Json<ConvertResponse>, ApiError> {
    let input = validate_input(raw, &state.limits)?;
    info!(input = %input, "converting input string");

    let result = transform(&input);

    let entry = HistoryEntry::new(input.clone(), result.clone());
    state.history.lock().append(entry).map_err(|e| {
        error!(error = %e, "failed to record conversion");
        ApiError::internal()
    })?;

    Ok(Json(ConvertResponse { input, result }))
}

async fn get_history(State(state): State<AppState>) -> Result<Json<HistoryResponse>, ApiError> {
    let history = state.history.lock().all().map_err(|e| {
        error!(error = %e, "failed to read history");
        ApiError::internal()
    })?;

    Ok(Json(HistoryResponse { history }))
}

async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
