//! CashFlow Web Server
//!
//! Axum-based REST API backing the CashFlow dashboard:
//! - Bearer-token authentication (secure by default, --no-auth for local dev)
//! - Restrictive CORS policy
//! - Request tracing
//! - Sanitized error responses

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{HeaderValue, Method, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use subtle::ConstantTimeEq;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info, warn};

use cashflow_core::db::Database;

mod handlers;


/// Authorization header for bearer token auth
const AUTHORIZATION_HEADER: &str = "authorization";

/// Environment variable holding comma-separated API tokens
pub const API_TOKENS_ENV: &str = "CASHFLOW_API_TOKENS";

/// Environment variable holding comma-separated allowed CORS origins
pub const ALLOWED_ORIGINS_ENV: &str = "CASHFLOW_ALLOWED_ORIGINS";

/// Server configuration
#[derive(Clone)]
pub struct ServerConfig {
    /// Whether authentication is required (secure by default)
    pub require_auth: bool,
    /// Bearer tokens accepted in the Authorization header
    pub api_tokens: Vec<String>,
    /// Allowed CORS origins (empty = same-origin only)
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            require_auth: true,
            api_tokens: vec![],
            allowed_origins: vec![],
        }
    }
}

impl ServerConfig {
    /// Build configuration from environment variables
    ///
    /// Reads `CASHFLOW_API_TOKENS` and `CASHFLOW_ALLOWED_ORIGINS`
    /// (comma-separated).
    pub fn from_env(require_auth: bool) -> Self {
        Self {
            require_auth,
            api_tokens: parse_csv_env(API_TOKENS_ENV),
            allowed_origins: parse_csv_env(ALLOWED_ORIGINS_ENV),
        }
    }
}

fn parse_csv_env(var: &str) -> Vec<String> {
    std::env::var(var)
        .unwrap_or_default()
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Shared application state
pub struct AppState {
    pub db: Database,
    pub config: ServerConfig,
}

/// Authentication middleware - validates the bearer token
///
/// The hosted identity provider issues the tokens the front end sends; this
/// server only checks membership against its configured token list, using a
/// constant-time comparison to prevent timing attacks. With `require_auth`
/// off (local development) every request passes.
async fn auth_middleware(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    if !state.config.require_auth {
        return next.run(request).await;
    }

    let bearer = request
        .headers()
        .get(AUTHORIZATION_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|auth| auth.strip_prefix("Bearer "));

    if let Some(token) = bearer {
        let authorized = state
            .config
            .api_tokens
            .iter()
            .any(|t| t.as_bytes().ct_eq(token.as_bytes()).into());

        if authorized {
            return next.run(request).await;
        }
        warn!(path = %request.uri().path(), "Rejected request with invalid bearer token");
    } else {
        warn!(path = %request.uri().path(), "Rejected request without bearer token");
    }

    (
        StatusCode::UNAUTHORIZED,
        Json(serde_json::json!({"error": "Unauthorized"})),
    )
        .into_response()
}

/// Success response
#[derive(Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// Create the application router
pub fn create_router(db: Database, config: ServerConfig) -> Router {
    let state = Arc::new(AppState {
        db,
        config: config.clone(),
    });

    let api_routes = Router::new()
        // Auth / profile
        .route("/auth/register", post(handlers::register_profile))
        .route(
            "/auth/user/profile",
            get(handlers::get_profile).put(handlers::update_profile),
        )
        // Dashboard
        .route("/dashboard", get(handlers::get_dashboard))
        // Transactions
        .route(
            "/transactions",
            get(handlers::list_transactions).post(handlers::create_transaction),
        )
        .route(
            "/transactions/period/:period",
            get(handlers::list_transactions_by_period),
        )
        .route(
            "/transactions/:id",
            axum::routing::delete(handlers::delete_transaction),
        )
        // Insights
        .route("/insights", get(handlers::get_insights))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let cors = build_cors_layer(&config.allowed_origins);

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health - liveness probe, unauthenticated
async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

fn build_cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|o| match o.parse::<HeaderValue>() {
            Ok(v) => Some(v),
            Err(_) => {
                warn!(origin = %o, "Ignoring unparseable CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        // Same-origin only: no cross-origin requests allowed
        CorsLayer::new()
    } else {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::AUTHORIZATION,
            ])
    }
}

/// Run the server until shutdown
pub async fn serve(db: Database, host: &str, port: u16, config: ServerConfig) -> anyhow::Result<()> {
    let app = create_router(db, config);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, "CashFlow API listening");

    axum::serve(listener, app).await?;
    Ok(())
}

// ============================================================================
// Error Handling
// ============================================================================

/// Application error type with proper HTTP status codes
pub struct AppError {
    status: StatusCode,
    message: String,
    internal: Option<anyhow::Error>,
}

impl AppError {
    pub fn bad_request(msg: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.to_string(),
            internal: None,
        }
    }

    pub fn not_found(msg: &str) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: msg.to_string(),
            internal: None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the full internal error if present
        if let Some(err) = &self.internal {
            error!(error = %err, "Internal error");
        }

        let body = Json(serde_json::json!({
            "error": self.message
        }));

        (self.status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        let err = err.into();
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            // Return generic message to client
            message: "An internal error occurred".to_string(),
            // Keep full error for logging
            internal: Some(err),
        }
    }
}
