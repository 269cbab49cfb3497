//! JSON RPC server exposing card number validation.
//!
//! # Endpoints
//!
//! - `POST /v1/cards/validate` - validate one card number
//! - `GET /health` - serving status, `503` once shutdown has begun
//! - `GET /api-docs/openapi.json` and `/swagger-ui/` - API description
//!
//! Validation failures map to `400 Bad Request` with field violations, and
//! a body that is not a JSON object with a string `card_number` maps to
//! `400` with no violations. Internal failures and handler panics map to
//! `500 Internal Server Error` with no detail.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, Method, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{self, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

use crate::config::Config;
use crate::mask::mask_card_number;
use crate::{CardValidator, FieldViolation, ServiceError};

// ============================================================================
// OpenAPI Documentation
// ============================================================================

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Cards Service API",
        description = "Validates card numbers: provider detection, length rules and Luhn checksum."
    ),
    tags(
        (name = "Cards", description = "Card number validation"),
        (name = "System", description = "Health and status endpoints")
    ),
    paths(validate_card, health),
    components(schemas(
        ValidateRequest,
        ValidateResponse,
        ErrorResponse,
        FieldViolation,
        HealthResponse,
    ))
)]
struct ApiDoc;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Deserialize, ToSchema)]
#[schema(example = json!({"card_number": "4111111111111111"}))]
struct ValidateRequest {
    /// Card number to validate. Digits only; embedded spaces count toward the length.
    #[serde(default)]
    card_number: String,
}

#[derive(Serialize, ToSchema)]
#[schema(example = json!({
    "card_number": "4111111111111111",
    "provider_name": "VISA",
    "provider_badge": "https://dummy.com/card-provider-icons/visa.png"
}))]
struct ValidateResponse {
    /// The card number as supplied
    card_number: String,
    /// AMEX, VISA, MASTERCARD or DISCOVER
    provider_name: String,
    /// URL of the provider badge image
    provider_badge: String,
}

#[derive(Serialize, ToSchema)]
struct ErrorResponse {
    /// INVALID_ARGUMENT or INTERNAL
    code: String,
    /// Short summary
    message: String,
    /// One entry per violated rule; absent for internal errors
    #[serde(skip_serializing_if = "Vec::is_empty")]
    violations: Vec<FieldViolation>,
}

#[derive(Serialize, ToSchema)]
struct HealthResponse {
    /// SERVING or NOT_SERVING
    status: String,
    /// Service name
    service: String,
    /// Service version
    version: String,
}

// ============================================================================
// State
// ============================================================================

/// Shared server state.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<Inner>,
}

struct Inner {
    validator: CardValidator,
    service_name: String,
    service_version: String,
    serving: AtomicBool,
}

impl AppState {
    /// Builds the state from configuration. Starts out serving.
    pub fn new(config: &Config) -> Self {
        Self {
            inner: Arc::new(Inner {
                validator: CardValidator::new(config.badge_base_url.clone()),
                service_name: config.service_name.clone(),
                service_version: config.service_version.clone(),
                serving: AtomicBool::new(true),
            }),
        }
    }

    /// Returns true while the health endpoint reports SERVING.
    pub fn is_serving(&self) -> bool {
        self.inner.serving.load(Ordering::SeqCst)
    }

    /// Sets the serving status reported by the health endpoint.
    pub fn set_serving(&self, serving: bool) {
        self.inner.serving.store(serving, Ordering::SeqCst);
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// Validate a card number
#[utoipa::path(
    post,
    path = "/v1/cards/validate",
    request_body = ValidateRequest,
    responses(
        (status = 200, description = "Card number is valid", body = ValidateResponse),
        (status = 400, description = "Card number was rejected", body = ErrorResponse),
        (status = 500, description = "Internal error", body = ErrorResponse)
    ),
    tag = "Cards"
)]
async fn validate_card(
    State(state): State<AppState>,
    payload: Result<Json<ValidateRequest>, JsonRejection>,
) -> Result<Json<ValidateResponse>, Response> {
    let Json(req) = payload.map_err(malformed_request)?;

    let info = match state.inner.validator.validate(&req.card_number) {
        Ok(info) => info,
        Err(ServiceError::Validation(failure)) => {
            tracing::info!(
                card = %mask_card_number(&req.card_number),
                reason = failure.reason(),
                "card number rejected"
            );
            return Err(ServiceError::Validation(failure).into_response());
        }
        Err(e) => return Err(e.into_response()),
    };

    tracing::info!(
        card = %info.masked(),
        provider = info.provider_name(),
        "card number validated"
    );

    Ok(Json(ValidateResponse {
        card_number: info.card_number().to_string(),
        provider_name: info.provider_name().to_string(),
        provider_badge: info.provider_badge().to_string(),
    }))
}

/// Health check
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is serving", body = HealthResponse),
        (status = 503, description = "Service is shutting down", body = HealthResponse)
    ),
    tag = "System"
)]
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let (code, status) = if state.is_serving() {
        (StatusCode::OK, "SERVING")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "NOT_SERVING")
    };

    (
        code,
        Json(HealthResponse {
            status: status.to_string(),
            service: state.inner.service_name.clone(),
            version: state.inner.service_version.clone(),
        }),
    )
}

/// Body malformed or `card_number` not a string.
fn malformed_request(rejection: JsonRejection) -> Response {
    tracing::info!(status = %rejection.status(), "malformed validate request");
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            code: "INVALID_ARGUMENT".to_string(),
            message: rejection.body_text(),
            violations: Vec::new(),
        }),
    )
        .into_response()
}

fn internal_error_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            code: "INTERNAL".to_string(),
            message: "internal error".to_string(),
            violations: Vec::new(),
        }),
    )
        .into_response()
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic message"
    };
    tracing::error!(panic = details, "request handler panicked");
    internal_error_response()
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        match self {
            ServiceError::Validation(failure) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    code: "INVALID_ARGUMENT".to_string(),
                    message: "bad request".to_string(),
                    violations: failure.violations().to_vec(),
                }),
            )
                .into_response(),
            ServiceError::Internal(failure) => {
                tracing::error!(error = %failure, "internal error while validating card number");
                internal_error_response()
            }
        }
    }
}

// ============================================================================
// Router & Lifecycle
// ============================================================================

/// Builds the application router.
pub fn router(state: AppState, timeout: Duration) -> Router {
    let routes = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/v1/cards/validate", post(validate_card))
        .route("/health", get(health))
        .with_state(state);

    with_middleware(routes, timeout)
}

/// Wraps routes with panic recovery, the request deadline, CORS and tracing.
///
/// Panics become an opaque `500 INTERNAL`; requests over `timeout` get
/// `408 Request Timeout`.
fn with_middleware(routes: Router, timeout: Duration) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_origin(cors::Any);

    routes
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TimeoutLayer::new(timeout))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Binds the configured port and serves until SIGINT or SIGTERM.
pub async fn serve(config: Config) -> std::io::Result<()> {
    let state = AppState::new(&config);
    let app = router(state.clone(), config.default_timeout);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(
        service_name = %config.service_name,
        service_version = %config.service_version,
        server_port = config.server_port,
        debug_mode = config.debug,
        "starting server on http://{}",
        addr
    );

    let result = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(state.clone()))
        .await;

    state.set_serving(false);
    match &result {
        Ok(()) => tracing::info!("server stopped"),
        Err(e) => tracing::error!(error = %e, "server stopped unexpectedly"),
    }
    result
}

async fn shutdown_signal(state: AppState) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for SIGINT");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    let received = tokio::select! {
        _ = ctrl_c => "SIGINT",
        _ = terminate => "SIGTERM",
    };

    tracing::info!(signal = received, "initiating graceful shutdown");
    state.set_serving(false);
}
