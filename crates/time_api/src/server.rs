use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::{get, post},
};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;

use crate::config::Config;
use crate::domain::{
    error::TimeApiResult,
    models::{ConversionRequest, ConversionResponse, ErrorResponse, HealthResponse, TimezoneList},
    provider::TimeConverter,
};
use crate::errors::{ServerError, ServerResult};
use crate::openapi::ApiDoc;

/// Build the HTTP router around a converter
pub fn router(converter: TimeConverter) -> Router {
    Router::new()
        .route("/", get(health_check))
        .route("/timezones", get(list_timezones))
        .route("/convert-time", post(convert_time))
        .route("/openapi.json", get(openapi_document))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .with_state(converter)
}

/// Router with a freshly loaded converter
pub fn app() -> Router {
    router(TimeConverter::new())
}

/// Every origin, method and header is allowed, with credentials
///
/// Wildcards cannot be combined with credentials, so the request's own
/// values are echoed back instead.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is running", body = HealthResponse)
    ),
    tag = "Utility"
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Returns every supported time zone name
#[utoipa::path(
    get,
    path = "/timezones",
    responses(
        (status = 200, description = "List of supported time zone names", body = TimezoneList)
    ),
    tag = "Time Zone Conversion"
)]
pub async fn list_timezones(State(converter): State<TimeConverter>) -> Json<TimezoneList> {
    Json(converter.list_timezones())
}

/// Convert time between time zones
///
/// Converts a given date and time from a source time zone to a target time zone.
#[utoipa::path(
    post,
    path = "/convert-time",
    request_body = ConversionRequest,
    responses(
        (status = 200, description = "Converted time", body = ConversionResponse),
        (status = 400, description = "Invalid input or timezone not recognized", body = ErrorResponse)
    ),
    tag = "Time Zone Conversion"
)]
pub async fn convert_time(
    State(converter): State<TimeConverter>,
    payload: Result<Json<ConversionRequest>, JsonRejection>,
) -> TimeApiResult<Json<ConversionResponse>> {
    let Json(request) = payload?;
    let response = converter.convert_time(&request)?;
    Ok(Json(response))
}

async fn openapi_document() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub async fn run(config: Config) -> ServerResult<()> {
    let listener = TcpListener::bind(config.addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: config.addr,
            source,
        })?;

    tracing::info!(
        "Timezone Converter API listening on http://{}",
        config.addr
    );

    axum::serve(listener, app())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)?;

    tracing::info!("Timezone Converter API stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
