//! Middleware stack for the API server
//!
//! Provides request IDs, tracing, timeouts, CORS, and rate limiting.

use axum::{
    body::Body,
    http::{header, HeaderValue, Method, Request, StatusCode},
    Router,
};
use member_common::{CorsConfig, RateLimitConfig};
use std::sync::Arc;
use std::time::Duration;
use tower_governor::{governor::GovernorConfigBuilder, key_extractor::GlobalKeyExtractor, GovernorLayer};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{info, warn, Level};

use crate::state::AppState;

/// Header name for request ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Settings the middleware stack is built from
#[derive(Debug, Clone)]
pub struct MiddlewareSettings<'a> {
    pub rate_limit: &'a RateLimitConfig,
    pub cors: &'a CorsConfig,
    pub request_timeout: Duration,
    pub is_production: bool,
}

/// Apply request ID, tracing, timeout and CORS layers (no rate limiting)
pub fn apply_middleware(router: Router<AppState>, settings: &MiddlewareSettings<'_>) -> Router<AppState> {
    // Layers wrap in reverse order: the last one added sees the request first.
    // Request -> RequestID -> Trace -> Timeout -> CORS -> Handler
    router
        .layer(create_cors_layer_from_config(settings.cors, settings.is_production))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::SERVICE_UNAVAILABLE,
            settings.request_timeout,
        ))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = request
                        .headers()
                        .get(REQUEST_ID_HEADER)
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or("unknown");

                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = %request_id,
                    )
                })
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(PropagateRequestIdLayer::new(header::HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        .layer(SetRequestIdLayer::new(
            header::HeaderName::from_static(REQUEST_ID_HEADER),
            MakeRequestUuid,
        ))
}

/// Apply the full stack with a global rate limiter in front
pub fn apply_middleware_with_config(
    router: Router<AppState>,
    settings: &MiddlewareSettings<'_>,
) -> Router<AppState> {
    let router = apply_middleware(router, settings);

    // Global limit (not per-IP). The bucket refills one token per period.
    let period_ms = u64::from((1000 / settings.rate_limit.requests_per_second.max(1)).max(1));
    let governor_conf = GovernorConfigBuilder::default()
        .per_millisecond(period_ms)
        .burst_size(settings.rate_limit.burst)
        .key_extractor(GlobalKeyExtractor)
        .finish();

    match governor_conf {
        Some(config) => router.layer(GovernorLayer {
            config: Arc::new(config),
        }),
        None => {
            warn!(
                burst = settings.rate_limit.burst,
                "Rate limiter disabled: burst size must be positive"
            );
            router
        }
    }
}

/// Create CORS layer from configuration
fn create_cors_layer_from_config(config: &CorsConfig, is_production: bool) -> CorsLayer {
    let base_layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::HeaderName::from_static(REQUEST_ID_HEADER),
        ])
        .expose_headers([
            header::LOCATION,
            header::HeaderName::from_static(REQUEST_ID_HEADER),
        ]);

    // Production only allows configured origins.
    // Development allows any origin when none are configured.
    if is_production || !config.allowed_origins.is_empty() {
        if config.allowed_origins.is_empty() {
            warn!(
                "CORS: No allowed origins configured in production mode. \
                 Requests from browsers will be blocked."
            );
            base_layer.allow_origin(AllowOrigin::list(Vec::<HeaderValue>::new()))
        } else {
            let origins: Vec<HeaderValue> = config
                .allowed_origins
                .iter()
                .filter_map(|origin| {
                    origin.parse::<HeaderValue>().ok().or_else(|| {
                        warn!("Invalid CORS origin: {}", origin);
                        None
                    })
                })
                .collect();

            info!("CORS: Allowing {} configured origins", origins.len());
            base_layer.allow_origin(AllowOrigin::list(origins))
        }
    } else {
        warn!(
            "CORS: Allowing any origin (development mode). \
             Configure CORS_ALLOWED_ORIGINS for production."
        );
        base_layer.allow_origin(Any)
    }
}
