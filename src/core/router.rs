use std::sync::Arc;

use axum::{
    middleware::{from_fn, from_fn_with_state},
    routing::get,
    Json, Router,
};
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::core::config::{AppConfig, SwaggerConfig};
use crate::core::middleware;
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::features::auth::{routes as auth_routes, services::AuthService, SessionManager};
use crate::features::departments::{routes as departments_routes, DepartmentService};
use crate::features::reports::{routes as reports_routes, ReportService};
use crate::shared::types::HealthResponse;

/// Services shared by the HTTP layer
#[derive(Clone)]
pub struct AppServices {
    pub auth: Arc<AuthService>,
    pub departments: Arc<DepartmentService>,
    pub reports: Arc<ReportService>,
    pub sessions: Arc<SessionManager>,
}

/// Liveness probe
#[utoipa::path(
    get,
    path = "/healthz",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn healthz() -> Json<HealthResponse> {
    Json(HealthResponse { ok: true })
}

/// API routes without docs or cross-cutting layers
pub fn api_routes(services: &AppServices) -> Router {
    // Every report route needs a verified session
    let protected_routes = reports_routes::routes(Arc::clone(&services.reports)).route_layer(
        from_fn_with_state(Arc::clone(&services.sessions), middleware::auth_middleware),
    );

    let public_routes = Router::new()
        .route("/healthz", get(healthz))
        .merge(auth_routes::public_routes(Arc::clone(&services.auth)))
        .merge(departments_routes::routes(Arc::clone(&services.departments)));

    Router::new().merge(protected_routes).merge(public_routes)
}

fn swagger_routes(config: &SwaggerConfig) -> Router {
    let swagger_modifier = SwaggerInfoModifier {
        title: config.title.clone(),
        version: config.version.clone(),
        description: config.description.clone(),
    };

    let mut openapi = ApiDoc::openapi();
    swagger_modifier.modify(&mut openapi);

    let swagger =
        Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi));

    if let Some(credentials) = config.credentials() {
        tracing::info!("Swagger UI basic auth enabled");
        swagger.layer(from_fn(middleware::basic_auth_middleware(Arc::new(
            credentials,
        ))))
    } else {
        tracing::info!("Swagger UI basic auth disabled (no credentials configured)");
        swagger
    }
}

/// Full application router: API, docs, CORS, tracing and request ids
pub fn build_router(services: &AppServices, app: &AppConfig, swagger: &SwaggerConfig) -> Router {
    Router::new()
        .merge(swagger_routes(swagger))
        .merge(api_routes(services))
        .layer(middleware::cors_layer(app.cors_allowed_origins.clone()))
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid))
}
