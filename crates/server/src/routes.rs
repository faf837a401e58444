use std::any::Any;

use axum::{
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::{get, put, MethodRouter},
    Json, Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, Level};

use common::types::{ErrorBody, Health};

use crate::errors::{FETCH_FAILED, UPDATE_FAILED};
use crate::openapi;
use crate::state::AppState;

pub mod admin_contact;
pub mod contact;
pub mod guard;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Panics inside a handler answer 500 with `public` instead of dropping the connection.
fn catch_panics_as(
    public: &'static str,
) -> CatchPanicLayer<impl Fn(Box<dyn Any + Send + 'static>) -> Response + Clone> {
    CatchPanicLayer::custom(move |err: Box<dyn Any + Send + 'static>| {
        let detail = if let Some(s) = err.downcast_ref::<String>() {
            s.clone()
        } else if let Some(s) = err.downcast_ref::<&str>() {
            s.to_string()
        } else {
            "unknown panic payload".to_string()
        };
        error!(panic = %detail, "{public}");
        (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorBody { error: public.to_string() })).into_response()
    })
}

/// Build the full application router: public reads plus guarded admin writes.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    // Public routes
    let public_read: MethodRouter<AppState> = get(contact::get_contact).layer(catch_panics_as(FETCH_FAILED));
    let public = Router::new()
        .route("/health", get(health))
        .route("/api/contact", public_read)
        .route("/api-docs/openapi.json", get(openapi::openapi_json));

    // Admin routes; the guard only lets safe methods through without a key
    let admin_read: MethodRouter<AppState> =
        get(admin_contact::read_contact).layer(catch_panics_as(FETCH_FAILED));
    let admin_write: MethodRouter<AppState> = put(admin_contact::update_field)
        .post(admin_contact::merge_contact)
        .layer(catch_panics_as(UPDATE_FAILED));
    let admin = Router::new()
        .route("/api/admin/contact", admin_read.merge(admin_write))
        .route_layer(middleware::from_fn_with_state(state.clone(), guard::require_admin));

    public
        .merge(admin)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
