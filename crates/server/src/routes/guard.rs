use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap, Method},
    middleware::Next,
    response::Response,
};
use tracing::warn;

use crate::errors::ApiError;
use crate::state::AppState;

/// Middleware: mutating admin calls need `Authorization: Bearer <key>` or `X-API-Key`.
/// Safe methods pass through so admin reads match the public route.
pub async fn require_admin(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if is_safe(req.method()) {
        return Ok(next.run(req).await);
    }

    let path = req.uri().path().to_string();
    let credential = match credential_from(req.headers()) {
        Some(c) => c,
        None => {
            warn!(%path, method = %req.method(), "missing admin credential");
            return Err(ApiError::Unauthorized);
        }
    };

    if !state.authorizer.authorize(&credential).await {
        warn!(%path, method = %req.method(), "admin credential rejected");
        return Err(ApiError::Unauthorized);
    }

    Ok(next.run(req).await)
}

fn is_safe(method: &Method) -> bool {
    method == Method::GET || method == Method::HEAD || method == Method::OPTIONS
}

fn credential_from(headers: &HeaderMap) -> Option<String> {
    let bearer = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|h| h.trim_start().split_once(' '))
        .and_then(|(scheme, token)| scheme.eq_ignore_ascii_case("Bearer").then_some(token))
        .map(str::trim)
        .filter(|t| !t.is_empty());
    if let Some(token) = bearer {
        return Some(token.to_string());
    }

    // fallback to X-API-Key
    headers
        .get("X-API-Key")
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
}
