use axum::{extract::State, Json};
use serde::Serialize;
use serde_json::Value;
use service::contact::{ContactInfo, FieldUpdate};
use tracing::info;

use crate::errors::ApiError;
use crate::extract::JsonBody;
use crate::state::AppState;

pub const MERGE_OK: &str = "Contact information updated successfully";

#[derive(Debug, Serialize)]
pub struct UpdateFieldResponse {
    pub success: bool,
    pub data: ContactInfo,
}

#[derive(Debug, Serialize)]
pub struct MergeResponse {
    pub success: bool,
    pub message: String,
}

#[utoipa::path(
    get, path = "/api/admin/contact", tag = "admin",
    operation_id = "admin_read_contact",
    responses(
        (status = 200, description = "Current contact information", body = crate::openapi::ContactInfoDoc),
        (status = 500, description = "Failed to fetch contact information", body = crate::openapi::ErrorResponseDoc)
    )
)]
pub async fn read_contact(State(state): State<AppState>) -> Json<ContactInfo> {
    Json(state.contact_store.get().await)
}

/// Overwrite one top-level field: `{"key": "...", "value": ...}`.
#[utoipa::path(
    put, path = "/api/admin/contact", tag = "admin",
    request_body = crate::openapi::FieldUpdateDoc,
    responses(
        (status = 200, description = "Field updated", body = crate::openapi::UpdateFieldResponseDoc),
        (status = 400, description = "Key and value are required", body = crate::openapi::ErrorResponseDoc),
        (status = 401, description = "Unauthorized", body = crate::openapi::ErrorResponseDoc),
        (status = 500, description = "Failed to update contact information", body = crate::openapi::ErrorResponseDoc)
    ),
    security(("admin_key" = []))
)]
pub async fn update_field(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<Value>,
) -> Result<Json<UpdateFieldResponse>, ApiError> {
    let update = FieldUpdate::from_value(body)?;
    let key = update.key.clone();
    let data = state.contact_store.set_field(update.key, update.value).await?;
    info!(%key, "contact field updated");
    Ok(Json(UpdateFieldResponse { success: true, data }))
}

/// Shallow-merge an arbitrary JSON object into the record.
#[utoipa::path(
    post, path = "/api/admin/contact", tag = "admin",
    request_body = crate::openapi::ContactInfoDoc,
    responses(
        (status = 200, description = "Record merged", body = crate::openapi::MergeResponseDoc),
        (status = 400, description = "Request body must be a JSON object", body = crate::openapi::ErrorResponseDoc),
        (status = 401, description = "Unauthorized", body = crate::openapi::ErrorResponseDoc),
        (status = 500, description = "Failed to update contact information", body = crate::openapi::ErrorResponseDoc)
    ),
    security(("admin_key" = []))
)]
pub async fn merge_contact(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<Value>,
) -> Result<Json<MergeResponse>, ApiError> {
    let partial = ContactInfo::from_value(body)?;
    let keys: Vec<String> = partial.keys().cloned().collect();
    state.contact_store.merge(partial).await?;
    info!(?keys, "contact information merged");
    Ok(Json(MergeResponse { success: true, message: MERGE_OK.to_string() }))
}
