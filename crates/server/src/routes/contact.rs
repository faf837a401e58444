use axum::{extract::State, Json};
use service::contact::ContactInfo;

use crate::state::AppState;

/// Public read of the contact record; no authentication.
#[utoipa::path(
    get, path = "/api/contact", tag = "contact",
    responses(
        (status = 200, description = "Current contact information", body = crate::openapi::ContactInfoDoc),
        (status = 500, description = "Failed to fetch contact information", body = crate::openapi::ErrorResponseDoc)
    )
)]
pub async fn get_contact(State(state): State<AppState>) -> Json<ContactInfo> {
    Json(state.contact_store.get().await)
}
