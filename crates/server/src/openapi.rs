use axum::Json;
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::{Modify, OpenApi, ToSchema};

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ErrorResponseDoc { pub error: String }

#[derive(ToSchema)]
pub struct AddressDoc { pub street: String, pub district: String, pub city: String, pub country: String }

/// Contact record; any additional top-level keys set by admins are returned as-is.
#[derive(ToSchema)]
pub struct ContactInfoDoc { pub address: AddressDoc, pub phone: String, pub email: String }

#[derive(ToSchema)]
pub struct FieldUpdateDoc {
    pub key: String,
    #[schema(value_type = Object)]
    pub value: serde_json::Value,
}

#[derive(ToSchema)]
pub struct UpdateFieldResponseDoc { pub success: bool, pub data: ContactInfoDoc }

#[derive(ToSchema)]
pub struct MergeResponseDoc { pub success: bool, pub message: String }

struct AdminKeyScheme;

impl Modify for AdminKeyScheme {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme("admin_key", SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)));
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::contact::get_contact,
        crate::routes::admin_contact::read_contact,
        crate::routes::admin_contact::update_field,
        crate::routes::admin_contact::merge_contact,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorResponseDoc,
            AddressDoc,
            ContactInfoDoc,
            FieldUpdateDoc,
            UpdateFieldResponseDoc,
            MergeResponseDoc,
        )
    ),
    modifiers(&AdminKeyScheme),
    tags(
        (name = "health"),
        (name = "contact", description = "Public contact information"),
        (name = "admin", description = "Contact information management")
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
