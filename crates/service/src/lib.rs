//! Service layer for contact information.
//! - `contact`: the record type, request payload validation and the store.
//! - `auth`: admin authorization checks injected into the route layer.
//! - Route handlers depend on the traits here, never on concrete stores.

pub mod errors;
pub mod contact;
pub mod auth;
