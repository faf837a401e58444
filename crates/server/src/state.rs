use std::sync::Arc;

use service::{auth::AdminAuthorizer, contact::ContactStore};

/// Shared router state, built once in `startup` and cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub contact_store: Arc<dyn ContactStore>,
    pub authorizer: Arc<dyn AdminAuthorizer>,
}
