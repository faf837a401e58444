use std::sync::Arc;

use configs::AppConfig;
use service::{
    auth::StaticKeyAuthorizer,
    contact::{ContactInfo, ContactStore, InMemoryContactStore},
};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::routes;
use crate::state::AppState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Composition root: one contact store and one authorizer shared by every route.
pub fn build_state(cfg: &AppConfig) -> AppState {
    let contact_store: Arc<dyn ContactStore> = match cfg.contact.defaults.clone() {
        Some(defaults) => InMemoryContactStore::new(ContactInfo::new(defaults)),
        None => InMemoryContactStore::with_builtin_default(),
    };

    let authorizer = StaticKeyAuthorizer::new(cfg.admin.api_keys.iter().cloned());
    if authorizer.is_empty() {
        warn!("no admin API keys configured; PUT/POST on /api/admin/contact will be rejected");
    } else {
        info!(keys = authorizer.len(), "admin authorizer loaded");
    }

    AppState { contact_store, authorizer: Arc::new(authorizer) }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "failed to listen for SIGTERM");
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
    info!("shutdown signal received, draining connections");
}

/// Build the app from an already-validated config and serve until a shutdown signal.
pub async fn run_with_config(cfg: AppConfig) -> anyhow::Result<()> {
    let state = build_state(&cfg);
    let app = routes::build_router(state, build_cors());

    let addr = cfg.server.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!(addr = %listener.local_addr()?, "contact server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("contact server stopped");
    Ok(())
}
