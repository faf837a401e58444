use std::net::SocketAddr;
use std::sync::Arc;

use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use service::auth::StaticKeyAuthorizer;
use service::contact::InMemoryContactStore;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use server::{routes, AppState};

const ADMIN_KEY: &str = "e2e-admin-key";

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    let state = AppState {
        contact_store: InMemoryContactStore::with_builtin_default(),
        authorizer: Arc::new(StaticKeyAuthorizer::new([ADMIN_KEY])),
    };
    let app = routes::build_router(state, CorsLayer::very_permissive());
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

#[tokio::test]
async fn e2e_public_contact_and_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    let res = c.get(format!("{}/health", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    let res = c.get(format!("{}/api/contact", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert!(body["address"].is_object());
    assert!(body["phone"].is_string());
    Ok(())
}

#[tokio::test]
async fn e2e_admin_put_is_visible_on_public_route() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    let res = c.put(format!("{}/api/admin/contact", app.base_url))
        .bearer_auth(ADMIN_KEY)
        .json(&json!({"key": "email", "value": "support@example.com"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["data"]["email"], "support@example.com");

    let body = c.get(format!("{}/api/contact", app.base_url)).send().await?.json::<Value>().await?;
    assert_eq!(body["email"], "support@example.com");
    Ok(())
}

#[tokio::test]
async fn e2e_concurrent_posts_with_disjoint_keys() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();
    let url = format!("{}/api/admin/contact", app.base_url);

    let a = tokio::spawn({
        let (c, url) = (c.clone(), url.clone());
        async move { c.post(url).header("X-API-Key", ADMIN_KEY).json(&json!({"phone": "+90 500"})).send().await }
    });
    let b = tokio::spawn({
        let (c, url) = (c.clone(), url.clone());
        async move { c.post(url).header("X-API-Key", ADMIN_KEY).json(&json!({"fax": "+90 501"})).send().await }
    });
    assert_eq!(a.await??.status(), HttpStatusCode::OK);
    assert_eq!(b.await??.status(), HttpStatusCode::OK);

    let body = c.get(&url).send().await?.json::<Value>().await?;
    assert_eq!(body["phone"], "+90 500");
    assert_eq!(body["fax"], "+90 501");
    Ok(())
}

#[tokio::test]
async fn e2e_malformed_body_does_not_take_server_down() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    let res = c.post(format!("{}/api/admin/contact", app.base_url))
        .bearer_auth(ADMIN_KEY)
        .header("content-type", "application/json")
        .body("{not json")
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::INTERNAL_SERVER_ERROR);
    let body = res.json::<Value>().await?;
    assert_eq!(body["error"], "Failed to update contact information");

    let res = c.get(format!("{}/api/contact", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn e2e_anonymous_write_rejected() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = reqwest::Client::new()
        .post(format!("{}/api/admin/contact", app.base_url))
        .json(&json!({"phone": "nope"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::UNAUTHORIZED);
    Ok(())
}
