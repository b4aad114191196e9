use std::net::SocketAddr;

use axum::Router;
use configs::DatabaseConfig;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use server::routes;
use server::state::AppState;

fn cors() -> CorsLayer { CorsLayer::very_permissive() }

struct TestApp {
    base_url: String,
}

/// Serve the real router over SQLite in memory, with migrations and sample data.
async fn start_server() -> anyhow::Result<TestApp> {
    let db = models::db::connect(&DatabaseConfig::in_memory()).await?;
    let app: Router = routes::build_router(AppState::seaorm(db), cors());
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = reqwest::get(format!("{}/health", app.base_url)).await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_sample_data_is_served() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    let vets = c.get(format!("{}/api/vets", app.base_url)).send().await?.json::<Vec<Value>>().await?;
    assert_eq!(vets.len(), 6);

    let res = c.get(format!("{}/api/owners?lastName=Davis", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Vec<Value>>().await?.len(), 2);

    let res = c.get(format!("{}/api/pets", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn e2e_pet_and_visit_lifecycle() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    let res = c
        .post(format!("{}/api/pets", app.base_url))
        .json(&json!({"name": "Rosy", "birthDate": "2019/04/12", "ownerId": 1, "type": {"id": 2, "name": "dog"}}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let location = res.headers().get("location").and_then(|v| v.to_str().ok()).map(str::to_string);
    let pet = res.json::<Value>().await?;
    let id = pet["id"].as_i64().ok_or_else(|| anyhow::anyhow!("pet id missing"))?;
    assert_eq!(location, Some(format!("/api/pets/{id}")));

    let res = c
        .post(format!("{}/api/visits", app.base_url))
        .json(&json!({"petId": id, "date": "2013/01/01", "description": "rabies shot"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);

    let visits = c
        .get(format!("{}/api/pets/{id}/visits", app.base_url))
        .send()
        .await?
        .json::<Vec<Value>>()
        .await?;
    assert_eq!(visits[0]["date"], "2013/01/01");

    let res = c.delete(format!("{}/api/pets/{id}", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);
    let res = c.get(format!("{}/api/pets/{id}", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn e2e_user_roles_persist() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();
    let res = c
        .post(format!("{}/api/users", app.base_url))
        .json(&json!({"username": "admin", "password": "admin", "enabled": true, "roles": [{"name": "OWNER_ADMIN"}]}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let user = res.json::<Value>().await?;
    assert_eq!(user["roles"][0]["name"], "ROLE_OWNER_ADMIN");
    assert!(user["roles"][0]["id"].is_i64());
    Ok(())
}

#[tokio::test]
async fn e2e_pet_type_in_use_is_a_conflict() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();
    let res = c
        .post(format!("{}/api/pets", app.base_url))
        .json(&json!({"name": "Rosy", "birthDate": "2019/04/12", "ownerId": 1, "type": {"id": 2, "name": "dog"}}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);

    let res = c.delete(format!("{}/api/pettypes/2", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::CONFLICT);
    let body = res.text().await?;
    assert!(!body.contains("FOREIGN KEY"));

    let res = c.get(format!("{}/api/pettypes/2", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn e2e_user_roles_are_deduplicated_and_password_hidden() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();
    let body = json!({"username": "admin", "password": "admin", "enabled": true, "roles": [{"name": "ADMIN"}, {"name": "ROLE_ADMIN"}]});
    let res = c.post(format!("{}/api/users", app.base_url)).json(&body).send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let user = res.json::<Value>().await?;
    assert_eq!(user["roles"].as_array().map(Vec::len), Some(1));
    assert!(user.get("password").is_none());

    // Saving the same user again replaces its roles instead of clashing.
    let res = c.post(format!("{}/api/users", app.base_url)).json(&body).send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    Ok(())
}
