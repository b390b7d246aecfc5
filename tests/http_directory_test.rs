//! HTTP directory tests.
//!
//! These tests use wiremock to stand in for the directory service, so the real
//! request shapes are checked without network access.

use std::sync::Arc;

use serde_json::json;
use user_dashboard::clients::ActorClient;
use user_dashboard::config::DashboardConfig;
use user_dashboard::directory::{DirectoryError, DirectoryService, HttpDirectory};
use user_dashboard::lifecycle::DashboardSystem;
use user_dashboard::model::{User, UserId, PLACEHOLDER};
use user_dashboard::view::DashboardView;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Base URL with a path prefix, to check endpoints are appended rather than replaced.
fn api_base(server: &MockServer) -> String {
    format!("{}/api", server.uri())
}

fn listing() -> serde_json::Value {
    json!([
        {
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "company": { "name": "Romaguera-Crona", "bs": "harness real-time e-markets" }
        },
        {
            "id": 2,
            "name": "Ervin Howell",
            "email": "Shanna@melissa.tv"
        }
    ])
}

// ============================================================================
// Request shapes
// ============================================================================

#[tokio::test]
async fn test_list_users() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing()))
        .expect(1)
        .mount(&server)
        .await;

    let directory = HttpDirectory::new(&api_base(&server)).unwrap();
    assert_eq!(directory.base_url().path(), "/api");
    let users = directory.list_users().await.unwrap();

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].company_name(), Some("Romaguera-Crona"));
    assert_eq!(users[1].company_name(), None);
}

#[tokio::test]
async fn test_update_sends_full_record_including_unknown_fields() {
    let server = MockServer::start().await;
    let mut user: User = serde_json::from_value(listing()[0].clone()).unwrap();
    user.name = Some("Leanne Updated".into());

    Mock::given(method("PUT"))
        .and(path("/api/users/1"))
        .and(body_json(json!({
            "id": 1,
            "name": "Leanne Updated",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "company": { "name": "Romaguera-Crona", "bs": "harness real-time e-markets" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 1 })))
        .expect(1)
        .mount(&server)
        .await;

    let directory = HttpDirectory::new(&api_base(&server)).unwrap();
    directory.update_user(&user).await.unwrap();
}

#[tokio::test]
async fn test_delete_user() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/users/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let directory = HttpDirectory::new(&api_base(&server)).unwrap();
    directory.delete_user(UserId(7)).await.unwrap();
}

#[tokio::test]
async fn test_error_status_is_a_request_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let directory = HttpDirectory::new(&api_base(&server)).unwrap();
    let err = directory.list_users().await.unwrap_err();

    assert!(matches!(err, DirectoryError::Request(_)));
    assert!(err.to_string().contains("500"));
    assert!(!err.user_message().is_empty());
}

// ============================================================================
// Through the dashboard
// ============================================================================

#[tokio::test]
async fn test_dashboard_over_http() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing()))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/users/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let config = DashboardConfig {
        base_url: api_base(&server),
        ..DashboardConfig::default()
    };
    let directory = HttpDirectory::new(&config.base_url).unwrap();
    let system = DashboardSystem::new(Arc::new(directory), &config);
    let mut controller = system.controller();

    controller.start().await.settled().await.unwrap();
    let view = controller.view();
    let rows = &view.table().expect("table view").rows;
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].company, PLACEHOLDER);

    let ervin = system.store.current().users[1].clone();
    controller.delete_clicked(&ervin);
    controller.confirm_delete().unwrap().settled().await.unwrap();
    assert_eq!(system.store.current().len(), 1);

    drop(controller);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_dashboard_shows_error_when_service_fails() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let config = DashboardConfig {
        base_url: api_base(&server),
        ..DashboardConfig::default()
    };
    let system = DashboardSystem::new(Arc::new(HttpDirectory::new(&config.base_url).unwrap()), &config);
    let controller = system.controller();

    controller.start().await.settled().await.unwrap();
    assert!(matches!(controller.view(), DashboardView::Failed { .. }));
    assert!(system.store.current().users.is_empty());

    drop(controller);
    system.shutdown().await.unwrap();
}
