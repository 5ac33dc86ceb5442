//! Endpoint tests driven through the router with `tower::ServiceExt`.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use chrono::NaiveDate;
use migration::MigratorTrait;
use sea_orm::{ActiveModelTrait, Database, DatabaseConnection, EntityTrait, PaginatorTrait, Set};
use tower::ServiceExt;

use crate::models::{holds, issue, landlord, resides_by, resolves, unit};
use crate::server::{AppState, create_app};

async fn setup_test_app() -> (DatabaseConnection, Router) {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();

    let app = create_app(AppState { db: db.clone() });
    (db, app)
}

fn form_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn seed_unit(db: &DatabaseConnection, tenant: &str, floor: i32) -> i32 {
    unit::ActiveModel {
        tenant: Set(tenant.to_string()),
        floor: Set(floor),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
    .unit_id
}

async fn seed_landlord(db: &DatabaseConnection, name: &str) -> i32 {
    landlord::ActiveModel {
        name: Set(name.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
    .landlord_id
}

async fn seed_hold(db: &DatabaseConnection, unit_id: i32, landlord_id: i32) {
    holds::ActiveModel {
        unit_id: Set(unit_id),
        landlord_id: Set(landlord_id),
    }
    .insert(db)
    .await
    .unwrap();
}

async fn seed_issue(db: &DatabaseConnection, unit_id: i32, description: &str) -> i32 {
    let number_id = issue::ActiveModel {
        description: Set(description.to_string()),
        reported_on: Set(NaiveDate::from_ymd_opt(2026, 8, 29).unwrap()),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
    .number_id;

    resides_by::ActiveModel {
        unit_id: Set(unit_id),
        number_id: Set(number_id),
    }
    .insert(db)
    .await
    .unwrap();

    number_id
}

#[tokio::test]
async fn test_home_renders_and_home_alias_redirects() {
    let (_db, app) = setup_test_app().await;

    let response = app.clone().oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("Rentdesk"));

    let response = app.oneshot(get("/home")).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get("location").unwrap(), "/");
}

#[tokio::test]
async fn test_index_lists_seeded_names() {
    let (db, app) = setup_test_app().await;
    crate::seeds::seed_demo_names(&db).await.unwrap();

    let response = app.oneshot(get("/index")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("grace hopper"));
    assert!(body.contains("alan turing"));
    assert!(body.contains("ada lovelace"));
}

#[tokio::test]
async fn test_add_name_inserts_and_redirects_home() {
    let (db, app) = setup_test_app().await;

    let response = app
        .oneshot(form_post("/add", "name=frances+allen"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get("location").unwrap(), "/");

    let names = crate::repositories::DemoRepository::new(&db)
        .list_names()
        .await
        .unwrap();
    assert_eq!(names, vec!["frances allen"]);
}

#[tokio::test]
async fn test_add_empty_name_fails_inline() {
    let (db, app) = setup_test_app().await;

    let response = app.oneshot(form_post("/add", "name=")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("Please enter a name"));

    let names = crate::repositories::DemoRepository::new(&db)
        .list_names()
        .await
        .unwrap();
    assert!(names.is_empty());
}

#[tokio::test]
async fn test_report_issue_success_creates_rows_and_redirects() {
    let (db, app) = setup_test_app().await;
    let unit_id = seed_unit(&db, "Alice", 3).await;

    let response = app
        .oneshot(form_post(
            "/report",
            "issueDesc=leak&userName=Alice&userFloor=3",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get("location").unwrap(), "/submitted");

    assert_eq!(issue::Entity::find().count(&db).await.unwrap(), 1);

    let link = resides_by::Entity::find()
        .one(&db)
        .await
        .unwrap()
        .expect("link row should exist");
    assert_eq!(link.unit_id, unit_id);

    let stored = issue::Entity::find().one(&db).await.unwrap().unwrap();
    assert_eq!(stored.description, "leak");
}

#[tokio::test]
async fn test_report_missing_fields_fails_inline() {
    let (db, app) = setup_test_app().await;
    seed_unit(&db, "Alice", 3).await;

    let response = app
        .oneshot(form_post("/report", "issueDesc=leak&userName=&userFloor=3"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        body_string(response)
            .await
            .contains("Please fill out all fields")
    );

    assert_eq!(issue::Entity::find().count(&db).await.unwrap(), 0);
}

#[tokio::test]
async fn test_report_non_numeric_floor_rejected_before_lookup() {
    let (db, app) = setup_test_app().await;
    seed_unit(&db, "Alice", 3).await;

    let response = app
        .oneshot(form_post(
            "/report",
            "issueDesc=leak&userName=Alice&userFloor=three",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        body_string(response)
            .await
            .contains("Please put a number as the floor")
    );

    assert_eq!(issue::Entity::find().count(&db).await.unwrap(), 0);
}

#[tokio::test]
async fn test_report_unknown_unit_creates_no_rows() {
    let (db, app) = setup_test_app().await;
    seed_unit(&db, "Alice", 3).await;

    let response = app
        .oneshot(form_post(
            "/report",
            "issueDesc=leak&userName=Alice&userFloor=9",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        body_string(response)
            .await
            .contains("Your unit could not be found, please try again")
    );

    assert_eq!(issue::Entity::find().count(&db).await.unwrap(), 0);
    assert_eq!(resides_by::Entity::find().count(&db).await.unwrap(), 0);
}

#[tokio::test]
async fn test_landlord_summary_renders_both_counts() {
    let (db, app) = setup_test_app().await;

    // Bob holds 2 units with 5 issues total, 2 of them resolved
    let bob = seed_landlord(&db, "Bob").await;
    let unit_a = seed_unit(&db, "Alice", 1).await;
    let unit_b = seed_unit(&db, "Dan", 2).await;
    seed_hold(&db, unit_a, bob).await;
    seed_hold(&db, unit_b, bob).await;

    let mut numbers = Vec::new();
    for n in 0..3 {
        numbers.push(seed_issue(&db, unit_a, &format!("issue {}", n)).await);
    }
    for n in 3..5 {
        numbers.push(seed_issue(&db, unit_b, &format!("issue {}", n)).await);
    }
    for number_id in numbers.iter().take(2) {
        resolves::ActiveModel {
            landlord_id: Set(bob),
            number_id: Set(*number_id),
        }
        .insert(&db)
        .await
        .unwrap();
    }

    let response = app.oneshot(form_post("/landlord", "llName=Bob")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("5 issue(s)"));
    assert!(body.contains("resolved 2"));
}

#[tokio::test]
async fn test_landlord_summary_unknown_name_fails_inline() {
    let (_db, app) = setup_test_app().await;

    let response = app
        .oneshot(form_post("/landlord", "llName=Nobody"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        body_string(response)
            .await
            .contains("Your entry could not be found, please try again")
    );
}

#[tokio::test]
async fn test_landlord_summary_missing_name_fails_inline() {
    let (_db, app) = setup_test_app().await;

    let response = app.oneshot(form_post("/landlord", "llName=")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("Please enter a name"));
}

#[tokio::test]
async fn test_resolve_two_phase_flow() {
    let (db, app) = setup_test_app().await;

    let bob = seed_landlord(&db, "Bob").await;
    let unit_id = seed_unit(&db, "Alice", 1).await;
    seed_hold(&db, unit_id, bob).await;
    let number_id = seed_issue(&db, unit_id, "leaky faucet").await;

    // Phase 1: the issue list carries the landlord id in a hidden field
    let response = app
        .clone()
        .oneshot(form_post("/resolve", "llName=Bob"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("leaky faucet"));
    assert!(body.contains(&format!("name=\"landlordId\" value=\"{}\"", bob)));

    // Phase 2: self-contained submission
    let response = app
        .oneshot(form_post(
            "/resolve",
            &format!("landlordId={}&resolve={}", bob, number_id),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get("location").unwrap(), "/submitted");

    let stored = resolves::Entity::find()
        .one(&db)
        .await
        .unwrap()
        .expect("resolves row should exist");
    assert_eq!(stored.landlord_id, bob);
    assert_eq!(stored.number_id, number_id);
}

#[tokio::test]
async fn test_resolve_unaffected_by_interleaved_phase_one_requests() {
    let (db, app) = setup_test_app().await;

    let bob = seed_landlord(&db, "Bob").await;
    let bob_unit = seed_unit(&db, "Alice", 1).await;
    seed_hold(&db, bob_unit, bob).await;
    let bob_issue = seed_issue(&db, bob_unit, "leak").await;

    let carol = seed_landlord(&db, "Carol").await;
    let carol_unit = seed_unit(&db, "Eve", 2).await;
    seed_hold(&db, carol_unit, carol).await;
    seed_issue(&db, carol_unit, "noise").await;

    // Bob starts phase 1, then Carol starts phase 1 before Bob submits
    let response = app
        .clone()
        .oneshot(form_post("/resolve", "llName=Bob"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(form_post("/resolve", "llName=Carol"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Bob's phase-2 submission still attributes the resolution to Bob
    let response = app
        .oneshot(form_post(
            "/resolve",
            &format!("landlordId={}&resolve={}", bob, bob_issue),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let stored = resolves::Entity::find()
        .one(&db)
        .await
        .unwrap()
        .expect("resolves row should exist");
    assert_eq!(stored.landlord_id, bob);
    assert_eq!(stored.number_id, bob_issue);
}

#[tokio::test]
async fn test_resolve_non_numeric_issue_id_fails_inline() {
    let (db, app) = setup_test_app().await;

    let bob = seed_landlord(&db, "Bob").await;
    let unit_id = seed_unit(&db, "Alice", 1).await;
    seed_hold(&db, unit_id, bob).await;
    seed_issue(&db, unit_id, "leak").await;

    let response = app
        .oneshot(form_post(
            "/resolve",
            &format!("landlordId={}&resolve=abc", bob),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("Please enter a number"));

    assert_eq!(resolves::Entity::find().count(&db).await.unwrap(), 0);
}

#[tokio::test]
async fn test_resolve_with_no_fields_asks_for_a_name() {
    let (_db, app) = setup_test_app().await;

    let response = app.oneshot(form_post("/resolve", "llName=")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("Please enter a name"));
}

#[tokio::test]
async fn test_login_always_returns_unauthorized() {
    let (_db, app) = setup_test_app().await;

    let response = app
        .clone()
        .oneshot(get("/login"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Request content makes no difference
    let response = app
        .oneshot(get("/login?user=admin&password=hunter2"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_health_endpoint_pings_database() {
    let (_db, app) = setup_test_app().await;

    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_static_pages_render() {
    let (_db, app) = setup_test_app().await;

    for path in ["/another", "/report", "/landlord", "/resolve", "/submitted"] {
        let response = app.clone().oneshot(get(path)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "GET {} should be 200", path);
    }
}
