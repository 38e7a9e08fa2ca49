
use egresados_backend::entities::user::Role;
use reqwest::StatusCode;
use serde_json::{json, Value};
use test_utils::*;

#[actix_rt::test]
async fn home_is_public() {
    let app = TestApp::spawn().await;

    let response = app.client.get(app.url("/")).send().await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["api"], "/api/v1");
}

#[actix_rt::test]
async fn protected_routes_require_a_token() {
    let app = TestApp::spawn().await;

    for path in ["/api/v1/session", "/api/v1/users/me", "/api/v1/news", "/api/v1/map"] {
        let response = app.client.get(app.url(path)).send().await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{path}");
    }
}

#[actix_rt::test]
async fn garbage_token_is_unauthorized() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .get(app.url("/api/v1/session"))
        .bearer_auth("not-a-jwt")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].is_string());
}

#[actix_rt::test]
async fn session_carries_role_navigation() {
    let app = TestApp::spawn().await;

    let response = app.get_as("/api/v1/session", Role::Graduate).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["user"]["role"], "graduate");
    let paths: Vec<&str> = body["navigation"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|item| item["path"].as_str())
        .collect();
    assert!(paths.contains(&"/employmentInformation"));
    assert!(!paths.contains(&"/users"));

    let body: Value = app.get_as("/api/v1/session", Role::Administrator).await.json().await.unwrap();
    assert_eq!(body["navigation"][1]["path"], "/users");
}

#[actix_rt::test]
async fn graduates_cannot_read_reports_or_map() {
    let app = TestApp::spawn().await;

    assert_eq!(app.get_as("/api/v1/graduateReports", Role::Graduate).await.status(), StatusCode::FORBIDDEN);
    assert_eq!(app.get_as("/api/v1/map", Role::Graduate).await.status(), StatusCode::FORBIDDEN);
    assert_eq!(app.get_as("/api/v1/basicInformation", Role::Graduate).await.status(), StatusCode::FORBIDDEN);
}

#[actix_rt::test]
async fn coordinators_cannot_manage_users() {
    let app = TestApp::spawn().await;

    assert_eq!(app.get_as("/api/v1/users", Role::Coordinator).await.status(), StatusCode::FORBIDDEN);
    assert_eq!(app.get_as("/api/v1/admin/health", Role::Coordinator).await.status(), StatusCode::FORBIDDEN);
}

#[actix_rt::test]
async fn staff_cannot_write_graduate_records() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .post(app.url("/api/v1/academicInformation"))
        .bearer_auth(app.token_for(Role::Coordinator))
        .json(&json!({
            "academic_type": "course",
            "program": "Diplomado en Analítica",
            "institution": "SENA"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[actix_rt::test]
async fn malformed_record_id_is_bad_request() {
    let app = TestApp::spawn().await;

    let response = app.get_as("/api/v1/basicInformation/not-a-uuid", Role::Coordinator).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[actix_rt::test]
async fn out_of_range_location_is_rejected_with_field_details() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .post(app.url("/api/v1/location"))
        .bearer_auth(app.token_for(Role::Graduate))
        .json(&json!({ "latitude": 95.0, "longitude": -75.5 }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["details"][0]["field"], "latitude");
}

#[actix_rt::test]
async fn malformed_json_uses_error_envelope() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .post(app.url("/api/v1/auth/login"))
        .header("Content-Type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().starts_with("JSON payload error"));
}

#[actix_rt::test]
async fn trailing_slash_is_normalized() {
    let app = TestApp::spawn().await;

    let response = app.get_as("/api/v1/session/", Role::Coordinator).await;
    assert_eq!(response.status(), StatusCode::OK);
}
