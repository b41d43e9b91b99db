
use reqwest::StatusCode;
use resume_api::handlers::system::HealthCheckResponse;
use serde_json::Value;
use test_utils::*;

#[actix_rt::test]
async fn home_lists_service_metadata() {
    let (app, _store) = TestApp::spawn().await;

    let body = app.get_json("/").await;

    assert_eq!(body["status"], "Ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[actix_rt::test]
async fn health_reports_database_ok() {
    let (app, _store) = TestApp::spawn().await;

    let health: HealthCheckResponse = serde_json::from_value(app.get_json("/health").await).unwrap();

    assert_eq!(health.status, "healthy");
    assert_eq!(health.database, "OK");
}

#[actix_rt::test]
async fn health_reports_unreachable_database() {
    let app = TestApp::spawn_unavailable().await;

    let health: HealthCheckResponse = serde_json::from_value(app.get_json("/health").await).unwrap();

    assert_eq!(health.database, "Unavailable");
}

#[actix_rt::test]
async fn storage_outage_surfaces_as_server_error() {
    let app = TestApp::spawn_unavailable().await;

    let list = app.get("/experience-get/").await;
    assert_eq!(list.status(), StatusCode::SERVICE_UNAVAILABLE);

    let create = app.post_json("/education/", &education_body("BSc")).await;
    assert!(create.status().is_server_error());

    let body: Value = create.json().await.unwrap();
    assert_eq!(body["error"], "Database unavailable");
}

#[actix_rt::test]
async fn trailing_slash_is_optional() {
    let (app, _store) = TestApp::spawn().await;

    assert_eq!(app.get("/experience-get").await.status(), StatusCode::OK);
    assert_eq!(app.get("/experience-get/").await.status(), StatusCode::OK);
}

#[actix_rt::test]
async fn non_json_body_is_rejected() {
    let (app, store) = TestApp::spawn().await;

    let response = app.client
        .post(format!("{}/experience/", app.address))
        .header("content-type", "text/plain")
        .body("title=x")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert_eq!(store.experience_count(), 0);
}

#[actix_rt::test]
async fn malformed_json_is_a_client_error() {
    let (app, store) = TestApp::spawn().await;

    let response = app.client
        .post(format!("{}/education/", app.address))
        .header("content-type", "application/json")
        .body("{\"title\": ")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(store.education_count(), 0);
}

#[actix_rt::test]
async fn list_endpoints_do_not_accept_post() {
    let (app, _store) = TestApp::spawn().await;

    let response = app.post_json("/about-get/", &serde_json::json!({})).await;

    assert!(response.status().is_client_error());
}

#[actix_rt::test]
async fn cors_preflight_allows_configured_origin() {
    let (app, _store) = TestApp::spawn().await;

    let response = app.client
        .request(reqwest::Method::OPTIONS, format!("{}/experience/", app.address))
        .header("origin", ALLOWED_ORIGIN)
        .header("access-control-request-method", "POST")
        .send()
        .await
        .unwrap();

    assert!(response.status().is_success());
    let headers = response.headers();
    assert_eq!(headers["access-control-allow-origin"], ALLOWED_ORIGIN);
    assert!(headers["access-control-allow-methods"].to_str().unwrap().contains("POST"));
}

#[actix_rt::test]
async fn cors_preflight_rejects_unknown_origin() {
    let (app, _store) = TestApp::spawn().await;

    let response = app.client
        .request(reqwest::Method::OPTIONS, format!("{}/experience/", app.address))
        .header("origin", "https://elsewhere.example.com")
        .header("access-control-request-method", "POST")
        .send()
        .await
        .unwrap();

    assert!(response.headers().get("access-control-allow-origin").is_none());
}
