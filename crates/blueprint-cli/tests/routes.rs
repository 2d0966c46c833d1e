use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use blueprint_cli::router;
use serde_json::Value;
use tower::ServiceExt;

async fn call(request: Request<Body>) -> (StatusCode, Value) {
    let response = router().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn post(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/export")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_export_files_over_http() {
    let body = r##"{
        "components": [{"id": "b", "type": "button", "props": {"text": "Go", "backgroundColor": "#34C759"}}],
        "config": {
            "name": "Demo App",
            "packageName": "com.demo.app",
            "version": "1.0.0",
            "minSdkVersion": 21,
            "targetSdkVersion": 33
        }
    }"##;

    let (status, json) = call(post(body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    let entry = json["files"]["App.tsx"].as_str().unwrap();
    assert!(entry.contains("import { Button } from './components/primitives';"));
    assert!(json["files"]["package.json"].as_str().unwrap().contains("\"Demo_App\""));
}

#[tokio::test]
async fn test_missing_fields_is_bad_request() {
    let (status, json) = call(post(r#"{"format": "zip"}"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Missing components or config");
}

#[tokio::test]
async fn test_service_description_and_health() {
    let request = Request::builder().uri("/api/export").body(Body::empty()).unwrap();
    let (status, json) = call(request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["formats"], serde_json::json!(["files", "zip"]));

    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let (status, json) = call(request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
}
