//! Transport-independent export request handling.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use blueprint_codegen::{archive_name, assemble};
use blueprint_core::{validate_unique_ids, AppConfig, ComponentNode};
use serde::Deserialize;
use serde_json::{json, Value};

/// Body of an export request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExportRequest {
    #[serde(default)]
    pub components: Option<Vec<ComponentNode>>,
    #[serde(default)]
    pub config: Option<AppConfig>,
    #[serde(default)]
    pub format: Option<ExportFormat>,
}

/// Requested shape of the export response.
///
/// Anything other than `"zip"` asks for the inline files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "Value")]
pub enum ExportFormat {
    Zip,
    #[default]
    Files,
}

impl From<Value> for ExportFormat {
    fn from(value: Value) -> Self {
        match value.as_str() {
            Some("zip") => ExportFormat::Zip,
            _ => ExportFormat::Files,
        }
    }
}

/// Status code and JSON body of a handled request.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl ApiResponse {
    fn ok(body: Value) -> Self {
        Self {
            status: StatusCode::OK,
            body,
        }
    }

    fn bad_request(body: Value) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body,
        }
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// Handle a raw export request body.
pub fn handle_export(body: &[u8]) -> ApiResponse {
    let request: ExportRequest = match serde_json::from_slice(body) {
        Ok(request) => request,
        Err(e) => {
            tracing::warn!(error = %e, "rejected unparseable export request");
            return ApiResponse::bad_request(json!({
                "error": "Invalid request body",
                "details": e.to_string(),
            }));
        }
    };

    let (components, config) = match (request.components, request.config) {
        (Some(components), Some(config)) => (components, config),
        _ => {
            tracing::warn!("rejected export request without components or config");
            return ApiResponse::bad_request(json!({ "error": "Missing components or config" }));
        }
    };

    if let Err(e) = validate_unique_ids(&components) {
        tracing::warn!(error = %e, "rejected export request with invalid tree");
        return ApiResponse::bad_request(json!({
            "error": "Invalid components",
            "details": e.to_string(),
        }));
    }

    let files = match assemble(&components, &config) {
        Ok(files) => files,
        Err(e) => {
            tracing::error!(error = %e, "export failed");
            return ApiResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                body: json!({ "error": "Export failed", "details": e.to_string() }),
            };
        }
    };

    tracing::info!(app = %config.name, files = files.len(), "export completed");

    match request.format.unwrap_or_default() {
        ExportFormat::Zip => ApiResponse::ok(json!({
            "success": true,
            "downloadUrl": format!("https://example.com/exports/{}", archive_name(&config)),
            "message": "Source code exported as ZIP (demo mode)",
        })),
        ExportFormat::Files => ApiResponse::ok(json!({
            "success": true,
            "files": files,
            "message": "Source code files generated successfully",
        })),
    }
}

/// Description of the export endpoint.
pub fn describe_export() -> Value {
    json!({
        "message": "Blueprint source export API",
        "endpoints": {
            "POST /api/export": "Generate project source from a component tree",
        },
        "formats": ["files", "zip"],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: &str = r##"{
        "name": "My App",
        "packageName": "com.x.y",
        "version": "1.0.0",
        "theme": {
            "primaryColor": "#007AFF",
            "secondaryColor": "#34C759",
            "backgroundColor": "#fff",
            "textColor": "#333"
        },
        "permissions": ["INTERNET"],
        "minSdkVersion": 21,
        "targetSdkVersion": 33
    }"##;

    fn request(format: &str) -> String {
        format!(
            r#"{{"components": [{{"id": "a", "type": "text", "props": {{"text": "Hello"}}}}], "config": {}, "format": "{}"}}"#,
            CONFIG, format
        )
    }

    #[test]
    fn test_files_format() {
        let response = handle_export(request("files").as_bytes());
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body["success"], true);
        assert_eq!(response.body["message"], "Source code files generated successfully");
        let entry = response.body["files"]["App.tsx"].as_str().unwrap();
        assert!(entry.contains("<Text>{\"Hello\"}</Text>"));
    }

    #[test]
    fn test_zip_format() {
        let response = handle_export(request("zip").as_bytes());
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(
            response.body["downloadUrl"],
            "https://example.com/exports/My_App_source.zip"
        );
        assert_eq!(response.body["message"], "Source code exported as ZIP (demo mode)");
        assert!(response.body.get("files").is_none());
    }

    #[test]
    fn test_unknown_format_returns_files() {
        for format in [r#""json""#, "42", "null"] {
            let body = format!(
                r#"{{"components": [], "config": {}, "format": {}}}"#,
                CONFIG, format
            );
            let response = handle_export(body.as_bytes());
            assert_eq!(response.status, StatusCode::OK, "format {}", format);
            assert!(response.body["files"]["App.tsx"].is_string());
        }
    }

    #[test]
    fn test_non_string_text_is_rendered() {
        let body = format!(
            r#"{{"components": [{{"id": "a", "type": "text", "props": {{"text": 42}}}}], "config": {}}}"#,
            CONFIG
        );
        let response = handle_export(body.as_bytes());
        assert_eq!(response.status, StatusCode::OK);
        let entry = response.body["files"]["App.tsx"].as_str().unwrap();
        assert!(entry.contains("<Text>{\"42\"}</Text>"));
    }

    #[test]
    fn test_missing_config() {
        let response = handle_export(br#"{"components": []}"#);
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.body["error"], "Missing components or config");
    }

    #[test]
    fn test_unparseable_body() {
        let response = handle_export(b"{not json");
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.body["error"], "Invalid request body");
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let body = format!(
            r#"{{"components": [{{"id": "a", "type": "text"}}, {{"id": "a", "type": "button"}}], "config": {}}}"#,
            CONFIG
        );
        let response = handle_export(body.as_bytes());
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.body["error"], "Invalid components");
    }
}
