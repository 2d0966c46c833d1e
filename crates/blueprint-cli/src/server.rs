//! HTTP routes around the export handler.

use crate::api::{describe_export, handle_export, ApiResponse};
use axum::body::Bytes;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::net::SocketAddr;

/// All routes served by `blueprint serve`.
pub fn router() -> Router {
    Router::new()
        .route("/api/export", get(export_info).post(export))
        .route("/health", get(health_check))
}

/// Bind and serve until the process is stopped.
pub async fn serve(host: &str, port: u16) -> anyhow::Result<()> {
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    tracing::info!("Starting export server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router()).await?;
    Ok(())
}

async fn export(body: Bytes) -> ApiResponse {
    handle_export(&body)
}

async fn export_info() -> Json<Value> {
    Json(describe_export())
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "blueprint",
    }))
}
