//! Health check handler

use crate::response::IndentedJson;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: &'static str,
}

pub async fn health() -> IndentedJson<HealthResponse> {
    IndentedJson(HealthResponse { status: "ok" })
}
