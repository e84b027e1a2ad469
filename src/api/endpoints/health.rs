//! Service info and health check.

use std::collections::BTreeMap;

use axum::Json;
use serde::Serialize;

use crate::api::types::now_rfc3339;
use crate::config::{APP_VERSION, SERVICE_NAME};

#[derive(Serialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub service: &'static str,
    pub version: &'static str,
    pub time: String,
}

/// `GET /health`
pub async fn check() -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        service: SERVICE_NAME,
        version: APP_VERSION,
        time: now_rfc3339(),
    })
}

#[derive(Serialize)]
pub struct InfoResponse {
    pub message: &'static str,
    pub version: &'static str,
    pub endpoints: BTreeMap<&'static str, &'static str>,
}

/// `GET /`
pub async fn info() -> Json<InfoResponse> {
    let endpoints = BTreeMap::from([
        ("GET /health", "Health check endpoint"),
        ("POST /api/symptom-check", "Analyze symptoms and provide advice"),
        ("GET /api/symptom-check", "Recent symptom checks (?limit=N)"),
        ("GET /api/symptom-check/:id", "One recorded symptom check"),
        ("POST /api/awareness-alert", "Generate multilingual awareness alerts"),
        ("GET /api/awareness-alert", "Recent awareness alerts (?limit=N)"),
        ("GET /api/awareness-alert/:id", "One recorded awareness alert"),
    ]);

    Json(InfoResponse {
        message: SERVICE_NAME,
        version: APP_VERSION,
        endpoints,
    })
}
