//! Awareness alert endpoints.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::Json;
use serde_json::Value;

use crate::api::error::ApiError;
use crate::api::types::{AppContext, ListParams};
use crate::awareness::{awareness_messages, generate_alert, GeneratedAlert};
use crate::db::DatabaseError;
use crate::models::{AwarenessAlert, NewAwarenessAlert};

/// `POST /api/awareness-alert`
pub async fn create(
    State(ctx): State<AppContext>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<GeneratedAlert>, ApiError> {
    let Json(body) = body?;
    let alert = generate_alert(
        body.get("topic").and_then(Value::as_str),
        body.get("language").and_then(Value::as_str),
    )?;

    let event = alert.topic.clone();
    tokio::task::spawn_blocking(move || record_alert(&ctx, event));

    Ok(Json(alert))
}

/// Store the three-language message set for `event`. AI-written when an
/// assistant is configured, template text otherwise. Runs detached from the
/// request.
fn record_alert(ctx: &AppContext, event: String) {
    let messages = match &ctx.assistant {
        Some(assistant) => assistant.awareness_messages(&event),
        None => awareness_messages(&event),
    };
    let record = NewAwarenessAlert { event, messages };
    match ctx.audit.save_alert(&record) {
        Ok(id) => tracing::debug!(id, "Awareness alert recorded"),
        Err(e) => tracing::warn!(error = %e, "Awareness alert audit write failed (non-fatal)"),
    }
}

/// `GET /api/awareness-alert?limit=N`
pub async fn list(
    State(ctx): State<AppContext>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<Vec<AwarenessAlert>>, ApiError> {
    let Query(params) = params?;
    let limit = params.limit();
    let alerts = tokio::task::spawn_blocking(move || ctx.audit.list_alerts(limit)).await??;
    Ok(Json(alerts))
}

/// `GET /api/awareness-alert/:id`
pub async fn detail(
    State(ctx): State<AppContext>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<AwarenessAlert>, ApiError> {
    let Path(id) = id?;
    let alert = tokio::task::spawn_blocking(move || ctx.audit.find_alert(id)).await??;
    alert.map(Json).ok_or_else(|| {
        DatabaseError::NotFound {
            entity_type: "Awareness alert".into(),
            id: id.to_string(),
        }
        .into()
    })
}
