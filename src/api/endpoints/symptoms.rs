//! Symptom check endpoints.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::Json;
use serde_json::Value;

use crate::api::error::ApiError;
use crate::api::types::{now_rfc3339, AppContext, ListParams, SymptomCheckResponse};
use crate::db::DatabaseError;
use crate::enrich::translation::translate_or_original;
use crate::models::{NewSymptomQuery, SymptomQuery};
use crate::triage::{check_symptoms, Language, SymptomCheckRequest, TriageOutcome, UserRiskProfile};

/// Build a triage request from a loosely typed JSON body. Wrong-typed
/// optional fields are dropped rather than rejected.
pub fn parse_request(body: &Value) -> SymptomCheckRequest {
    SymptomCheckRequest {
        symptoms: body.get("symptoms").and_then(Value::as_str).map(str::to_string),
        language: body.get("language").and_then(Value::as_str).map(str::to_string),
        user: body.get("user").map(parse_profile),
    }
}

fn parse_profile(user: &Value) -> UserRiskProfile {
    UserRiskProfile {
        age: user
            .get("age")
            .and_then(Value::as_f64)
            .filter(|age| age.is_finite() && *age >= 0.0),
        pregnant: user.get("pregnant").and_then(Value::as_bool),
        conditions: user
            .get("conditions")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default(),
    }
}

/// `POST /api/symptom-check`
pub async fn check(
    State(ctx): State<AppContext>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<SymptomCheckResponse>, ApiError> {
    let Json(body) = body?;
    let request = parse_request(&body);
    let outcome = check_symptoms(&request)?;
    let text = request.symptoms.unwrap_or_default();

    let audit_ctx = ctx.clone();
    let audit_text = text.clone();
    let recorded = outcome.clone();
    tokio::task::spawn_blocking(move || record_query(&audit_ctx, &audit_text, &recorded));

    let ai = match ctx.assistant.clone() {
        Some(assistant) => tokio::task::spawn_blocking(move || assistant.classify_symptoms(&text))
            .await
            .map_err(|e| tracing::warn!(error = %e, "AI classification task failed"))
            .ok(),
        None => None,
    };

    Ok(Json(SymptomCheckResponse {
        outcome,
        timestamp: now_rfc3339(),
        ai,
    }))
}

/// Best-effort audit write, run detached from the request. Failures are
/// logged and never reach the caller.
fn record_query(ctx: &AppContext, text: &str, outcome: &TriageOutcome) {
    let english = translate_or_original(ctx.translator.as_ref(), text, outcome.language, Language::En);
    let record = NewSymptomQuery::from_outcome(text, english, outcome);
    match ctx.audit.save_query(&record) {
        Ok(id) => tracing::debug!(id, "Symptom query recorded"),
        Err(e) => tracing::warn!(error = %e, "Symptom query audit write failed (non-fatal)"),
    }
}

/// `GET /api/symptom-check?limit=N`
pub async fn list(
    State(ctx): State<AppContext>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<Vec<SymptomQuery>>, ApiError> {
    let Query(params) = params?;
    let limit = params.limit();
    let queries = tokio::task::spawn_blocking(move || ctx.audit.list_queries(limit)).await??;
    Ok(Json(queries))
}

/// `GET /api/symptom-check/:id`
pub async fn detail(
    State(ctx): State<AppContext>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<SymptomQuery>, ApiError> {
    let Path(id) = id?;
    let query = tokio::task::spawn_blocking(move || ctx.audit.find_query(id)).await??;
    query.map(Json).ok_or_else(|| {
        DatabaseError::NotFound {
            entity_type: "Symptom query".into(),
            id: id.to_string(),
        }
        .into()
    })
}
