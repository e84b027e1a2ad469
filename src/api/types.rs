//! Shared state and request/response types of the HTTP layer.

use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::db::{AuditLog, DEFAULT_LIST_LIMIT};
use crate::enrich::{
    AiClassification, BhashiniTranslator, HealthAssistant, OpenAiAssistant, PhrasebookTranslator,
    Translator,
};
use crate::triage::TriageOutcome;

/// Shared context for all routes and middleware.
#[derive(Clone)]
pub struct AppContext {
    pub audit: Arc<dyn AuditLog>,
    pub translator: Arc<dyn Translator>,
    /// Present only when an AI backend is configured.
    pub assistant: Option<Arc<dyn HealthAssistant>>,
}

impl AppContext {
    /// Context with the offline phrasebook translator and no AI assistant.
    pub fn new(audit: Arc<dyn AuditLog>) -> Self {
        Self {
            audit,
            translator: Arc::new(PhrasebookTranslator),
            assistant: None,
        }
    }

    /// Wire optional enrichers from configuration. A backend that cannot be
    /// constructed is logged and left out.
    pub fn from_config(config: &Config, audit: Arc<dyn AuditLog>) -> Self {
        let mut ctx = Self::new(audit);

        if let Some(key) = &config.bhashini_key {
            match BhashiniTranslator::new(key) {
                Ok(translator) => {
                    tracing::info!("Bhashini translation enabled");
                    ctx = ctx.with_translator(Arc::new(translator));
                }
                Err(e) => tracing::warn!(error = %e, "Bhashini translator unavailable"),
            }
        }

        if let Some(key) = &config.openai_api_key {
            match OpenAiAssistant::from_api_key(key, &config.openai_model) {
                Ok(assistant) => {
                    tracing::info!(model = %config.openai_model, "AI assistant enabled");
                    ctx = ctx.with_assistant(Arc::new(assistant));
                }
                Err(e) => tracing::warn!(error = %e, "AI assistant unavailable"),
            }
        }

        ctx
    }

    pub fn with_translator(mut self, translator: Arc<dyn Translator>) -> Self {
        self.translator = translator;
        self
    }

    pub fn with_assistant(mut self, assistant: Arc<dyn HealthAssistant>) -> Self {
        self.assistant = Some(assistant);
        self
    }
}

/// RFC 3339 UTC timestamp with millisecond precision.
pub fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// `?limit=N` on list endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub limit: Option<u32>,
}

impl ListParams {
    pub fn limit(&self) -> u32 {
        self.limit.unwrap_or(DEFAULT_LIST_LIMIT)
    }
}

/// Body of a successful `POST /api/symptom-check`.
#[derive(Debug, Serialize)]
pub struct SymptomCheckResponse {
    #[serde(flatten)]
    pub outcome: TriageOutcome,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai: Option<AiClassification>,
}
