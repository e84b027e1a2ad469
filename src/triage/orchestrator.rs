//! Public entry point of the triage engine.

use serde::Serialize;

use super::advice::{assemble, AdviceSet};
use super::analyzer::analyze;
use super::classifier::{classify, TriageLevel};
use super::dictionary::SymptomId;
use super::language::{detect_language, Language};
use super::risk::{adjust, UserRiskProfile};
use super::TriageError;

/// Message returned when the symptom text is missing.
pub const SYMPTOMS_REQUIRED: &str = "Field 'symptoms' (string) is required.";

/// Input of one triage run.
#[derive(Debug, Clone, Default)]
pub struct SymptomCheckRequest {
    pub symptoms: Option<String>,
    /// Requested language; ignored unless one of `en`, `hi`, `bn`.
    pub language: Option<String>,
    pub user: Option<UserRiskProfile>,
}

impl SymptomCheckRequest {
    pub fn new(symptoms: impl Into<String>) -> Self {
        Self {
            symptoms: Some(symptoms.into()),
            ..Default::default()
        }
    }

    pub fn language(mut self, code: impl Into<String>) -> Self {
        self.language = Some(code.into());
        self
    }

    pub fn user(mut self, profile: UserRiskProfile) -> Self {
        self.user = Some(profile);
        self
    }
}

/// Result of one triage run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TriageOutcome {
    pub language: Language,
    pub level: TriageLevel,
    pub detected: Vec<SymptomId>,
    pub score: u32,
    pub advice: AdviceSet,
}

impl TriageOutcome {
    /// Score normalised to `[0, 1]` with two decimals. A crude scale for the
    /// audit log, not a statistical confidence.
    pub fn confidence(&self) -> f64 {
        score_confidence(self.score)
    }
}

pub fn score_confidence(score: u32) -> f64 {
    let scaled = (f64::from(score) / 10.0 * 100.0).round() / 100.0;
    scaled.min(1.0)
}

/// Requested language when supported, otherwise the language detected from
/// the text.
pub fn resolve_language(explicit: Option<&str>, text: &str) -> Language {
    explicit
        .and_then(Language::from_supported)
        .unwrap_or_else(|| detect_language(text))
}

/// Run detection, analysis, classification, risk adjustment and advice
/// assembly for one request.
pub fn check_symptoms(request: &SymptomCheckRequest) -> Result<TriageOutcome, TriageError> {
    let text = request
        .symptoms
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| TriageError::InvalidInput(SYMPTOMS_REQUIRED.into()))?;

    let language = resolve_language(request.language.as_deref(), text);
    let analysis = analyze(text, language);
    let base_level = classify(analysis.score, analysis.has_red_flag);
    let level = adjust(base_level, request.user.as_ref());
    let advice = assemble(&analysis.detected, level, language);

    tracing::debug!(
        %language,
        score = analysis.score,
        red_flag = analysis.has_red_flag,
        %base_level,
        %level,
        "Symptom triage complete"
    );

    Ok(TriageOutcome {
        language,
        level,
        detected: analysis.detected,
        score: analysis.score,
        advice,
    })
}
