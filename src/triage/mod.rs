//! Symptom triage engine.
//!
//! Deterministic and stateless: language detection, keyword-based symptom
//! extraction, scoring, red-flag and risk-based escalation, and localized
//! advice. All tables are immutable statics shared by every caller.
//!
//! Nothing in here performs I/O. Persistence, AI enrichment and transport
//! live in the outer layers and consume [`TriageOutcome`].

pub mod advice;
pub mod analyzer;
pub mod catalog;
pub mod classifier;
pub mod dictionary;
pub mod language;
pub mod orchestrator;
pub mod risk;

pub use advice::AdviceSet;
pub use analyzer::{analyze, AnalysisResult};
pub use classifier::{classify, TriageLevel};
pub use dictionary::{SymptomDefinition, SymptomId, SYMPTOMS};
pub use language::{detect_language, Language};
pub use orchestrator::{check_symptoms, SymptomCheckRequest, TriageOutcome};
pub use risk::{adjust, UserRiskProfile};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TriageError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
