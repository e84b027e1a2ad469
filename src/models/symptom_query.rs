use serde::{Deserialize, Serialize};

use crate::triage::{SymptomId, TriageLevel, TriageOutcome};

/// Classification summary stored with each symptom query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryClassification {
    pub detected: Vec<SymptomId>,
    pub score: u32,
    pub level: TriageLevel,
}

/// A symptom query about to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSymptomQuery {
    pub user_lang: String,
    pub original_text: String,
    pub english_text: String,
    pub classification: QueryClassification,
    pub advice: Vec<String>,
    pub confidence: f64,
}

impl NewSymptomQuery {
    /// Audit record for one triage run. `english_text` is the caller's
    /// translation of `original_text` (the text itself when no translation
    /// is available).
    pub fn from_outcome(
        original_text: &str,
        english_text: impl Into<String>,
        outcome: &TriageOutcome,
    ) -> Self {
        Self {
            user_lang: outcome.language.as_str().to_string(),
            original_text: original_text.to_string(),
            english_text: english_text.into(),
            classification: QueryClassification {
                detected: outcome.detected.clone(),
                score: outcome.score,
                level: outcome.level,
            },
            advice: outcome.advice.as_slice().to_vec(),
            confidence: outcome.confidence(),
        }
    }
}

/// A stored symptom query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SymptomQuery {
    pub id: i64,
    pub user_lang: String,
    pub original_text: String,
    pub english_text: Option<String>,
    pub classification: Option<QueryClassification>,
    pub advice: Vec<String>,
    pub confidence: Option<f64>,
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triage::{check_symptoms, SymptomCheckRequest};

    #[test]
    fn record_built_from_outcome() {
        let outcome = check_symptoms(&SymptomCheckRequest::new("fever and cough")).unwrap();
        let record = NewSymptomQuery::from_outcome("fever and cough", "fever and cough", &outcome);
        assert_eq!(record.user_lang, "en");
        assert_eq!(record.classification.score, 5);
        assert_eq!(record.classification.level, TriageLevel::Home);
        assert_eq!(record.confidence, 0.5);
        assert_eq!(record.advice, outcome.advice.as_slice());
    }

    #[test]
    fn classification_json_shape() {
        let classification = QueryClassification {
            detected: vec![SymptomId::ChestPain],
            score: 8,
            level: TriageLevel::Emergency,
        };
        let json = serde_json::to_value(&classification).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"detected": ["chest_pain"], "score": 8, "level": "EMERGENCY"})
        );
    }
}
