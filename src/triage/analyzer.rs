use serde::Serialize;

use super::dictionary::{SymptomDefinition, SymptomId, SYMPTOMS};
use super::language::Language;

/// Symptoms found in one description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    /// Matched symptoms in dictionary order.
    pub detected: Vec<SymptomId>,
    pub score: u32,
    pub has_red_flag: bool,
}

impl AnalysisResult {
    pub fn contains(&self, id: SymptomId) -> bool {
        self.detected.contains(&id)
    }
}

/// Scan `text` against the whole dictionary using the keywords for `lang`.
pub fn analyze(text: &str, lang: Language) -> AnalysisResult {
    analyze_with(SYMPTOMS, text, lang)
}

pub(crate) fn analyze_with(
    dictionary: &[SymptomDefinition],
    text: &str,
    lang: Language,
) -> AnalysisResult {
    let lower = text.to_lowercase();
    let mut result = AnalysisResult::default();

    for def in dictionary {
        if contains_any(&lower, def.keywords.get(lang)) {
            result.detected.push(def.id);
            result.score += def.weight;
            result.has_red_flag |= def.red_flag;
        }
    }

    result
}

fn contains_any(lower_text: &str, keywords: &[&str]) -> bool {
    keywords
        .iter()
        .any(|kw| lower_text.contains(kw.to_lowercase().as_str()))
}
