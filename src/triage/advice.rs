//! Advice assembly.
//!
//! Advice is collected into an [`AdviceSet`]: insertion-ordered, with exact
//! string duplicates dropped so the first occurrence keeps its position.

use std::collections::HashSet;

use serde::{Serialize, Serializer};

use super::catalog::{self, GenericTip};
use super::classifier::TriageLevel;
use super::dictionary::SymptomId;
use super::language::Language;

/// Ordered set of advice lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdviceSet {
    items: Vec<String>,
    seen: HashSet<String>,
}

impl AdviceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `line` unless an identical line is already present.
    /// Returns whether the line was added.
    pub fn insert(&mut self, line: &str) -> bool {
        if self.seen.contains(line) {
            return false;
        }
        self.seen.insert(line.to_string());
        self.items.push(line.to_string());
        true
    }

    pub fn contains(&self, line: &str) -> bool {
        self.seen.contains(line)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<String> {
        self.items
    }
}

impl<'a> Extend<&'a str> for AdviceSet {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        for line in iter {
            self.insert(line);
        }
    }
}

impl Serialize for AdviceSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.items.serialize(serializer)
    }
}

/// Build the advice shown for a triage outcome.
///
/// Order: triage headline, symptom tips (dictionary order), hydrate and rest,
/// conditional generic tips, then the see-a-doctor reminder.
pub fn assemble(detected: &[SymptomId], level: TriageLevel, lang: Language) -> AdviceSet {
    let mut advice = AdviceSet::new();
    advice.insert(catalog::triage_message(level, lang));

    for &id in detected {
        advice.extend(catalog::symptom_tips(id, lang).iter().copied());
    }

    advice.insert(GenericTip::Hydrate.text(lang));
    advice.insert(GenericTip::Rest.text(lang));

    let has = |id: SymptomId| detected.contains(&id);
    if has(SymptomId::Fever) {
        advice.insert(GenericTip::Paracetamol.text(lang));
    }
    if has(SymptomId::Diarrhea) || has(SymptomId::Vomiting) {
        advice.insert(GenericTip::Ors.text(lang));
    }
    if has(SymptomId::Cough) || has(SymptomId::SoreThroat) || has(SymptomId::Cold) {
        advice.insert(GenericTip::HoneyTea.text(lang));
        advice.insert(GenericTip::Saline.text(lang));
    }

    advice.insert(GenericTip::SeeDoctor.text(lang));
    advice
}
