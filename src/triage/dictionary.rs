//! Symptom dictionary: severity weights, red flags and per-language keywords.
//!
//! Iteration order of [`SYMPTOMS`] is significant: analysis reports detected
//! symptoms in this order and advice is assembled in this order.

use serde::{Deserialize, Serialize};

use super::language::Localized;

/// Identifier of a symptom known to the dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymptomId {
    Fever,
    Cough,
    SoreThroat,
    Cold,
    Headache,
    Nausea,
    Vomiting,
    Diarrhea,
    Dizziness,
    ChestPain,
    ShortBreath,
    Seizure,
    Unconscious,
}

impl SymptomId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fever => "fever",
            Self::Cough => "cough",
            Self::SoreThroat => "sore_throat",
            Self::Cold => "cold",
            Self::Headache => "headache",
            Self::Nausea => "nausea",
            Self::Vomiting => "vomiting",
            Self::Diarrhea => "diarrhea",
            Self::Dizziness => "dizziness",
            Self::ChestPain => "chest_pain",
            Self::ShortBreath => "short_breath",
            Self::Seizure => "seizure",
            Self::Unconscious => "unconscious",
        }
    }
}

impl std::fmt::Display for SymptomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A dictionary entry. Keywords are matched as case-insensitive substrings.
#[derive(Debug)]
pub struct SymptomDefinition {
    pub id: SymptomId,
    pub weight: u32,
    pub red_flag: bool,
    pub keywords: Localized<&'static [&'static str]>,
}

pub static SYMPTOMS: &[SymptomDefinition] = &[
    SymptomDefinition {
        id: SymptomId::Fever,
        weight: 3,
        red_flag: false,
        keywords: Localized {
            en: &["fever", "temperature", "high temp"],
            hi: &["बुखार", "तेज़ बुखार", "तापमान"],
            bn: &["জ্বর", "উচ্চ জ্বর", "তাপমাত্রা"],
        },
    },
    SymptomDefinition {
        id: SymptomId::Cough,
        weight: 2,
        red_flag: false,
        keywords: Localized {
            en: &["cough", "coughing"],
            hi: &["खांसी", "खाँसी"],
            bn: &["কাশি"],
        },
    },
    SymptomDefinition {
        id: SymptomId::SoreThroat,
        weight: 2,
        red_flag: false,
        keywords: Localized {
            en: &["sore throat", "throat pain"],
            hi: &["गले में दर्द", "खराश"],
            bn: &["গলা ব্যথা", "গলা খুশখুশে"],
        },
    },
    SymptomDefinition {
        id: SymptomId::Cold,
        weight: 1,
        red_flag: false,
        keywords: Localized {
            en: &["cold", "runny nose", "sneeze", "sneezing", "blocked nose"],
            hi: &["जुकाम", "नाक बहना", "छींक", "भरी नाक"],
            bn: &["সর্দি", "নাক দিয়ে পানি পড়া", "হাঁচি", "বন্ধ নাক"],
        },
    },
    SymptomDefinition {
        id: SymptomId::Headache,
        weight: 2,
        red_flag: false,
        keywords: Localized {
            en: &["headache", "migraine"],
            hi: &["सरदर्द", "माइग्रेन", "सिर दर्द"],
            bn: &["মাথাব্যথা", "মাইগ্রেন"],
        },
    },
    SymptomDefinition {
        id: SymptomId::Nausea,
        weight: 3,
        red_flag: false,
        keywords: Localized {
            en: &["nausea", "nauseous"],
            hi: &["मिचली", "उल्टी जैसा"],
            bn: &["বমি বমি ভাব"],
        },
    },
    SymptomDefinition {
        id: SymptomId::Vomiting,
        weight: 3,
        red_flag: false,
        keywords: Localized {
            en: &["vomit", "vomiting"],
            hi: &["उल्टी"],
            bn: &["বমি"],
        },
    },
    SymptomDefinition {
        id: SymptomId::Diarrhea,
        weight: 3,
        red_flag: false,
        keywords: Localized {
            en: &["diarrhea", "loose motion"],
            hi: &["दस्त", "पतला"],
            bn: &["ডায়রিয়া", "পাতলা পায়খানা"],
        },
    },
    SymptomDefinition {
        id: SymptomId::Dizziness,
        weight: 3,
        red_flag: false,
        keywords: Localized {
            en: &["dizzy", "dizziness", "lightheaded"],
            hi: &["चक्कर"],
            bn: &["মাথা ঘোরা"],
        },
    },
    SymptomDefinition {
        id: SymptomId::ChestPain,
        weight: 8,
        red_flag: true,
        keywords: Localized {
            en: &["chest pain", "pressure in chest"],
            hi: &["सीने में दर्द", "छाती में दबाव"],
            bn: &["বুকে ব্যথা", "বুকে চাপ"],
        },
    },
    SymptomDefinition {
        id: SymptomId::ShortBreath,
        weight: 8,
        red_flag: true,
        keywords: Localized {
            en: &["shortness of breath", "hard to breathe", "breathless"],
            hi: &["सांस फूलना", "सांस लेने में तकलीफ"],
            bn: &["শ্বাসকষ্ট", "শ্বাস নিতে কষ্ট"],
        },
    },
    SymptomDefinition {
        id: SymptomId::Seizure,
        weight: 10,
        red_flag: true,
        keywords: Localized {
            en: &["seizure", "fits", "convulsion"],
            hi: &["दौरा", "मिर्गी"],
            bn: &["খিঁচুনি"],
        },
    },
    SymptomDefinition {
        id: SymptomId::Unconscious,
        weight: 10,
        red_flag: true,
        keywords: Localized {
            en: &["faint", "unconscious", "passed out"],
            hi: &["बेहोश"],
            bn: &["অচেতন"],
        },
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::triage::language::Language;

    #[test]
    fn identifiers_are_unique() {
        let ids: HashSet<_> = SYMPTOMS.iter().map(|d| d.id).collect();
        assert_eq!(ids.len(), SYMPTOMS.len());
        assert_eq!(SYMPTOMS.len(), 13);
    }

    #[test]
    fn every_entry_has_english_keywords() {
        for def in SYMPTOMS {
            assert!(!def.keywords.en.is_empty(), "{} has no en keywords", def.id);
        }
    }

    #[test]
    fn every_language_has_keywords() {
        for def in SYMPTOMS {
            for lang in Language::SUPPORTED {
                assert!(
                    !def.keywords.get(lang).is_empty(),
                    "{} has no {lang} keywords",
                    def.id
                );
            }
        }
    }

    #[test]
    fn weights_are_positive() {
        assert!(SYMPTOMS.iter().all(|d| d.weight > 0));
    }

    #[test]
    fn red_flags_are_the_emergency_symptoms() {
        let red: Vec<_> = SYMPTOMS.iter().filter(|d| d.red_flag).map(|d| d.id).collect();
        assert_eq!(
            red,
            vec![
                SymptomId::ChestPain,
                SymptomId::ShortBreath,
                SymptomId::Seizure,
                SymptomId::Unconscious,
            ]
        );
    }

    #[test]
    fn ids_serialize_in_snake_case() {
        let json = serde_json::to_string(&SymptomId::SoreThroat).unwrap();
        assert_eq!(json, "\"sore_throat\"");
        assert_eq!(SymptomId::ShortBreath.as_str(), "short_breath");
    }
}
