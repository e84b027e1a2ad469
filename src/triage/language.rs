//! Script-based language detection and per-language content lookup.
//!
//! Detection looks only at Unicode blocks, never at vocabulary: symptom
//! descriptions are short, so one Devanagari or Bengali character is a
//! stronger signal than any word-frequency heuristic.

use serde::{Deserialize, Serialize};

/// Language codes understood by the triage engine.
///
/// `Ur` is produced by detection for Arabic-script input but has no content
/// tables of its own; every lookup for it resolves to English content while
/// the reported language stays `ur`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Hi,
    Bn,
    Ur,
}

impl Language {
    /// Languages a caller may request explicitly.
    pub const SUPPORTED: [Language; 3] = [Language::En, Language::Hi, Language::Bn];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Hi => "hi",
            Self::Bn => "bn",
            Self::Ur => "ur",
        }
    }

    /// Parse an explicitly requested language. Only `en`, `hi` and `bn` are
    /// accepted; anything else (including `ur`) yields `None`.
    pub fn from_supported(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Self::En),
            "hi" => Some(Self::Hi),
            "bn" => Some(Self::Bn),
            _ => None,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

const DEVANAGARI: std::ops::RangeInclusive<char> = '\u{0900}'..='\u{097F}';
const BENGALI: std::ops::RangeInclusive<char> = '\u{0980}'..='\u{09FF}';
const ARABIC: std::ops::RangeInclusive<char> = '\u{0600}'..='\u{06FF}';

/// Guess the language of `text` from the scripts it contains.
///
/// Devanagari wins over Bengali, which wins over Arabic; text without any of
/// them (including empty text) is English.
pub fn detect_language(text: &str) -> Language {
    if contains_script(text, &DEVANAGARI) {
        Language::Hi
    } else if contains_script(text, &BENGALI) {
        Language::Bn
    } else if contains_script(text, &ARABIC) {
        Language::Ur
    } else {
        Language::En
    }
}

fn contains_script(text: &str, block: &std::ops::RangeInclusive<char>) -> bool {
    text.chars().any(|c| block.contains(&c))
}

/// One value per content language. English is mandatory and is what
/// languages without their own content (`ur`) read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Localized<T> {
    pub en: T,
    pub hi: T,
    pub bn: T,
}

impl<T> Localized<T> {
    pub fn get(&self, lang: Language) -> &T {
        match lang {
            Language::Hi => &self.hi,
            Language::Bn => &self.bn,
            Language::En | Language::Ur => &self.en,
        }
    }

    /// Build a value for every content language from one function.
    pub fn from_fn(mut f: impl FnMut(Language) -> T) -> Self {
        Self {
            en: f(Language::En),
            hi: f(Language::Hi),
            bn: f(Language::Bn),
        }
    }
}
