//! Public-health awareness messages.
//!
//! A plain template lookup shared with the triage engine only through the
//! language enumeration.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::triage::language::{Language, Localized};

/// Message returned when the alert topic is missing.
pub const TOPIC_REQUIRED: &str = "Field 'topic' is required.";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AwarenessError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// One generated alert, as returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedAlert {
    pub message: String,
    pub language: Language,
    pub topic: String,
    /// RFC 3339 UTC timestamp with millisecond precision.
    pub time: String,
}

/// Awareness text for `topic` in `lang`. Languages without a template of
/// their own use the English one.
pub fn awareness_message(topic: &str, lang: Language) -> String {
    match lang {
        Language::Hi => format!("स्वास्थ्य जागरूकता: {topic}"),
        Language::Bn => format!("স্বাস্থ্য সচেতনতা: {topic}"),
        Language::En | Language::Ur => format!("Health awareness: {topic}"),
    }
}

/// Awareness text for `event` in all three content languages.
pub fn awareness_messages(event: &str) -> Localized<String> {
    Localized::from_fn(|lang| awareness_message(event, lang))
}

/// Generate an alert for `topic`. Unknown or absent languages resolve to
/// English; a missing or empty topic is rejected.
pub fn generate_alert(
    topic: Option<&str>,
    language: Option<&str>,
) -> Result<GeneratedAlert, AwarenessError> {
    generate_alert_at(topic, language, Utc::now())
}

pub fn generate_alert_at(
    topic: Option<&str>,
    language: Option<&str>,
    now: DateTime<Utc>,
) -> Result<GeneratedAlert, AwarenessError> {
    let topic = topic
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AwarenessError::InvalidInput(TOPIC_REQUIRED.into()))?;
    let language = language
        .and_then(Language::from_supported)
        .unwrap_or(Language::En);

    Ok(GeneratedAlert {
        message: awareness_message(topic, language),
        language,
        topic: topic.to_string(),
        time: now.to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap()
    }

    #[test]
    fn bengali_dengue_alert() {
        let alert = generate_alert_at(Some("Dengue outbreak"), Some("bn"), fixed_now()).unwrap();
        assert_eq!(alert.message, "স্বাস্থ্য সচেতনতা: Dengue outbreak");
        assert_eq!(alert.language, Language::Bn);
        assert_eq!(alert.topic, "Dengue outbreak");
        assert_eq!(alert.time, "2026-03-01T09:30:00.000Z");
    }

    #[test]
    fn hindi_template() {
        let alert = generate_alert_at(Some("Heatwave"), Some("hi"), fixed_now()).unwrap();
        assert_eq!(alert.message, "स्वास्थ्य जागरूकता: Heatwave");
    }

    #[test]
    fn absent_language_defaults_to_english() {
        let alert = generate_alert(Some("Flu season"), None).unwrap();
        assert_eq!(alert.language, Language::En);
        assert_eq!(alert.message, "Health awareness: Flu season");
    }

    #[test]
    fn unsupported_language_defaults_to_english() {
        for code in ["ur", "fr", "", "BN"] {
            let alert = generate_alert(Some("Flu season"), Some(code)).unwrap();
            assert_eq!(alert.language, Language::En, "code {code:?}");
        }
    }

    #[test]
    fn missing_or_empty_topic_rejected() {
        assert_eq!(
            generate_alert(None, Some("en")),
            Err(AwarenessError::InvalidInput(TOPIC_REQUIRED.into()))
        );
        assert!(generate_alert(Some(""), None).is_err());
    }

    #[test]
    fn message_set_has_all_three_languages() {
        let messages = awareness_messages("Cholera");
        let json = serde_json::to_value(&messages).unwrap();
        assert_eq!(json["en"], "Health awareness: Cholera");
        assert_eq!(json["hi"], "स्वास्थ्य जागरूकता: Cholera");
        assert_eq!(json["bn"], "স্বাস্থ্য সচেতনতা: Cholera");
    }
}
