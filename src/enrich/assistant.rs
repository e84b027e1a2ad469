//! AI second opinion on symptoms and AI-written awareness messages, backed
//! by an OpenAI-compatible chat-completions endpoint.
//!
//! The rule-based triage result stays authoritative; this output is shown
//! next to it. Every failure path resolves to a conservative fixed answer
//! ("Doctor Visit"), so callers never see an error.

use serde::{Deserialize, Serialize};

use super::{extract_json_block, map_reqwest_error, EnrichError, REQUEST_TIMEOUT_SECS};
use crate::triage::language::Localized;

pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

const CLASSIFY_SYSTEM: &str = "You are a careful medical triage assistant. \
    Patient safety comes first; when unsure, recommend seeing a doctor.";

const AWARENESS_SYSTEM: &str = "You write public health announcements that are \
    accurate, clear and culturally appropriate.";

const CLASSIFY_TEMPERATURE: f32 = 0.3;
const CLASSIFY_MAX_TOKENS: u32 = 300;
const AWARENESS_TEMPERATURE: f32 = 0.4;
const AWARENESS_MAX_TOKENS: u32 = 500;

/// Coarse urgency label of the AI classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AiLabel {
    Emergency,
    #[serde(rename = "Doctor Visit")]
    DoctorVisit,
    #[serde(rename = "Self-care")]
    SelfCare,
}

impl AiLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Emergency => "Emergency",
            Self::DoctorVisit => "Doctor Visit",
            Self::SelfCare => "Self-care",
        }
    }

    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "Emergency" => Some(Self::Emergency),
            "Doctor Visit" => Some(Self::DoctorVisit),
            "Self-care" => Some(Self::SelfCare),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AiClassification {
    pub classification: AiLabel,
    pub advice: String,
    /// Always within `[0, 1]`.
    pub confidence: f64,
}

impl AiClassification {
    /// Answer used when the model replied with something unusable.
    pub fn unparseable() -> Self {
        Self {
            classification: AiLabel::DoctorVisit,
            advice: "Please consult with a healthcare professional for proper evaluation of your symptoms."
                .into(),
            confidence: 0.5,
        }
    }

    /// Answer used when the model could not be reached.
    pub fn unavailable() -> Self {
        Self {
            classification: AiLabel::DoctorVisit,
            advice: "Unable to analyze symptoms at this time. Please consult with a healthcare professional."
                .into(),
            confidence: 0.3,
        }
    }
}

/// Fallback awareness messages when the model reply is unusable.
pub fn awareness_guidelines_fallback(event: &str) -> Localized<String> {
    Localized {
        en: format!("Health Alert: {event}. Please follow local health guidelines and consult healthcare authorities for more information."),
        hi: format!("स्वास्थ्य चेतावनी: {event}। कृपया स्थानीय स्वास्थ्य दिशानिर्देशों का पालन करें और अधिक जानकारी के लिए स्वास्थ्य अधिकारियों से संपर्क करें।"),
        bn: format!("স্বাস্থ্য সতর্কতা: {event}। অনুগ্রহ করে স্থানীয় স্বাস্থ্য নির্দেশিকা অনুসরণ করুন এবং আরও তথ্যের জন্য স্বাস্থ্য কর্তৃপক্ষের সাথে যোগাযোগ করুন।"),
    }
}

/// Fallback awareness messages when the model cannot be reached.
pub fn awareness_offline_fallback(event: &str) -> Localized<String> {
    Localized {
        en: format!("Health Alert: {event}. Please stay informed through official health channels."),
        hi: format!("स्वास्थ्य चेतावनी: {event}। कृपया आधिकारिक स्वास्थ्य चैनलों के माध्यम से जानकारी रखें।"),
        bn: format!("স্বাস্থ্য সতর্কতা: {event}। অনুগ্রহ করে সরকারী স্বাস্থ্য চ্যানেলের মাধ্যমে অবগত থাকুন।"),
    }
}

/// AI enrichment as seen by the HTTP layer. Implementations never fail.
pub trait HealthAssistant: Send + Sync {
    fn classify_symptoms(&self, symptoms: &str) -> AiClassification;

    /// Messages in all three content languages.
    fn awareness_messages(&self, event: &str) -> Localized<String>;
}

/// One chat-completion round trip (mockable for testing).
pub trait ChatModel: Send + Sync {
    fn chat(
        &self,
        system: &str,
        prompt: &str,
        temperature: f32,
        max_tokens: u32,
    ) -> Result<String, EnrichError>;
}

/// Blocking client for an OpenAI-compatible `/chat/completions` endpoint.
pub struct OpenAiClient {
    base_url: String,
    api_key: String,
    model: String,
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

impl OpenAiClient {
    pub fn new(base_url: &str, api_key: &str, model: &str) -> Result<Self, EnrichError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| EnrichError::HttpClient(e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
            client,
            timeout_secs: REQUEST_TIMEOUT_SECS,
        })
    }
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Deserialize)]
struct ChatReply {
    content: Option<String>,
}

impl ChatModel for OpenAiClient {
    fn chat(
        &self,
        system: &str,
        prompt: &str,
        temperature: f32,
        max_tokens: u32,
    ) -> Result<String, EnrichError> {
        let url = format!("{}/chat/completions", self.base_url);
        let body = ChatCompletionRequest {
            model: &self.model,
            messages: [
                ChatMessage { role: "system", content: system },
                ChatMessage { role: "user", content: prompt },
            ],
            temperature,
            max_tokens,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .map_err(|e| map_reqwest_error(e, self.timeout_secs))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(EnrichError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .map_err(|e| EnrichError::ResponseParsing(e.to_string()))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| EnrichError::InvalidResponse("no choices in completion".into()))
    }
}

/// [`HealthAssistant`] over any [`ChatModel`].
pub struct OpenAiAssistant<M = OpenAiClient> {
    model: M,
}

impl OpenAiAssistant<OpenAiClient> {
    /// Assistant against the public OpenAI API.
    pub fn from_api_key(api_key: &str, model: &str) -> Result<Self, EnrichError> {
        Ok(Self::new(OpenAiClient::new(OPENAI_BASE_URL, api_key, model)?))
    }
}

impl<M: ChatModel> OpenAiAssistant<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }
}

impl<M: ChatModel> HealthAssistant for OpenAiAssistant<M> {
    fn classify_symptoms(&self, symptoms: &str) -> AiClassification {
        let reply = match self.model.chat(
            CLASSIFY_SYSTEM,
            &classification_prompt(symptoms),
            CLASSIFY_TEMPERATURE,
            CLASSIFY_MAX_TOKENS,
        ) {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!(error = %e, "AI classification unavailable");
                return AiClassification::unavailable();
            }
        };

        parse_classification(&reply).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "AI classification reply unusable");
            AiClassification::unparseable()
        })
    }

    fn awareness_messages(&self, event: &str) -> Localized<String> {
        let reply = match self.model.chat(
            AWARENESS_SYSTEM,
            &awareness_prompt(event),
            AWARENESS_TEMPERATURE,
            AWARENESS_MAX_TOKENS,
        ) {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!(error = %e, "AI awareness messages unavailable");
                return awareness_offline_fallback(event);
            }
        };

        parse_awareness(&reply).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "AI awareness reply unusable");
            awareness_guidelines_fallback(event)
        })
    }
}

fn classification_prompt(symptoms: &str) -> String {
    format!(
        r#"Classify the patient's symptoms into exactly one category:
- "Emergency": life-threatening, needs immediate care
- "Doctor Visit": should see a doctor within 24-48 hours
- "Self-care": manageable at home or with over-the-counter medicine

Symptoms: "{symptoms}"

Answer only with JSON:
{{"classification": "Emergency|Doctor Visit|Self-care", "advice": "2-3 sentences of practical, safe advice", "confidence": 0.0-1.0}}"#
    )
}

fn awareness_prompt(event: &str) -> String {
    format!(
        r#"Write a public health awareness message about: "{event}"

Give one message each in English (en), Hindi (hi) and Bengali (bn).
Each message is 2-3 sentences and mentions preventive measures where relevant.

Answer only with JSON:
{{"en": "...", "hi": "...", "bn": "..."}}"#
    )
}

/// Validate a classification reply. An unknown label becomes
/// "Doctor Visit"; confidence is clamped to `[0, 1]`.
pub fn parse_classification(reply: &str) -> Result<AiClassification, EnrichError> {
    let value: serde_json::Value = serde_json::from_str(extract_json_block(reply)?)
        .map_err(|e| EnrichError::ResponseParsing(e.to_string()))?;

    let label = non_empty_str(&value, "classification")?;
    let advice = non_empty_str(&value, "advice")?;
    let confidence = value
        .get("confidence")
        .and_then(serde_json::Value::as_f64)
        .ok_or_else(|| EnrichError::InvalidResponse("confidence is not a number".into()))?;

    Ok(AiClassification {
        classification: AiLabel::parse(label).unwrap_or(AiLabel::DoctorVisit),
        advice: advice.to_string(),
        confidence: confidence.clamp(0.0, 1.0),
    })
}

/// Validate an awareness reply; every language must be present and
/// non-empty.
pub fn parse_awareness(reply: &str) -> Result<Localized<String>, EnrichError> {
    let value: serde_json::Value = serde_json::from_str(extract_json_block(reply)?)
        .map_err(|e| EnrichError::ResponseParsing(e.to_string()))?;

    Ok(Localized {
        en: non_empty_str(&value, "en")?.to_string(),
        hi: non_empty_str(&value, "hi")?.to_string(),
        bn: non_empty_str(&value, "bn")?.to_string(),
    })
}

fn non_empty_str<'a>(value: &'a serde_json::Value, key: &str) -> Result<&'a str, EnrichError> {
    value
        .get(key)
        .and_then(serde_json::Value::as_str)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| EnrichError::InvalidResponse(format!("missing field '{key}'")))
}
