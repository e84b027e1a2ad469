//! Machine translation of symptom text, used to keep an English copy of
//! every query in the audit log.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use super::{map_reqwest_error, EnrichError, REQUEST_TIMEOUT_SECS};
use crate::triage::Language;

pub const BHASHINI_PIPELINE_URL: &str =
    "https://dhruva-api.bhashini.gov.in/services/inference/pipeline";

pub trait Translator: Send + Sync {
    fn translate(&self, text: &str, source: Language, target: Language)
        -> Result<String, EnrichError>;
}

/// Translate `text`, returning it unchanged when the languages match or the
/// translator fails.
pub fn translate_or_original(
    translator: &dyn Translator,
    text: &str,
    source: Language,
    target: Language,
) -> String {
    if source == target {
        return text.to_string();
    }
    match translator.translate(text, source, target) {
        Ok(translated) => translated,
        Err(e) => {
            tracing::debug!(%source, %target, error = %e, "Translation unavailable, keeping original");
            text.to_string()
        }
    }
}

type PhraseTable = HashMap<(Language, Language), HashMap<&'static str, &'static str>>;

/// Common medical phrases with fixed translations.
static PHRASEBOOK: LazyLock<PhraseTable> = LazyLock::new(|| {
    let entries: [((Language, Language), &[(&str, &str)]); 3] = [
        (
            (Language::Hi, Language::En),
            &[
                ("मुझे तेज बुखार है", "I have high fever"),
                ("सिर दर्द हो रहा है", "I have a headache"),
                ("पेट में दर्द है", "I have stomach pain"),
                ("खांसी आ रही है", "I have a cough"),
                ("सांस लेने में तकलीफ", "I have breathing difficulty"),
            ],
        ),
        (
            (Language::En, Language::Hi),
            &[
                ("I have high fever", "मुझे तेज बुखार है"),
                ("You should see a doctor immediately", "आपको तुरंत डॉक्टर से मिलना चाहिए"),
                ("Take rest and drink plenty of fluids", "आराम करें और खूब पानी पिएं"),
                ("This is an emergency situation", "यह एक आपातकालीन स्थिति है"),
                ("Monitor your symptoms closely", "अपने लक्षणों पर बारीकी से नज़र रखें"),
            ],
        ),
        (
            (Language::En, Language::Bn),
            &[
                ("I have high fever", "আমার প্রচণ্ড জ্বর হয়েছে"),
                ("You should see a doctor immediately", "আপনার তৎক্ষণাৎ ডাক্তার দেখানো উচিত"),
                ("Take rest and drink plenty of fluids", "বিশ্রাম নিন এবং প্রচুর তরল পান করুন"),
                ("This is an emergency situation", "এটি একটি জরুরি অবস্থা"),
                ("Monitor your symptoms closely", "আপনার লক্ষণগুলি নিবিড়ভাবে পর্যবেক্ষণ করুন"),
            ],
        ),
    ];

    entries
        .into_iter()
        .map(|(pair, phrases)| (pair, phrases.iter().copied().collect()))
        .collect()
});

/// Offline translator backed by a fixed phrase table. Only exact phrases
/// are translated.
#[derive(Debug, Default, Clone, Copy)]
pub struct PhrasebookTranslator;

impl Translator for PhrasebookTranslator {
    fn translate(
        &self,
        text: &str,
        source: Language,
        target: Language,
    ) -> Result<String, EnrichError> {
        PHRASEBOOK
            .get(&(source, target))
            .and_then(|phrases| phrases.get(text.trim()))
            .map(|t| t.to_string())
            .ok_or_else(|| {
                EnrichError::InvalidResponse(format!("no phrasebook entry for {source}->{target}"))
            })
    }
}

/// Client for the Bhashini inference pipeline.
pub struct BhashiniTranslator {
    url: String,
    api_key: String,
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

impl BhashiniTranslator {
    pub fn new(api_key: &str) -> Result<Self, EnrichError> {
        Self::with_url(BHASHINI_PIPELINE_URL, api_key)
    }

    pub fn with_url(url: &str, api_key: &str) -> Result<Self, EnrichError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| EnrichError::HttpClient(e.to_string()))?;

        Ok(Self {
            url: url.to_string(),
            api_key: api_key.to_string(),
            client,
            timeout_secs: REQUEST_TIMEOUT_SECS,
        })
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PipelineRequest<'a> {
    pipeline_tasks: [PipelineTask; 1],
    input_data: InputData<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PipelineTask {
    task_type: &'static str,
    config: TaskConfig,
}

#[derive(Serialize)]
struct TaskConfig {
    language: LanguagePair,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LanguagePair {
    source_language: Language,
    target_language: Language,
}

#[derive(Serialize)]
struct InputData<'a> {
    input: [SourceText<'a>; 1],
}

#[derive(Serialize)]
struct SourceText<'a> {
    source: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PipelineResponse {
    pipeline_response: Vec<TaskOutput>,
}

#[derive(Deserialize)]
struct TaskOutput {
    output: Vec<TargetText>,
}

#[derive(Deserialize)]
struct TargetText {
    target: String,
}

fn pipeline_request(text: &str, source: Language, target: Language) -> PipelineRequest<'_> {
    PipelineRequest {
        pipeline_tasks: [PipelineTask {
            task_type: "translation",
            config: TaskConfig {
                language: LanguagePair {
                    source_language: source,
                    target_language: target,
                },
            },
        }],
        input_data: InputData {
            input: [SourceText { source: text }],
        },
    }
}

fn first_target(response: PipelineResponse) -> Result<String, EnrichError> {
    response
        .pipeline_response
        .into_iter()
        .next()
        .and_then(|task| task.output.into_iter().next())
        .map(|out| out.target)
        .ok_or_else(|| EnrichError::InvalidResponse("empty pipeline response".into()))
}

impl Translator for BhashiniTranslator {
    fn translate(
        &self,
        text: &str,
        source: Language,
        target: Language,
    ) -> Result<String, EnrichError> {
        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&pipeline_request(text, source, target))
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

        let parsed: PipelineResponse = response
            .json()
            .map_err(|e| EnrichError::ResponseParsing(e.to_string()))?;
        first_target(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingTranslator;

    impl Translator for FailingTranslator {
        fn translate(&self, _: &str, _: Language, _: Language) -> Result<String, EnrichError> {
            Err(EnrichError::HttpClient("connection refused".into()))
        }
    }

    #[test]
    fn phrasebook_hindi_to_english() {
        let translated = PhrasebookTranslator
            .translate("मुझे तेज बुखार है", Language::Hi, Language::En)
            .unwrap();
        assert_eq!(translated, "I have high fever");
    }

    #[test]
    fn phrasebook_english_to_bengali() {
        let translated = PhrasebookTranslator
            .translate("This is an emergency situation", Language::En, Language::Bn)
            .unwrap();
        assert_eq!(translated, "এটি একটি জরুরি অবস্থা");
    }

    #[test]
    fn phrasebook_miss_is_error() {
        assert!(PhrasebookTranslator
            .translate("पैर में दर्द", Language::Hi, Language::En)
            .is_err());
        assert!(PhrasebookTranslator
            .translate("I have high fever", Language::Bn, Language::En)
            .is_err());
    }

    #[test]
    fn same_language_is_identity() {
        assert_eq!(
            translate_or_original(&FailingTranslator, "fever", Language::En, Language::En),
            "fever"
        );
    }

    #[test]
    fn failure_keeps_original() {
        assert_eq!(
            translate_or_original(&FailingTranslator, "জ্বর", Language::Bn, Language::En),
            "জ্বর"
        );
        assert_eq!(
            translate_or_original(&PhrasebookTranslator, "unknown phrase", Language::Hi, Language::En),
            "unknown phrase"
        );
    }

    #[test]
    fn bhashini_payload_shape() {
        let json = serde_json::to_value(pipeline_request("बुखार", Language::Hi, Language::En)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "pipelineTasks": [{
                    "taskType": "translation",
                    "config": {"language": {"sourceLanguage": "hi", "targetLanguage": "en"}}
                }],
                "inputData": {"input": [{"source": "बुखार"}]}
            })
        );
    }

    #[test]
    fn bhashini_response_target_extracted() {
        let response: PipelineResponse = serde_json::from_value(serde_json::json!({
            "pipelineResponse": [{"taskType": "translation", "output": [{"source": "बुखार", "target": "fever"}]}]
        }))
        .unwrap();
        assert_eq!(first_target(response).unwrap(), "fever");

        let empty: PipelineResponse =
            serde_json::from_value(serde_json::json!({"pipelineResponse": []})).unwrap();
        assert!(matches!(first_target(empty), Err(EnrichError::InvalidResponse(_))));
    }
}
