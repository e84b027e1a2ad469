//! Optional enrichers around the triage core: an AI second opinion and
//! machine translation. Both are best-effort; every failure degrades to a
//! fixed fallback and never fails the request that asked for it.

pub mod assistant;
pub mod translation;

pub use assistant::{AiClassification, AiLabel, HealthAssistant, OpenAiAssistant};
pub use translation::{BhashiniTranslator, PhrasebookTranslator, Translator};

use thiserror::Error;

/// Default timeout for outbound enrichment requests.
pub const REQUEST_TIMEOUT_SECS: u64 = 20;

#[derive(Error, Debug)]
pub enum EnrichError {
    #[error("{0} is not configured")]
    NotConfigured(&'static str),

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("Upstream returned error (status {status}): {body}")]
    Upstream { status: u16, body: String },

    #[error("Response parsing error: {0}")]
    ResponseParsing(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl EnrichError {
    /// Transport failures, as opposed to a reply that could not be used.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::NotConfigured(_) | Self::HttpClient(_) | Self::Upstream { .. }
        )
    }
}

pub(crate) fn map_reqwest_error(e: reqwest::Error, timeout_secs: u64) -> EnrichError {
    if e.is_timeout() {
        EnrichError::HttpClient(format!("Request timed out after {timeout_secs}s"))
    } else {
        EnrichError::HttpClient(e.to_string())
    }
}

/// Extract a JSON object from model output that may wrap it in prose or
/// markdown fences.
pub(crate) fn extract_json_block(response: &str) -> Result<&str, EnrichError> {
    let trimmed = response.trim();

    if let Some(start) = trimmed.find("```json") {
        let after_fence = &trimmed[start + 7..];
        if let Some(end) = after_fence.find("```") {
            return Ok(after_fence[..end].trim());
        }
    }

    if let (Some(start), Some(end)) = (trimmed.find('{'), trimmed.rfind('}')) {
        if start < end {
            return Ok(&trimmed[start..=end]);
        }
    }

    Err(EnrichError::ResponseParsing(
        "no JSON object in response".into(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_block_from_fenced_response() {
        let response = "Sure:\n```json\n{\"a\": 1}\n```\nDone.";
        assert_eq!(extract_json_block(response).unwrap(), "{\"a\": 1}");
    }

    #[test]
    fn json_block_from_preamble() {
        let response = "Here you go {\"a\": {\"b\": 2}} thanks";
        assert_eq!(extract_json_block(response).unwrap(), "{\"a\": {\"b\": 2}}");
    }

    #[test]
    fn no_json_block() {
        assert!(matches!(
            extract_json_block("no braces here"),
            Err(EnrichError::ResponseParsing(_))
        ));
    }

    #[test]
    fn transport_errors_classified() {
        assert!(EnrichError::HttpClient("x".into()).is_transport());
        assert!(EnrichError::Upstream { status: 500, body: String::new() }.is_transport());
        assert!(!EnrichError::ResponseParsing("x".into()).is_transport());
        assert!(!EnrichError::InvalidResponse("x".into()).is_transport());
    }
}
