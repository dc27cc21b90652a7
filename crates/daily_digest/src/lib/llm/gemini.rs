use reqwest::Client;
use serde::Deserialize;

use crate::{Summarizer, SummaryResponse};

/// Fixed result string returned when no API key is configured.
pub const MISSING_API_KEY_SUMMARY: &str = "Gemini API key not found. Cannot summarize.";

pub struct GeminiClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum GeminiError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
}

impl GeminiClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: "https://generativelanguage.googleapis.com/v1beta".into(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    fn build_prompt(video_title: &str, transcript: &str) -> String {
        format!(
            "Please summarize the following YouTube video transcript titled '{video_title}'. \
             Capture the key points and takeaways in a bulleted list.\n\nTranscript:\n{transcript}"
        )
    }

    async fn send_generate_request(
        &self,
        api_key: &str,
        model_name: &str,
        prompt: &str,
    ) -> Result<GenerateContentResponse, GeminiError> {
        let body = serde_json::json!({
            "contents": [
                {
                    "role": "user",
                    "parts": [{ "text": prompt }]
                }
            ]
        });

        let resp = self
            .client
            .post(format!(
                "{}/models/{}:generateContent",
                self.base_url, model_name
            ))
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(GeminiError::Api { status, message });
        }

        Ok(resp.json::<GenerateContentResponse>().await?)
    }
}

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    pub candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    pub parts: Option<Vec<ContentPart>>,
}

#[derive(Debug, Deserialize)]
pub struct ContentPart {
    pub text: Option<String>,
}

impl Summarizer for GeminiClient {
    const SUMMARIZER_MODEL: &'static str = "gemini-1.5-flash";
    type Error = GeminiError;

    async fn summarize(
        &self,
        video_title: &str,
        transcript: &str,
    ) -> Result<SummaryResponse, Self::Error> {
        let Some(api_key) = self.api_key.as_deref() else {
            tracing::warn!("Gemini API key not configured; skipping summarization call");
            return Ok(SummaryResponse {
                summary: MISSING_API_KEY_SUMMARY.to_string(),
            });
        };

        let prompt = Self::build_prompt(video_title, transcript);
        let response = self
            .send_generate_request(api_key, Self::SUMMARIZER_MODEL, &prompt)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to summarize content"))?;

        let candidates = response.candidates.unwrap_or_default();
        let summary = candidates
            .first()
            .and_then(|candidate| candidate.content.as_ref())
            .and_then(|content| content.parts.as_ref())
            .map(|parts| {
                parts
                    .iter()
                    .filter_map(|part| part.text.clone())
                    .collect::<String>()
            })
            .filter(|text| !text.is_empty())
            .ok_or_else(|| GeminiError::Api {
                status: 0,
                message: "No content in response".into(),
            })?;

        Ok(SummaryResponse { summary })
    }
}
