use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::llm::TextGenerator;

pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

#[derive(Debug, thiserror::Error)]
pub enum GeminiError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Generation request failed: {status} - {body}")]
    RequestFailed { status: u16, body: String },
    #[error("Malformed generation response: {0}")]
    ResponseMalformed(&'static str),
}

impl GeminiClient {
    pub const DEFAULT_BASE_URL: &'static str = "https://generativelanguage.googleapis.com/v1beta";
    pub const DEFAULT_MODEL: &'static str = "gemini-1.5-flash-latest";

    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: Self::DEFAULT_BASE_URL.into(),
            model: Self::DEFAULT_MODEL.into(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        let url: String = url.into();
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    pub async fn send_generate_request(
        &self,
        prompt: &str,
    ) -> Result<GenerateContentResponse, GeminiError> {
        let body = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        let resp = self
            .client
            .post(self.endpoint())
            .query(&[("key", &self.api_key)])
            .json(&body)
            .send()
            .await
            // the url carries the api key
            .map_err(reqwest::Error::without_url)
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            tracing::error!(status, %body, "Generation request failed");
            return Err(GeminiError::RequestFailed { status, body });
        }

        let response = resp
            .json::<GenerateContentResponse>()
            .await
            .map_err(reqwest::Error::without_url)
            .inspect_err(|e| tracing::error!(error = %e, "Failed to decode generation response"))
            .map_err(|_| GeminiError::ResponseMalformed("response body is not valid JSON"))?;

        Ok(response)
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
    #[serde(rename = "finishReason")]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ContentPart>,
}

#[derive(Debug, Deserialize)]
pub struct ContentPart {
    pub text: Option<String>,
}

impl GenerateContentResponse {
    /// Text at `candidates[0].content.parts[0].text`.
    pub fn into_first_text(self) -> Result<String, GeminiError> {
        let candidate = self
            .candidates
            .into_iter()
            .next()
            .ok_or(GeminiError::ResponseMalformed("no candidates in response"))?;
        let content = candidate
            .content
            .ok_or(GeminiError::ResponseMalformed("candidate has no content"))?;
        content
            .parts
            .into_iter()
            .next()
            .and_then(|part| part.text)
            .ok_or(GeminiError::ResponseMalformed("candidate content has no text"))
    }
}

impl TextGenerator for GeminiClient {
    type Error = GeminiError;

    fn model(&self) -> &str {
        &self.model
    }

    async fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        let response = self.send_generate_request(prompt).await?;

        response
            .into_first_text()
            .inspect_err(|e| tracing::error!(error = %e, model = %self.model, "Unexpected response structure"))
    }
}
