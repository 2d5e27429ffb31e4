//! Gemini generation client — text and image `generateContent` calls.
//!
//! The client holds no state between calls, so one instance can serve
//! every workspace section concurrently. Without an API key the generate
//! operations serve labeled demo output instead of failing; only the
//! explicit connection probe reports a missing credential as an error.

use super::credentials;
use super::demo;
use super::error::GenerationError;
use super::types::GenerateContentResponse;

/// Model used for description and ad-copy generation.
pub const TEXT_MODEL: &str = "gemini-3-flash-preview";
/// Model used for product photo generation.
pub const IMAGE_MODEL: &str = "gemini-2.5-flash-image";

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Text served when the model returned an empty candidate list.
pub const EMPTY_TEXT_FALLBACK: &str = "No text generated.";

pub struct GeminiClient {
    api_key: Option<String>,
    http: reqwest::Client,
}

impl GeminiClient {
    /// Client with the key resolved from the environment / OS keychain.
    pub fn from_env() -> Self {
        Self {
            api_key: credentials::resolve_api_key(),
            http: reqwest::Client::new(),
        }
    }

    /// Client with an explicit API key.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            http: reqwest::Client::new(),
        }
    }

    /// Credential-less client — every generate call serves demo output.
    pub fn demo() -> Self {
        Self {
            api_key: None,
            http: reqwest::Client::new(),
        }
    }

    /// True when no credential is configured and output is canned.
    pub fn is_demo(&self) -> bool {
        self.api_key.is_none()
    }

    /// Generate plain text for a composed prompt.
    pub async fn generate_text(&self, prompt: &str) -> Result<String, GenerationError> {
        let Some(api_key) = self.api_key.as_deref() else {
            log::warn!("[GENAI] No API key set — serving demo text");
            return Ok(demo::demo_text(prompt));
        };

        let start = std::time::Instant::now();
        let response = self.generate_content(TEXT_MODEL, prompt, api_key).await?;
        log::info!("[GENAI] Text response in {}ms", start.elapsed().as_millis());

        Ok(text_from_response(&response))
    }

    /// Generate an image for a composed prompt.
    ///
    /// Returns a displayable `data:<mime>;base64,<payload>` URI built
    /// from the first usable inline part of the response.
    pub async fn generate_image(&self, prompt: &str) -> Result<String, GenerationError> {
        let Some(api_key) = self.api_key.as_deref() else {
            log::warn!("[GENAI] No API key set — serving demo image");
            return Ok(demo::demo_image_uri());
        };

        let start = std::time::Instant::now();
        let response = self.generate_content(IMAGE_MODEL, prompt, api_key).await?;
        log::info!("[GENAI] Image response in {}ms", start.elapsed().as_millis());

        image_data_uri(&response)
    }

    /// Probe the remote service with a minimal request.
    ///
    /// The one place a missing credential is an error instead of a demo
    /// fallback — the settings surface needs to tell the two apart.
    pub async fn verify(&self) -> Result<(), GenerationError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(GenerationError::MissingCredential)?;
        self.generate_content(TEXT_MODEL, "Reply with just: ok", api_key)
            .await?;
        log::info!("[GENAI] Connection probe succeeded");
        Ok(())
    }

    async fn generate_content(
        &self,
        model: &str,
        prompt: &str,
        api_key: &str,
    ) -> Result<GenerateContentResponse, GenerationError> {
        log::info!("[GENAI] Model: {}", model);

        // API key goes in a URL query param, not a header
        let url = format!("{API_BASE}/{model}:generateContent?key={api_key}");

        let resp = self
            .http
            .post(&url)
            .header("content-type", "application/json")
            .json(&serde_json::json!({
                "contents": [
                    {
                        "role": "user",
                        "parts": [
                            {
                                "text": prompt
                            }
                        ]
                    }
                ]
            }))
            .send()
            .await
            .map_err(|e| {
                log::error!("[GENAI] HTTP request failed: {}", e);
                GenerationError::Transport(format!("API request failed: {e}"))
            })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            log::error!("[GENAI] API returned {}: {}", status, body);
            return Err(GenerationError::Transport(format!("API error ({status})")));
        }

        resp.json::<GenerateContentResponse>()
            .await
            .map_err(|e| GenerationError::Transport(format!("Failed to read response: {e}")))
    }
}

/// Concatenated text across the first candidate's parts.
///
/// An empty or text-free response maps to a fixed fallback string rather
/// than an error — the call itself succeeded.
pub fn text_from_response(response: &GenerateContentResponse) -> String {
    let text: String = response
        .candidates
        .first()
        .map(|candidate| {
            candidate
                .content
                .parts
                .iter()
                .filter_map(|part| part.text.as_deref())
                .collect()
        })
        .unwrap_or_default();

    if text.is_empty() {
        EMPTY_TEXT_FALLBACK.to_string()
    } else {
        text
    }
}

/// Scan the first candidate's parts for inline image data and build a
/// data URI from the first part carrying a non-empty payload.
///
/// Parts without a payload are skipped. No usable part at all is a hard
/// `NoImageData` failure, never a silent empty result.
pub fn image_data_uri(response: &GenerateContentResponse) -> Result<String, GenerationError> {
    if let Some(candidate) = response.candidates.first() {
        for part in &candidate.content.parts {
            let Some(inline) = part.inline_data.as_ref() else {
                continue;
            };
            let Some(data) = inline.data.as_deref() else {
                continue;
            };
            if data.is_empty() {
                continue;
            }
            let mime = inline.mime_type.as_deref().unwrap_or("image/png");
            return Ok(format!("data:{mime};base64,{data}"));
        }
    }

    log::warn!("[GENAI] Response contained no inline image part");
    Err(GenerationError::NoImageData)
}
