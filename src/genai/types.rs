//! Wire types for the Gemini `generateContent` response, plus the
//! normalized result handed to the display layer.

use serde::{Deserialize, Serialize};

/// Normalized output of one generation call.
///
/// Exactly one variant per call. A tagged union rather than two
/// optional fields, so "both populated" and "neither populated" are
/// unrepresentable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum GenerationResult {
    /// Generated text, rendered preformatted with a copy affordance.
    Text(String),
    /// Displayable image reference (`data:<mime>;base64,<payload>`).
    Image(String),
}

/// Response payload of `models/*:generateContent`.
///
/// Lenient on purpose: every field defaults, since the service omits
/// whole subtrees depending on the model and outcome.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Content,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// One part of a candidate's content. Text and inline binary data are
/// mutually exclusive in practice; both are optional on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub inline_data: Option<InlineData>,
}

/// Inline binary payload (`inlineData` on the wire).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    #[serde(default)]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub data: Option<String>,
}
