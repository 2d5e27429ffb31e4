use thiserror::Error;

/// Failures surfaced by the generation client.
///
/// A missing credential only shows up through the explicit connection
/// probe — the generate operations fall back to demo output instead of
/// failing. Transport and no-image-data are kept distinct so "service
/// unreachable" and "service returned nothing usable" stay diagnosable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("no GEMINI_API_KEY configured")]
    MissingCredential,
    /// Network failure or a non-success status from the remote service.
    /// The message is shown to the user as-is.
    #[error("{0}")]
    Transport(String),
    /// The remote call succeeded but no response part carried inline
    /// image data.
    #[error("no image data found in response")]
    NoImageData,
}
