//! Demo-mode output, served when no API key is configured.
//!
//! Running without a credential is a supported deployment state, not an
//! error. Every demo result is visibly labeled so it can never be
//! mistaken for a real model response.

/// Marker prepended to every demo-mode text result.
pub const DEMO_MARKER: &str = "[DEMO]";

/// How many characters of the composed prompt are echoed back.
const ECHO_LIMIT: usize = 120;

/// Labeled placeholder text embedding a truncated echo of the prompt.
pub fn demo_text(prompt: &str) -> String {
    let mut echo: String = prompt.chars().take(ECHO_LIMIT).collect();
    if prompt.chars().count() > ECHO_LIMIT {
        echo.push('…');
    }
    format!(
        "{DEMO_MARKER} No GEMINI_API_KEY configured — this is canned output, not a model response. \
         Prompt received: \"{echo}\""
    )
}

/// Placeholder card rendered in place of a generated image.
const DEMO_IMAGE_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="512" height="512" viewBox="0 0 512 512"><rect width="512" height="512" fill="#1c2230"/><rect x="24" y="24" width="464" height="464" rx="16" fill="none" stroke="#3d4863" stroke-width="4" stroke-dasharray="14 10"/><text x="256" y="244" text-anchor="middle" font-family="monospace" font-size="56" fill="#8fa3c8">DEMO</text><text x="256" y="300" text-anchor="middle" font-family="monospace" font-size="22" fill="#5c6b8c">no API key configured</text></svg>"##;

/// Data URI of the fixed demo placeholder image. Deterministic: the
/// same reference every call, so the display layer can recognize it.
pub fn demo_image_uri() -> String {
    format!(
        "data:image/svg+xml;base64,{}",
        base64::Engine::encode(&base64::engine::general_purpose::STANDARD, DEMO_IMAGE_SVG)
    )
}
