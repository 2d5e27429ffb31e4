//! Generation client domain — Gemini text and image operations.
//!
//! External code should only use what is exported here.
//!
//! Pieces:
//!   - client.rs      — the `generateContent` calls + response normalization
//!   - types.rs       — wire structs and the normalized `GenerationResult`
//!   - demo.rs        — labeled placeholder output when no API key is set
//!   - credentials.rs — API key resolution (env var + OS keychain)

pub mod client;
pub mod credentials;
pub mod demo;
mod error;
pub mod types;

pub use client::{image_data_uri, text_from_response, GeminiClient, IMAGE_MODEL, TEXT_MODEL};
pub use error::GenerationError;
pub use types::{GenerateContentResponse, GenerationResult};
