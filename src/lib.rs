//! NEXUS GEN — prompt workspace backend.
//!
//! This is the domain layer behind the workspace UI: everything that is
//! not pixels lives here. The embedding shell renders three sections
//! (product photo, product description, ad copy) and calls into this
//! crate for the rest.
//!
//! Domains:
//!   - prompt.rs    — fixed templates + prompt composition
//!   - genai/       — Gemini generation client (text + image, demo mode)
//!   - workspace.rs — per-section request lifecycle state machines
//!   - export.rs    — clipboard copy and image download affordances

pub mod export;
pub mod genai;
pub mod prompt;
pub mod workspace;

pub use genai::{GeminiClient, GenerationError, GenerationResult};
pub use prompt::{compose, compose_for, template_for, Category, Template};
pub use workspace::{PromptSection, RequestState, TriggerOutcome, Workspace};

/// One-time startup wiring — called by the shell before anything else.
///
/// Loads `.env.local` → `.env` from the project root, then initializes
/// logging. A missing env file is fine; running without an API key is a
/// supported state (the client serves demo output).
pub fn init() {
    let manifest_dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));

    'env_load: for env_file in [".env.local", ".env"] {
        let path = manifest_dir.join(env_file);
        if path.exists() {
            match dotenvy::from_path(&path) {
                Ok(_) => eprintln!("[STARTUP] Loaded {}", path.display()),
                Err(e) => eprintln!("[STARTUP] Failed to load {}: {}", path.display(), e),
            }
            break 'env_load;
        }
    }

    // try_init so tests and repeated embeddings don't panic on re-entry.
    let _ = env_logger::try_init();

    log::info!("[STARTUP] NEXUS GEN backend ready");
}
