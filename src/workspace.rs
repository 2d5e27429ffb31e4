//! Per-section request lifecycle — one state machine per category.
//!
//! Each workspace section owns its own `RequestState` behind a mutex:
//! idle → pending → succeeded | failed. A section accepts at most one
//! in-flight generation; triggers that arrive while pending are ignored,
//! not queued (the submit affordance is disabled while pending, and there
//! is no server-side dedup to fall back on). Sections are fully
//! independent — a pending photo never blocks a description.

use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::genai::{GeminiClient, GenerationError, GenerationResult};
use crate::prompt::{compose_for, Category};

/// Lifecycle of one section's generation request.
///
/// Rendering is a pure projection of this value; the display layer
/// holds no result state of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum RequestState {
    Idle,
    Pending,
    Succeeded { result: GenerationResult },
    Failed { message: String },
}

/// What a trigger call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// A call was made and the state settled to succeeded or failed.
    Settled,
    /// Input was empty or whitespace-only; state untouched.
    SkippedEmptyInput,
    /// A request is already in flight for this section; state untouched.
    SkippedInFlight,
}

/// One category's controller: owns the state machine and drives the client.
pub struct PromptSection {
    category: Category,
    state: Mutex<RequestState>,
}

impl PromptSection {
    pub fn new(category: Category) -> Self {
        Self {
            category,
            state: Mutex::new(RequestState::Idle),
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Snapshot of the current state, for rendering.
    pub fn state(&self) -> RequestState {
        self.state.lock().unwrap().clone()
    }

    /// Return to idle, dropping any stored result or error.
    pub fn reset(&self) {
        *self.state.lock().unwrap() = RequestState::Idle;
    }

    /// Transition to pending and return the composed prompt, or `None`
    /// when the trigger must be ignored (blank input, or already pending).
    ///
    /// The pending check and the transition happen under one lock, so two
    /// racing triggers can never both start a call.
    pub fn begin(&self, user_input: &str) -> Option<String> {
        if user_input.trim().is_empty() {
            return None;
        }

        let mut state = self.state.lock().unwrap();
        if *state == RequestState::Pending {
            log::warn!(
                "[WORKSPACE] {:?} trigger ignored — request already in flight",
                self.category
            );
            return None;
        }
        *state = RequestState::Pending;

        Some(compose_for(self.category, user_input))
    }

    /// Settle the pending request with the client's outcome.
    ///
    /// Failures keep the error's message verbatim. No automatic retry;
    /// the user re-triggers.
    pub fn settle(&self, outcome: Result<GenerationResult, GenerationError>) {
        let mut state = self.state.lock().unwrap();
        *state = match outcome {
            Ok(result) => RequestState::Succeeded { result },
            Err(e) => {
                log::warn!("[WORKSPACE] {:?} generation failed: {}", self.category, e);
                RequestState::Failed {
                    message: e.to_string(),
                }
            }
        };
    }

    /// Full trigger: compose, call the client, settle.
    ///
    /// No-op (state unchanged) for blank input or while a request is
    /// already pending.
    pub async fn trigger(&self, client: &GeminiClient, user_input: &str) -> TriggerOutcome {
        if user_input.trim().is_empty() {
            return TriggerOutcome::SkippedEmptyInput;
        }
        let Some(prompt) = self.begin(user_input) else {
            return TriggerOutcome::SkippedInFlight;
        };

        log::info!(
            "[WORKSPACE] {:?} generating ({} prompt chars)",
            self.category,
            prompt.chars().count()
        );

        let outcome = if self.category.is_image() {
            client.generate_image(&prompt).await.map(GenerationResult::Image)
        } else {
            client.generate_text(&prompt).await.map(GenerationResult::Text)
        };
        self.settle(outcome);

        TriggerOutcome::Settled
    }
}

/// The whole workspace: one controller per category.
pub struct Workspace {
    // Indexed by discriminant; Category::ALL is declared in the same order.
    sections: [PromptSection; 3],
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            sections: Category::ALL.map(PromptSection::new),
        }
    }

    pub fn section(&self, category: Category) -> &PromptSection {
        &self.sections[category as usize]
    }

    pub fn sections(&self) -> impl Iterator<Item = &PromptSection> {
        self.sections.iter()
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}
