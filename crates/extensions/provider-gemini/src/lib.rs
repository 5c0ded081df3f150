//! # Tour Guide Provider - Gemini
//!
//! Google Gemini implementation of [`DescriptionService`](tourguide_protocols::DescriptionService).

mod client;
mod describer;
mod prompts;
mod types;

pub use client::{DEFAULT_BASE_URL, GeminiClient};
pub use describer::{GeminiDescriber, parse_suggestions};
pub use prompts::{DESCRIBE_INSTRUCTION, NO_SUGGESTIONS_SENTINEL, SYSTEM_PROMPT, suggestions_prompt};
pub use types::*;
