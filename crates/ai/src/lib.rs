//! Milkbook AI - the ledger assistant.
//!
//! A single-turn question/answer passthrough to Groq's chat completions,
//! built on rig-core. The caller renders the ledger context with
//! [`build_context`]; the assistant wraps it in a system prompt and returns
//! the model's text reply.
//!
//! - `assistant`: the [`AssistantTrait`] seam, the Groq client and a fake
//! - `context`: context and system prompt rendering, sample questions
//! - `error`: [`AiError`]

pub mod assistant;
pub mod context;
pub mod error;

pub use assistant::{AssistantConfig, AssistantTrait, FakeAssistant, GroqAssistant, DEFAULT_MODEL};
pub use context::{build_context, build_system_prompt, SAMPLE_QUESTIONS};
pub use error::AiError;
