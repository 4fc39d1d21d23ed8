// Résumé analysis: intake validation, text extraction, prompt composition,
// one LLM call, and best-effort parsing of the reply.
// All LLM calls go through llm_client; no direct Gemini calls here.

pub mod extract;
pub mod handlers;
pub mod intake;
pub mod markup;
pub mod pipeline;
pub mod prompts;
pub mod response;
