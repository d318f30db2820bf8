// Portfolio generation: theme registry, prompt templates, LLM call,
// HTML cleanup and validation, persistence of the accepted page.
// All LLM calls go through llm_client.

pub mod generator;
pub mod html;
pub mod prompts;
pub mod themes;
