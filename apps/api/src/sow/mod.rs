// SOW drafting: document analysis, prompt construction and generation.
// All model calls go through llm_client::TextGenerator.

pub mod analysis;
pub mod extract;
pub mod generator;
pub mod handlers;
pub mod prompts;
