// Artifact generation: code, unit test plan, technical specification.
// All LLM calls go through llm_client — no direct Azure calls here.

pub mod export;
pub mod generator;
pub mod handlers;
pub mod prompts;

pub use generator::ArtifactKind;
