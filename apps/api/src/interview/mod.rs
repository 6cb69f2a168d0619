// Interview Gateway
// Implements: résumé section parsing, question generation, answer evaluation, summary report.
// Every operation makes exactly one model call through llm_client::ChatModel.

pub mod evaluation;
pub mod handlers;
pub mod prompts;
pub mod questions;
pub mod report;
pub mod resume_parser;
pub mod validation;
