//! Interview question generation.
//!
//! Five free-text question kinds (introduction, projects, technical, followup,
//! cs_fundamentals) share one path: render template → one model call → trim.
//! DSA questions ask for a JSON object instead and fall back to the raw text
//! when the reply does not decode.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::errors::AppError;
use crate::interview::prompts::{
    CS_FUNDAMENTALS_QUESTION_PROMPT, DSA_QUESTION_PROMPT, FOLLOWUP_QUESTION_PROMPT,
    INTRODUCTION_QUESTION_PROMPT, PROJECT_QUESTION_PROMPT, TECHNICAL_QUESTION_PROMPT,
};
use crate::interview::validation::{join_tech_stack, validate_tech_stack};
use crate::llm_client::normalize::{normalize_json_reply, strip_json_fences, text_or};
use crate::llm_client::prompts::{pretty_json, render, QUESTION_ONLY_INSTRUCTION};
use crate::llm_client::{default_model, ChatModel};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// The `type` tag on every question response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    Introduction,
    Projects,
    Technical,
    Followup,
    CsFundamentals,
    Dsa,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionResponse {
    pub question: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    /// Decoded model object; DSA questions only, omitted when decoding failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_data: Option<Map<String, Value>>,
}

impl QuestionResponse {
    fn text(question: String, kind: QuestionKind) -> Self {
        Self {
            question,
            kind,
            raw_data: None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct IntroductionQuestionRequest {
    pub candidate_name: String,
    pub role: String,
    #[serde(default = "default_model")]
    pub model: String,
}

#[derive(Debug, Deserialize)]
pub struct ProjectQuestionRequest {
    pub resume_data: Map<String, Value>,
    #[serde(default = "default_model")]
    pub model: String,
}

#[derive(Debug, Deserialize)]
pub struct TechnicalQuestionRequest {
    pub resume_data: Map<String, Value>,
    pub tech_stack: Vec<String>,
    pub role: String,
    #[serde(default = "default_model")]
    pub model: String,
}

#[derive(Debug, Deserialize)]
pub struct FollowupQuestionRequest {
    pub previous_question: String,
    pub answer: String,
    #[serde(default = "default_model")]
    pub model: String,
}

#[derive(Debug, Deserialize)]
pub struct CsFundamentalsQuestionRequest {
    pub role: String,
    pub tech_stack: Vec<String>,
    #[serde(default = "default_model")]
    pub model: String,
}

#[derive(Debug, Deserialize)]
pub struct DsaQuestionRequest {
    #[serde(default = "default_model")]
    pub model: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Operations
// ────────────────────────────────────────────────────────────────────────────

pub async fn generate_introduction_question(
    llm: &dyn ChatModel,
    request: &IntroductionQuestionRequest,
) -> Result<QuestionResponse, AppError> {
    let prompt = render(
        INTRODUCTION_QUESTION_PROMPT,
        &[
            ("candidate_name", request.candidate_name.as_str()),
            ("role", request.role.as_str()),
            ("question_only", QUESTION_ONLY_INSTRUCTION),
        ],
    );
    ask(llm, &request.model, &prompt, QuestionKind::Introduction).await
}

pub async fn generate_project_question(
    llm: &dyn ChatModel,
    request: &ProjectQuestionRequest,
) -> Result<QuestionResponse, AppError> {
    let resume_json = resume_to_prompt_json(&request.resume_data)?;
    let prompt = render(
        PROJECT_QUESTION_PROMPT,
        &[
            ("resume_json", resume_json.as_str()),
            ("question_only", QUESTION_ONLY_INSTRUCTION),
        ],
    );
    ask(llm, &request.model, &prompt, QuestionKind::Projects).await
}

pub async fn generate_technical_question(
    llm: &dyn ChatModel,
    request: &TechnicalQuestionRequest,
) -> Result<QuestionResponse, AppError> {
    validate_tech_stack(&request.tech_stack)?;

    let resume_json = resume_to_prompt_json(&request.resume_data)?;
    let prompt = render(
        TECHNICAL_QUESTION_PROMPT,
        &[
            ("role", request.role.as_str()),
            ("tech_stack", join_tech_stack(&request.tech_stack).as_str()),
            ("resume_json", resume_json.as_str()),
            ("question_only", QUESTION_ONLY_INSTRUCTION),
        ],
    );
    ask(llm, &request.model, &prompt, QuestionKind::Technical).await
}

pub async fn generate_followup_question(
    llm: &dyn ChatModel,
    request: &FollowupQuestionRequest,
) -> Result<QuestionResponse, AppError> {
    let prompt = render(
        FOLLOWUP_QUESTION_PROMPT,
        &[
            ("previous_question", request.previous_question.as_str()),
            ("answer", request.answer.as_str()),
            ("question_only", QUESTION_ONLY_INSTRUCTION),
        ],
    );
    ask(llm, &request.model, &prompt, QuestionKind::Followup).await
}

pub async fn generate_cs_fundamentals_question(
    llm: &dyn ChatModel,
    request: &CsFundamentalsQuestionRequest,
) -> Result<QuestionResponse, AppError> {
    validate_tech_stack(&request.tech_stack)?;

    let prompt = render(
        CS_FUNDAMENTALS_QUESTION_PROMPT,
        &[
            ("role", request.role.as_str()),
            ("tech_stack", join_tech_stack(&request.tech_stack).as_str()),
            ("question_only", QUESTION_ONLY_INSTRUCTION),
        ],
    );
    ask(llm, &request.model, &prompt, QuestionKind::CsFundamentals).await
}

pub async fn generate_dsa_question(
    llm: &dyn ChatModel,
    request: &DsaQuestionRequest,
) -> Result<QuestionResponse, AppError> {
    info!("Generating dsa question (model: {})", request.model);

    let response = llm.prompt(&request.model, DSA_QUESTION_PROMPT).await?;
    Ok(dsa_question_from_reply(response.text()))
}

/// Composes the question text from a decoded reply, or returns the
/// fence-stripped reply as the question when it does not decode.
pub fn dsa_question_from_reply(reply: &str) -> QuestionResponse {
    match normalize_json_reply(reply) {
        Some(data) => {
            let question = format!(
                "{}\n\nExample: {}\n\nTopic: {}",
                text_or(&data, "question", "DSA Problem"),
                text_or(&data, "example", ""),
                text_or(&data, "topic", "Algorithm"),
            );
            QuestionResponse {
                question,
                kind: QuestionKind::Dsa,
                raw_data: Some(data),
            }
        }
        None => {
            debug!("DSA reply was not a JSON object; returning raw text");
            QuestionResponse::text(strip_json_fences(reply).to_string(), QuestionKind::Dsa)
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

async fn ask(
    llm: &dyn ChatModel,
    model: &str,
    prompt: &str,
    kind: QuestionKind,
) -> Result<QuestionResponse, AppError> {
    info!("Generating {kind:?} question (model: {model})");

    let response = llm.prompt(model, prompt).await?;
    Ok(QuestionResponse::text(
        response.text().trim().to_string(),
        kind,
    ))
}

fn resume_to_prompt_json(resume_data: &Map<String, Value>) -> Result<String, AppError> {
    pretty_json(resume_data)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize resume_data: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::StubModel;
    use crate::llm_client::DEFAULT_MODEL;
    use serde_json::json;

    fn resume() -> Map<String, Value> {
        match json!({
            "name": "Asha Rao",
            "projects": [
                {"name": "raft-kv", "description": "Replicated KV store", "technologies": ["Rust", "Raft"]}
            ]
        }) {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    fn stack(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_question_kind_serializes_snake_case() {
        let tags: Vec<Value> = [
            QuestionKind::Introduction,
            QuestionKind::Projects,
            QuestionKind::Technical,
            QuestionKind::Followup,
            QuestionKind::CsFundamentals,
            QuestionKind::Dsa,
        ]
        .iter()
        .map(|k| serde_json::to_value(k).unwrap())
        .collect();
        assert_eq!(
            tags,
            vec![
                json!("introduction"),
                json!("projects"),
                json!("technical"),
                json!("followup"),
                json!("cs_fundamentals"),
                json!("dsa")
            ]
        );
    }

    #[test]
    fn test_text_question_omits_raw_data() {
        let response = QuestionResponse::text("Why Rust?".to_string(), QuestionKind::Technical);
        assert_eq!(
            serde_json::to_value(response).unwrap(),
            json!({"question": "Why Rust?", "type": "technical"})
        );
    }

    #[test]
    fn test_every_request_defaults_model() {
        let intro: IntroductionQuestionRequest =
            serde_json::from_value(json!({"candidate_name": "Asha", "role": "SRE"})).unwrap();
        let followup: FollowupQuestionRequest =
            serde_json::from_value(json!({"previous_question": "q", "answer": "a"})).unwrap();
        let dsa: DsaQuestionRequest = serde_json::from_value(json!({})).unwrap();
        let cs: CsFundamentalsQuestionRequest =
            serde_json::from_value(json!({"role": "SRE", "tech_stack": ["Go"]})).unwrap();
        assert_eq!(intro.model, DEFAULT_MODEL);
        assert_eq!(followup.model, DEFAULT_MODEL);
        assert_eq!(dsa.model, DEFAULT_MODEL);
        assert_eq!(cs.model, DEFAULT_MODEL);
    }

    #[test]
    fn test_resume_data_must_be_a_mapping() {
        let result = serde_json::from_value::<ProjectQuestionRequest>(json!({"resume_data": [1, 2]}));
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_introduction_question_is_trimmed() {
        let llm = StubModel::replying("\n  Tell me about yourself, Asha.  \n");
        let request = IntroductionQuestionRequest {
            candidate_name: "Asha".to_string(),
            role: "Backend Engineer".to_string(),
            model: DEFAULT_MODEL.to_string(),
        };

        let response = generate_introduction_question(&llm, &request).await.unwrap();

        assert_eq!(response.question, "Tell me about yourself, Asha.");
        assert_eq!(response.kind, QuestionKind::Introduction);
        let prompt = llm.only_prompt();
        assert!(prompt.contains("for Asha who is interviewing for a Backend Engineer role"));
        assert!(prompt.ends_with(QUESTION_ONLY_INSTRUCTION));
    }

    #[tokio::test]
    async fn test_project_question_embeds_pretty_resume() {
        let llm = StubModel::replying("How did you handle leader election?");
        let request = ProjectQuestionRequest {
            resume_data: resume(),
            model: "llama3:8b".to_string(),
        };

        let response = generate_project_question(&llm, &request).await.unwrap();

        assert_eq!(response.kind, QuestionKind::Projects);
        let prompt = llm.only_prompt();
        let pretty = serde_json::to_string_pretty(&resume()).unwrap();
        assert!(prompt.contains(&format!("```\n{pretty}\n```")));
        assert_eq!(llm.calls()[0].model, "llama3:8b");
    }

    #[tokio::test]
    async fn test_technical_question_joins_stack() {
        let llm = StubModel::replying("Explain Send vs Sync.");
        let request = TechnicalQuestionRequest {
            resume_data: resume(),
            tech_stack: stack(&["Rust", "Tokio", "PostgreSQL"]),
            role: "Systems Engineer".to_string(),
            model: DEFAULT_MODEL.to_string(),
        };

        let response = generate_technical_question(&llm, &request).await.unwrap();

        assert_eq!(response.kind, QuestionKind::Technical);
        let prompt = llm.only_prompt();
        assert!(prompt.contains("The required tech stack is: Rust, Tokio, PostgreSQL"));
        assert!(prompt.contains("3. Be appropriate for the Systems Engineer role"));
    }

    #[tokio::test]
    async fn test_blank_tech_stack_entry_skips_model_call() {
        let llm = StubModel::replying("unused");
        let request = CsFundamentalsQuestionRequest {
            role: "SRE".to_string(),
            tech_stack: stack(&["Linux", ""]),
            model: DEFAULT_MODEL.to_string(),
        };

        let err = generate_cs_fundamentals_question(&llm, &request)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::UnprocessableEntity(_)));
        assert!(llm.calls().is_empty());
    }

    #[tokio::test]
    async fn test_followup_question_quotes_exchange() {
        let llm = StubModel::replying("What was the p99 before caching?");
        let request = FollowupQuestionRequest {
            previous_question: "How did you cut latency?".to_string(),
            answer: "Added a read-through cache.".to_string(),
            model: DEFAULT_MODEL.to_string(),
        };

        let response = generate_followup_question(&llm, &request).await.unwrap();

        assert_eq!(response.kind, QuestionKind::Followup);
        let prompt = llm.only_prompt();
        assert!(prompt.starts_with("The candidate was asked: \"How did you cut latency?\""));
        assert!(prompt.contains("\"Added a read-through cache.\""));
    }

    #[tokio::test]
    async fn test_model_failure_propagates() {
        let llm = StubModel::failing("connection refused");
        let request = DsaQuestionRequest {
            model: DEFAULT_MODEL.to_string(),
        };

        let err = generate_dsa_question(&llm, &request).await.unwrap_err();

        assert!(matches!(err, AppError::Llm(_)));
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_dsa_reply_composes_question() {
        let reply = r#"```json
{"question": "Reverse a linked list.", "example": "1->2->3 => 3->2->1", "topic": "Linked Lists", "difficulty": "Easy"}
```"#;

        let response = dsa_question_from_reply(reply);

        assert_eq!(
            response.question,
            "Reverse a linked list.\n\nExample: 1->2->3 => 3->2->1\n\nTopic: Linked Lists"
        );
        assert_eq!(response.kind, QuestionKind::Dsa);
        let raw = response.raw_data.unwrap();
        assert_eq!(raw["difficulty"], json!("Easy"));
    }

    #[test]
    fn test_dsa_reply_missing_keys_use_defaults() {
        let response = dsa_question_from_reply("{}");
        assert_eq!(response.question, "DSA Problem\n\nExample: \n\nTopic: Algorithm");
        assert_eq!(response.raw_data, Some(Map::new()));
    }

    #[test]
    fn test_dsa_reply_not_json_returns_stripped_text() {
        let response = dsa_question_from_reply("```\nFind the missing number in 1..n\n```");
        assert_eq!(response.question, "Find the missing number in 1..n");
        assert!(response.raw_data.is_none());
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"question": "Find the missing number in 1..n", "type": "dsa"})
        );
    }
}
