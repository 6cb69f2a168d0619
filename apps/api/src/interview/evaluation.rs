//! Answer evaluation — scores a candidate answer 1–10 via the model.

use serde::Deserialize;
use serde_json::{json, Map, Value};
use tracing::{debug, info};

use crate::errors::AppError;
use crate::interview::prompts::EVALUATE_ANSWER_PROMPT;
use crate::interview::validation::{join_tech_stack, validate_tech_stack};
use crate::llm_client::normalize::normalize_json_reply;
use crate::llm_client::prompts::render;
use crate::llm_client::{default_model, ChatModel};

#[derive(Debug, Deserialize)]
pub struct AnswerEvaluationRequest {
    pub question: String,
    pub answer: String,
    pub question_type: String,
    pub role: String,
    pub tech_stack: Vec<String>,
    #[serde(default = "default_model")]
    pub model: String,
}

/// Returned when the model's reply is not a JSON object.
pub fn fallback_evaluation() -> Map<String, Value> {
    let mut map = Map::new();
    map.insert("score".to_string(), json!(5));
    map.insert(
        "feedback".to_string(),
        json!("Unable to provide specific feedback"),
    );
    map.insert("areas_to_probe".to_string(), json!(""));
    map
}

pub fn build_prompt(request: &AnswerEvaluationRequest) -> String {
    render(
        EVALUATE_ANSWER_PROMPT,
        &[
            ("role", request.role.as_str()),
            ("question_type", request.question_type.as_str()),
            ("question", request.question.as_str()),
            ("answer", request.answer.as_str()),
            ("tech_stack", join_tech_stack(&request.tech_stack).as_str()),
        ],
    )
}

/// The decoded object is returned as the model wrote it; callers read
/// `score`, `feedback` and `areas_to_probe` with their own defaults.
pub async fn evaluate_answer(
    llm: &dyn ChatModel,
    request: &AnswerEvaluationRequest,
) -> Result<Map<String, Value>, AppError> {
    validate_tech_stack(&request.tech_stack)?;
    info!(
        "Evaluating {} answer (model: {})",
        request.question_type, request.model
    );

    let response = llm.prompt(&request.model, &build_prompt(request)).await?;
    Ok(evaluation_from_reply(response.text()))
}

pub fn evaluation_from_reply(reply: &str) -> Map<String, Value> {
    normalize_json_reply(reply).unwrap_or_else(|| {
        debug!("Evaluation reply was not a JSON object; using fallback");
        fallback_evaluation()
    })
}
