//! Resume section parser — asks the model to turn one free-text résumé
//! section into a JSON array and hands the reply back untouched.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::interview::prompts::{
    EDUCATION_FORMAT, PARSE_SECTION_PROMPT, PROJECTS_FORMAT, UNKNOWN_SECTION_FORMAT,
    WORK_EXPERIENCE_FORMAT,
};
use crate::llm_client::prompts::{render, JSON_ONLY_INSTRUCTION};
use crate::llm_client::{default_model, ChatModel};

#[derive(Debug, Deserialize)]
pub struct ParseSectionRequest {
    pub section_text: String,
    pub section_type: String,
    #[serde(default = "default_model")]
    pub model: String,
}

/// `result` is the model's raw text. It is expected to be a JSON array but is
/// not validated; callers decode it themselves.
#[derive(Debug, Serialize)]
pub struct ParseSectionResponse {
    pub result: String,
}

/// Shape hint for a section type. Unknown types get an empty-array hint
/// instead of an error.
pub fn output_format(section_type: &str) -> &'static str {
    match section_type {
        "education" => EDUCATION_FORMAT,
        "projects" => PROJECTS_FORMAT,
        "work_experience" => WORK_EXPERIENCE_FORMAT,
        _ => UNKNOWN_SECTION_FORMAT,
    }
}

pub fn build_prompt(section_type: &str, section_text: &str) -> String {
    render(
        PARSE_SECTION_PROMPT,
        &[
            ("section_type", section_type),
            ("section_text", section_text),
            ("output_format", output_format(section_type)),
            ("json_only", JSON_ONLY_INSTRUCTION),
        ],
    )
}

pub async fn parse_resume_section(
    llm: &dyn ChatModel,
    request: &ParseSectionRequest,
) -> Result<ParseSectionResponse, AppError> {
    info!(
        "Parse request received for section: {} (model: {})",
        request.section_type, request.model
    );

    let prompt = build_prompt(&request.section_type, &request.section_text);
    let response = llm.prompt(&request.model, &prompt).await?;

    Ok(ParseSectionResponse {
        result: response.text().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::StubModel;
    use crate::llm_client::DEFAULT_MODEL;

    fn request(section_type: &str, model: Option<&str>) -> ParseSectionRequest {
        let mut body = serde_json::json!({
            "section_text": "B.Tech CSE, IIT Delhi, 2021, GPA 8.9",
            "section_type": section_type,
        });
        if let Some(model) = model {
            body["model"] = model.into();
        }
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_known_section_types_have_shape_hints() {
        assert!(output_format("education").contains("\"institution\""));
        assert!(output_format("projects").contains("\"technologies\""));
        assert!(output_format("work_experience").contains("\"company\""));
    }

    #[test]
    fn test_unknown_section_type_falls_back_to_empty_array() {
        assert_eq!(output_format("unknown_section"), "[]");
        assert_eq!(output_format("Education"), "[]");
    }

    #[test]
    fn test_prompt_embeds_text_type_and_hint() {
        let prompt = build_prompt("education", "MIT, 2019");
        assert!(prompt.contains("following education section"));
        assert!(prompt.contains("\"\"\"\nMIT, 2019\n\"\"\""));
        assert!(prompt.contains(EDUCATION_FORMAT));
        assert!(prompt.ends_with(JSON_ONLY_INSTRUCTION));
    }

    #[test]
    fn test_model_defaults_when_omitted() {
        assert_eq!(request("education", None).model, DEFAULT_MODEL);
        assert_eq!(request("education", Some("llama3:8b")).model, "llama3:8b");
    }

    #[tokio::test]
    async fn test_unknown_section_returns_raw_reply() {
        let reply = "  Here you go: [{\"x\": 1}]\n";
        let llm = StubModel::replying(reply);

        let response = parse_resume_section(&llm, &request("unknown_section", None))
            .await
            .unwrap();

        assert_eq!(response.result, reply);
        assert!(llm.only_prompt().contains("Return JSON Format:\n[]\n"));
    }

    #[tokio::test]
    async fn test_supplied_model_is_forwarded() {
        let llm = StubModel::replying("[]");
        parse_resume_section(&llm, &request("projects", Some("qwen2:7b")))
            .await
            .unwrap();
        assert_eq!(llm.calls()[0].model, "qwen2:7b");
    }
}
