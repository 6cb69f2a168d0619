//! Summary report — score arithmetic plus a model-written assessment.
//!
//! The totals are computed here, never by the model:
//! - `total_score`  = Σ scores
//! - `max_possible` = 10 × (number of scores > 0)
//! - `percentage`   = total_score / max_possible × 100, or 0 when max_possible is 0

use indexmap::IndexMap;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Number, Value};
use tracing::{debug, info};

use crate::errors::AppError;
use crate::interview::prompts::SUMMARY_REPORT_PROMPT;
use crate::interview::validation::validate_tech_stack;
use crate::llm_client::normalize::normalize_json_reply;
use crate::llm_client::prompts::{pretty_json, render};
use crate::llm_client::{default_model, ChatModel};

/// Points available per answered question category.
pub const POINTS_PER_CATEGORY: i64 = 10;

#[derive(Debug, Deserialize)]
pub struct SummaryReportRequest {
    pub candidate_name: String,
    pub role: String,
    pub tech_stack: Vec<String>,
    /// Question category → score, in the order the caller sent them.
    #[serde(deserialize_with = "deserialize_scores")]
    pub scores: IndexMap<String, i64>,
    pub interview_log: Vec<Map<String, Value>>,
    #[serde(default = "default_model")]
    pub model: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreTotals {
    pub total_score: i64,
    pub max_possible: i64,
    pub percentage: f64,
}

/// Accepts integers and integral floats (`7.0`) as scores; `7.5` is rejected.
fn deserialize_scores<'de, D>(deserializer: D) -> Result<IndexMap<String, i64>, D::Error>
where
    D: Deserializer<'de>,
{
    IndexMap::<String, Number>::deserialize(deserializer)?
        .into_iter()
        .map(|(category, score)| match integral_score(&score) {
            Some(value) => Ok((category, value)),
            None => Err(D::Error::custom(format!(
                "scores.{category} must be an integer, got {score}"
            ))),
        })
        .collect()
}

fn integral_score(score: &Number) -> Option<i64> {
    if let Some(value) = score.as_i64() {
        return Some(value);
    }
    let value = score.as_f64()?;
    // `i64::MAX as f64` rounds up to 2^63, hence the exclusive upper bound.
    let in_range = value >= i64::MIN as f64 && value < i64::MAX as f64;
    (value.fract() == 0.0 && in_range).then(|| value as i64)
}

impl ScoreTotals {
    /// Fails with a 422 when the sum does not fit in an `i64`.
    pub fn from_scores<'a>(scores: impl IntoIterator<Item = &'a i64>) -> Result<Self, AppError> {
        let mut total_score: i64 = 0;
        let mut answered: i64 = 0;
        for &score in scores {
            total_score = total_score.checked_add(score).ok_or_else(|| {
                AppError::UnprocessableEntity(
                    "scores total exceeds the supported integer range".to_string(),
                )
            })?;
            answered += i64::from(score > 0);
        }

        let max_possible = answered.saturating_mul(POINTS_PER_CATEGORY);
        let percentage = if max_possible > 0 {
            total_score as f64 / max_possible as f64 * 100.0
        } else {
            0.0
        };
        Ok(Self {
            total_score,
            max_possible,
            percentage,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryReport {
    pub candidate_name: String,
    pub role: String,
    pub tech_stack: Vec<String>,
    pub scores: IndexMap<String, i64>,
    #[serde(flatten)]
    pub totals: ScoreTotals,
    /// Decoded model object, or `fallback_assessment()`.
    pub assessment: Map<String, Value>,
}

/// Assessment used when the model's reply is not a JSON object.
pub fn fallback_assessment() -> Map<String, Value> {
    let mut map = Map::new();
    map.insert(
        "overall_impression".to_string(),
        Value::from("Assessment could not be generated"),
    );
    map.insert("technical_strengths".to_string(), Value::Array(Vec::new()));
    map.insert("areas_for_improvement".to_string(), Value::Array(Vec::new()));
    map.insert("recommendation".to_string(), Value::from("Consider"));
    map
}

pub fn build_prompt(
    request: &SummaryReportRequest,
    totals: &ScoreTotals,
) -> Result<String, AppError> {
    let log_summary = pretty_json(&request.interview_log)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize interview_log: {e}")))?;

    Ok(render(
        SUMMARY_REPORT_PROMPT,
        &[
            ("candidate_name", request.candidate_name.as_str()),
            ("role", request.role.as_str()),
            ("log_summary", log_summary.as_str()),
            ("total_score", totals.total_score.to_string().as_str()),
            ("max_possible", totals.max_possible.to_string().as_str()),
            ("percentage", format!("{:.1}", totals.percentage).as_str()),
        ],
    ))
}

pub async fn generate_summary_report(
    llm: &dyn ChatModel,
    request: SummaryReportRequest,
) -> Result<SummaryReport, AppError> {
    validate_tech_stack(&request.tech_stack)?;

    let totals = ScoreTotals::from_scores(request.scores.values())?;
    info!(
        "Generating summary report for {} ({}/{}, model: {})",
        request.candidate_name, totals.total_score, totals.max_possible, request.model
    );

    let prompt = build_prompt(&request, &totals)?;
    let response = llm.prompt(&request.model, &prompt).await?;
    let assessment = normalize_json_reply(response.text()).unwrap_or_else(|| {
        debug!("Assessment reply was not a JSON object; using fallback");
        fallback_assessment()
    });

    Ok(SummaryReport {
        candidate_name: request.candidate_name,
        role: request.role,
        tech_stack: request.tech_stack,
        scores: request.scores,
        totals,
        assessment,
    })
}
