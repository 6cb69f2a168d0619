//! Axum route handlers for the Interview API.

use axum::{extract::State, Json};
use serde_json::{Map, Value};

use crate::errors::AppError;
use crate::interview::evaluation::{evaluate_answer, AnswerEvaluationRequest};
use crate::interview::questions::{
    generate_cs_fundamentals_question, generate_dsa_question, generate_followup_question,
    generate_introduction_question, generate_project_question, generate_technical_question,
    CsFundamentalsQuestionRequest, DsaQuestionRequest, FollowupQuestionRequest,
    IntroductionQuestionRequest, ProjectQuestionRequest, QuestionResponse,
    TechnicalQuestionRequest,
};
use crate::interview::report::{generate_summary_report, SummaryReport, SummaryReportRequest};
use crate::interview::resume_parser::{
    parse_resume_section, ParseSectionRequest, ParseSectionResponse,
};
use crate::state::AppState;

/// POST /api/parse_resume_section
pub async fn handle_parse_resume_section(
    State(state): State<AppState>,
    Json(request): Json<ParseSectionRequest>,
) -> Result<Json<ParseSectionResponse>, AppError> {
    Ok(Json(parse_resume_section(state.llm.as_ref(), &request).await?))
}

/// POST /api/generate_introduction_question
pub async fn handle_introduction_question(
    State(state): State<AppState>,
    Json(request): Json<IntroductionQuestionRequest>,
) -> Result<Json<QuestionResponse>, AppError> {
    Ok(Json(
        generate_introduction_question(state.llm.as_ref(), &request).await?,
    ))
}

/// POST /api/generate_project_question
pub async fn handle_project_question(
    State(state): State<AppState>,
    Json(request): Json<ProjectQuestionRequest>,
) -> Result<Json<QuestionResponse>, AppError> {
    Ok(Json(
        generate_project_question(state.llm.as_ref(), &request).await?,
    ))
}

/// POST /api/generate_technical_question
pub async fn handle_technical_question(
    State(state): State<AppState>,
    Json(request): Json<TechnicalQuestionRequest>,
) -> Result<Json<QuestionResponse>, AppError> {
    Ok(Json(
        generate_technical_question(state.llm.as_ref(), &request).await?,
    ))
}

/// POST /api/generate_followup_question
pub async fn handle_followup_question(
    State(state): State<AppState>,
    Json(request): Json<FollowupQuestionRequest>,
) -> Result<Json<QuestionResponse>, AppError> {
    Ok(Json(
        generate_followup_question(state.llm.as_ref(), &request).await?,
    ))
}

/// POST /api/generate_cs_fundamentals_question
pub async fn handle_cs_fundamentals_question(
    State(state): State<AppState>,
    Json(request): Json<CsFundamentalsQuestionRequest>,
) -> Result<Json<QuestionResponse>, AppError> {
    Ok(Json(
        generate_cs_fundamentals_question(state.llm.as_ref(), &request).await?,
    ))
}

/// POST /api/generate_dsa_question
///
/// `raw_data` is present only when the model returned a decodable object.
pub async fn handle_dsa_question(
    State(state): State<AppState>,
    Json(request): Json<DsaQuestionRequest>,
) -> Result<Json<QuestionResponse>, AppError> {
    Ok(Json(generate_dsa_question(state.llm.as_ref(), &request).await?))
}

/// POST /api/evaluate_answer
///
/// Always 200 once the model answers; undecodable replies become the fixed fallback.
pub async fn handle_evaluate_answer(
    State(state): State<AppState>,
    Json(request): Json<AnswerEvaluationRequest>,
) -> Result<Json<Map<String, Value>>, AppError> {
    Ok(Json(evaluate_answer(state.llm.as_ref(), &request).await?))
}

/// POST /api/generate_summary_report
pub async fn handle_summary_report(
    State(state): State<AppState>,
    Json(request): Json<SummaryReportRequest>,
) -> Result<Json<SummaryReport>, AppError> {
    Ok(Json(
        generate_summary_report(state.llm.as_ref(), request).await?,
    ))
}
