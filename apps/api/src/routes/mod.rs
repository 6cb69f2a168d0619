pub mod chat;
pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::interview::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/chat", post(chat::chat_handler))
        // Interview API
        .route(
            "/api/parse_resume_section",
            post(handlers::handle_parse_resume_section),
        )
        .route(
            "/api/generate_introduction_question",
            post(handlers::handle_introduction_question),
        )
        .route(
            "/api/generate_project_question",
            post(handlers::handle_project_question),
        )
        .route(
            "/api/generate_technical_question",
            post(handlers::handle_technical_question),
        )
        .route(
            "/api/generate_followup_question",
            post(handlers::handle_followup_question),
        )
        .route(
            "/api/generate_cs_fundamentals_question",
            post(handlers::handle_cs_fundamentals_question),
        )
        .route(
            "/api/generate_dsa_question",
            post(handlers::handle_dsa_question),
        )
        .route("/api/evaluate_answer", post(handlers::handle_evaluate_answer))
        .route(
            "/api/generate_summary_report",
            post(handlers::handle_summary_report),
        )
        .with_state(state)
}
