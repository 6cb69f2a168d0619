use crate::errors::AppError;

/// Rejects blank `tech_stack` entries. An empty list is allowed.
pub fn validate_tech_stack(tech_stack: &[String]) -> Result<(), AppError> {
    match tech_stack.iter().position(|t| t.trim().is_empty()) {
        Some(index) => Err(AppError::UnprocessableEntity(format!(
            "tech_stack[{index}] must be a non-empty string"
        ))),
        None => Ok(()),
    }
}

/// Joins a tech stack the way prompts show it: `Rust, Tokio, Postgres`.
pub fn join_tech_stack(tech_stack: &[String]) -> String {
    tech_stack.join(", ")
}
