use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("no eligible {slot} course remains for day {} ({constraints})", .day + 1)]
    PoolExhausted {
        /// 0-indexed day at which the pool ran dry.
        day: usize,
        slot: String,
        /// Summary of the active constraints, for the error message.
        constraints: String,
    },

    #[error("include list names unknown course: {name}{hint}")]
    InvalidConstraint { name: String, hint: String },

    #[error("malformed ingredient: {0}")]
    MalformedIngredient(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

pub type Result<T> = std::result::Result<T, PlanError>;
