//! Planner error types.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors that can occur while planning.
#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("invalid input: {} problem(s), first: {}", .0.len(), first_message(.0))]
    InvalidInput(Vec<ValidationError>),

    #[error("slot ceiling not met: best packing uses {slots} slots, ceiling is {max_slots}")]
    ConstraintUnsatisfiable { slots: usize, max_slots: usize },

    #[error("slot window overflows the calendar at slot {0}")]
    TimeOverflow(usize),

    #[error("config parse error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

fn first_message(errors: &[ValidationError]) -> &str {
    errors.first().map(|e| e.message.as_str()).unwrap_or("none")
}

/// A failed warehouse operation.
#[derive(Debug, Error)]
#[error("warehouse operation {op} failed: {message}")]
pub struct SinkError {
    /// Name of the operation that failed.
    pub op: &'static str,
    /// Backend-provided detail.
    pub message: String,
}

impl SinkError {
    pub fn new(op: &'static str, message: impl Into<String>) -> Self {
        Self {
            op,
            message: message.into(),
        }
    }
}

pub type PlannerResult<T> = Result<T, PlannerError>;
