//! Error types shared across the domain operations.
//!
//! All variants are deterministic input-validation failures except
//! [`GrowthError::Calculator`], which wraps an opaque upstream failure from the
//! external Z-score calculator and is propagated to the caller unchanged.

/// Errors produced by classification, screening evaluation and report assembly.
#[derive(Debug, thiserror::Error)]
pub enum GrowthError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("unrecognised growth indicator: {0}")]
    InvalidIndicator(String),
    #[error("z-score must be a finite number, got {0}")]
    InvalidValue(f64),
    #[error("expected {expected} answers for the {bracket}-month bracket, got {actual}")]
    AnswerCountMismatch {
        bracket: u32,
        expected: usize,
        actual: usize,
    },
    #[error("no screening bracket defined for age {0} months")]
    NoBracketForAge(u32),
    #[error("inconsistent report: {0}")]
    InconsistentReport(String),
    #[error("growth calculator failure: {0}")]
    Calculator(String),
}

pub type GrowthResult<T> = std::result::Result<T, GrowthError>;
