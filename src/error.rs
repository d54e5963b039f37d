// File: src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("offset must be within [0, 80] days before Easter, got {offset}")]
    OffsetOutOfRange { offset: i64 },

    #[error("year {year} is outside the tabulated range of its Easter cycle slot")]
    YearOutOfRange { year: i32 },

    #[error("failed to expand recurrence rule '{rule}': {message}")]
    RuleExpansion { rule: String, message: String },

    #[error("expanded occurrences for window {index} diverge from the computed holiday dates")]
    RuleMismatch { index: usize },
}
