use thiserror::Error;

/// Raised at the input-normalization boundary when a collaborator hands the
/// engine malformed financials. The engine itself never fails: once inputs
/// pass validation, every snapshot field is finite by construction.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },
    #[error("{field} must be >= 0, got {value}")]
    NegativeAmount { field: &'static str, value: f64 },
    #[error("completion_percentage must be within [0, 100], got {0}")]
    CompletionOutOfRange(f64),
}
