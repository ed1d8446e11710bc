use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum WorkoutError {
    #[error("unknown workout type code {0:?} (expected one of RUN, WLK, SWM)")]
    InvalidCode(String),

    #[error("{code} expects {expected} fields, got {got}")]
    ArityMismatch {
        code: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("invalid value for {field}: {value} ({reason})")]
    InvalidField {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// Speed divides by duration, so it must be strictly positive.
    #[error("duration must be a positive number of hours, got {0}")]
    InvalidDuration(f64),
}
