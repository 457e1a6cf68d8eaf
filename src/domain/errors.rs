use thiserror::Error;

/// Failures raised while logging or summarizing workouts.
///
/// Every variant is recoverable by the user: the application shows the
/// message in a notice and waits for corrected input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Please enter both exercise and duration.")]
    EmptyFields,
    #[error("Duration must be a positive whole number of minutes (got '{0}').")]
    InvalidDuration(String),
    #[error("No workouts logged yet.")]
    EmptySummary,
}

pub type DomainResult<T> = Result<T, DomainError>;
