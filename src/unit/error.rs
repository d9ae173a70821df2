use thiserror::Error;

/// Errors raised while validating unit settings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UnitError {
    /// Restart policy outside the supervisor's closed set.
    #[error("{0} is not a valid restart policy")]
    InvalidRestartPolicy(String),
}

impl UnitError {
    /// Get error type string for JSON output
    pub fn error_type(&self) -> &'static str {
        match self {
            UnitError::InvalidRestartPolicy(_) => "invalid_restart_policy",
        }
    }
}
