use thiserror::Error;

/// Error taxonomy for the clinic data core.
#[derive(Error, Debug)]
pub enum ClinicError {
    #[error("Validation failed for {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("Invalid time of day: {0}")]
    InvalidTime(String),

    #[error("Data source unavailable: {reason}")]
    DataUnavailable { reason: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl ClinicError {
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ClinicError::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
