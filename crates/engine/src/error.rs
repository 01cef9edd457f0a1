//! Conversion error types.
//!
//! Only non-recoverable problems become a `ConversionError`. Anything a
//! resolver can replace with a safe default is reported through the
//! processing metadata instead.

use sheetforge_domain::{DomainError, ResolutionStep};
use thiserror::Error;

/// Error aborting a conversion run.
#[derive(Debug, Error)]
pub enum ConversionError {
    /// The record is missing data the pipeline cannot default.
    #[error("Validation failed in step {step}: {message}")]
    Validation {
        step: ResolutionStep,
        message: String,
    },

    /// The input text is not a character record.
    #[error("Invalid character JSON: {0}")]
    InvalidInput(#[from] serde_json::Error),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl ConversionError {
    pub fn validation(step: ResolutionStep, message: impl Into<String>) -> Self {
        Self::Validation {
            step,
            message: message.into(),
        }
    }

    /// The step that failed, when known.
    pub fn step(&self) -> Option<ResolutionStep> {
        match self {
            Self::Validation { step, .. } => Some(*step),
            Self::InvalidInput(_) => Some(ResolutionStep::ValidateRecord),
            Self::Domain(_) => None,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. } | Self::InvalidInput(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_names_step() {
        let err = ConversionError::validation(ResolutionStep::ValidateRecord, "no class list");
        assert_eq!(err.step(), Some(ResolutionStep::ValidateRecord));
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "Validation failed in step validate_record: no class list"
        );
    }

    #[test]
    fn json_errors_convert() {
        let parse: Result<serde_json::Value, _> = serde_json::from_str("{");
        let err = ConversionError::from(parse.expect_err("truncated input"));
        assert!(matches!(err, ConversionError::InvalidInput(_)));
        assert_eq!(err.step(), Some(ResolutionStep::ValidateRecord));
    }

    #[test]
    fn domain_errors_are_transparent() {
        let err = ConversionError::from(DomainError::validation("bad level"));
        assert_eq!(err.to_string(), "Validation failed: bad level");
        assert_eq!(err.step(), None);
    }
}
