//! Kinematics-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors raised by the kinematics core.
///
/// These indicate a broken invariant upstream rather than bad user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KinematicsError {
    /// A sampled signal and its timestamps have different lengths.
    #[error("shape mismatch: {values} values but {timestamps} timestamps")]
    ShapeMismatch { values: usize, timestamps: usize },
}

impl KinematicsError {
    pub fn shape_mismatch(values: usize, timestamps: usize) -> Self {
        KinematicsError::ShapeMismatch { values, timestamps }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            KinematicsError::ShapeMismatch { .. } => ErrorCode::ShapeMismatch,
        }
    }
}

impl From<KinematicsError> for DomainError {
    fn from(err: KinematicsError) -> Self {
        let code = err.code();
        match err {
            KinematicsError::ShapeMismatch { values, timestamps } => {
                DomainError::new(code, err.to_string())
                    .with_detail("values", values.to_string())
                    .with_detail("timestamps", timestamps.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_mismatch_displays_lengths() {
        let err = KinematicsError::shape_mismatch(3, 4);
        assert_eq!(err.to_string(), "shape mismatch: 3 values but 4 timestamps");
    }

    #[test]
    fn shape_mismatch_converts_to_domain_error() {
        let err: DomainError = KinematicsError::shape_mismatch(2, 5).into();
        assert_eq!(err.code, ErrorCode::ShapeMismatch);
        assert_eq!(err.details.get("values"), Some(&"2".to_string()));
        assert_eq!(err.details.get("timestamps"), Some(&"5".to_string()));
    }
}
