use thiserror::Error;

/// Selection gate failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("please select at least one country")]
    EmptySelection,
    #[error("required column '{column}' is missing from the dataset")]
    MissingColumn { column: String },
}

/// Everything that can end a render pass.
///
/// An empty subset is not an error: charts come back empty and the map is
/// skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DashboardError {
    #[error("please select at least one country")]
    EmptySelection,
    #[error("required column '{column}' is missing from the dataset")]
    MissingColumn { column: String },
    #[error("connection error: {reason}")]
    Connectivity { reason: String },
    #[error("data error: {message}")]
    Data { message: String },
}

impl From<ValidationError> for DashboardError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::EmptySelection => Self::EmptySelection,
            ValidationError::MissingColumn { column } => Self::MissingColumn { column },
        }
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_converts() {
        let err: DashboardError = ValidationError::MissingColumn {
            column: "total_confirmed".to_string(),
        }
        .into();
        assert_eq!(
            err,
            DashboardError::MissingColumn {
                column: "total_confirmed".to_string()
            }
        );
        assert_eq!(
            err.to_string(),
            "required column 'total_confirmed' is missing from the dataset"
        );
    }

    #[test]
    fn connectivity_message_carries_reason() {
        let err = DashboardError::Connectivity {
            reason: "connection refused".to_string(),
        };
        assert_eq!(err.to_string(), "connection error: connection refused");
    }
}
