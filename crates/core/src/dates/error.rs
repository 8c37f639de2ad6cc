use thiserror::Error;

/// Errors that can occur during date arithmetic.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("Date out of range after shifting by {amount} {unit}")]
    OutOfRange { amount: i64, unit: &'static str },
}

/// Errors that can occur when reducing an action over the event list.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReducerError {
    #[error("Cannot create an event date from an empty list")]
    EmptyState,
    #[error(transparent)]
    Date(#[from] DateError),
}

/// Errors that can occur when converting to or from the serialized form.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SerializationError {
    #[error("Invalid ISO-8601 date for {field}: {value}")]
    InvalidDate { field: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_error_display() {
        let error = DateError::OutOfRange {
            amount: 3,
            unit: "months",
        };
        assert_eq!(
            error.to_string(),
            "Date out of range after shifting by 3 months"
        );
    }

    #[test]
    fn test_reducer_error_display() {
        assert_eq!(
            ReducerError::EmptyState.to_string(),
            "Cannot create an event date from an empty list"
        );

        let wrapped: ReducerError = DateError::OutOfRange {
            amount: -2,
            unit: "days",
        }
        .into();
        assert_eq!(
            wrapped.to_string(),
            "Date out of range after shifting by -2 days"
        );
    }

    #[test]
    fn test_serialization_error_display() {
        let error = SerializationError::InvalidDate {
            field: "startDate",
            value: "tomorrow".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid ISO-8601 date for startDate: tomorrow"
        );
    }
}
