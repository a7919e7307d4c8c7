/// Error returned when the input slice cannot produce the requested statistic.
///
/// Every variant is an invalid-argument condition: the caller passed data
/// that the operation is not defined for. Nothing is computed partially.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::IsVariant,
)]
pub enum InvalidArgumentError {
    /// The input contained no values at all.
    #[display("the list cannot be empty")]
    EmptyInput,
    /// The input was non-empty but every value was excluded by the filter.
    #[display("no values remain after excluding negative values")]
    NoIncludedValues,
    /// The input had fewer values than the operation needs.
    #[display("the list must contain at least {required} values, got {actual}")]
    InsufficientValues { required: usize, actual: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_distinct() {
        assert_ne!(
            InvalidArgumentError::EmptyInput.to_string(),
            InvalidArgumentError::NoIncludedValues.to_string()
        );
    }

    #[test]
    fn test_insufficient_values_message() {
        let err = InvalidArgumentError::InsufficientValues {
            required: 2,
            actual: 1,
        };
        assert_eq!(
            err.to_string(),
            "the list must contain at least 2 values, got 1"
        );
    }
}
