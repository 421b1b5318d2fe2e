//! Error types for entity-query

use thiserror::Error;

/// Result type alias for builder operations
pub type QbResult<T> = Result<T, QbError>;

/// Error types for query building.
///
/// Building is otherwise total: verbatim clauses (select, joins, group by,
/// having, order by) are never validated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QbError {
    /// The number of `?` placeholders in a filter fragment does not match the
    /// number of values supplied with it.
    #[error(
        "Param count mismatch: {placeholders} placeholder(s) but {values} value(s) in `{fragment}`"
    )]
    ParamCount {
        placeholders: usize,
        values: usize,
        fragment: String,
    },
}

impl QbError {
    /// Create a param count error for a rejected fragment
    pub fn param_count(placeholders: usize, values: usize, fragment: impl Into<String>) -> Self {
        Self::ParamCount {
            placeholders,
            values,
            fragment: fragment.into(),
        }
    }

    /// Check if this is a param count error
    pub fn is_param_count(&self) -> bool {
        matches!(self, Self::ParamCount { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn param_count_message_names_both_counts() {
        let err = QbError::param_count(2, 3, "e.name = ? or e.name = ?");
        assert!(err.is_param_count());
        assert_eq!(
            err.to_string(),
            "Param count mismatch: 2 placeholder(s) but 3 value(s) in `e.name = ? or e.name = ?`"
        );
    }
}
