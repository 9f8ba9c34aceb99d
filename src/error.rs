//! Domain error types for cron-parse.
//!
//! All parsing errors are defined here using `thiserror`.
//! These errors are converted to user-friendly messages at the CLI boundary.

use thiserror::Error;

/// Errors local to a single cron field token.
///
/// These carry the offending substring but not the field name; the
/// expression parser wraps them in [`CronParseError::Field`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// The text of a `*/n` step is not a positive integer.
    #[error("step '{step}' is not a positive integer")]
    MalformedStep {
        /// The text that failed to parse as a step.
        step: String,
    },

    /// A literal value or range bound is not an integer.
    #[error("'{value}' is not a valid integer")]
    MalformedValue {
        /// The text that failed to parse.
        value: String,
    },

    /// A range whose start is greater than its end.
    #[error("range {start}-{end} is inverted")]
    InvertedRange {
        /// Range start.
        start: u32,
        /// Range end.
        end: u32,
    },

    /// A list value outside the field's bounds (strict mode only).
    #[error("value {value} is outside the allowed range {min}-{max}")]
    OutOfBounds {
        /// The out-of-range value.
        value: u32,
        /// Lower bound of the field.
        min: u32,
        /// Upper bound of the field.
        max: u32,
    },

    /// The field would expand to more values than the tool will print.
    #[error("field expands to {count} values, more than the limit of {limit}")]
    ExpansionTooLarge {
        /// Number of values the field would produce.
        count: u64,
        /// The maximum allowed.
        limit: u64,
    },
}

/// Errors that can occur while parsing a full cron line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CronParseError {
    /// Fewer than five fields plus a command were supplied.
    #[error("Invalid cron string format. Expected 5 fields followed by a command.")]
    InvalidFormat {
        /// Number of whitespace-separated tokens actually found.
        found: usize,
    },

    /// One of the five fields failed to expand.
    #[error("invalid {field} field '{token}'")]
    Field {
        /// Human-readable field label (e.g., "day of month").
        field: &'static str,
        /// The raw field token as typed.
        token: String,
        /// What went wrong inside the field.
        #[source]
        source: FieldError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_format_display_matches_diagnostic() {
        let err = CronParseError::InvalidFormat { found: 3 };
        assert_eq!(
            err.to_string(),
            "Invalid cron string format. Expected 5 fields followed by a command."
        );
    }

    #[test]
    fn test_malformed_step_display_includes_text() {
        let err = FieldError::MalformedStep {
            step: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "step 'abc' is not a positive integer");
    }

    #[test]
    fn test_malformed_value_display_includes_text() {
        let err = FieldError::MalformedValue {
            value: "x1".to_string(),
        };
        assert_eq!(err.to_string(), "'x1' is not a valid integer");
    }

    #[test]
    fn test_inverted_range_display() {
        let err = FieldError::InvertedRange { start: 9, end: 3 };
        assert_eq!(err.to_string(), "range 9-3 is inverted");
    }

    #[test]
    fn test_out_of_bounds_display() {
        let err = FieldError::OutOfBounds {
            value: 61,
            min: 0,
            max: 59,
        };
        assert_eq!(
            err.to_string(),
            "value 61 is outside the allowed range 0-59"
        );
    }

    #[test]
    fn test_expansion_too_large_display() {
        let err = FieldError::ExpansionTooLarge {
            count: 4_294_967_296,
            limit: 10_000,
        };
        assert_eq!(
            err.to_string(),
            "field expands to 4294967296 values, more than the limit of 10000"
        );
    }

    #[test]
    fn test_field_error_display_names_field_and_token() {
        let err = CronParseError::Field {
            field: "day of week",
            token: "*/abc".to_string(),
            source: FieldError::MalformedStep {
                step: "abc".to_string(),
            },
        };
        assert_eq!(err.to_string(), "invalid day of week field '*/abc'");
    }

    #[test]
    fn test_field_error_alternate_chain_includes_reason() {
        let err = anyhow::Error::from(CronParseError::Field {
            field: "hour",
            token: "*/0".to_string(),
            source: FieldError::MalformedStep {
                step: "0".to_string(),
            },
        });
        assert_eq!(
            format!("{err:#}"),
            "invalid hour field '*/0': step '0' is not a positive integer"
        );
    }

    #[test]
    fn test_field_error_exposes_source() {
        use std::error::Error as _;

        let err = CronParseError::Field {
            field: "minute",
            token: "1-x".to_string(),
            source: FieldError::MalformedValue {
                value: "x".to_string(),
            },
        };
        let source = err.source().expect("field error should carry a source");
        assert_eq!(source.to_string(), "'x' is not a valid integer");
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CronParseError>();
        assert_send_sync::<FieldError>();
    }
}
