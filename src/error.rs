//! Error types for the Shift Pay Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for the conditions that can occur at the boundaries of the engine:
//! parsing clock input, editing shifts, and loading pay rules.
//!
//! An unparseable hourly rate is deliberately absent here: it is
//! substituted with zero pay rather than reported.

use thiserror::Error;

/// The main error type for the Shift Pay Engine.
///
/// # Example
///
/// ```
/// use shift_pay_engine::error::EngineError;
///
/// let error = EngineError::ShiftNotFound { shift_id: 3 };
/// assert_eq!(error.to_string(), "Shift not found: 3");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A clock time string was neither blank nor a valid `H:MM`/`HH:MM` time.
    #[error("Invalid clock time '{value}': {message}")]
    InvalidClockTime {
        /// The rejected input.
        value: String,
        /// A description of the parse failure.
        message: String,
    },

    /// No shift exists with the given id.
    #[error("Shift not found: {shift_id}")]
    ShiftNotFound {
        /// The id that was looked up.
        shift_id: usize,
    },

    /// The shift exists but has no attendance at the given index.
    #[error("Attendance {index} not found in shift {shift_id}")]
    AttendanceNotFound {
        /// The id of the shift.
        shift_id: usize,
        /// The attendance index that was out of range.
        index: usize,
    },

    /// A report was requested for a collection without shifts.
    #[error("No shifts to report")]
    EmptyCollection,

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Pay rules parsed but are not usable.
    #[error("Invalid pay rules: {message}")]
    InvalidRules {
        /// What is wrong with the rules.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_clock_time_displays_value_and_message() {
        let error = EngineError::InvalidClockTime {
            value: "25:00".to_string(),
            message: "input is out of range".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid clock time '25:00': input is out of range"
        );
    }

    #[test]
    fn test_attendance_not_found_displays_shift_and_index() {
        let error = EngineError::AttendanceNotFound {
            shift_id: 1,
            index: 4,
        };
        assert_eq!(error.to_string(), "Attendance 4 not found in shift 1");
    }

    #[test]
    fn test_empty_collection_display() {
        assert_eq!(EngineError::EmptyCollection.to_string(), "No shifts to report");
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/pay_rules.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/pay_rules.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_rules_displays_message() {
        let error = EngineError::InvalidRules {
            message: "night windows overlap".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid pay rules: night windows overlap");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_shift_not_found() -> EngineResult<()> {
            Err(EngineError::ShiftNotFound { shift_id: 0 })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_shift_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
