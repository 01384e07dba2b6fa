use crate::domain::model::StudentId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("A student with ID {id} already exists.")]
    DuplicateId { id: StudentId },

    #[error("Student with ID {id} not found.")]
    NotFound { id: StudentId },

    #[error("Grade must be between 0 and 100.")]
    GradeOutOfRange { grade: f64 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Roster,
    Grade,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl RosterError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RosterError::DuplicateId { .. } | RosterError::NotFound { .. } => ErrorCategory::Roster,
            RosterError::GradeOutOfRange { .. } => ErrorCategory::Grade,
            RosterError::ConfigError { .. }
            | RosterError::ConfigValidationError { .. }
            | RosterError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            RosterError::IoError(_) | RosterError::SerializationError(_) => ErrorCategory::System,
        }
    }

    /// Roster and grade errors are reported and skipped, never fatal.
    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Roster | ErrorCategory::Grade => ErrorSeverity::Low,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn is_recoverable(&self) -> bool {
        self.severity() == ErrorSeverity::Low
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RosterError::IoError(e) => format!("Could not read or write a file: {}", e),
            RosterError::SerializationError(e) => format!("Could not encode output: {}", e),
            RosterError::ConfigError { message } => format!("Invalid script: {}", message),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            RosterError::DuplicateId { .. } => "Use a different ID for the new student",
            RosterError::NotFound { .. } => "Add the student before viewing or grading it",
            RosterError::GradeOutOfRange { .. } => "Submit a grade between 0 and 100",
            RosterError::IoError(_) => "Check that the script path exists and is readable",
            RosterError::SerializationError(_) => "Retry with --format text",
            RosterError::ConfigError { .. } | RosterError::ConfigValidationError { .. } => {
                "Check the script against the documented TOML layout"
            }
            RosterError::InvalidConfigValueError { .. } => "Correct the highlighted value and rerun",
        }
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_errors_are_recoverable() {
        assert!(RosterError::DuplicateId { id: StudentId(1) }.is_recoverable());
        assert!(RosterError::NotFound { id: StudentId(3) }.is_recoverable());
        assert!(RosterError::GradeOutOfRange { grade: 101.0 }.is_recoverable());
    }

    #[test]
    fn test_config_errors_are_fatal() {
        let err = RosterError::ConfigError {
            message: "bad".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_domain_messages() {
        assert_eq!(
            RosterError::DuplicateId { id: StudentId(1) }.to_string(),
            "A student with ID 1 already exists."
        );
        assert_eq!(
            RosterError::NotFound { id: StudentId(3) }.to_string(),
            "Student with ID 3 not found."
        );
        assert_eq!(
            RosterError::GradeOutOfRange { grade: -5.0 }.to_string(),
            "Grade must be between 0 and 100."
        );
    }
}
