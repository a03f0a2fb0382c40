use thiserror::Error;

pub const FIELD_TOO_LONG_MESSAGE: &str =
    "One or more fields exceed the maximum allowed length. Please reformat them.";

pub const MISSING_REQUIRED_FIELD_MESSAGE: &str =
    "One or more required fields are missing or empty. Please provide values for all required fields.";

#[derive(Error, Debug)]
pub enum ImpactError {
    #[error("One or more fields exceed the maximum allowed length. Please reformat them.")]
    FieldTooLong {
        field: &'static str,
        max_length: usize,
        actual_length: usize,
    },

    #[error("One or more required fields are missing or empty. Please provide values for all required fields.")]
    MissingRequiredField { field: &'static str },

    #[error("Failed to load acronyms from {path}: {message}")]
    AcronymLoadError { path: String, message: String },

    #[error("No answer given for '{question}' after {attempts} attempts")]
    MissingInput { question: String, attempts: usize },

    #[error("Input closed before all questions were answered")]
    InputClosed,

    #[error("Clipboard error: {message}")]
    ClipboardError { message: String },

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

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Pattern error: {0}")]
    PatternError(#[from] regex::Error),
}

impl ImpactError {
    /// True for the two rejections produced while formatting a statement.
    pub fn is_statement_error(&self) -> bool {
        matches!(
            self,
            ImpactError::FieldTooLong { .. } | ImpactError::MissingRequiredField { .. }
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ImpactError::FieldTooLong { .. } | ImpactError::MissingRequiredField { .. } => {
                self.to_string()
            }
            ImpactError::AcronymLoadError { path, .. } => {
                format!("Failed to load acronyms.json ({})", path)
            }
            ImpactError::MissingInput { question, .. } => {
                format!("No answer was given for: {}", question)
            }
            ImpactError::InputClosed => "Input ended before the statement was complete".to_string(),
            ImpactError::ClipboardError { .. } => "Could not copy to the clipboard".to_string(),
            ImpactError::ConfigError { .. }
            | ImpactError::ConfigValidationError { .. }
            | ImpactError::InvalidConfigValueError { .. } => {
                format!("Invalid configuration: {}", self)
            }
            ImpactError::IoError(e) => format!("File operation failed: {}", e),
            ImpactError::SerializationError(e) => format!("Could not encode JSON: {}", e),
            ImpactError::PatternError(e) => format!("Internal pattern error: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ImpactError::FieldTooLong { .. } => {
                "Shorten the answer: 125 characters for action and impact, 150 for goal alignment"
            }
            ImpactError::MissingRequiredField { .. } | ImpactError::MissingInput { .. } => {
                "Answer every required question with some text"
            }
            ImpactError::AcronymLoadError { .. } => {
                "Check that the acronyms file exists and is a JSON array of {acronym, description}"
            }
            ImpactError::InputClosed => "Run impactify from an interactive terminal",
            ImpactError::ClipboardError { .. } => {
                "Install pbcopy, wl-copy, xclip or xsel, or choose another export option"
            }
            ImpactError::ConfigError { .. }
            | ImpactError::ConfigValidationError { .. }
            | ImpactError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command line flags"
            }
            ImpactError::IoError(_) => "Check that the output directory is writable",
            ImpactError::SerializationError(_) | ImpactError::PatternError(_) => {
                "Report this as a bug"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ImpactError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statement_errors_display_compatibility_text() {
        let too_long = ImpactError::FieldTooLong {
            field: "action",
            max_length: 125,
            actual_length: 200,
        };
        let missing = ImpactError::MissingRequiredField {
            field: "specificImpact",
        };

        assert_eq!(too_long.to_string(), FIELD_TOO_LONG_MESSAGE);
        assert_eq!(missing.to_string(), MISSING_REQUIRED_FIELD_MESSAGE);
        assert!(too_long.is_statement_error());
        assert!(missing.is_statement_error());
        assert_eq!(too_long.user_friendly_message(), FIELD_TOO_LONG_MESSAGE);
    }

    #[test]
    fn test_other_errors_are_not_statement_errors() {
        let err = ImpactError::ClipboardError {
            message: "no tool".to_string(),
        };
        assert!(!err.is_statement_error());
        assert!(err.recovery_suggestion().contains("xclip"));
    }
}
