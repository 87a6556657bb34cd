use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortfolioError {
    #[error("Template unavailable: {location}")]
    TemplateUnavailable { location: String },

    #[error("Unknown template mode: '{mode}' (expected 'basic' or 'fancy')")]
    InvalidSpec { mode: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error in '{field}': {message}")]
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
    Template,
    Configuration,
    Io,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl PortfolioError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PortfolioError::TemplateUnavailable { .. } | PortfolioError::InvalidSpec { .. } => {
                ErrorCategory::Template
            }
            PortfolioError::ConfigValidationError { .. }
            | PortfolioError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            PortfolioError::IoError(_) => ErrorCategory::Io,
            PortfolioError::SerializationError(_) | PortfolioError::CsvError(_) => {
                ErrorCategory::Data
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Template => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            PortfolioError::TemplateUnavailable { location } => format!(
                "Check that '{}' exists and is readable, or drop --template-file to use the built-in layout",
                location
            ),
            PortfolioError::InvalidSpec { .. } => {
                "Use one of the built-in template modes: basic, fancy".to_string()
            }
            PortfolioError::IoError(_) => {
                "Check file permissions and that the output directory is writable".to_string()
            }
            PortfolioError::SerializationError(_) => {
                "Check that the JSON profile file is well-formed".to_string()
            }
            PortfolioError::CsvError(_) => {
                "The projects CSV needs a header row: title,description,link".to_string()
            }
            PortfolioError::ConfigValidationError { field, .. }
            | PortfolioError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' in your configuration", field)
            }
        }
    }

    /// Process exit code for a failed run.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PortfolioError::TemplateUnavailable { location } => {
                format!("Could not load the template at '{}'", location)
            }
            PortfolioError::InvalidSpec { mode } => {
                format!("'{}' is not a known template", mode)
            }
            PortfolioError::IoError(e) => format!("File operation failed: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PortfolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_errors_are_medium_severity() {
        let err = PortfolioError::TemplateUnavailable {
            location: "missing.html".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Template);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert!(err.recovery_suggestion().contains("missing.html"));
    }

    #[test]
    fn test_invalid_spec_message_names_mode() {
        let err = PortfolioError::InvalidSpec {
            mode: "shiny".to_string(),
        };
        assert!(err.to_string().contains("shiny"));
        assert!(err.user_friendly_message().contains("shiny"));
    }

    #[test]
    fn test_io_errors_are_critical() {
        let err: PortfolioError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.exit_code(), 3);
    }
}
