use thiserror::Error;

/// Message shown when not a single client can be served.
pub const NO_DEMANDS_MET: &str = "This executor cannot meet the demands of any client!";

#[derive(Error, Debug)]
pub enum ReportError {
    /// A data source failed. The message is shown to the user as-is.
    #[error("{0}")]
    Fetch(String),

    #[error("{}", NO_DEMANDS_MET)]
    NoDemandsMet,

    #[error("Invalid sort mode '{value}': expected 'distance' or 'reward'")]
    InvalidSortMode { value: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration parse error: {message}")]
    ConfigParse { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ReportError {
    /// Fatal errors abort the program instead of being rendered as the report.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, ReportError::Fetch(_) | ReportError::NoDemandsMet)
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ReportError::Fetch(_) => "Check that both data sources are reachable and return valid JSON",
            ReportError::NoDemandsMet => "Try an executor with more possibilities",
            ReportError::InvalidSortMode { .. } => "Use either 'distance' or 'reward'",
            ReportError::InvalidConfigValue { .. } => "Fix the highlighted configuration value",
            ReportError::ConfigParse { .. } => "Make sure the file is valid TOML with [source] and [report] tables",
            ReportError::Io(_) => "Make sure the configuration file exists and is readable",
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_displays_message_verbatim() {
        let err = ReportError::Fetch("connection refused".to_string());
        assert_eq!(err.to_string(), "connection refused");
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_config_errors_are_fatal() {
        let err = ReportError::InvalidSortMode {
            value: "name".to_string(),
        };
        assert!(err.is_fatal());
        assert!(err.to_string().contains("'name'"));
        assert!(!ReportError::NoDemandsMet.is_fatal());
    }
}
