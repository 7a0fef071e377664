use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("CliError: {0}")]
    Cli(#[from] CliError),
    #[error("ApiError: {0}")]
    Api(#[from] ApiError),
    #[error("ValidationError: {0}")]
    Validation(#[from] ValidationError),
    #[error("StorageError: {0}")]
    Storage(#[from] StorageError),
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Operation '{operation}' is not supported by the e-Stat API v3.0 client")]
    Unsupported { operation: String },
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
}

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("lang must be either [J]apanese or [E]nglish.")]
    InvalidLanguage,
    #[error("Supported format: xml, json, jsonp, or csv.")]
    InvalidFormat,
    #[error("callback option is required when data format is JSONP.")]
    CallbackRequired,
    #[error("Invalid appId: {reason}")]
    InvalidAppId { reason: String },
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Keyring error: {0}")]
    KeyringError(String),
    #[error("File I/O error at {path}: {source}")]
    FileIo {
        path: String,
        source: std::io::Error,
    },
    #[error("Configuration save failed")]
    ConfigSaveFailed,
    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },
    #[error("Configuration directory not found")]
    ConfigDirNotFound,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ErrorSeverity {
    Critical,
    High,
    Medium,
    Low,
}

impl ErrorSeverity {
    pub fn emoji(&self) -> &'static str {
        match self {
            ErrorSeverity::Critical => "🚨",
            ErrorSeverity::High => "❌",
            ErrorSeverity::Medium => "⚠️",
            ErrorSeverity::Low => "ℹ️",
        }
    }
}

impl AppError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::Cli(_) => ErrorSeverity::Medium,
            AppError::Api(api_error) => match api_error {
                ApiError::Unsupported { .. } => ErrorSeverity::Medium,
                ApiError::Request(_) => ErrorSeverity::High,
            },
            AppError::Validation(_) => ErrorSeverity::Medium,
            AppError::Storage(_) => ErrorSeverity::Medium,
        }
    }

    pub fn troubleshooting_hint(&self) -> Option<String> {
        match self {
            AppError::Validation(ValidationError::InvalidAppId { .. }) => {
                Some("'estat-cli auth login' to register a valid appId".to_string())
            }
            AppError::Validation(ValidationError::CallbackRequired) => {
                Some("pass --callback <name> or switch the format away from jsonp".to_string())
            }
            AppError::Api(ApiError::Request(_)) => {
                Some("Check your internet or e-Stat connection and try again".to_string())
            }
            AppError::Storage(StorageError::KeyringError(_)) => {
                Some("Verify the OS keyring is available, or set ESTAT_APP_ID".to_string())
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_error_display() {
        let cli_err = CliError::InvalidArguments("invalid arguments".to_string());
        assert_eq!(
            format!("{}", cli_err),
            "Invalid arguments: invalid arguments"
        );
    }

    #[test]
    fn test_validation_error_display() {
        assert_eq!(
            format!("{}", ValidationError::InvalidLanguage),
            "lang must be either [J]apanese or [E]nglish."
        );
        assert_eq!(
            format!("{}", ValidationError::InvalidFormat),
            "Supported format: xml, json, jsonp, or csv."
        );
        assert_eq!(
            format!("{}", ValidationError::CallbackRequired),
            "callback option is required when data format is JSONP."
        );
    }

    #[test]
    fn test_api_error_display() {
        let api_err = ApiError::Unsupported {
            operation: "postDataset".to_string(),
        };
        assert_eq!(
            format!("{}", api_err),
            "Operation 'postDataset' is not supported by the e-Stat API v3.0 client"
        );
    }

    #[test]
    fn test_app_error_display_validation() {
        let app_err = AppError::Validation(ValidationError::CallbackRequired);
        assert_eq!(
            format!("{}", app_err),
            "ValidationError: callback option is required when data format is JSONP."
        );
        assert_eq!(app_err.severity(), ErrorSeverity::Medium);
        assert!(app_err.troubleshooting_hint().is_some());
    }

    #[test]
    fn test_app_error_severity_unsupported() {
        let app_err = AppError::Api(ApiError::Unsupported {
            operation: "refDataset".to_string(),
        });
        assert_eq!(app_err.severity(), ErrorSeverity::Medium);
        assert!(app_err.troubleshooting_hint().is_none());
    }

    #[test]
    fn test_storage_error_display() {
        let storage_err = StorageError::KeyringError("no backend".to_string());
        assert_eq!(format!("{}", storage_err), "Keyring error: no backend");

        let app_err = AppError::Storage(storage_err);
        assert!(app_err.troubleshooting_hint().is_some());
    }
}
