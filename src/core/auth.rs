use crate::error::{AppError, CliError};
use crate::utils::validation::validate_app_id;
use rpassword::read_password;
use std::io::{self, Write};

/// Interactive appId input handler
pub struct AppIdInput {
    pub app_id: String,
}

impl AppIdInput {
    /// Collect the appId from a non-echoing terminal prompt.
    /// The value is never echoed back or logged.
    pub fn collect() -> Result<Self, AppError> {
        print!("appId: ");
        io::stdout().flush().map_err(|e| {
            AppError::Cli(CliError::InvalidArguments(format!(
                "Failed to flush stdout: {}",
                e
            )))
        })?;

        let app_id = read_password().map_err(|e| {
            AppError::Cli(CliError::InvalidArguments(format!(
                "Failed to read appId: {}",
                e
            )))
        })?;

        Ok(Self {
            app_id: app_id.trim().to_string(),
        })
    }

    /// Validate the collected credential before it is stored or used
    pub fn validate(&self) -> Result<(), AppError> {
        validate_app_id(&self.app_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // collect() needs a controlling terminal, so only the validation
    // half is covered here.

    #[test]
    fn test_validate_rejects_empty_app_id() {
        let input = AppIdInput {
            app_id: String::new(),
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_plain_app_id() {
        let input = AppIdInput {
            app_id: "0123456789abcdef".to_string(),
        };
        assert!(input.validate().is_ok());
    }
}
