//! Input validation and sanitization utilities
//!
//! This module provides utilities for validating user input and
//! configuration values before they reach the API client.

use crate::error::ValidationError;

/// Validate the shape of an appId credential
pub fn validate_app_id(app_id: &str) -> crate::Result<()> {
    if app_id.is_empty() {
        return Err(ValidationError::InvalidAppId {
            reason: "appId cannot be empty".to_string(),
        }
        .into());
    }

    if app_id.chars().any(char::is_whitespace) {
        return Err(ValidationError::InvalidAppId {
            reason: "appId cannot contain whitespace".to_string(),
        }
        .into());
    }

    Ok(())
}
