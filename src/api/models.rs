use crate::error::ValidationError;

/// Result language for statistics names and metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Japanese,
    English,
}

impl Language {
    /// Parse the one-letter language code, case-insensitively.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        match value.to_uppercase().as_str() {
            "J" => Ok(Language::Japanese),
            "E" => Ok(Language::English),
            _ => Err(ValidationError::InvalidLanguage),
        }
    }

    /// Wire form of the language code ("J" or "E").
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Japanese => "J",
            Language::English => "E",
        }
    }
}

/// Response format requested from the remote service.
///
/// The format determines URL path rewriting and whether certain
/// parameters (callback, sectionHeaderFlg) are applicable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    Xml,
    Json,
    Jsonp,
    Csv,
}

impl ResponseFormat {
    /// Parse the format name, case-insensitively.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        match value.to_lowercase().as_str() {
            "xml" => Ok(ResponseFormat::Xml),
            "json" => Ok(ResponseFormat::Json),
            "jsonp" => Ok(ResponseFormat::Jsonp),
            "csv" => Ok(ResponseFormat::Csv),
            _ => Err(ValidationError::InvalidFormat),
        }
    }

    /// Wire form of the format name (lowercase).
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseFormat::Xml => "xml",
            ResponseFormat::Json => "json",
            ResponseFormat::Jsonp => "jsonp",
            ResponseFormat::Csv => "csv",
        }
    }
}
