//! Storage layer for estat-cli
//!
//! Handles configuration management and credential storage.
//! Uses the OS keyring for secure appId storage and TOML for
//! configuration files.

use crate::error::StorageError;

/// Configuration file management (TOML)
pub mod config;

/// Secure credential storage (OS keyring)
pub mod credentials;

type Result<T> = std::result::Result<T, StorageError>;
