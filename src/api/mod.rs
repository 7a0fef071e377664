//! e-Stat API client
//!
//! Request construction and transport for the e-Stat REST v3.0 endpoints.
//! The client validates connection-level settings up front, maps typed
//! per-operation parameters into query strings, and returns response
//! bodies as text without interpreting them.

/// HTTP client and endpoint operations
pub mod client;

/// Language and response format value types
pub mod models;

/// Per-operation request parameters
pub mod params;
