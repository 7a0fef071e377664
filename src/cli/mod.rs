//! Command-line interface
//!
//! clap command tree and the dispatcher that routes parsed commands to
//! the core and api layers.

/// Command dispatch and handlers
pub mod dispatcher;

/// clap argument and subcommand definitions
pub mod main_types;
