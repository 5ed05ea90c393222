//! argrt library interface
//!
//! A runtime command-line option registry: options are declared with a flag,
//! a description and either owned or borrowed storage, then filled in from
//! argv in a single left-to-right scan.
//!
//! # Module Organization
//!
//! - [`registry`] - Option declaration, parsing and usage output
//! - [`errors`] - Error types (ArgError, Result)
//! - [`status`] - Exit status codes (ExitStatus)
//! - [`config`] - Default options from `config.toml`
//! - [`logging`] - tracing subscriber setup
//! - [`core`] - Demo program used by the `argrt` binary

pub mod config;
pub mod core;
pub mod errors;
pub mod logging;
pub mod registry;
pub mod status;

pub use errors::{ArgError, Result};
pub use registry::{OptionHandle, OptionType, ParseOutcome, Registry, HELP_FLAG};
