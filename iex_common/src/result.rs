//! Result type alias shared across the workspace.
//!
//! This module defines a convenient alias that defaults the error type to the
//! common `IexError`, so functions can simply return `Result<T>`.
use crate::error::IexError;

/// Workspace-wide `Result` alias with `IexError` as the default error.
pub type Result<T, E = IexError> = std::result::Result<T, E>;
