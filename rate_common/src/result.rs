//! Result type alias shared across the workspace.
//!
//! This module defines a convenient alias that defaults the error type to the
//! common `RateError`, so functions can simply return `Result<T>`.
use crate::error::RateError;

/// Workspace-wide `Result` alias with `RateError` as the default error.
pub type Result<T, E = RateError> = std::result::Result<T, E>;
