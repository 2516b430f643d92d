//! Utility modules for logging and DOM access.
//!
//! Provides:
//! - [`logger`] - `log` backend over the browser console
//! - [`dom`] - window access, focus, and file list helpers

pub mod dom;
pub mod logger;
