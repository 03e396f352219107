//! Command handlers.
//!
//! Handlers are thin wrappers that:
//! 1. validate CLI input that the parser cannot check
//! 2. call into the composed [`CliContext`](crate::CliContext)
//! 3. hand the result back for presentation

pub mod download;
