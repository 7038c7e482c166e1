//! Error types and diagnostic reporting for the compiler.
//!
//! This module defines the error values produced by the lexer and the
//! parser, and the reporter that formats them for a terminal. It
//! includes:
//!
//! - A positioned `Error` wrapper over the diagnostic payload
//! - Specific payload variants for each syntactic fault
//! - Source-line rendering with a caret and optional color
//! - Helpful suggestions alongside the raw message

pub mod errors;
pub mod reporter;
