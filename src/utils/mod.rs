//! Utility functions for code generation, URL validation and error mapping.
//!
//! - [`code_generator`] - Short code generation and validation
//! - [`url_validator`] - Target URL scheme checks
//! - [`db_error`] - `sqlx` error classification

pub mod code_generator;
pub mod db_error;
pub mod url_validator;
