//! Parser Trait
//!
//! This module defines the [`Parser`] trait, which provides a generic interface for parsing
//! raw input into strongly-typed grader structures. Implementations validate the input and
//! return a [`GraderError`] on failure.
//!
//! # Example
//!
//! ```rust
//! use grader::error::GraderError;
//! use grader::traits::parser::Parser;
//! use serde_json::Value;
//!
//! struct CountParser;
//!
//! impl<'a> Parser<&'a Value, usize> for CountParser {
//!     fn parse(&self, raw: &'a Value) -> Result<usize, GraderError> {
//!         raw.as_array()
//!             .map(|a| a.len())
//!             .ok_or_else(|| GraderError::InvalidJson("expected an array".into()))
//!     }
//! }
//! ```

use crate::error::GraderError;

/// A generic trait for parsing data into a strongly-typed Rust structure.
///
/// # Type Parameters
///
/// * `Input` - The input type to be parsed.
/// * `Output` - The output type produced by the parser.
pub trait Parser<Input, Output> {
    /// Parse an input value into the target type.
    ///
    /// # Errors
    ///
    /// Returns a [`GraderError`] if the input does not conform to the expected schema.
    fn parse(&self, input: Input) -> Result<Output, GraderError>;
}
