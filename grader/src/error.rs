//! Grader Error Types
//!
//! This module defines the [`GraderError`] enum, which covers everything that can go wrong while
//! turning raw JSON into questions and answer sheets. Grading itself never fails: malformed
//! questions or answers are scored as zero instead of raising an error.
//!
//! # Example
//!
//! ```rust
//! use grader::error::GraderError;
//!
//! fn require_id(id: &str) -> Result<(), GraderError> {
//!     if id.is_empty() {
//!         return Err(GraderError::MissingField("id".to_string()));
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraderError {
    /// JSON is malformed or does not match the expected schema.
    #[error("invalid JSON: {0}")]
    InvalidJson(String),
    /// A required field is missing from input.
    #[error("missing field: {0}")]
    MissingField(String),
    /// Two questions in the same set share an id.
    #[error("duplicate question id '{0}'")]
    DuplicateQuestionId(String),
    /// A question is worth zero points.
    #[error("question '{0}' must be worth at least one point")]
    InvalidPoints(String),
    /// File not found, unreadable, etc.
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<serde_json::Error> for GraderError {
    fn from(e: serde_json::Error) -> Self {
        GraderError::InvalidJson(e.to_string())
    }
}

impl From<std::io::Error> for GraderError {
    fn from(e: std::io::Error) -> Self {
        GraderError::Io(e.to_string())
    }
}
