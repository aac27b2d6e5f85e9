//!
//! Traits Module
//!
//! This module contains the core traits used throughout the grader for extensibility and abstraction.
//!
//! - [`grader`]: Strategy trait for grading one question type.
//! - [`feedback`]: Strategy trait for turning results into learner-facing messages.
//! - [`parser`]: Generic trait for parsing raw input into typed structures.

pub mod feedback;
pub mod grader;
pub mod parser;
