//! # Parsers
//!
//! The JSON boundary of the grader. Question sets are validated strictly; learner answers are
//! coerced into a [`SubmittedAnswer`](crate::types::SubmittedAnswer) and never rejected one by one.
//!
//! - [`question_parser`]: JSON array into `Vec<Question>`.
//! - [`answer_parser`]: JSON object keyed by question id into an `AnswerSheet`.

pub mod answer_parser;
pub mod question_parser;
