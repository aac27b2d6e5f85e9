//!
//! # Feedback Trait
//!
//! This module defines the [`Feedback`] trait and the [`FeedbackEntry`] struct, which are used to
//! implement pluggable feedback strategies. Each strategy produces one entry per question.
//!

use crate::types::{Question, QuestionResult};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackEntry {
    pub question_id: String,
    pub message: String,
}

/// A trait for pluggable feedback strategies.
///
/// # Arguments
/// - `questions`: The graded questions, in order.
/// - `results`: One [`QuestionResult`] per question, in the same order.
///
/// # Returns
/// An ordered list of feedback entries, one per question.
pub trait Feedback: Send + Sync {
    fn assemble_feedback(
        &self,
        questions: &[Question],
        results: &[QuestionResult],
    ) -> Vec<FeedbackEntry>;
}
