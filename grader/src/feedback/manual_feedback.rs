//! # ManualFeedback Strategy
//!
//! Uses the explanation a teacher wrote on each question. Questions without one get the
//! [`AutoFeedback`] template message instead.

use crate::feedback::auto_feedback::AutoFeedback;
use crate::traits::feedback::{Feedback, FeedbackEntry};
use crate::types::{Question, QuestionResult};

#[derive(Debug, Clone, Copy, Default)]
pub struct ManualFeedback {
    pub fallback: AutoFeedback,
}

impl Feedback for ManualFeedback {
    fn assemble_feedback(
        &self,
        questions: &[Question],
        results: &[QuestionResult],
    ) -> Vec<FeedbackEntry> {
        questions
            .iter()
            .zip(results)
            .map(|(question, result)| {
                let message = match question.explanation.as_deref().map(str::trim) {
                    Some(explanation) if !explanation.is_empty() => explanation.to_string(),
                    _ => self.fallback.message_for(question, result),
                };
                FeedbackEntry {
                    question_id: question.id.clone(),
                    message,
                }
            })
            .collect()
    }
}
