//! # AutoFeedback Strategy
//!
//! Generates template-based feedback from each question's [`GradeStatus`]. When model answers
//! are revealed, wrong answers and questions awaiting a teacher also quote the answer key.

use crate::traits::feedback::{Feedback, FeedbackEntry};
use crate::types::{GradeStatus, Question, QuestionResult};

#[derive(Debug, Clone, Copy)]
pub struct AutoFeedback {
    pub reveal_model_answers: bool,
}

impl Default for AutoFeedback {
    fn default() -> Self {
        Self {
            reveal_model_answers: true,
        }
    }
}

impl AutoFeedback {
    pub fn message_for(&self, question: &Question, result: &QuestionResult) -> String {
        let model_answer = if self.reveal_model_answers {
            question.correct_answer.display()
        } else {
            None
        };

        match result.status {
            GradeStatus::AutoGraded if result.correct => "Correct".to_string(),
            GradeStatus::AutoGraded => match model_answer {
                Some(expected) => format!("Incorrect. Expected: {expected}"),
                None => "Incorrect".to_string(),
            },
            GradeStatus::Unanswered => "Not answered".to_string(),
            GradeStatus::ManualReview => match model_answer {
                Some(expected) => format!("Pending teacher review. Model answer: {expected}"),
                None => "Pending teacher review".to_string(),
            },
            GradeStatus::Unscorable => "Could not be graded automatically".to_string(),
        }
    }
}

impl Feedback for AutoFeedback {
    fn assemble_feedback(
        &self,
        questions: &[Question],
        results: &[QuestionResult],
    ) -> Vec<FeedbackEntry> {
        questions
            .iter()
            .zip(results)
            .map(|(question, result)| FeedbackEntry {
                question_id: question.id.clone(),
                message: self.message_for(question, result),
            })
            .collect()
    }
}
