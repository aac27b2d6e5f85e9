//! A grader for fill-in-the-blank questions.
//!
//! The key may list several acceptable answers; matching any one of them (trimmed,
//! case-insensitive) earns full credit.

use crate::traits::grader::QuestionGrader;
use crate::types::{GradeStatus, Question, QuestionResult, SubmittedAnswer};
use crate::utilities::answer_normalization::matches_any;

pub struct FillBlankGrader;

impl QuestionGrader for FillBlankGrader {
    fn grade(&self, question: &Question, answer: &SubmittedAnswer) -> QuestionResult {
        let SubmittedAnswer::Text(text) = answer else {
            tracing::warn!(question_id = %question.id, "pairs submitted for a fill-blank question");
            return QuestionResult::zero(question, GradeStatus::Unscorable);
        };

        let correct = matches_any(text, &question.correct_answer.acceptable());
        QuestionResult::from_match(question, correct)
    }
}
