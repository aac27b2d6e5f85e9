//! Translation, short-answer and essay questions are never compared automatically.
//! A stored key only serves as a model answer for the teacher.

use crate::traits::grader::QuestionGrader;
use crate::types::{GradeStatus, Question, QuestionResult, SubmittedAnswer};

pub struct ManualGrader;

impl QuestionGrader for ManualGrader {
    fn grade(&self, question: &Question, _answer: &SubmittedAnswer) -> QuestionResult {
        QuestionResult::zero(question, GradeStatus::ManualReview)
    }
}
