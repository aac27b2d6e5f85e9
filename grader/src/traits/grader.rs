use crate::types::{Question, QuestionResult, SubmittedAnswer};

/// QuestionGrader is a strategy trait for grading answers.
/// Each implementation handles the comparison rules of one question type.
///
/// Implementations only see questions whose answer key is present; a missing
/// key is handled before dispatch.
pub trait QuestionGrader: Send + Sync {
    /// Grade one answer, producing a full [`QuestionResult`].
    ///
    /// - `question`: the question definition, including its answer key.
    /// - `answer`: the learner's non-blank answer.
    fn grade(&self, question: &Question, answer: &SubmittedAnswer) -> QuestionResult;
}
