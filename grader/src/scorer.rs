//! # Scorer Module
//!
//! Grades single questions and aggregates a whole submission into a score, a maximum
//! score, and a flag saying whether the result can be treated as final.
//!
//! Nothing here fails: a question that cannot be graded simply contributes zero and marks
//! the submission as needing a teacher.

use crate::graders::grader_for;
use crate::types::{
    AnswerSheet, GradeStatus, Question, QuestionResult, SubmissionScore, SubmittedAnswer,
};

/// Grades one answer against its question.
///
/// # Behavior
///
/// - A question without an answer key always scores zero with [`GradeStatus::ManualReview`].
/// - A blank answer scores zero with [`GradeStatus::Unanswered`].
/// - Otherwise the grader for the question's type decides; credit is all-or-nothing.
///
/// # Example
///
/// ```
/// use grader::scorer::grade_question;
/// use grader::types::{AnswerKey, Question, QuestionType, SubmittedAnswer};
///
/// let question = Question::new("q1", QuestionType::MultipleChoice, 10)
///     .with_key(AnswerKey::Single("Hello".into()));
///
/// let result = grade_question(&question, &SubmittedAnswer::text("  hello  "));
/// assert!(result.correct);
/// assert_eq!(result.points, 10);
/// ```
pub fn grade_question(question: &Question, answer: &SubmittedAnswer) -> QuestionResult {
    if question.correct_answer.is_none() {
        return QuestionResult::zero(question, GradeStatus::ManualReview);
    }
    if answer.is_blank() {
        return QuestionResult::zero(question, GradeStatus::Unanswered);
    }

    let result = grader_for(question.question_type).grade(question, answer);
    tracing::debug!(
        question_id = %question.id,
        question_type = %question.question_type,
        correct = result.correct,
        points = result.points,
        "graded question"
    );
    result
}

/// Grades every question in order. Questions with no entry in `answers` are reported
/// as [`GradeStatus::Unanswered`].
pub fn grade_submission(questions: &[Question], answers: &AnswerSheet) -> Vec<QuestionResult> {
    questions
        .iter()
        .map(|question| match answers.get(&question.id) {
            Some(answer) if !answer.is_blank() => grade_question(question, answer),
            _ => QuestionResult::zero(question, GradeStatus::Unanswered),
        })
        .collect()
}

/// Folds per-question results into a [`SubmissionScore`].
///
/// Every result counts toward `max_score`. `fully_auto_graded` stays true only if every
/// result was [`GradeStatus::AutoGraded`].
pub fn summarize(results: &[QuestionResult]) -> SubmissionScore {
    results.iter().fold(
        SubmissionScore {
            score: 0,
            max_score: 0,
            fully_auto_graded: true,
        },
        |mut acc, result| {
            acc.max_score += u64::from(result.possible);
            acc.score += u64::from(result.points);
            if result.status != GradeStatus::AutoGraded {
                acc.fully_auto_graded = false;
            }
            acc
        },
    )
}

/// Scores a submission.
///
/// # Example
///
/// ```
/// use grader::scorer::score_submission;
/// use grader::types::{AnswerKey, AnswerSheet, Question, QuestionType, SubmittedAnswer};
///
/// let questions = vec![
///     Question::new("q1", QuestionType::MultipleChoice, 10).with_key(AnswerKey::Single("Hello".into())),
///     Question::new("q2", QuestionType::FillBlank, 15).with_key(AnswerKey::Single("une".into())),
///     Question::new("q3", QuestionType::ShortAnswer, 30),
/// ];
/// let answers: AnswerSheet = [
///     ("q1".to_string(), SubmittedAnswer::text("Hello")),
///     ("q2".to_string(), SubmittedAnswer::text("Une")),
///     ("q3".to_string(), SubmittedAnswer::text("some essay text")),
/// ]
/// .into_iter()
/// .collect();
///
/// let score = score_submission(&questions, &answers);
/// assert_eq!(score.score, 25);
/// assert_eq!(score.max_score, 55);
/// assert!(!score.fully_auto_graded);
/// ```
pub fn score_submission(questions: &[Question], answers: &AnswerSheet) -> SubmissionScore {
    summarize(&grade_submission(questions, answers))
}

/// Score as a percentage of the maximum, rounded to two decimals. `0.0` when nothing is on offer.
pub fn compute_percentage(score: &SubmissionScore) -> f64 {
    if score.max_score == 0 {
        return 0.0;
    }
    let pct = score.score as f64 / score.max_score as f64 * 100.0;
    (pct * 100.0).round() / 100.0
}
