//! A grader for matching questions, where **every pair must be right**.
//!
//! `options[i]` is paired with `correct_answer[i]`. The learner's right-hand values are
//! compared case-insensitively; the left-hand keys must name an option exactly.

use std::collections::HashMap;

use crate::traits::grader::QuestionGrader;
use crate::types::{AnswerKey, GradeStatus, Question, QuestionResult, SubmittedAnswer};
use crate::utilities::answer_normalization::answers_match;

/// All-or-nothing matching grader.
///
/// A single wrong, unknown or missing pair gives zero for the whole question. A key
/// that is not a list of the same length as `options` makes the question unscorable.
pub struct MatchingGrader;

impl MatchingGrader {
    /// `option -> correct right-hand value`, or `None` if the key does not line up with the options.
    fn correct_pairs(question: &Question) -> Option<HashMap<&str, &str>> {
        let options = question.options.as_ref()?;
        let AnswerKey::Multiple(key) = &question.correct_answer else {
            return None;
        };
        if options.is_empty() || options.len() != key.len() {
            return None;
        }
        Some(
            options
                .iter()
                .map(String::as_str)
                .zip(key.iter().map(String::as_str))
                .collect(),
        )
    }
}

impl QuestionGrader for MatchingGrader {
    fn grade(&self, question: &Question, answer: &SubmittedAnswer) -> QuestionResult {
        let Some(expected) = Self::correct_pairs(question) else {
            tracing::warn!(
                question_id = %question.id,
                "matching key does not line up with options, scoring zero"
            );
            return QuestionResult::zero(question, GradeStatus::Unscorable);
        };

        let SubmittedAnswer::Pairs(pairs) = answer else {
            tracing::warn!(question_id = %question.id, "text submitted for a matching question");
            return QuestionResult::zero(question, GradeStatus::Unscorable);
        };

        let every_pair_right = pairs.iter().all(|(left, right)| {
            expected
                .get(left.as_str())
                .is_some_and(|want| answers_match(right, want))
        });
        let every_option_paired = expected.keys().all(|left| pairs.contains_key(*left));

        QuestionResult::from_match(question, every_pair_right && every_option_paired)
    }
}
