//! A grader for multiple-choice questions.
//!
//! The chosen option earns full credit when it equals the key after trimming and lower-casing.
//! A key stored as a list is treated as a set of accepted options.

use crate::traits::grader::QuestionGrader;
use crate::types::{GradeStatus, Question, QuestionResult, SubmittedAnswer};
use crate::utilities::answer_normalization::matches_any;

pub struct MultipleChoiceGrader;

impl QuestionGrader for MultipleChoiceGrader {
    fn grade(&self, question: &Question, answer: &SubmittedAnswer) -> QuestionResult {
        match answer {
            SubmittedAnswer::Text(choice) => {
                let correct = matches_any(choice, &question.correct_answer.acceptable());
                QuestionResult::from_match(question, correct)
            }
            SubmittedAnswer::Pairs(_) => {
                tracing::warn!(question_id = %question.id, "pairs submitted for a multiple-choice question");
                QuestionResult::zero(question, GradeStatus::Unscorable)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AnswerKey, QuestionType};

    fn mock_question(key: AnswerKey, points: u32) -> Question {
        Question::new("mc", QuestionType::MultipleChoice, points)
            .with_options(["Hello", "Goodbye", "Thanks"])
            .with_key(key)
    }

    #[test]
    fn test_case_and_whitespace_insensitive() {
        let question = mock_question(AnswerKey::Single("Hello".into()), 10);
        let result = MultipleChoiceGrader.grade(&question, &SubmittedAnswer::text("  hello  "));
        assert!(result.correct);
        assert_eq!(result.points, 10);
        assert_eq!(result.status, GradeStatus::AutoGraded);
    }

    #[test]
    fn test_wrong_choice() {
        let question = mock_question(AnswerKey::Single("Hello".into()), 10);
        let result = MultipleChoiceGrader.grade(&question, &SubmittedAnswer::text("Goodbye"));
        assert!(!result.correct);
        assert_eq!(result.points, 0);
        assert_eq!(result.possible, 10);
        assert_eq!(result.status, GradeStatus::AutoGraded);
    }

    #[test]
    fn test_list_key_is_membership() {
        let question = mock_question(
            AnswerKey::Multiple(vec!["Hello".into(), "Thanks".into()]),
            4,
        );
        assert!(MultipleChoiceGrader.grade(&question, &SubmittedAnswer::text("THANKS")).correct);
        assert!(!MultipleChoiceGrader.grade(&question, &SubmittedAnswer::text("Goodbye")).correct);
    }

    #[test]
    fn test_pairs_answer_scores_zero() {
        let question = mock_question(AnswerKey::Single("Hello".into()), 10);
        let result =
            MultipleChoiceGrader.grade(&question, &SubmittedAnswer::pairs([("Hello", "Hello")]));
        assert_eq!(result.points, 0);
        assert_eq!(result.status, GradeStatus::Unscorable);
    }
}
