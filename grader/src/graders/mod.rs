//! # Graders
//!
//! One grading strategy per question type. Each grader implements the
//! [`QuestionGrader`] trait, so the scorer can dispatch on the question type alone.
//!
//! The available graders are:
//! - [`multiple_choice_grader`]: case-insensitive equality with the chosen option.
//! - [`fill_blank_grader`]: match against any of several acceptable answers.
//! - [`matching_grader`]: all-or-nothing check of every left/right pair.
//! - [`manual_grader`]: free-text types that always wait for a teacher.

pub mod fill_blank_grader;
pub mod manual_grader;
pub mod matching_grader;
pub mod multiple_choice_grader;

use crate::traits::grader::QuestionGrader;
use crate::types::QuestionType;

use fill_blank_grader::FillBlankGrader;
use manual_grader::ManualGrader;
use matching_grader::MatchingGrader;
use multiple_choice_grader::MultipleChoiceGrader;

/// The grading strategy for a question type. Free-text types always go to
/// [`ManualGrader`], even when a key is stored.
pub fn grader_for(question_type: QuestionType) -> &'static dyn QuestionGrader {
    match question_type {
        QuestionType::MultipleChoice => &MultipleChoiceGrader,
        QuestionType::FillBlank => &FillBlankGrader,
        QuestionType::Matching => &MatchingGrader,
        QuestionType::Translation | QuestionType::ShortAnswer | QuestionType::Essay => {
            &ManualGrader
        }
    }
}
