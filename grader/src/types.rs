//! # Types Module
//!
//! This module defines the core data structures used throughout the grader: question
//! definitions with their answer keys, learner answers, and the results produced by grading.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// The kind of question, which decides how it is graded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionType {
    MultipleChoice,
    FillBlank,
    Matching,
    Translation,
    ShortAnswer,
    Essay,
}

impl QuestionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::MultipleChoice => "multiple-choice",
            QuestionType::FillBlank => "fill-blank",
            QuestionType::Matching => "matching",
            QuestionType::Translation => "translation",
            QuestionType::ShortAnswer => "short-answer",
            QuestionType::Essay => "essay",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The authoritative answer for a question.
///
/// On the wire this is `null` (or absent), a string, or an array of strings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerKey {
    /// No key: the question needs a human grader.
    #[default]
    None,
    Single(String),
    Multiple(Vec<String>),
}

impl AnswerKey {
    pub fn is_none(&self) -> bool {
        matches!(self, AnswerKey::None)
    }

    /// The key as a sequence of acceptable answers. Empty for [`AnswerKey::None`].
    pub fn acceptable(&self) -> Vec<&str> {
        match self {
            AnswerKey::None => Vec::new(),
            AnswerKey::Single(s) => vec![s.as_str()],
            AnswerKey::Multiple(values) => values.iter().map(String::as_str).collect(),
        }
    }

    /// Human-readable form used in feedback, e.g. `"une / Une"`.
    pub fn display(&self) -> Option<String> {
        match self {
            AnswerKey::None => None,
            AnswerKey::Single(s) => Some(s.clone()),
            AnswerKey::Multiple(values) => Some(values.join(" / ")),
        }
    }
}

/// A question as authored by a teacher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    /// Shown to the learner; never used for grading.
    #[serde(default, alias = "question")]
    pub prompt: String,
    /// Choices for multiple-choice, left-hand items for matching.
    #[serde(default)]
    pub options: Option<Vec<String>>,
    #[serde(default, alias = "correct_answer")]
    pub correct_answer: AnswerKey,
    pub points: u32,
    /// Teacher-written remark shown by manual feedback.
    #[serde(default)]
    pub explanation: Option<String>,
}

impl Question {
    pub fn new(id: impl Into<String>, question_type: QuestionType, points: u32) -> Self {
        Self {
            id: id.into(),
            question_type,
            prompt: String::new(),
            options: None,
            correct_answer: AnswerKey::None,
            points,
            explanation: None,
        }
    }

    pub fn with_key(mut self, key: AnswerKey) -> Self {
        self.correct_answer = key;
        self
    }

    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = Some(options.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }
}

/// What a learner submitted for one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SubmittedAnswer {
    /// Choice, blank, or free text.
    Text(String),
    /// Matching pairs: left-hand item to chosen right-hand value.
    Pairs(BTreeMap<String, String>),
}

impl SubmittedAnswer {
    pub fn text(value: impl Into<String>) -> Self {
        SubmittedAnswer::Text(value.into())
    }

    pub fn pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        SubmittedAnswer::Pairs(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// True when the learner gave nothing: an empty string or no pairs.
    pub fn is_blank(&self) -> bool {
        match self {
            SubmittedAnswer::Text(s) => s.is_empty(),
            SubmittedAnswer::Pairs(p) => p.is_empty(),
        }
    }
}

/// Learner answers keyed by question id.
pub type AnswerSheet = HashMap<String, SubmittedAnswer>;

/// How a question's result came about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradeStatus {
    /// Compared against the key; the result is final.
    AutoGraded,
    /// No answer, or an empty one.
    Unanswered,
    /// Free-text type or no key; a teacher must grade it.
    ManualReview,
    /// The key or the answer had the wrong shape for the question type.
    Unscorable,
}

/// The outcome of grading a single question. Credit is all-or-nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionResult {
    pub question_id: String,
    pub correct: bool,
    /// Either `0` or `possible`.
    pub points: u32,
    pub possible: u32,
    pub status: GradeStatus,
}

impl QuestionResult {
    pub fn full(question: &Question) -> Self {
        Self::build(question, true, GradeStatus::AutoGraded)
    }

    pub fn zero(question: &Question, status: GradeStatus) -> Self {
        Self::build(question, false, status)
    }

    /// Full credit when `correct`, nothing otherwise.
    pub fn from_match(question: &Question, correct: bool) -> Self {
        if correct {
            Self::full(question)
        } else {
            Self::zero(question, GradeStatus::AutoGraded)
        }
    }

    fn build(question: &Question, correct: bool, status: GradeStatus) -> Self {
        QuestionResult {
            question_id: question.id.clone(),
            correct,
            points: if correct { question.points } else { 0 },
            possible: question.points,
            status,
        }
    }
}

/// Aggregate over a whole test or assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SubmissionScore {
    /// Summed in `u64`: per-question points are `u32`, so the total cannot overflow.
    pub score: u64,
    pub max_score: u64,
    /// False if any question was unanswered or needs a teacher.
    pub fully_auto_graded: bool,
}
