//! # Grader Library
//!
//! This crate provides the auto-grading engine for tests and assignments: it compares a
//! learner's answers against the teacher's answer keys and produces a score, the maximum
//! possible score, and a flag saying whether the whole submission could be graded automatically.
//!
//! ## Key Concepts
//! - **GradingJob**: Grades one submission and builds a report with per-question feedback.
//! - **Graders**: One strategy per question type (multiple-choice, fill-blank, matching, manual).
//! - **Scorer**: All-or-nothing credit per question, summed over the submission.
//! - **Feedback**: Template or teacher-written messages per question.
//! - **Parsers**: The JSON boundary turning raw questions and answers into typed values.

pub mod error;
pub mod feedback;
pub mod graders;
pub mod parsers;
pub mod report;
pub mod scorer;
pub mod traits;
pub mod types;
pub mod utilities;

use crate::error::GraderError;
use crate::feedback::auto_feedback::AutoFeedback;
use crate::feedback::manual_feedback::ManualFeedback;
use crate::parsers::answer_parser::AnswerParser;
use crate::parsers::question_parser::QuestionParser;
use crate::report::GradingReportResponse;
use crate::traits::feedback::Feedback;
use crate::traits::parser::Parser;
use crate::types::{AnswerSheet, Question};

use chrono::Utc;
use serde_json::Value;
use util::grading_config::{FeedbackScheme, GradingOptions};

/// Grades a single learner submission.
///
/// # Fields
/// - `questions`: The question set, in display order.
/// - `answers`: The learner's answers keyed by question id.
/// - `options`: Pass mark and feedback settings for this test.
/// - `feedback`: Strategy producing per-question messages.
/// - `submission_id`: Optional caller-side identifier echoed in the report.
pub struct GradingJob<'a> {
    questions: Vec<Question>,
    answers: AnswerSheet,
    options: GradingOptions,
    feedback: Box<dyn Feedback + 'a>,
    submission_id: Option<String>,
}

impl<'a> GradingJob<'a> {
    /// Create a new grading job. The feedback strategy follows `options.feedback_scheme`.
    pub fn new(questions: Vec<Question>, answers: AnswerSheet, options: GradingOptions) -> Self {
        let auto = AutoFeedback {
            reveal_model_answers: options.reveal_model_answers,
        };
        let feedback: Box<dyn Feedback + 'a> = match options.feedback_scheme {
            FeedbackScheme::Auto => Box::new(auto),
            FeedbackScheme::Manual => Box::new(ManualFeedback { fallback: auto }),
        };

        Self {
            questions,
            answers,
            options,
            feedback,
            submission_id: None,
        }
    }

    /// Build a job from raw JSON: an array of questions and an object of answers.
    ///
    /// # Errors
    /// Returns a [`GraderError`] if the question set is invalid or the answers are not an object.
    pub fn from_json(
        questions: &Value,
        answers: &Value,
        options: GradingOptions,
    ) -> Result<Self, GraderError> {
        let questions = QuestionParser.parse(questions)?;
        let answers = AnswerParser.parse((answers, questions.as_slice()))?;
        Ok(Self::new(questions, answers, options))
    }

    /// Set a custom feedback strategy for this job.
    pub fn with_feedback<F: Feedback + 'a>(mut self, feedback: F) -> Self {
        self.feedback = Box::new(feedback);
        self
    }

    pub fn with_submission_id(mut self, id: impl Into<String>) -> Self {
        self.submission_id = Some(id.into());
        self
    }

    /// Grade every question and build the report.
    ///
    /// Grading never fails; malformed questions or answers score zero and make the report
    /// provisional.
    pub fn grade(self) -> GradingReportResponse {
        let results = scorer::grade_submission(&self.questions, &self.answers);
        let totals = scorer::summarize(&results);
        let feedback = self.feedback.assemble_feedback(&self.questions, &results);

        tracing::info!(
            submission_id = self.submission_id.as_deref().unwrap_or("-"),
            score = totals.score,
            max_score = totals.max_score,
            fully_auto_graded = totals.fully_auto_graded,
            "graded submission"
        );

        let now = Utc::now().to_rfc3339();
        report::generate_report(
            self.submission_id,
            now,
            &self.questions,
            &results,
            &feedback,
            totals,
            self.options.pass_mark,
        )
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::ReportStatus;
    use crate::traits::feedback::FeedbackEntry;
    use crate::types::{GradeStatus, QuestionResult};
    use chrono::DateTime;

    fn is_valid_iso8601(s: &str) -> bool {
        DateTime::parse_from_rfc3339(s).is_ok()
    }

    fn load_case(dir: &str) -> (Value, Value) {
        let read = |name: &str| -> Value {
            let path = std::path::Path::new(dir).join(name);
            let s = std::fs::read_to_string(&path).expect("read fixture");
            serde_json::from_str(&s).expect("parse fixture")
        };
        (read("questions.json"), read("answers.json"))
    }

    #[test]
    fn test_grading_job_provisional_case() {
        let (questions, answers) = load_case("src/test_files/grader/case1");
        let response = GradingJob::from_json(&questions, &answers, GradingOptions::default_config())
            .unwrap()
            .with_submission_id("sub-1")
            .grade();

        assert!(response.success);
        assert_eq!(response.message, "Provisional score pending teacher review.");

        let report = &response.data;
        assert!(is_valid_iso8601(&report.created_at));
        assert_eq!(report.submission_id.as_deref(), Some("sub-1"));
        assert_eq!(report.mark.earned, 25);
        assert_eq!(report.mark.total, 55);
        assert!(!report.fully_auto_graded);
        assert_eq!(report.status, ReportStatus::Provisional);
        assert_eq!(report.passed, None);

        assert_eq!(report.questions.len(), 3);
        assert_eq!(report.questions[0].feedback, "Correct");
        assert_eq!(report.questions[2].status, GradeStatus::ManualReview);
        assert_eq!(report.questions[2].feedback, "Pending teacher review");
    }

    #[test]
    fn test_grading_job_final_case_with_manual_feedback() {
        let (questions, answers) = load_case("src/test_files/grader/case2");
        let options = GradingOptions {
            pass_mark: 90,
            feedback_scheme: FeedbackScheme::Manual,
            reveal_model_answers: false,
        };
        let response = GradingJob::from_json(&questions, &answers, options)
            .unwrap()
            .grade();

        assert_eq!(response.message, "Grading complete.");
        let report = &response.data;
        assert_eq!(report.mark.earned, 45);
        assert_eq!(report.mark.total, 45);
        assert_eq!(report.percentage, 100.0);
        assert_eq!(report.status, ReportStatus::Final);
        assert_eq!(report.passed, Some(true));
        assert_eq!(report.questions[0].feedback, "Rouge is red, bleu is blue.");
        assert_eq!(report.questions[1].feedback, "Correct");
    }

    #[test]
    fn test_custom_feedback_strategy() {
        struct Silent;
        impl Feedback for Silent {
            fn assemble_feedback(
                &self,
                _questions: &[Question],
                _results: &[QuestionResult],
            ) -> Vec<FeedbackEntry> {
                Vec::new()
            }
        }

        let (questions, answers) = load_case("src/test_files/grader/case1");
        let response = GradingJob::from_json(&questions, &answers, GradingOptions::default())
            .unwrap()
            .with_feedback(Silent)
            .grade();
        assert!(response.data.questions.iter().all(|q| q.feedback.is_empty()));
    }

    #[test]
    fn test_invalid_question_set_is_rejected() {
        let result = GradingJob::from_json(
            &serde_json::json!({ "not": "an array" }),
            &serde_json::json!({}),
            GradingOptions::default(),
        );
        assert!(matches!(result, Err(GraderError::InvalidJson(_))));
    }
}
