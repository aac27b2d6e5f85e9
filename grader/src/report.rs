//! # Grading Report Module
//!
//! This module defines the serializable report returned after grading a submission, and the
//! response envelope that wraps it for callers.
//!
//! ## JSON Output Example
//!
//! ```json
//! {
//!   "success": true,
//!   "message": "Provisional score pending teacher review.",
//!   "data": {
//!     "submission_id": "sub-42",
//!     "created_at": "2025-01-01T10:00:00+00:00",
//!     "updated_at": "2025-01-01T10:00:00+00:00",
//!     "mark": { "earned": 25, "total": 55 },
//!     "percentage": 45.45,
//!     "fully_auto_graded": false,
//!     "status": "provisional",
//!     "passed": null,
//!     "questions": [
//!       { "question_id": "q1", "question_type": "multiple-choice", "correct": true,
//!         "score": { "earned": 10, "total": 10 }, "status": "auto_graded", "feedback": "Correct" }
//!     ]
//!   }
//! }
//! ```
//!
//! ## Design Notes
//!
//! A report is final only when every question was answered and graded automatically. A
//! provisional report carries the computed score but leaves `passed` unset until a teacher
//! has reviewed it.

use serde::Serialize;

use crate::scorer::compute_percentage;
use crate::traits::feedback::FeedbackEntry;
use crate::types::{GradeStatus, Question, QuestionResult, QuestionType, SubmissionScore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Score {
    pub earned: u64,
    pub total: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Final,
    Provisional,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportQuestion {
    pub question_id: String,
    pub question_type: QuestionType,
    pub correct: bool,
    pub score: Score,
    pub status: GradeStatus,
    pub feedback: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GradingReport {
    pub submission_id: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    pub mark: Score,
    pub percentage: f64,
    pub fully_auto_graded: bool,
    pub status: ReportStatus,
    /// `None` while the report is provisional.
    pub passed: Option<bool>,
    pub questions: Vec<ReportQuestion>,
}

/// Assembles a report from graded questions.
///
/// `questions`, `results` and `feedback` are expected in the same order; feedback for a
/// question is looked up by id, so a strategy that skips questions leaves an empty message.
pub fn generate_report(
    submission_id: Option<String>,
    timestamp: String,
    questions: &[Question],
    results: &[QuestionResult],
    feedback: &[FeedbackEntry],
    totals: SubmissionScore,
    pass_mark: u32,
) -> GradingReport {
    let percentage = compute_percentage(&totals);
    let report_questions = questions
        .iter()
        .zip(results)
        .map(|(question, result)| ReportQuestion {
            question_id: question.id.clone(),
            question_type: question.question_type,
            correct: result.correct,
            score: Score {
                earned: u64::from(result.points),
                total: u64::from(result.possible),
            },
            status: result.status,
            feedback: feedback
                .iter()
                .find(|f| f.question_id == question.id)
                .map(|f| f.message.clone())
                .unwrap_or_default(),
        })
        .collect();

    let (status, passed) = if totals.fully_auto_graded {
        (ReportStatus::Final, Some(meets_pass_mark(&totals, pass_mark)))
    } else {
        (ReportStatus::Provisional, None)
    };

    GradingReport {
        submission_id,
        created_at: timestamp.clone(),
        updated_at: timestamp,
        mark: Score {
            earned: totals.score,
            total: totals.max_score,
        },
        percentage,
        fully_auto_graded: totals.fully_auto_graded,
        status,
        passed,
        questions: report_questions,
    }
}

/// `score / max_score >= pass_mark / 100`, compared exactly in integers.
fn meets_pass_mark(totals: &SubmissionScore, pass_mark: u32) -> bool {
    u128::from(totals.score) * 100 >= u128::from(pass_mark) * u128::from(totals.max_score)
}

/// The response envelope for grading results.
#[derive(Debug, Serialize)]
pub struct GradingReportResponse {
    pub success: bool,
    pub message: String,
    pub data: GradingReport,
}

impl From<GradingReport> for GradingReportResponse {
    fn from(report: GradingReport) -> Self {
        let message = match report.status {
            ReportStatus::Final => "Grading complete.",
            ReportStatus::Provisional => "Provisional score pending teacher review.",
        };
        GradingReportResponse {
            success: true,
            message: message.to_string(),
            data: report,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AnswerKey;
    use serde_json::Value;

    fn sample() -> (Vec<Question>, Vec<QuestionResult>, Vec<FeedbackEntry>) {
        let q1 = Question::new("q1", QuestionType::MultipleChoice, 10)
            .with_key(AnswerKey::Single("Hello".into()));
        let q2 = Question::new("q2", QuestionType::FillBlank, 10)
            .with_key(AnswerKey::Single("une".into()));
        let results = vec![
            QuestionResult::full(&q1),
            QuestionResult::zero(&q2, GradeStatus::AutoGraded),
        ];
        let feedback = vec![FeedbackEntry {
            question_id: "q1".to_string(),
            message: "Correct".to_string(),
        }];
        (vec![q1, q2], results, feedback)
    }

    #[test]
    fn test_final_report_decides_pass() {
        let (questions, results, feedback) = sample();
        let totals = SubmissionScore {
            score: 10,
            max_score: 20,
            fully_auto_graded: true,
        };

        let report = generate_report(
            Some("sub-1".into()),
            "2025-01-01T00:00:00+00:00".into(),
            &questions,
            &results,
            &feedback,
            totals,
            50,
        );
        assert_eq!(report.status, ReportStatus::Final);
        assert_eq!(report.passed, Some(true));
        assert_eq!(report.questions[0].feedback, "Correct");
        assert_eq!(report.questions[1].feedback, "");

        let strict = generate_report(
            None,
            "2025-01-01T00:00:00+00:00".into(),
            &questions,
            &results,
            &feedback,
            totals,
            60,
        );
        assert_eq!(strict.passed, Some(false));
    }

    #[test]
    fn test_pass_mark_is_not_met_by_rounding_up() {
        let (questions, results, feedback) = sample();
        let just_below = SubmissionScore {
            score: 49_996,
            max_score: 100_000,
            fully_auto_graded: true,
        };
        let report = generate_report(
            None,
            "2025-01-01T00:00:00+00:00".into(),
            &questions,
            &results,
            &feedback,
            just_below,
            50,
        );
        assert_eq!(report.percentage, 50.0);
        assert_eq!(report.passed, Some(false));

        let exact = SubmissionScore {
            score: 50_000,
            ..just_below
        };
        let report = generate_report(
            None,
            "2025-01-01T00:00:00+00:00".into(),
            &questions,
            &results,
            &feedback,
            exact,
            50,
        );
        assert_eq!(report.passed, Some(true));
    }

    #[test]
    fn test_provisional_response_serialization() {
        let (questions, results, feedback) = sample();
        let totals = SubmissionScore {
            score: 10,
            max_score: 20,
            fully_auto_graded: false,
        };
        let report = generate_report(
            Some("sub-2".into()),
            "2025-01-01T00:00:00+00:00".into(),
            &questions,
            &results,
            &feedback,
            totals,
            50,
        );

        let response: GradingReportResponse = report.into();
        let value: Value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["message"], "Provisional score pending teacher review.");
        assert_eq!(value["data"]["submission_id"], "sub-2");
        assert_eq!(value["data"]["status"], "provisional");
        assert_eq!(value["data"]["passed"], Value::Null);
        assert_eq!(value["data"]["mark"]["earned"], 10);
        assert_eq!(value["data"]["mark"]["total"], 20);
        assert_eq!(value["data"]["questions"][0]["question_type"], "multiple-choice");
        assert_eq!(value["data"]["questions"][1]["status"], "auto_graded");
        assert_eq!(value["data"]["questions"][1]["score"]["earned"], 0);
    }
}
