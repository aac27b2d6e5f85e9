//! # Feedback Strategies Module
//!
//! Pluggable feedback strategies. Each strategy implements the [`Feedback`](crate::traits::feedback::Feedback)
//! trait and produces one [`FeedbackEntry`](crate::traits::feedback::FeedbackEntry) per question.
//!
//! ## Available Strategies
//!
//! - [`auto_feedback`]: Template messages derived from each result's status.
//! - [`manual_feedback`]: The teacher's own explanation per question, falling back to the template.

pub mod auto_feedback;
pub mod manual_feedback;
