//! Shared configuration for the grading workspace.
//!
//! - [`config`]: process-wide settings loaded from the environment (and `.env`).
//! - [`grading_config`]: per-test grading options stored as JSON.

pub mod config;
pub mod grading_config;
