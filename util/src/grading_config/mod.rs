use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackScheme {
    Auto,
    Manual,
}

/// Options a teacher sets per test or assignment.
///
/// Missing fields fall back to their defaults, so `{}` is a valid file.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct GradingOptions {
    /// Minimum percentage required to pass (0–100).
    #[serde(default = "default_pass_mark")]
    pub pass_mark: u32,

    #[serde(default = "default_feedback_scheme")]
    pub feedback_scheme: FeedbackScheme,

    /// If true, feedback quotes the answer key for wrong and manually graded questions.
    #[serde(default = "default_reveal_model_answers")]
    pub reveal_model_answers: bool,
}

impl Default for GradingOptions {
    fn default() -> Self {
        Self::default_config()
    }
}

impl GradingOptions {
    pub fn default_config() -> Self {
        GradingOptions {
            pass_mark: default_pass_mark(),
            feedback_scheme: default_feedback_scheme(),
            reveal_model_answers: default_reveal_model_answers(),
        }
    }

    /// Clamp `pass_mark` into 0–100.
    pub fn sanitize(mut self) -> Self {
        if self.pass_mark > 100 {
            tracing::warn!(pass_mark = self.pass_mark, "pass mark above 100, clamping");
            self.pass_mark = 100;
        }
        self
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|_| format!("Failed to read grading config at {path:?}"))?;

        let cfg: GradingOptions = serde_json::from_str(&contents)
            .map_err(|_| "Invalid grading config JSON format".to_string())?;

        Ok(cfg.sanitize())
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), String> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| format!("Failed to create config directory: {e:?}"))?;
            }
        }

        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize grading config to JSON: {e}"))?;

        fs::write(path, json).map_err(|e| format!("Failed to write grading config to disk: {e:?}"))
    }
}

//Default Functions

fn default_pass_mark() -> u32 {
    50
}

fn default_feedback_scheme() -> FeedbackScheme {
    FeedbackScheme::Auto
}

fn default_reveal_model_answers() -> bool {
    true
}
