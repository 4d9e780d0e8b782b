//! Grading task and feedback models.

use serde::{Deserialize, Serialize};

use crate::error::GradingError;

/// A coding task to be graded, passed explicitly rather than baked in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradingTask {
    pub task_id: String,
    pub task_description: String,
    /// Rubric, one requirement per entry
    pub requirements: Vec<String>,
    pub submission_text: String,
}

impl GradingTask {
    /// Load a task from a JSON object with `taskId`, `taskDescription`,
    /// `requirements` and `submissionText`.
    pub fn from_json(json: &str) -> Result<Self, GradingError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Per-requirement feedback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CriterionFeedback {
    pub requirement: String,
    /// 1 (missing) to 5 (excellent)
    pub score: u8,
    pub justification: String,
}

/// Structured feedback returned by the grader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub user_id: String,
    pub task_id: String,
    /// 0 to 100
    pub final_score: u8,
    pub overall_positive: String,
    pub overall_suggestion: String,
    pub criteria_feedback: Vec<CriterionFeedback>,
}

impl Feedback {
    /// Parse a grader response body.
    pub fn from_json(json: &str) -> Result<Self, GradingError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Pretty-printed JSON, four-space indented.
    pub fn to_pretty_json(&self) -> Result<String, GradingError> {
        let mut out = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut out, formatter);
        self.serialize(&mut ser)?;
        Ok(String::from_utf8_lossy(&out).into_owned())
    }
}
