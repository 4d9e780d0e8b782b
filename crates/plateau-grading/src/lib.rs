//! Grading feedback interface.
//!
//! Describes the boundary to an external chat-completion grader: what a grading
//! task looks like, what structured feedback comes back, and how failures are
//! absorbed. No transport lives here; a [`FeedbackSource`] supplies the raw
//! JSON body.
//!
//! Failures never propagate past [`request_feedback`]: they are logged and
//! surface as `None`, meaning "no feedback available".

mod error;
mod feedback;

pub use error::GradingError;
pub use feedback::{CriterionFeedback, Feedback, GradingTask};

use tracing::{error, info};

/// Produces the raw JSON feedback body for a task.
pub trait FeedbackSource {
    /// Grade `task` on behalf of `user_id`, returning the response body.
    fn complete(&self, user_id: &str, task: &GradingTask) -> Result<String, GradingError>;
}

/// Ask `source` to grade `task`.
///
/// Returns `None` if the source fails or its response cannot be parsed.
pub fn request_feedback<S: FeedbackSource + ?Sized>(
    source: &S,
    user_id: &str,
    task: &GradingTask,
) -> Option<Feedback> {
    info!(user_id, task_id = %task.task_id, "requesting feedback");

    let body = match source.complete(user_id, task) {
        Ok(body) => body,
        Err(e) => {
            error!(task_id = %task.task_id, "feedback request failed: {e}");
            return None;
        }
    };

    match Feedback::from_json(&body) {
        Ok(feedback) => Some(feedback),
        Err(e) => {
            error!(task_id = %task.task_id, "feedback response unusable: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    enum Canned {
        Body(&'static str),
        NoCredential,
        Unreachable,
    }

    impl FeedbackSource for Canned {
        fn complete(&self, _user_id: &str, _task: &GradingTask) -> Result<String, GradingError> {
            match self {
                Canned::Body(body) => Ok(body.to_string()),
                Canned::NoCredential => {
                    Err(GradingError::MissingCredential("GRADER_API_KEY".into()))
                }
                Canned::Unreachable => Err(GradingError::Transport("connection reset".into())),
            }
        }
    }

    fn task() -> GradingTask {
        GradingTask {
            task_id: "python-avg-func-v2".into(),
            task_description: "Average a list of numbers, 0 for an empty list.".into(),
            requirements: vec![
                "Function is named `calculate_average`.".into(),
                "Returns 0 for an empty list.".into(),
            ],
            submission_text: concat!(
                "def calculate_average(numbers):\n",
                "    return sum(numbers) / len(numbers)\n",
            )
            .into(),
        }
    }

    const BODY: &str = r#"{
        "userId": "developer-01",
        "taskId": "python-avg-func-v2",
        "finalScore": 55,
        "overallPositive": "Concise and readable.",
        "overallSuggestion": "Guard against an empty list.",
        "criteriaFeedback": [
            {
                "requirement": "Function is named `calculate_average`.",
                "score": 5,
                "justification": "Correct name."
            },
            {
                "requirement": "Returns 0 for an empty list.",
                "score": 1,
                "justification": "Divides by zero."
            }
        ]
    }"#;

    #[test]
    fn feedback_parsed_from_source() {
        let feedback = request_feedback(&Canned::Body(BODY), "developer-01", &task()).unwrap();
        assert_eq!(feedback.final_score, 55);
        assert_eq!(feedback.criteria_feedback.len(), 2);
        assert_eq!(feedback.criteria_feedback[1].score, 1);
    }

    #[test]
    fn source_failure_is_absent_feedback() {
        assert!(request_feedback(&Canned::NoCredential, "developer-01", &task()).is_none());
        assert!(request_feedback(&Canned::Unreachable, "developer-01", &task()).is_none());
    }

    #[test]
    fn malformed_body_is_absent_feedback() {
        assert!(request_feedback(&Canned::Body("not json"), "developer-01", &task()).is_none());

        let partial = Canned::Body(r#"{"userId": "developer-01"}"#);
        assert!(request_feedback(&partial, "developer-01", &task()).is_none());
    }

    #[test]
    fn works_through_trait_object() {
        let source: Box<dyn FeedbackSource> = Box::new(Canned::Body(BODY));
        assert!(request_feedback(source.as_ref(), "developer-01", &task()).is_some());
    }
}
