//! Task form and instruction composition.
//!
//! The backend's prompt templates expect the instruction as a fixed prefix
//! line followed by one compact JSON object with capitalized keys. Key order
//! and the historical `"Expections"` spelling are part of that contract, so
//! the form serializes through struct declaration order rather than a value
//! map.

use serde::Serialize;

const INSTRUCTION_PREFIX: &str = "finish the task as following";

/// Fields describing one task submission. Wire keys are capitalized and
/// emitted in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskForm {
    /// Short task name, e.g. "reply email".
    #[serde(rename = "Task")]
    pub task: String,
    /// Material the task operates on.
    #[serde(rename = "Content")]
    pub content: String,
    /// Expectations for the produced answer. The wire key keeps the
    /// original misspelling; templates match on it.
    #[serde(rename = "Expections")]
    pub expectations: String,
    /// Optional provenance of the content.
    #[serde(rename = "Source")]
    pub source: String,
    /// BCP 47 tag for the answer language.
    #[serde(rename = "Language")]
    pub language: String,
}

impl Default for TaskForm {
    fn default() -> Self {
        Self {
            task: "reply email".to_string(),
            content: String::new(),
            expectations: "Professional; concise".to_string(),
            source: String::new(),
            language: "en-US".to_string(),
        }
    }
}

impl TaskForm {
    /// Compose the full instruction text: prefix line, newline, compact JSON.
    pub fn instruction(&self) -> serde_json::Result<String> {
        Ok(format!(
            "{INSTRUCTION_PREFIX}\n{}",
            serde_json::to_string(self)?
        ))
    }
}
