//! Tool call results.

use serde::Serialize;
use std::fmt;

/// Result of a tool call, rendered as text for the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolOutput {
    /// Text handed back to the model.
    pub text: String,
    /// Whether the call failed.
    pub is_error: bool,
}

impl ToolOutput {
    /// A successful result carrying a payload verbatim (e.g. JSON).
    pub fn data(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    /// A successful result carrying a confirmation message.
    pub fn success(message: impl fmt::Display) -> Self {
        Self::data(format!("SUCCESS: {}", message))
    }

    /// A failed result.
    pub fn error(message: impl fmt::Display) -> Self {
        Self {
            text: format!("ERROR: {}", message),
            is_error: true,
        }
    }
}

impl fmt::Display for ToolOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
