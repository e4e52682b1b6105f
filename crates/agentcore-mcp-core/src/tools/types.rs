//! Tool call arguments and responses

use serde::Deserialize;
use serde_json::{Map, Value};

/// Arguments accepted by every query tool
///
/// Unknown keys and wrongly typed values are rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QueryArguments {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub session_id: Option<String>,
}

impl QueryArguments {
    /// Validate the raw argument object of a tool call
    ///
    /// A call without arguments is treated as an empty object.
    pub fn from_arguments(arguments: Option<Map<String, Value>>) -> Result<Self, serde_json::Error> {
        serde_json::from_value(Value::Object(arguments.unwrap_or_default()))
    }

    /// The query, if present and non-empty
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref().filter(|q| !q.is_empty())
    }

    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolResponseKind {
    Success,
    Error,
}

/// Outcome of a tool call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolResponse {
    pub kind: ToolResponseKind,
    pub text: String,
}

impl ToolResponse {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: ToolResponseKind::Success,
            text: text.into(),
        }
    }

    /// Error response; the text is `"Error: <message>"`
    pub fn error(message: impl AsRef<str>) -> Self {
        Self {
            kind: ToolResponseKind::Error,
            text: format!("Error: {}", message.as_ref()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == ToolResponseKind::Error
    }
}
