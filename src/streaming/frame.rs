use serde::Deserialize;
use serde_json::Value;

use crate::models::Story;

/// One inbound message from the generation socket.
#[derive(Debug, Clone, PartialEq)]
pub enum StreamFrame {
    Token(String),
    StoryDone,
    Complete(Story),
    Error(String),
    /// A `type` this client does not know; skipped.
    Unrecognized(String),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FrameError {
    #[error("not a JSON frame: {0}")]
    Unreadable(String),
    #[error("bad `{kind}` payload: {reason}")]
    Malformed { kind: String, reason: String },
}

#[derive(Deserialize)]
struct RawFrame {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    payload: Value,
}

impl StreamFrame {
    pub fn parse(text: &str) -> Result<Self, FrameError> {
        let RawFrame { kind, payload } =
            serde_json::from_str(text).map_err(|e| FrameError::Unreadable(e.to_string()))?;

        let malformed = |reason: String| FrameError::Malformed {
            kind: kind.clone(),
            reason,
        };

        match kind.as_str() {
            "token" => match payload {
                Value::String(token) => Ok(StreamFrame::Token(token)),
                other => Err(malformed(format!("expected text, got {other}"))),
            },
            "story_done" => Ok(StreamFrame::StoryDone),
            "complete" => serde_json::from_value::<Story>(payload)
                .map(StreamFrame::Complete)
                .map_err(|e| malformed(e.to_string())),
            "error" => Ok(StreamFrame::Error(match payload {
                Value::String(message) => message,
                Value::Null => "The story service reported an error.".to_string(),
                other => other.to_string(),
            })),
            other => Ok(StreamFrame::Unrecognized(other.to_string())),
        }
    }
}
