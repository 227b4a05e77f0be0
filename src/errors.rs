use leptos::prelude::ServerFnError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Everything that can go wrong while fetching, creating or streaming a story.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum StoryError {
    #[error("Story not found.")]
    NotFound,
    #[error("API error! status: {status}")]
    Request { status: u16 },
    #[error("Could not reach the story service: {0}")]
    Transport(String),
    #[error("Unexpected response from the story service: {0}")]
    Decode(String),
    #[error("A connection error occurred with the streaming service.")]
    Connection,
    #[error("{0}")]
    Backend(String),
    #[error("Malformed message from the streaming service: {0}")]
    Protocol(String),
    #[error("Please enter a topic.")]
    EmptyTopic,
}

/// Encodes the error as JSON inside a `ServerFnError` so its kind survives the
/// trip to the browser.
pub fn to_server_error(e: StoryError) -> ServerFnError {
    match serde_json::to_string(&e) {
        Ok(encoded) => ServerFnError::ServerError(encoded),
        Err(_) => ServerFnError::ServerError(e.to_string()),
    }
}

impl From<ServerFnError> for StoryError {
    fn from(e: ServerFnError) -> Self {
        match e {
            ServerFnError::ServerError(message) => serde_json::from_str(&message)
                .unwrap_or(StoryError::Transport(message)),
            other => StoryError::Transport(other.to_string()),
        }
    }
}
