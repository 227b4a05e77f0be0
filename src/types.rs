use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::StoryError;

/// A story topic that is guaranteed to contain more than whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Topic(String);

impl Topic {
    pub fn parse(raw: &str) -> Result<Self, StoryError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(StoryError::EmptyTopic);
        }
        Ok(Topic(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Topic {
    type Error = StoryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Topic::parse(&value)
    }
}

impl From<Topic> for String {
    fn from(topic: Topic) -> Self {
        topic.0
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

/// Body of `POST /stories/` and the first frame sent on a streaming socket.
#[derive(Debug, Serialize, Deserialize)]
pub struct TopicRequest {
    pub topic: Topic,
}

/// Hands a topic from the creation form to the `/story/new` route.
///
/// The topic never lives in the URL: reloading `/story/new` finds the slot empty
/// and sends the user back to the library.
#[derive(Clone, Copy)]
pub struct PendingTopic(RwSignal<Option<Topic>>);

impl PendingTopic {
    pub fn new() -> Self {
        PendingTopic(RwSignal::new(None))
    }

    pub fn put(&self, topic: Topic) {
        self.0.set(Some(topic));
    }

    /// Takes the topic out so a later visit cannot replay it.
    pub fn take(&self) -> Option<Topic> {
        let mut taken = None;
        self.0.update(|slot| taken = slot.take());
        taken
    }
}

impl Default for PendingTopic {
    fn default() -> Self {
        Self::new()
    }
}
