use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

pub type StoryId = i64;

/// Route segment of the live-generation view; never a real story id.
pub const NEW_STORY_SEGMENT: &str = "new";
pub const NEW_STORY_PATH: &str = "/story/new";

/// A generated story as returned by the backend.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Story {
    pub id: StoryId,
    pub title: String,
    pub text: String,
    #[serde(default)]
    pub questions: Vec<Question>,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub llm_model: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Question {
    pub question: String,
    pub answer: String,
}

impl Story {
    pub fn detail_path(&self) -> String {
        story_path(self.id)
    }

    /// Creation date for list entries, e.g. "May 1, 2024".
    pub fn created_on(&self) -> Option<String> {
        self.created_at
            .map(|created_at| created_at.format("%B %-d, %Y").to_string())
    }
}

pub fn story_path(id: StoryId) -> String {
    format!("/story/{id}")
}

// The backend writes naive timestamps (no offset); those are taken as UTC.
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    let Some(raw) = raw else {
        return Ok(None);
    };

    if let Ok(parsed) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(Some(parsed.with_timezone(&Utc)));
    }

    NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| Some(naive.and_utc()))
        .map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_decodes_backend_story() {
        let json = r#"{
            "id": 7,
            "title": "The Lighthouse",
            "text": "It was a dark night.",
            "questions": [{"question": "Where?", "answer": "A lighthouse"}],
            "llm_model": "mistralai/mistral-7b-instruct:free",
            "created_at": "2024-05-01T10:30:00.123456"
        }"#;
        let story: Story = serde_json::from_str(json).unwrap();
        assert_eq!(story.id, 7);
        assert_eq!(story.questions.len(), 1);
        assert_eq!(story.questions[0].answer, "A lighthouse");
        let created_at = story.created_at.unwrap();
        assert_eq!(created_at.year(), 2024);
        assert_eq!(created_at.hour(), 10);
        assert_eq!(story.llm_model.as_deref(), Some("mistralai/mistral-7b-instruct:free"));
    }

    #[test]
    fn test_decodes_rfc3339_timestamp() {
        let json = r#"{"id": 1, "title": "T", "text": "x", "questions": [], "created_at": "2024-05-01T12:00:00+02:00"}"#;
        let story: Story = serde_json::from_str(json).unwrap();
        assert_eq!(story.created_at.unwrap().hour(), 10);
    }

    #[test]
    fn test_missing_optional_fields() {
        let json = r#"{"id": 42, "title": "T", "text": "Once upon a time", "questions": []}"#;
        let story: Story = serde_json::from_str(json).unwrap();
        assert_eq!(story.created_at, None);
        assert_eq!(story.llm_model, None);
        assert_eq!(story.detail_path(), "/story/42");
        assert_eq!(story.created_on(), None);
    }

    #[test]
    fn test_rejects_garbage_timestamp() {
        let json = r#"{"id": 1, "title": "T", "text": "x", "created_at": "yesterday"}"#;
        assert!(serde_json::from_str::<Story>(json).is_err());
    }

    #[test]
    fn test_created_on_format() {
        let json = r#"{"id": 1, "title": "T", "text": "x", "created_at": "2024-05-01T10:30:00"}"#;
        let story: Story = serde_json::from_str(json).unwrap();
        assert_eq!(story.created_on().as_deref(), Some("May 1, 2024"));
    }
}
