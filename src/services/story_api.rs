use http::StatusCode;
use log::{debug, error, info};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::errors::StoryError;
use crate::models::{Story, StoryId};
use crate::types::{Topic, TopicRequest};

/// REST client for the story backend. One shot per call, no retries.
#[derive(Clone)]
pub struct StoryApiClient {
    client: Client,
    base_url: String,
}

impl StoryApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        StoryApiClient {
            client: Client::new(),
            base_url: crate::config::normalize_base(&base_url.into()),
        }
    }

    pub async fn list_stories(&self) -> Result<Vec<Story>, StoryError> {
        let url = format!("{}/stories/", self.base_url);
        debug!("GET {url}");

        let response = self.client.get(&url).send().await.map_err(transport_error)?;
        let stories: Vec<Story> = read_json(response).await?;

        info!("fetched {} stories", stories.len());
        Ok(stories)
    }

    pub async fn get_story(&self, id: StoryId) -> Result<Story, StoryError> {
        let url = format!("{}/stories/{id}", self.base_url);
        debug!("GET {url}");

        let response = self.client.get(&url).send().await.map_err(transport_error)?;
        if response.status() == StatusCode::NOT_FOUND {
            info!("story {id} not found");
            return Err(StoryError::NotFound);
        }

        read_json(response).await
    }

    pub async fn create_story(&self, topic: &Topic) -> Result<Story, StoryError> {
        let url = format!("{}/stories/", self.base_url);
        debug!("POST {url} topic='{topic}'");

        let body = TopicRequest {
            topic: topic.clone(),
        };
        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;
        let story: Story = read_json(response).await?;

        info!("created story {} for topic '{topic}'", story.id);
        Ok(story)
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, StoryError> {
    let status = response.status();
    if !status.is_success() {
        error!("story service responded with {status}");
        return Err(StoryError::Request {
            status: status.as_u16(),
        });
    }

    let body = response.text().await.map_err(transport_error)?;
    serde_json::from_str(&body).map_err(|e| {
        error!("failed to parse story service response: {e}. Body: {body}");
        StoryError::Decode(e.to_string())
    })
}

fn transport_error(e: reqwest::Error) -> StoryError {
    error!("story service request failed: {e}");
    StoryError::Transport(e.to_string())
}
