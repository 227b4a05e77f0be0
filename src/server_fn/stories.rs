use leptos::prelude::*;

use crate::errors::StoryError;
use crate::models::{Story, StoryId};
use crate::types::Topic;

#[cfg(feature = "ssr")]
fn story_api() -> Result<crate::services::story_api::StoryApiClient, ServerFnError> {
    use crate::state::AppState;

    use_context::<AppState>()
        .map(|state| state.story_api)
        .ok_or_else(|| ServerFnError::ServerError("application state not provided".to_string()))
}

#[server(ListStories, "/api")]
pub async fn list_stories() -> Result<Vec<Story>, ServerFnError> {
    use crate::errors::to_server_error;

    story_api()?.list_stories().await.map_err(to_server_error)
}

#[server(GetStory, "/api")]
pub async fn get_story(id: StoryId) -> Result<Story, ServerFnError> {
    use crate::errors::to_server_error;

    story_api()?.get_story(id).await.map_err(to_server_error)
}

#[server(CreateStory, "/api")]
pub async fn create_story(topic: Topic) -> Result<Story, ServerFnError> {
    use crate::errors::to_server_error;

    story_api()?.create_story(&topic).await.map_err(to_server_error)
}

/// All stories, in the order the backend lists them.
pub async fn fetch_stories() -> Result<Vec<Story>, StoryError> {
    list_stories().await.map_err(StoryError::from)
}

/// One story; a route id that is not a number can never exist.
pub async fn fetch_story(raw_id: String) -> Result<Story, StoryError> {
    let id = raw_id
        .parse::<StoryId>()
        .map_err(|_| StoryError::NotFound)?;
    get_story(id).await.map_err(StoryError::from)
}

pub async fn submit_topic(topic: Topic) -> Result<Story, StoryError> {
    create_story(topic).await.map_err(StoryError::from)
}
