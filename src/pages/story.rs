use leptos::prelude::*;
use leptos_router::{
    hooks::{use_navigate, use_params_map},
    NavigateOptions,
};

use crate::components::story_detail::StoryDetail;
use crate::components::streaming_story::StreamingStory;
use crate::models::NEW_STORY_SEGMENT;
use crate::types::{PendingTopic, Topic};

/// `/story/:id`: a saved story, or the live view when the id is `new`.
#[component]
pub fn StoryPage() -> impl IntoView {
    let params = use_params_map();
    let id = Memo::new(move |_| params.read().get("id").unwrap_or_default());

    move || {
        if id.get() == NEW_STORY_SEGMENT {
            view! { <NewStoryStream /> }.into_any()
        } else {
            view! { <StoryDetail id=id /> }.into_any()
        }
    }
}

/// Starts a session with the topic handed over by the creation form. Without
/// one (a reload, a typed URL) it quietly returns to the library.
#[component]
fn NewStoryStream() -> impl IntoView {
    let pending_topic = expect_context::<PendingTopic>();

    match stream_entry(&pending_topic) {
        Some(topic) => view! { <StreamingStory topic=topic /> }.into_any(),
        None => {
            let navigate = use_navigate();
            Effect::new(move |_| {
                navigate(
                    "/",
                    NavigateOptions {
                        replace: true,
                        ..Default::default()
                    },
                );
            });
            ().into_any()
        }
    }
}

/// The topic a `/story/new` visit may stream. `None` means no session starts and
/// the visitor goes back to `/`.
pub fn stream_entry(pending: &PendingTopic) -> Option<Topic> {
    pending.take()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visit_without_topic_starts_nothing() {
        let owner = Owner::new();
        owner.with(|| {
            let pending = PendingTopic::new();
            assert_eq!(stream_entry(&pending), None);
        });
    }

    #[test]
    fn test_handed_over_topic_streams_once() {
        let owner = Owner::new();
        owner.with(|| {
            let pending = PendingTopic::new();
            pending.put(Topic::parse("a lighthouse keeper").unwrap());
            assert_eq!(
                stream_entry(&pending).as_ref().map(Topic::as_str),
                Some("a lighthouse keeper")
            );
            // a reload of /story/new finds nothing left
            assert_eq!(stream_entry(&pending), None);
        });
    }
}
