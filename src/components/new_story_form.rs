use leptos::{ev::SubmitEvent, prelude::*, task::spawn_local};
use leptos_router::hooks::use_navigate;

use crate::components::ui::button::{Button, ButtonSize, ButtonType};
use crate::errors::StoryError;
use crate::models::{Story, NEW_STORY_PATH};
use crate::server_fn::stories::submit_topic;
use crate::types::{PendingTopic, Topic};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CreateMode {
    /// Watch the story being written over the stream.
    #[default]
    Live,
    /// One request, then straight to the finished story.
    Instant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Create(Topic),
    Stream(Topic),
}

/// Decides what a submit does. Blank topics stop here, before any request.
pub fn plan_submission(raw_topic: &str, mode: CreateMode) -> Result<Submission, StoryError> {
    let topic = Topic::parse(raw_topic)?;
    Ok(match mode {
        CreateMode::Live => Submission::Stream(topic),
        CreateMode::Instant => Submission::Create(topic),
    })
}

/// Topic form. `submitting` belongs to the caller so it can lock other UI
/// (e.g. the modal's dismiss) while a request is in flight.
#[component]
pub fn NewStoryForm(
    submitting: RwSignal<bool>,
    #[prop(into)] on_success: Callback<Story>,
    #[prop(optional, into)] on_error: Option<Callback<String>>,
    #[prop(optional, into)] on_stream: Option<Callback<()>>,
) -> impl IntoView {
    let (topic, set_topic) = signal(String::new());
    let (mode, set_mode) = signal(CreateMode::default());
    let (error, set_error) = signal(None::<String>);
    let pending_topic = expect_context::<PendingTopic>();
    let navigate = use_navigate();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }

        match plan_submission(&topic.get_untracked(), mode.get_untracked()) {
            Err(e) => set_error.set(Some(e.to_string())),
            Ok(Submission::Stream(topic)) => {
                set_error.set(None);
                pending_topic.put(topic);
                if let Some(on_stream) = on_stream {
                    on_stream.run(());
                }
                navigate(NEW_STORY_PATH, Default::default());
            }
            Ok(Submission::Create(topic)) => {
                set_error.set(None);
                submitting.set(true);
                let navigate = navigate.clone();
                spawn_local(async move {
                    match submit_topic(topic).await {
                        Ok(story) => {
                            submitting.set(false);
                            let path = story.detail_path();
                            on_success.run(story);
                            navigate(&path, Default::default());
                        }
                        Err(e) => {
                            log::error!("Failed to create story: {e}");
                            submitting.set(false);
                            let message = e.to_string();
                            set_error.set(Some(message.clone()));
                            if let Some(on_error) = on_error {
                                on_error.run(message);
                            }
                        }
                    }
                });
            }
        }
    };

    view! {
        <div>
            <h2 class="text-2xl font-semibold mb-4 text-gray-800 dark:text-white">
                "Create a New Story"
            </h2>
            <form on:submit=on_submit class="space-y-4">
                <div class="flex flex-col sm:flex-row gap-4">
                    <input
                        type="text"
                        placeholder="Enter a topic..."
                        class="flex-grow rounded-md p-3 bg-gray-100 dark:bg-teal-700 text-gray-800 dark:text-white
                        border border-teal-500 dark:border-seafoam-500
                        focus:outline-none focus:ring-2 focus:ring-seafoam-500 dark:focus:ring-mint-400"
                        prop:value=topic
                        on:input=move |ev| set_topic.set(event_target_value(&ev))
                        disabled=move || submitting.get()
                    />
                    <Button button_type=ButtonType::Submit size=ButtonSize::Large disabled=submitting>
                        {move || if submitting.get() { "Generating..." } else { "Create Story" }}
                    </Button>
                </div>
                <label class="flex items-center gap-2 text-sm text-gray-600 dark:text-gray-300">
                    <input
                        type="checkbox"
                        prop:checked=move || mode.get() == CreateMode::Live
                        on:change=move |ev| {
                            set_mode
                                .set(
                                    if event_target_checked(&ev) {
                                        CreateMode::Live
                                    } else {
                                        CreateMode::Instant
                                    },
                                )
                        }
                        disabled=move || submitting.get()
                    />
                    "Watch it being written"
                </label>
                {move || {
                    error
                        .get()
                        .map(|message| {
                            view! {
                                <p class="text-salmon-600 dark:text-salmon-400">
                                    {format!("Error: {message}")}
                                </p>
                            }
                        })
                }}
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_topic_never_plans_a_request() {
        for raw in ["", " ", "\t\n  "] {
            for mode in [CreateMode::Live, CreateMode::Instant] {
                assert_eq!(plan_submission(raw, mode), Err(StoryError::EmptyTopic));
            }
        }
    }

    #[test]
    fn test_modes_pick_transport() {
        let topic = Topic::parse("pirates").unwrap();
        assert_eq!(
            plan_submission(" pirates ", CreateMode::Instant),
            Ok(Submission::Create(topic.clone()))
        );
        assert_eq!(
            plan_submission("pirates", CreateMode::Live),
            Ok(Submission::Stream(topic))
        );
    }
}
