use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::toast::use_toast;
use crate::components::ui::button::{ButtonSize, ButtonVariant, LinkButton};
use crate::errors::StoryError;
use crate::models::Story;
use crate::server_fn::stories::fetch_story;

/// Loads and shows the story behind a route id. Refetches only when the id changes.
#[component]
pub fn StoryDetail(#[prop(into)] id: Signal<String>) -> impl IntoView {
    let toast = use_toast();
    let story = Resource::new(move || id.get(), fetch_story);

    Effect::new(move |_| {
        if let Some(Err(e)) = story.get() {
            log::error!("Failed to load story {}: {e}", id.get_untracked());
            toast.error(format!("Failed to load story: {e}"));
        }
    });

    view! {
        <Suspense fallback=|| {
            view! { <p class="text-center text-teal-600 dark:text-mint-400">"Loading story..."</p> }
        }>
            {move || {
                story
                    .get()
                    .map(|result| match result {
                        Ok(story) => view! { <StoryArticle story=story /> }.into_any(),
                        Err(e) => {
                            view! {
                                <div class="text-center space-y-4">
                                    <p class="text-salmon-600 dark:text-salmon-400">
                                        {fetch_error_message(&e)}
                                    </p>
                                    <LinkButton href="/" variant=ButtonVariant::Ghost size=ButtonSize::Small>
                                        "Go back home"
                                    </LinkButton>
                                </div>
                            }
                                .into_any()
                        }
                    })
            }}
        </Suspense>
    }
}

pub fn fetch_error_message(e: &StoryError) -> String {
    format!("Error fetching story: {e}")
}

#[component]
pub fn StoryArticle(story: Story) -> impl IntoView {
    let Story {
        title,
        text,
        questions,
        llm_model,
        ..
    } = story;

    view! {
        <article class="space-y-6">
            <a href="/" class="inline-flex items-center gap-1 text-teal-600 dark:text-mint-400 hover:underline">
                <Icon icon=icondata_bs::BsArrowLeft width="14" height="14"/>
                "Back to all stories"
            </a>

            <h1 class="text-4xl font-bold text-gray-900 dark:text-white">{title}</h1>
            {llm_model
                .map(|model| {
                    view! {
                        <p class="text-xs text-gray-500 dark:text-gray-400">
                            {format!("Written by {model}")}
                        </p>
                    }
                })}

            <p class="text-lg text-gray-700 dark:text-gray-300 leading-relaxed whitespace-pre-line">
                {text}
            </p>

            <div class="border-t border-gray-300 dark:border-teal-700 pt-6">
                <h2 class="text-2xl font-semibold mb-4 text-gray-800 dark:text-gray-200">
                    "Comprehension Questions"
                </h2>
                <ol class="space-y-4">
                    {questions
                        .into_iter()
                        .enumerate()
                        .map(|(index, q)| {
                            view! {
                                <li class="bg-gray-200 dark:bg-teal-800 p-4 rounded-lg">
                                    <p class="font-semibold">{format!("{}. {}", index + 1, q.question)}</p>
                                    <p class="text-gray-600 dark:text-gray-400 mt-1">
                                        <strong>"Answer: "</strong>
                                        {q.answer}
                                    </p>
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
            </div>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_story_message() {
        assert_eq!(
            fetch_error_message(&StoryError::NotFound),
            "Error fetching story: Story not found."
        );
    }

    #[test]
    fn test_backend_failure_message() {
        assert_eq!(
            fetch_error_message(&StoryError::Request { status: 500 }),
            "Error fetching story: API error! status: 500"
        );
    }
}
