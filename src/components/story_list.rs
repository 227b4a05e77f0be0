use leptos::prelude::*;

use crate::models::Story;
use crate::server_fn::stories::fetch_stories;

#[component]
pub fn StoryList() -> impl IntoView {
    let stories = Resource::new(|| (), |_| fetch_stories());

    view! {
        <div class="space-y-4">
            <h2 class="text-2xl font-semibold border-b border-gray-300 dark:border-teal-700 pb-2 text-gray-800 dark:text-gray-200">
                "Available Stories"
            </h2>
            <Suspense fallback=|| {
                view! { <p class="text-center text-teal-600 dark:text-mint-400">"Loading stories..."</p> }
            }>
                {move || {
                    stories
                        .get()
                        .map(|result| match result {
                            Ok(stories) if stories.is_empty() => {
                                view! {
                                    <p class="text-gray-500 dark:text-gray-400">
                                        "No stories found yet. Why not create one?"
                                    </p>
                                }
                                    .into_any()
                            }
                            Ok(stories) => {
                                view! {
                                    <ul class="divide-y divide-gray-200 dark:divide-teal-800">
                                        <For
                                            each=move || stories.clone()
                                            key=|story| story.id
                                            children=move |story| view! { <StoryListItem story=story /> }
                                        />
                                    </ul>
                                }
                                    .into_any()
                            }
                            Err(e) => {
                                view! {
                                    <p class="text-center text-salmon-600 dark:text-salmon-400">
                                        {format!("Error fetching stories: {e}")}
                                    </p>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn StoryListItem(story: Story) -> impl IntoView {
    let href = story.detail_path();
    let created_on = story.created_on();

    view! {
        <li>
            <a
                href=href
                class="block p-4 rounded-md hover:bg-gray-200 dark:hover:bg-teal-800 transition-colors"
            >
                <h3 class="text-xl font-bold text-gray-800 dark:text-gray-100">{story.title}</h3>
                {created_on
                    .map(|date| {
                        view! {
                            <p class="text-sm text-gray-500 dark:text-gray-400">
                                {format!("Created on: {date}")}
                            </p>
                        }
                    })}
            </a>
        </li>
    }
}
