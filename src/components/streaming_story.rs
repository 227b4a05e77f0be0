use leptos::prelude::*;
use leptos_router::{hooks::use_navigate, NavigateOptions};

use crate::components::toast::use_toast;
use crate::components::ui::button::{ButtonSize, ButtonVariant, LinkButton};
use crate::config::ClientConfig;
use crate::models::story_path;
use crate::streaming::socket::WebSocketTransport;
use crate::streaming::{
    Effect as SessionEffect, Phase, SessionDriver, SessionEvent, StreamingSession, REDIRECT_DELAY,
};
use crate::types::{ToastLevel, Topic};

/// Hosts one live generation session for `topic`.
///
/// The socket belongs to the session driver stored in this view's reactive
/// owner; leaving the view disposes the driver, which closes the socket.
#[component]
pub fn StreamingStory(topic: Topic) -> impl IntoView {
    let (phase, set_phase) = signal(Phase::Idle);
    let (text, set_text) = signal(String::new());
    let toast = use_toast();
    let navigate = use_navigate();

    let session_topic = topic.clone();
    // Browser only: effects never run during server rendering, so the socket
    // and everything holding it live in this effect's owner.
    Effect::new(move |_| {
        let driver = StoredValue::new_local(None::<SessionDriver<WebSocketTransport>>);
        let redirect = StoredValue::new_local(None::<TimeoutHandle>);
        let navigate = navigate.clone();

        let apply_effects = move |effects: Vec<SessionEffect>| {
            for effect in effects {
                match effect {
                    SessionEffect::Appended(token) => set_text.update(|buffer| buffer.push_str(&token)),
                    SessionEffect::Entered(next) => set_phase.set(next),
                    SessionEffect::Notify { level, message } => toast.show(level, message),
                    SessionEffect::Redirect(id) => {
                        let navigate = navigate.clone();
                        let handle = set_timeout_with_handle(
                            move || {
                                navigate(
                                    &story_path(id),
                                    NavigateOptions {
                                        replace: true,
                                        ..Default::default()
                                    },
                                )
                            },
                            REDIRECT_DELAY,
                        );
                        match handle {
                            Ok(handle) => redirect.set_value(Some(handle)),
                            Err(e) => log::error!("Failed to schedule redirect: {e:?}"),
                        }
                    }
                    SessionEffect::Send(_) | SessionEffect::Release => {}
                }
            }
        };

        let on_event = move |event: SessionEvent| {
            let effects = driver
                .try_update_value(|slot| slot.as_mut().map(|driver| driver.dispatch(event)))
                .flatten();
            if let Some(effects) = effects {
                apply_effects(effects);
            }
        };

        let url = &ClientConfig::get().stream_url;
        match WebSocketTransport::connect(url, on_event) {
            Ok(transport) => {
                let session = StreamingSession::new(session_topic.clone());
                driver.set_value(Some(SessionDriver::new(session, transport)));
            }
            Err(e) => {
                set_phase.set(Phase::Failed(e.clone()));
                toast.show(ToastLevel::Error, e.to_string());
            }
        }

        on_cleanup(move || {
            if let Some(Some(handle)) = redirect.try_update_value(|slot| slot.take()) {
                handle.clear();
            }
            driver.try_update_value(|slot| {
                if let Some(mut driver) = slot.take() {
                    driver.release();
                }
            });
        });
    });

    let topic_label = format!("\"{topic}\"");

    view! {
        {move || match phase.get() {
            Phase::Failed(e) => {
                view! {
                    <div class="text-center space-y-4">
                        <p class="text-salmon-600 dark:text-salmon-400">{format!("Error: {e}")}</p>
                        <LinkButton href="/" variant=ButtonVariant::Ghost size=ButtonSize::Small>
                            "Go back home"
                        </LinkButton>
                    </div>
                }
                    .into_any()
            }
            current => {
                let heading = match current {
                    Phase::Finalizing => "Finalizing Your Story...",
                    Phase::Done(_) => "Your Story Is Ready",
                    _ => "Writing Your Story...",
                };
                let writing = matches!(current, Phase::Idle | Phase::Streaming);
                let finalizing = matches!(current, Phase::Finalizing);
                let done = matches!(current, Phase::Done(_));
                let topic_label = topic_label.clone();

                view! {
                    <article class="space-y-6">
                        <h1 class="text-4xl font-bold text-gray-900 dark:text-white">{heading}</h1>
                        <p class="text-lg text-gray-500 dark:text-gray-400">
                            "Topic: "
                            <span class="text-gray-900 dark:text-white font-semibold">{topic_label}</span>
                        </p>

                        <div class="bg-gray-200 dark:bg-teal-800 p-6 rounded-lg min-h-[300px]">
                            <p class="text-lg text-gray-700 dark:text-gray-300 leading-relaxed whitespace-pre-wrap">
                                {move || text.get()}
                                <Show when=move || writing>
                                    <span class="inline-block w-2 h-5 bg-teal-500 dark:bg-white animate-pulse ml-1"></span>
                                </Show>
                            </p>
                        </div>

                        <Show when=move || finalizing>
                            <div class="flex items-center justify-center gap-3 p-4 rounded-lg bg-gray-200 dark:bg-teal-800">
                                <span class="inline-block w-5 h-5 rounded-full border-2 border-teal-500 border-t-transparent animate-spin"></span>
                                <p class="text-gray-700 dark:text-gray-300 text-lg">
                                    "Creating a title and questions..."
                                </p>
                            </div>
                        </Show>

                        <Show when=move || done>
                            <p class="text-center text-seafoam-600 dark:text-mint-400 font-bold text-xl">
                                "Story complete! Redirecting you now..."
                            </p>
                        </Show>
                    </article>
                }
                    .into_any()
            }
        }}
    }
}
