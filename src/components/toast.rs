use std::time::Duration;

use leptos::prelude::*;

use crate::types::ToastLevel;

const TOAST_DURATION: Duration = Duration::from_secs(4);

/// App-wide transient notifications.
#[derive(Clone, Copy)]
pub struct ToastContext {
    message: RwSignal<String>,
    level: RwSignal<ToastLevel>,
    visible: RwSignal<bool>,
    shown: RwSignal<u32>,
}

impl ToastContext {
    pub fn new() -> Self {
        ToastContext {
            message: RwSignal::new(String::new()),
            level: RwSignal::new(ToastLevel::Success),
            visible: RwSignal::new(false),
            shown: RwSignal::new(0),
        }
    }

    pub fn show(&self, level: ToastLevel, message: impl Into<String>) {
        self.message.set(message.into());
        self.level.set(level);
        self.visible.set(true);
        self.shown.update(|n| *n = n.wrapping_add(1));

        // only the latest toast may hide itself
        let this = *self;
        let ticket = self.shown.get_untracked();
        set_timeout(
            move || {
                if this.shown.get_untracked() == ticket {
                    this.dismiss();
                }
            },
            TOAST_DURATION,
        );
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(ToastLevel::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(ToastLevel::Error, message);
    }

    pub fn dismiss(&self) {
        self.visible.set(false);
    }
}

impl Default for ToastContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_toast() -> ToastContext {
    expect_context::<ToastContext>()
}

#[component]
pub fn Toast(
    #[prop(into)] message: Signal<String>,
    #[prop(into)] level: Signal<ToastLevel>,
    #[prop(into)] visible: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let opacity_class = move || {
        if visible.get() {
            "opacity-100"
        } else {
            "opacity-0 pointer-events-none"
        }
    };

    let tone_class = move || match level.get() {
        ToastLevel::Success => "text-seafoam-600 dark:text-mint-300",
        ToastLevel::Error => "text-salmon-600 dark:text-salmon-400",
    };

    view! {
        <div
            role="status"
            class=move || {
                format!(
                    "{} {} fixed bottom-4 right-4 bg-gray-100 dark:bg-teal-800 px-4 py-2 rounded shadow-lg transition-opacity duration-300",
                    opacity_class(),
                    tone_class(),
                )
            }
        >
            {move || message.get()}
            <button
                class="ml-2 text-gray-500 hover:text-gray-700 dark:text-gray-400 dark:hover:text-gray-200"
                on:click=move |_| on_close.run(())
            >
                "×"
            </button>
        </div>
    }
}

/// Renders whatever the [`ToastContext`] currently holds.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toast = use_toast();

    view! {
        <Toast
            message=toast.message
            level=toast.level
            visible=toast.visible
            on_close=move || toast.dismiss()
        />
    }
}
