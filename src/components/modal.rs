use leptos::prelude::*;
use leptos_icons::Icon;

/// Dialog over a dimmed backdrop. Clicking the backdrop or the close button
/// dismisses it unless `busy` is set.
#[component]
pub fn Modal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] busy: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    let request_close = move || {
        if !busy.get_untracked() {
            on_close.run(());
        }
    };

    view! {
        <Show when=move || open.get()>
            <div
                class="fixed inset-0 bg-black/70 flex justify-center items-center z-50"
                on:click=move |_| request_close()
            >
                <div
                    role="dialog"
                    aria-modal="true"
                    class="relative bg-white dark:bg-teal-800 rounded-lg shadow-2xl p-6 w-full max-w-2xl mx-4"
                    on:click=|ev| ev.stop_propagation()
                >
                    <button
                        type="button"
                        aria-label="Close"
                        class="absolute top-3 right-3 text-gray-500 hover:text-gray-800 dark:text-gray-300 dark:hover:text-white disabled:opacity-40"
                        disabled=move || busy.get()
                        on:click=move |_| request_close()
                    >
                        <Icon icon=icondata_bs::BsXLg width="16" height="16"/>
                    </button>
                    {children()}
                </div>
            </div>
        </Show>
    }
}
