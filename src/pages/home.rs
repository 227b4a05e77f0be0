use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::modal::Modal;
use crate::components::new_story_form::NewStoryForm;
use crate::components::story_list::StoryList;
use crate::components::toast::use_toast;
use crate::components::ui::button::Button;
use crate::models::Story;

/// The library: every story plus the create action.
#[component]
pub fn HomePage() -> impl IntoView {
    let (modal_open, set_modal_open) = signal(false);
    let submitting = RwSignal::new(false);
    let toast = use_toast();

    let open_modal = Callback::new(move |_: web_sys::MouseEvent| set_modal_open.set(true));
    let close_modal = move || set_modal_open.set(false);

    let on_success = Callback::new(move |story: Story| {
        log::info!("Story {} created", story.id);
        toast.success("Story created successfully!");
        set_modal_open.set(false);
    });

    let on_error = Callback::new(move |message: String| {
        toast.error(message);
    });

    view! {
        <div class="space-y-6">
            <div class="flex justify-between items-center">
                <h2 class="text-3xl font-bold text-gray-800 dark:text-gray-100">"Story Library"</h2>
                <Button on_click=open_modal>
                    <Icon icon=icondata_bs::BsPlusLg width="16" height="16"/>
                    "Create New Story"
                </Button>
            </div>

            <StoryList />

            <Modal open=modal_open busy=submitting on_close=close_modal>
                <NewStoryForm
                    submitting=submitting
                    on_success=on_success
                    on_error=on_error
                    on_stream=close_modal
                />
            </Modal>
        </div>
    }
}
