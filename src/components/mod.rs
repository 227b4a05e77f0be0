pub mod footer;
pub mod modal;
pub mod new_story_form;
pub mod story_detail;
pub mod story_list;
pub mod streaming_story;
pub mod toast;
pub mod ui;
