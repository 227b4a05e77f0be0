pub mod story_api;
