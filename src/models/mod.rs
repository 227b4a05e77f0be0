pub mod story;

pub use story::{story_path, Question, Story, StoryId, NEW_STORY_PATH, NEW_STORY_SEGMENT};
