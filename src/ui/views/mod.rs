//! Application views (screens).

mod story_list;

pub use story_list::{StoryListAction, StoryListView};
