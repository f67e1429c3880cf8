mod search_provider;

pub use search_provider::StorySearchProvider;
