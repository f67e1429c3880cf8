pub mod adapters;
pub mod core;
pub mod global_constants;
pub mod search_settings;

#[cfg(test)]
mod search_client_tests;

pub use adapters::{parse_search_response, HackerNewsSearchProvider};
pub use crate::core::cancellation::CancellationContext;
pub use crate::core::interfaces::adapters::StorySearchProvider;
pub use crate::core::models::{SearchError, SearchResponse, SearchResult};
pub use crate::core::services::{
    compile_links, extract_command_query, format_search_response,
    format_search_response_with_limit, is_command,
};
pub use search_settings::SearchSettings;
