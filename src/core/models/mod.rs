mod search_error;
mod search_result;

pub use search_error::SearchError;
pub use search_result::{SearchResponse, SearchResult};
