mod hacker_news_search_provider;

pub use hacker_news_search_provider::{parse_search_response, HackerNewsSearchProvider};
