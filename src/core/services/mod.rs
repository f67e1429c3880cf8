pub mod command_query;
pub mod link_compiler;
pub mod result_formatter;

pub use command_query::{extract_command_query, is_command};
pub use link_compiler::{compile_links, compile_links_with_limit, extract_links};
pub use result_formatter::{format_search_response, format_search_response_with_limit};
