use std::fmt::{self, Write};

use crate::core::models::{SearchResponse, SearchResult};
use crate::global_constants;

/// Renders search results as one chat message of at most
/// [`global_constants::MAX_MESSAGE_SIZE`] characters.
pub fn format_search_response(response: Option<&SearchResponse>) -> String {
    format_search_response_with_limit(response, global_constants::MAX_MESSAGE_SIZE)
}

/// Same as [`format_search_response`] with an explicit character limit.
///
/// Long output is cut at exactly `max_chars` characters, which may land in
/// the middle of a block.
pub fn format_search_response_with_limit(
    response: Option<&SearchResponse>,
    max_chars: usize,
) -> String {
    let Some(response) = response else {
        return String::new();
    };

    let mut rendered = response.to_string();
    truncate_chars(&mut rendered, max_chars);
    rendered
}

fn truncate_chars(text: &mut String, max_chars: usize) {
    if let Some((byte_index, _)) = text.char_indices().nth(max_chars) {
        text.truncate(byte_index);
    }
}

fn write_result(f: &mut impl Write, hit: &SearchResult) -> fmt::Result {
    writeln!(f, "**{}**", hit.title)?;
    if hit.has_url() {
        writeln!(f, "Link: {}", hit.url)?;
    }
    writeln!(
        f,
        "Posted: {}",
        hit.created_at.format(global_constants::POSTED_AT_FORMAT)
    )?;
    f.write_char('\n')
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_result(f, self)
    }
}

/// Full rendering with no length limit.
impl fmt::Display for SearchResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for hit in self {
            write_result(f, hit)?;
        }
        Ok(())
    }
}
