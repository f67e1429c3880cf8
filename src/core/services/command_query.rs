/// Returns the trimmed text after `prefix` when `content` is a command
/// message such as `!hackernews postgres`.
///
/// The prefix must open the message and be followed by whitespace or the end
/// of the message, so `!hackernewsfoo` is not a match. A command with nothing
/// after it yields `None`.
pub fn extract_command_query<'a>(content: &'a str, prefix: &str) -> Option<&'a str> {
    let rest = content.trim_start().strip_prefix(prefix)?;
    if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
        return None;
    }

    let query = rest.trim();
    if query.is_empty() {
        None
    } else {
        Some(query)
    }
}

/// True when `content` invokes the `prefix` command, with or without arguments.
pub fn is_command(content: &str, prefix: &str) -> bool {
    match content.trim_start().strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with(char::is_whitespace),
        None => false,
    }
}
