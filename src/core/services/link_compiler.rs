use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;

use crate::global_constants;

lazy_static! {
    static ref URL: Regex = Regex::new(r"(?i)\b[a-z][a-z0-9+.\-]*://[^\s<>]+").unwrap();
}

const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', '\'', '"'];

/// URLs with an explicit scheme, in the order they appear in `message`.
pub fn extract_links(message: &str) -> Vec<&str> {
    URL.find_iter(message)
        .map(|m| trim_url(m.as_str()))
        .filter(|url| !url.is_empty())
        .collect()
}

// Drops sentence punctuation and a closing paren that has no opening partner.
fn trim_url(mut url: &str) -> &str {
    loop {
        let trimmed = url.trim_end_matches(TRAILING_PUNCTUATION);
        let trimmed = match trimmed.strip_suffix(')') {
            Some(inner) if inner.matches('(').count() < inner.matches(')').count() + 1 => inner,
            _ => trimmed,
        };
        if trimmed.len() == url.len() {
            return trimmed;
        }
        url = trimmed;
    }
}

/// Collects the distinct links posted across `messages`, one per line.
///
/// Links keep the order they were first seen. When the list would reach past
/// [`global_constants::MAX_MESSAGE_SIZE`] characters the fixed
/// [`global_constants::MESSAGE_TOO_MANY_LINKS`] notice is returned instead.
pub fn compile_links(messages: &[&str]) -> String {
    compile_links_with_limit(messages, global_constants::MAX_MESSAGE_SIZE)
}

pub fn compile_links_with_limit(messages: &[&str], max_chars: usize) -> String {
    let mut seen = HashSet::new();
    let mut compiled = String::new();

    for link in messages.iter().flat_map(|message| extract_links(*message)) {
        if seen.insert(link) {
            compiled.push_str(link);
            compiled.push('\n');
        }
    }

    log::debug!(
        target: global_constants::DEFAULT_LOG_TARGET,
        "{} {} {} links from {} messages",
        global_constants::LOG_TAG_LINKS,
        global_constants::MESSAGE_LINKS_RECORDED,
        seen.len(),
        messages.len()
    );

    if compiled.chars().count() > max_chars {
        return global_constants::MESSAGE_TOO_MANY_LINKS.to_string();
    }
    compiled
}
