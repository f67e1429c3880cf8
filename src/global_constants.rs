pub const APPLICATION_NAME: &str = "hn-search-bot";

pub const LOG_TAG_HACKERNEWS: &str = "[HACKERNEWS]";
pub const LOG_TAG_SETTINGS: &str = "[SETTINGS]";
pub const LOG_TAG_MAIN: &str = "[MAIN]";
pub const LOG_TAG_LINKS: &str = "[LINKS]";

pub const DEFAULT_LOG_TARGET: &str = "hackernews";

pub const HACKERNEWS_COMMAND_PREFIX: &str = "!hackernews";
pub const LINKS_COMMAND_PREFIX: &str = "!links";

pub const HACKERNEWS_SEARCH_URL: &str = "https://hn.algolia.com/api/v1/search_by_date";
pub const DEFAULT_SEARCH_TAGS: &str = "story";
pub const DEFAULT_SEARCH_TIMEOUT_MS: u64 = 1000;

pub const POSTED_AT_FORMAT: &str = "%a, %b %e at %H:%M";
pub const MAX_MESSAGE_SIZE: usize = 2000;

/// Upper bound on how much of a failed response body is kept in a status error.
pub const ERROR_BODY_PREVIEW_CHARS: usize = 200;

pub const SETTINGS_FILE_NAME: &str = "settings.json";

pub const ENV_BASE_URL: &str = "HN_SEARCH_BASE_URL";
pub const ENV_TAGS: &str = "HN_SEARCH_TAGS";
pub const ENV_TIMEOUT_MS: &str = "HN_SEARCH_TIMEOUT_MS";
pub const ENV_MAX_MESSAGE_SIZE: &str = "HN_SEARCH_MAX_MESSAGE_SIZE";

pub const MESSAGE_STARTING_APP: &str = "starting hn-search-bot";
pub const MESSAGE_SEARCHING: &str = "searching for";
pub const MESSAGE_SEARCH_URL: &str = "search url";
pub const MESSAGE_SEARCH_HITS: &str = "hits returned for";
pub const MESSAGE_SEARCH_FAILED: &str = "could not search hacker news API";
pub const MESSAGE_SETTINGS_DEFAULTS: &str = "no settings file found, using defaults";
pub const MESSAGE_SETTINGS_LOADED: &str = "loaded settings from";
pub const MESSAGE_LINKS_RECORDED: &str = "recorded";

pub const MESSAGE_TOO_MANY_LINKS: &str = "That's a lot of links (length over 2000 characters)";

pub const USAGE: &str = "usage: hn-search [!hackernews] <query>... | hn-search !links < messages.txt";
