use std::io::Read;

use anyhow::Context;

use hn_search_bot::global_constants;
use hn_search_bot::{
    compile_links, extract_command_query, format_search_response_with_limit, is_command,
    CancellationContext, HackerNewsSearchProvider, SearchSettings, StorySearchProvider,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let input = std::env::args().skip(1).collect::<Vec<_>>().join(" ");

    if is_command(&input, global_constants::LINKS_COMMAND_PREFIX) {
        let mut history = String::new();
        std::io::stdin()
            .read_to_string(&mut history)
            .context("Could not read messages from stdin")?;
        let messages: Vec<&str> = history.lines().collect();
        print!("{}", compile_links(&messages));
        return Ok(());
    }

    // A bare query works the same as `!hackernews <query>`.
    let query = if is_command(&input, global_constants::HACKERNEWS_COMMAND_PREFIX) {
        extract_command_query(&input, global_constants::HACKERNEWS_COMMAND_PREFIX)
    } else {
        Some(input.trim()).filter(|q| !q.is_empty())
    };
    let Some(query) = query else {
        eprintln!("{}", global_constants::USAGE);
        std::process::exit(2);
    };

    log::info!(
        target: global_constants::DEFAULT_LOG_TARGET,
        "{} {}",
        global_constants::LOG_TAG_MAIN,
        global_constants::MESSAGE_STARTING_APP
    );

    let settings = SearchSettings::load().context("Could not load search settings")?;
    let max_message_size = settings.max_message_size;
    let provider = HackerNewsSearchProvider::with_settings(settings)
        .context("Could not initialize search client")?;

    let ctx = CancellationContext::new();
    let response = provider
        .search(&ctx, query)
        .await
        .with_context(|| format!("{} for {:?}", global_constants::MESSAGE_SEARCH_FAILED, query))?;

    print!(
        "{}",
        format_search_response_with_limit(Some(&response), max_message_size)
    );

    Ok(())
}
