use async_trait::async_trait;

use crate::core::cancellation::CancellationContext;
use crate::core::interfaces::adapters::StorySearchProvider;
use crate::core::models::{SearchError, SearchResponse};
use crate::global_constants;
use crate::search_settings::SearchSettings;

/// Client for the Hacker News search API hosted by Algolia.
///
/// Holds no per-call state; clone it or share it behind an `Arc` across
/// message handlers.
#[derive(Debug, Clone)]
pub struct HackerNewsSearchProvider {
    client: reqwest::Client,
    settings: SearchSettings,
}

impl HackerNewsSearchProvider {
    pub fn new() -> Result<Self, SearchError> {
        Self::with_settings(SearchSettings::default())
    }

    pub fn with_settings(settings: SearchSettings) -> Result<Self, SearchError> {
        let client = reqwest::Client::builder()
            .timeout(settings.timeout())
            .build()
            .map_err(|e| SearchError::RequestBuild(e.to_string()))?;

        Ok(Self { client, settings })
    }

    pub fn settings(&self) -> &SearchSettings {
        &self.settings
    }

    pub fn search_url(&self, query: &str) -> String {
        format!(
            "{}?query={}&tags={}",
            self.settings.base_url,
            urlencoding::encode(query),
            urlencoding::encode(&self.settings.tags)
        )
    }

    async fn fetch(&self, query: &str) -> Result<SearchResponse, SearchError> {
        let search_url = self.search_url(query);
        log::debug!(
            target: self.log_target(),
            "{} {}: {}",
            global_constants::LOG_TAG_HACKERNEWS,
            global_constants::MESSAGE_SEARCH_URL,
            search_url
        );

        let response = self
            .client
            .get(&search_url)
            .send()
            .await
            .map_err(|e| SearchError::from_reqwest(query, e))?;

        let status = response.status();
        // Read the whole body before inspecting it so the connection is released.
        let body = response
            .bytes()
            .await
            .map_err(|e| SearchError::from_reqwest(query, e))?;

        if !status.is_success() {
            let preview: String = String::from_utf8_lossy(&body)
                .chars()
                .take(global_constants::ERROR_BODY_PREVIEW_CHARS)
                .collect();
            return Err(SearchError::Status {
                status: status.as_u16(),
                body: preview,
            });
        }

        parse_search_response(&body)
    }

    fn log_target(&self) -> &str {
        &self.settings.log_target
    }
}

/// Decodes a `{"hits": [...]}` body.
pub fn parse_search_response(body: &[u8]) -> Result<SearchResponse, SearchError> {
    let parsed: Option<SearchResponse> = serde_json::from_slice(body)?;
    parsed.ok_or(SearchError::EmptyResponse)
}

#[async_trait]
impl StorySearchProvider for HackerNewsSearchProvider {
    async fn search(
        &self,
        ctx: &CancellationContext,
        query: &str,
    ) -> Result<SearchResponse, SearchError> {
        log::info!(
            target: self.log_target(),
            "{} {} {:?}",
            global_constants::LOG_TAG_HACKERNEWS,
            global_constants::MESSAGE_SEARCHING,
            query
        );

        let result = tokio::select! {
            biased;
            _ = ctx.cancelled() => Err(SearchError::Cancelled {
                query: query.to_string(),
            }),
            _ = ctx.deadline_elapsed() => Err(SearchError::Timeout {
                query: query.to_string(),
            }),
            result = self.fetch(query) => result,
        };

        match &result {
            Ok(response) => log::debug!(
                target: self.log_target(),
                "{} {} {} {:?}",
                global_constants::LOG_TAG_HACKERNEWS,
                response.len(),
                global_constants::MESSAGE_SEARCH_HITS,
                query
            ),
            Err(e) => log::error!(
                target: self.log_target(),
                "{} {}: {}",
                global_constants::LOG_TAG_HACKERNEWS,
                global_constants::MESSAGE_SEARCH_FAILED,
                e
            ),
        }

        result
    }
}
