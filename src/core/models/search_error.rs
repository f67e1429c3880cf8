use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("could not build search request: {0}")]
    RequestBuild(String),

    #[error("could not search query {query:?}: {source}")]
    Transport {
        query: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("search for query {query:?} timed out")]
    Timeout { query: String },

    #[error("search for query {query:?} was cancelled")]
    Cancelled { query: String },

    #[error("search api responded with HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("could not decode search results: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("empty response")]
    EmptyResponse,
}

impl SearchError {
    /// Network-level failures, including timeouts and caller cancellation.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            SearchError::Transport { .. } | SearchError::Timeout { .. } | SearchError::Cancelled { .. }
        )
    }

    pub(crate) fn from_reqwest(query: &str, error: reqwest::Error) -> Self {
        if error.is_timeout() {
            SearchError::Timeout {
                query: query.to_string(),
            }
        } else if error.is_builder() {
            SearchError::RequestBuild(error.to_string())
        } else {
            SearchError::Transport {
                query: query.to_string(),
                source: error,
            }
        }
    }
}
