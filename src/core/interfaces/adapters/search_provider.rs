use async_trait::async_trait;

use crate::core::cancellation::CancellationContext;
use crate::core::models::{SearchError, SearchResponse};

#[async_trait]
pub trait StorySearchProvider: Send + Sync {
    async fn search(
        &self,
        ctx: &CancellationContext,
        query: &str,
    ) -> Result<SearchResponse, SearchError>;
}
