use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A single story hit returned by the Hacker News search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(deserialize_with = "non_empty_title")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub url: String,
    pub created_at: DateTime<Utc>,
}

impl SearchResult {
    pub fn new(title: impl Into<String>, url: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            created_at,
        }
    }

    pub fn has_url(&self) -> bool {
        !self.url.is_empty()
    }
}

/// Hits in the order the remote service returned them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub hits: Vec<SearchResult>,
}

impl SearchResponse {
    pub fn new(hits: Vec<SearchResult>) -> Self {
        Self { hits }
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SearchResult> {
        self.hits.iter()
    }
}

impl<'a> IntoIterator for &'a SearchResponse {
    type Item = &'a SearchResult;
    type IntoIter = std::slice::Iter<'a, SearchResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.hits.iter()
    }
}

// Algolia sends `"url": null` for Ask HN and similar text posts.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn non_empty_title<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let title = String::deserialize(deserializer)?;
    if title.is_empty() {
        return Err(serde::de::Error::custom("title must not be empty"));
    }
    Ok(title)
}
