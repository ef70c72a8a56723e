use crate::request::SearchDescriptor;
use crate::stories::Story;
use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Search API returned status {0}")]
    Status(StatusCode),
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One page of search hits as returned by the API.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchPage {
    pub hits: Vec<Story>,
    pub page: u32,
}

#[async_trait]
pub trait SearchApi: Send + Sync {
    async fn search(&self, descriptor: &SearchDescriptor) -> Result<SearchPage, SearchError>;
}

/// Client for the Hacker News search endpoint.
#[derive(Clone)]
pub struct HnSearch {
    client: Client,
    api_base: Url,
    hits_per_page: u32,
}

impl HnSearch {
    pub fn new(api_base: Url, hits_per_page: u32) -> Self {
        Self {
            client: Client::new(),
            api_base,
            hits_per_page,
        }
    }

    pub fn url_for(&self, descriptor: &SearchDescriptor) -> Url {
        descriptor.to_url(&self.api_base, self.hits_per_page)
    }
}

#[async_trait]
impl SearchApi for HnSearch {
    async fn search(&self, descriptor: &SearchDescriptor) -> Result<SearchPage, SearchError> {
        let url = self.url_for(descriptor);
        tracing::debug!(%url, "requesting search page");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status(status));
        }

        let body = response.bytes().await?;
        let page = serde_json::from_slice::<SearchPage>(&body)?;
        Ok(page)
    }
}
