#![allow(dead_code)]

use async_trait::async_trait;
use hacker_stories::request::SearchDescriptor;
use hacker_stories::search::{SearchApi, SearchError, SearchPage};
use hacker_stories::stories::Story;
use reqwest::StatusCode;
use std::collections::HashMap;
use std::sync::Mutex;

pub fn story(object_id: &str, title: &str) -> Story {
    Story {
        object_id: object_id.to_string(),
        title: Some(title.to_string()),
        author: Some("pg".to_string()),
        url: Some(format!("https://example.com/{}", object_id)),
        num_comments: Some(0),
        points: Some(1),
    }
}

pub fn stories(ids: &[&str]) -> Vec<Story> {
    ids.iter().map(|id| story(id, &format!("Story {}", id))).collect()
}

/// Search API stand-in answering from a fixed table of (term, page) pages.
/// Unknown requests fail with a 503.
#[derive(Default)]
pub struct FakeApi {
    pages: HashMap<(String, u32), Vec<Story>>,
    calls: Mutex<Vec<SearchDescriptor>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, term: &str, page: u32, hits: Vec<Story>) -> Self {
        self.pages.insert((term.to_string(), page), hits);
        self
    }

    pub fn calls(&self) -> Vec<SearchDescriptor> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SearchApi for FakeApi {
    async fn search(&self, descriptor: &SearchDescriptor) -> Result<SearchPage, SearchError> {
        self.calls.lock().unwrap().push(descriptor.clone());
        match self
            .pages
            .get(&(descriptor.decode().to_string(), descriptor.page()))
        {
            Some(hits) => Ok(SearchPage {
                hits: hits.clone(),
                page: descriptor.page(),
            }),
            None => Err(SearchError::Status(StatusCode::SERVICE_UNAVAILABLE)),
        }
    }
}
