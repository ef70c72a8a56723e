use reqwest::Url;
use thiserror::Error;

const SEARCH_PATH: &str = "search";
const PARAM_SEARCH: &str = "query";
const PARAM_PAGE: &str = "page";
const PARAM_HITS_PER_PAGE: &str = "hitsPerPage";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("search term must not be empty")]
    InvalidInput,
    #[error("not a search request URL: {0}")]
    MalformedUrl(String),
}

/// One fetchable request: a search term and the result page to load.
///
/// Descriptors are compared for history purposes with [`is_equivalent`],
/// which ignores the page.
///
/// [`is_equivalent`]: SearchDescriptor::is_equivalent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchDescriptor {
    term: String,
    page: u32,
}

impl SearchDescriptor {
    /// Builds a descriptor. The term is kept exactly as given; it is only
    /// rejected when nothing but whitespace remains after trimming.
    pub fn encode(term: impl Into<String>, page: u32) -> Result<Self, RequestError> {
        let term = term.into();
        if term.trim().is_empty() {
            return Err(RequestError::InvalidInput);
        }
        Ok(Self { term, page })
    }

    pub fn decode(&self) -> &str {
        &self.term
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn is_equivalent(&self, other: &SearchDescriptor) -> bool {
        self.term == other.term
    }

    pub fn to_url(&self, api_base: &Url, hits_per_page: u32) -> Url {
        let mut url = api_base.clone();
        // Url::join would drop the last segment of a base without a trailing slash.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(SEARCH_PATH);
        }
        url.query_pairs_mut()
            .clear()
            .append_pair(PARAM_SEARCH, &self.term)
            .append_pair(PARAM_PAGE, &self.page.to_string())
            .append_pair(PARAM_HITS_PER_PAGE, &hits_per_page.to_string());
        url
    }

    /// Recovers the descriptor from a URL produced by [`to_url`](Self::to_url).
    pub fn from_url(url: &Url) -> Result<Self, RequestError> {
        let mut term = None;
        let mut page = None;

        for (key, value) in url.query_pairs() {
            match key.as_ref() {
                PARAM_SEARCH => term = Some(value.into_owned()),
                PARAM_PAGE => page = value.parse::<u32>().ok(),
                _ => {}
            }
        }

        match (term, page) {
            (Some(term), Some(page)) => Self::encode(term, page),
            _ => Err(RequestError::MalformedUrl(url.to_string())),
        }
    }
}
