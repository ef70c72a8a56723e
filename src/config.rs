use reqwest::Url;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_API_BASE: &str = "https://hn.algolia.com/api/v1";
pub const DEFAULT_HITS_PER_PAGE: u32 = 16;
pub const DEFAULT_SEARCH_TERM: &str = "React";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base: Url,
    pub hits_per_page: u32,
    pub default_term: String,
    pub store_path: PathBuf,
    pub fence_stale_results: bool,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            hits_per_page: DEFAULT_HITS_PER_PAGE,
            default_term: DEFAULT_SEARCH_TERM.to_string(),
            store_path: PathBuf::from(".hacker-stories.json"),
            fence_stale_results: false,
            log_filter: "warn".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let api_base = env::var("HN_API_BASE")
            .ok()
            .and_then(|s| Url::parse(s.trim()).ok())
            .unwrap_or(defaults.api_base);

        Self {
            api_base,
            hits_per_page: env::var("HN_HITS_PER_PAGE")
                .ok()
                .and_then(|s| s.trim().parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(defaults.hits_per_page),
            default_term: env::var("HN_DEFAULT_TERM")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(defaults.default_term),
            store_path: env::var("HN_STORE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.store_path),
            fence_stale_results: env::var("HN_FENCE_STALE")
                .unwrap_or_else(|_| "false".to_string())
                .to_lowercase()
                == "true",
            log_filter: env::var("HN_LOG").unwrap_or(defaults.log_filter),
        }
    }
}

fn default_api_base() -> Url {
    Url::parse(DEFAULT_API_BASE).expect("DEFAULT_API_BASE is a valid URL")
}
