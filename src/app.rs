//! Search orchestration.
//!
//! [`App`] owns the search history, the accumulated stories and the search
//! term the user is typing. Every user action that changes the current
//! search admits a new descriptor into the history and starts one fetch
//! cycle for it, returned as a [`PendingFetch`]. The caller decides where the
//! network call runs (inline or on a spawned task) and hands the resulting
//! [`FetchOutcome`] back through [`App::complete`].
//!
//! Outcomes are applied in the order they are completed, not the order their
//! requests were started. With `fence_stale_results` disabled (the default)
//! a slow response for an older descriptor is still applied, so a late page
//! of a previous search can be appended to a newer search's results. With it
//! enabled, outcomes for anything other than the current history entry are
//! dropped.

use crate::config::Config;
use crate::history::SearchHistory;
use crate::request::{RequestError, SearchDescriptor};
use crate::search::SearchApi;
use crate::store::KeyValueStore;
use crate::stories::{Stories, StoriesAction, StoriesState};
use std::sync::Arc;
use thiserror::Error;

/// Store key holding the last search term.
pub const SEARCH_TERM_KEY: &str = "search";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error(transparent)]
    Request(#[from] RequestError),
    #[error("no active search to continue")]
    NoActiveSearch,
}

/// The transition produced by one finished fetch, tagged with the
/// descriptor it was requested for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutcome {
    descriptor: SearchDescriptor,
    action: StoriesAction,
}

impl FetchOutcome {
    pub fn descriptor(&self) -> &SearchDescriptor {
        &self.descriptor
    }

    pub fn action(&self) -> &StoriesAction {
        &self.action
    }

    pub fn is_success(&self) -> bool {
        matches!(self.action, StoriesAction::FetchSuccess { .. })
    }
}

/// A started fetch cycle whose network call has not run yet.
#[must_use = "a pending fetch does nothing until it is run"]
pub struct PendingFetch<A> {
    descriptor: SearchDescriptor,
    api: Arc<A>,
}

impl<A: SearchApi> PendingFetch<A> {
    pub fn descriptor(&self) -> &SearchDescriptor {
        &self.descriptor
    }

    /// Performs the request. Always yields exactly one success or failure.
    pub async fn run(self) -> FetchOutcome {
        let action = match self.api.search(&self.descriptor).await {
            Ok(page) => {
                tracing::debug!(
                    term = self.descriptor.decode(),
                    page = page.page,
                    hits = page.hits.len(),
                    "fetch succeeded"
                );
                StoriesAction::FetchSuccess {
                    page: page.page,
                    list: page.hits,
                }
            }
            Err(e) => {
                tracing::warn!(
                    term = self.descriptor.decode(),
                    page = self.descriptor.page(),
                    error = %e,
                    "fetch failed"
                );
                StoriesAction::FetchFailure
            }
        };

        FetchOutcome {
            descriptor: self.descriptor,
            action,
        }
    }
}

pub struct App<A, S> {
    config: Config,
    api: Arc<A>,
    store: S,
    search_term: String,
    history: SearchHistory,
    stories: Stories,
    is_loading_more: bool,
}

impl<A: SearchApi, S: KeyValueStore> App<A, S> {
    /// Seeds the search term from the store (or the configured default) and
    /// makes it the first history entry. No fetch is started.
    pub fn new(config: Config, api: Arc<A>, store: S) -> Result<Self, AppError> {
        let search_term = store
            .get(SEARCH_TERM_KEY)
            .filter(|term| !term.trim().is_empty())
            .unwrap_or_else(|| config.default_term.clone());
        let history = SearchHistory::new().admit(SearchDescriptor::encode(search_term.clone(), 0)?);

        tracing::debug!(term = %search_term, "initialized search state");

        Ok(Self {
            config,
            api,
            store,
            search_term,
            history,
            stories: Stories::new(),
            is_loading_more: false,
        })
    }

    /// Updates the term being typed and persists it. Store failures are
    /// logged and otherwise ignored.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        let term = term.into();
        if term == self.search_term {
            return;
        }
        self.search_term = term;

        if let Err(e) = self.store.set(SEARCH_TERM_KEY, &self.search_term) {
            tracing::warn!(error = %e, "failed to persist search term");
        }
    }

    /// Starts a fresh search for the current term.
    pub fn submit_search(&mut self) -> Result<PendingFetch<A>, AppError> {
        let descriptor = SearchDescriptor::encode(self.search_term.clone(), 0)?;
        self.is_loading_more = false;
        Ok(self.admit(descriptor))
    }

    /// Sets `term` and starts a fresh search for it. A blank term is
    /// rejected before the stored term is touched.
    pub fn search_for(&mut self, term: &str) -> Result<PendingFetch<A>, AppError> {
        let descriptor = SearchDescriptor::encode(term, 0)?;
        self.set_search_term(term);
        self.is_loading_more = false;
        Ok(self.admit(descriptor))
    }

    /// Re-runs a previous search from its first page.
    pub fn choose_last_search(&mut self, term: &str) -> Result<PendingFetch<A>, AppError> {
        self.search_for(term)
    }

    /// Requests the page after the last one loaded for the current search.
    pub fn load_more(&mut self) -> Result<PendingFetch<A>, AppError> {
        let current = self.history.current().ok_or(AppError::NoActiveSearch)?;
        let next_page = self.stories.state().page + 1;
        let descriptor = SearchDescriptor::encode(current.decode(), next_page)?;
        self.is_loading_more = true;
        Ok(self.admit(descriptor))
    }

    /// Starts a fetch cycle for the current history entry without admitting
    /// anything new.
    pub fn refresh(&mut self) -> Result<PendingFetch<A>, AppError> {
        let descriptor = self
            .history
            .current()
            .cloned()
            .ok_or(AppError::NoActiveSearch)?;
        Ok(self.begin(descriptor))
    }

    pub fn remove_story(&mut self, object_id: &str) {
        self.stories.dispatch(StoriesAction::RemoveStory {
            object_id: object_id.to_string(),
        });
    }

    /// Applies a finished fetch. Returns `false` when the outcome was
    /// discarded as stale.
    pub fn complete(&mut self, outcome: FetchOutcome) -> bool {
        if self.config.fence_stale_results && self.history.current() != Some(&outcome.descriptor) {
            tracing::debug!(
                term = outcome.descriptor.decode(),
                page = outcome.descriptor.page(),
                "discarding stale fetch outcome"
            );
            return false;
        }

        self.stories.dispatch(outcome.action);
        true
    }

    /// Runs `pending` inline and applies its outcome.
    pub async fn settle(&mut self, pending: PendingFetch<A>) -> bool {
        let outcome = pending.run().await;
        self.complete(outcome)
    }

    /// Fetches the current history entry and waits for the result.
    pub async fn fetch(&mut self) -> Result<bool, AppError> {
        let pending = self.refresh()?;
        Ok(self.settle(pending).await)
    }

    fn admit(&mut self, descriptor: SearchDescriptor) -> PendingFetch<A> {
        self.history = self.history.admit(descriptor.clone());
        self.begin(descriptor)
    }

    fn begin(&mut self, descriptor: SearchDescriptor) -> PendingFetch<A> {
        tracing::debug!(
            term = descriptor.decode(),
            page = descriptor.page(),
            "starting fetch cycle"
        );
        self.stories.dispatch(StoriesAction::FetchInit);
        PendingFetch {
            descriptor,
            api: Arc::clone(&self.api),
        }
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn stories(&self) -> &StoriesState {
        self.stories.state()
    }

    pub fn history(&self) -> &SearchHistory {
        &self.history
    }

    pub fn last_searches(&self) -> Vec<&str> {
        self.history.past_searches()
    }

    /// The `n`th last search as listed by [`last_searches`](Self::last_searches),
    /// counting from 1.
    pub fn last_search(&self, n: usize) -> Option<&str> {
        n.checked_sub(1)
            .and_then(|index| self.history.past_searches().get(index).copied())
    }

    pub fn is_loading_more(&self) -> bool {
        self.is_loading_more
    }

    /// Whether the story list should be shown. It stays visible while more
    /// pages load, but is hidden while a fresh search loads.
    pub fn show_list(&self) -> bool {
        !self.stories().is_loading || self.is_loading_more
    }

    pub fn can_load_more(&self) -> bool {
        !self.stories().is_loading
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
