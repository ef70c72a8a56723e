use crate::request::SearchDescriptor;

/// Number of distinct searches kept in the history.
pub const MAX_HISTORY: usize = 5;

/// Distinct recent searches, most recent last.
///
/// No two entries share a term. The last entry is the current search and
/// decides what gets fetched next.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchHistory {
    entries: Vec<SearchDescriptor>,
}

impl SearchHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new history with `descriptor` as the current entry.
    ///
    /// Any entry with the same term is dropped first, then the oldest
    /// entries are evicted down to [`MAX_HISTORY`].
    #[must_use]
    pub fn admit(&self, descriptor: SearchDescriptor) -> Self {
        let mut entries: Vec<SearchDescriptor> = self
            .entries
            .iter()
            .filter(|entry| !entry.is_equivalent(&descriptor))
            .cloned()
            .collect();
        entries.push(descriptor);

        let keep_from = entries.len().saturating_sub(MAX_HISTORY);
        Self {
            entries: entries.split_off(keep_from),
        }
    }

    pub fn current(&self) -> Option<&SearchDescriptor> {
        self.entries.last()
    }

    /// Terms of every entry except the current one, most recent first.
    pub fn past_searches(&self) -> Vec<&str> {
        self.entries
            .iter()
            .rev()
            .skip(1)
            .map(SearchDescriptor::decode)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SearchDescriptor> {
        self.entries.iter()
    }
}
