use crate::stories::Story;
use std::cmp::Ordering;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown sort column: {0}")]
pub struct SortKeyError(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    None,
    Title,
    Author,
    Comments,
    Points,
}

impl FromStr for SortKey {
    type Err = SortKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" => Ok(Self::None),
            "title" => Ok(Self::Title),
            "author" => Ok(Self::Author),
            "comments" | "comment" => Ok(Self::Comments),
            "points" | "point" => Ok(Self::Points),
            other => Err(SortKeyError(other.to_string())),
        }
    }
}

/// Orders present values ascending, with missing values after all of them.
fn missing_last<T: Ord>(a: &Option<T>, b: &Option<T>) -> Ordering {
    a.is_none().cmp(&b.is_none()).then_with(|| a.cmp(b))
}

/// Column sort applied at render time. Never changes the stored stories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    pub key: SortKey,
    pub is_reverse: bool,
}

impl SortState {
    /// Selecting the active column again flips the direction; selecting any
    /// other column sorts it ascending.
    #[must_use]
    pub fn toggle(self, key: SortKey) -> Self {
        Self {
            key,
            is_reverse: self.key == key && !self.is_reverse,
        }
    }

    /// Stable ascending sort by the selected column, reversed as a whole
    /// when `is_reverse` is set. Missing values sort last when ascending,
    /// and so first when reversed.
    pub fn apply<'a>(&self, stories: &'a [Story]) -> Vec<&'a Story> {
        let mut sorted: Vec<&Story> = stories.iter().collect();
        match self.key {
            SortKey::None => {}
            SortKey::Title => sorted.sort_by(|a, b| missing_last(&a.title, &b.title)),
            SortKey::Author => sorted.sort_by(|a, b| missing_last(&a.author, &b.author)),
            SortKey::Comments => {
                sorted.sort_by(|a, b| missing_last(&a.num_comments, &b.num_comments))
            }
            SortKey::Points => sorted.sort_by(|a, b| missing_last(&a.points, &b.points)),
        }
        if self.is_reverse {
            sorted.reverse();
        }
        sorted
    }

    /// Maps a `/remove` target to an objectID. A number naming a row of the
    /// sorted view (1-based) picks that row's story; anything else, including
    /// row 0 or a row past the end, is taken as an objectID.
    pub fn resolve_target(&self, stories: &[Story], target: &str) -> String {
        target
            .parse::<usize>()
            .ok()
            .and_then(|row| row.checked_sub(1))
            .and_then(|index| {
                self.apply(stories)
                    .get(index)
                    .map(|story| story.object_id.clone())
            })
            .unwrap_or_else(|| target.to_string())
    }
}
