use serde::{Deserialize, Serialize};

/// A single search hit. Only `object_id` identifies a story; every other
/// field is display data and may be missing from the payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    #[serde(rename = "objectID")]
    pub object_id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub num_comments: Option<u32>,
    #[serde(default)]
    pub points: Option<u32>,
}

/// Accumulated results of the current search plus its fetch flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoriesState {
    pub data: Vec<Story>,
    pub page: u32,
    pub is_loading: bool,
    pub is_error: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoriesAction {
    FetchInit,
    FetchSuccess { page: u32, list: Vec<Story> },
    FetchFailure,
    RemoveStory { object_id: String },
}

/// Applies one transition.
///
/// A successful fetch of page 0 replaces the accumulated stories, any later
/// page is appended to them. Failures keep whatever was already loaded.
pub fn reduce(state: StoriesState, action: StoriesAction) -> StoriesState {
    match action {
        StoriesAction::FetchInit => StoriesState {
            is_loading: true,
            is_error: false,
            ..state
        },
        StoriesAction::FetchSuccess { page, list } => {
            let data = if page == 0 {
                list
            } else {
                let mut data = state.data;
                data.extend(list);
                data
            };
            StoriesState {
                data,
                page,
                is_loading: false,
                is_error: false,
            }
        }
        StoriesAction::FetchFailure => StoriesState {
            is_loading: false,
            is_error: true,
            ..state
        },
        StoriesAction::RemoveStory { object_id } => {
            let mut data = state.data;
            data.retain(|story| story.object_id != object_id);
            StoriesState { data, ..state }
        }
    }
}

/// Owner of a [`StoriesState`]; the only place it is mutated.
#[derive(Debug, Default)]
pub struct Stories {
    state: StoriesState,
}

impl Stories {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dispatch(&mut self, action: StoriesAction) {
        tracing::trace!(?action, "dispatching stories action");
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, action);
    }

    pub fn state(&self) -> &StoriesState {
        &self.state
    }
}
