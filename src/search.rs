use chrono::{DateTime, TimeDelta, Utc};

/// Interaction state of the location search box
#[derive(Clone, Debug, PartialEq)]
pub enum SearchState {
    Idle,
    Searching { query: String, last_input: DateTime<Utc> },
    Dismissing,
}

/// Things that can happen to the search box
#[derive(Clone, Debug, PartialEq)]
pub enum SearchEvent {
    /// The text in the box changed
    Input(String),
    /// Focus left the box, escape was pressed or a result was picked
    Dismiss,
    /// The results panel has finished closing
    DismissDone,
}

impl SearchState {
    /// Returns the state following the given event.
    ///
    /// New input always starts or updates a search, also while a dismiss is in progress.
    /// A finishing dismiss only returns to idle if nothing else has happened since it started.
    ///
    /// # Arguments
    ///
    /// * 'event' - the event to apply
    /// * 'now' - time of the event
    pub fn next(self, event: SearchEvent, now: DateTime<Utc>) -> SearchState {
        match (self, event) {
            (_, SearchEvent::Input(text)) => {
                let query = text.trim();
                if query.is_empty() {
                    SearchState::Idle
                } else {
                    SearchState::Searching { query: query.to_string(), last_input: now }
                }
            },
            (SearchState::Searching { .. }, SearchEvent::Dismiss) => SearchState::Dismissing,
            (SearchState::Dismissing, SearchEvent::DismissDone) => SearchState::Idle,
            (state, _) => state,
        }
    }

    /// Returns the query to search for once input has been quiet for the debounce period
    ///
    /// # Arguments
    ///
    /// * 'now' - current time
    /// * 'debounce' - how long input must be quiet
    pub fn pending_query(&self, now: DateTime<Utc>, debounce: TimeDelta) -> Option<&str> {
        match self {
            SearchState::Searching { query, last_input } if now - *last_input >= debounce => Some(query.as_str()),
            _ => None,
        }
    }

    /// Returns true while search results should be visible
    pub fn shows_results(&self) -> bool {
        matches!(self, SearchState::Searching { .. })
    }
}
