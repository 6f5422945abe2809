//! Catalog
//!
//! State of an exercise catalog screen: filter selection, search text and the currently
//! displayed exercises. The state machine performs no I/O. Every input returns a [`Command`]
//! which the driver executes, and fetch results are fed back through [`ExerciseCatalog::apply`].
//!
//! Only the response to the most recently issued request is applied. Failed fetches clear the
//! displayed list instead of surfacing an error to the user.

use chrono::{DateTime, Utc};
use derive_more::{Deref, Display};
use log::{debug, warn};

use crate::{Debouncer, Exercise, FetchError, FilterOption, SearchQuery, SelectionState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    SelectionChanged(FilterOption),
    SearchTextChanged(String),
    SubmitRequested,
    Disposed,
}

#[derive(Deref, Display, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestID(u64);

impl From<u64> for RequestID {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub id: RequestID,
    pub query: SearchQuery,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub id: RequestID,
    pub result: Result<Vec<Exercise>, FetchError>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    None,
    /// Start a fetch. Any scheduled debounce deadline is void.
    Fetch(FetchRequest),
    /// Arm the debounce timer for the given deadline, replacing an armed one.
    Schedule(DateTime<Utc>),
    /// Release the timer and all in-flight fetches.
    Dispose,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogView<'a> {
    pub query: SearchQuery,
    pub selection: SelectionState,
    pub search_text: &'a str,
    pub exercises: &'a [Exercise],
    pub loading: bool,
    pub error: Option<&'a FetchError>,
}

impl CatalogView<'_> {
    /// No results are available after a completed fetch.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.loading && self.exercises.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct ExerciseCatalog {
    selection: SelectionState,
    search_text: String,
    debouncer: Debouncer,
    exercises: Vec<Exercise>,
    loading: bool,
    error: Option<FetchError>,
    latest_request: Option<RequestID>,
    disposed: bool,
}

impl ExerciseCatalog {
    #[must_use]
    pub fn new(debouncer: Debouncer) -> Self {
        Self {
            debouncer,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn selection(&self) -> SelectionState {
        self.selection
    }

    #[must_use]
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    #[must_use]
    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn error(&self) -> Option<&FetchError> {
        self.error.as_ref()
    }

    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    #[must_use]
    pub fn deadline(&self) -> Option<DateTime<Utc>> {
        self.debouncer.deadline()
    }

    #[must_use]
    pub fn query(&self) -> SearchQuery {
        SearchQuery::build(&self.selection, &self.search_text)
    }

    #[must_use]
    pub fn view(&self) -> CatalogView<'_> {
        CatalogView {
            query: self.query(),
            selection: self.selection,
            search_text: &self.search_text,
            exercises: &self.exercises,
            loading: self.loading,
            error: self.error.as_ref(),
        }
    }

    pub fn handle(&mut self, event: Event, now: DateTime<Utc>) -> Command {
        if self.disposed {
            debug!("ignoring {event:?} after disposal");
            return Command::None;
        }

        match event {
            Event::SelectionChanged(option) => {
                self.selection.toggle(option);
                self.debouncer.cancel();
                Command::Fetch(self.issue_request())
            }
            Event::SearchTextChanged(text) => {
                self.search_text = text;
                Command::Schedule(self.debouncer.on_text_changed(now))
            }
            Event::SubmitRequested => {
                self.debouncer.on_submit();
                Command::Fetch(self.issue_request())
            }
            Event::Disposed => {
                self.disposed = true;
                self.debouncer.cancel();
                self.loading = false;
                self.latest_request = None;
                Command::Dispose
            }
        }
    }

    /// Issues the debounced fetch once its deadline has passed.
    pub fn poll(&mut self, now: DateTime<Utc>) -> Option<FetchRequest> {
        if self.disposed || !self.debouncer.poll(now) {
            return None;
        }
        Some(self.issue_request())
    }

    /// Applies the result of a fetch.
    ///
    /// Returns `false` if the response belongs to a superseded request and was discarded.
    pub fn apply(&mut self, response: FetchResponse) -> bool {
        if self.disposed || self.latest_request != Some(response.id) {
            debug!("discarding stale response to request {}", response.id);
            return false;
        }

        self.loading = false;

        match response.result {
            Ok(exercises) => {
                debug!(
                    "received {} exercises for request {}",
                    exercises.len(),
                    response.id
                );
                self.exercises = exercises;
                self.error = None;
            }
            Err(err) => {
                warn!("failed to fetch exercises for request {}: {err}", response.id);
                self.exercises.clear();
                self.error = Some(err);
            }
        }

        true
    }

    fn issue_request(&mut self) -> FetchRequest {
        let id = RequestID(self.latest_request.map_or(0, |id| *id + 1));
        self.latest_request = Some(id);
        self.loading = true;
        FetchRequest {
            id,
            query: self.query(),
        }
    }
}
