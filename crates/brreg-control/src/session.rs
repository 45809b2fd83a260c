//! One search interaction: query, mode, results and selection.
//!
//! Responses are matched to their request through a [`SearchTicket`]. Every
//! new search or clear bumps the session generation, so a response that
//! arrives for a superseded request is dropped instead of overwriting newer
//! state.

use brreg_core::{is_valid_for_mode, CompanyRecord, Notification, SearchMode};
use brreg_registry::{SearchErrorKind, SearchFailure};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Searching,
    ResultsReady,
}

/// Proof that a search was started; hand it back with the response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    generation: u64,
    pub query: String,
    pub mode: SearchMode,
}

#[derive(Debug, Clone, Default)]
pub struct SearchSession {
    query: String,
    mode: SearchMode,
    results: Vec<CompanyRecord>,
    /// Organisation number of the selected record; always a member of `results`.
    selected: Option<String>,
    in_flight: bool,
    searched: bool,
    generation: u64,
    advanced_search: bool,
}

impl SearchSession {
    #[must_use]
    pub fn new(advanced_search: bool) -> Self {
        Self {
            advanced_search,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    #[must_use]
    pub fn results(&self) -> &[CompanyRecord] {
        &self.results
    }

    #[must_use]
    pub fn is_searching(&self) -> bool {
        self.in_flight
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        if self.in_flight {
            SessionState::Searching
        } else if self.searched {
            SessionState::ResultsReady
        } else {
            SessionState::Idle
        }
    }

    #[must_use]
    pub fn selected(&self) -> Option<&CompanyRecord> {
        let org = self.selected.as_deref()?;
        self.results.iter().find(|r| r.org_number == org)
    }

    /// Modes the user may pick; only `Name` without advanced search.
    #[must_use]
    pub fn available_modes(&self) -> &'static [SearchMode] {
        if self.advanced_search {
            &SearchMode::ALL
        } else {
            &[SearchMode::Name]
        }
    }

    /// Stores a keystroke-level edit, normalised for the current mode.
    ///
    /// Any change to the query drops the selection.
    pub fn set_query(&mut self, raw: &str) {
        let formatted = self.mode.format_input(raw);
        if formatted != self.query {
            self.selected = None;
            self.query = formatted;
        }
    }

    /// Switches mode, clearing a query that is invalid under the new mode.
    ///
    /// Returns `false` without changing anything when `mode` is gated off.
    pub fn set_mode(&mut self, mode: SearchMode) -> bool {
        if !self.available_modes().contains(&mode) {
            return false;
        }
        self.mode = mode;
        if !is_valid_for_mode(&self.query, mode) {
            self.query.clear();
            self.selected = None;
        }
        true
    }

    /// Starts a search: clears results and selection and marks the session
    /// in flight.
    ///
    /// # Errors
    ///
    /// Returns the notification to show when the trimmed query is empty; the
    /// session is left untouched.
    pub fn begin_search(&mut self) -> Result<SearchTicket, Notification> {
        let query = self.query.trim();
        if query.is_empty() {
            let failure = SearchFailure::empty_query(self.mode);
            return Err(Notification::error("Error", failure.message));
        }

        let ticket = SearchTicket {
            generation: self.generation + 1,
            query: query.to_string(),
            mode: self.mode,
        };
        self.generation = ticket.generation;
        self.results.clear();
        self.selected = None;
        self.in_flight = true;
        Ok(ticket)
    }

    /// Applies a registry response and returns the one notification to show.
    ///
    /// Returns `None` when `ticket` was superseded by a later search or clear.
    pub fn finish_search(
        &mut self,
        ticket: &SearchTicket,
        outcome: Result<Vec<CompanyRecord>, SearchFailure>,
    ) -> Option<Notification> {
        if ticket.generation != self.generation {
            tracing::debug!(
                ticket = ticket.generation,
                current = self.generation,
                "discarding stale search response"
            );
            return None;
        }

        self.in_flight = false;
        self.searched = true;
        match outcome {
            Ok(records) => {
                let notification = success_notification(ticket.mode, &records);
                self.results = records;
                Some(notification)
            }
            Err(failure) => {
                self.results.clear();
                Some(failure_notification(&failure))
            }
        }
    }

    /// Selects the result with `org_number`.
    ///
    /// Returns `None` and leaves the selection unchanged when no current
    /// result has that number.
    pub fn select(&mut self, org_number: &str) -> Option<&CompanyRecord> {
        let record = self.results.iter().find(|r| r.org_number == org_number)?;
        self.selected = Some(record.org_number.clone());
        Some(record)
    }

    pub fn deselect(&mut self) {
        self.selected = None;
    }

    /// Back to idle. Keeps the mode; invalidates any outstanding ticket.
    pub fn clear(&mut self) {
        self.query.clear();
        self.results.clear();
        self.selected = None;
        self.in_flight = false;
        self.searched = false;
        self.generation += 1;
    }

    pub fn reset_mode(&mut self) {
        self.set_mode(SearchMode::Name);
    }
}

fn success_notification(mode: SearchMode, records: &[CompanyRecord]) -> Notification {
    let body = match mode {
        SearchMode::OrgNumber => format!(
            "Found company {}",
            records.first().map_or("", |r| r.name.as_str())
        ),
        SearchMode::Name => format!("Found {} companies", records.len()),
        SearchMode::Industry => format!("Found {} companies in industry", records.len()),
    };
    Notification::success("Search successful", body)
}

/// Severity comes from the failure kind; the message is only displayed.
fn failure_notification(failure: &SearchFailure) -> Notification {
    let message = failure.message.clone();
    match failure.kind {
        SearchErrorKind::NotFound => Notification::info("No results", message),
        SearchErrorKind::Unavailable => Notification::error("Service unavailable", message),
        SearchErrorKind::InvalidInput => Notification::error("Error", message),
        SearchErrorKind::Unknown => Notification::error("Search failed", message),
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
