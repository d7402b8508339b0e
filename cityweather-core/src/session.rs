//! State owned by whatever drives the view: what is on screen, the
//! favorites, and the theme.
//!
//! Searches are ticketed. A response is applied only if its ticket is the
//! most recently issued one, so a slow earlier search can never overwrite a
//! faster later one.

use crate::{
    SearchError,
    favorites::FavoritesStore,
    model::{WeatherReport, WeatherSnapshot},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Identifies one issued search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SearchTicket(u64);

/// What `Session::complete` did with a search result.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Result replaced the displayed report.
    Displayed,
    /// Empty input; display left as it was.
    Rejected(SearchError),
    /// Provider or transport failure; display cleared.
    Cleared(SearchError),
    /// A newer search was issued meanwhile; result dropped.
    Discarded,
}

#[derive(Debug, Default)]
pub struct Session {
    displayed: Option<WeatherReport>,
    favorites: FavoritesStore,
    theme: Theme,
    latest: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_search(&mut self) -> SearchTicket {
        self.latest += 1;
        SearchTicket(self.latest)
    }

    pub fn complete(
        &mut self,
        ticket: SearchTicket,
        result: Result<WeatherReport, SearchError>,
    ) -> SearchOutcome {
        if ticket.0 != self.latest {
            tracing::debug!(
                ticket = ticket.0,
                latest = self.latest,
                "discarding stale search result"
            );
            return SearchOutcome::Discarded;
        }

        match result {
            Ok(report) => {
                self.displayed = Some(report);
                SearchOutcome::Displayed
            }
            Err(err @ SearchError::EmptyInput) => SearchOutcome::Rejected(err),
            Err(err) => {
                self.displayed = None;
                SearchOutcome::Cleared(err)
            }
        }
    }

    pub fn displayed(&self) -> Option<&WeatherReport> {
        self.displayed.as_ref()
    }

    pub fn current_snapshot(&self) -> Option<&WeatherSnapshot> {
        self.displayed.as_ref().map(|r| &r.snapshot)
    }

    /// Bookmark the displayed snapshot. Returns `false` when nothing is
    /// displayed or the location is already a favorite.
    pub fn add_favorite(&mut self) -> bool {
        match self.displayed.as_ref() {
            Some(report) => self.favorites.add(report.snapshot.clone()),
            None => false,
        }
    }

    pub fn favorites(&self) -> &FavoritesStore {
        &self.favorites
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }
}
