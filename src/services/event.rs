//! Event service
//!
//! CRUD over events plus the derived views the dashboard reads: upcoming
//! events, headline counts, and search.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, error, warn};

use crate::error::{EventDeskError, EventDeskResult};
use crate::models::{Event, EventId, EventPatch, EventStatus, NewEvent};
use crate::storage::Storage;

/// Headline counts over the whole event collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EventStats {
    pub total_events: usize,
    /// Dated after now and not cancelled
    pub upcoming_events: usize,
    pub completed_events: usize,
    /// Events in progress
    pub active_events: usize,
}

impl EventStats {
    /// Count events relative to `now`
    pub fn from_events(events: &[Event], now: DateTime<Utc>) -> Self {
        Self {
            total_events: events.len(),
            upcoming_events: events.iter().filter(|e| e.is_upcoming(now)).count(),
            completed_events: events
                .iter()
                .filter(|e| e.status == EventStatus::Completed)
                .count(),
            active_events: events
                .iter()
                .filter(|e| e.status == EventStatus::InProgress)
                .count(),
        }
    }
}

/// Service for event management
pub struct EventService<'a> {
    storage: &'a Storage,
}

impl<'a> EventService<'a> {
    /// Create a new event service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// All events, newest first
    pub fn get_all(&self) -> EventDeskResult<Vec<Event>> {
        self.storage.events.list().map_err(|e| {
            error!(error = %e, "failed to fetch events");
            e
        })
    }

    /// Get an event by ID
    pub fn get_by_id(&self, id: EventId) -> EventDeskResult<Option<Event>> {
        self.storage.events.get(id).map_err(|e| {
            error!(%id, error = %e, "failed to fetch event");
            e
        })
    }

    /// Get an event by ID, treating absence as an error
    pub fn require(&self, id: EventId) -> EventDeskResult<Event> {
        self.get_by_id(id)?
            .ok_or_else(|| EventDeskError::event_not_found(id.to_string()))
    }

    /// Create a new event; status defaults to Planning
    pub fn create(&self, input: NewEvent) -> EventDeskResult<Event> {
        let event = Event::from_new(input, Utc::now());

        event
            .validate()
            .map_err(|e| EventDeskError::Validation(e.to_string()))?;

        let event = self.storage.events.insert(event)?;
        debug!(id = %event.id, title = %event.title, "created event");

        self.storage.log_create(&event);

        Ok(event)
    }

    /// Merge the supplied fields into an event
    ///
    /// Returns `None` if the event does not exist.
    pub fn update(&self, id: EventId, patch: EventPatch) -> EventDeskResult<Option<Event>> {
        let Some(before) = self.get_by_id(id)? else {
            return Ok(None);
        };

        let mut event = before.clone();
        event.apply(patch, Utc::now());

        event
            .validate()
            .map_err(|e| EventDeskError::Validation(e.to_string()))?;

        let Some(event) = self.storage.events.replace(event)? else {
            return Ok(None);
        };
        debug!(%id, "updated event");

        self.storage.log_update(&before, &event);

        Ok(Some(event))
    }

    /// Delete an event
    ///
    /// Returns `false` when the event does not exist or the store refuses.
    pub fn delete(&self, id: EventId) -> bool {
        let existing = match self.storage.events.get(id) {
            Ok(Some(event)) => event,
            Ok(None) => return false,
            Err(e) => {
                warn!(%id, error = %e, "failed to delete event");
                return false;
            }
        };

        match self.storage.events.remove(id) {
            Ok(true) => {
                debug!(%id, "deleted event");
                self.storage.log_delete(&existing);
                true
            }
            Ok(false) => false,
            Err(e) => {
                warn!(%id, error = %e, "failed to delete event");
                false
            }
        }
    }

    /// Upcoming events, soonest first; empty if events cannot be read
    pub fn get_upcoming(&self) -> Vec<Event> {
        self.get_upcoming_as_of(Utc::now())
    }

    /// Events strictly after `now` that are not cancelled, soonest first
    pub fn get_upcoming_as_of(&self, now: DateTime<Utc>) -> Vec<Event> {
        match self.storage.events.list() {
            Ok(events) => {
                let mut upcoming: Vec<_> =
                    events.into_iter().filter(|e| e.is_upcoming(now)).collect();
                upcoming.sort_by_key(|e| e.date);
                upcoming
            }
            Err(e) => {
                warn!(error = %e, "failed to fetch upcoming events");
                Vec::new()
            }
        }
    }

    /// Headline counts; all zero if events cannot be read
    pub fn get_stats(&self) -> EventStats {
        self.get_stats_as_of(Utc::now())
    }

    /// Headline counts relative to `now`
    pub fn get_stats_as_of(&self, now: DateTime<Utc>) -> EventStats {
        match self.storage.events.list() {
            Ok(events) => EventStats::from_events(&events, now),
            Err(e) => {
                warn!(error = %e, "failed to compute event stats");
                EventStats::default()
            }
        }
    }

    /// Events matching a text query and/or an exact status
    ///
    /// The query is a case-insensitive substring match on title or
    /// description; a blank query matches everything.
    pub fn search(
        &self,
        query: Option<&str>,
        status: Option<EventStatus>,
    ) -> EventDeskResult<Vec<Event>> {
        let query = query.map(str::trim).filter(|q| !q.is_empty());

        Ok(self
            .get_all()?
            .into_iter()
            .filter(|e| query.map_or(true, |q| e.matches_search(q)))
            .filter(|e| status.map_or(true, |s| e.status == s))
            .collect())
    }
}
