//! Event model
//!
//! An event is the top-level planning unit: it owns a budget, a lifecycle
//! status, and (by reference) its tasks and expenses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::EventId;
use super::money::Money;

/// Lifecycle status of an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum EventStatus {
    /// Being planned (default for new events)
    #[default]
    Planning,
    /// Underway; older data spells this "Active"
    #[serde(rename = "In Progress", alias = "Active")]
    InProgress,
    /// Finished
    Completed,
    /// Called off; never counted as upcoming
    Cancelled,
}

impl EventStatus {
    /// All statuses in display order
    pub const ALL: [EventStatus; 4] = [
        EventStatus::Planning,
        EventStatus::InProgress,
        EventStatus::Completed,
        EventStatus::Cancelled,
    ];

    /// Canonical display name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Planning => "Planning",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EventStatus {
    type Err = EventValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', '_'], " ").as_str() {
            "planning" => Ok(Self::Planning),
            "in progress" | "active" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "cancelled" | "canceled" => Ok(Self::Cancelled),
            _ => Err(EventValidationError::InvalidStatus(s.to_string())),
        }
    }
}

/// A planned event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Unique identifier
    pub id: EventId,

    /// Event title
    pub title: String,

    /// When the event takes place
    pub date: DateTime<Utc>,

    /// Free-form description (may be empty)
    #[serde(default)]
    pub description: String,

    /// Total budget for the event
    pub budget: Money,

    /// Lifecycle status
    #[serde(default)]
    pub status: EventStatus,

    /// When the event was created
    pub created_at: DateTime<Utc>,

    /// When the event was last modified
    pub updated_at: DateTime<Utc>,
}

impl Event {
    /// Build an unsaved event from creation input; the store assigns the id
    pub fn from_new(input: NewEvent, now: DateTime<Utc>) -> Self {
        Self {
            id: EventId::new(0),
            title: input.title.trim().to_string(),
            date: input.date,
            description: input.description,
            budget: input.budget,
            status: input.status.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge the supplied fields of a patch, refreshing `updated_at`
    pub fn apply(&mut self, patch: EventPatch, now: DateTime<Utc>) {
        if let Some(title) = patch.title {
            self.title = title.trim().to_string();
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(budget) = patch.budget {
            self.budget = budget;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        self.updated_at = now;
    }

    /// Upcoming means strictly in the future and not cancelled
    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        self.date > now && self.status != EventStatus::Cancelled
    }

    /// Case-insensitive substring match on title or description
    pub fn matches_search(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.title.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
    }

    /// Validate the event's structural invariants
    pub fn validate(&self) -> Result<(), EventValidationError> {
        if self.title.trim().is_empty() {
            return Err(EventValidationError::EmptyTitle);
        }

        if self.budget.is_negative() {
            return Err(EventValidationError::NegativeBudget(self.budget));
        }

        Ok(())
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// Input for creating an event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEvent {
    pub title: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub description: String,
    pub budget: Money,
    /// Defaults to Planning when omitted
    #[serde(default)]
    pub status: Option<EventStatus>,
}

/// Partial update for an event; only `Some` fields change
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventPatch {
    pub title: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub description: Option<String>,
    pub budget: Option<Money>,
    pub status: Option<EventStatus>,
}

impl EventPatch {
    /// Whether the patch changes nothing
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.date.is_none()
            && self.description.is_none()
            && self.budget.is_none()
            && self.status.is_none()
    }
}

/// Validation errors for events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventValidationError {
    EmptyTitle,
    NegativeBudget(Money),
    InvalidStatus(String),
}

impl fmt::Display for EventValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "Event title is required"),
            Self::NegativeBudget(budget) => {
                write!(f, "Budget cannot be negative (got {})", budget)
            }
            Self::InvalidStatus(s) => write!(
                f,
                "Invalid status '{}' (expected Planning, In Progress, Completed or Cancelled)",
                s
            ),
        }
    }
}

impl std::error::Error for EventValidationError {}
