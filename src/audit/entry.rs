//! One line of the audit log
//!
//! Entries are built straight from the record that changed, so the collection,
//! identifier and label in the log always match what the store holds.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::storage::Record;

use super::diff::generate_diff;

/// Kind of change made to a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl Operation {
    const fn label(self) -> &'static str {
        match self {
            Self::Create => "CREATE",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Collection a logged record belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Event,
    Task,
    Expense,
}

impl EntityType {
    const fn label(self) -> &'static str {
        match self {
            Self::Event => "Event",
            Self::Task => "Task",
            Self::Expense => "Expense",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A change to one event, task or expense
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    pub timestamp: DateTime<Utc>,
    pub operation: Operation,
    pub entity: EntityType,

    /// Prefixed identifier, e.g. "evt-3"
    pub record_id: String,

    /// Title of an event or task, description of an expense
    #[serde(default)]
    pub label: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<Value>,

    /// Top-level fields an update changed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changes: Option<String>,
}

fn snapshot<R: Record>(record: &R) -> Option<Value> {
    serde_json::to_value(record).ok()
}

impl AuditEntry {
    fn about<R: Record>(operation: Operation, record: &R) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            entity: R::ENTITY,
            record_id: record.id().to_string(),
            label: record.label(),
            before: None,
            after: None,
            changes: None,
        }
    }

    pub fn created<R: Record>(record: &R) -> Self {
        Self {
            after: snapshot(record),
            ..Self::about(Operation::Create, record)
        }
    }

    /// Records both versions and summarises which fields differ
    pub fn updated<R: Record>(before: &R, after: &R) -> Self {
        let (old, new) = (snapshot(before), snapshot(after));
        let changes = old.as_ref().zip(new.as_ref()).and_then(|(o, n)| generate_diff(o, n));

        Self {
            before: old,
            after: new,
            changes,
            ..Self::about(Operation::Update, after)
        }
    }

    pub fn deleted<R: Record>(record: &R) -> Self {
        Self {
            before: snapshot(record),
            ..Self::about(Operation::Delete, record)
        }
    }
}

/// `[2026-03-01 09:00:00 UTC] UPDATE Task task-4 (Book venue)` plus a changes line
impl fmt::Display for AuditEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity,
            self.record_id
        )?;
        if !self.label.is_empty() {
            write!(f, " ({})", self.label)?;
        }
        if let Some(changes) = &self.changes {
            write!(f, "\n  Changes: {}", changes)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EventId, Expense, ExpenseCategory, ExpenseId, Money, Task, TaskId};
    use chrono::TimeZone;

    fn task(completed: bool) -> Task {
        Task {
            id: TaskId::new(4),
            title: "Book venue".into(),
            description: String::new(),
            due_date: None,
            event_id: EventId::new(1),
            completed,
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(Operation::Update.to_string(), "UPDATE");
        assert_eq!(EntityType::Expense.to_string(), "Expense");
    }

    #[test]
    fn test_created_takes_identity_from_record() {
        let entry = AuditEntry::created(&task(false));
        assert_eq!(entry.operation, Operation::Create);
        assert_eq!(entry.entity, EntityType::Task);
        assert_eq!(entry.record_id, "task-4");
        assert_eq!(entry.label, "Book venue");
        assert!(entry.before.is_none());
        assert!(entry.after.is_some());
    }

    #[test]
    fn test_deleted_keeps_only_before() {
        let entry = AuditEntry::deleted(&task(true));
        assert_eq!(entry.operation, Operation::Delete);
        assert!(entry.before.is_some());
        assert!(entry.after.is_none());
        assert!(entry.changes.is_none());
    }

    #[test]
    fn test_updated_lists_changed_fields() {
        let entry = AuditEntry::updated(&task(false), &task(true));
        assert_eq!(entry.changes.as_deref(), Some("completed: false -> true"));

        let text = entry.to_string();
        assert!(text.contains("UPDATE Task task-4 (Book venue)"));
        assert!(text.ends_with("\n  Changes: completed: false -> true"));
    }

    #[test]
    fn test_json_line_omits_absent_snapshots() {
        let expense = Expense {
            id: ExpenseId::new(9),
            event_id: EventId::new(2),
            description: "Badges".into(),
            amount: Money::from_cents(12_000),
            category: ExpenseCategory::Other,
            date: Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap(),
            created_at: Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap(),
        };
        let line = serde_json::to_string(&AuditEntry::created(&expense)).unwrap();
        assert!(line.contains("\"entity\":\"expense\""));
        assert!(!line.contains("before"));
        assert!(!line.contains("changes"));

        let back: AuditEntry = serde_json::from_str(&line).unwrap();
        assert_eq!(back.record_id, "exp-9");
        assert_eq!(back.label, "Badges");
    }
}
