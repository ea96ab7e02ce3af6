//! Audit logging system for EventDesk
//!
//! Records every create, update and delete made through the services, with
//! before/after snapshots, in an append-only JSONL file.
//!
//! # Example
//!
//! ```rust,ignore
//! use eventdesk::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::created(&event))?;
//! ```

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
