//! Service layer for EventDesk
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, audit logging, and the derived views over each
//! collection.

pub mod event;
pub mod expense;
pub mod task;

pub use event::{EventService, EventStats};
pub use expense::ExpenseService;
pub use task::TaskService;
