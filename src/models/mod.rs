//! Core data models for EventDesk
//!
//! This module contains the record shapes of the planning domain: events,
//! the tasks attached to them, and the expenses charged against their budgets.

pub mod event;
pub mod expense;
pub mod ids;
pub mod money;
pub mod task;

pub use event::{Event, EventPatch, EventStatus, EventValidationError, NewEvent};
pub use expense::{Expense, ExpenseCategory, ExpensePatch, ExpenseValidationError, NewExpense};
pub use ids::{EventId, ExpenseId, IdParseError, TaskId};
pub use money::{Money, MoneyParseError};
pub use task::{NewTask, Task, TaskPatch, TaskValidationError};
