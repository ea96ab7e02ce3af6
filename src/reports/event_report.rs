//! Event Report
//!
//! Everything known about one event in a single serializable value: the
//! event itself, its tasks and expenses, budget position, and spending per
//! category. This is what `export event` writes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::EventDeskResult;
use crate::models::{Event, EventId, Expense, ExpenseCategory, Money, Task};
use crate::services::{EventService, ExpenseService, TaskService};
use crate::storage::Storage;

use super::budget::BudgetSummary;
use super::progress::TaskProgress;

/// Current report schema version
pub const REPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Spending in one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: ExpenseCategory,
    pub amount: Money,
}

/// Budget figures as stored in a report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetFigures {
    pub budget: Money,
    pub total_expenses: Money,
    pub remaining_budget: Money,
    pub budget_used_percentage: f64,
    pub is_over_budget: bool,
}

impl From<&BudgetSummary> for BudgetFigures {
    fn from(summary: &BudgetSummary) -> Self {
        Self {
            budget: summary.budget,
            total_expenses: summary.total_expenses,
            remaining_budget: summary.remaining_budget,
            budget_used_percentage: summary.budget_used_percentage,
            is_over_budget: summary.is_over_budget,
        }
    }
}

/// Task completion as stored in a report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressFigures {
    pub completed: usize,
    pub total: usize,
    pub percentage: f64,
}

impl From<TaskProgress> for ProgressFigures {
    fn from(progress: TaskProgress) -> Self {
        Self {
            completed: progress.completed,
            total: progress.total,
            percentage: progress.percentage(),
        }
    }
}

/// Full report for one event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventReport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// When the report was generated
    pub generated_at: DateTime<Utc>,

    /// Application version that created the report
    pub app_version: String,

    pub event: Event,
    pub budget: BudgetFigures,
    pub task_progress: ProgressFigures,

    /// One entry per category, in the fixed category order
    pub category_totals: Vec<CategoryTotal>,

    pub tasks: Vec<Task>,
    pub expenses: Vec<Expense>,
}

impl EventReport {
    /// Build the report for an event
    ///
    /// # Errors
    ///
    /// `NotFound` if the event does not exist; backend failures while reading
    /// the event, its tasks, or its expenses propagate.
    pub fn generate(storage: &Storage, event_id: EventId) -> EventDeskResult<Self> {
        let event = EventService::new(storage).require(event_id)?;
        let tasks = TaskService::new(storage).get_by_event_id(event_id)?;
        let expenses = ExpenseService::new(storage).get_by_event_id(event_id)?;

        Ok(Self::from_parts(event, tasks, expenses))
    }

    /// Assemble a report from already-loaded records
    pub fn from_parts(event: Event, tasks: Vec<Task>, expenses: Vec<Expense>) -> Self {
        let budget = BudgetSummary::compute(&event, &expenses);
        let progress = TaskProgress::from_tasks(&tasks);

        let category_totals = ExpenseCategory::ALL
            .iter()
            .map(|category| CategoryTotal {
                category: *category,
                amount: expenses
                    .iter()
                    .filter(|e| e.category == *category)
                    .map(|e| e.amount)
                    .sum(),
            })
            .collect();

        Self {
            schema_version: REPORT_SCHEMA_VERSION.to_string(),
            generated_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            event,
            budget: BudgetFigures::from(&budget),
            task_progress: progress.into(),
            category_totals,
            tasks,
            expenses,
        }
    }

    /// Check a parsed report for internal consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != REPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                REPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        if let Some(task) = self.tasks.iter().find(|t| t.event_id != self.event.id) {
            return Err(format!("Task {} does not belong to {}", task.id, self.event.id));
        }

        if let Some(expense) = self.expenses.iter().find(|e| e.event_id != self.event.id) {
            return Err(format!(
                "Expense {} does not belong to {}",
                expense.id, self.event.id
            ));
        }

        let total: Money = self.expenses.iter().map(|e| e.amount).sum();
        if total != self.budget.total_expenses {
            return Err(format!(
                "Expense total {} does not match recorded total {}",
                total, self.budget.total_expenses
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::SeedData;

    #[test]
    fn test_generate_for_demo_event() {
        let storage = Storage::seeded(SeedData::demo(Utc::now()));
        let report = EventReport::generate(&storage, EventId::new(1)).unwrap();

        assert_eq!(report.event.title, "Annual Tech Conference");
        assert_eq!(report.expenses.len(), 3);
        assert_eq!(report.tasks.len(), 1);
        assert_eq!(report.category_totals.len(), 6);
        assert_eq!(report.budget.total_expenses, Money::from_cents(2_130_000));
        assert!(!report.budget.is_over_budget);
        assert_eq!(report.task_progress.completed, 1);
        assert!(report.validate().is_ok());
    }

    #[test]
    fn test_category_totals_sum_to_total() {
        let storage = Storage::seeded(SeedData::demo(Utc::now()));
        let report = EventReport::generate(&storage, EventId::new(2)).unwrap();

        let sum: Money = report.category_totals.iter().map(|c| c.amount).sum();
        assert_eq!(sum, report.budget.total_expenses);
        assert_eq!(report.category_totals[0].category, ExpenseCategory::Venue);
    }

    #[test]
    fn test_missing_event_is_not_found() {
        let storage = Storage::in_memory();
        let err = EventReport::generate(&storage, EventId::new(3)).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_validate_detects_foreign_expense() {
        let storage = Storage::seeded(SeedData::demo(Utc::now()));
        let mut report = EventReport::generate(&storage, EventId::new(1)).unwrap();
        report.expenses[0].event_id = EventId::new(2);

        assert!(report.validate().is_err());
    }
}
