//! Budget Summary
//!
//! Compares an event's budget with the expenses charged against it.

use serde::Serialize;

use crate::models::{Event, EventId, Expense, Money};
use crate::services::ExpenseService;
use crate::storage::Storage;

/// Budget position of one event
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetSummary {
    /// Event the summary describes
    pub event_id: EventId,
    /// Event budget
    pub budget: Money,
    /// Sum of the event's expenses
    pub total_expenses: Money,
    /// Budget minus expenses; negative when over budget
    pub remaining_budget: Money,
    /// Share of the budget spent, clamped to 100; zero when the budget is zero
    pub budget_used_percentage: f64,
    /// Expenses strictly exceed the budget
    pub is_over_budget: bool,
}

impl BudgetSummary {
    /// Summarise from a budget and an expense total
    pub fn from_totals(event_id: EventId, budget: Money, total_expenses: Money) -> Self {
        let budget_used_percentage = if budget.is_positive() {
            (total_expenses.cents() as f64 / budget.cents() as f64 * 100.0).min(100.0)
        } else {
            0.0
        };

        Self {
            event_id,
            budget,
            total_expenses,
            remaining_budget: budget - total_expenses,
            budget_used_percentage,
            is_over_budget: total_expenses > budget,
        }
    }

    /// Summarise an event from its expenses
    ///
    /// Expenses belonging to other events are ignored.
    pub fn compute(event: &Event, expenses: &[Expense]) -> Self {
        let total = expenses
            .iter()
            .filter(|e| e.event_id == event.id)
            .map(|e| e.amount)
            .sum();

        Self::from_totals(event.id, event.budget, total)
    }

    /// Summarise an event using the expense service's total
    pub fn for_event(storage: &Storage, event: &Event) -> Self {
        let total = ExpenseService::new(storage).get_total_by_event_id(event.id);
        Self::from_totals(event.id, event.budget, total)
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let money = |m: Money| m.format_with_symbol(currency_symbol);
        let mut output = String::new();

        output.push_str(&format!("  Budget:     {:>14}\n", money(self.budget)));
        output.push_str(&format!("  Spent:      {:>14}\n", money(self.total_expenses)));
        output.push_str(&format!("  Remaining:  {:>14}\n", money(self.remaining_budget)));
        output.push_str(&format!(
            "  Used:       {:>13.1}%\n",
            self.budget_used_percentage
        ));
        output.push_str(&format!("  {}\n", progress_bar(self.budget_used_percentage, 30)));

        if self.is_over_budget {
            output.push_str(&format!(
                "  OVER BUDGET by {}\n",
                money(self.total_expenses - self.budget)
            ));
        } else {
            output.push_str("  Within budget\n");
        }

        output
    }
}

/// Text progress bar for a percentage in 0..=100
pub fn progress_bar(percentage: f64, width: usize) -> String {
    let filled = ((percentage.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseCategory, ExpenseId, NewEvent};
    use chrono::{TimeZone, Utc};

    fn event(budget_dollars: i64) -> Event {
        let now = Utc.with_ymd_and_hms(2026, 4, 1, 9, 0, 0).unwrap();
        let mut event = Event::from_new(
            NewEvent {
                title: "Conference".into(),
                date: now,
                description: String::new(),
                budget: Money::from_dollars(budget_dollars),
                status: None,
            },
            now,
        );
        event.id = EventId::new(1);
        event
    }

    fn expense(id: i64, event_id: i64, dollars: i64) -> Expense {
        let now = Utc.with_ymd_and_hms(2026, 4, 1, 9, 0, 0).unwrap();
        Expense {
            id: ExpenseId::new(id),
            description: format!("Expense {}", id),
            amount: Money::from_dollars(dollars),
            category: ExpenseCategory::Other,
            date: now,
            event_id: EventId::new(event_id),
            created_at: now,
        }
    }

    #[test]
    fn test_over_budget_is_clamped() {
        let summary = BudgetSummary::compute(&event(1000), &[expense(1, 1, 300), expense(2, 1, 800)]);

        assert_eq!(summary.total_expenses, Money::from_dollars(1100));
        assert_eq!(summary.remaining_budget, Money::from_dollars(-100));
        assert!(summary.is_over_budget);
        assert_eq!(summary.budget_used_percentage, 100.0);
    }

    #[test]
    fn test_under_budget() {
        let summary = BudgetSummary::compute(&event(1000), &[expense(1, 1, 250), expense(2, 2, 900)]);

        assert_eq!(summary.total_expenses, Money::from_dollars(250));
        assert_eq!(summary.remaining_budget, Money::from_dollars(750));
        assert!(!summary.is_over_budget);
        assert!((summary.budget_used_percentage - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_exactly_on_budget_is_not_over() {
        let summary = BudgetSummary::compute(&event(500), &[expense(1, 1, 500)]);
        assert!(!summary.is_over_budget);
        assert_eq!(summary.budget_used_percentage, 100.0);
        assert!(summary.remaining_budget.is_zero());
    }

    #[test]
    fn test_zero_budget_reports_zero_percent() {
        let summary = BudgetSummary::compute(&event(0), &[expense(1, 1, 40)]);
        assert_eq!(summary.budget_used_percentage, 0.0);
        assert!(summary.is_over_budget);
    }

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(50.0, 10), "[#####-----]");
        assert_eq!(progress_bar(150.0, 4), "[####]");
        assert_eq!(progress_bar(0.0, 3), "[---]");
    }

    #[test]
    fn test_format_mentions_overage() {
        let summary = BudgetSummary::compute(&event(1000), &[expense(1, 1, 1100)]);
        let output = summary.format_terminal("$");
        assert!(output.contains("OVER BUDGET by $100.00"));
        assert!(output.contains("-$100.00"));
    }
}
