//! Expense display formatting
//!
//! Formats expense tables and the per-category breakdown for an event.

use std::collections::BTreeMap;

use crate::config::Settings;
use crate::models::{Expense, ExpenseCategory, Money};
use crate::reports::progress_bar;

use super::{column_width, money};

/// Format a list of expenses as a table with a total row
pub fn format_expense_list(expenses: &[Expense], settings: &Settings) -> String {
    if expenses.is_empty() {
        return "No expenses found.".to_string();
    }

    let desc_width = column_width(expenses.iter().map(|e| e.description.as_str()), 11);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<9}  {:<12}  {:<desc_width$}  {:<9}  {:>12}\n",
        "ID", "Date", "Description", "Category", "Amount",
    ));
    output.push_str(&format!(
        "{:-<9}  {:-<12}  {:-<desc_width$}  {:-<9}  {:->12}\n",
        "", "", "", "", "",
    ));

    for expense in expenses {
        output.push_str(&format!(
            "{:<9}  {:<12}  {:<desc_width$}  {:<9}  {:>12}\n",
            expense.id.to_string(),
            expense.date.format(&settings.date_format).to_string(),
            expense.description,
            expense.category.as_str(),
            money(settings, expense.amount),
        ));
    }

    let total: Money = expenses.iter().map(|e| e.amount).sum();
    output.push_str(&format!(
        "{:<9}  {:<12}  {:<desc_width$}  {:<9}  {:>12}\n",
        "TOTAL",
        "",
        "",
        "",
        money(settings, total),
    ));

    output
}

/// Format per-category totals with each category's share of the total
pub fn format_category_breakdown(
    totals: &BTreeMap<ExpenseCategory, Money>,
    settings: &Settings,
) -> String {
    let total: Money = totals.values().copied().sum();
    let mut output = String::new();

    output.push_str(&format!("{:<10}  {:>12}  {:>6}\n", "Category", "Amount", "%"));
    output.push_str(&format!("{:-<10}  {:->12}  {:->6}\n", "", "", ""));

    for (category, amount) in totals {
        let share = if total.is_zero() {
            0.0
        } else {
            amount.cents() as f64 / total.cents() as f64 * 100.0
        };

        output.push_str(&format!(
            "{:<10}  {:>12}  {:>5.1}%  {}\n",
            category.as_str(),
            money(settings, *amount),
            share,
            progress_bar(share, 20)
        ));
    }

    output.push_str(&format!("{:-<10}  {:->12}\n", "", ""));
    output.push_str(&format!("{:<10}  {:>12}\n", "TOTAL", money(settings, total)));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EventId, ExpenseId};
    use chrono::{TimeZone, Utc};

    fn expense(id: i64, cents: i64, category: ExpenseCategory) -> Expense {
        let date = Utc.with_ymd_and_hms(2026, 1, 20, 12, 0, 0).unwrap();
        Expense {
            id: ExpenseId::new(id),
            description: format!("Item {}", id),
            amount: Money::from_cents(cents),
            category,
            date,
            event_id: EventId::new(1),
            created_at: date,
        }
    }

    #[test]
    fn test_list_has_total_row() {
        let expenses = vec![
            expense(1, 30_000, ExpenseCategory::Venue),
            expense(2, 80_000, ExpenseCategory::Catering),
        ];
        let output = format_expense_list(&expenses, &Settings::default());

        assert!(output.contains("exp-1"));
        assert!(output.contains("Jan 20, 2026"));
        let last = output.lines().last().unwrap();
        assert!(last.starts_with("TOTAL"));
        assert!(last.ends_with("$1,100.00"));
    }

    #[test]
    fn test_breakdown_lists_every_category() {
        let mut totals: BTreeMap<ExpenseCategory, Money> = ExpenseCategory::ALL
            .iter()
            .map(|c| (*c, Money::zero()))
            .collect();
        totals.insert(ExpenseCategory::Venue, Money::from_dollars(75));
        totals.insert(ExpenseCategory::Travel, Money::from_dollars(25));

        let output = format_category_breakdown(&totals, &Settings::default());

        for category in ExpenseCategory::ALL {
            assert!(output.contains(category.as_str()));
        }
        assert!(output.contains("75.0%"));
        assert!(output.contains("$100.00"));
    }

    #[test]
    fn test_breakdown_with_no_spending() {
        let totals: BTreeMap<ExpenseCategory, Money> = ExpenseCategory::ALL
            .iter()
            .map(|c| (*c, Money::zero()))
            .collect();
        let output = format_category_breakdown(&totals, &Settings::default());
        assert!(output.contains("0.0%"));
    }
}
