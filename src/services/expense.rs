//! Expense service
//!
//! Provides validated CRUD for expenses and the per-event totals that budget
//! tracking is built on.

use std::collections::BTreeMap;

use chrono::Utc;
use tracing::{debug, error, warn};

use crate::error::{EventDeskError, EventDeskResult};
use crate::models::{
    EventId, Expense, ExpenseCategory, ExpenseId, ExpensePatch, Money, NewExpense,
};
use crate::storage::Storage;

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Parse an amount typed by a user
    ///
    /// Unparseable text yields `None`, which `create` reports as a
    /// non-positive amount in its usual validation order.
    pub fn parse_amount(text: &str) -> Option<Money> {
        Money::parse(text).ok()
    }

    /// The fixed, ordered set of categories
    pub fn get_categories() -> [ExpenseCategory; 6] {
        ExpenseCategory::ALL
    }

    /// All expenses, newest first
    pub fn get_all(&self) -> EventDeskResult<Vec<Expense>> {
        self.storage.expenses.list().map_err(|e| {
            error!(error = %e, "failed to fetch expenses");
            e
        })
    }

    /// Get an expense by ID
    pub fn get_by_id(&self, id: ExpenseId) -> EventDeskResult<Option<Expense>> {
        self.storage.expenses.get(id).map_err(|e| {
            error!(%id, error = %e, "failed to fetch expense");
            e
        })
    }

    /// Get an expense by ID, treating absence as an error
    pub fn require(&self, id: ExpenseId) -> EventDeskResult<Expense> {
        self.get_by_id(id)?
            .ok_or_else(|| EventDeskError::expense_not_found(id.to_string()))
    }

    /// Expenses charged to one event
    pub fn get_by_event_id(&self, event_id: EventId) -> EventDeskResult<Vec<Expense>> {
        Ok(self
            .get_all()?
            .into_iter()
            .filter(|e| e.event_id == event_id)
            .collect())
    }

    /// Validate and record a new expense
    pub fn create(&self, input: NewExpense) -> EventDeskResult<Expense> {
        let expense = Expense::from_new(input, Utc::now())
            .map_err(|e| EventDeskError::Validation(e.to_string()))?;

        let expense = self.storage.expenses.insert(expense)?;
        debug!(
            id = %expense.id,
            event_id = %expense.event_id,
            amount = %expense.amount,
            "created expense"
        );

        self.storage.log_create(&expense);

        Ok(expense)
    }

    /// Validate the supplied fields and merge them into an expense
    ///
    /// Returns `None` if the expense does not exist.
    pub fn update(
        &self,
        id: ExpenseId,
        patch: ExpensePatch,
    ) -> EventDeskResult<Option<Expense>> {
        let Some(before) = self.get_by_id(id)? else {
            return Ok(None);
        };

        let mut expense = before.clone();
        expense
            .apply(patch)
            .map_err(|e| EventDeskError::Validation(e.to_string()))?;

        let Some(expense) = self.storage.expenses.replace(expense)? else {
            return Ok(None);
        };
        debug!(%id, "updated expense");

        self.storage.log_update(&before, &expense);

        Ok(Some(expense))
    }

    /// Delete an expense; `false` when it does not exist or the store refuses
    pub fn delete(&self, id: ExpenseId) -> bool {
        let existing = match self.storage.expenses.get(id) {
            Ok(Some(expense)) => expense,
            Ok(None) => return false,
            Err(e) => {
                warn!(%id, error = %e, "failed to delete expense");
                return false;
            }
        };

        match self.storage.expenses.remove(id) {
            Ok(true) => {
                debug!(%id, "deleted expense");
                self.storage.log_delete(&existing);
                true
            }
            Ok(false) => false,
            Err(e) => {
                warn!(%id, error = %e, "failed to delete expense");
                false
            }
        }
    }

    /// Sum of all expenses charged to an event; zero if expenses cannot be read
    pub fn get_total_by_event_id(&self, event_id: EventId) -> Money {
        match self.get_by_event_id(event_id) {
            Ok(expenses) => expenses.iter().map(|e| e.amount).sum(),
            Err(e) => {
                warn!(%event_id, error = %e, "failed to total expenses");
                Money::zero()
            }
        }
    }

    /// Per-category totals for an event
    ///
    /// Every category is present, in the fixed category order, even when it
    /// has no expenses. All zero if expenses cannot be read.
    pub fn get_expenses_by_category(&self, event_id: EventId) -> BTreeMap<ExpenseCategory, Money> {
        let mut totals: BTreeMap<ExpenseCategory, Money> = ExpenseCategory::ALL
            .iter()
            .map(|c| (*c, Money::zero()))
            .collect();

        match self.get_by_event_id(event_id) {
            Ok(expenses) => {
                for expense in expenses {
                    *totals.entry(expense.category).or_default() += expense.amount;
                }
            }
            Err(e) => warn!(%event_id, error = %e, "failed to group expenses"),
        }

        totals
    }
}
