//! Expense model
//!
//! Expenses record money spent against an event's budget. Every expense
//! belongs to exactly one of a fixed set of categories.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::{EventId, ExpenseId};
use super::money::Money;

/// The closed set of expense categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ExpenseCategory {
    Venue,
    Catering,
    Marketing,
    Equipment,
    Travel,
    Other,
}

impl ExpenseCategory {
    /// All categories in their fixed display order
    pub const ALL: [ExpenseCategory; 6] = [
        ExpenseCategory::Venue,
        ExpenseCategory::Catering,
        ExpenseCategory::Marketing,
        ExpenseCategory::Equipment,
        ExpenseCategory::Travel,
        ExpenseCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Venue => "Venue",
            Self::Catering => "Catering",
            Self::Marketing => "Marketing",
            Self::Equipment => "Equipment",
            Self::Travel => "Travel",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ExpenseCategory {
    type Err = ExpenseValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ExpenseValidationError::InvalidCategory(s.to_string()))
    }
}

/// Money spent for an event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// What the money was spent on (trimmed, non-empty)
    pub description: String,

    /// Amount spent, always positive
    pub amount: Money,

    /// Spending category
    pub category: ExpenseCategory,

    /// When the expense occurred
    pub date: DateTime<Utc>,

    /// Owning event
    pub event_id: EventId,

    /// When the expense was recorded
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Validate creation input and build an unsaved expense
    ///
    /// Checks run in a fixed order and the first failure is returned:
    /// event, description, amount, category.
    pub fn from_new(input: NewExpense, now: DateTime<Utc>) -> Result<Self, ExpenseValidationError> {
        let event_id = input.event_id.ok_or(ExpenseValidationError::MissingEventId)?;

        let description = input.description.trim();
        if description.is_empty() {
            return Err(ExpenseValidationError::MissingDescription);
        }

        let amount = input
            .amount
            .ok_or(ExpenseValidationError::NonPositiveAmount)?;
        if !amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount);
        }

        let category = match input.category.as_deref().map(str::trim) {
            None | Some("") => return Err(ExpenseValidationError::MissingCategory),
            Some(raw) => raw.parse::<ExpenseCategory>()?,
        };

        Ok(Self {
            id: ExpenseId::new(0),
            description: description.to_string(),
            amount,
            category,
            date: input.date.unwrap_or(now),
            event_id,
            created_at: now,
        })
    }

    /// Validate the supplied fields of a patch and merge them
    ///
    /// Nothing is changed when any supplied field is invalid.
    pub fn apply(&mut self, patch: ExpensePatch) -> Result<(), ExpenseValidationError> {
        let description = match patch.description {
            Some(d) if d.trim().is_empty() => {
                return Err(ExpenseValidationError::BlankDescription)
            }
            Some(d) => Some(d.trim().to_string()),
            None => None,
        };

        if let Some(amount) = patch.amount {
            if !amount.is_positive() {
                return Err(ExpenseValidationError::NonPositiveAmount);
            }
        }

        let category = match patch.category.as_deref().map(str::trim) {
            None => None,
            Some("") => return Err(ExpenseValidationError::MissingCategory),
            Some(raw) => Some(raw.parse::<ExpenseCategory>()?),
        };

        if let Some(description) = description {
            self.description = description;
        }
        if let Some(amount) = patch.amount {
            self.amount = amount;
        }
        if let Some(category) = category {
            self.category = category;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(event_id) = patch.event_id {
            self.event_id = event_id;
        }

        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.description, self.category, self.amount)
    }
}

/// Input for creating an expense
///
/// Fields are optional so that missing input is reported as a validation
/// failure rather than being impossible to express.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewExpense {
    pub event_id: Option<EventId>,
    #[serde(default)]
    pub description: String,
    pub amount: Option<Money>,
    /// Category name; must be one of [`ExpenseCategory::ALL`]
    pub category: Option<String>,
    /// Defaults to the creation time
    pub date: Option<DateTime<Utc>>,
}

/// Partial update for an expense; only `Some` fields are validated and changed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpensePatch {
    pub description: Option<String>,
    pub amount: Option<Money>,
    pub category: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub event_id: Option<EventId>,
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    MissingEventId,
    MissingDescription,
    BlankDescription,
    NonPositiveAmount,
    MissingCategory,
    InvalidCategory(String),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingEventId => write!(f, "Event ID is required"),
            Self::MissingDescription => write!(f, "Description is required"),
            Self::BlankDescription => write!(f, "Description cannot be empty"),
            Self::NonPositiveAmount => write!(f, "Amount must be greater than 0"),
            Self::MissingCategory => write!(f, "Category is required"),
            Self::InvalidCategory(c) => write!(f, "Invalid category: {}", c),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 2, 10, 8, 30, 0).unwrap()
    }

    fn valid_input() -> NewExpense {
        NewExpense {
            event_id: Some(EventId::new(1)),
            description: "  Hall rental ".into(),
            amount: Some(Money::from_dollars(300)),
            category: Some("Venue".into()),
            date: None,
        }
    }

    #[test]
    fn test_from_new_trims_and_defaults_date() {
        let expense = Expense::from_new(valid_input(), now()).unwrap();
        assert_eq!(expense.description, "Hall rental");
        assert_eq!(expense.category, ExpenseCategory::Venue);
        assert_eq!(expense.date, now());
        assert_eq!(expense.created_at, now());
    }

    #[test]
    fn test_validation_order() {
        // Everything missing: event id is reported first
        let err = Expense::from_new(NewExpense::default(), now()).unwrap_err();
        assert_eq!(err, ExpenseValidationError::MissingEventId);

        let mut input = valid_input();
        input.description = "   ".into();
        input.amount = Some(Money::zero());
        assert_eq!(
            Expense::from_new(input, now()).unwrap_err(),
            ExpenseValidationError::MissingDescription
        );

        let mut input = valid_input();
        input.amount = None;
        input.category = Some("Flowers".into());
        assert_eq!(
            Expense::from_new(input, now()).unwrap_err(),
            ExpenseValidationError::NonPositiveAmount
        );

        let mut input = valid_input();
        input.category = None;
        assert_eq!(
            Expense::from_new(input, now()).unwrap_err(),
            ExpenseValidationError::MissingCategory
        );

        let mut input = valid_input();
        input.category = Some("Flowers".into());
        assert_eq!(
            Expense::from_new(input, now()).unwrap_err(),
            ExpenseValidationError::InvalidCategory("Flowers".into())
        );
    }

    #[test]
    fn test_negative_amount_rejected() {
        let mut input = valid_input();
        input.amount = Some(Money::from_cents(-500));
        assert_eq!(
            Expense::from_new(input, now()).unwrap_err(),
            ExpenseValidationError::NonPositiveAmount
        );
    }

    #[test]
    fn test_category_parsing_is_case_insensitive() {
        assert_eq!(
            "catering".parse::<ExpenseCategory>().unwrap(),
            ExpenseCategory::Catering
        );
        assert_eq!(
            " TRAVEL ".parse::<ExpenseCategory>().unwrap(),
            ExpenseCategory::Travel
        );
        assert!("Food".parse::<ExpenseCategory>().is_err());
    }

    #[test]
    fn test_apply_rejects_whole_patch_on_any_invalid_field() {
        let mut expense = Expense::from_new(valid_input(), now()).unwrap();
        let before = expense.clone();

        let err = expense
            .apply(ExpensePatch {
                description: Some("Bigger hall".into()),
                category: Some("Snacks".into()),
                ..Default::default()
            })
            .unwrap_err();
        assert_eq!(err, ExpenseValidationError::InvalidCategory("Snacks".into()));
        assert_eq!(expense, before);

        let err = expense
            .apply(ExpensePatch {
                amount: Some(Money::zero()),
                ..Default::default()
            })
            .unwrap_err();
        assert_eq!(err, ExpenseValidationError::NonPositiveAmount);

        let err = expense
            .apply(ExpensePatch {
                description: Some("  ".into()),
                ..Default::default()
            })
            .unwrap_err();
        assert_eq!(err, ExpenseValidationError::BlankDescription);
        assert_eq!(expense, before);
    }

    #[test]
    fn test_apply_merges_supplied_fields() {
        let mut expense = Expense::from_new(valid_input(), now()).unwrap();
        expense
            .apply(ExpensePatch {
                description: Some(" Ballroom ".into()),
                amount: Some(Money::from_cents(45_050)),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(expense.description, "Ballroom");
        assert_eq!(expense.amount, Money::from_cents(45_050));
        assert_eq!(expense.category, ExpenseCategory::Venue);
    }

    #[test]
    fn test_category_order_is_fixed() {
        let names: Vec<_> = ExpenseCategory::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(
            names,
            vec!["Venue", "Catering", "Marketing", "Equipment", "Travel", "Other"]
        );
    }
}
