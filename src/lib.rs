//! EventDesk - event planning from the terminal
//!
//! This library provides the data-access and service layer for planning
//! events: the events themselves, the tasks that need doing for each one, and
//! the expenses charged against their budgets.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (events, tasks, expenses, money, ids)
//! - `storage`: Backing stores (in-memory, JSON file, remote gateway)
//! - `services`: Entity services with validation and aggregations
//! - `reports`: Derived views (budget summary, task progress, dashboard)
//! - `export`: Report export as JSON, YAML and CSV
//! - `audit`: Audit logging system
//! - `logging`: Diagnostic logging setup
//!
//! # Example
//!
//! ```rust,ignore
//! use eventdesk::services::EventService;
//! use eventdesk::storage::{SeedData, Storage};
//!
//! let storage = Storage::seeded(SeedData::demo(chrono::Utc::now()));
//! let stats = EventService::new(&storage).get_stats();
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{EventDeskError, EventDeskResult};
