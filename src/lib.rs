//! spendlog - Terminal expense tracker with budget-vs-actual summaries
//!
//! This library provides the core functionality for the spendlog expense
//! tracker: a flat-file record store, a budget allocator that sets the
//! savings goal aside first, and a summarization engine that turns records
//! plus a budget into a period report with a daily spending limit.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, records, categories, budgets)
//! - `storage`: Delimited-text store for expense records
//! - `services`: Budget allocation and input validation
//! - `reports`: Derived summary reports
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use spendlog::config::{paths::TrackerPaths, settings::Settings};
//!
//! let paths = TrackerPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{TrackerError, TrackerResult};
