//! Core business logic for Finboard.
//!
//! This crate contains pure aggregation logic with ZERO web, database, or I/O dependencies.
//! Records come in already fetched; every view is recomputed from scratch on each call.
//!
//! # Modules
//!
//! - `records` - Costs, expenses, budgets, tasks, and currency/project filtering
//! - `normalization` - Monthly equivalence and calendar helpers
//! - `analytics` - Totals, category breakdown, trend, budget vs actual, top categories
//! - `project` - Project-scoped estimates, breakdowns, and summary

pub mod analytics;
pub mod normalization;
pub mod project;
pub mod records;
