//! Shared types, errors, and configuration for Finboard.
//!
//! This crate provides common types used across all other crates:
//! - Currency codes, with a lenient form for incoming records
//! - Tolerant amount coercion for values coming off the wire
//! - Typed IDs for type-safe entity references
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
