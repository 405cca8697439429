//! Common types used across the application.

pub mod amount;
pub mod date;
pub mod id;
pub mod money;

pub use amount::{RawAmount, to_number};
pub use id::*;
pub use money::Currency;
