//! Core cron parsing logic.
//!
//! This module contains the domain logic separated from CLI concerns.
//! All types and functions here are testable without the CLI layer.

pub mod expression;
pub mod field;
