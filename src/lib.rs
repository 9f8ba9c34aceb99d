//! cron-parse: expand a five-field cron expression into the concrete
//! values each field fires at.
//!
//! The library exposes the field expander ([`core::field::expand`]), the
//! full-line parser ([`core::expression::parse_expression`]) and the
//! renderers used by the `cron-parse` binary.

#![forbid(unsafe_code)]

pub mod core;
pub mod display;
pub mod error;

pub use crate::core::expression::{parse_expression, CronExpression};
pub use crate::core::field::{expand, BoundsPolicy};
pub use crate::error::{CronParseError, FieldError};
