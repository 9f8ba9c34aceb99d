//! Output rendering for expanded cron expressions.
//!
//! Provides the fixed-width text table and a machine-readable JSON form.

pub mod json_printer;
pub mod table;
