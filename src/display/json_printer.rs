//! JSON rendering of an expanded cron expression.

use crate::core::expression::CronExpression;

/// Render the expression as pretty-printed JSON with 2-space indentation.
///
/// # Errors
///
/// Returns the underlying `serde_json` error if serialization fails.
pub fn render_json(expression: &CronExpression) -> serde_json::Result<String> {
    serde_json::to_string_pretty(expression)
}
