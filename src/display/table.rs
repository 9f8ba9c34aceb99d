//! Fixed-width text table for an expanded cron expression.
//!
//! Each line is a left-aligned label padded to [`LABEL_WIDTH`] columns
//! followed by the field's values:
//!
//! ```text
//! minute        0 15 30 45
//! hour          0
//! day of month  1 15
//! month         1 2 3 4 5 6 7 8 9 10 11 12
//! day of week   1 2 3 4 5
//! command       /usr/bin/find
//! ```

use std::fmt;

use crate::core::expression::CronExpression;

/// Column at which values start.
const LABEL_WIDTH: usize = 14;

impl fmt::Display for CronExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for field in self.fields() {
            let label = field.kind.label();
            writeln!(f, "{label:<width$}{}", field.values, width = LABEL_WIDTH)?;
        }
        writeln!(f, "{:<width$}{}", "command", self.command, width = LABEL_WIDTH)
    }
}

/// Render the expression as six labeled lines, each ending in a newline.
pub fn render_table(expression: &CronExpression) -> String {
    expression.to_string()
}
