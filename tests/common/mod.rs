//! Shared test fixtures for CLI integration tests.
#![allow(dead_code)]

/// The reference expression from the usage text.
pub const REFERENCE_EXPRESSION: &str = "*/15 0 1,15 * 1-5 /usr/bin/find";

/// Expected table output for [`REFERENCE_EXPRESSION`].
pub const REFERENCE_TABLE: &str = "\
minute        0 15 30 45
hour          0
day of month  1 15
month         1 2 3 4 5 6 7 8 9 10 11 12
day of week   1 2 3 4 5
command       /usr/bin/find
";

/// Diagnostic printed when the line has too few tokens.
pub const INVALID_FORMAT_MESSAGE: &str =
    "Invalid cron string format. Expected 5 fields followed by a command.";

/// Five fields and no command.
pub const MISSING_COMMAND: &str = "*/15 0 1,15 * 1-5";

/// A step with a non-numeric count in the day-of-week field.
pub const MALFORMED_STEP: &str = "0 0 * * */abc /bin/true";

/// Month 13, accepted unless `--strict` is given.
pub const OUT_OF_BOUNDS_MONTH: &str = "0 0 1 13 * /bin/true";
