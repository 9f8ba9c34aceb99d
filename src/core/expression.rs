//! Full cron line parsing.
//!
//! Splits a cron line into its five schedule fields and trailing command,
//! then expands each field against its canonical bounds.

use serde::Serialize;
use tracing::debug;

use crate::core::field::{parse_field, BoundsPolicy, Expansion, FieldKind};
use crate::error::{CronParseError, FieldError};

/// Number of schedule fields preceding the command.
const FIELD_COUNT: usize = 5;

/// A single expanded schedule field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpandedField {
    /// Which field this is.
    #[serde(skip)]
    pub kind: FieldKind,
    /// The token as written in the cron line.
    pub raw: String,
    /// The values the token matches.
    pub values: Expansion,
}

/// A fully expanded cron line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CronExpression {
    pub minute: ExpandedField,
    pub hour: ExpandedField,
    pub day_of_month: ExpandedField,
    pub month: ExpandedField,
    pub day_of_week: ExpandedField,
    /// Command tokens re-joined with single spaces.
    pub command: String,
}

impl CronExpression {
    /// The five fields in cron order.
    pub fn fields(&self) -> [&ExpandedField; FIELD_COUNT] {
        [
            &self.minute,
            &self.hour,
            &self.day_of_month,
            &self.month,
            &self.day_of_week,
        ]
    }
}

/// Parse and expand a cron line of five fields followed by a command.
///
/// Whitespace runs of any kind separate tokens. Everything after the fifth
/// token is the command. Parsing is all-or-nothing: any malformed field
/// aborts the whole line, and the first one in cron order is reported.
///
/// # Errors
///
/// Returns [`CronParseError::InvalidFormat`] if the line has fewer than six
/// tokens, or [`CronParseError::Field`] naming the first malformed field.
pub fn parse_expression(
    input: &str,
    policy: BoundsPolicy,
) -> Result<CronExpression, CronParseError> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    if tokens.len() <= FIELD_COUNT {
        return Err(CronParseError::InvalidFormat {
            found: tokens.len(),
        });
    }

    debug!(?policy, tokens = tokens.len(), "parsing cron line");

    let [minute, hour, day_of_month, month, day_of_week] =
        std::array::from_fn::<_, FIELD_COUNT, _>(|i| {
            expand_field(FieldKind::ALL[i], tokens[i], policy)
        });

    // Fields are unwrapped in cron order so the first failure is reported.
    Ok(CronExpression {
        minute: minute?,
        hour: hour?,
        day_of_month: day_of_month?,
        month: month?,
        day_of_week: day_of_week?,
        command: tokens[FIELD_COUNT..].join(" "),
    })
}

fn expand_field(
    kind: FieldKind,
    token: &str,
    policy: BoundsPolicy,
) -> Result<ExpandedField, CronParseError> {
    let wrap = |source: FieldError| CronParseError::Field {
        field: kind.label(),
        token: token.to_string(),
        source,
    };

    let spec = parse_field(token).map_err(wrap)?;
    let values = spec.expand(kind.bounds(), policy).map_err(wrap)?;
    debug!(
        field = kind.label(),
        token,
        count = values.values().len(),
        "expanded field"
    );

    Ok(ExpandedField {
        kind,
        raw: token.to_string(),
        values,
    })
}
