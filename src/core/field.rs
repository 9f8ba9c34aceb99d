//! Cron field parsing and expansion.
//!
//! A field token is parsed once into a [`FieldSpec`] following a fixed
//! precedence (`*`, then `*/n`, then comma lists of values and ranges),
//! and the spec is then expanded against an inclusive [`Bounds`] into the
//! ordered list of values it matches.

use std::fmt;

use serde::Serialize;
use tracing::trace;

use crate::error::FieldError;

/// The five positional cron fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Minute,
    Hour,
    DayOfMonth,
    Month,
    DayOfWeek,
}

impl FieldKind {
    /// All fields in the order they appear in a cron line.
    pub const ALL: [FieldKind; 5] = [
        FieldKind::Minute,
        FieldKind::Hour,
        FieldKind::DayOfMonth,
        FieldKind::Month,
        FieldKind::DayOfWeek,
    ];

    /// Human-readable label used in output and error messages.
    pub fn label(self) -> &'static str {
        match self {
            FieldKind::Minute => "minute",
            FieldKind::Hour => "hour",
            FieldKind::DayOfMonth => "day of month",
            FieldKind::Month => "month",
            FieldKind::DayOfWeek => "day of week",
        }
    }

    /// The canonical inclusive bounds of this field (day of week: 0 is Sunday).
    pub fn bounds(self) -> Bounds {
        match self {
            FieldKind::Minute => Bounds::new(0, 59),
            FieldKind::Hour => Bounds::new(0, 23),
            FieldKind::DayOfMonth => Bounds::new(1, 31),
            FieldKind::Month => Bounds::new(1, 12),
            FieldKind::DayOfWeek => Bounds::new(0, 6),
        }
    }
}

/// An inclusive `[min, max]` range of values a field may take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min: u32,
    pub max: u32,
}

impl Bounds {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    fn contains(self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Whether comma-list values are checked against the field bounds.
///
/// `*` and `*/n` never produce out-of-bounds values, so this only affects
/// literal values and ranges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BoundsPolicy {
    /// List values are emitted as written, even outside the bounds.
    #[default]
    Permissive,
    /// List values outside the bounds are rejected.
    Strict,
}

/// One comma-separated element of a list field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListPart {
    /// A single value, e.g. `15`.
    Value(u32),
    /// An inclusive range, e.g. `1-5`.
    Range { start: u32, end: u32 },
}

/// A parsed cron field token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldSpec {
    /// `*`: every value in the bounds.
    Wildcard,
    /// `*/n`: every n-th value starting at the lower bound. Always non-zero.
    Step(u32),
    /// Comma-separated values and ranges, in the order written.
    List(Vec<ListPart>),
}

/// The ordered values a field matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Expansion(Vec<u32>);

impl Expansion {
    pub fn values(&self) -> &[u32] {
        &self.0
    }
}

impl fmt::Display for Expansion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut values = self.0.iter();
        if let Some(first) = values.next() {
            write!(f, "{first}")?;
            for value in values {
                write!(f, " {value}")?;
            }
        }
        Ok(())
    }
}

/// Parse a raw field token into a [`FieldSpec`].
///
/// The first matching form wins: a token containing `*/` is always
/// treated as a step, even if the step text turns out to be malformed.
///
/// # Errors
///
/// Returns an error if a step, value, or range bound is not a valid
/// non-negative integer, if a step is zero, or if a range is inverted.
pub fn parse_field(token: &str) -> Result<FieldSpec, FieldError> {
    if token == "*" {
        trace!(token, "wildcard field");
        return Ok(FieldSpec::Wildcard);
    }

    if token.contains("*/") {
        trace!(token, "step field");
        return parse_step(token).map(FieldSpec::Step);
    }

    trace!(token, "list field");
    token
        .split(',')
        .map(parse_list_part)
        .collect::<Result<Vec<_>, _>>()
        .map(FieldSpec::List)
}

fn parse_step(token: &str) -> Result<u32, FieldError> {
    let malformed = || FieldError::MalformedStep {
        step: token.strip_prefix("*/").unwrap_or(token).to_string(),
    };

    let text = token.strip_prefix("*/").ok_or_else(malformed)?;
    match parse_number(text) {
        Some(step) if step > 0 => Ok(step),
        _ => Err(malformed()),
    }
}

fn parse_list_part(part: &str) -> Result<ListPart, FieldError> {
    match part.split_once('-') {
        Some((start, end)) => {
            let start = parse_value(start)?;
            let end = parse_value(end)?;
            if start > end {
                return Err(FieldError::InvertedRange { start, end });
            }
            Ok(ListPart::Range { start, end })
        }
        None => parse_value(part).map(ListPart::Value),
    }
}

fn parse_value(text: &str) -> Result<u32, FieldError> {
    parse_number(text).ok_or_else(|| FieldError::MalformedValue {
        value: text.to_string(),
    })
}

/// Parse a non-empty run of ASCII digits.
///
/// Unlike `str::parse`, signs are rejected.
fn parse_number(text: &str) -> Option<u32> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

/// Largest number of values a single field may expand to.
///
/// Counted from the parsed spec before any values are allocated, since
/// permissive list ranges are not clipped to the field bounds.
pub const MAX_EXPANSION_LEN: u64 = 10_000;

impl FieldSpec {
    /// Expand this spec into the concrete values it matches within `bounds`.
    ///
    /// Wildcard and step values are ascending within the bounds. List parts
    /// keep their written order, with each range ascending.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::OutOfBounds`] if `policy` is strict and a list
    /// value falls outside `bounds`, or [`FieldError::ExpansionTooLarge`]
    /// if the field would produce more than [`MAX_EXPANSION_LEN`] values.
    pub fn expand(&self, bounds: Bounds, policy: BoundsPolicy) -> Result<Expansion, FieldError> {
        let values = match self {
            FieldSpec::Wildcard => {
                check_len(span(bounds.min, bounds.max))?;
                (bounds.min..=bounds.max).collect()
            }
            FieldSpec::Step(0) => {
                return Err(FieldError::MalformedStep {
                    step: "0".to_string(),
                })
            }
            FieldSpec::Step(step) => {
                let count = match span(bounds.min, bounds.max) {
                    0 => 0,
                    n => (n - 1) / u64::from(*step) + 1,
                };
                check_len(count)?;
                (bounds.min..=bounds.max)
                    .step_by(*step as usize)
                    .collect()
            }
            FieldSpec::List(parts) => {
                let mut total = 0u64;
                for part in parts {
                    total += match *part {
                        ListPart::Value(value) => {
                            check_bounds(value, bounds, policy)?;
                            1
                        }
                        ListPart::Range { start, end } => {
                            check_bounds(start, bounds, policy)?;
                            check_bounds(end, bounds, policy)?;
                            span(start, end)
                        }
                    };
                }
                check_len(total)?;

                let mut values = Vec::with_capacity(total as usize);
                for part in parts {
                    match *part {
                        ListPart::Value(value) => values.push(value),
                        ListPart::Range { start, end } => values.extend(start..=end),
                    }
                }
                values
            }
        };
        Ok(Expansion(values))
    }
}

/// Number of values in `start..=end`.
fn span(start: u32, end: u32) -> u64 {
    if start > end {
        0
    } else {
        u64::from(end - start) + 1
    }
}

fn check_len(count: u64) -> Result<(), FieldError> {
    if count > MAX_EXPANSION_LEN {
        return Err(FieldError::ExpansionTooLarge {
            count,
            limit: MAX_EXPANSION_LEN,
        });
    }
    Ok(())
}

fn check_bounds(value: u32, bounds: Bounds, policy: BoundsPolicy) -> Result<(), FieldError> {
    if policy == BoundsPolicy::Strict && !bounds.contains(value) {
        return Err(FieldError::OutOfBounds {
            value,
            min: bounds.min,
            max: bounds.max,
        });
    }
    Ok(())
}

/// Expand a field token within `[min, max]` into space-separated values.
///
/// List values are not bound-checked.
///
/// # Errors
///
/// Returns an error if the token is malformed (see [`parse_field`]).
pub fn expand(token: &str, min: u32, max: u32) -> Result<String, FieldError> {
    let spec = parse_field(token)?;
    let expansion = spec.expand(Bounds::new(min, max), BoundsPolicy::Permissive)?;
    Ok(expansion.to_string())
}
