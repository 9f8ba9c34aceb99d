//! Handler for the `parse` subcommand.
//!
//! Expands each field of a cron expression and prints either the
//! labeled table or JSON to stdout. Nothing is printed on failure.

use std::io::Write;

use anyhow::{Context, Result};
use tracing::debug;

use cron_parse::core::field::BoundsPolicy;
use cron_parse::display::{json_printer, table};
use cron_parse::parse_expression;

use crate::cli::ParseArgs;

/// Execute the `parse` subcommand with the given arguments.
pub fn execute(args: &ParseArgs) -> Result<()> {
    let output = render(args)?;
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .and_then(|()| stdout.flush())
        .context("failed to write output")
}

/// Parse the expression and render it in the requested format.
fn render(args: &ParseArgs) -> Result<String> {
    let policy = if args.strict {
        BoundsPolicy::Strict
    } else {
        BoundsPolicy::Permissive
    };
    debug!(input = %args.expression, json = args.json, "parse command");

    let expression = parse_expression(&args.expression, policy)?;

    if args.json {
        let mut rendered = json_printer::render_json(&expression)
            .context("failed to serialize expression as JSON")?;
        rendered.push('\n');
        Ok(rendered)
    } else {
        Ok(table::render_table(&expression))
    }
}
