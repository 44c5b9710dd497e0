//! Expression runs: build, evaluate, render, and the console dialogue around them.

use std::io::{BufRead, Write};

use tracing::{debug, info, instrument};

use crate::application::{ApplicationResult, IoResultExt};
use crate::config::Settings;
use crate::domain::{format_value, ExprBuilder, ExprTree};

/// Printed after every failed run.
pub const USAGE_HINT: &str = "Please make sure your expression is a valid prefix expression using single digits (0-9) and operators (+, -, *, /).";

/// Outcome of one successful run.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub expression: String,
    pub prefix: String,
    pub infix: String,
    pub postfix: String,
    pub value: f64,
}

impl Report {
    pub fn from_tree(expression: &str, tree: &ExprTree) -> ApplicationResult<Self> {
        Ok(Self {
            expression: expression.to_string(),
            prefix: tree.render_prefix(),
            infix: tree.render_infix(),
            postfix: tree.render_postfix(),
            value: tree.evaluate()?,
        })
    }

    pub fn result_line(&self, precision: Option<usize>) -> String {
        format!(
            "Result for the expression {} is: {}",
            self.expression,
            format_value(self.value, precision)
        )
    }

    /// Write the three renderings followed by the result line.
    pub fn write_to<W: Write>(&self, out: &mut W, precision: Option<usize>) -> std::io::Result<()> {
        writeln!(out, "Prefix form: {}", self.prefix)?;
        writeln!(out)?;
        writeln!(out, "Infix form: {}", self.infix)?;
        writeln!(out)?;
        writeln!(out, "Postfix form: {}", self.postfix)?;
        writeln!(out)?;
        writeln!(out, "{}", self.result_line(precision))
    }
}

/// Build, evaluate and render one expression.
#[instrument(level = "debug", skip(settings))]
pub fn run_expression(expression: &str, settings: &Settings) -> ApplicationResult<Report> {
    let tree = ExprBuilder::new()
        .with_strict(settings.strict)
        .build(expression)
        .inspect_err(|e| debug!(position = ?e.position(), "rejected expression"))?;
    debug!(nodes = tree.len(), depth = tree.depth(), "built expression tree");
    Report::from_tree(expression, &tree)
}

/// Run an expression and print either the report or the error plus [`USAGE_HINT`].
pub fn run_and_report<W: Write>(
    expression: &str,
    settings: &Settings,
    out: &mut W,
) -> ApplicationResult<Report> {
    match run_expression(expression, settings) {
        Ok(report) => {
            report
                .write_to(out, settings.precision)
                .with_context("write report")?;
            Ok(report)
        }
        Err(e) => {
            writeln!(out, "Error: {e}").with_context("write error")?;
            writeln!(out, "{USAGE_HINT}").with_context("write error")?;
            Err(e)
        }
    }
}

/// Ask whether to type an expression or use the sample, then run it.
#[instrument(level = "debug", skip_all)]
pub fn run_interactive<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    settings: &Settings,
) -> ApplicationResult<Report> {
    writeln!(out, "Would you like to enter your own prefix expression? (yes/no)")
        .with_context("write prompt")?;
    writeln!(
        out,
        "Note: only single-digit numbers (0-9) and operators (+, -, *, /) are supported."
    )
    .with_context("write prompt")?;

    let answer = read_trimmed_line(input)?.to_lowercase();
    let expression = if answer == "yes" || answer == "y" {
        writeln!(out, "Enter your prefix expression:").with_context("write prompt")?;
        read_trimmed_line(input)?
    } else {
        writeln!(
            out,
            "Using the default expression: {}",
            settings.sample_expression
        )
        .with_context("write prompt")?;
        settings.sample_expression.clone()
    };
    info!(%expression, "running expression");

    writeln!(out).with_context("write report")?;
    run_and_report(&expression, settings, out)
}

/// Read one line; end of input reads as an empty line.
fn read_trimmed_line<R: BufRead>(input: &mut R) -> ApplicationResult<String> {
    let mut line = String::new();
    input.read_line(&mut line).with_context("read input")?;
    Ok(line.trim().to_string())
}
