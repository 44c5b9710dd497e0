//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use std::fmt::Display;
use std::io::{self, Write};

use colored::Colorize;

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print hint (yellow "hint:" prefix) to stderr
pub fn hint(msg: &(impl Display + ?Sized)) {
    eprintln!("{}: {}", "hint".yellow(), msg);
}

/// Write success status (green checkmark)
pub fn success(out: &mut impl Write, msg: &(impl Display + ?Sized)) -> io::Result<()> {
    writeln!(out, "{} {}", "✓".green(), msg)
}

/// Write completed action (green label)
pub fn action(out: &mut impl Write, label: &str, msg: &(impl Display + ?Sized)) -> io::Result<()> {
    writeln!(out, "{}: {}", label.green(), msg)
}

/// Write plain output (no color, for data)
pub fn info(out: &mut impl Write, msg: &(impl Display + ?Sized)) -> io::Result<()> {
    writeln!(out, "{}", msg)
}
