//! # Output Module
//!
//! This module centralizes the user-facing per-file output. Each checked
//! file produces exactly one line on stdout:
//!
//! ```text
//! <path> [EMPTY] [Copyright: YES|NO] License: YES|NO
//! ```
//!
//! Status tokens are colored (YES green, NO red, EMPTY yellow) when color
//! output is enabled; the formatting itself does not depend on the terminal.

use std::fmt;
use std::io::{self, Write};

use owo_colors::{OwoColorize, Stream};

use crate::processor::{CheckOutcome, FileCheck};

/// Display status of a single check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
  Pass,
  Fail,
  Empty,
}

impl Status {
  pub const fn from_match(matched: bool) -> Self {
    if matched { Self::Pass } else { Self::Fail }
  }

  /// The uncolored token for this status.
  pub const fn token(self) -> &'static str {
    match self {
      Self::Pass => "YES",
      Self::Fail => "NO",
      Self::Empty => "EMPTY",
    }
  }
}

impl fmt::Display for Status {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.token())
  }
}

/// Paints a status token for stdout, honoring the active color mode.
pub fn paint_status(status: Status) -> String {
  let token = status.token();
  match status {
    Status::Pass => token.if_supports_color(Stream::Stdout, |t| t.green()).to_string(),
    Status::Fail => token.if_supports_color(Stream::Stdout, |t| t.red()).to_string(),
    Status::Empty => token.if_supports_color(Stream::Stdout, |t| t.yellow()).to_string(),
  }
}

/// Formats the output line for a file, with colors as configured.
pub fn format_file_line(check: &FileCheck) -> String {
  render_file_line(check, paint_status)
}

/// Formats the output line for a file using `paint` to render each status.
pub fn render_file_line<F>(check: &FileCheck, paint: F) -> String
where
  F: Fn(Status) -> String,
{
  let mut line = check.path.display().to_string();

  match check.outcome {
    CheckOutcome::Empty => {
      line.push(' ');
      line.push_str(&paint(Status::Empty));
    }
    CheckOutcome::Checked { copyright, license } => {
      if let Some(copyright) = copyright {
        line.push_str(" Copyright: ");
        line.push_str(&paint(Status::from_match(copyright)));
      }
      line.push_str(" License: ");
      line.push_str(&paint(Status::from_match(license)));
    }
  }

  line
}

/// Prints the output line for a file to stdout.
///
/// Stdout is line buffered, so each line is visible as soon as the file has
/// been checked.
pub fn print_file_line(check: &FileCheck) -> io::Result<()> {
  writeln!(io::stdout().lock(), "{}", format_file_line(check))
}
