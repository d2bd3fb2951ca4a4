//! # File I/O Module
//!
//! This module provides the file reading utilities for the processor: empty
//! file detection and extraction of the leading comment block.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};

use crate::templates::COMMENT_MARKER;

/// File I/O operations for the processor.
///
/// This struct provides static methods for reading files.
pub struct FileIO;

impl FileIO {
  /// Returns `true` if the file contains nothing but whitespace.
  ///
  /// # Parameters
  ///
  /// * `path` - Path to the file to read
  pub fn is_empty(path: &Path) -> Result<bool> {
    let content = std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))?;
    Ok(content.trim().is_empty())
  }

  /// Reads the trimmed comment lines at the top of a file.
  ///
  /// Reading stops at the first non-blank line that is not a comment, so
  /// only the start of the file is consumed.
  ///
  /// # Parameters
  ///
  /// * `path` - Path to the file to read
  ///
  /// # Returns
  ///
  /// The header lines in file order, without blank lines.
  pub fn read_header_lines(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;
    extract_header_lines(BufReader::new(file)).with_context(|| format!("Failed to read file: {}", path.display()))
  }
}

/// Collects the leading comment block from any buffered reader.
///
/// Lines end at `\n`, `\r\n` or a lone `\r`, and each one is trimmed.
/// Blank lines are skipped without ending the block; the first line that does
/// not start with the comment marker ends it and is not included.
pub fn extract_header_lines<R: BufRead>(reader: R) -> std::io::Result<Vec<String>> {
  let mut header_lines = Vec::new();

  'lines: for line in reader.lines() {
    let line = line?;

    // A lone carriage return also ends a line
    for segment in line.split('\r') {
      let stripped = segment.trim();

      if stripped.is_empty() {
        continue;
      }

      if !stripped.starts_with(COMMENT_MARKER) {
        break 'lines;
      }

      header_lines.push(stripped.to_string());
    }
  }

  Ok(header_lines)
}

#[cfg(test)]
mod tests {
  use std::fs;

  use tempfile::tempdir;

  use super::*;

  fn extract(content: &str) -> Vec<String> {
    extract_header_lines(content.as_bytes()).unwrap()
  }

  #[test]
  fn test_extract_stops_at_first_code_line() {
    let content = "# first\n#   second  \nimport os\n# not header\n";
    assert_eq!(extract(content), vec!["# first", "#   second"]);
  }

  #[test]
  fn test_extract_skips_blank_lines() {
    let content = "\n\n   # one\n\n\t\n# two\r\n\nx = 1\n";
    assert_eq!(extract(content), vec!["# one", "# two"]);
  }

  #[test]
  fn test_extract_splits_on_lone_carriage_return() {
    let content = "# first\r# second\r\rimport os\r# not header\r";
    assert_eq!(extract(content), vec!["# first", "# second"]);

    let mixed = "# first\r\n# second\r# third\nx = 1\n";
    assert_eq!(extract(mixed), vec!["# first", "# second", "# third"]);
  }

  #[test]
  fn test_extract_empty_and_code_only() {
    assert!(extract("").is_empty());
    assert!(extract("   \n\n").is_empty());
    assert!(extract("def main():\n    # comment\n").is_empty());
  }

  #[test]
  fn test_extract_keeps_shebang_as_comment() {
    let content = "#!/usr/bin/env python\n# header\n\nprint()\n";
    assert_eq!(extract(content), vec!["#!/usr/bin/env python", "# header"]);
  }

  #[test]
  fn test_is_empty() {
    let temp_dir = tempdir().unwrap();

    let empty = temp_dir.path().join("empty.py");
    fs::write(&empty, "").unwrap();
    assert!(FileIO::is_empty(&empty).unwrap());

    let whitespace = temp_dir.path().join("whitespace.py");
    fs::write(&whitespace, "  \n\t\n\r\n").unwrap();
    assert!(FileIO::is_empty(&whitespace).unwrap());

    let code = temp_dir.path().join("code.py");
    fs::write(&code, "\n  x = 1\n").unwrap();
    assert!(!FileIO::is_empty(&code).unwrap());
  }

  #[test]
  fn test_read_header_lines_from_file() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("module.py");
    fs::write(&path, "# Copyright 2020 Acme\n#\n# Licensed\n\nimport sys\n").unwrap();

    let lines = FileIO::read_header_lines(&path).unwrap();
    assert_eq!(lines, vec!["# Copyright 2020 Acme", "#", "# Licensed"]);
  }

  #[test]
  fn test_missing_file_is_an_error() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("missing.py");

    let err = FileIO::read_header_lines(&path).unwrap_err();
    assert!(err.to_string().contains("missing.py"));
    assert!(FileIO::is_empty(&path).is_err());
  }
}
