//! # License Detection Module
//!
//! This module contains the matching rules applied to a file's header lines:
//! the license template check and the copyright notice check. The license
//! check sits behind a trait so the processor can be given a different
//! detector without changing how files are walked and reported.

use std::collections::HashSet;

use crate::templates::{APACHE_LICENSE_HEADER, COPYRIGHT_MARKER};

/// Trait for license detectors.
///
/// Implementations decide whether the header lines extracted from a file
/// carry the expected license.
pub trait LicenseDetector {
  /// Checks if the header lines contain the license.
  ///
  /// # Parameters
  ///
  /// * `header_lines` - Trimmed comment lines from the top of a file
  fn has_license(&self, header_lines: &[String]) -> bool;
}

/// Detects a license by requiring every template line to be present.
///
/// Each template line must appear somewhere among the header lines. Order,
/// contiguity and duplicates are not checked, so a copyright notice or other
/// comment may sit before, after or between the template lines.
pub struct TemplateLicenseDetector {
  template: &'static [&'static str],
}

impl TemplateLicenseDetector {
  /// Creates a detector for the given template lines.
  pub const fn new(template: &'static [&'static str]) -> Self {
    Self { template }
  }
}

impl Default for TemplateLicenseDetector {
  fn default() -> Self {
    Self::new(APACHE_LICENSE_HEADER)
  }
}

impl LicenseDetector for TemplateLicenseDetector {
  fn has_license(&self, header_lines: &[String]) -> bool {
    let present: HashSet<&str> = header_lines.iter().map(String::as_str).collect();
    self.template.iter().all(|line| present.contains(line))
  }
}

/// Detects a copyright notice containing a required substring.
#[derive(Debug, Clone)]
pub struct CopyrightDetector {
  required: String,
}

impl CopyrightDetector {
  pub fn new(required: impl Into<String>) -> Self {
    Self {
      required: required.into(),
    }
  }

  /// Checks the first copyright line of the header.
  ///
  /// Only the first line starting with `# Copyright` is considered; it
  /// passes if it contains the required substring. A header without such a
  /// line fails.
  pub fn has_copyright(&self, header_lines: &[String]) -> bool {
    header_lines
      .iter()
      .find(|line| line.starts_with(COPYRIGHT_MARKER))
      .is_some_and(|line| line.contains(&self.required))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn lines(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
  }

  fn template_lines() -> Vec<String> {
    lines(APACHE_LICENSE_HEADER)
  }

  #[test]
  fn test_exact_template_matches() {
    let detector = TemplateLicenseDetector::default();
    assert!(detector.has_license(&template_lines()));
  }

  #[test]
  fn test_copyright_line_anywhere_still_matches() {
    let detector = TemplateLicenseDetector::default();
    let copyright = "# Copyright 2020 Acme".to_string();

    for position in 0..=APACHE_LICENSE_HEADER.len() {
      let mut header = template_lines();
      header.insert(position, copyright.clone());
      assert!(detector.has_license(&header), "failed with copyright at {position}");
    }
  }

  #[test]
  fn test_missing_or_altered_line_fails() {
    let detector = TemplateLicenseDetector::default();

    for index in 0..APACHE_LICENSE_HEADER.len() {
      let mut header = template_lines();
      header.remove(index);
      // Dropping one of the duplicated bare "#" lines leaves the other in place
      let expected = APACHE_LICENSE_HEADER[index] == "#";
      assert_eq!(detector.has_license(&header), expected, "removed line {index}");
    }

    let mut altered = template_lines();
    altered[0] = "# Licensed to the Apache Software Foundation (ASF) under two".to_string();
    assert!(!detector.has_license(&altered));

    assert!(!detector.has_license(&[]));
  }

  #[test]
  fn test_reordered_template_matches() {
    let detector = TemplateLicenseDetector::default();
    let mut header = template_lines();
    header.reverse();
    assert!(detector.has_license(&header));
  }

  #[test]
  fn test_custom_template() {
    static TEMPLATE: &[&str] = &["# SPDX-License-Identifier: MIT"];
    let detector = TemplateLicenseDetector::new(TEMPLATE);

    assert!(detector.has_license(&lines(&["# Copyright Acme", "# SPDX-License-Identifier: MIT"])));
    assert!(!detector.has_license(&template_lines()));
  }

  #[test]
  fn test_copyright_first_line_decides() {
    let detector = CopyrightDetector::new("Acme");

    assert!(detector.has_copyright(&lines(&["# Copyright 2020 Acme", "#"])));
    assert!(detector.has_copyright(&lines(&["# header", "# Copyright 2019-2020 Acme Ltd"])));

    // A later matching line cannot rescue a non-matching first one
    assert!(!detector.has_copyright(&lines(&["# Copyright 2020 Other", "# Copyright 2020 Acme"])));

    // And a later non-matching line cannot spoil a matching first one
    assert!(detector.has_copyright(&lines(&["# Copyright 2020 Acme", "# Copyright 2020 Other"])));
  }

  #[test]
  fn test_copyright_absent_fails() {
    let detector = CopyrightDetector::new("Acme");

    assert!(!detector.has_copyright(&[]));
    assert!(!detector.has_copyright(&template_lines()));
    // The marker is case-sensitive and must start the line
    assert!(!detector.has_copyright(&lines(&["# copyright 2020 Acme"])));
    assert!(!detector.has_copyright(&lines(&["# (c) Copyright 2020 Acme"])));
  }
}
