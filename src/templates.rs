//! # Templates Module
//!
//! The license header every checked file must carry. The template is fixed
//! for the lifetime of the process: it is the Apache License 2.0 notice as
//! recommended by the ASF, written with `#` line comments.

/// Marker that starts a comment line in the checked source files.
pub const COMMENT_MARKER: &str = "#";

/// Prefix identifying a copyright notice line.
pub const COPYRIGHT_MARKER: &str = "# Copyright";

/// The canonical Apache License 2.0 header, one trimmed comment line per
/// entry.
pub const APACHE_LICENSE_HEADER: &[&str] = &[
  "# Licensed to the Apache Software Foundation (ASF) under one",
  "# or more contributor license agreements.  See the NOTICE file",
  "# distributed with this work for additional information",
  "# regarding copyright ownership.  The ASF licenses this file",
  "# to you under the Apache License, Version 2.0 (the",
  "# \"License\"); you may not use this file except in compliance",
  "# with the License.  You may obtain a copy of the License at",
  "#",
  "#   http://www.apache.org/licenses/LICENSE-2.0",
  "#",
  "# Unless required by applicable law or agreed to in writing,",
  "# software distributed under the License is distributed on an",
  "# \"AS IS\" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY",
  "# KIND, either express or implied.  See the License for the",
  "# specific language governing permissions and limitations",
  "# under the License.",
];

/// Renders the license header as file text, one line per template entry.
///
/// Mostly useful for producing fixtures and documentation.
pub fn render_license_header() -> String {
  let mut header = APACHE_LICENSE_HEADER.join("\n");
  header.push('\n');
  header
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_template_lines_are_trimmed_comments() {
    for line in APACHE_LICENSE_HEADER {
      assert_eq!(*line, line.trim());
      assert!(line.starts_with(COMMENT_MARKER), "not a comment line: {line}");
    }
  }

  #[test]
  fn test_render_license_header() {
    let rendered = render_license_header();
    assert_eq!(rendered.lines().count(), APACHE_LICENSE_HEADER.len());
    assert!(rendered.ends_with("# under the License.\n"));
  }
}
