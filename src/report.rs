//! # Report Module
//!
//! This module writes a machine-readable record of a check run in JSON or
//! CSV. It captures every checked file's result together with a summary of
//! the run.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Local;
use serde::Serialize;

use crate::processor::{CheckOutcome, CheckSummary, FileCheck};

/// Supported report formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
  /// JSON format for machine readability
  Json,
  /// CSV format for spreadsheet compatibility
  Csv,
}

impl std::fmt::Display for ReportFormat {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      ReportFormat::Json => write!(f, "JSON"),
      ReportFormat::Csv => write!(f, "CSV"),
    }
  }
}

/// Summary section of a report
#[derive(Debug, Clone, Serialize)]
pub struct ReportSummary {
  #[serde(flatten)]
  pub counts: CheckSummary,
  /// Whether every checked file passed
  pub success: bool,
  /// Processing time in seconds
  #[serde(rename = "processing_time_seconds")]
  pub processing_time_secs: f64,
  /// When the report was generated, as `YYYY-MM-DD HH:MM:SS` local time
  pub generated_at: String,
}

impl ReportSummary {
  pub fn new(counts: CheckSummary, processing_time: Duration) -> Self {
    Self {
      counts,
      success: counts.success(),
      processing_time_secs: processing_time.as_secs_f64(),
      generated_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
    }
  }
}

#[derive(Serialize)]
struct JsonReport<'a> {
  summary: &'a ReportSummary,
  files: &'a [FileCheck],
}

/// Report Generator for writing check reports
pub struct ReportGenerator<'a> {
  /// Format of the report to generate
  format: ReportFormat,
  /// Path where the report will be saved
  output_path: &'a Path,
}

impl<'a> ReportGenerator<'a> {
  /// Create a new report generator
  ///
  /// # Parameters
  ///
  /// * `format` - The format to use for the report
  /// * `output_path` - The path where the report will be saved
  pub const fn new(format: ReportFormat, output_path: &'a Path) -> Self {
    Self { format, output_path }
  }

  /// Renders the report and writes it to the output path.
  pub fn generate(&self, files: &[FileCheck], summary: &ReportSummary) -> Result<()> {
    let content = self.render(files, summary)?;

    fs::write(self.output_path, content)
      .with_context(|| format!("Failed to write report to {}", self.output_path.display()))
  }

  /// Renders the report content without writing it.
  pub fn render(&self, files: &[FileCheck], summary: &ReportSummary) -> Result<String> {
    match self.format {
      ReportFormat::Json => Self::render_json(files, summary),
      ReportFormat::Csv => Ok(Self::render_csv(files, summary)),
    }
  }

  fn render_json(files: &[FileCheck], summary: &ReportSummary) -> Result<String> {
    let report = JsonReport { summary, files };
    serde_json::to_string_pretty(&report).context("Failed to serialize JSON report")
  }

  fn render_csv(files: &[FileCheck], summary: &ReportSummary) -> String {
    let mut csv = String::from("file_path,status,copyright,license\n");

    for file in files {
      // Escape commas in path
      let path = file.path.to_string_lossy().replace(',', "%2C");
      let (status, copyright, license) = match file.outcome {
        CheckOutcome::Empty => ("empty", String::new(), String::new()),
        CheckOutcome::Checked { copyright, license } => (
          if file.passed() { "passed" } else { "failed" },
          copyright.map(|c| c.to_string()).unwrap_or_default(),
          license.to_string(),
        ),
      };
      let _ = writeln!(csv, "{path},{status},{copyright},{license}");
    }

    let counts = &summary.counts;
    csv.push_str("\n# Summary\n");
    let _ = writeln!(csv, "Total files,{}", counts.total_files);
    let _ = writeln!(csv, "Files passed,{}", counts.files_passed);
    let _ = writeln!(csv, "Files failed,{}", counts.files_failed);
    let _ = writeln!(csv, "Files empty,{}", counts.files_empty);
    let _ = writeln!(csv, "Success,{}", summary.success);
    let _ = writeln!(csv, "Processing time (seconds),{:.2}", summary.processing_time_secs);
    let _ = writeln!(csv, "Generated on,{}", summary.generated_at);

    csv
  }
}

#[cfg(test)]
mod tests {
  use std::path::PathBuf;

  use super::*;

  fn sample() -> (Vec<FileCheck>, ReportSummary) {
    let files = vec![
      FileCheck {
        path: PathBuf::from("pkg/good.py"),
        outcome: CheckOutcome::Checked {
          copyright: Some(true),
          license: true,
        },
      },
      FileCheck {
        path: PathBuf::from("pkg/bad,name.py"),
        outcome: CheckOutcome::Checked {
          copyright: Some(true),
          license: false,
        },
      },
      FileCheck {
        path: PathBuf::from("pkg/__init__.py"),
        outcome: CheckOutcome::Empty,
      },
    ];

    let mut counts = CheckSummary::new();
    for file in &files {
      counts.record(file);
    }
    (files, ReportSummary::new(counts, Duration::from_millis(1500)))
  }

  #[test]
  fn test_json_report() {
    let (files, summary) = sample();
    let output_path = PathBuf::from("unused.json");
    let content = ReportGenerator::new(ReportFormat::Json, &output_path)
      .render(&files, &summary)
      .unwrap();

    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value["summary"]["total_files"], 3);
    assert_eq!(value["summary"]["files_failed"], 1);
    assert_eq!(value["summary"]["success"], false);
    assert_eq!(value["summary"]["processing_time_seconds"], 1.5);
    assert_eq!(value["files"][0]["path"], "pkg/good.py");
    assert_eq!(value["files"][0]["license"], true);
    assert_eq!(value["files"][2]["status"], "empty");
  }

  #[test]
  fn test_csv_report() {
    let (files, summary) = sample();
    let output_path = PathBuf::from("unused.csv");
    let content = ReportGenerator::new(ReportFormat::Csv, &output_path)
      .render(&files, &summary)
      .unwrap();

    let mut lines = content.lines();
    assert_eq!(lines.next(), Some("file_path,status,copyright,license"));
    assert_eq!(lines.next(), Some("pkg/good.py,passed,true,true"));
    assert_eq!(lines.next(), Some("pkg/bad%2Cname.py,failed,true,false"));
    assert_eq!(lines.next(), Some("pkg/__init__.py,empty,,"));
    assert!(content.contains("Files failed,1\n"));
    assert!(content.contains("Processing time (seconds),1.50\n"));
  }

  #[test]
  fn test_generate_writes_file() {
    let (files, summary) = sample();
    let temp_dir = tempfile::tempdir().unwrap();
    let output_path = temp_dir.path().join("report.json");

    ReportGenerator::new(ReportFormat::Json, &output_path)
      .generate(&files, &summary)
      .unwrap();
    assert!(output_path.exists());

    let missing_dir = temp_dir.path().join("missing").join("report.json");
    let err = ReportGenerator::new(ReportFormat::Json, &missing_dir)
      .generate(&files, &summary)
      .unwrap_err();
    assert!(err.to_string().contains("Failed to write report"));
  }
}
