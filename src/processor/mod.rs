//! # Processor Module
//!
//! This module contains the core functionality for checking files: walking
//! the input paths, checking each candidate file's header, and folding the
//! per-file results into an overall outcome.
//!
//! The module is organized into several submodules:
//! - [`file_io`] - Empty file detection and header line extraction
//! - [`file_collector`] - Lazy directory traversal with hidden/exclude rules
//!
//! The [`Processor`] struct is the main entry point, orchestrating the
//! submodules. Files are checked strictly one after another, and each result
//! is handed to the caller before the next file is read.

mod file_collector;
mod file_io;

use std::path::{Path, PathBuf};

use anyhow::Result;
pub use file_collector::{FileCollector, SourceFiles};
pub use file_io::{FileIO, extract_header_lines};
use serde::Serialize;
use tracing::{debug, trace};

use crate::file_filter::ExtensionFilter;
use crate::license_detection::{CopyrightDetector, LicenseDetector, TemplateLicenseDetector};

/// Extension checked when none is configured.
pub const DEFAULT_EXTENSION: &str = "py";

/// Options controlling which files are checked and which checks apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOptions {
  /// Visit dot-files and dot-directories
  pub include_hidden: bool,

  /// Require headers in files that are empty or whitespace-only
  pub include_empty: bool,

  /// Exact paths to leave out of the traversal, along with their subtrees
  pub excludes: Vec<PathBuf>,

  /// When set, the first copyright line must contain this substring
  pub copyright: Option<String>,

  /// File extensions (without the dot) that identify source files
  pub extensions: Vec<String>,
}

impl Default for CheckOptions {
  fn default() -> Self {
    Self {
      include_hidden: false,
      include_empty: false,
      excludes: Vec::new(),
      copyright: None,
      extensions: vec![DEFAULT_EXTENSION.to_string()],
    }
  }
}

/// Outcome of checking one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum CheckOutcome {
  /// The file was empty and empty files are exempt; nothing was checked
  Empty,
  /// The header was checked
  Checked {
    /// Copyright match, present only when a copyright substring is required
    #[serde(skip_serializing_if = "Option::is_none")]
    copyright: Option<bool>,
    /// License template match
    license: bool,
  },
}

/// Check result for a single candidate file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileCheck {
  pub path: PathBuf,
  #[serde(flatten)]
  pub outcome: CheckOutcome,
}

impl FileCheck {
  /// Whether the file passed every active check. Empty files always pass.
  pub const fn passed(&self) -> bool {
    match self.outcome {
      CheckOutcome::Empty => true,
      CheckOutcome::Checked { copyright, license } => license && !matches!(copyright, Some(false)),
    }
  }

  /// Whether the file was skipped as empty.
  pub const fn is_empty(&self) -> bool {
    matches!(self.outcome, CheckOutcome::Empty)
  }
}

/// Running aggregate over all checked files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CheckSummary {
  /// Total number of candidate files seen
  pub total_files: usize,
  /// Files that passed every active check
  pub files_passed: usize,
  /// Files that failed at least one check
  pub files_failed: usize,
  /// Files skipped because they were empty
  pub files_empty: usize,
}

impl CheckSummary {
  pub const fn new() -> Self {
    Self {
      total_files: 0,
      files_passed: 0,
      files_failed: 0,
      files_empty: 0,
    }
  }

  /// Folds one file's result into the aggregate.
  pub const fn record(&mut self, check: &FileCheck) {
    self.total_files += 1;
    if check.is_empty() {
      self.files_empty += 1;
    } else if check.passed() {
      self.files_passed += 1;
    } else {
      self.files_failed += 1;
    }
  }

  /// The aggregate outcome: `true` if no file failed.
  pub const fn success(&self) -> bool {
    self.files_failed == 0
  }
}

impl Default for CheckSummary {
  fn default() -> Self {
    Self::new()
  }
}

/// Processor for checking license headers in files.
///
/// The `Processor` is responsible for:
/// - Walking directories and selecting candidate files
/// - Skipping empty files unless headers are required in them
/// - Running the license check and, if requested, the copyright check
/// - Aggregating results into a [`CheckSummary`]
pub struct Processor {
  /// Traversal rules
  collector: FileCollector,

  /// Whether empty files must carry a header too
  include_empty: bool,

  /// License detector for checking the header lines
  license_detector: Box<dyn LicenseDetector>,

  /// Copyright detector, present only when a substring is required
  copyright_detector: Option<CopyrightDetector>,
}

impl Processor {
  /// Creates a new Processor using the Apache License template.
  pub fn new(options: CheckOptions) -> Self {
    let CheckOptions {
      include_hidden,
      include_empty,
      excludes,
      copyright,
      extensions,
    } = options;

    Self {
      collector: FileCollector::new(include_hidden, excludes.as_slice(), ExtensionFilter::new(extensions)),
      include_empty,
      license_detector: Box::new(TemplateLicenseDetector::default()),
      copyright_detector: copyright.map(CopyrightDetector::new),
    }
  }

  /// Replaces the license detector.
  pub fn with_license_detector(mut self, detector: Box<dyn LicenseDetector>) -> Self {
    self.license_detector = detector;
    self
  }

  /// Returns the lazy sequence of candidate files under `root`.
  pub fn source_files(&self, root: &Path) -> SourceFiles<'_> {
    self.collector.source_files(root)
  }

  /// Checks a single file.
  ///
  /// # Returns
  ///
  /// The file's [`FileCheck`], or an error if the file could not be read.
  pub fn check_file(&self, path: &Path) -> Result<FileCheck> {
    trace!("Checking file: {}", path.display());

    if !self.include_empty && FileIO::is_empty(path)? {
      debug!("Skipping header checks: {} (empty)", path.display());
      return Ok(FileCheck {
        path: path.to_path_buf(),
        outcome: CheckOutcome::Empty,
      });
    }

    let header_lines = FileIO::read_header_lines(path)?;
    trace!("{} header lines in {}", header_lines.len(), path.display());

    let copyright = self
      .copyright_detector
      .as_ref()
      .map(|detector| detector.has_copyright(&header_lines));
    let license = self.license_detector.has_license(&header_lines);

    Ok(FileCheck {
      path: path.to_path_buf(),
      outcome: CheckOutcome::Checked { copyright, license },
    })
  }

  /// Checks every candidate file under each root, in order.
  ///
  /// `on_file` is called with each result as soon as it is available, so
  /// callers can stream output. The first I/O error, from traversal, reading
  /// a file, or `on_file` itself, stops the run.
  ///
  /// # Returns
  ///
  /// The aggregate over all checked files.
  pub fn process<P, F>(&self, roots: &[P], mut on_file: F) -> Result<CheckSummary>
  where
    P: AsRef<Path>,
    F: FnMut(&FileCheck) -> Result<()>,
  {
    let mut summary = CheckSummary::new();

    for root in roots {
      for file in self.source_files(root.as_ref()) {
        let check = self.check_file(&file?)?;
        summary.record(&check);
        on_file(&check)?;
      }
    }

    debug!(
      "Checked {} files: {} passed, {} failed, {} empty",
      summary.total_files, summary.files_passed, summary.files_failed, summary.files_empty
    );

    Ok(summary)
  }
}
