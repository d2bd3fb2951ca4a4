//! # File Filter Module
//!
//! This module contains the filters that decide which paths the traversal
//! visits: hidden paths, explicitly excluded paths, and the source file
//! extensions that make a file a candidate for checking.

use std::collections::HashSet;
use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

/// Result of a file filtering operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterResult {
  /// Whether the path should be processed
  pub should_process: bool,
  /// Reason why the path should not be processed (if any)
  pub reason: Option<String>,
}

impl FilterResult {
  /// Creates a new FilterResult indicating the path should be processed.
  pub const fn process() -> Self {
    Self {
      should_process: true,
      reason: None,
    }
  }

  /// Creates a new FilterResult indicating the path should be skipped.
  pub fn skip(reason: impl Into<String>) -> Self {
    Self {
      should_process: false,
      reason: Some(reason.into()),
    }
  }
}

/// Trait for components that filter paths based on certain criteria.
pub trait FileFilter {
  /// Determines whether a path should be processed.
  ///
  /// # Parameters
  ///
  /// * `path` - The path to check
  ///
  /// # Returns
  ///
  /// A `FilterResult` indicating whether the path should be processed and why
  /// not if applicable.
  fn should_process(&self, path: &Path) -> FilterResult;
}

/// Returns `true` if the final component of `path` starts with a dot.
///
/// Paths without a final name component (`.`, `..`, `/`) are never hidden.
pub fn is_hidden(path: &Path) -> bool {
  path
    .file_name()
    .is_some_and(|name| name.to_string_lossy().starts_with('.'))
}

/// Drops `.` components so that `./build` and `build` compare equal.
///
/// Nothing else is resolved: `..` and symlinks are kept as written.
pub fn normalize_path(path: &Path) -> PathBuf {
  path.components().filter(|c| !matches!(c, Component::CurDir)).collect()
}

/// Filter that skips dot-files and dot-directories.
pub struct HiddenFilter;

impl FileFilter for HiddenFilter {
  fn should_process(&self, path: &Path) -> FilterResult {
    if is_hidden(path) {
      FilterResult::skip("Hidden path")
    } else {
      FilterResult::process()
    }
  }
}

/// Filter that skips paths exactly equal to one of the excluded paths.
///
/// Matching is by path equality, not by prefix: a directory's descendants
/// are only left out because the traversal never descends into a skipped
/// directory.
#[derive(Debug, Clone, Default)]
pub struct ExcludeFilter {
  excluded: HashSet<PathBuf>,
}

impl ExcludeFilter {
  /// Creates a new ExcludeFilter from the given paths.
  pub fn new<I, P>(paths: I) -> Self
  where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
  {
    let excluded = paths.into_iter().map(|p| normalize_path(p.as_ref())).collect();
    Self { excluded }
  }

  /// Returns `true` if no paths are excluded.
  pub fn is_empty(&self) -> bool {
    self.excluded.is_empty()
  }
}

impl FileFilter for ExcludeFilter {
  fn should_process(&self, path: &Path) -> FilterResult {
    if !self.excluded.is_empty() && self.excluded.contains(&normalize_path(path)) {
      FilterResult::skip("Excluded path")
    } else {
      FilterResult::process()
    }
  }
}

/// Filter that only accepts files whose extension marks them as source files.
///
/// Extensions are stored without the leading dot and compared exactly.
#[derive(Debug, Clone)]
pub struct ExtensionFilter {
  extensions: Vec<String>,
}

impl ExtensionFilter {
  /// Creates a new ExtensionFilter accepting the given extensions.
  pub fn new<I, S>(extensions: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self {
      extensions: extensions.into_iter().map(Into::into).collect(),
    }
  }
}

impl FileFilter for ExtensionFilter {
  fn should_process(&self, path: &Path) -> FilterResult {
    let matches = path
      .extension()
      .and_then(OsStr::to_str)
      .is_some_and(|ext| self.extensions.iter().any(|e| e == ext));

    if matches {
      FilterResult::process()
    } else {
      FilterResult::skip("Not a source file")
    }
  }
}

/// Filter that combines multiple filters.
///
/// Filters run in insertion order; the first one that rejects a path wins.
pub struct CompositeFilter {
  filters: Vec<Box<dyn FileFilter>>,
}

impl CompositeFilter {
  /// Creates a new CompositeFilter with the given filters.
  pub fn new(filters: Vec<Box<dyn FileFilter>>) -> Self {
    Self { filters }
  }

  /// Adds a filter to this CompositeFilter.
  pub fn add_filter(&mut self, filter: Box<dyn FileFilter>) {
    self.filters.push(filter);
  }
}

impl FileFilter for CompositeFilter {
  fn should_process(&self, path: &Path) -> FilterResult {
    for filter in &self.filters {
      let result = filter.should_process(path);
      if !result.should_process {
        return result;
      }
    }
    FilterResult::process()
  }
}

/// Constructs the filter that prunes paths (and their subtrees) during
/// traversal.
///
/// # Parameters
///
/// * `include_hidden` - Whether dot-files and dot-directories are visited
/// * `excludes` - Exact paths to leave out
pub fn create_traversal_filter<P: AsRef<Path>>(include_hidden: bool, excludes: &[P]) -> CompositeFilter {
  let mut composite = CompositeFilter::new(Vec::new());
  if !include_hidden {
    composite.add_filter(Box::new(HiddenFilter));
  }
  let exclude_filter = ExcludeFilter::new(excludes);
  if !exclude_filter.is_empty() {
    composite.add_filter(Box::new(exclude_filter));
  }
  composite
}
