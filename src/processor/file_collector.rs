//! # File Collector Module
//!
//! This module walks the input paths and yields the candidate files to check.
//! The walk is lazy and depth-first; skipped directories are pruned so their
//! contents are never read.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, trace};
use walkdir::WalkDir;

use crate::file_filter::{CompositeFilter, ExtensionFilter, FileFilter, create_traversal_filter};

/// File collector for directory traversal.
///
/// The `FileCollector` holds the rules that decide which paths are visited:
/// - Hidden paths are skipped unless explicitly included
/// - Excluded paths are skipped together with everything beneath them
/// - Only regular files with a source extension are yielded
pub struct FileCollector {
  /// Filter applied to every visited path, directories included
  traversal_filter: CompositeFilter,

  /// Filter applied to regular files only
  extension_filter: ExtensionFilter,
}

impl FileCollector {
  /// Creates a new FileCollector.
  ///
  /// # Parameters
  ///
  /// * `include_hidden` - Whether dot-files and dot-directories are visited
  /// * `excludes` - Exact paths to leave out
  /// * `extension_filter` - Which files count as source files
  pub fn new<P: AsRef<Path>>(include_hidden: bool, excludes: &[P], extension_filter: ExtensionFilter) -> Self {
    Self {
      traversal_filter: create_traversal_filter(include_hidden, excludes),
      extension_filter,
    }
  }

  /// Starts a lazy traversal of `root`.
  ///
  /// `root` may be a directory or a single file; the same rules apply to it as
  /// to every descendant. A root that does not exist yields nothing.
  pub fn source_files(&self, root: &Path) -> SourceFiles<'_> {
    let walker = if root.exists() {
      debug!("Scanning: {}", root.display());
      Some(WalkDir::new(root).follow_links(true).sort_by_file_name().into_iter())
    } else {
      debug!("Skipping: {} (does not exist)", root.display());
      None
    };

    SourceFiles {
      walker,
      collector: self,
    }
  }
}

/// Lazy iterator over the candidate files under one root.
///
/// Produced by [`FileCollector::source_files`]. Any traversal error is
/// yielded as an `Err` item.
pub struct SourceFiles<'a> {
  walker: Option<walkdir::IntoIter>,
  collector: &'a FileCollector,
}

impl Iterator for SourceFiles<'_> {
  type Item = Result<PathBuf>;

  fn next(&mut self) -> Option<Self::Item> {
    let walker = self.walker.as_mut()?;

    loop {
      let entry = match walker.next()? {
        Ok(entry) => entry,
        Err(e) if is_broken_link(&e) => {
          if let Some(path) = e.path() {
            trace!("Skipping: {} (broken symlink)", path.display());
          }
          continue;
        }
        Err(e) => {
          let path = e.path().map(Path::to_path_buf).unwrap_or_default();
          return Some(Err(e).with_context(|| format!("Failed to traverse: {}", path.display())));
        }
      };

      let verdict = self.collector.traversal_filter.should_process(entry.path());
      if !verdict.should_process {
        trace!(
          "Skipping: {} ({})",
          entry.path().display(),
          verdict.reason.as_deref().unwrap_or("filtered")
        );
        if entry.file_type().is_dir() {
          walker.skip_current_dir();
        }
        continue;
      }

      if entry.file_type().is_file() && self.collector.extension_filter.should_process(entry.path()).should_process {
        return Some(Ok(entry.into_path()));
      }
    }
  }
}

/// Returns `true` if the error comes from a symlink whose target is missing.
///
/// Such an entry is neither a directory nor a file once followed. Loops and
/// permission errors are not broken links.
fn is_broken_link(error: &walkdir::Error) -> bool {
  let target_missing = error
    .io_error()
    .is_some_and(|e| e.kind() == std::io::ErrorKind::NotFound);
  target_missing && error.path().is_some_and(|path| path.symlink_metadata().is_ok())
}
