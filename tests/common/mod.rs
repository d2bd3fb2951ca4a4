#![allow(dead_code)]

use std::fs;
use std::path::Path;

use anyhow::Result;
use apache_license_check::templates::render_license_header;
use tempfile::TempDir;

/// Creates a temporary directory whose name is not a hidden path.
///
/// tempfile's default `.tmp` prefix would make the directory itself hidden,
/// so a traversal rooted there would skip everything.
pub fn workspace() -> Result<TempDir> {
  Ok(tempfile::Builder::new().prefix("license-check").tempdir()?)
}

/// Writes `content` to `dir/relative`, creating parent directories.
pub fn write_file(dir: &Path, relative: &str, content: &str) -> Result<()> {
  let path = dir.join(relative);
  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent)?;
  }
  fs::write(path, content)?;
  Ok(())
}

/// A module body carrying the full license header.
pub fn licensed_source() -> String {
  format!("{}\nimport os\n", render_license_header())
}

/// A module body carrying a copyright line followed by the license header.
pub fn licensed_source_with_copyright(copyright_line: &str) -> String {
  format!("{copyright_line}\n#\n{}\n\nimport os\n", render_license_header())
}

/// A module body with the license header where one line has been altered.
pub fn altered_license_source() -> String {
  licensed_source().replace("# under the License.", "# under the Licence.")
}
