//! # apache-license-check
//!
//! A tool that checks Python source files for the Apache License 2.0 header.
//!
//! Every source file found under the given paths must begin with a comment
//! block containing each line of the canonical ASF license notice. A
//! copyright notice can additionally be required to mention a given name.
//! Files are never modified.
//!
//! ## Features
//!
//! * Recursively scan directories, skipping hidden paths by default
//! * Exact-path exclusions that prune whole subtrees
//! * Empty files (such as bare `__init__.py`) are exempt unless requested
//! * Optional copyright substring check
//! * JSON and CSV reports of every result
//!
//! ## Usage as a Library
//!
//! ```rust,no_run
//! use apache_license_check::output::print_file_line;
//! use apache_license_check::processor::{CheckOptions, Processor};
//!
//! fn main() -> anyhow::Result<()> {
//!     let processor = Processor::new(CheckOptions {
//!         copyright: Some("Acme".to_string()),
//!         ..CheckOptions::default()
//!     });
//!
//!     let summary = processor.process(&["src"], |check| {
//!         print_file_line(check)?;
//!         Ok(())
//!     })?;
//!
//!     if !summary.success() {
//!         println!("Some files are missing license headers");
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! * [`processor`] - Walking paths, checking files, aggregating results
//! * [`license_detection`] - License and copyright matching rules
//! * [`templates`] - The license template
//! * [`output`] - Per-file output lines
//!
//! [`processor`]: crate::processor
//! [`license_detection`]: crate::license_detection
//! [`templates`]: crate::templates
//! [`output`]: crate::output

pub mod config;
pub mod file_filter;
pub mod license_detection;
pub mod logging;
pub mod output;
pub mod processor;
pub mod report;
pub mod templates;
