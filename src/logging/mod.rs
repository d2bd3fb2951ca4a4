//! # Logging Module
//!
//! This module sets up diagnostics and color handling for the tool:
//! - Diagnostic logging through `tracing`, written to stderr so that stdout
//!   only carries the per-file results
//! - A global color mode controlling the colored status tokens
//!
//! ## Example
//!
//! ```rust
//! use apache_license_check::logging::{ColorMode, init_tracing};
//!
//! // Show debug diagnostics on stderr
//! init_tracing(2, ColorMode::Never);
//!
//! // Never color the per-file output
//! ColorMode::Never.apply();
//!
//! tracing::debug!("Checking file: {}", "module.py");
//! ```

mod modes;

pub use modes::{ColorMode, init_tracing, level_for_verbosity};
